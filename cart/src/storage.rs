//! Storage adapter over a persistent key-value backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser exposes `localStorage` as a string-keyed, string-valued store
//! that can be disabled or full. [`KeyValueStore`] models that surface so the
//! cart logic can run against [`MemoryStore`] in tests and on the server.
//!
//! ERROR HANDLING
//! ==============
//! Reads never fail: a missing key, an unavailable backend, or malformed JSON
//! all read as an empty cart. Writes report a [`StorageError`] so callers can
//! decide whether to warn; the cart keeps working for the current page either
//! way.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::item::{CartItem, ItemId};

/// Storage key holding the cart as a JSON array.
pub const CART_KEY: &str = "cyberduck:cart";

/// Error returned by [`KeyValueStore`] writes.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// The backend cannot be reached (no window, storage disabled).
    #[error("storage is unavailable")]
    Unavailable,
    /// The backend refused the write, e.g. quota exceeded.
    #[error("failed to write {key}: {reason}")]
    WriteFailed { key: String, reason: String },
    /// The value could not be encoded as JSON.
    #[error("failed to encode value: {0}")]
    Encode(String),
}

/// String key-value backend, e.g. `window.localStorage`.
pub trait KeyValueStore {
    /// Read `key`; `Ok(None)` when it was never written.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] when the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backend is unavailable or refuses
    /// the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key` if present.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] when the backend cannot be reached.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// In-memory backend.
///
/// Clones share the same entries, which lets tests hold a handle next to the
/// store under test. Failure switches simulate a full or disabled browser
/// storage.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
    fail_writes: Rc<Cell<bool>>,
    unavailable: Rc<Cell<bool>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every `set` fail as if the quota were exceeded.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    /// Make every operation fail as if storage were disabled.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.set(unavailable);
    }

    /// Raw stored value, bypassing the failure switches.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.unavailable.get() {
            return Err(StorageError::Unavailable);
        }
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.unavailable.get() {
            return Err(StorageError::Unavailable);
        }
        if self.fail_writes.get() {
            return Err(StorageError::WriteFailed {
                key: key.to_owned(),
                reason: "quota exceeded".to_owned(),
            });
        }
        self.entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        if self.unavailable.get() {
            return Err(StorageError::Unavailable);
        }
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// JSON persistence of the cart (and related hand-off values) on top of a
/// [`KeyValueStore`].
#[derive(Clone, Debug, Default)]
pub struct StorageAdapter<S> {
    store: S,
}

impl<S: KeyValueStore> StorageAdapter<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Current cart, or empty when nothing valid is stored.
    ///
    /// Entries without an id get one assigned, and the normalized cart is
    /// written back so ids stay stable across reads.
    pub fn read_cart(&self) -> Vec<CartItem> {
        let raw = match self.store.get(CART_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                log::warn!("cart storage read failed, using empty cart: {err}");
                return Vec::new();
            }
        };

        let mut items = match decode_cart(&raw) {
            Ok(items) => items,
            Err(err) => {
                log::warn!("stored cart is not an item array, using empty cart: {err}");
                return Vec::new();
            }
        };

        let assigned = assign_missing_ids(&mut items);
        if assigned > 0 {
            log::debug!("assigned ids to {assigned} legacy cart entries");
            if let Err(err) = self.write_cart(&items) {
                log::warn!("could not persist assigned cart ids: {err}");
            }
        }
        items
    }

    /// Persist `items` as the whole cart.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when encoding fails or the backend refuses
    /// the write.
    pub fn write_cart(&self, items: &[CartItem]) -> Result<(), StorageError> {
        self.write_json(CART_KEY, &items)
    }

    /// Read and decode a JSON value; `None` when absent or malformed.
    pub fn read_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.store.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(err) => {
                log::warn!("storage read of {key} failed: {err}");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                log::warn!("stored value under {key} is malformed: {err}");
                None
            }
        }
    }

    /// Encode `value` as JSON and store it under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when encoding fails or the backend refuses
    /// the write.
    pub fn write_json<T: Serialize + ?Sized>(
        &self,
        key: &str,
        value: &T,
    ) -> Result<(), StorageError> {
        let raw = serde_json::to_string(value)
            .map_err(|e| StorageError::Encode(e.to_string()))?;
        self.store.set(key, &raw)
    }
}

/// Decode a stored cart. Anything other than a JSON array of entries is an
/// error.
///
/// # Errors
///
/// Returns the `serde_json` error for malformed or non-array input.
pub fn decode_cart(raw: &str) -> Result<Vec<CartItem>, serde_json::Error> {
    serde_json::from_str(raw)
}

fn assign_missing_ids(items: &mut [CartItem]) -> usize {
    let mut assigned = 0;
    for (index, item) in items.iter_mut().enumerate() {
        if item.id.is_unassigned() {
            item.id = ItemId::for_legacy(index, item);
            assigned += 1;
        }
    }
    assigned
}

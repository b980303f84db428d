//! `localStorage` backend for the cart storage adapter.
//!
//! SYSTEM CONTEXT
//! ==============
//! The `cart` crate persists through the `KeyValueStore` trait. In the
//! browser this maps onto `window.localStorage`; during SSR there is no
//! storage, so reads see nothing and writes report `Unavailable`.
//!
//! TRADE-OFFS
//! ==========
//! The window and storage handles are looked up on every call instead of
//! cached, which keeps the type `Copy` and lets listeners hold their own
//! adapter without sharing state.

#[cfg(test)]
#[path = "browser_storage_test.rs"]
mod browser_storage_test;

use cart::{KeyValueStore, StorageAdapter, StorageError};

/// Handle to `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

/// Storage adapter over the browser backend.
pub fn adapter() -> StorageAdapter<BrowserStorage> {
    StorageAdapter::new(BrowserStorage)
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .get_item(key)
                .map_err(|_| StorageError::Unavailable)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Ok(None)
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .set_item(key, value)
                .map_err(|err| StorageError::WriteFailed {
                    key: key.to_owned(),
                    reason: describe(&err),
                })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .remove_item(key)
                .map_err(|_| StorageError::Unavailable)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

/// Browsers throw a `DOMException` (e.g. `QuotaExceededError`) on failed writes.
#[cfg(feature = "hydrate")]
fn describe(err: &wasm_bindgen::JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

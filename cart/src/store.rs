//! Cart store: read-modify-write operations plus change listeners.
//!
//! DESIGN
//! ======
//! The store keeps no cart copy of its own; every operation reads the
//! persisted cart, applies one change, and writes it back. Listeners are
//! registered explicitly and run synchronously, in registration order, before
//! the mutating call returns. There is no queuing or coalescing, so rapid
//! mutations each produce their own notification.
//!
//! A failed write still notifies: listeners re-read storage, so they always
//! reflect what actually persisted.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::item::{CartItem, ItemId};
use crate::storage::{KeyValueStore, StorageAdapter, StorageError};

/// What a successful mutation did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CartChange {
    Added(ItemId),
    Removed(ItemId),
    Cleared,
}

/// Handle returned by [`CartStore::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Rc<dyn Fn(&CartChange)>;

pub struct CartStore<S> {
    adapter: StorageAdapter<S>,
    listeners: RefCell<Vec<(ListenerId, Listener)>>,
    next_listener: Cell<u64>,
}

impl<S: KeyValueStore> CartStore<S> {
    pub fn new(store: S) -> Self {
        Self::from_adapter(StorageAdapter::new(store))
    }

    pub fn from_adapter(adapter: StorageAdapter<S>) -> Self {
        Self {
            adapter,
            listeners: RefCell::new(Vec::new()),
            next_listener: Cell::new(0),
        }
    }

    pub fn adapter(&self) -> &StorageAdapter<S> {
        &self.adapter
    }

    /// Fresh read of the persisted cart.
    pub fn items(&self) -> Vec<CartItem> {
        self.adapter.read_cart()
    }

    pub fn len(&self) -> usize {
        self.items().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    /// Append `item`, assigning an id if it has none.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the cart could not be persisted.
    /// Listeners are notified regardless.
    pub fn add_item(&self, mut item: CartItem) -> Result<ItemId, StorageError> {
        if item.id.is_unassigned() {
            item.id = ItemId::generate();
        }
        let id = item.id.clone();

        let mut items = self.adapter.read_cart();
        items.push(item);
        let written = self.adapter.write_cart(&items);
        log::debug!("cart add {id} -> {} entries", items.len());

        self.notify(&CartChange::Added(id.clone()));
        written.map(|()| id)
    }

    /// Remove the entry with `id`. Unknown ids change nothing and notify no
    /// one.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the shortened cart could not be
    /// persisted. Listeners are notified regardless.
    pub fn remove_item(&self, id: &ItemId) -> Result<Option<CartItem>, StorageError> {
        let mut items = self.adapter.read_cart();
        let Some(index) = items.iter().position(|item| &item.id == id) else {
            return Ok(None);
        };
        self.remove_from(&mut items, index)
    }

    /// Remove the entry at `index`. Out-of-range indexes change nothing and
    /// notify no one.
    ///
    /// # Errors
    ///
    /// Same as [`CartStore::remove_item`].
    pub fn remove_at(&self, index: usize) -> Result<Option<CartItem>, StorageError> {
        let mut items = self.adapter.read_cart();
        if index >= items.len() {
            return Ok(None);
        }
        self.remove_from(&mut items, index)
    }

    /// Empty the cart.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the empty cart could not be persisted.
    /// Listeners are notified regardless.
    pub fn clear(&self) -> Result<(), StorageError> {
        let written = self.adapter.write_cart(&[]);
        log::debug!("cart cleared");
        self.notify(&CartChange::Cleared);
        written
    }

    /// Register `listener` for every subsequent change.
    pub fn subscribe<F>(&self, listener: F) -> ListenerId
    where
        F: Fn(&CartChange) + 'static,
    {
        let id = ListenerId(self.next_listener.get());
        self.next_listener.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, Rc::new(listener)));
        id
    }

    /// Drop a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(registered, _)| *registered != id);
        listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    fn remove_from(
        &self,
        items: &mut Vec<CartItem>,
        index: usize,
    ) -> Result<Option<CartItem>, StorageError> {
        let removed = items.remove(index);
        let written = self.adapter.write_cart(items);
        log::debug!("cart remove {} -> {} entries", removed.id, items.len());

        self.notify(&CartChange::Removed(removed.id.clone()));
        written.map(|()| Some(removed))
    }

    fn notify(&self, change: &CartChange) {
        // Snapshot first so listeners may re-enter the store.
        let listeners: Vec<Listener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, l)| Rc::clone(l))
            .collect();
        for listener in listeners {
            listener(change);
        }
    }
}

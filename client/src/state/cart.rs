//! Cart context shared by the floating widget and every cart writer.
//!
//! DESIGN
//! ======
//! One `CartStore` over `localStorage` lives in a local (non-`Send`) stored
//! value. The view starts empty and is loaded once the app mounts in the
//! browser. At construction the context subscribes a listener that re-reads
//! storage into the `view` signal and pulses the cart button, so writers
//! (product page, gift-card dialog, remove and clear controls) only call the
//! store and never repaint anything themselves.

#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

use cart::{CartItem, CartStore, CartView, ItemId, StorageError};
use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;

use crate::util::browser_storage::{self, BrowserStorage};

/// Route the enabled checkout link points at.
pub const CHECKOUT_ROUTE: &str = "/checkout";

#[derive(Clone, Copy)]
pub struct CartContext {
    store: StoredValue<CartStore<BrowserStorage>, LocalStorage>,
    /// Last projection of the persisted cart.
    pub view: RwSignal<CartView>,
    /// Whether the dropdown panel is shown.
    pub open: RwSignal<bool>,
    /// True while the cart button carries the pulse class.
    pub pulse: RwSignal<bool>,
}

impl CartContext {
    pub fn new() -> Self {
        let store = CartStore::new(BrowserStorage);
        // Server HTML always shows an empty cart; the browser fills it in after
        // hydration so both renders agree.
        let view = RwSignal::new(project(&[]));
        let pulse = RwSignal::new(false);

        #[cfg(feature = "hydrate")]
        Effect::new(move || {
            let items = browser_storage::adapter().read_cart();
            view.set(project(&items));
        });

        let reader = browser_storage::adapter();
        store.subscribe(move |change| {
            log::debug!("cart changed: {change:?}");
            view.set(project(&reader.read_cart()));
            start_pulse(pulse);
        });

        Self {
            store: StoredValue::new_local(store),
            view,
            open: RwSignal::new(false),
            pulse,
        }
    }

    /// Append `item`. Returns its id when it was persisted.
    pub fn add(&self, item: CartItem) -> Option<ItemId> {
        self.store
            .with_value(|store| report("add", store.add_item(item)))
    }

    pub fn remove(&self, id: &ItemId) {
        self.store
            .with_value(|store| report("remove", store.remove_item(id)));
    }

    pub fn clear(&self) {
        self.store
            .with_value(|store| report("clear", store.clear()));
    }

    /// Current persisted entries.
    pub fn items(&self) -> Vec<CartItem> {
        self.store.with_value(CartStore::items)
    }

    /// Re-read storage into `view` without pulsing, e.g. when the dropdown
    /// opens after another tab changed the cart.
    pub fn refresh(&self) {
        self.view.set(project(&self.items()));
    }
}

impl Default for CartContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Create the cart context and provide it to descendants.
pub fn provide_cart_context() -> CartContext {
    let cart = CartContext::new();
    provide_context(cart);
    cart
}

/// Cart context provided by [`provide_cart_context`].
pub fn use_cart() -> CartContext {
    expect_context::<CartContext>()
}

pub(crate) fn project(items: &[CartItem]) -> CartView {
    CartView::project(items, CHECKOUT_ROUTE)
}

/// Log a failed cart write and keep going; the widget re-reads storage, so it
/// already shows what actually persisted.
pub(crate) fn report<T>(operation: &str, result: Result<T, StorageError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("cart {operation} not persisted: {err}");
            None
        }
    }
}

fn start_pulse(pulse: RwSignal<bool>) {
    pulse.set(true);
    #[cfg(feature = "hydrate")]
    {
        use cart::view::PULSE_DURATION_MS;
        use gloo_timers::callback::Timeout;

        let timeout = Timeout::new(PULSE_DURATION_MS, move || pulse.set(false));
        timeout.forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        pulse.set(false);
    }
}

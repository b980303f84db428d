//! Shared cart model for the Cyberduck storefront.
//!
//! This crate owns everything about the shopping cart that does not touch the
//! DOM: the persisted item schema, locale-aware price handling, the storage
//! adapter over a key-value backend, the mutating store with its change
//! listeners, and the pure projection the UI paints from.
//!
//! DESIGN
//! ======
//! The browser's `localStorage` is reached only through [`KeyValueStore`], so
//! the same store runs against an in-memory backend in tests and during SSR.
//! The `client` crate supplies the browser backend and the Leptos widget; the
//! notification server reuses [`checkout`] for its request schema.

pub mod checkout;
pub mod gift;
pub mod item;
pub mod price;
pub mod product;
pub mod storage;
pub mod store;
pub mod view;

pub use checkout::{CheckoutNotice, NoticeItem};
pub use gift::{GiftCard, GiftCardError};
pub use item::{CartItem, ItemId};
pub use price::Price;
pub use product::ProductSelection;
pub use storage::{KeyValueStore, MemoryStore, StorageAdapter, StorageError};
pub use store::{CartChange, CartStore, ListenerId};
pub use view::{CartLine, CartView, CheckoutLink};

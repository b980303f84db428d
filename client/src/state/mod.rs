//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The storefront has one piece of shared state: the cart. Page-local form
//! state (checkout contact fields, gift-card input) stays in the components
//! that own it.

pub mod cart;

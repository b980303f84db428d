//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its route-scoped form state and reaches the cart through
//! `state::cart`; the floating cart widget itself lives outside the routes.

pub mod checkout;
pub mod home;
pub mod product;

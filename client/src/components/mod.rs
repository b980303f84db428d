//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render storefront chrome (the floating cart, catalog cards, the
//! gift-card dialog) and reach the cart only through `state::cart`.

pub mod cart_widget;
pub mod gift_card_dialog;
pub mod product_card;

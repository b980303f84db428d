//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` posts checkout notifications to the storefront server. The request
//! schema is `cart::CheckoutNotice`, shared with the server.

pub mod api;

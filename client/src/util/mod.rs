//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic so the SSR build compiles and behaves without a window.

pub mod browser_storage;
pub mod dialog;

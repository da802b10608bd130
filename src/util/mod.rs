//! Utility helpers shared across page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules hold the logic that does not touch the DOM, so it can be
//! exercised natively without a browser.

pub mod debounce;
pub mod scheduler;
pub mod validate;

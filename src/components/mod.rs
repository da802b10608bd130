//! Page components bound to server-rendered markup.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each component owns one feature of the page. Pure decisions live next to
//! the `hydrate`-gated glue that applies them to the DOM, and every component
//! degrades to a no-op when its markup is absent.

pub mod actions;
pub mod availability;
pub mod feedback;
pub mod forms;
pub mod nav;
pub mod notifier;
#[cfg(feature = "hydrate")]
pub mod photo;
pub mod search;
pub mod statistics;
pub mod tooltip;

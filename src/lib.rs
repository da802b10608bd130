//! # dormdesk-ui
//!
//! Rust + WASM interactivity layer for the dormitory management pages.
//! The pages are rendered by the server as plain HTML; this crate attaches
//! validation, tooltips, search filtering, notifications, theme switching and
//! the mobile navigation toggle to the markup it finds.
//!
//! Browser glue is gated behind the `hydrate` feature. Without it, the pure
//! cores (validators, debouncing, search matching, theme state, statistics)
//! build and test natively against in-memory fakes.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`app`] | Page bootstrap and the handle registry used for teardown |
//! | [`components`] | Field feedback, notifier, tooltips, nav, search, display updaters |
//! | [`state`] | Theme preference store |
//! | [`util`] | Validators, scheduler, debouncer |
//! | [`config`] | Runtime configuration read from the page |
//! | [`consts`] | Selectors, class names, colors, default timings |
//! | [`error`] | Error type for browser glue |

pub mod app;
pub mod components;
pub mod config;
pub mod consts;
#[cfg(feature = "hydrate")]
pub mod dom;
pub mod error;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
mod exports;

//! Page-level state that outlives a single event handler.

pub mod preference;

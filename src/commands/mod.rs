//! Command handlers
//!
//! Handlers invoked by the front end. Each one takes the application state
//! explicitly and reports back through a [`Notice`](crate::ui::notify::Notice).

pub mod comments;

// Re-export all command functions for easy access
pub use comments::*;

//! storefront-tui library
//!
//! Exports types and modules for testing and potential reuse.

pub mod app;
pub mod cli;
pub mod error;
pub mod print;
pub mod services;
pub mod terminal;
pub mod ui;

// Re-export commonly used types
pub use error::{TuiError, Result};
pub use app::{AppState, Action, Tab, reduce};

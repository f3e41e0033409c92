//! Error types for storefront-tui
//!
//! Wraps service layer errors and terminal/IO errors for unified handling.

use thiserror::Error;

/// TUI-specific errors
#[derive(Error, Debug)]
pub enum TuiError {
    /// Service layer error
    #[error("Service error: {0}")]
    Service(#[from] libstorefront::StorefrontError),

    /// Terminal/IO error
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    /// Application state error
    #[error("Application error: {0}")]
    Application(String),

    /// Event handling error
    #[error("Event error: {0}")]
    Event(String),
}

impl TuiError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            TuiError::Service(e) => e.exit_code(),
            TuiError::Terminal(_) | TuiError::Application(_) | TuiError::Event(_) => 1,
        }
    }
}

/// Result type for TUI operations
pub type Result<T> = std::result::Result<T, TuiError>;

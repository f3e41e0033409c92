//! Storefront - catalog browsing and an in-memory cart
//!
//! This library holds everything below the user interface: the product and
//! cart stores, client-side pagination, the catalog fetch client, and the
//! shared configuration, logging and error types.

pub mod config;
pub mod error;
pub mod logging;
pub mod pagination;
pub mod service;
pub mod source;
pub mod types;

// Re-export commonly used types
pub use config::Config;
pub use error::{ConfigError, FetchError, Result, StorefrontError};
pub use pagination::{compute_page_numbers, page_slice, PaginationState, ITEMS_PER_PAGE};
pub use service::StorefrontService;
pub use types::{CartEntry, Product};

//! Catalog sources
//!
//! A [`CatalogSource`] produces the full product list in one call. The
//! production implementation is [`http::HttpCatalogSource`]; [`mock`]
//! provides a scripted source for tests and offline runs.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::Product;

pub mod http;

// Mock source is available for all builds (not just tests) to support integration tests
pub mod mock;

pub use http::HttpCatalogSource;
pub use mock::{MockCatalogSource, MockConfig};

/// Something that can deliver the catalog
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch every product in the catalog
    ///
    /// # Errors
    ///
    /// Returns `FetchError` for transport failures, non-success status
    /// codes, and bodies that are not a JSON array of products.
    async fn fetch_products(&self) -> Result<Vec<Product>>;

    /// Where the products come from, for logging
    fn describe(&self) -> String;
}

//! Mock catalog source for testing
//!
//! Serves a fixed product list, or fails with a chosen HTTP status, after an
//! optional delay. Counts how often it was asked so tests can check that the
//! catalog is fetched exactly once.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use crate::error::{FetchError, Result};
use crate::source::CatalogSource;
use crate::types::Product;

/// Configuration for mock source behavior
#[derive(Debug, Clone)]
pub struct MockConfig {
    /// Products returned on success
    pub products: Vec<Product>,

    /// Fail with this status instead of returning products
    pub fail_with_status: Option<u16>,

    /// Delay before completing (simulates network latency)
    pub delay: Duration,

    /// Number of times fetch_products has been called
    pub fetch_call_count: Arc<Mutex<usize>>,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            products: Vec::new(),
            fail_with_status: None,
            delay: Duration::from_millis(0),
            fetch_call_count: Arc::new(Mutex::new(0)),
        }
    }
}

/// Mock source for testing
pub struct MockCatalogSource {
    config: MockConfig,
}

impl MockCatalogSource {
    pub fn new(config: MockConfig) -> Self {
        Self { config }
    }

    /// Source that succeeds with `products`
    pub fn with_products(products: Vec<Product>) -> Self {
        Self::new(MockConfig {
            products,
            ..Default::default()
        })
    }

    /// Source that always fails with `status`
    pub fn failing(status: u16) -> Self {
        Self::new(MockConfig {
            fail_with_status: Some(status),
            ..Default::default()
        })
    }

    /// Source whose response takes `delay` to arrive
    pub fn delayed(products: Vec<Product>, delay: Duration) -> Self {
        Self::new(MockConfig {
            products,
            delay,
            ..Default::default()
        })
    }

    pub fn fetch_call_count(&self) -> usize {
        *self
            .config
            .fetch_call_count
            .lock()
            .unwrap_or_else(|e| e.into_inner())
    }

    /// Shared counter handle, for when the source itself is moved away
    pub fn call_counter(&self) -> Arc<Mutex<usize>> {
        Arc::clone(&self.config.fetch_call_count)
    }
}

#[async_trait]
impl CatalogSource for MockCatalogSource {
    async fn fetch_products(&self) -> Result<Vec<Product>> {
        *self
            .config
            .fetch_call_count
            .lock()
            .unwrap_or_else(|e| e.into_inner()) += 1;

        if !self.config.delay.is_zero() {
            sleep(self.config.delay).await;
        }

        match self.config.fail_with_status {
            Some(status) => Err(FetchError::Status(status).into()),
            None => Ok(self.config.products.clone()),
        }
    }

    fn describe(&self) -> String {
        "mock".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_returns_products_and_counts() {
        let source = MockCatalogSource::with_products(vec![Product::new(1, "Shirt")]);

        let products = source.fetch_products().await.unwrap();
        assert_eq!(products, vec![Product::new(1, "Shirt")]);
        assert_eq!(source.fetch_call_count(), 1);
    }

    #[tokio::test]
    async fn test_mock_failure() {
        let source = MockCatalogSource::failing(500);

        let result = source.fetch_products().await;
        assert!(result.is_err());
        assert_eq!(source.fetch_call_count(), 1);
    }
}

//! HTTP catalog source backed by reqwest

use std::time::Duration;

use async_trait::async_trait;

use crate::config::CatalogConfig;
use crate::error::{FetchError, Result};
use crate::source::CatalogSource;
use crate::types::{parse_products, Product};

/// Fetches the catalog with a single unauthenticated GET
pub struct HttpCatalogSource {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpCatalogSource {
    /// Build a source for `config.endpoint` with `config.timeout_secs` as the request timeout
    pub fn new(config: &CatalogConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(FetchError::from)?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn fetch_products(&self) -> Result<Vec<Product>> {
        tracing::debug!(endpoint = %self.endpoint, "Requesting catalog");

        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(FetchError::from)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()).into());
        }

        let body = response.bytes().await.map_err(FetchError::from)?;
        let products = parse_products(&body).map_err(FetchError::from)?;

        tracing::debug!(count = products.len(), "Catalog received");
        Ok(products)
    }

    fn describe(&self) -> String {
        self.endpoint.clone()
    }
}

//! Service layer for Storefront
//!
//! `StorefrontService` is the single state handle shared by every view. It
//! owns the two stores and the event bus they publish to, and launches the
//! one-time catalog fetch.
//!
//! # Architecture
//!
//! - `ProductStore`: fetched catalog and page selection
//! - `CartStore`: cart entries and the status message
//! - `EventBus`: change notifications for subscribers
//!
//! # Example
//!
//! ```no_run
//! use libstorefront::{Config, service::StorefrontService};
//!
//! # async fn example() -> libstorefront::Result<()> {
//! let service = StorefrontService::new(&Config::default())?;
//! let mut events = service.subscribe();
//!
//! let fetch = service.spawn_initial_fetch();
//! fetch.join().await;
//!
//! let first_page = service.catalog().current_items();
//! if let Some(product) = first_page.first() {
//!     service.cart().add_to_cart(product);
//! }
//! # Ok(())
//! # }
//! ```

pub mod cart;
pub mod catalog;
pub mod events;

pub use cart::{CartSnapshot, CartStore, ITEM_ADDED_MESSAGE};
pub use catalog::{CatalogSnapshot, FetchOutcome, FetchStatus, ProductStore};

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::task::JoinHandle;
use tokio_util::sync::{CancellationToken, DropGuard};

use self::events::{EventBus, EventReceiver};
use crate::source::{CatalogSource, HttpCatalogSource};
use crate::{Config, Result};

/// Shared application state: catalog, cart and their change feed
pub struct StorefrontService {
    catalog: ProductStore,
    cart: CartStore,
    event_bus: EventBus,
    source: Arc<dyn CatalogSource>,
    fetch_launched: Arc<AtomicBool>,
}

impl StorefrontService {
    /// Create a service fetching from the configured HTTP endpoint
    pub fn new(config: &Config) -> Result<Self> {
        let source = HttpCatalogSource::new(&config.catalog)?;
        Ok(Self::with_source(Arc::new(source)))
    }

    /// Create a service over any catalog source
    pub fn with_source(source: Arc<dyn CatalogSource>) -> Self {
        let event_bus = EventBus::new(100);
        Self {
            catalog: ProductStore::new(event_bus.clone()),
            cart: CartStore::new(event_bus.clone()),
            event_bus,
            source,
            fetch_launched: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn catalog(&self) -> &ProductStore {
        &self.catalog
    }

    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    /// Subscribe to store change events
    pub fn subscribe(&self) -> EventReceiver {
        self.event_bus.subscribe()
    }

    /// The one-time catalog fetch as a detached future
    ///
    /// Cancelling `cancel` before the response is applied leaves the store
    /// untouched. Only the first future built per service does any work;
    /// later ones resolve to [`FetchOutcome::AlreadyStarted`].
    pub fn initial_fetch(
        &self,
        cancel: CancellationToken,
    ) -> impl Future<Output = FetchOutcome> + Send + 'static {
        let catalog = self.catalog.clone();
        let source = Arc::clone(&self.source);
        let launched = Arc::clone(&self.fetch_launched);

        async move {
            if launched.swap(true, Ordering::SeqCst) {
                tracing::warn!("Catalog fetch already launched, ignoring");
                return FetchOutcome::AlreadyStarted;
            }

            tracing::info!(source = %source.describe(), "Fetching catalog");
            tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    tracing::debug!("Catalog fetch cancelled before completion");
                    FetchOutcome::Cancelled
                }
                result = source.fetch_products() => {
                    if cancel.is_cancelled() {
                        FetchOutcome::Cancelled
                    } else {
                        catalog.apply_fetch(result)
                    }
                }
            }
        }
    }

    /// Spawn the initial fetch onto the current tokio runtime
    ///
    /// Dropping the returned task cancels the fetch.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime context.
    pub fn spawn_initial_fetch(&self) -> FetchTask {
        let token = CancellationToken::new();
        let handle = tokio::spawn(self.initial_fetch(token.clone()));
        FetchTask {
            handle,
            guard: token.drop_guard(),
        }
    }
}

/// A running initial fetch, cancelled when dropped
pub struct FetchTask {
    handle: JoinHandle<FetchOutcome>,
    guard: DropGuard,
}

impl FetchTask {
    /// Wait for the fetch to finish
    pub async fn join(self) -> FetchOutcome {
        let FetchTask { handle, guard } = self;
        let outcome = match handle.await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::error!(error = %e, "Catalog fetch task aborted");
                FetchOutcome::Cancelled
            }
        };
        let _ = guard.disarm();
        outcome
    }

    /// Cancel without waiting
    pub fn cancel(self) {
        drop(self);
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::MockCatalogSource;
    use crate::types::Product;
    use std::time::Duration;

    fn two_products() -> Vec<Product> {
        vec![Product::new(1, "Shirt"), Product::new(2, "Hat")]
    }

    #[tokio::test]
    async fn test_initial_fetch_loads_catalog() {
        let service =
            StorefrontService::with_source(Arc::new(MockCatalogSource::with_products(two_products())));

        let outcome = service.spawn_initial_fetch().join().await;

        assert_eq!(outcome, FetchOutcome::Loaded(2));
        assert_eq!(service.catalog().current_items(), two_products());
    }

    #[tokio::test]
    async fn test_second_fetch_is_ignored() {
        let source = MockCatalogSource::with_products(two_products());
        let calls = source.call_counter();
        let service = StorefrontService::with_source(Arc::new(source));

        assert_eq!(service.spawn_initial_fetch().join().await, FetchOutcome::Loaded(2));
        assert_eq!(
            service.spawn_initial_fetch().join().await,
            FetchOutcome::AlreadyStarted
        );
        assert_eq!(*calls.lock().unwrap(), 1);
    }

    #[tokio::test]
    async fn test_cancel_before_response_leaves_store_untouched() {
        let source = MockCatalogSource::delayed(two_products(), Duration::from_millis(200));
        let service = StorefrontService::with_source(Arc::new(source));
        let mut events = service.subscribe();

        let token = CancellationToken::new();
        let fetch = tokio::spawn(service.initial_fetch(token.clone()));
        tokio::time::sleep(Duration::from_millis(20)).await;
        token.cancel();

        assert_eq!(fetch.await.unwrap(), FetchOutcome::Cancelled);
        tokio::time::sleep(Duration::from_millis(250)).await;

        assert!(service.catalog().is_empty());
        assert_eq!(service.catalog().status(), FetchStatus::Pending);
        assert!(events.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_dropping_task_cancels() {
        let source = MockCatalogSource::delayed(two_products(), Duration::from_millis(100));
        let service = StorefrontService::with_source(Arc::new(source));

        let task = service.spawn_initial_fetch();
        task.cancel();
        tokio::time::sleep(Duration::from_millis(200)).await;

        assert!(service.catalog().is_empty());
    }

    #[tokio::test]
    async fn test_failed_fetch_keeps_catalog_empty() {
        let service = StorefrontService::with_source(Arc::new(MockCatalogSource::failing(502)));

        let outcome = service.spawn_initial_fetch().join().await;

        assert_eq!(outcome, FetchOutcome::Failed);
        assert!(service.catalog().page_numbers().is_empty());
        assert!(service.catalog().current_items().is_empty());
    }
}

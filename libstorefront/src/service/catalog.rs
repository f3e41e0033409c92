//! Product store
//!
//! Holds the fetched catalog and the page selection. The product list is
//! written once, by the initial fetch; afterwards only the page changes.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::Result;
use crate::pagination::{compute_page_numbers, PaginationState};
use crate::service::events::{Event, EventBus};
use crate::source::CatalogSource;
use crate::types::Product;

/// Progress of the initial catalog fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStatus {
    Pending,
    Loaded,
    Failed,
}

/// What the initial fetch ended up doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Catalog replaced with this many products
    Loaded(usize),
    /// Fetch failed and was logged; catalog left empty
    Failed,
    /// Torn down before the response was applied
    Cancelled,
    /// A fetch had already been launched for this service
    AlreadyStarted,
}

/// Read-only view of the catalog for rendering
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogSnapshot {
    pub current_items: Vec<Product>,
    pub page_numbers: Vec<usize>,
    pub current_page: usize,
    pub total_items: usize,
    pub status: FetchStatus,
}

impl Default for CatalogSnapshot {
    fn default() -> Self {
        Self {
            current_items: Vec::new(),
            page_numbers: Vec::new(),
            current_page: 1,
            total_items: 0,
            status: FetchStatus::Pending,
        }
    }
}

#[derive(Debug)]
struct CatalogState {
    products: Vec<Product>,
    pagination: PaginationState,
    status: FetchStatus,
}

/// Shared handle to the catalog
///
/// Clones share the same state.
#[derive(Clone)]
pub struct ProductStore {
    state: Arc<RwLock<CatalogState>>,
    events: EventBus,
}

impl ProductStore {
    pub fn new(events: EventBus) -> Self {
        Self {
            state: Arc::new(RwLock::new(CatalogState {
                products: Vec::new(),
                pagination: PaginationState::default(),
                status: FetchStatus::Pending,
            })),
            events,
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, CatalogState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, CatalogState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Fetch from `source` and apply the result
    pub async fn load_from(&self, source: &dyn CatalogSource) -> FetchOutcome {
        let result = source.fetch_products().await;
        self.apply_fetch(result)
    }

    /// Apply a finished fetch
    ///
    /// Failures are logged and leave the product list empty. Nothing is retried.
    pub fn apply_fetch(&self, result: Result<Vec<Product>>) -> FetchOutcome {
        match result {
            Ok(products) => {
                let count = products.len();
                self.replace_products(products);
                FetchOutcome::Loaded(count)
            }
            Err(e) => {
                tracing::error!(error = %e, "Error fetching catalog");
                self.write().status = FetchStatus::Failed;
                self.events.emit(Event::CatalogFetchFailed {
                    error: e.to_string(),
                });
                FetchOutcome::Failed
            }
        }
    }

    /// Swap in a new product list
    pub fn replace_products(&self, products: Vec<Product>) {
        let count = products.len();
        {
            let mut state = self.write();
            state.products = products;
            state.status = FetchStatus::Loaded;
        }
        tracing::info!(count, "Catalog loaded");
        self.events.emit(Event::CatalogLoaded { count });
    }

    /// Make `page` current
    ///
    /// Any number is accepted; pages without products show as empty.
    pub fn select_page(&self, page: usize) {
        self.write().pagination.current_page = page;
        tracing::debug!(page, "Page selected");
        self.events.emit(Event::PageSelected { page });
    }

    pub fn products(&self) -> Vec<Product> {
        self.read().products.clone()
    }

    pub fn len(&self) -> usize {
        self.read().products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().products.is_empty()
    }

    pub fn current_page(&self) -> usize {
        self.read().pagination.current_page
    }

    pub fn items_per_page(&self) -> usize {
        self.read().pagination.items_per_page
    }

    pub fn status(&self) -> FetchStatus {
        self.read().status
    }

    /// Products on the current page
    pub fn current_items(&self) -> Vec<Product> {
        let state = self.read();
        state.pagination.slice(&state.products).to_vec()
    }

    /// Page buttons for the current catalog
    pub fn page_numbers(&self) -> Vec<usize> {
        let state = self.read();
        compute_page_numbers(state.products.len(), state.pagination.items_per_page)
    }

    /// Everything a view needs, taken under one lock
    pub fn snapshot(&self) -> CatalogSnapshot {
        let state = self.read();
        CatalogSnapshot {
            current_items: state.pagination.slice(&state.products).to_vec(),
            page_numbers: compute_page_numbers(
                state.products.len(),
                state.pagination.items_per_page,
            ),
            current_page: state.pagination.current_page,
            total_items: state.products.len(),
            status: state.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;
    use crate::source::MockCatalogSource;

    fn products(n: u64) -> Vec<Product> {
        (1..=n).map(|i| Product::new(i, format!("Product {}", i))).collect()
    }

    #[test]
    fn test_new_store_is_empty_and_pending() {
        let store = ProductStore::new(EventBus::default());

        assert!(store.is_empty());
        assert_eq!(store.current_page(), 1);
        assert_eq!(store.items_per_page(), 5);
        assert_eq!(store.status(), FetchStatus::Pending);
        assert!(store.page_numbers().is_empty());
    }

    #[test]
    fn test_first_page_with_two_products() {
        let store = ProductStore::new(EventBus::default());
        store.replace_products(vec![Product::new(1, "Shirt"), Product::new(2, "Hat")]);

        assert_eq!(store.current_items().len(), 2);
        assert_eq!(store.page_numbers(), vec![1]);
        assert_eq!(store.status(), FetchStatus::Loaded);
    }

    #[test]
    fn test_last_page_of_twelve() {
        let store = ProductStore::new(EventBus::default());
        store.replace_products(products(12));
        store.select_page(3);

        let snapshot = store.snapshot();
        assert_eq!(snapshot.page_numbers, vec![1, 2, 3]);
        assert_eq!(snapshot.current_page, 3);
        let ids: Vec<u64> = snapshot.current_items.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![11, 12]);
    }

    #[test]
    fn test_page_past_end_is_empty() {
        let store = ProductStore::new(EventBus::default());
        store.replace_products(products(4));
        store.select_page(7);

        assert_eq!(store.current_page(), 7);
        assert!(store.current_items().is_empty());
    }

    #[test]
    fn test_failed_fetch_leaves_catalog_empty() {
        let events = EventBus::new(10);
        let mut rx = events.subscribe();
        let store = ProductStore::new(events);

        let outcome = store.apply_fetch(Err(FetchError::Status(500).into()));

        assert_eq!(outcome, FetchOutcome::Failed);
        assert!(store.is_empty());
        assert_eq!(store.status(), FetchStatus::Failed);
        assert!(matches!(rx.try_recv(), Ok(Event::CatalogFetchFailed { .. })));
    }

    #[tokio::test]
    async fn test_load_from_source() {
        let store = ProductStore::new(EventBus::default());
        let source = MockCatalogSource::with_products(products(6));

        let outcome = store.load_from(&source).await;

        assert_eq!(outcome, FetchOutcome::Loaded(6));
        assert_eq!(store.len(), 6);
        assert_eq!(source.fetch_call_count(), 1);
    }

    #[test]
    fn test_clones_share_state() {
        let store = ProductStore::new(EventBus::default());
        let view = store.clone();

        store.replace_products(products(3));
        assert_eq!(view.len(), 3);
    }
}

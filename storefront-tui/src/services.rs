//! Service layer adapter for TUI
//!
//! Bridges the async `StorefrontService` to the synchronous TUI event loop.
//!
//! # Architecture
//!
//! - `ServiceHandle`: owns the `StorefrontService` and a tokio runtime
//! - Initial fetch: spawned on `start`, cancelled when the handle is dropped
//! - Events: tokio broadcast bridged to crossbeam for the sync event loop
//! - Mutations: `perform` applies store actions coming out of the reducer
//!
//! # Example
//!
//! ```no_run
//! use storefront_tui::services::ServiceHandle;
//! use libstorefront::Config;
//!
//! # fn example() -> storefront_tui::error::Result<()> {
//! let mut services = ServiceHandle::new(&Config::default())?;
//! let events = services.subscribe();
//! services.start();
//!
//! // In the event loop
//! if let Ok(event) = events.try_recv() {
//!     let catalog = services.catalog_snapshot();
//! }
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;
use crossbeam_channel::{unbounded, Receiver};
use libstorefront::service::events::Event;
use libstorefront::service::{CartSnapshot, CatalogSnapshot, FetchTask, StorefrontService};
use libstorefront::source::CatalogSource;
use libstorefront::Config;
use crate::app::Action;
use crate::error::Result;

/// Service handle for TUI operations
///
/// Dropping the handle cancels an unfinished catalog fetch before the
/// runtime shuts down, so a late response never touches the stores.
pub struct ServiceHandle {
    service: StorefrontService,
    // Declared before `runtime` so it drops (and cancels) first
    fetch: Option<FetchTask>,
    runtime: tokio::runtime::Runtime,
}

impl ServiceHandle {
    /// Create a service handle fetching from the configured endpoint
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or the tokio runtime cannot be created
    pub fn new(config: &Config) -> Result<Self> {
        let service = StorefrontService::new(config)?;
        Self::with_service(service)
    }
    
    /// Create a service handle over any catalog source
    pub fn with_source(source: Arc<dyn CatalogSource>) -> Result<Self> {
        Self::with_service(StorefrontService::with_source(source))
    }
    
    fn with_service(service: StorefrontService) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()?;
        
        Ok(Self {
            service,
            fetch: None,
            runtime,
        })
    }
    
    /// Launch the one-time catalog fetch
    pub fn start(&mut self) {
        if self.fetch.is_some() {
            return;
        }
        let _guard = self.runtime.enter();
        self.fetch = Some(self.service.spawn_initial_fetch());
    }
    
    /// Whether the initial fetch has completed (or been cancelled)
    pub fn fetch_finished(&self) -> bool {
        self.fetch.as_ref().is_some_and(FetchTask::is_finished)
    }
    
    /// Subscribe to store change events
    ///
    /// Returns a receiver fed by a forwarding task on the runtime. Subscribe
    /// before `start` to be sure to see the catalog load.
    pub fn subscribe(&self) -> Receiver<Event> {
        let (tx, rx) = unbounded();
        
        let mut event_rx = self.service.subscribe();
        self.runtime.spawn(async move {
            loop {
                match event_rx.recv().await {
                    Ok(event) => {
                        if tx.send(event).is_err() {
                            // Receiver dropped, stop forwarding
                            break;
                        }
                    }
                    Err(tokio::sync::broadcast::error::RecvError::Lagged(skipped)) => {
                        tracing::warn!("Event receiver lagged, skipped {} events", skipped);
                    }
                    Err(tokio::sync::broadcast::error::RecvError::Closed) => break,
                }
            }
        });
        
        rx
    }
    
    /// Apply a store mutation; other actions are ignored
    pub fn perform(&self, action: &Action) {
        match action {
            Action::AddToCart(product) => self.service.cart().add_to_cart(product),
            Action::RemoveFromCart(id) => {
                self.service.cart().remove_from_cart(*id);
            }
            Action::SelectPage(page) => self.service.catalog().select_page(*page),
            _ => {}
        }
    }
    
    pub fn catalog_snapshot(&self) -> CatalogSnapshot {
        self.service.catalog().snapshot()
    }
    
    pub fn cart_snapshot(&self) -> CartSnapshot {
        self.service.cart().snapshot()
    }
    
    /// Actions that refresh the views affected by `event`
    pub fn refresh_for(&self, event: &Event) -> Vec<Action> {
        let mut actions = Vec::with_capacity(1);
        if event.touches_catalog() {
            actions.push(Action::CatalogChanged(self.catalog_snapshot()));
        }
        if event.touches_cart() {
            actions.push(Action::CartChanged(self.cart_snapshot()));
        }
        actions
    }
    
    pub fn service(&self) -> &StorefrontService {
        &self.service
    }
}

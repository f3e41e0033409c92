//! Application state
//!
//! Immutable state structure; all transitions happen through the reducer
//! (see `reducer.rs`). The catalog and cart parts are snapshots of the
//! service-layer stores, replaced whenever a store reports a change.

use libstorefront::service::{CartSnapshot, CatalogSnapshot};
use libstorefront::Product;

use super::actions::Tab;

/// Root application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Should the application quit?
    pub should_quit: bool,
    
    /// Visible tab
    pub active_tab: Tab,
    
    /// Help overlay visible?
    pub help_visible: bool,
    
    /// Home tab state
    pub home: HomeState,
    
    /// Cart tab state
    pub cart: CartViewState,
    
    /// UI configuration
    pub config: UiConfig,
}

/// Home tab: current catalog page plus row cursor
#[derive(Debug, Clone, Default)]
pub struct HomeState {
    pub catalog: CatalogSnapshot,
    pub selected: usize,
}

/// Cart tab: cart contents plus row cursor
#[derive(Debug, Clone, Default)]
pub struct CartViewState {
    pub snapshot: CartSnapshot,
    pub selected: usize,
}

/// UI configuration
#[derive(Debug, Clone)]
pub struct UiConfig {
    /// Use colors?
    pub colors_enabled: bool,
    
    /// Tick rate in milliseconds
    pub tick_rate_ms: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            should_quit: false,
            active_tab: Tab::Home,
            help_visible: false,
            home: HomeState::default(),
            cart: CartViewState::default(),
            config: UiConfig::default(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        let colors_enabled = std::env::var("NO_COLOR").is_err()
            && std::env::var("STOREFRONT_TUI_NO_COLOR").is_err();
        
        let tick_rate_ms = std::env::var("STOREFRONT_TUI_TICK_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(100);
        
        Self {
            colors_enabled,
            tick_rate_ms,
        }
    }
}

impl AppState {
    /// Create new application state with default values
    pub fn new() -> Self {
        Self::default()
    }
    
    /// Product under the Home cursor
    pub fn selected_product(&self) -> Option<&Product> {
        self.home.catalog.current_items.get(self.home.selected)
    }
    
    /// Cart entry under the Cart cursor
    pub fn selected_cart_entry(&self) -> Option<&Product> {
        self.cart.snapshot.entries.get(self.cart.selected)
    }
    
    /// Number of rows in the active tab
    pub fn active_row_count(&self) -> usize {
        match self.active_tab {
            Tab::Home => self.home.catalog.current_items.len(),
            Tab::Cart => self.cart.snapshot.entries.len(),
        }
    }
    
    /// Items in Cart
    pub fn cart_count(&self) -> usize {
        self.cart.snapshot.entries.len()
    }
    
    /// Page button left of the current page, if any
    ///
    /// When the current page has no button, Left lands on the last one.
    pub fn previous_page_button(&self) -> Option<usize> {
        let pages = &self.home.catalog.page_numbers;
        match pages.iter().position(|&p| p == self.home.catalog.current_page) {
            Some(i) if i > 0 => Some(pages[i - 1]),
            Some(_) => None,
            None => pages.last().copied(),
        }
    }
    
    /// Page button right of the current page, if any
    ///
    /// When the current page has no button, Right lands on the first one.
    pub fn next_page_button(&self) -> Option<usize> {
        let pages = &self.home.catalog.page_numbers;
        match pages.iter().position(|&p| p == self.home.catalog.current_page) {
            Some(i) => pages.get(i + 1).copied(),
            None => pages.first().copied(),
        }
    }
}

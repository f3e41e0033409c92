//! Actions for the reducer pattern
//!
//! All state transitions are triggered by actions. Store mutations
//! (add, remove, page select) are also actions: the reducer ignores them
//! and the event loop forwards them to the service layer, whose change
//! events come back as `CatalogChanged` / `CartChanged`.

use crossterm::event::KeyEvent;
use libstorefront::service::{CartSnapshot, CatalogSnapshot};
use libstorefront::Product;

/// Actions that trigger state transitions
#[derive(Debug, Clone)]
pub enum Action {
    // === UI Events ===
    /// Keyboard input event
    Key(KeyEvent),
    
    /// Periodic tick, drives store event draining
    Tick,
    
    /// Terminal resize event
    Resize(u16, u16),
    
    // === Navigation ===
    /// Show the given tab
    SwitchTab(Tab),
    
    /// Flip between Home and Cart
    ToggleTab,
    
    /// Quit the application
    Quit,
    
    /// Show help overlay
    ShowHelp,
    
    /// Hide help overlay
    HideHelp,
    
    /// Move the row cursor down in the active tab
    SelectNext,
    
    /// Move the row cursor up in the active tab
    SelectPrevious,
    
    // === Store mutations (performed by the service layer) ===
    /// Append a product to the cart
    AddToCart(Product),
    
    /// Remove every cart entry with this id
    RemoveFromCart(u64),
    
    /// Page button pressed
    SelectPage(usize),
    
    // === Store notifications ===
    /// The catalog changed; here is the fresh view of it
    CatalogChanged(CatalogSnapshot),
    
    /// The cart changed; here is the fresh view of it
    CartChanged(CartSnapshot),
}

impl Action {
    /// Whether the service layer must act on this
    pub fn is_store_mutation(&self) -> bool {
        matches!(
            self,
            Action::AddToCart(_) | Action::RemoveFromCart(_) | Action::SelectPage(_)
        )
    }
}

/// Top-level tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Home,
    Cart,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Home, Tab::Cart];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Cart => "Cart",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Tab::Home => 0,
            Tab::Cart => 1,
        }
    }

    pub fn other(self) -> Tab {
        match self {
            Tab::Home => Tab::Cart,
            Tab::Cart => Tab::Home,
        }
    }
}

//! Cart store
//!
//! An in-memory list of products the user picked. Adding never
//! deduplicates; removing drops every entry with the given id. Both
//! operations always succeed.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::service::events::{Event, EventBus};
use crate::types::{CartEntry, Product};

/// Status message shown after an add
pub const ITEM_ADDED_MESSAGE: &str = "Item added to cart";

/// Read-only view of the cart for rendering
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartSnapshot {
    pub entries: Vec<CartEntry>,
    /// Last status message; stays until overwritten
    pub message: Option<String>,
}

#[derive(Debug, Default)]
struct CartState {
    entries: Vec<CartEntry>,
    message: Option<String>,
}

/// Shared handle to the cart
#[derive(Clone)]
pub struct CartStore {
    state: Arc<RwLock<CartState>>,
    events: EventBus,
}

impl CartStore {
    pub fn new(events: EventBus) -> Self {
        Self {
            state: Arc::new(RwLock::new(CartState::default())),
            events,
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, CartState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, CartState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Append a copy of `product` and set the status message
    pub fn add_to_cart(&self, product: &Product) {
        let id = product.id;
        let cart_len = {
            let mut state = self.write();
            state.entries.push(product.clone());
            state.message = Some(ITEM_ADDED_MESSAGE.to_string());
            state.entries.len()
        };
        tracing::debug!(id, cart_len, "Added to cart");
        self.events.emit(Event::CartItemAdded { id, cart_len });
    }

    /// Remove every entry whose id is `id`; returns how many were removed
    pub fn remove_from_cart(&self, id: u64) -> usize {
        let (removed, cart_len) = {
            let mut state = self.write();
            let before = state.entries.len();
            state.entries.retain(|entry| entry.id != id);
            (before - state.entries.len(), state.entries.len())
        };
        tracing::debug!(id, removed, cart_len, "Removed from cart");
        self.events.emit(Event::CartItemsRemoved {
            id,
            removed,
            cart_len,
        });
        removed
    }

    pub fn entries(&self) -> Vec<CartEntry> {
        self.read().entries.clone()
    }

    pub fn len(&self) -> usize {
        self.read().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().entries.is_empty()
    }

    pub fn message(&self) -> Option<String> {
        self.read().message.clone()
    }

    pub fn snapshot(&self) -> CartSnapshot {
        let state = self.read();
        CartSnapshot {
            entries: state.entries.clone(),
            message: state.message.clone(),
        }
    }
}

//! Change notifications for the stores
//!
//! This module provides an in-process event bus that stores publish to
//! after every mutation. Views subscribe and re-derive what they display.
//!
//! # Architecture
//!
//! The event bus uses `tokio::sync::broadcast` for multi-subscriber support.
//! Emitting never blocks; with no subscribers the event is dropped.
//!
//! # Example
//!
//! ```no_run
//! use libstorefront::service::events::{EventBus, Event};
//!
//! # async fn example() {
//! let event_bus = EventBus::new(100);
//! let mut receiver = event_bus.subscribe();
//!
//! event_bus.emit(Event::PageSelected { page: 2 });
//!
//! if let Ok(event) = receiver.recv().await {
//!     println!("Received: {:?}", event);
//! }
//! # }
//! ```

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Event receiver type alias
pub type EventReceiver = broadcast::Receiver<Event>;

/// Event bus for distributing store change events
#[derive(Clone)]
pub struct EventBus {
    sender: broadcast::Sender<Event>,
}

impl EventBus {
    /// Create a new event bus with the specified capacity
    ///
    /// The capacity determines how many events can be buffered per subscriber
    /// before older events are dropped (if the subscriber is lagging).
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Subscribe to events emitted after this call
    pub fn subscribe(&self) -> EventReceiver {
        self.sender.subscribe()
    }

    /// Emit an event to all subscribers
    ///
    /// Non-blocking. Lagging subscribers lose the oldest events first.
    pub fn emit(&self, event: Event) {
        // send() only fails when nobody is listening
        let _ = self.sender.send(event);
    }

    /// Get the number of active subscribers
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(100)
    }
}

/// Events published by the stores
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// The product list was replaced by a completed fetch
    CatalogLoaded {
        /// Number of products now in the catalog
        count: usize,
    },

    /// The initial fetch failed; the catalog stays empty
    CatalogFetchFailed {
        /// Error message
        error: String,
    },

    /// A page number was selected
    PageSelected { page: usize },

    /// A product was appended to the cart
    CartItemAdded {
        /// Product id
        id: u64,
        /// Cart size after the add
        cart_len: usize,
    },

    /// Every entry with `id` was removed from the cart
    CartItemsRemoved {
        /// Product id
        id: u64,
        /// How many entries were dropped (0 when the id was absent)
        removed: usize,
        /// Cart size after the removal
        cart_len: usize,
    },
}

impl Event {
    /// Whether this event changes what the catalog view shows
    pub fn touches_catalog(&self) -> bool {
        matches!(
            self,
            Event::CatalogLoaded { .. } | Event::CatalogFetchFailed { .. } | Event::PageSelected { .. }
        )
    }

    /// Whether this event changes what the cart view shows
    pub fn touches_cart(&self) -> bool {
        matches!(self, Event::CartItemAdded { .. } | Event::CartItemsRemoved { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_event_emission_and_subscription() {
        let event_bus = EventBus::new(10);
        let mut receiver = event_bus.subscribe();

        event_bus.emit(Event::CartItemAdded { id: 3, cart_len: 1 });

        let received = receiver.recv().await.unwrap();
        assert_eq!(received, Event::CartItemAdded { id: 3, cart_len: 1 });
    }

    #[tokio::test]
    async fn test_multiple_subscribers() {
        let event_bus = EventBus::new(10);
        let mut receiver1 = event_bus.subscribe();
        let mut receiver2 = event_bus.subscribe();

        event_bus.emit(Event::PageSelected { page: 2 });

        assert_eq!(receiver1.recv().await.unwrap(), Event::PageSelected { page: 2 });
        assert_eq!(receiver2.recv().await.unwrap(), Event::PageSelected { page: 2 });
    }

    #[tokio::test]
    async fn test_no_subscribers() {
        let event_bus = EventBus::new(10);

        // Should not panic or block
        event_bus.emit(Event::CatalogLoaded { count: 0 });

        assert_eq!(event_bus.subscriber_count(), 0);
    }

    #[test]
    fn test_event_serialization() {
        let event = Event::CartItemsRemoved {
            id: 9,
            removed: 2,
            cart_len: 0,
        };

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("cart_items_removed"));

        let deserialized: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, event);
    }

    #[test]
    fn test_event_routing() {
        assert!(Event::PageSelected { page: 1 }.touches_catalog());
        assert!(!Event::PageSelected { page: 1 }.touches_cart());
        assert!(Event::CartItemAdded { id: 1, cart_len: 1 }.touches_cart());
        assert!(Event::CatalogFetchFailed { error: "x".into() }.touches_catalog());
    }
}

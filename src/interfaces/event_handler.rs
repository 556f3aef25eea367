// ============================================================================
// Event Handler Interface
// Defines the contract for observing book state changes
// ============================================================================

use crate::domain::{EventTime, OrderId, OrderState};
use crate::numeric::Size;
use serde::{Deserialize, Serialize};

/// Events emitted by the order book as commands are applied.
///
/// Each event carries the venue event time that drove it, not the local
/// wall clock. The book itself never logs; observers that want logging,
/// metrics, or notification behavior plug in through [`EventHandler`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BookEvent {
    /// A new order was placed and is now tracked
    OrderPlaced {
        order_id: OrderId,
        size: Size,
        event_time: EventTime,
    },

    /// A state mutation applied
    OrderStateChanged {
        order_id: OrderId,
        state: OrderState,
        event_time: EventTime,
    },

    /// A size mutation (or match-driven reduction) applied
    OrderSizeChanged {
        order_id: OrderId,
        size: Size,
        event_time: EventTime,
    },

    /// A match was appended to an order's trade history
    TradeRecorded {
        order_id: OrderId,
        trade_id: i64,
        size: Size,
        event_time: EventTime,
    },

    /// A mutation arrived behind the field's last-applied event time and
    /// was discarded. Expected under redelivery and out-of-order
    /// transport; not a fault.
    StaleMutationSkipped {
        order_id: OrderId,
        event_time: EventTime,
    },
}

/// Event handler trait for processing book events
/// Implementations can handle logging, metrics, notifications, etc.
pub trait EventHandler: Send + Sync {
    /// Handle a book event
    fn on_event(&self, event: BookEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<BookEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler for testing
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: BookEvent) {
        // Do nothing
    }
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: BookEvent) {
        tracing::debug!("Order book event: {:?}", event);
    }
}

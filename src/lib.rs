// ============================================================================
// Order Tracker Library
// In-memory order book state reconstructed from exchange event streams
// ============================================================================

//! # Order Tracker
//!
//! An authoritative, in-memory record of outstanding exchange orders,
//! rebuilt from a stream of possibly out-of-order, possibly duplicated
//! update events.
//!
//! ## Features
//!
//! - **Per-field last-writer-by-event-time resolution**: a stale update
//!   arriving after a fresher one is discarded, per field, so the final
//!   observed state is correct for any delivery order
//! - **Lock-free order index** with per-order exclusive batches; updates
//!   to different orders never contend
//! - **Idempotent under redelivery**: at-least-once transports need no
//!   dedup in front of the book
//! - **Exact minor-unit arithmetic** (cents, satoshis); floating point
//!   never touches book state
//! - **Typed feed decoding**: a schema-per-message-type Coinbase decoder
//!   producing the book's command protocol
//!
//! ## Example
//!
//! ```rust
//! use order_tracker::prelude::*;
//! use order_tracker::numeric::{Price, Size};
//! use chrono::{TimeZone, Utc};
//!
//! let book = InMemoryOrderBook::new();
//!
//! book.place_order(
//!     Order {
//!         id: OrderId::from("o1"),
//!         price: Price::new(10_000), // $100.00
//!         side: Side::Buy,
//!     },
//!     Size::new(10),
//!     Utc.timestamp_opt(0, 0).unwrap(),
//! )
//! .unwrap();
//!
//! // Updates carry venue event times; arrival order does not matter.
//! book.mutate_order(
//!     &OrderId::from("o1"),
//!     &[
//!         OrderMutation::state(OrderState::Open, Utc.timestamp_opt(1, 0).unwrap()),
//!         OrderMutation::size(Size::new(8), Utc.timestamp_opt(1, 0).unwrap()),
//!     ],
//! )
//! .unwrap();
//!
//! let tracked = book.get_order(&OrderId::from("o1")).unwrap();
//! assert_eq!(tracked.state, OrderState::Open);
//! assert_eq!(tracked.size, Size::new(8));
//! ```

pub mod decoder;
pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        BookCommand, BookConfig, EventTime, MutationBatch, Order, OrderId, OrderMutation,
        OrderState, Side, TrackedOrder, TradeFill,
    };
    pub use crate::engine::{
        BatchError, BookError, CommandError, InMemoryOrderBook, MutationFailure,
    };
    pub use crate::interfaces::{BookEvent, EventHandler, LoggingEventHandler, NoOpEventHandler};
}

// ============================================================================
// Order Domain Model
// ============================================================================

use crate::numeric::{Price, Size};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Timestamp assigned by the originating venue to an update. Event time,
/// not arrival order, resolves conflicting updates.
pub type EventTime = DateTime<Utc>;

// ============================================================================
// Value Objects
// ============================================================================

/// Opaque venue-assigned order identifier, unique across the book's lifetime.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for OrderId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for OrderId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Buy,
    Sell,
}

// ============================================================================
// Order Lifecycle States
// ============================================================================

/// Lifecycle state of a tracked order.
///
/// The effective state after processing is always the one carried by the
/// state mutation with the latest event time seen so far; transitions are
/// not enforced against a fixed graph because the feed may reorder
/// deliveries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderState {
    /// Accepted by the venue but not yet resting
    Pending,
    /// Resting, visible in the book
    Open,
    /// Terminal: fully executed
    Filled,
    /// Terminal: cancelled, rejected, or expired
    Void,
}

impl OrderState {
    /// Parse a canonical venue state name. Returns `None` for anything
    /// outside {PENDING, OPEN, FILLED, VOID}.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "PENDING" => Some(OrderState::Pending),
            "OPEN" => Some(OrderState::Open),
            "FILLED" => Some(OrderState::Filled),
            "VOID" => Some(OrderState::Void),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderState::Pending => "PENDING",
            OrderState::Open => "OPEN",
            OrderState::Filled => "FILLED",
            OrderState::Void => "VOID",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderState::Filled | OrderState::Void)
    }
}

impl fmt::Display for OrderState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Order Entity
// ============================================================================

/// Immutable identity facts of an order. Everything that can change lives
/// on [`TrackedOrder`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    /// Limit price in minor currency units, exact
    pub price: Price,
    pub side: Side,
}

/// One recorded match event in an order's trade history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeFill {
    /// Venue-assigned trade identifier, used for idempotent redelivery
    pub trade_id: i64,
    /// Matched quantity
    pub size: Size,
    /// True if this order was the resting (maker) side
    pub was_maker: bool,
    /// The opposite order of the match; present only on the taker side
    pub counterpart: Option<OrderId>,
    pub event_time: EventTime,
}

/// The book's mutable record of one order: current lifecycle state,
/// remaining size, and the append-only trade history.
///
/// `last_state_event_time` and `last_size_event_time` are per-field, not
/// per-order: state and size evolve on independent update streams and a
/// stale update for one field must not block a fresh update for the other.
/// Both are monotonically non-decreasing over the life of the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackedOrder {
    pub order: Order,
    pub state: OrderState,
    /// Remaining open quantity, never negative
    pub size: Size,
    pub last_state_event_time: EventTime,
    pub last_size_event_time: EventTime,
    /// Append-only audit trail of matches, deduplicated by trade id
    pub trade_history: Vec<TradeFill>,
}

impl TrackedOrder {
    /// Create the record for a freshly placed order. Both per-field event
    /// times start at the placement time; later mutations carrying that
    /// same time still apply (ties accept, for idempotent redelivery).
    pub fn new(order: Order, size: Size, event_time: EventTime) -> Self {
        Self {
            order,
            state: OrderState::Pending,
            size,
            last_state_event_time: event_time,
            last_size_event_time: event_time,
            trade_history: Vec::new(),
        }
    }

    /// Whether a trade id has already been recorded.
    pub fn has_trade(&self, trade_id: i64) -> bool {
        self.trade_history.iter().any(|fill| fill.trade_id == trade_id)
    }
}

// ============================================================================
// Order Mutations
// Typed update events carrying their own venue timestamps
// ============================================================================

use crate::numeric::Size;
use serde::{Deserialize, Serialize};

use super::{EventTime, OrderId, OrderState};

/// A single typed update event addressed to one tracked order.
///
/// Each variant carries the venue event time it was observed at; the
/// engine resolves conflicts per target field by comparing that time
/// against the field's last-applied time, never by arrival order. The
/// enum is matched exhaustively at apply time so no mutation kind can be
/// silently ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OrderMutation {
    /// Replace the remaining open quantity.
    Size { new_size: Size, event_time: EventTime },

    /// Replace the lifecycle state. The value is the raw venue state name
    /// and is validated when applied; an unrecognized name is rejected as
    /// `InvalidState` without touching the field or its event time.
    State { state: String, event_time: EventTime },

    /// Record a matched trade. Trade records are facts about the past:
    /// they always append to the history (keyed by `trade_id` for
    /// idempotent redelivery), independent of the size/state clocks.
    Match {
        trade_id: i64,
        size: Size,
        was_maker: bool,
        /// The opposite order of the match; present only on the taker side
        counterpart: Option<OrderId>,
        event_time: EventTime,
    },
}

impl OrderMutation {
    /// Convenience constructor for a size change.
    pub fn size(new_size: Size, event_time: EventTime) -> Self {
        OrderMutation::Size {
            new_size,
            event_time,
        }
    }

    /// Convenience constructor for a state change with a known-valid state.
    pub fn state(state: OrderState, event_time: EventTime) -> Self {
        OrderMutation::State {
            state: state.as_str().to_string(),
            event_time,
        }
    }

    /// The venue event time this mutation was observed at.
    pub fn event_time(&self) -> EventTime {
        match self {
            OrderMutation::Size { event_time, .. }
            | OrderMutation::State { event_time, .. }
            | OrderMutation::Match { event_time, .. } => *event_time,
        }
    }
}

// ============================================================================
// Book Command Protocol
// The producer-facing boundary contract driving the engine
// ============================================================================

use crate::numeric::Size;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::{EventTime, Order, OrderId, OrderMutation};

/// Inline capacity for a command's mutation batch. Venue messages decode
/// to at most two mutations (size + state), so the common case stays
/// allocation-free.
pub type MutationBatch = SmallVec<[OrderMutation; 2]>;

/// A command any producer (the feed decoder, a replay tool, tests) emits
/// to drive the book. The engine has no dependency on where commands come
/// from, how they were framed, or what transport delivered them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum BookCommand {
    /// Start tracking a new order with the given open size.
    Placement {
        order: Order,
        size: Size,
        event_time: EventTime,
    },

    /// Apply a batch of mutations to an existing order as one logical unit.
    Mutation {
        order_id: OrderId,
        mutations: MutationBatch,
    },
}

impl BookCommand {
    /// The order this command is addressed to.
    pub fn order_id(&self) -> &OrderId {
        match self {
            BookCommand::Placement { order, .. } => &order.id,
            BookCommand::Mutation { order_id, .. } => order_id,
        }
    }
}

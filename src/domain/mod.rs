// ============================================================================
// Domain Models Module
// Contains all core domain entities and value objects
// ============================================================================

pub mod command;
pub mod config;
pub mod mutation;
pub mod order;

pub use command::{BookCommand, MutationBatch};
pub use config::BookConfig;
pub use mutation::OrderMutation;
pub use order::{EventTime, Order, OrderId, OrderState, Side, TrackedOrder, TradeFill};

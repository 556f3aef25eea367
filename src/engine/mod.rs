// ============================================================================
// Engine Module
// Contains the in-memory book and its error types
// ============================================================================

mod errors;
mod order_book;

pub use errors::{BatchError, BookError, CommandError, MutationFailure};
pub use order_book::InMemoryOrderBook;

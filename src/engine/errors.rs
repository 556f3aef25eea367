// ============================================================================
// Engine Errors
// All failures are returned to the caller as values; the book never logs,
// retries, or terminates on any condition
// ============================================================================

use crate::domain::OrderId;
use std::fmt;

/// A failure of a single book operation or batch element.
///
/// Note the deliberate asymmetry with stale updates: a mutation that
/// arrives behind a field's last-applied event time is an expected, silent
/// no-op, not an error. These variants cover wrong or unexpected input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// The operation addressed an id absent from the book
    OrderNotFound(OrderId),
    /// A placement collided with an existing id; the existing order is
    /// left untouched
    DuplicateOrder(OrderId),
    /// A state mutation carried an unrecognized state value
    InvalidState(String),
}

impl fmt::Display for BookError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookError::OrderNotFound(id) => write!(f, "order {} not found in book", id),
            BookError::DuplicateOrder(id) => write!(f, "order {} is already placed", id),
            BookError::InvalidState(value) => {
                write!(f, "unrecognized order state {:?}", value)
            },
        }
    }
}

impl std::error::Error for BookError {}

/// One rejected element of a mutation batch, identified by its position
/// in the input sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationFailure {
    pub index: usize,
    pub error: BookError,
}

impl fmt::Display for MutationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mutation #{}: {}", self.index, self.error)
    }
}

/// Outcome of `mutate_order` when anything went wrong.
///
/// `OrderNotFound` is structural: the whole batch aborts and nothing is
/// applied. `Mutations` is element-level: the listed elements were
/// rejected while their valid siblings in the same batch still applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchError {
    OrderNotFound(OrderId),
    Mutations(Vec<MutationFailure>),
}

impl BatchError {
    /// The rejected elements, empty for the structural case.
    pub fn failures(&self) -> &[MutationFailure] {
        match self {
            BatchError::OrderNotFound(_) => &[],
            BatchError::Mutations(failures) => failures,
        }
    }
}

impl fmt::Display for BatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BatchError::OrderNotFound(id) => write!(f, "order {} not found in book", id),
            BatchError::Mutations(failures) => {
                write!(f, "{} mutation(s) rejected:", failures.len())?;
                for failure in failures {
                    write!(f, " [{}]", failure)?;
                }
                Ok(())
            },
        }
    }
}

impl std::error::Error for BatchError {}

/// Failure applying a [`BookCommand`](crate::domain::BookCommand).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    Placement(BookError),
    Mutation(BatchError),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Placement(err) => write!(f, "placement failed: {}", err),
            CommandError::Mutation(err) => write!(f, "mutation failed: {}", err),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<BookError> for CommandError {
    fn from(err: BookError) -> Self {
        CommandError::Placement(err)
    }
}

impl From<BatchError> for CommandError {
    fn from(err: BatchError) -> Self {
        CommandError::Mutation(err)
    }
}

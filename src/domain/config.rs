// ============================================================================
// Book Configuration
// ============================================================================

use serde::{Deserialize, Serialize};

/// Configuration for an in-memory order book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookConfig {
    /// Whether a recorded match also reduces the order's remaining size.
    ///
    /// When enabled (the default), applying a match subtracts the matched
    /// quantity from `size` under the same event-time rule as a size
    /// mutation, floored at zero. Disable this for venues that follow
    /// every match with an explicit remaining-size update, leaving the
    /// match record as audit trail only.
    pub match_reduces_size: bool,
}

impl Default for BookConfig {
    fn default() -> Self {
        Self {
            match_reduces_size: true,
        }
    }
}

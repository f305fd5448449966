//! Error types for document collation

use crate::witness::Witness;
use std::fmt;

/// Fatal collation failures. Per-line anomalies are recovered locally and
/// never surface here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollationError {
    /// A witness document lacks the requested canto. This is a structural
    /// precondition; the whole run aborts.
    CantoNotFound { witness: Witness, number: u32 },
}

impl fmt::Display for CollationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollationError::CantoNotFound { witness, number } => {
                write!(f, "canto {} not found in witness {}", number, witness)
            }
        }
    }
}

impl std::error::Error for CollationError {}

//! Error types for editing actions.

use thiserror::Error;

/// An edit that could not be applied. The variable is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    /// A transformer index outside the current chain.
    #[error("transformer index {index} out of range for chain of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

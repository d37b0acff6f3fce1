use thiserror::Error;

/// Errors surfaced by the containers and the debug codecs.
///
/// Absent keys are never errors; lookups return `Option`/`bool` instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ForestError {
    #[error("container is full: capacity of {capacity} nodes reached")]
    CapacityExhausted { capacity: usize },
    #[error("malformed tree encoding at byte {position}: {reason}")]
    Parse { position: usize, reason: String },
    #[error("tree invariant violated: {0}")]
    InvalidTree(String),
}

pub type Result<T> = std::result::Result<T, ForestError>;

impl From<String> for ForestError {
    fn from(reason: String) -> Self {
        ForestError::InvalidTree(reason)
    }
}

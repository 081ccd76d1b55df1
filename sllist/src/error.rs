use thiserror::Error;

/// Result type for list operations that can be rejected
pub type ListResult<T> = Result<T, ListError>;

/// Reasons a list operation is refused. A refused operation leaves the list untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    #[error("list is empty")]
    Empty,

    #[error("index {index} out of range for list of size {size}")]
    IndexOutOfRange { index: usize, size: usize },

    #[error("list structure corrupted: {0}")]
    Corrupted(String),
}

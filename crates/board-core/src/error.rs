//! Board Errors

use thiserror::Error;

use crate::board::TaskRef;

/// Common result type for board operations
pub type BoardResult<T> = Result<T, BoardError>;

#[derive(Debug, Error)]
pub enum BoardError {
    /// Submitted task text was empty
    #[error("you must enter a value")]
    EmptyInput,
    /// Position no longer points at a task
    #[error("no task at {0}")]
    TaskNotFound(TaskRef),
    #[error("invalid board data: {0}")]
    Codec(#[from] serde_json::Error),
}

use thiserror::Error;

/// Contract violations reported by queue operations.
///
/// None of these are transient: each one means the caller asked for something
/// the queue cannot do in its current state, and nothing was mutated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueueError {
    /// A required argument was absent
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// An index or length falls outside the destination
    #[error("Out of range: {0}")]
    OutOfRange(String),

    /// The operation is not valid for the current state (e.g. empty queue)
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}

impl QueueError {
    #[inline]
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    #[inline]
    pub fn out_of_range(msg: impl Into<String>) -> Self {
        Self::OutOfRange(msg.into())
    }

    #[inline]
    pub fn invalid_operation(msg: impl Into<String>) -> Self {
        Self::InvalidOperation(msg.into())
    }

    pub(crate) fn empty_queue() -> Self {
        Self::invalid_operation("the queue is empty")
    }
}

pub type Result<T, E = QueueError> = std::result::Result<T, E>;

//! Runtime errors and process exit status.

use thiserror::Error;

/// Startup failures. Steady-state operation has no error states.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeError {
    #[error("no free lock slot (pool capacity {capacity})")]
    LockUnavailable { capacity: usize },
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    #[error("input queue is full")]
    Full,
    #[error("input queue is closed")]
    Closed,
}

/// Status reported when the application terminates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// Loop left through `Back`
    Success,
    /// The state lock could not be allocated
    LockUnavailable,
}

impl ExitStatus {
    pub const fn code(self) -> u8 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::LockUnavailable => 255,
        }
    }
}

impl From<&RuntimeError> for ExitStatus {
    fn from(err: &RuntimeError) -> Self {
        match err {
            RuntimeError::LockUnavailable { .. } => ExitStatus::LockUnavailable,
        }
    }
}

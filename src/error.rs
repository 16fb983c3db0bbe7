//! Error types for fork-join operations.
//!
//! This module defines the error type returned when a spawned worker fails.

/// Errors that can occur while running a group of workers
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum JoinError {
    /// A worker panicked before reaching its join point
    WorkerPanicked {
        worker_id: usize,
        panic_message: String,
    },
}

impl std::fmt::Display for JoinError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JoinError::WorkerPanicked {
                worker_id,
                panic_message,
            } => {
                write!(
                    f,
                    "Worker #{} panicked: {}\n\
                     \n\
                     A worker panicked, indicating a bug. All workers were still \
                     joined before this error was returned.",
                    worker_id, panic_message
                )
            }
        }
    }
}

impl std::error::Error for JoinError {}

/// Result type for fork-join operations
pub type JoinResult<T> = Result<T, JoinError>;

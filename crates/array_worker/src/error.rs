//! Worker error types.

use array_core::GeneratorError;
use thiserror::Error;

/// Errors from submitting to or running tasks on a [`ComputeWorker`](crate::ComputeWorker).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum WorkerError {
    /// The worker thread could not be started.
    #[error("Failed to spawn worker thread: {0}")]
    Spawn(String),

    /// The worker has been stopped and accepts no further tasks.
    #[error("Worker is stopped")]
    Stopped,

    /// The worker thread went away before replying.
    #[error("Worker channel disconnected")]
    Disconnected,

    /// The task panicked on the worker thread.
    #[error("Task panicked: {0}")]
    TaskPanicked(String),

    /// No result arrived within the requested time.
    #[error("Timed out waiting for task result")]
    Timeout,

    /// The generator rejected the task.
    #[error(transparent)]
    Generator(#[from] GeneratorError),
}

/// Result type for worker operations.
pub type WorkerResult<T> = Result<T, WorkerError>;

//! Error types for the backend abstraction.

use thiserror::Error;

/// Errors that can occur when talking to an execution backend.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum HalError {
    /// Backend is not available.
    #[error("backend not available: {0}")]
    BackendUnavailable(String),

    /// Job submission failed.
    #[error("job submission failed: {0}")]
    SubmissionFailed(String),

    /// Job execution failed.
    #[error("job failed: {0}")]
    JobFailed(String),

    /// Job was cancelled.
    #[error("job cancelled")]
    JobCancelled,

    /// Job not found.
    #[error("job not found: {0}")]
    JobNotFound(String),

    /// Problem exceeds backend capabilities.
    #[error("problem exceeds backend capabilities: {0}")]
    ProblemTooLarge(String),

    /// Invalid number of shots.
    #[error("invalid shots: {0}")]
    InvalidShots(String),

    /// Timeout waiting for a job.
    #[error("timeout waiting for job {0}")]
    Timeout(String),

    /// Error from the core data model.
    #[error(transparent)]
    Core(#[from] gridcut_core::CoreError),

    /// Generic backend error.
    #[error("backend error: {0}")]
    Backend(String),
}

/// Result type for backend operations.
pub type HalResult<T> = Result<T, HalError>;

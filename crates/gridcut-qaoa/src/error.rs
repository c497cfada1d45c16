//! Error type for the end-to-end runner.

use thiserror::Error;

/// Errors surfaced by a QAOA run.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QaoaError {
    /// Error from the core data model.
    #[error(transparent)]
    Core(#[from] gridcut_core::CoreError),

    /// Error from the statevector engine.
    #[error(transparent)]
    Sim(#[from] gridcut_sim::SimError),
}

/// Result type for QAOA runs.
pub type QaoaResult<T> = Result<T, QaoaError>;

//! Error types for the sim crate.

use thiserror::Error;

/// Errors produced by statevector evolution, energy evaluation and
/// sampling.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SimError {
    /// Requested qubit count exceeds the configured simulation ceiling.
    /// Raised before any amplitude vector is allocated.
    #[error("{n_qubits} qubits requested but the simulation ceiling is {max_qubits}")]
    QubitLimitExceeded {
        /// Requested qubit count.
        n_qubits: usize,
        /// Configured ceiling.
        max_qubits: usize,
    },

    /// A Hamiltonian term references a qubit index that is out of range.
    #[error("Hamiltonian term references qubit {qubit} but the register only has {n_qubits} qubits")]
    QubitOutOfRange {
        /// The offending qubit index.
        qubit: u32,
        /// Number of qubits in the register.
        n_qubits: usize,
    },

    /// The energy expectation's imaginary remainder exceeds tolerance,
    /// signaling a Hamiltonian or state construction defect.
    #[error("expectation has imaginary remainder {imag} above tolerance {tolerance}")]
    ResidualImaginary {
        /// Observed imaginary component.
        imag: f64,
        /// Allowed magnitude.
        tolerance: f64,
    },

    /// Shot count must be at least 1 for stochastic sampling.
    #[error("shots must be at least 1, got {0}")]
    InvalidShots(u32),

    /// Error from the core data model.
    #[error(transparent)]
    Core(#[from] gridcut_core::CoreError),
}

/// Result type for simulation operations.
pub type SimResult<T> = Result<T, SimError>;

//! Layered ansatz evolution.
//!
//! Runs `p` alternating cost/mixer layers on the uniform superposition.
//! The amplitude vector is freshly created per call and never shared, so
//! [`energy`] is a pure function of `(hamiltonian, angles)` — callers may
//! evaluate candidate angle vectors in parallel without coordination.
//!
//! Cost per call: `O(p · (|E| + n) · 2^n)`. The exponential factor is the
//! whole point of the qubit ceiling: callers pass `max_qubits` and get a
//! definite [`SimError::QubitLimitExceeded`] instead of an allocation
//! blow-up.

use tracing::debug;

use gridcut_core::{Angles, CostHamiltonian};

use crate::error::{SimError, SimResult};
use crate::statevector::Statevector;

/// Evolve the uniform superposition through the depth-`p` ansatz.
///
/// Fails before allocating anything when `n_qubits` exceeds `max_qubits`
/// or a Hamiltonian term references a qubit outside the register.
pub fn evolve(
    hamiltonian: &CostHamiltonian,
    n_qubits: usize,
    angles: &Angles,
    max_qubits: usize,
) -> SimResult<Statevector> {
    if n_qubits > max_qubits {
        return Err(SimError::QubitLimitExceeded {
            n_qubits,
            max_qubits,
        });
    }
    if hamiltonian.min_qubits() as usize > n_qubits {
        return Err(SimError::QubitOutOfRange {
            qubit: hamiltonian.min_qubits() - 1,
            n_qubits,
        });
    }

    debug!(
        n_qubits,
        depth = angles.depth(),
        n_terms = hamiltonian.n_terms(),
        "evolving ansatz"
    );

    let mut state = Statevector::uniform(n_qubits);
    for layer in 0..angles.depth() {
        state.apply_cost_layer(hamiltonian, angles.gammas()[layer]);
        state.apply_mixer_layer(angles.betas()[layer]);
    }
    Ok(state)
}

/// Energy of the ansatz state for the given angles.
///
/// Pure and side-effect free: composes [`evolve`] with
/// [`crate::energy::expectation`].
pub fn energy(
    hamiltonian: &CostHamiltonian,
    n_qubits: usize,
    angles: &Angles,
    max_qubits: usize,
) -> SimResult<f64> {
    let state = evolve(hamiltonian, n_qubits, angles, max_qubits)?;
    crate::energy::expectation(&state, hamiltonian)
}

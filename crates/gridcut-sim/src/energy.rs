//! Energy expectation of a diagonal cost Hamiltonian.

use num_complex::Complex64;

use gridcut_core::CostHamiltonian;

use crate::error::{SimError, SimResult};
use crate::statevector::Statevector;

/// Allowed magnitude of the expectation's imaginary remainder.
pub const IMAG_TOLERANCE: f64 = 1e-9;

/// Compute `⟨ψ|H|ψ⟩` for a diagonal sum of Z⊗Z terms.
///
/// `Σ_terms w · Σ_basis |a[basis]|² · eigen(term, basis)`, with the same
/// equal/unequal-bit eigenvalue rule the cost layer uses. The expectation
/// of a Hermitian operator on a normalized state is mathematically real;
/// the imaginary remainder is still accumulated and checked against
/// [`IMAG_TOLERANCE`] as a self-check on Hamiltonian and state
/// construction, and only the real part is returned.
pub fn expectation(state: &Statevector, hamiltonian: &CostHamiltonian) -> SimResult<f64> {
    let mut acc = Complex64::new(0.0, 0.0);
    for (index, amp) in state.amplitudes().iter().enumerate() {
        let diag: f64 = hamiltonian
            .terms()
            .iter()
            .map(|t| t.weight * t.eigenvalue(index))
            .sum();
        acc += amp.conj() * amp * diag;
    }

    if acc.im.abs() > IMAG_TOLERANCE {
        return Err(SimError::ResidualImaginary {
            imag: acc.im,
            tolerance: IMAG_TOLERANCE,
        });
    }
    Ok(acc.re)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use gridcut_core::{Graph, ZzTerm};

    #[test]
    fn uniform_state_has_zero_energy() {
        let g = Graph::grid(2, 2);
        let h = CostHamiltonian::from_graph(&g);
        let state = Statevector::uniform(4);
        assert_abs_diff_eq!(expectation(&state, &h).unwrap(), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn empty_hamiltonian_is_exactly_zero() {
        let h = CostHamiltonian::from_terms(vec![]);
        let state = Statevector::uniform(3);
        assert_eq!(expectation(&state, &h).unwrap(), 0.0);
    }

    #[test]
    fn single_term_bounds() {
        // A unit-weight ZZ expectation lies in [-1, 1].
        let h = CostHamiltonian::from_terms(vec![ZzTerm::new(0, 1, 1.0)]);
        let mut state = Statevector::uniform(2);
        state.apply_cost_layer(&h, 0.37);
        state.apply_mixer_layer(0.81);
        let e = expectation(&state, &h).unwrap();
        assert!((-1.0..=1.0).contains(&e));
    }

    #[test]
    fn invariant_under_global_phase() {
        let g = Graph::grid(2, 2);
        let h = CostHamiltonian::from_graph(&g);

        let mut state = Statevector::uniform(4);
        state.apply_cost_layer(&h, 0.5);
        state.apply_mixer_layer(0.3);
        let before = expectation(&state, &h).unwrap();

        // A ZZ term on one and the same qubit has eigenvalue +1 on every
        // basis state, so its cost layer is a pure global phase.
        let phase_only = CostHamiltonian::from_terms(vec![ZzTerm::new(0, 0, 1.0)]);
        state.apply_cost_layer(&phase_only, 1.234);
        let after = expectation(&state, &h).unwrap();

        assert_abs_diff_eq!(before, after, epsilon = 1e-9);
    }
}

//! Measurement sampling.
//!
//! Converts a final statevector into a [`Distribution`], either exactly
//! from the squared amplitudes or stochastically by drawing shots. The
//! index → bitstring encoding is the one fixed in
//! [`gridcut_core::distribution`]: character `k` is bit `k` is node `k`.
//!
//! The random generator is always injected by the caller; there is no
//! process-wide random state, so sampling experiments are reproducible
//! from a seed.

use rand::Rng;
use rustc_hash::FxHashMap;
use tracing::debug;

use gridcut_core::{Distribution, index_to_bitstring};

use crate::error::{SimError, SimResult};
use crate::statevector::Statevector;

/// Exact measurement distribution: probability `|a[index]|²` per
/// bitstring. Zero-amplitude basis states are omitted from the table.
pub fn exact_distribution(state: &Statevector) -> SimResult<Distribution> {
    let n = state.num_qubits();
    let mut probs = FxHashMap::default();
    for (index, amp) in state.amplitudes().iter().enumerate() {
        let p = amp.norm_sqr();
        if p > 0.0 {
            probs.insert(index_to_bitstring(index, n), p);
        }
    }
    Ok(Distribution::from_probs(n, probs)?)
}

/// Stochastic measurement distribution: `shots` independent draws from
/// the categorical distribution over basis states, normalized to sum
/// to 1.
pub fn sample_distribution<R: Rng + ?Sized>(
    state: &Statevector,
    shots: u32,
    rng: &mut R,
) -> SimResult<Distribution> {
    if shots == 0 {
        return Err(SimError::InvalidShots(0));
    }

    let n = state.num_qubits();
    let mut counts: FxHashMap<String, u64> = FxHashMap::default();
    for _ in 0..shots {
        let index = state.sample_index(rng);
        *counts.entry(index_to_bitstring(index, n)).or_insert(0) += 1;
    }
    debug!(shots, outcomes = counts.len(), "sampled measurement shots");
    Ok(Distribution::from_counts(n, &counts)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use gridcut_core::{Angles, CostHamiltonian, Graph};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::ansatz::evolve;

    #[test]
    fn exact_distribution_of_uniform_state() {
        let state = Statevector::uniform(3);
        let d = exact_distribution(&state).unwrap();
        assert_eq!(d.len(), 8);
        for (_, p) in d.iter() {
            assert_abs_diff_eq!(p, 0.125, epsilon = 1e-12);
        }
    }

    #[test]
    fn exact_distribution_after_evolution_sums_to_one() {
        let g = Graph::grid(2, 2);
        let h = CostHamiltonian::from_graph(&g);
        let angles = Angles::new(vec![0.4], vec![0.3]).unwrap();
        let state = evolve(&h, 4, &angles, 20).unwrap();
        let d = exact_distribution(&state).unwrap();
        let total: f64 = d.iter().map(|(_, p)| p).sum();
        assert_abs_diff_eq!(total, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn sampling_concentrated_state_returns_single_bitstring() {
        // All mass on one basis state: 1000 shots must all land there.
        let state = concentrated_state(0b01, 2);
        let mut rng = StdRng::seed_from_u64(42);
        let d = sample_distribution(&state, 1000, &mut rng).unwrap();
        assert_eq!(d.len(), 1);
        assert_abs_diff_eq!(d.probability("10"), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(d.probability("01"), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn sampling_is_reproducible_from_seed() {
        let g = Graph::grid(2, 2);
        let h = CostHamiltonian::from_graph(&g);
        let angles = Angles::new(vec![0.4], vec![0.3]).unwrap();
        let state = evolve(&h, 4, &angles, 20).unwrap();

        let a = sample_distribution(&state, 500, &mut StdRng::seed_from_u64(9)).unwrap();
        let b = sample_distribution(&state, 500, &mut StdRng::seed_from_u64(9)).unwrap();
        for (bitstring, p) in a.iter() {
            assert_abs_diff_eq!(b.probability(bitstring), p, epsilon = 1e-12);
        }
    }

    #[test]
    fn zero_shots_rejected() {
        let state = Statevector::uniform(2);
        let mut rng = StdRng::seed_from_u64(1);
        let err = sample_distribution(&state, 0, &mut rng).unwrap_err();
        assert!(matches!(err, SimError::InvalidShots(0)));
    }

    fn concentrated_state(index: usize, n_qubits: usize) -> Statevector {
        use num_complex::Complex64;
        let mut amps = vec![Complex64::new(0.0, 0.0); 1 << n_qubits];
        amps[index] = Complex64::new(1.0, 0.0);
        Statevector::from_amplitudes(amps)
    }
}

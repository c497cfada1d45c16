//! Dense amplitude-vector simulation engine.
//!
//! The QAOA ansatz needs exactly two operations beyond state preparation,
//! and both act index-wise on the `2^n` amplitude vector without ever
//! materializing a matrix:
//!
//! - the **cost layer** is diagonal, so it is a per-index phase multiply
//!   (`O(2^n)` per Hamiltonian term);
//! - the **mixer layer** is a single-qubit X rotation, so it is a 2×2
//!   rotation on each amplitude pair whose indices differ only in one bit
//!   (`O(2^n)` per qubit).
//!
//! Bit `k` of a basis-state index is qubit `k`.

use num_complex::Complex64;
use rand::Rng;

use gridcut_core::CostHamiltonian;

/// A statevector over `2^n` computational basis states.
#[derive(Debug)]
pub struct Statevector {
    /// The state amplitudes (2^n complex numbers).
    amplitudes: Vec<Complex64>,
    /// Number of qubits.
    num_qubits: usize,
}

impl Statevector {
    /// Create the uniform superposition: every basis state at `1/√(2^n)`.
    ///
    /// Equivalent to a balanced rotation on every qubit of `|0…0⟩`, which
    /// is how the ansatz starts.
    pub fn uniform(num_qubits: usize) -> Self {
        let size = 1usize << num_qubits;
        let amp = Complex64::new(1.0 / (size as f64).sqrt(), 0.0);
        Self {
            amplitudes: vec![amp; size],
            num_qubits,
        }
    }

    /// Create from a raw amplitude vector of length `2^n`.
    ///
    /// Useful for states handed over by an external backend. The caller
    /// is responsible for normalization.
    pub fn from_amplitudes(amplitudes: Vec<Complex64>) -> Self {
        assert!(
            amplitudes.len().is_power_of_two(),
            "amplitude vector length {} is not a power of two",
            amplitudes.len()
        );
        let num_qubits = amplitudes.len().trailing_zeros() as usize;
        Self {
            amplitudes,
            num_qubits,
        }
    }

    /// Number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// The raw amplitudes, indexed by basis state.
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Probability of measuring a basis-state index.
    pub fn probability(&self, index: usize) -> f64 {
        self.amplitudes[index].norm_sqr()
    }

    /// Total squared norm; 1 within floating tolerance for a valid state.
    pub fn norm_sqr(&self) -> f64 {
        self.amplitudes.iter().map(Complex64::norm_sqr).sum()
    }

    /// Apply one cost layer: for every term over qubits `(i, j)` with
    /// weight `w`, multiply each amplitude by `exp(−i·2γ·w·eigen)`,
    /// where `eigen` is +1 when bits `i` and `j` agree and −1 otherwise.
    pub fn apply_cost_layer(&mut self, hamiltonian: &CostHamiltonian, gamma: f64) {
        for term in hamiltonian.terms() {
            let equal = Complex64::from_polar(1.0, -2.0 * gamma * term.weight);
            let unequal = equal.conj();
            for (index, amp) in self.amplitudes.iter_mut().enumerate() {
                if term.eigenvalue(index) > 0.0 {
                    *amp *= equal;
                } else {
                    *amp *= unequal;
                }
            }
        }
    }

    /// Apply one mixer layer: for every qubit `k`, rotate each amplitude
    /// pair `(a0, a1)` at indices `idx` / `idx ^ (1<<k)` to
    /// `(cosβ·a0 − i·sinβ·a1, cosβ·a1 − i·sinβ·a0)`.
    pub fn apply_mixer_layer(&mut self, beta: f64) {
        let c = beta.cos();
        let neg_i_s = Complex64::new(0.0, -beta.sin());
        for k in 0..self.num_qubits {
            let mask = 1usize << k;
            for idx in 0..self.amplitudes.len() {
                if idx & mask == 0 {
                    let pair = idx | mask;
                    let a0 = self.amplitudes[idx];
                    let a1 = self.amplitudes[pair];
                    self.amplitudes[idx] = c * a0 + neg_i_s * a1;
                    self.amplitudes[pair] = c * a1 + neg_i_s * a0;
                }
            }
        }
    }

    /// Draw one basis-state index from the measurement distribution.
    pub fn sample_index<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        let r: f64 = rng.gen_range(0.0..1.0);
        let mut cumulative = 0.0;
        for (index, amp) in self.amplitudes.iter().enumerate() {
            cumulative += amp.norm_sqr();
            if r < cumulative {
                return index;
            }
        }
        // Unreachable for a normalized state; guards rounding at the tail.
        self.amplitudes.len() - 1
    }
}

//! Cost Hamiltonian for grid-graph Max-Cut.
//!
//! The true Max-Cut cost function is `Σ_{(i,j)∈E} (1 − Z_i Z_j) / 2`.
//! Optimization is invariant under an additive constant, so the constant
//! shift is dropped and only one unit-weighted Z⊗Z term per edge is kept.
//! Callers must treat the resulting energy as a monotonic proxy for the
//! cut value, never as the cut value itself.
//!
//! Every term is diagonal in the computational basis, so the whole
//! Hamiltonian is described by a per-basis-state eigenvalue: the product
//! of ±1 contributions from each term.

use serde::{Deserialize, Serialize};

use crate::graph::Graph;

/// A single weighted Z⊗Z coupling between two qubits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZzTerm {
    /// First qubit.
    pub i: u32,
    /// Second qubit.
    pub j: u32,
    /// Real coefficient.
    pub weight: f64,
}

impl ZzTerm {
    /// Create a new term.
    pub fn new(i: u32, j: u32, weight: f64) -> Self {
        Self { i, j, weight }
    }

    /// Eigenvalue of this Z⊗Z operator on a computational basis state.
    ///
    /// `+1` when bits `i` and `j` of the index agree, `−1` otherwise.
    #[inline]
    pub fn eigenvalue(&self, basis: usize) -> f64 {
        if ((basis >> self.i) ^ (basis >> self.j)) & 1 == 0 {
            1.0
        } else {
            -1.0
        }
    }
}

/// A sum of commuting diagonal Z⊗Z terms, one per graph edge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostHamiltonian {
    terms: Vec<ZzTerm>,
}

impl CostHamiltonian {
    /// Derive the cost Hamiltonian from a graph: one term per edge,
    /// weight fixed at 1.0 for unweighted Max-Cut.
    ///
    /// An empty edge set yields an empty Hamiltonian whose energy is
    /// exactly 0 for any state.
    pub fn from_graph(graph: &Graph) -> Self {
        Self {
            terms: graph
                .edges()
                .map(|(i, j)| ZzTerm::new(i as u32, j as u32, 1.0))
                .collect(),
        }
    }

    /// Create from an explicit term list.
    pub fn from_terms(terms: Vec<ZzTerm>) -> Self {
        Self { terms }
    }

    /// All terms, in edge order.
    pub fn terms(&self) -> &[ZzTerm] {
        &self.terms
    }

    /// Number of terms.
    pub fn n_terms(&self) -> usize {
        self.terms.len()
    }

    /// True if there are no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// The minimum number of qubits required to represent this Hamiltonian.
    ///
    /// Returns 0 for an empty Hamiltonian.
    pub fn min_qubits(&self) -> u32 {
        self.terms
            .iter()
            .map(|t| t.i.max(t.j))
            .max()
            .map_or(0, |q| q + 1)
    }
}

impl FromIterator<ZzTerm> for CostHamiltonian {
    fn from_iter<T: IntoIterator<Item = ZzTerm>>(iter: T) -> Self {
        Self {
            terms: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_term_per_edge() {
        for (rows, cols) in [(1, 2), (2, 2), (2, 3), (3, 3), (4, 4)] {
            let g = Graph::grid(rows, cols);
            let h = CostHamiltonian::from_graph(&g);
            assert_eq!(h.n_terms(), g.num_edges());
            assert!(h.terms().iter().all(|t| t.weight == 1.0));
        }
    }

    #[test]
    fn empty_graph_empty_hamiltonian() {
        let g = Graph::from_edges(3, &[]).unwrap();
        let h = CostHamiltonian::from_graph(&g);
        assert!(h.is_empty());
        assert_eq!(h.min_qubits(), 0);
    }

    #[test]
    fn eigenvalue_rule() {
        let t = ZzTerm::new(0, 2, 1.0);
        assert_eq!(t.eigenvalue(0b000), 1.0); // bits agree (0, 0)
        assert_eq!(t.eigenvalue(0b101), 1.0); // bits agree (1, 1)
        assert_eq!(t.eigenvalue(0b001), -1.0); // bits differ
        assert_eq!(t.eigenvalue(0b100), -1.0);
        assert_eq!(t.eigenvalue(0b010), 1.0); // middle bit is irrelevant
    }

    #[test]
    fn min_qubits_covers_highest_index() {
        let g = Graph::grid(2, 2);
        let h = CostHamiltonian::from_graph(&g);
        assert_eq!(h.min_qubits(), 4);
    }
}

//! `gridcut-core` — data model for QAOA on grid-graph Max-Cut.
//!
//! Provides the pieces every other crate reasons about:
//!
//! - [`Graph`] — grid (or explicit edge-list) topologies with dense
//!   zero-based node labels
//! - [`CostHamiltonian`] — one diagonal Z⊗Z term per edge
//! - [`Angles`] — the `2p` variational parameters of a depth-`p` ansatz
//! - [`Distribution`] — validated bitstring probability tables
//! - [`analysis`] — classical cut values and approximation ratios
//!
//! # Quick start
//!
//! ```rust
//! use gridcut_core::{CostHamiltonian, Graph};
//!
//! let graph = Graph::grid(2, 2);
//! let hamiltonian = CostHamiltonian::from_graph(&graph);
//! assert_eq!(hamiltonian.n_terms(), graph.num_edges());
//! ```

pub mod analysis;
pub mod angles;
pub mod distribution;
pub mod error;
pub mod graph;
pub mod hamiltonian;

pub use analysis::{approximation_ratio, best_sampled_cut, expected_cut};
pub use angles::Angles;
pub use distribution::{Distribution, bitstring_to_index, index_to_bitstring};
pub use error::{CoreError, CoreResult};
pub use graph::Graph;
pub use hamiltonian::{CostHamiltonian, ZzTerm};

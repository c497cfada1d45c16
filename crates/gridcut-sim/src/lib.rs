//! `gridcut-sim` — statevector engine for the QAOA Max-Cut ansatz.
//!
//! Simulates the layered ansatz on a dense `2^n` amplitude vector using
//! only the two operations the ansatz needs: diagonal phase application
//! for the cost layers and paired-amplitude rotations for the mixer
//! layers. No gate objects, no matrices.
//!
//! # Quick start
//!
//! ```rust
//! use gridcut_core::{Angles, CostHamiltonian, Graph};
//! use gridcut_sim::{energy, evolve, exact_distribution};
//!
//! let graph = Graph::grid(2, 2);
//! let hamiltonian = CostHamiltonian::from_graph(&graph);
//! let angles = Angles::new(vec![0.4], vec![0.3]).unwrap();
//!
//! let e = energy(&hamiltonian, graph.num_nodes(), &angles, 20).unwrap();
//! assert!(e.abs() <= hamiltonian.n_terms() as f64);
//!
//! let state = evolve(&hamiltonian, graph.num_nodes(), &angles, 20).unwrap();
//! let distribution = exact_distribution(&state).unwrap();
//! assert_eq!(distribution.n_bits(), 4);
//! ```

pub mod ansatz;
pub mod energy;
pub mod error;
pub mod sampler;
pub mod statevector;

pub use ansatz::{energy, evolve};
pub use energy::{IMAG_TOLERANCE, expectation};
pub use error::{SimError, SimResult};
pub use sampler::{exact_distribution, sample_distribution};
pub use statevector::Statevector;

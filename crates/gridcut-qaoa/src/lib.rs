//! `gridcut-qaoa` — end-to-end QAOA Max-Cut pipeline.
//!
//! Wires the data model, the statevector engine and the derivative-free
//! search into a single [`QaoaRunner`]: hand it a graph, get back a
//! [`QaoaReport`] with the optimized angles, the measured distribution
//! and its approximation ratio.
//!
//! # Quick start
//!
//! ```rust
//! use gridcut_core::Graph;
//! use gridcut_qaoa::QaoaRunner;
//!
//! let graph = Graph::grid(1, 2);
//! let report = QaoaRunner::new().run(&graph).unwrap();
//! assert!(report.approximation_ratio > 0.99);
//! ```

pub mod error;
pub mod runner;

pub use error::{QaoaError, QaoaResult};
pub use runner::{QaoaReport, QaoaRunner, SamplingMode};

//! `gridcut-opt` — derivative-free parameter search.
//!
//! Variational quantum objectives are noisy, non-smooth and expensive, so
//! the search methods here never ask for gradients: they propose candidate
//! parameter vectors, observe objective values and contract toward a local
//! minimum.
//!
//! The [`Optimizer`] trait takes a fallible objective. A failing
//! evaluation aborts the run with the originating error — it is never
//! masked as an infinite or placeholder value.
//!
//! # Quick start
//!
//! ```rust
//! use gridcut_opt::{NelderMead, Optimizer};
//!
//! let optimizer = NelderMead::new().with_max_iterations(200);
//! let result = optimizer
//!     .minimize(
//!         |x| Ok::<f64, std::convert::Infallible>((x[0] - 1.0).powi(2) + x[1].powi(2)),
//!         vec![0.0, 0.0],
//!     )
//!     .unwrap();
//! assert!(result.optimal_value < 1e-3);
//! ```

pub mod nelder_mead;

pub use nelder_mead::NelderMead;

use serde::{Deserialize, Serialize};

/// Result of an optimization run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizationResult {
    /// Best parameter vector found.
    pub optimal_params: Vec<f64>,
    /// Objective value at the best parameters.
    pub optimal_value: f64,
    /// Number of objective evaluations.
    pub num_evaluations: usize,
    /// Number of search iterations.
    pub num_iterations: usize,
    /// Best objective value after each improving iteration.
    pub history: Vec<f64>,
    /// True if an internal convergence criterion was met; false if the
    /// iteration budget ran out first.
    pub converged: bool,
}

/// A derivative-free minimizer over a fallible objective.
pub trait Optimizer {
    /// Minimize `objective` starting from `initial`.
    ///
    /// The first objective error encountered aborts the search and is
    /// returned unchanged.
    fn minimize<F, E>(&self, objective: F, initial: Vec<f64>) -> Result<OptimizationResult, E>
    where
        F: FnMut(&[f64]) -> Result<f64, E>;
}

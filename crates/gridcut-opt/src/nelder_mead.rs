//! Nelder-Mead simplex search with a shrinking trust radius.
//!
//! A simplex of `n + 1` points walks the objective landscape through
//! reflection, expansion, contraction and shrink moves. Steps are capped
//! by a trust radius that halves whenever the simplex flattens out, which
//! keeps the method stable on the plateaus a sampled quantum objective
//! produces. No restart logic lives here; callers that want restarts
//! wrap `minimize` themselves.

use tracing::debug;

use crate::{OptimizationResult, Optimizer};

/// Nelder-Mead simplex optimizer configuration.
#[derive(Debug, Clone)]
pub struct NelderMead {
    /// Maximum number of iterations.
    pub max_iterations: usize,
    /// Convergence tolerance on the simplex value spread.
    pub tolerance: f64,
    /// Initial step / trust radius.
    pub initial_step: f64,
    /// Final trust radius; convergence requires the radius to reach it.
    pub final_step: f64,
}

impl Default for NelderMead {
    fn default() -> Self {
        Self {
            max_iterations: 200,
            tolerance: 1e-6,
            initial_step: 0.5,
            final_step: 1e-4,
        }
    }
}

impl NelderMead {
    /// Create an optimizer with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the iteration budget.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the convergence tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the initial and final trust radii.
    pub fn with_trust_radius(mut self, initial_step: f64, final_step: f64) -> Self {
        self.initial_step = initial_step;
        self.final_step = final_step;
        self
    }
}

impl Optimizer for NelderMead {
    fn minimize<F, E>(&self, mut objective: F, initial: Vec<f64>) -> Result<OptimizationResult, E>
    where
        F: FnMut(&[f64]) -> Result<f64, E>,
    {
        let n = initial.len();
        let mut num_evaluations = 0usize;
        let mut eval = |point: &[f64], count: &mut usize| -> Result<f64, E> {
            *count += 1;
            objective(point)
        };

        // Initial simplex: the start point plus one step along each axis.
        let mut simplex: Vec<Vec<f64>> = vec![initial.clone()];
        let mut values: Vec<f64> = vec![eval(&initial, &mut num_evaluations)?];
        for axis in 0..n {
            let mut vertex = initial.clone();
            vertex[axis] += self.initial_step;
            values.push(eval(&vertex, &mut num_evaluations)?);
            simplex.push(vertex);
        }

        let mut best_so_far = values[0];
        let mut history = vec![best_so_far];
        let mut radius = self.initial_step;
        let mut converged = false;
        let mut num_iterations = 0usize;

        for iteration in 0..self.max_iterations {
            num_iterations = iteration + 1;

            let mut order: Vec<usize> = (0..=n).collect();
            order.sort_by(|&a, &b| {
                values[a]
                    .partial_cmp(&values[b])
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
            let best = order[0];
            let worst = order[n];

            let spread = values[worst] - values[best];
            if spread < self.tolerance && radius <= self.final_step {
                converged = true;
                break;
            }

            // Flat simplex but radius still coarse: tighten and rebuild
            // around the best vertex.
            if spread < self.tolerance {
                radius = (radius * 0.5).max(self.final_step);
                let anchor = simplex[best].clone();
                let anchor_value = values[best];
                simplex = vec![anchor.clone()];
                values = vec![anchor_value];
                for axis in 0..n {
                    let mut vertex = anchor.clone();
                    vertex[axis] += radius;
                    values.push(eval(&vertex, &mut num_evaluations)?);
                    simplex.push(vertex);
                }
                continue;
            }

            // Centroid of every vertex except the worst.
            let mut centroid = vec![0.0; n];
            for &idx in &order[..n] {
                for (c, v) in centroid.iter_mut().zip(&simplex[idx]) {
                    *c += v;
                }
            }
            for c in &mut centroid {
                *c /= n as f64;
            }

            // Reflection, capped by the trust radius.
            let mut reflected: Vec<f64> = centroid
                .iter()
                .zip(&simplex[worst])
                .map(|(c, w)| 2.0 * c - w)
                .collect();
            for (r, c) in reflected.iter_mut().zip(&centroid) {
                let step = *r - c;
                if step.abs() > radius {
                    *r = c + radius * step.signum();
                }
            }
            let reflected_value = eval(&reflected, &mut num_evaluations)?;

            if reflected_value < values[best] {
                // Expansion.
                let expanded: Vec<f64> = centroid
                    .iter()
                    .zip(&reflected)
                    .map(|(c, r)| c + 2.0 * (r - c))
                    .collect();
                let expanded_value = eval(&expanded, &mut num_evaluations)?;
                if expanded_value < reflected_value {
                    simplex[worst] = expanded;
                    values[worst] = expanded_value;
                } else {
                    simplex[worst] = reflected;
                    values[worst] = reflected_value;
                }
            } else if reflected_value < values[order[n - 1]] {
                simplex[worst] = reflected;
                values[worst] = reflected_value;
            } else {
                // Contraction toward the centroid.
                let contracted: Vec<f64> = centroid
                    .iter()
                    .zip(&simplex[worst])
                    .map(|(c, w)| 0.5 * (c + w))
                    .collect();
                let contracted_value = eval(&contracted, &mut num_evaluations)?;
                if contracted_value < values[worst] {
                    simplex[worst] = contracted;
                    values[worst] = contracted_value;
                } else {
                    // Shrink everything toward the best vertex.
                    let anchor = simplex[best].clone();
                    for idx in 0..=n {
                        if idx != best {
                            for (v, a) in simplex[idx].iter_mut().zip(&anchor) {
                                *v = 0.5 * (*v + a);
                            }
                            values[idx] = eval(&simplex[idx], &mut num_evaluations)?;
                        }
                    }
                }
            }

            let iteration_best = values
                .iter()
                .cloned()
                .fold(f64::INFINITY, f64::min);
            if iteration_best < best_so_far {
                best_so_far = iteration_best;
                history.push(best_so_far);
                debug!(iteration, value = best_so_far, "improved objective");
            }
        }

        let best_idx = values
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(i, _)| i)
            .unwrap_or(0);

        Ok(OptimizationResult {
            optimal_params: simplex[best_idx].clone(),
            optimal_value: values[best_idx],
            num_evaluations,
            num_iterations,
            history,
            converged,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;

    fn ok(value: f64) -> Result<f64, Infallible> {
        Ok(value)
    }

    #[test]
    fn minimizes_shifted_quadratic() {
        let optimizer = NelderMead::new().with_max_iterations(300);
        let result = optimizer
            .minimize(
                |p| ok((p[0] - 1.0).powi(2) + (p[1] - 2.0).powi(2)),
                vec![0.0, 0.0],
            )
            .unwrap();

        assert!(result.optimal_value < 0.01);
        assert!((result.optimal_params[0] - 1.0).abs() < 0.1);
        assert!((result.optimal_params[1] - 2.0).abs() < 0.1);
    }

    #[test]
    fn improves_rosenbrock() {
        let optimizer = NelderMead::new().with_max_iterations(500);
        let result = optimizer
            .minimize(
                |p| ok((1.0 - p[0]).powi(2) + 100.0 * (p[1] - p[0].powi(2)).powi(2)),
                vec![0.0, 0.0],
            )
            .unwrap();

        // Rosenbrock is hard; just require substantial progress.
        assert!(result.optimal_value < 1.0);
    }

    #[test]
    fn budget_exhaustion_is_reported() {
        let optimizer = NelderMead::new().with_max_iterations(3);
        let result = optimizer
            .minimize(|p| ok(p[0].powi(2) + p[1].powi(2)), vec![5.0, -3.0])
            .unwrap();

        assert!(!result.converged);
        assert_eq!(result.num_iterations, 3);
    }

    #[test]
    fn history_is_monotonic() {
        let optimizer = NelderMead::new().with_max_iterations(200);
        let result = optimizer
            .minimize(|p| ok(p[0].powi(2)), vec![4.0])
            .unwrap();

        for window in result.history.windows(2) {
            assert!(window[1] <= window[0]);
        }
    }

    #[test]
    fn objective_error_aborts_run() {
        #[derive(Debug, PartialEq)]
        struct Boom;

        let mut calls = 0;
        let optimizer = NelderMead::new();
        let outcome = optimizer.minimize(
            |_p: &[f64]| {
                calls += 1;
                if calls >= 3 { Err(Boom) } else { Ok(1.0) }
            },
            vec![0.0, 0.0],
        );

        assert_eq!(outcome.unwrap_err(), Boom);
        assert_eq!(calls, 3);
    }

    #[test]
    fn evaluation_count_matches_calls() {
        let mut calls = 0usize;
        let optimizer = NelderMead::new().with_max_iterations(50);
        let result = optimizer
            .minimize(
                |p| {
                    calls += 1;
                    ok(p[0].powi(2))
                },
                vec![2.0],
            )
            .unwrap();
        assert_eq!(result.num_evaluations, calls);
    }
}

//! Cut-quality analysis of measured distributions.
//!
//! The approximation ratio divides the probability-weighted average cut by
//! the graph's edge count. Using the edge count as the classical optimum
//! is only valid for bipartite graphs — every grid qualifies. For general
//! edge lists, divide by [`crate::graph::Graph::max_cut_brute_force`]
//! instead.

use crate::distribution::{Distribution, bitstring_to_index};
use crate::error::{CoreError, CoreResult};
use crate::graph::Graph;

/// Probability-weighted average cut value of a distribution.
pub fn expected_cut(graph: &Graph, distribution: &Distribution) -> CoreResult<f64> {
    let n = graph.num_nodes();
    let mut total = 0.0;
    for (bitstring, prob) in distribution.iter() {
        let index = bitstring_to_index(bitstring, n)?;
        total += prob * graph.cut_value_of_index(index) as f64;
    }
    Ok(total)
}

/// Approximation ratio of a distribution against the bipartite optimum.
///
/// Lies in `[0, 1]`; equals 1 exactly when all mass sits on maximum cuts.
/// A zero-edge graph has no defined ratio and is rejected with
/// [`CoreError::DegenerateGraph`].
pub fn approximation_ratio(graph: &Graph, distribution: &Distribution) -> CoreResult<f64> {
    if graph.num_edges() == 0 {
        return Err(CoreError::DegenerateGraph);
    }
    Ok(expected_cut(graph, distribution)? / graph.num_edges() as f64)
}

/// The sampled bitstring achieving the largest cut, with its cut value.
///
/// Returns `None` for an empty distribution.
pub fn best_sampled_cut(
    graph: &Graph,
    distribution: &Distribution,
) -> CoreResult<Option<(String, usize)>> {
    let n = graph.num_nodes();
    let mut best: Option<(String, usize)> = None;
    for (bitstring, _) in distribution.iter() {
        let index = bitstring_to_index(bitstring, n)?;
        let cut = graph.cut_value_of_index(index);
        if best.as_ref().is_none_or(|(_, c)| cut > *c) {
            best = Some((bitstring.to_string(), cut));
        }
    }
    Ok(best)
}

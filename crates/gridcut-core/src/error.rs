//! Error types for the core crate.

use thiserror::Error;

/// Errors produced by graph construction and cut analysis.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CoreError {
    /// An edge references a node outside `0..n_nodes`.
    #[error("edge endpoint {node} out of range for graph with {n_nodes} nodes")]
    NodeOutOfRange {
        /// The offending node label.
        node: usize,
        /// Number of nodes in the graph.
        n_nodes: usize,
    },

    /// An edge connects a node to itself.
    #[error("self-loop on node {node} is not allowed")]
    SelfLoop {
        /// The looped node.
        node: usize,
    },

    /// The same undirected edge was given twice.
    #[error("duplicate edge ({a}, {b})")]
    DuplicateEdge {
        /// First endpoint.
        a: usize,
        /// Second endpoint.
        b: usize,
    },

    /// Gamma and beta vectors have different lengths, or a flat parameter
    /// vector does not match the requested depth.
    #[error("expected {expected} angle parameters, got {got}")]
    ParameterCountMismatch {
        /// Expected parameter count.
        expected: usize,
        /// Actual parameter count.
        got: usize,
    },

    /// Distribution values do not sum to 1 within tolerance.
    #[error("distribution mass sums to {sum}, expected 1 within {tolerance}")]
    InvalidDistribution {
        /// Observed total mass.
        sum: f64,
        /// Allowed deviation from 1.
        tolerance: f64,
    },

    /// A bitstring key does not match the graph's node count or contains
    /// characters other than '0' and '1'.
    #[error("malformed bitstring {bitstring:?}, expected {expected_bits} binary digits")]
    MalformedBitstring {
        /// The offending key.
        bitstring: String,
        /// Required width.
        expected_bits: usize,
    },

    /// The graph has no edges, so the cut-based approximation ratio is
    /// undefined (division by zero edge count).
    #[error("graph has no edges — approximation ratio is undefined")]
    DegenerateGraph,
}

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

//! Graph topology for the Max-Cut problem.
//!
//! The Max-Cut problem: given a graph G = (V, E), partition the vertices
//! into two sets S and T to maximize the number of edges between S and T.
//!
//! The primary instances here are m×n grid graphs. Grids are bipartite
//! (checkerboard coloring), so their maximum cut equals the edge count —
//! a fact the analysis module relies on and which does **not** hold for
//! general graphs.
//!
//! # Bit convention
//!
//! Whenever a partition is encoded as a basis-state index, bit `k` of the
//! index is the side assignment of node `k`. See
//! [`crate::distribution::index_to_bitstring`] for the string form.

use petgraph::graph::{NodeIndex, UnGraph};
use rustc_hash::FxHashSet;

use crate::error::{CoreError, CoreResult};

/// An undirected, unweighted graph with dense zero-based node labels.
#[derive(Debug, Clone)]
pub struct Graph {
    inner: UnGraph<(), ()>,
    id: String,
}

impl Graph {
    /// Build an `rows × cols` grid graph.
    ///
    /// Node `row * cols + col` is the cell at `(row, col)`; edges connect
    /// horizontal and vertical neighbors only (no diagonals, no
    /// wraparound). Identical dimensions always produce an identical
    /// node and edge ordering.
    pub fn grid(rows: usize, cols: usize) -> Self {
        let mut inner = UnGraph::default();
        let nodes: Vec<NodeIndex> = (0..rows * cols).map(|_| inner.add_node(())).collect();

        for row in 0..rows {
            for col in 0..cols {
                let here = nodes[row * cols + col];
                if col + 1 < cols {
                    inner.add_edge(here, nodes[row * cols + col + 1], ());
                }
                if row + 1 < rows {
                    inner.add_edge(here, nodes[(row + 1) * cols + col], ());
                }
            }
        }

        Self {
            inner,
            id: format!("grid-{rows}x{cols}"),
        }
    }

    /// Build a graph from an explicit edge list.
    ///
    /// Rejects self-loops, duplicate undirected edges and endpoints
    /// outside `0..n_nodes`.
    pub fn from_edges(n_nodes: usize, edges: &[(usize, usize)]) -> CoreResult<Self> {
        let mut inner = UnGraph::default();
        let nodes: Vec<NodeIndex> = (0..n_nodes).map(|_| inner.add_node(())).collect();

        let mut seen = FxHashSet::default();
        for &(a, b) in edges {
            if a == b {
                return Err(CoreError::SelfLoop { node: a });
            }
            for node in [a, b] {
                if node >= n_nodes {
                    return Err(CoreError::NodeOutOfRange { node, n_nodes });
                }
            }
            if !seen.insert((a.min(b), a.max(b))) {
                return Err(CoreError::DuplicateEdge { a, b });
            }
            inner.add_edge(nodes[a], nodes[b], ());
        }

        Ok(Self {
            inner,
            id: format!("edges-n{}-m{}", n_nodes, edges.len()),
        })
    }

    /// Stable identifier for reports, e.g. `grid-3x3`.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.inner.node_count()
    }

    /// Number of edges.
    ///
    /// For bipartite graphs (all grids) this is also the maximum cut.
    pub fn num_edges(&self) -> usize {
        self.inner.edge_count()
    }

    /// Iterate over edges as `(node, node)` pairs in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.inner
            .edge_indices()
            .filter_map(|e| self.inner.edge_endpoints(e))
            .map(|(a, b)| (a.index(), b.index()))
    }

    /// Cut value of a boolean side assignment (`assignment[k]` is node k).
    pub fn cut_value(&self, assignment: &[bool]) -> usize {
        self.edges()
            .filter(|&(a, b)| assignment[a] != assignment[b])
            .count()
    }

    /// Cut value of a partition encoded as a basis-state index.
    ///
    /// Bit `k` of `index` is the side of node `k`.
    pub fn cut_value_of_index(&self, index: usize) -> usize {
        self.edges()
            .filter(|&(a, b)| (index >> a) & 1 != (index >> b) & 1)
            .count()
    }

    /// Exact maximum cut by exhaustive search.
    ///
    /// Only needed for non-bipartite edge lists; grids should use
    /// [`Graph::num_edges`] directly. Exponential in the node count, so
    /// it is capped at 20 nodes.
    pub fn max_cut_brute_force(&self) -> (usize, usize) {
        assert!(
            self.num_nodes() <= 20,
            "brute force limited to 20 nodes, graph has {}",
            self.num_nodes()
        );
        let mut best_index = 0;
        let mut best_value = 0;
        for index in 0..(1usize << self.num_nodes()) {
            let value = self.cut_value_of_index(index);
            if value > best_value {
                best_value = value;
                best_index = index;
            }
        }
        (best_index, best_value)
    }
}

impl std::fmt::Display for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "{} ({} nodes, {} edges):",
            self.id,
            self.num_nodes(),
            self.num_edges()
        )?;
        for (a, b) in self.edges() {
            writeln!(f, "  {a} -- {b}")?;
        }
        Ok(())
    }
}

//! Graph representations and algorithms.
//!
//! Vertices are `usize` in `0..V`. Traversal routines take the unweighted
//! view `&[Vec<usize>]` (see [`adj_list::AdjList::topology`]); weighted
//! routines take `(vertex, weight)` pairs or `(from, to, weight)` edge lists.

pub mod adj_list;
pub mod adj_matrix;
pub mod bellman_ford;
pub mod bfs;
pub mod bipartite;
pub mod components;
pub mod csr;
pub mod dfs;
pub mod dijkstra;
pub mod document;
pub mod mst;
pub mod paths;
pub mod scc;
pub mod topological_sort;

/// Edge weight. Signed so Bellman-Ford and MST accept negative weights.
pub type Weight = i64;

/// Directed edge `(from, to, weight)`.
pub type Edge = (usize, usize, Weight);

/// Every neighbour index must name a vertex of `adj`.
pub(crate) fn check_topology(adj: &[Vec<usize>]) -> crate::error::Result<()> {
    adj.iter()
        .flatten()
        .try_for_each(|&v| crate::error::check_vertex(v, adj.len()))
}

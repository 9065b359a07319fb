//! Minimum spanning trees of undirected weighted graphs.
//!
//! Kruskal:
//!   sort E by weight; take (u, v, w) iff find(u) != find(v); union(u, v)
//!   Complexity: O(E log E)
//!
//! Prim (lazy, binary heap):
//!   grow a tree from `start`; repeatedly take the lightest edge leaving it
//!   Complexity: O(E log E)
//!
//! A spanning tree over V vertices has exactly V - 1 edges; fewer means the
//! graph is disconnected.

use serde::{Deserialize, Serialize};

use super::adj_list::AdjList;
use super::{Edge, Weight};
use crate::data_structures::heap::MinHeap;
use crate::data_structures::union_find::DisjointSet;
use crate::error::{check_vertex, AlgoError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpanningTree {
    pub edges: Vec<Edge>,
    pub total_weight: Weight,
}

impl SpanningTree {
    fn from_edges(edges: Vec<Edge>) -> Self {
        let total_weight = edges.iter().map(|&(_, _, w)| w).sum();
        Self { edges, total_weight }
    }
}

/// Kruskal over an undirected edge list. Each edge may be listed once or in
/// both directions.
pub fn kruskal(vertex_count: usize, edges: &[Edge]) -> Result<SpanningTree> {
    for &(u, v, _) in edges {
        check_vertex(u, vertex_count)?;
        check_vertex(v, vertex_count)?;
    }
    let mut sorted = edges.to_vec();
    sorted.sort_by_key(|&(_, _, w)| w);

    let mut sets = DisjointSet::new(vertex_count);
    let mut tree = Vec::with_capacity(vertex_count.saturating_sub(1));
    for (u, v, w) in sorted {
        if tree.len() + 1 >= vertex_count {
            break;
        }
        if sets.union(u, v) {
            tree.push((u.min(v), u.max(v), w));
        }
    }

    if tree.len() + 1 < vertex_count {
        tracing::debug!(components = sets.set_count(), "kruskal: graph is disconnected");
        return Err(AlgoError::Disconnected);
    }
    Ok(SpanningTree::from_edges(tree))
}

/// Prim from `start`. The graph is read as undirected: every `u -> v` entry
/// is expected to have its `v -> u` mirror.
pub fn prim(graph: &AdjList, start: usize) -> Result<SpanningTree> {
    let n = graph.vertex_count();
    if n == 0 {
        return Ok(SpanningTree::from_edges(Vec::new()));
    }
    check_vertex(start, n)?;

    let mut in_tree = vec![false; n];
    let mut heap: MinHeap<(Weight, usize, usize)> = MinHeap::new();
    let mut tree = Vec::with_capacity(n - 1);

    in_tree[start] = true;
    for &(v, w) in graph.neighbours(start) {
        heap.push((w, v, start));
    }

    while let Some((w, v, from)) = heap.pop_min() {
        if in_tree[v] {
            continue;
        }
        in_tree[v] = true;
        tree.push((from.min(v), from.max(v), w));
        if tree.len() + 1 == n {
            break;
        }
        for &(next, nw) in graph.neighbours(v) {
            if !in_tree[next] {
                heap.push((nw, next, v));
            }
        }
    }

    if tree.len() + 1 < n {
        tracing::debug!(reached = tree.len() + 1, total = n, "prim: graph is disconnected");
        return Err(AlgoError::Disconnected);
    }
    Ok(SpanningTree::from_edges(tree))
}

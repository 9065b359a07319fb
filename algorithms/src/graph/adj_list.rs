//! Weighted adjacency list.
//!
//! Variables:
//!   V       = number of vertices
//!   E       = number of directed edges
//!   adj[u]  = Vec<(v, w)> of out-neighbours of u with edge weight w
//!
//! Equations:
//!   add_edge(u, v, w):   adj[u] gets (v, w)  (overwrites an existing u -> v)
//!   add_undirected(u,v,w): add_edge(u,v,w) + add_edge(v,u,w)
//!   out_degree(u)  = |adj[u]|
//!
//! Conversion to CSR (see graph::csr):
//!   row_ptr[v] = sum_{u=0}^{v-1} out_degree(u)
//!   col_idx    = targets of adj[0] ++ adj[1] ++ ... ++ adj[V-1]

use super::csr::Csr;
use super::{Edge, Weight};
use crate::error::{check_vertex, AlgoError, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjList {
    adj: Vec<Vec<(usize, Weight)>>,
}

impl AdjList {
    /// Create an empty graph with `v` vertices and no edges.
    pub fn new(v: usize) -> Self {
        Self { adj: vec![Vec::new(); v] }
    }

    pub fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    /// Number of directed edges; an undirected edge counts twice.
    pub fn edge_count(&self) -> usize {
        self.adj.iter().map(|n| n.len()).sum()
    }

    /// Add (or re-weight) the directed edge u -> v.
    pub fn add_edge(&mut self, u: usize, v: usize, weight: Weight) -> Result<()> {
        check_vertex(u, self.adj.len())?;
        check_vertex(v, self.adj.len())?;
        match self.adj[u].iter_mut().find(|(to, _)| *to == v) {
            Some(slot) => slot.1 = weight,
            None => self.adj[u].push((v, weight)),
        }
        Ok(())
    }

    /// Add undirected edge (both directions).
    pub fn add_undirected(&mut self, u: usize, v: usize, weight: Weight) -> Result<()> {
        self.add_edge(u, v, weight)?;
        self.add_edge(v, u, weight)
    }

    /// Returns whether the edge existed.
    pub fn remove_edge(&mut self, u: usize, v: usize) -> Result<bool> {
        check_vertex(u, self.adj.len())?;
        check_vertex(v, self.adj.len())?;
        let before = self.adj[u].len();
        self.adj[u].retain(|(to, _)| *to != v);
        Ok(self.adj[u].len() != before)
    }

    pub fn remove_undirected(&mut self, u: usize, v: usize) -> Result<bool> {
        let forward = self.remove_edge(u, v)?;
        let backward = self.remove_edge(v, u)?;
        Ok(forward || backward)
    }

    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.weight(u, v).is_some()
    }

    pub fn weight(&self, u: usize, v: usize) -> Option<Weight> {
        self.adj.get(u)?.iter().find(|(to, _)| *to == v).map(|&(_, w)| w)
    }

    pub fn neighbours(&self, u: usize) -> &[(usize, Weight)] {
        &self.adj[u]
    }

    /// Every directed edge as (from, to, weight), grouped by source vertex.
    pub fn edges(&self) -> Vec<Edge> {
        self.adj
            .iter()
            .enumerate()
            .flat_map(|(u, out)| out.iter().map(move |&(v, w)| (u, v, w)))
            .collect()
    }

    /// Edges with `u < v` only; each undirected edge appears once.
    pub fn undirected_edges(&self) -> Vec<Edge> {
        self.edges().into_iter().filter(|&(u, v, _)| u < v).collect()
    }

    /// Unweighted view for traversal algorithms expecting `&[Vec<usize>]`.
    pub fn topology(&self) -> Vec<Vec<usize>> {
        self.adj.iter().map(|out| out.iter().map(|&(v, _)| v).collect()).collect()
    }

    /// Weighted view for Dijkstra. Fails on the first negative weight.
    pub fn non_negative(&self) -> Result<Vec<Vec<(usize, u64)>>> {
        self.adj
            .iter()
            .map(|out| {
                out.iter()
                    .map(|&(v, w)| {
                        u64::try_from(w).map(|w| (v, w)).map_err(|_| {
                            AlgoError::InvalidArgument(format!("negative edge weight {w} into vertex {v}"))
                        })
                    })
                    .collect::<Result<Vec<_>>>()
            })
            .collect()
    }

    /// Convert to CSR — O(V+E).
    pub fn to_csr(&self) -> Csr {
        Csr::from_weighted(&self.adj)
    }

    /// Borrow inner slice.
    pub fn as_slice(&self) -> &[Vec<(usize, Weight)>] {
        &self.adj
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> AdjList {
        let mut g = AdjList::new(3);
        g.add_undirected(0, 1, 4).unwrap();
        g.add_undirected(1, 2, -2).unwrap();
        g.add_edge(2, 0, 7).unwrap();
        g
    }

    #[test]
    fn counts_and_lookup() {
        let g = triangle();
        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.edge_count(), 5);
        assert_eq!(g.weight(1, 2), Some(-2));
        assert!(g.has_edge(2, 0));
        assert!(!g.has_edge(0, 2));
        assert_eq!(g.undirected_edges(), vec![(0, 1, 4), (1, 2, -2)]);
    }

    #[test]
    fn re_adding_overwrites_weight() {
        let mut g = triangle();
        g.add_edge(0, 1, 9).unwrap();
        assert_eq!(g.weight(0, 1), Some(9));
        assert_eq!(g.edge_count(), 5);
    }

    #[test]
    fn removal() {
        let mut g = triangle();
        assert!(g.remove_undirected(0, 1).unwrap());
        assert!(!g.remove_edge(0, 1).unwrap());
        assert_eq!(g.topology(), vec![vec![], vec![2], vec![1, 0]]);
    }

    #[test]
    fn out_of_range_vertex() {
        let mut g = AdjList::new(2);
        assert_eq!(g.add_edge(0, 2, 1), Err(AlgoError::VertexOutOfRange { vertex: 2, count: 2 }));
        assert_eq!(g.weight(5, 0), None);
    }

    #[test]
    fn non_negative_view_rejects_negative() {
        assert!(triangle().non_negative().is_err());
        let mut g = AdjList::new(2);
        g.add_edge(0, 1, 3).unwrap();
        assert_eq!(g.non_negative().unwrap(), vec![vec![(1, 3)], vec![]]);
    }
}

//! Dense adjacency matrix.
//!
//! Variables:
//!   V          = number of vertices
//!   cells[u*V+v] = Some(w) if the edge u -> v exists with weight w
//!
//! Equations:
//!   has_edge(u, v)  O(1)
//!   neighbours(u)   O(V)
//!   memory          O(V^2)

use super::adj_list::AdjList;
use super::Weight;
use crate::error::{check_vertex, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjMatrix {
    n: usize,
    cells: Vec<Option<Weight>>,
}

impl AdjMatrix {
    pub fn new(n: usize) -> Self {
        Self { n, cells: vec![None; n * n] }
    }

    pub fn vertex_count(&self) -> usize {
        self.n
    }

    pub fn edge_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    fn slot(&self, u: usize, v: usize) -> Result<usize> {
        check_vertex(u, self.n)?;
        check_vertex(v, self.n)?;
        Ok(u * self.n + v)
    }

    pub fn add_edge(&mut self, u: usize, v: usize, weight: Weight) -> Result<()> {
        let i = self.slot(u, v)?;
        self.cells[i] = Some(weight);
        Ok(())
    }

    pub fn add_undirected(&mut self, u: usize, v: usize, weight: Weight) -> Result<()> {
        self.add_edge(u, v, weight)?;
        self.add_edge(v, u, weight)
    }

    pub fn remove_edge(&mut self, u: usize, v: usize) -> Result<bool> {
        let i = self.slot(u, v)?;
        Ok(self.cells[i].take().is_some())
    }

    pub fn remove_undirected(&mut self, u: usize, v: usize) -> Result<bool> {
        let forward = self.remove_edge(u, v)?;
        let backward = self.remove_edge(v, u)?;
        Ok(forward || backward)
    }

    pub fn weight(&self, u: usize, v: usize) -> Option<Weight> {
        self.slot(u, v).ok().and_then(|i| self.cells[i])
    }

    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.weight(u, v).is_some()
    }

    /// Out-neighbours of `u` in ascending vertex order; empty when out of range.
    pub fn neighbours(&self, u: usize) -> Vec<usize> {
        if u >= self.n {
            return Vec::new();
        }
        let row = &self.cells[u * self.n..(u + 1) * self.n];
        row.iter().enumerate().filter(|(_, c)| c.is_some()).map(|(v, _)| v).collect()
    }

    pub fn to_adj_list(&self) -> AdjList {
        let mut list = AdjList::new(self.n);
        for u in 0..self.n {
            for v in 0..self.n {
                if let Some(w) = self.cells[u * self.n + v] {
                    // indices come from our own bounds
                    let _ = list.add_edge(u, v, w);
                }
            }
        }
        list
    }

    pub fn from_adj_list(list: &AdjList) -> Self {
        let n = list.vertex_count();
        let mut m = Self::new(n);
        for (u, v, w) in list.edges() {
            m.cells[u * n + v] = Some(w);
        }
        m
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undirected_edges_are_symmetric() {
        let mut m = AdjMatrix::new(4);
        m.add_undirected(0, 3, 7).unwrap();
        assert_eq!(m.weight(3, 0), Some(7));
        assert_eq!(m.neighbours(0), vec![3]);
        assert_eq!(m.edge_count(), 2);
        assert!(m.remove_undirected(3, 0).unwrap());
        assert!(!m.has_edge(0, 3));
    }

    #[test]
    fn out_of_range() {
        let mut m = AdjMatrix::new(2);
        assert!(m.add_edge(2, 0, 1).is_err());
        assert!(!m.has_edge(9, 9));
        assert!(m.neighbours(5).is_empty());
    }

    #[test]
    fn list_round_trip_preserves_edges() {
        let mut list = AdjList::new(3);
        list.add_edge(0, 2, -4).unwrap();
        list.add_undirected(1, 2, 6).unwrap();
        let m = AdjMatrix::from_adj_list(&list);
        assert_eq!(m.weight(0, 2), Some(-4));
        assert_eq!(m.weight(2, 0), None);
        let back = m.to_adj_list();
        let mut a = back.edges();
        let mut b = list.edges();
        a.sort();
        b.sort();
        assert_eq!(a, b);
    }
}

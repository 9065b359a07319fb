//! Compressed Sparse Row (CSR) graph representation.
//!
//! Variables:
//!   V        = number of vertices
//!   E        = number of edges
//!   row_ptr  = prefix-sum of out-degrees, length V+1
//!   col_idx  = concatenated neighbour lists,  length E
//!   weights  = edge weights aligned with col_idx, length E
//!
//! Equations:
//!   row_ptr[0] = 0
//!   row_ptr[v+1] = row_ptr[v] + out_degree(v)
//!   neighbours(v) = col_idx[ row_ptr[v] .. row_ptr[v+1] ]

use super::Weight;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Csr {
    pub row_ptr: Vec<usize>,
    pub col_idx: Vec<usize>,
    pub weights: Vec<Weight>,
}

impl Csr {
    /// Build CSR from an unweighted adjacency list; every weight is 1.
    pub fn from_adj(adj: &[Vec<usize>]) -> Self {
        let mut row_ptr = Vec::with_capacity(adj.len() + 1);
        let mut col_idx = Vec::new();
        row_ptr.push(0);
        for neighbours in adj {
            col_idx.extend_from_slice(neighbours);
            row_ptr.push(col_idx.len());
        }
        let weights = vec![1; col_idx.len()];
        Self { row_ptr, col_idx, weights }
    }

    pub fn from_weighted(adj: &[Vec<(usize, Weight)>]) -> Self {
        let mut row_ptr = Vec::with_capacity(adj.len() + 1);
        let mut col_idx = Vec::new();
        let mut weights = Vec::new();
        row_ptr.push(0);
        for out in adj {
            for &(v, w) in out {
                col_idx.push(v);
                weights.push(w);
            }
            row_ptr.push(col_idx.len());
        }
        Self { row_ptr, col_idx, weights }
    }

    pub fn vertex_count(&self) -> usize {
        self.row_ptr.len() - 1
    }

    pub fn edge_count(&self) -> usize {
        self.col_idx.len()
    }

    pub fn out_degree(&self, v: usize) -> usize {
        self.row_ptr[v + 1] - self.row_ptr[v]
    }

    pub fn neighbours(&self, v: usize) -> &[usize] {
        &self.col_idx[self.row_ptr[v]..self.row_ptr[v + 1]]
    }

    pub fn weighted_neighbours(&self, v: usize) -> impl Iterator<Item = (usize, Weight)> + '_ {
        let range = self.row_ptr[v]..self.row_ptr[v + 1];
        self.col_idx[range.clone()].iter().copied().zip(self.weights[range].iter().copied())
    }
}

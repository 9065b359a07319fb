use std::collections::VecDeque;

use super::check_topology;
use crate::error::{AlgoError, Result};

/// Kahn's algorithm. Ties are broken by vertex number through the FIFO
/// queue, so the order is deterministic.
pub fn topological_sort(adj: &[Vec<usize>]) -> Result<Vec<usize>> {
    check_topology(adj)?;
    let mut indegree = vec![0usize; adj.len()];
    for &v in adj.iter().flatten() {
        indegree[v] += 1;
    }

    let mut queue: VecDeque<usize> = (0..adj.len()).filter(|&i| indegree[i] == 0).collect();

    let mut order = Vec::with_capacity(adj.len());
    while let Some(u) = queue.pop_front() {
        order.push(u);
        for &v in &adj[u] {
            indegree[v] -= 1;
            if indegree[v] == 0 {
                queue.push_back(v);
            }
        }
    }

    if order.len() < adj.len() {
        return Err(AlgoError::CycleDetected);
    }
    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orders_a_dag() {
        let adj = vec![vec![1, 2], vec![3], vec![3], vec![]];
        assert_eq!(topological_sort(&adj).unwrap(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn every_edge_points_forward() {
        let adj = vec![vec![], vec![], vec![3], vec![1], vec![0, 1], vec![0, 2]];
        let order = topological_sort(&adj).unwrap();
        let pos: Vec<usize> = (0..adj.len()).map(|v| order.iter().position(|&x| x == v).unwrap()).collect();
        for (u, out) in adj.iter().enumerate() {
            for &v in out {
                assert!(pos[u] < pos[v]);
            }
        }
    }

    #[test]
    fn cycle_is_an_error() {
        assert_eq!(topological_sort(&[vec![1], vec![0]]), Err(AlgoError::CycleDetected));
    }
}

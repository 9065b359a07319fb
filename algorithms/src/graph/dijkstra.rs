//! Dijkstra single-source shortest paths over non-negative weights.
//!
//! Variables:
//!   dist[v] = best known distance from source to v
//!   heap    = min-heap of (dist, vertex), stale entries skipped on pop
//!
//! Equations:
//!   relax(u, v, w): dist[u] + w < dist[v]  =>  dist[v] = dist[u] + w, prev[v] = u
//!   Complexity: O((V + E) log V)

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::paths::ShortestPaths;
use crate::error::{check_vertex, AlgoError, Result};

#[derive(Copy, Clone, Eq, PartialEq)]
struct State {
    cost: u64,
    position: usize,
}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other.cost.cmp(&self.cost).then_with(|| other.position.cmp(&self.position))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

pub fn dijkstra(adj: &[Vec<(usize, u64)>], start: usize) -> Result<ShortestPaths<u64>> {
    check_vertex(start, adj.len())?;
    let mut dist: Vec<Option<u64>> = vec![None; adj.len()];
    let mut prev = vec![None; adj.len()];
    let mut heap = BinaryHeap::new();

    dist[start] = Some(0);
    heap.push(State { cost: 0, position: start });

    while let Some(State { cost, position }) = heap.pop() {
        if dist[position].is_some_and(|d| cost > d) {
            continue;
        }

        for &(next, weight) in &adj[position] {
            check_vertex(next, adj.len())?;
            let next_cost = cost.checked_add(weight).ok_or(AlgoError::Overflow("dijkstra"))?;
            if dist[next].map_or(true, |d| next_cost < d) {
                dist[next] = Some(next_cost);
                prev[next] = Some(position);
                heap.push(State { cost: next_cost, position: next });
            }
        }
    }
    Ok(ShortestPaths { source: start, dist, prev })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_cheaper_detour() {
        let adj = vec![vec![(1, 4), (2, 1)], vec![(3, 1)], vec![(1, 2), (3, 5)], vec![]];
        let sp = dijkstra(&adj, 0).unwrap();
        assert_eq!(sp.dist, vec![Some(0), Some(3), Some(1), Some(4)]);
        assert_eq!(sp.path_to(3), Some(vec![0, 2, 1, 3]));
    }

    #[test]
    fn unreachable_vertices_have_no_distance() {
        let adj = vec![vec![(1, 2)], vec![], vec![(0, 1)]];
        let sp = dijkstra(&adj, 0).unwrap();
        assert_eq!(sp.distance(2), None);
        assert_eq!(sp.path_to(2), None);
    }

    #[test]
    fn rejects_bad_start() {
        assert!(dijkstra(&[vec![]], 1).is_err());
    }

    #[test]
    fn distance_past_u64_is_an_overflow() {
        let adj = vec![vec![(1, u64::MAX)], vec![(2, 1)], vec![]];
        assert_eq!(dijkstra(&adj, 0), Err(AlgoError::Overflow("dijkstra")));
    }
}

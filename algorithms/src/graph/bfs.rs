use std::collections::VecDeque;

use super::check_topology;
use crate::error::{check_vertex, Result};

/// Breadth-first visiting order from `start`.
pub fn bfs(adj: &[Vec<usize>], start: usize) -> Result<Vec<usize>> {
    check_vertex(start, adj.len())?;
    check_topology(adj)?;
    let mut visited = vec![false; adj.len()];
    let mut queue = VecDeque::new();
    let mut order = Vec::new();

    visited[start] = true;
    queue.push_back(start);

    while let Some(node) = queue.pop_front() {
        order.push(node);
        for &n in &adj[node] {
            if !visited[n] {
                visited[n] = true;
                queue.push_back(n);
            }
        }
    }
    Ok(order)
}

/// Path with the fewest edges from `start` to `end`, both endpoints included.
/// `None` when `end` is unreachable.
pub fn shortest_path_bfs(adj: &[Vec<usize>], start: usize, end: usize) -> Result<Option<Vec<usize>>> {
    check_vertex(start, adj.len())?;
    check_vertex(end, adj.len())?;
    check_topology(adj)?;
    let mut parent: Vec<Option<usize>> = vec![None; adj.len()];
    let mut visited = vec![false; adj.len()];
    let mut queue = VecDeque::new();

    visited[start] = true;
    queue.push_back(start);

    while let Some(node) = queue.pop_front() {
        if node == end {
            let mut path = vec![end];
            let mut cur = end;
            while let Some(p) = parent[cur] {
                path.push(p);
                cur = p;
            }
            path.reverse();
            return Ok(Some(path));
        }
        for &n in &adj[node] {
            if !visited[n] {
                visited[n] = true;
                parent[n] = Some(node);
                queue.push_back(n);
            }
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visits_level_by_level() {
        let adj = vec![vec![1, 2], vec![3], vec![3], vec![]];
        assert_eq!(bfs(&adj, 0).unwrap(), vec![0, 1, 2, 3]);
        assert_eq!(bfs(&adj, 3).unwrap(), vec![3]);
        assert!(bfs(&adj, 4).is_err());
        assert!(bfs(&[vec![2], vec![]], 0).is_err());
    }

    #[test]
    fn fewest_edges_path() {
        let adj = vec![vec![1, 2], vec![3], vec![3], vec![4], vec![]];
        assert_eq!(shortest_path_bfs(&adj, 0, 4).unwrap(), Some(vec![0, 1, 3, 4]));
        assert_eq!(shortest_path_bfs(&adj, 2, 2).unwrap(), Some(vec![2]));
        assert_eq!(shortest_path_bfs(&adj, 4, 0).unwrap(), None);
    }
}

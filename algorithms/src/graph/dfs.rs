use super::check_topology;
use crate::error::{check_vertex, Result};

/// Recursive depth-first preorder from `start`.
pub fn dfs(adj: &[Vec<usize>], start: usize) -> Result<Vec<usize>> {
    fn visit(node: usize, adj: &[Vec<usize>], visited: &mut [bool], out: &mut Vec<usize>) {
        visited[node] = true;
        out.push(node);
        for &n in &adj[node] {
            if !visited[n] {
                visit(n, adj, visited, out);
            }
        }
    }

    check_vertex(start, adj.len())?;
    check_topology(adj)?;
    let mut visited = vec![false; adj.len()];
    let mut order = Vec::new();
    visit(start, adj, &mut visited, &mut order);
    Ok(order)
}

/// Explicit-stack DFS producing the same order as [`dfs`]: neighbours are
/// pushed in reverse so the first one is popped first, and a vertex is
/// marked only when popped.
pub fn dfs_iterative(adj: &[Vec<usize>], start: usize) -> Result<Vec<usize>> {
    check_vertex(start, adj.len())?;
    check_topology(adj)?;
    let mut visited = vec![false; adj.len()];
    let mut order = Vec::new();
    let mut stack = vec![start];

    while let Some(node) = stack.pop() {
        if visited[node] {
            continue;
        }
        visited[node] = true;
        order.push(node);
        for &n in adj[node].iter().rev() {
            if !visited[n] {
                stack.push(n);
            }
        }
    }
    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn goes_deep_first() {
        let adj = vec![vec![1, 2], vec![3], vec![3], vec![]];
        assert_eq!(dfs(&adj, 0).unwrap(), vec![0, 1, 3, 2]);
    }

    #[test]
    fn iterative_matches_recursive() {
        let adj = vec![
            vec![1, 4, 2],
            vec![0, 3],
            vec![0, 3, 5],
            vec![1, 2, 4],
            vec![0, 3],
            vec![2],
            vec![],
        ];
        for s in 0..adj.len() {
            assert_eq!(dfs(&adj, s).unwrap(), dfs_iterative(&adj, s).unwrap(), "start {s}");
        }
    }
}

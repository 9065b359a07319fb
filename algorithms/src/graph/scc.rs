//! Strongly connected components (Kosaraju).
//!
//! Variables:
//!   order  = vertices of G by increasing DFS finish time
//!   G^T    = G with every edge reversed
//!
//! Equations:
//!   pass 1: DFS over G, push v to `order` once all its edges are explored
//!   pass 2: for v in reverse(order), unvisited: DFS over G^T, the tree is one SCC
//!   Components come out in topological order of the condensation.  O(V + E)
//!
//! Both passes keep explicit stacks, so a long chain cannot exhaust the call
//! stack.

use super::check_topology;
use crate::error::Result;

pub fn kosaraju_scc(adj: &[Vec<usize>]) -> Result<Vec<Vec<usize>>> {
    check_topology(adj)?;
    let n = adj.len();

    let mut visited = vec![false; n];
    let mut order = Vec::with_capacity(n);
    for root in 0..n {
        if visited[root] {
            continue;
        }
        visited[root] = true;
        // (vertex, index of the next edge to explore)
        let mut stack = vec![(root, 0usize)];
        while let Some((v, next)) = stack.pop() {
            match adj[v].get(next) {
                Some(&u) => {
                    stack.push((v, next + 1));
                    if !visited[u] {
                        visited[u] = true;
                        stack.push((u, 0));
                    }
                }
                None => order.push(v),
            }
        }
    }

    let mut transposed = vec![Vec::new(); n];
    for (v, edges) in adj.iter().enumerate() {
        for &u in edges {
            transposed[u].push(v);
        }
    }

    visited.fill(false);
    let mut comps = Vec::new();
    for &root in order.iter().rev() {
        if visited[root] {
            continue;
        }
        visited[root] = true;
        let mut comp = Vec::new();
        let mut stack = vec![root];
        while let Some(v) = stack.pop() {
            comp.push(v);
            for &u in &transposed[v] {
                if !visited[u] {
                    visited[u] = true;
                    stack.push(u);
                }
            }
        }
        comps.push(comp);
    }
    Ok(comps)
}

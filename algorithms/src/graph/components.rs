use super::check_topology;
use crate::error::Result;

/// Breadth-first groups sharing one `visited` set, in ascending order of
/// their start vertex. On a symmetric adjacency list these are the
/// connected components. On a directed one each vertex lands in the first
/// group whose start reaches it, so groups never overlap.
pub fn connected_components(adj: &[Vec<usize>]) -> Result<Vec<Vec<usize>>> {
    check_topology(adj)?;
    let mut seen = vec![false; adj.len()];
    let mut comps = Vec::new();
    for start in 0..adj.len() {
        if seen[start] {
            continue;
        }
        seen[start] = true;
        // the component doubles as the BFS queue
        let mut comp = vec![start];
        let mut head = 0;
        while let Some(&u) = comp.get(head) {
            head += 1;
            for &v in &adj[u] {
                if !seen[v] {
                    seen[v] = true;
                    comp.push(v);
                }
            }
        }
        comps.push(comp);
    }
    Ok(comps)
}

pub fn count_connected_components(adj: &[Vec<usize>]) -> Result<usize> {
    Ok(connected_components(adj)?.len())
}

use std::collections::VecDeque;

/// BFS two-colouring of every component. Returns one colour (0 or 1) per
/// vertex, or `None` when an edge joins two vertices of the same colour.
/// Edges are followed in their stored direction, so pass a symmetric
/// adjacency list for undirected graphs.
pub fn two_coloring(adj: &[Vec<usize>]) -> Option<Vec<u8>> {
    let mut color: Vec<Option<u8>> = vec![None; adj.len()];
    for start in 0..adj.len() {
        if color[start].is_some() {
            continue;
        }
        color[start] = Some(0);
        let mut queue = VecDeque::from([start]);
        while let Some(u) = queue.pop_front() {
            let cu = color[u]?;
            for &v in adj.get(u)? {
                match *color.get(v)? {
                    None => {
                        color[v] = Some(cu ^ 1);
                        queue.push_back(v);
                    }
                    Some(cv) if cv == cu => return None,
                    Some(_) => {}
                }
            }
        }
    }
    color.into_iter().collect()
}

pub fn is_bipartite(adj: &[Vec<usize>]) -> bool {
    two_coloring(adj).is_some()
}

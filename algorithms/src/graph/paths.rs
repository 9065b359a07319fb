use serde::Serialize;

/// Single-source shortest-path result.
///
/// `dist[v]` is `None` for vertices unreachable from `source`; `prev[v]` is
/// the predecessor of `v` on one shortest path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPaths<W> {
    pub source: usize,
    pub dist: Vec<Option<W>>,
    pub prev: Vec<Option<usize>>,
}

impl<W: Copy> ShortestPaths<W> {
    pub fn distance(&self, v: usize) -> Option<W> {
        self.dist.get(v).copied().flatten()
    }

    /// Vertices from `source` to `v` inclusive, or `None` when unreachable.
    /// A predecessor chain longer than the vertex count has looped and is
    /// also `None`.
    pub fn path_to(&self, v: usize) -> Option<Vec<usize>> {
        self.distance(v)?;
        let mut path = vec![v];
        let mut cur = v;
        while let Some(p) = self.prev.get(cur).copied().flatten() {
            if path.len() >= self.prev.len() {
                return None;
            }
            path.push(p);
            cur = p;
        }
        path.reverse();
        Some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walks_predecessors() {
        let sp = ShortestPaths {
            source: 0,
            dist: vec![Some(0), Some(3), None, Some(5)],
            prev: vec![None, Some(0), None, Some(1)],
        };
        assert_eq!(sp.path_to(3), Some(vec![0, 1, 3]));
        assert_eq!(sp.path_to(0), Some(vec![0]));
        assert_eq!(sp.path_to(2), None);
        assert_eq!(sp.distance(9), None);
    }

    #[test]
    fn looping_predecessors_end() {
        let sp = ShortestPaths {
            source: 0,
            dist: vec![Some(0), Some(-1)],
            prev: vec![Some(1), Some(0)],
        };
        assert_eq!(sp.path_to(1), None);
    }
}

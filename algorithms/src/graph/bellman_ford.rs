//! Bellman-Ford single-source shortest paths.
//!
//! Variables:
//!   V       = number of vertices
//!   E       = edge list as (u, v, weight), weights may be negative
//!   dist[v] = shortest known distance from source to v (None = unreachable)
//!
//! Equations:
//!   Initialise: dist[source] = 0
//!
//!   Relax (at most V-1 rounds, stop early when nothing changes):
//!     for each (u, v, w) in E:
//!       dist[v] = min(dist[v], dist[u] + w)
//!
//!   Negative cycle detection (round V):
//!     if any edge still relaxes => a negative cycle is reachable from source
//!
//!   Complexity: O(V * E)

use super::paths::ShortestPaths;
use super::{Edge, Weight};
use crate::error::{check_vertex, AlgoError, Result};

/// Fails with `NegativeCycle` if a negative-weight cycle is reachable from
/// `source`. Cycles elsewhere in the graph do not affect the result.
///
/// Distances are relaxed in `i128`, so no intermediate sum can wrap or clamp;
/// a final distance outside `i64` is `Overflow`.
pub fn bellman_ford(v: usize, edges: &[Edge], source: usize) -> Result<ShortestPaths<Weight>> {
    check_vertex(source, v)?;
    for &(a, b, _) in edges {
        check_vertex(a, v)?;
        check_vertex(b, v)?;
    }

    let mut dist: Vec<Option<i128>> = vec![None; v];
    let mut prev = vec![None; v];
    dist[source] = Some(0);

    for _ in 1..v {
        let mut updated = false;
        for &(a, b, weight) in edges {
            if let Some(da) = dist[a] {
                let candidate = da + i128::from(weight);
                if dist[b].map_or(true, |db| candidate < db) {
                    dist[b] = Some(candidate);
                    prev[b] = Some(a);
                    updated = true;
                }
            }
        }
        if !updated {
            break;
        }
    }

    for &(a, b, weight) in edges {
        if let (Some(da), Some(db)) = (dist[a], dist[b]) {
            if da + i128::from(weight) < db {
                tracing::debug!(from = a, to = b, "negative cycle reachable from source {source}");
                return Err(AlgoError::NegativeCycle);
            }
        }
    }

    let dist = dist
        .into_iter()
        .map(|d| d.map(Weight::try_from).transpose())
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|_| AlgoError::Overflow("bellman_ford"))?;
    Ok(ShortestPaths { source, dist, prev })
}

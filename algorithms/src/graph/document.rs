//! JSON document describing a graph.
//!
//! ```json
//! { "vertices": 4, "directed": false, "edges": [[0, 1, 5], [1, 2, 3]] }
//! ```

use serde::{Deserialize, Serialize};

use super::adj_list::AdjList;
use super::Edge;
use crate::error::{AlgoError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphDocument {
    pub vertices: usize,
    #[serde(default)]
    pub directed: bool,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl GraphDocument {
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| AlgoError::InvalidArgument(format!("graph document: {e}")))
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| AlgoError::InvalidArgument(format!("graph document: {e}")))
    }

    pub fn build(&self) -> Result<AdjList> {
        let mut g = AdjList::new(self.vertices);
        for &(u, v, w) in &self.edges {
            if self.directed {
                g.add_edge(u, v, w)?;
            } else {
                g.add_undirected(u, v, w)?;
            }
        }
        Ok(g)
    }
}

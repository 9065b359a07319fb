use std::path::Path;

use algorithms::graph::adj_list::AdjList;
use algorithms::graph::bellman_ford::bellman_ford;
use algorithms::graph::bfs::{bfs, shortest_path_bfs};
use algorithms::graph::bipartite::two_coloring;
use algorithms::graph::components::connected_components;
use algorithms::graph::dfs::dfs;
use algorithms::graph::dijkstra::dijkstra;
use algorithms::graph::mst::{kruskal, prim};
use algorithms::graph::paths::ShortestPaths;
use algorithms::graph::scc::kosaraju_scc;
use algorithms::graph::document::GraphDocument;
use algorithms::graph::topological_sort::topological_sort;
use anyhow::Context;
use colored::*;
use serde::Serialize;

use super::output::{emit, join};
use super::{GraphOp, MstMethod};

pub fn load_graph(path: &Path) -> anyhow::Result<(GraphDocument, AdjList)> {
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let doc = GraphDocument::from_json(&text)?;
    let graph = doc.build()?;
    tracing::debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        directed = doc.directed,
        "graph loaded"
    );
    Ok((doc, graph))
}

pub fn run_graph(path: &Path, op: GraphOp, json: bool) -> anyhow::Result<()> {
    let (doc, graph) = load_graph(path)?;
    let topo = graph.topology();

    match op {
        GraphOp::Bfs { start } => print_order(json, "bfs", &bfs(&topo, start)?),
        GraphOp::Dfs { start } => print_order(json, "dfs", &dfs(&topo, start)?),
        GraphOp::Path { from, to } => {
            let path = shortest_path_bfs(&topo, from, to)?;
            emit(json, &path, |path| match path {
                Some(p) => println!("{} {}", "path:".bold(), join(p)),
                None => println!("{}", format!("{to} is unreachable from {from}").red()),
            })
        }
        GraphOp::Dijkstra { start } => print_paths(json, &dijkstra(&graph.non_negative()?, start)?),
        GraphOp::BellmanFord { start } => {
            print_paths(json, &bellman_ford(graph.vertex_count(), &graph.edges(), start)?)
        }
        GraphOp::Topo => print_order(json, "topological", &topological_sort(&topo)?),
        GraphOp::Scc => print_groups(json, "scc", &kosaraju_scc(&topo)?),
        GraphOp::Components => {
            if doc.directed {
                tracing::warn!("components follow edge direction on a directed graph");
            }
            print_groups(json, "component", &connected_components(&topo)?)
        }
        GraphOp::Mst { method, start } => {
            let tree = match method {
                MstMethod::Kruskal => kruskal(graph.vertex_count(), &graph.undirected_edges())?,
                MstMethod::Prim => prim(&graph, start)?,
            };
            emit(json, &tree, |tree| {
                for (u, v, w) in &tree.edges {
                    println!("  {u} - {v}  ({w})");
                }
                println!("{} {}", "total weight:".bold(), tree.total_weight.to_string().green());
            })
        }
        GraphOp::Bipartite => {
            let coloring = two_coloring(&topo);
            emit(json, &coloring, |coloring| match coloring {
                Some(colors) => println!("{} {}", "bipartite:".green(), join(colors)),
                None => println!("{}", "not bipartite".red()),
            })
        }
    }
}

fn print_order(json: bool, label: &str, order: &[usize]) -> anyhow::Result<()> {
    emit(json, &order, |order| println!("{} {}", format!("{label}:").bold(), join(order)))
}

fn print_groups(json: bool, label: &str, groups: &[Vec<usize>]) -> anyhow::Result<()> {
    emit(json, &groups, |groups| {
        for (i, g) in groups.iter().enumerate() {
            println!("{} {}", format!("{label} {i}:").bold(), join(g));
        }
    })
}

fn print_paths<W>(json: bool, paths: &ShortestPaths<W>) -> anyhow::Result<()>
where
    W: Copy + std::fmt::Display + Serialize,
{
    #[derive(Serialize)]
    struct Row<W> {
        vertex: usize,
        distance: Option<W>,
        path: Option<Vec<usize>>,
    }
    let rows: Vec<Row<W>> = (0..paths.dist.len())
        .map(|v| Row { vertex: v, distance: paths.distance(v), path: paths.path_to(v) })
        .collect();
    emit(json, &rows, |rows| {
        for row in rows {
            match (&row.distance, &row.path) {
                (Some(d), Some(p)) => println!("{:>4}  {:>6}  {}", row.vertex, d, join(p)),
                _ => println!("{:>4}  {:>6}", row.vertex, "-".dimmed()),
            }
        }
    })
}

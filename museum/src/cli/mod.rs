//! CLI definition (clap derive).

pub mod dp;
pub mod graph;
pub mod output;
pub mod search;
pub mod sort;
pub mod tour;

use std::path::PathBuf;

use algorithms::searching::SearchAlgorithm;
use algorithms::sorting::SortAlgorithm;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "museum", about = "Textbook algorithms you can run", version)]
pub struct Cli {
    /// Print structured results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sort integers
    Sort {
        /// bubble, selection, insertion, merge, quick, heap, shell, counting, radix
        #[arg(short, long, default_value = "merge")]
        algorithm: SortAlgorithm,
        /// Run every algorithm and compare
        #[arg(long)]
        all: bool,
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<i64>,
    },
    /// Find a value among integers
    Search {
        /// linear, binary, binary-recursive, jump, interpolation, exponential,
        /// fibonacci, ternary, hash, bst
        #[arg(short, long, default_value = "binary")]
        algorithm: SearchAlgorithm,
        /// Run every algorithm
        #[arg(long)]
        all: bool,
        #[arg(allow_negative_numbers = true)]
        target: i64,
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<i64>,
    },
    /// Run a graph algorithm over a JSON graph document
    Graph {
        /// `{"vertices": n, "directed": bool, "edges": [[u, v, w], ...]}`
        file: PathBuf,
        #[command(subcommand)]
        op: GraphOp,
    },
    /// Solve a dynamic-programming problem
    Dp {
        #[command(subcommand)]
        problem: DpProblem,
    },
    /// Demonstrate every group and verify the results
    Tour,
}

#[derive(Subcommand, Clone)]
pub enum GraphOp {
    /// Breadth-first visiting order
    Bfs {
        #[arg(short, long, default_value_t = 0)]
        start: usize,
    },
    /// Depth-first visiting order
    Dfs {
        #[arg(short, long, default_value_t = 0)]
        start: usize,
    },
    /// Path with the fewest edges
    Path { from: usize, to: usize },
    /// Shortest paths, non-negative weights
    Dijkstra {
        #[arg(short, long, default_value_t = 0)]
        start: usize,
    },
    /// Shortest paths, negative weights allowed
    BellmanFord {
        #[arg(short, long, default_value_t = 0)]
        start: usize,
    },
    /// Topological order of a DAG
    Topo,
    /// Strongly connected components
    Scc,
    /// Minimum spanning tree of an undirected graph
    Mst {
        #[arg(long, value_enum, default_value_t = MstMethod::Kruskal)]
        method: MstMethod,
        #[arg(short, long, default_value_t = 0)]
        start: usize,
    },
    /// Two-colouring, if one exists
    Bipartite,
    /// Connected components
    Components,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum MstMethod {
    Kruskal,
    Prim,
}

#[derive(Subcommand, Clone)]
pub enum DpProblem {
    /// n-th Fibonacci number
    Fib { n: usize },
    /// Ways to climb n stairs by 1 or 2
    Stairs { n: usize },
    /// Longest common subsequence
    Lcs { a: String, b: String },
    /// Longest strictly increasing subsequence
    Lis {
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<i64>,
    },
    /// 0/1 knapsack
    Knapsack {
        #[arg(long, value_delimiter = ',', required = true)]
        weights: Vec<usize>,
        #[arg(long, value_delimiter = ',', required = true)]
        values: Vec<u64>,
        #[arg(long)]
        capacity: usize,
    },
    /// Fewest coins making an amount
    Coins {
        #[arg(long, value_delimiter = ',', required = true)]
        coins: Vec<usize>,
        amount: usize,
    },
    /// Maximum-sum contiguous subarray
    MaxSubarray {
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<i64>,
    },
    /// Longest palindromic substring
    Palindrome { text: String },
    /// Levenshtein distance
    EditDistance { a: String, b: String },
    /// Cheapest matrix chain multiplication order
    MatrixChain {
        #[arg(required = true)]
        dims: Vec<u64>,
    },
}

//! Runs one small demonstration per group and checks each result.

use std::collections::HashMap;

use algorithms::data_structures::{
    BinarySearchTree, CircularList, DisjointSet, DoublyLinkedList, LinkedList, MinHeap, Queue,
    Stack,
};
use algorithms::dynamic_programming::{
    climbing_stairs, coin_change, edit_distance, fibonacci, knapsack, lcs, lis, matrix_chain,
    max_subarray, palindrome,
};
use algorithms::graph::adj_matrix::AdjMatrix;
use algorithms::graph::bellman_ford::bellman_ford;
use algorithms::graph::bfs::bfs;
use algorithms::graph::bipartite::is_bipartite;
use algorithms::graph::components::count_connected_components;
use algorithms::graph::dfs::{dfs, dfs_iterative};
use algorithms::graph::dijkstra::dijkstra;
use algorithms::graph::mst::{kruskal, prim};
use algorithms::graph::scc::kosaraju_scc;
use algorithms::graph::document::GraphDocument;
use algorithms::graph::topological_sort::topological_sort;
use algorithms::invariant::{Invariant, NonNegative, PermutationOf, Sorted};
use algorithms::modeling::shapes::total_area;
use algorithms::modeling::{Circle, Employee, Rectangle, Role, Shape, Triangle};
use algorithms::searching::SearchAlgorithm;
use algorithms::sorting::bucket_sort::bucket_sort;
use algorithms::sorting::SortAlgorithm;
use colored::*;
use serde::Serialize;

use super::output::emit;

const SAMPLE_ARRAY: [i64; 7] = [64, 34, 25, 12, 22, 11, 90];

#[derive(Serialize)]
struct Check {
    group: &'static str,
    name: String,
    passed: bool,
}

#[derive(Default)]
struct Report {
    checks: Vec<Check>,
}

impl Report {
    fn check(&mut self, group: &'static str, name: impl Into<String>, passed: bool) {
        let name = name.into();
        if !passed {
            tracing::warn!(group, check = %name, "check failed");
        }
        self.checks.push(Check { group, name, passed });
    }
}

pub fn run_tour(json: bool) -> anyhow::Result<()> {
    let mut report = Report::default();
    sorting(&mut report)?;
    searching(&mut report);
    graphs(&mut report)?;
    dynamic_programming(&mut report)?;
    containers(&mut report)?;
    modeling(&mut report)?;

    emit(json, &report.checks, |checks| {
        let mut group = "";
        for c in checks.iter() {
            if c.group != group {
                group = c.group;
                println!("{}", group.bold().underline());
            }
            let mark = if c.passed { "✓".green() } else { "✗".red() };
            println!("  {mark} {}", c.name);
        }
    })?;

    let failed = report.checks.iter().filter(|c| !c.passed).count();
    if failed > 0 {
        anyhow::bail!("{failed} of {} checks failed", report.checks.len());
    }
    Ok(())
}

fn sorting(r: &mut Report) -> anyhow::Result<()> {
    for algo in SortAlgorithm::ALL {
        let mut v = SAMPLE_ARRAY.to_vec();
        algo.sort(&mut v)?;
        let ok = Sorted.check(&v[..]) && PermutationOf(&SAMPLE_ARRAY[..]).check(&v[..]);
        r.check("sorting", format!("{algo} sort"), ok);
    }
    let mut floats = vec![0.897, 0.565, 0.656, 0.1234, 0.665, 0.3434];
    bucket_sort(&mut floats)?;
    r.check("sorting", "bucket sort", Sorted.check(&floats[..]));
    Ok(())
}

fn searching(r: &mut Report) {
    let sorted = [2, 3, 4, 10, 40, 45, 50, 60, 70];
    for algo in SearchAlgorithm::ALL {
        let hit = algo.search(&sorted, 10);
        let miss = algo.search(&sorted, 5);
        let ok = hit.is_some_and(|i| sorted[i] == 10) && miss.is_none();
        r.check("searching", format!("{algo} search"), ok);
    }
}

const SAMPLE_GRAPH: &str = r#"{
    "vertices": 6,
    "directed": false,
    "edges": [[0,1,4],[0,2,2],[1,2,5],[1,3,10],[2,3,3],[2,4,2],[3,4,1],[3,5,2],[4,5,6]]
}"#;

fn graphs(r: &mut Report) -> anyhow::Result<()> {
    let g = GraphDocument::from_json(SAMPLE_GRAPH)?.build()?;
    let topo = g.topology();

    r.check("graph", "bfs reaches every vertex", bfs(&topo, 0)?.len() == 6);
    r.check("graph", "dfs orders agree", dfs(&topo, 0)? == dfs_iterative(&topo, 0)?);

    let fast = dijkstra(&g.non_negative()?, 0)?;
    let slow = bellman_ford(g.vertex_count(), &g.edges(), 0)?;
    let agree = (0..6).all(|v| fast.distance(v).map(|d| d as i64) == slow.distance(v));
    r.check("graph", "dijkstra matches bellman-ford", agree);
    let dists: Vec<i64> = (0..6).filter_map(|v| slow.distance(v)).collect();
    r.check("graph", "distances are non-negative", NonNegative.check(&dists[..]));

    let k = kruskal(g.vertex_count(), &g.undirected_edges())?;
    let p = prim(&g, 0)?;
    r.check("graph", "kruskal and prim weigh 11", k.total_weight == 11 && p.total_weight == 11);

    r.check("graph", "one connected component", count_connected_components(&topo)? == 1);
    r.check("graph", "triangle 0-1-2 is not bipartite", !is_bipartite(&topo));

    let m = AdjMatrix::from_adj_list(&g);
    r.check("graph", "matrix round trip", m.to_adj_list().edges().len() == g.edge_count());

    let dag = vec![vec![1, 2], vec![3], vec![3], vec![]];
    r.check("graph", "topological order", topological_sort(&dag)? == vec![0, 1, 2, 3]);
    let cyclic = vec![vec![1], vec![2], vec![0, 3], vec![]];
    r.check("graph", "scc groups the cycle", kosaraju_scc(&cyclic)?.len() == 2);
    r.check("graph", "cycle rejected by topological sort", topological_sort(&cyclic).is_err());
    Ok(())
}

fn dynamic_programming(r: &mut Report) -> anyhow::Result<()> {
    let mut memo = HashMap::new();
    r.check(
        "dynamic programming",
        "fibonacci(10) = 55 four ways",
        [
            fibonacci::fib_recursive(10)?,
            fibonacci::fib_memo(10, &mut memo)?,
            fibonacci::fib_tab(10)?,
            fibonacci::fib_optimized(10)?,
        ]
        .iter()
        .all(|&f| f == 55),
    );
    r.check(
        "dynamic programming",
        "climbing 5 stairs = 8",
        climbing_stairs::climb_stairs_dp(5)? == 8 && climbing_stairs::climb_stairs_recursive(5)? == 8,
    );
    r.check("dynamic programming", "lcs(abcde, ace) = ace", lcs::lcs_string("abcde", "ace") == "ace");
    let arr = [10, 9, 2, 5, 3, 7, 101, 18];
    r.check(
        "dynamic programming",
        "lis = 4",
        lis::lis_quadratic(&arr) == 4 && lis::lis_patience(&arr) == 4,
    );
    let (w, v) = ([2, 3, 4, 5], [3, 4, 5, 6]);
    r.check(
        "dynamic programming",
        "knapsack(8) = 10",
        knapsack::knapsack_table(&w, &v, 8)? == 10 && knapsack::knapsack_rolling(&w, &v, 8)? == 10,
    );
    r.check(
        "dynamic programming",
        "coin change 11 with 1,2,5 = 3",
        coin_change::coin_change(&[1, 2, 5], 11)? == Some(3),
    );
    let (sum, _) = max_subarray::max_subarray_kadane(&[-2, 1, -3, 4, -1, 2, 1, -5, 4])?;
    r.check("dynamic programming", "max subarray = 6", sum == 6);
    r.check(
        "dynamic programming",
        "palindrome in babad",
        palindrome::longest_palindrome("babad") == "bab",
    );
    r.check(
        "dynamic programming",
        "edit distance kitten/sitting = 3",
        edit_distance::edit_distance("kitten", "sitting") == 3,
    );
    r.check(
        "dynamic programming",
        "matrix chain 40x20x30x10x30 = 26000",
        matrix_chain::matrix_chain_order(&[40, 20, 30, 10, 30])? == 26_000,
    );
    Ok(())
}

fn containers(r: &mut Report) -> anyhow::Result<()> {
    let mut list: LinkedList<i32> = (1..=4).collect();
    list.insert_at(2, 10)?;
    list.reverse();
    r.check(
        "containers",
        "singly linked list",
        list.iter().copied().collect::<Vec<_>>() == [4, 3, 10, 2, 1],
    );

    let mut dlist: DoublyLinkedList<i32> = (1..=4).collect();
    dlist.remove_at(1)?;
    r.check(
        "containers",
        "doubly linked list",
        dlist.iter_rev().copied().collect::<Vec<_>>() == [4, 3, 1],
    );

    let mut ring: CircularList<i32> = (1..=4).collect();
    ring.rotate(1);
    r.check("containers", "circular list rotation", ring.front() == Some(&2) && ring.back() == Some(&1));

    let tree: BinarySearchTree<i32> = [50, 30, 70, 20, 40, 60, 80].into_iter().collect();
    r.check(
        "containers",
        "bst inorder is sorted",
        Sorted.check(&tree.inorder()[..]) && tree.is_balanced() && tree.height() == 3,
    );

    let mut stack: Stack<i32> = (1..=3).collect();
    r.check("containers", "stack is lifo", stack.pop_or_err()? == 3);

    let mut queue = Queue::new(2);
    queue.enqueue(1)?;
    queue.enqueue(2)?;
    r.check("containers", "bounded queue rejects overflow", queue.enqueue(3).is_err());
    r.check("containers", "queue is fifo", queue.dequeue() == Some(1));

    let heap = MinHeap::from_vec(SAMPLE_ARRAY.to_vec());
    r.check("containers", "heap drains ascending", Sorted.check(&heap.into_sorted_vec()[..]));

    let mut sets = DisjointSet::new(4);
    sets.union(0, 1);
    sets.union(2, 3);
    r.check("containers", "disjoint sets", sets.set_count() == 2 && !sets.connected(1, 2));
    Ok(())
}

fn modeling(r: &mut Report) -> anyhow::Result<()> {
    let shapes: Vec<Box<dyn Shape>> = vec![
        Box::new(Circle::new(1.0)?),
        Box::new(Rectangle::new(4.0, 6.0)?),
        Box::new(Triangle::new(3.0, 4.0, 5.0)?),
    ];
    let expected = std::f64::consts::PI + 24.0 + 6.0;
    r.check("modeling", "shape areas", (total_area(&shapes) - expected).abs() < 1e-9);
    r.check("modeling", "invalid triangle rejected", Triangle::new(1.0, 2.0, 3.0).is_err());

    let staff = Employee::new("Ada", 36, 50_000.0, "Ops", Role::Staff)?;
    let manager = Employee::new("Grace", 45, 90_000.0, "Eng", Role::Manager { team_size: 8 })?;
    r.check("modeling", "staff bonus 10%", (staff.bonus() - 5_000.0).abs() < 1e-6);
    r.check("modeling", "manager bonus 18%", (manager.bonus() - 16_200.0).abs() < 1e-6);
    r.check("modeling", "negative salary rejected", Employee::new("X", 30, -1.0, "", Role::Staff).is_err());
    Ok(())
}

use algorithms::invariant::{Invariant, Sorted};
use algorithms::searching::SearchAlgorithm;
use colored::*;
use serde::Serialize;

use super::output::emit;

#[derive(Serialize)]
struct SearchRun {
    algorithm: SearchAlgorithm,
    /// Index into the input
    index: Option<usize>,
}

pub fn run_search(
    algorithm: SearchAlgorithm,
    all: bool,
    target: i64,
    values: Vec<i64>,
    json: bool,
) -> anyhow::Result<()> {
    let algorithms: Vec<SearchAlgorithm> =
        if all { SearchAlgorithm::ALL.to_vec() } else { vec![algorithm] };

    let sorted = Sorted.check(&values[..]);
    let mut runs = Vec::with_capacity(algorithms.len());
    for algo in algorithms {
        if algo.requires_sorted() && !sorted {
            if all {
                tracing::warn!(algorithm = %algo, "skipped: input is not sorted");
                continue;
            }
            anyhow::bail!("{algo} search needs sorted input");
        }
        runs.push(SearchRun { algorithm: algo, index: algo.search(&values, target) });
    }

    emit(json, &runs, |runs| {
        for run in runs {
            let found = match run.index {
                Some(i) => format!("found {target} at {i}").green(),
                None => format!("{target} not found").red(),
            };
            println!("{:>16} {}", run.algorithm.to_string().cyan(), found);
        }
    })
}

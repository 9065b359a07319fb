use algorithms::invariant::{Invariant, PermutationOf, Sorted};
use algorithms::sorting::SortAlgorithm;
use colored::*;
use serde::Serialize;

use super::output::{emit, join};

#[derive(Serialize)]
struct SortRun {
    algorithm: SortAlgorithm,
    stable: bool,
    output: Vec<i64>,
}

pub fn run_sort(algorithm: SortAlgorithm, all: bool, values: Vec<i64>, json: bool) -> anyhow::Result<()> {
    let algorithms: Vec<SortAlgorithm> = if all { SortAlgorithm::ALL.to_vec() } else { vec![algorithm] };

    let mut runs = Vec::with_capacity(algorithms.len());
    for algo in algorithms {
        let mut output = values.clone();
        algo.sort(&mut output)?;
        if !(Sorted.check(&output[..]) && PermutationOf(&values[..]).check(&output[..])) {
            anyhow::bail!("{algo} sort produced an invalid result");
        }
        tracing::debug!(algorithm = %algo, len = output.len(), "sorted");
        runs.push(SortRun { algorithm: algo, stable: algo.is_stable(), output });
    }

    emit(json, &runs, |runs| {
        println!("{} {}", "input:".bold(), join(&values));
        for run in runs {
            let tag = if run.stable { "stable".green() } else { "unstable".yellow() };
            println!("{:>10} [{}] {}", run.algorithm.to_string().cyan(), tag, join(&run.output));
        }
    })
}

use algorithms::dynamic_programming::{
    climbing_stairs, coin_change, edit_distance, fibonacci, knapsack, lcs, lis, matrix_chain,
    max_subarray, palindrome,
};
use colored::*;
use serde::Serialize;
use serde_json::json;

use super::output::{emit, join};
use super::DpProblem;

#[derive(Serialize)]
struct Answer {
    problem: &'static str,
    answer: serde_json::Value,
}

pub fn run_dp(problem: DpProblem, json: bool) -> anyhow::Result<()> {
    let answer = solve(problem)?;
    emit(json, &answer, |a| {
        let text = match &a.answer {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        println!("{} {}", format!("{}:", a.problem).bold(), text.green());
    })
}

fn solve(problem: DpProblem) -> anyhow::Result<Answer> {
    let (name, answer) = match problem {
        DpProblem::Fib { n } => ("fibonacci", json!(fibonacci::fib_optimized(n)?)),
        DpProblem::Stairs { n } => ("climbing stairs", json!(climbing_stairs::climb_stairs_optimized(n)?)),
        DpProblem::Lcs { a, b } => (
            "longest common subsequence",
            json!({ "length": lcs::lcs_length(&a, &b), "subsequence": lcs::lcs_string(&a, &b) }),
        ),
        DpProblem::Lis { values } => {
            let seq = lis::lis_sequence(&values);
            tracing::debug!(input = %join(&values), "lis");
            ("longest increasing subsequence", json!({ "length": seq.len(), "sequence": seq }))
        }
        DpProblem::Knapsack { weights, values, capacity } => (
            "knapsack",
            json!(knapsack::knapsack_rolling(&weights, &values, capacity)?),
        ),
        DpProblem::Coins { coins, amount } => {
            ("coin change", json!(coin_change::coin_change(&coins, amount)?))
        }
        DpProblem::MaxSubarray { values } => {
            let (sum, range) = max_subarray::max_subarray_kadane(&values)?;
            ("maximum subarray", json!({ "sum": sum, "start": range.start, "end": range.end }))
        }
        DpProblem::Palindrome { text } => {
            ("longest palindrome", json!(palindrome::longest_palindrome(&text)))
        }
        DpProblem::EditDistance { a, b } => {
            ("edit distance", json!(edit_distance::edit_distance(&a, &b)))
        }
        DpProblem::MatrixChain { dims } => (
            "matrix chain",
            json!({
                "multiplications": matrix_chain::matrix_chain_order(&dims)?,
                "order": matrix_chain::matrix_chain_parenthesization(&dims)?,
            }),
        ),
    };
    Ok(Answer { problem: name, answer })
}

//! 0/1 knapsack.
//!
//! Variables:
//!   w[i], v[i] : weight and value of item i,  i in 0..n
//!   C          : capacity
//!
//! Equations:
//!   dp[i][c] = dp[i-1][c]                                   w[i-1] > c
//!            = max(dp[i-1][c], v[i-1] + dp[i-1][c - w[i-1]]) otherwise
//!   rolling:  dp[c] updated for c = C down to w[i]   O(n·C) time, O(C) space

use crate::error::{AlgoError, Result};

fn check(weights: &[usize], values: &[u64]) -> Result<()> {
    if weights.len() != values.len() {
        return Err(AlgoError::InvalidArgument(format!(
            "{} weights but {} values",
            weights.len(),
            values.len()
        )));
    }
    Ok(())
}

fn add(value: u64, rest: u64) -> Result<u64> {
    value.checked_add(rest).ok_or(AlgoError::Overflow("knapsack"))
}

/// Exponential-time oracle.
pub fn knapsack_recursive(weights: &[usize], values: &[u64], capacity: usize) -> Result<u64> {
    fn go(weights: &[usize], values: &[u64], capacity: usize, n: usize) -> Result<u64> {
        if n == 0 || capacity == 0 {
            return Ok(0);
        }
        let exclude = go(weights, values, capacity, n - 1)?;
        if weights[n - 1] > capacity {
            return Ok(exclude);
        }
        let include = add(values[n - 1], go(weights, values, capacity - weights[n - 1], n - 1)?)?;
        Ok(include.max(exclude))
    }
    check(weights, values)?;
    go(weights, values, capacity, weights.len())
}

pub fn knapsack_table(weights: &[usize], values: &[u64], capacity: usize) -> Result<u64> {
    check(weights, values)?;
    let n = weights.len();
    let mut dp = vec![vec![0u64; capacity + 1]; n + 1];
    for i in 1..=n {
        for c in 1..=capacity {
            dp[i][c] = dp[i - 1][c];
            if weights[i - 1] <= c {
                dp[i][c] = dp[i][c].max(add(values[i - 1], dp[i - 1][c - weights[i - 1]])?);
            }
        }
    }
    Ok(dp[n][capacity])
}

pub fn knapsack_rolling(weights: &[usize], values: &[u64], capacity: usize) -> Result<u64> {
    check(weights, values)?;
    let mut dp = vec![0u64; capacity + 1];
    for (&w, &v) in weights.iter().zip(values) {
        for c in (w..=capacity).rev() {
            dp[c] = dp[c].max(add(v, dp[c - w])?);
        }
    }
    Ok(dp[capacity])
}

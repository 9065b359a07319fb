//! Fibonacci numbers, four ways.
//!
//! Equations:
//!   F(0) = 0,  F(1) = 1,  F(n) = F(n-1) + F(n-2)
//!   F(93) is the largest value that fits in u64
//!
//!   fib_recursive   O(φ^n)
//!   fib_memo        O(n) time, O(n) memo
//!   fib_tab         O(n) time, O(n) table
//!   fib_optimized   O(n) time, O(1) space

use std::collections::HashMap;

use crate::error::{AlgoError, Result};

pub const MAX_FIB_INDEX: usize = 93;

fn check(n: usize) -> Result<()> {
    if n > MAX_FIB_INDEX {
        return Err(AlgoError::Overflow("fibonacci"));
    }
    Ok(())
}

pub fn fib_recursive(n: usize) -> Result<u64> {
    fn go(n: usize) -> u64 {
        if n <= 1 {
            return n as u64;
        }
        go(n - 1) + go(n - 2)
    }
    check(n)?;
    Ok(go(n))
}

pub fn fib_memo(n: usize, memo: &mut HashMap<usize, u64>) -> Result<u64> {
    check(n)?;
    if n <= 1 {
        return Ok(n as u64);
    }
    if let Some(&v) = memo.get(&n) {
        return Ok(v);
    }
    let val = fib_memo(n - 1, memo)? + fib_memo(n - 2, memo)?;
    memo.insert(n, val);
    Ok(val)
}

pub fn fib_tab(n: usize) -> Result<u64> {
    check(n)?;
    if n <= 1 {
        return Ok(n as u64);
    }
    let mut dp = vec![0u64; n + 1];
    dp[1] = 1;
    for i in 2..=n {
        dp[i] = dp[i - 1] + dp[i - 2];
    }
    Ok(dp[n])
}

pub fn fib_optimized(n: usize) -> Result<u64> {
    check(n)?;
    let (mut a, mut b) = (0u64, 1u64);
    for _ in 0..n {
        (a, b) = (b, a.saturating_add(b));
    }
    Ok(a)
}

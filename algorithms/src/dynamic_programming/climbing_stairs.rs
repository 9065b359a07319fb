//! Ways to climb `n` stairs taking 1 or 2 steps at a time.
//!
//! Equations:
//!   ways(n) = n                           n <= 2
//!   ways(n) = ways(n-1) + ways(n-2)       n >  2
//!   ways(n) = F(n+1), so n <= 92 fits in u64

use crate::error::{AlgoError, Result};

const MAX_STAIRS: usize = 92;

fn check(n: usize) -> Result<()> {
    if n > MAX_STAIRS {
        return Err(AlgoError::Overflow("climb_stairs"));
    }
    Ok(())
}

pub fn climb_stairs_recursive(n: usize) -> Result<u64> {
    fn go(n: usize) -> u64 {
        if n <= 2 {
            return n as u64;
        }
        go(n - 1) + go(n - 2)
    }
    check(n)?;
    Ok(go(n))
}

pub fn climb_stairs_dp(n: usize) -> Result<u64> {
    check(n)?;
    if n <= 2 {
        return Ok(n as u64);
    }
    let mut dp = vec![0u64; n + 1];
    dp[1] = 1;
    dp[2] = 2;
    for i in 3..=n {
        dp[i] = dp[i - 1] + dp[i - 2];
    }
    Ok(dp[n])
}

pub fn climb_stairs_optimized(n: usize) -> Result<u64> {
    check(n)?;
    if n <= 2 {
        return Ok(n as u64);
    }
    let (mut prev, mut cur) = (1u64, 2u64);
    for _ in 3..=n {
        (prev, cur) = (cur, prev + cur);
    }
    Ok(cur)
}

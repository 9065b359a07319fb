//! Fewest coins summing to an amount, unlimited supply of each denomination.
//!
//! Equations:
//!   dp[0] = 0
//!   dp[a] = min over coins c <= a of dp[a - c] + 1      O(amount · |coins|)
//!   unreachable amounts stay at None

use crate::error::{AlgoError, Result};

fn check(coins: &[usize]) -> Result<()> {
    if coins.contains(&0) {
        return Err(AlgoError::InvalidArgument("coin denominations must be positive".into()));
    }
    Ok(())
}

/// `None` when no combination of coins reaches `amount`.
pub fn coin_change(coins: &[usize], amount: usize) -> Result<Option<usize>> {
    check(coins)?;
    let mut dp: Vec<Option<usize>> = vec![None; amount + 1];
    dp[0] = Some(0);
    for &coin in coins {
        for a in coin..=amount {
            if let Some(prev) = dp[a - coin] {
                dp[a] = Some(dp[a].map_or(prev + 1, |cur| cur.min(prev + 1)));
            }
        }
    }
    Ok(dp[amount])
}

/// Exponential-time oracle: take coin `i` again, or drop to coin `i - 1`.
pub fn coin_change_recursive(coins: &[usize], amount: usize) -> Result<Option<usize>> {
    fn go(coins: &[usize], amount: usize) -> Option<usize> {
        if amount == 0 {
            return Some(0);
        }
        let (&coin, rest) = coins.split_last()?;
        let take = amount
            .checked_sub(coin)
            .and_then(|left| go(coins, left))
            .map(|n| n + 1);
        let skip = go(rest, amount);
        match (take, skip) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }
    check(coins)?;
    Ok(go(coins, amount))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_amounts() {
        assert_eq!(coin_change(&[1, 2, 5], 11), Ok(Some(3)));
        assert_eq!(coin_change_recursive(&[1, 2, 5], 11), Ok(Some(3)));
        assert_eq!(coin_change(&[1, 3, 4], 6), Ok(Some(2)));
        assert_eq!(coin_change_recursive(&[1, 3, 4], 6), Ok(Some(2)));
    }

    #[test]
    fn unreachable_and_zero() {
        assert_eq!(coin_change(&[2], 3), Ok(None));
        assert_eq!(coin_change_recursive(&[2], 3), Ok(None));
        assert_eq!(coin_change(&[], 0), Ok(Some(0)));
        assert_eq!(coin_change(&[], 4), Ok(None));
    }

    #[test]
    fn zero_coin_rejected() {
        assert!(coin_change(&[0, 1], 3).is_err());
        assert!(coin_change_recursive(&[0], 3).is_err());
    }
}

//! Longest strictly increasing subsequence.
//!
//! Equations:
//!   quadratic: dp[i] = 1 + max{ dp[j] : j < i, a[j] < a[i] }          O(n²)
//!   patience:  tails[k] = smallest tail of an increasing run of k+1
//!              each x replaces the first tail >= x                     O(n log n)

/// Exponential-time oracle.
pub fn lis_recursive(arr: &[i64]) -> usize {
    fn go(arr: &[i64], prev: Option<i64>) -> usize {
        let Some((&x, rest)) = arr.split_first() else { return 0 };
        let skip = go(rest, prev);
        if prev.map_or(true, |p| x > p) {
            skip.max(1 + go(rest, Some(x)))
        } else {
            skip
        }
    }
    go(arr, None)
}

pub fn lis_quadratic(arr: &[i64]) -> usize {
    let mut dp = vec![1usize; arr.len()];
    for i in 0..arr.len() {
        for j in 0..i {
            if arr[j] < arr[i] {
                dp[i] = dp[i].max(dp[j] + 1);
            }
        }
    }
    dp.into_iter().max().unwrap_or(0)
}

pub fn lis_patience(arr: &[i64]) -> usize {
    let mut tails: Vec<i64> = Vec::new();
    for &x in arr {
        let pos = tails.partition_point(|&t| t < x);
        if pos == tails.len() {
            tails.push(x);
        } else {
            tails[pos] = x;
        }
    }
    tails.len()
}

/// One longest increasing subsequence, rebuilt from patience-sort parents.
pub fn lis_sequence(arr: &[i64]) -> Vec<i64> {
    let mut tails: Vec<usize> = Vec::new();
    let mut parent: Vec<Option<usize>> = vec![None; arr.len()];
    for (i, &x) in arr.iter().enumerate() {
        let pos = tails.partition_point(|&t| arr[t] < x);
        parent[i] = pos.checked_sub(1).map(|p| tails[p]);
        if pos == tails.len() {
            tails.push(i);
        } else {
            tails[pos] = i;
        }
    }
    let mut out = Vec::with_capacity(tails.len());
    let mut cur = tails.last().copied();
    while let Some(i) = cur {
        out.push(arr[i]);
        cur = parent[i];
    }
    out.reverse();
    out
}

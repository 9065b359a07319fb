//! Longest common subsequence over `char`s.
//!
//! Equations:
//!   dp[i][j] = dp[i-1][j-1] + 1                 a[i-1] == b[j-1]
//!            = max(dp[i-1][j], dp[i][j-1])      otherwise
//!   O(m·n) time and space

fn table(a: &[char], b: &[char]) -> Vec<Vec<usize>> {
    let (m, n) = (a.len(), b.len());
    let mut dp = vec![vec![0usize; n + 1]; m + 1];
    for i in 1..=m {
        for j in 1..=n {
            dp[i][j] = if a[i - 1] == b[j - 1] {
                dp[i - 1][j - 1] + 1
            } else {
                dp[i - 1][j].max(dp[i][j - 1])
            };
        }
    }
    dp
}

pub fn lcs_length(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    table(&a, &b)[a.len()][b.len()]
}

/// Exponential-time oracle.
pub fn lcs_recursive(a: &str, b: &str) -> usize {
    fn go(a: &[char], b: &[char]) -> usize {
        match (a.split_last(), b.split_last()) {
            (Some((x, ra)), Some((y, rb))) if x == y => 1 + go(ra, rb),
            (Some((_, ra)), Some((_, rb))) => go(ra, b).max(go(a, rb)),
            _ => 0,
        }
    }
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    go(&a, &b)
}

/// One longest common subsequence. Walks the table back from the corner,
/// stepping up only when that cell is strictly larger.
pub fn lcs_string(a: &str, b: &str) -> String {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let dp = table(&a, &b);
    let (mut i, mut j) = (a.len(), b.len());
    let mut out = Vec::with_capacity(dp[i][j]);
    while i > 0 && j > 0 {
        if a[i - 1] == b[j - 1] {
            out.push(a[i - 1]);
            i -= 1;
            j -= 1;
        } else if dp[i - 1][j] > dp[i][j - 1] {
            i -= 1;
        } else {
            j -= 1;
        }
    }
    out.iter().rev().collect()
}

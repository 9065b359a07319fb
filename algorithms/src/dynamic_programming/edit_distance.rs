//! Levenshtein distance: insertions, deletions and substitutions cost 1.
//!
//! Equations:
//!   dp[i][0] = i,  dp[0][j] = j
//!   dp[i][j] = dp[i-1][j-1]                                    a[i-1] == b[j-1]
//!            = 1 + min(dp[i][j-1], dp[i-1][j], dp[i-1][j-1])   otherwise

pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (m, n) = (a.len(), b.len());
    let mut dp = vec![vec![0usize; n + 1]; m + 1];
    for (i, row) in dp.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=n {
        dp[0][j] = j;
    }
    for i in 1..=m {
        for j in 1..=n {
            dp[i][j] = if a[i - 1] == b[j - 1] {
                dp[i - 1][j - 1]
            } else {
                1 + dp[i][j - 1].min(dp[i - 1][j]).min(dp[i - 1][j - 1])
            };
        }
    }
    dp[m][n]
}

/// Exponential-time oracle.
pub fn edit_distance_recursive(a: &str, b: &str) -> usize {
    fn go(a: &[char], b: &[char]) -> usize {
        match (a.split_last(), b.split_last()) {
            (None, _) => b.len(),
            (_, None) => a.len(),
            (Some((x, ra)), Some((y, rb))) if x == y => go(ra, rb),
            (Some((_, ra)), Some((_, rb))) => 1 + go(a, rb).min(go(ra, b)).min(go(ra, rb)),
        }
    }
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    go(&a, &b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_distances() {
        assert_eq!(edit_distance("kitten", "sitting"), 3);
        assert_eq!(edit_distance("horse", "ros"), 3);
        assert_eq!(edit_distance("intention", "execution"), 5);
        assert_eq!(edit_distance_recursive("horse", "ros"), 3);
        assert_eq!(edit_distance_recursive("sunday", "saturday"), 3);
    }

    #[test]
    fn against_empty() {
        assert_eq!(edit_distance("", "abc"), 3);
        assert_eq!(edit_distance("abc", ""), 3);
        assert_eq!(edit_distance_recursive("", ""), 0);
        assert_eq!(edit_distance("same", "same"), 0);
    }
}

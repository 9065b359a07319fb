//! Longest palindromic substring over `char`s.

/// Expand around each of the 2n-1 centres. The first longest wins. O(n²)
pub fn longest_palindrome(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let n = chars.len();
    let (mut best_start, mut best_len) = (0, n.min(1));

    let expand = |mut lo: usize, mut hi: usize| -> (usize, usize) {
        // [lo, hi) is already a palindrome; widen while the ends match
        while lo > 0 && hi < n && chars[lo - 1] == chars[hi] {
            lo -= 1;
            hi += 1;
        }
        (lo, hi - lo)
    };

    for centre in 0..n {
        for (start, len) in [expand(centre, centre + 1), expand(centre, centre)] {
            if len > best_len {
                best_start = start;
                best_len = len;
            }
        }
    }
    chars[best_start..best_start + best_len].iter().collect()
}

/// Table form: `pal[i][j]` iff `s[i..=j]` is a palindrome. Among equally
/// long answers the last one found wins. O(n²) time and space.
pub fn longest_palindrome_table(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let n = chars.len();
    if n == 0 {
        return String::new();
    }
    let mut pal = vec![vec![false; n]; n];
    let (mut start, mut max_len) = (0, 1);
    for i in 0..n {
        pal[i][i] = true;
    }
    for i in 0..n - 1 {
        if chars[i] == chars[i + 1] {
            pal[i][i + 1] = true;
            start = i;
            max_len = 2;
        }
    }
    for len in 3..=n {
        for i in 0..=n - len {
            let j = i + len - 1;
            if pal[i + 1][j - 1] && chars[i] == chars[j] {
                pal[i][j] = true;
                start = i;
                max_len = len;
            }
        }
    }
    chars[start..start + max_len].iter().collect()
}

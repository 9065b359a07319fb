use super::binary_search::binary_search;

/// Doubles a bound until it passes the target, then binary searches the
/// last doubling window.
pub fn exponential_search<T: Ord>(arr: &[T], target: &T) -> Option<usize> {
    let n = arr.len();
    if n == 0 {
        return None;
    }
    if arr[0] == *target {
        return Some(0);
    }
    let mut bound = 1;
    while bound < n && arr[bound] <= *target {
        bound *= 2;
    }
    let lo = bound / 2;
    let hi = (bound + 1).min(n);
    binary_search(&arr[lo..hi], target).map(|i| lo + i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_at_window_edges() {
        let v: Vec<u32> = (1..=33).collect();
        for (i, x) in v.iter().enumerate() {
            assert_eq!(exponential_search(&v, x), Some(i), "{x}");
        }
        assert_eq!(exponential_search(&v, &0), None);
        assert_eq!(exponential_search(&v, &34), None);
    }
}

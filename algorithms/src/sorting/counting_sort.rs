//! Counting sort over signed integers.
//!
//! Variables:
//!   min, max : i64        — extremes of the input
//!   K        : u64        — max - min + 1, number of count slots
//!   count[k] : usize      — occurrences of min + k, then prefix sums
//!
//! Equations:
//!   count[k] = |{ i | arr[i] - min == k }|
//!   prefix:   count[k] += count[k-1]
//!   place right-to-left: out[--count[arr[i]-min]] = arr[i]   (stable)
//!   Complexity: O(N + K)

use crate::error::{AlgoError, Result};

/// Largest value range accepted before refusing to allocate the count table.
pub const MAX_RANGE: u64 = 1 << 24;

pub fn counting_sort(arr: &mut [i64]) -> Result<()> {
    let (Some(&min), Some(&max)) = (arr.iter().min(), arr.iter().max()) else {
        return Ok(());
    };
    let range = (max as i128 - min as i128 + 1) as u128;
    if range > MAX_RANGE as u128 {
        let range = u64::try_from(range).unwrap_or(u64::MAX);
        return Err(AlgoError::RangeTooLarge { range, limit: MAX_RANGE });
    }

    let slot = |v: i64| (v as i128 - min as i128) as usize;
    let mut count = vec![0usize; range as usize];
    for &v in arr.iter() {
        count[slot(v)] += 1;
    }
    for k in 1..count.len() {
        count[k] += count[k - 1];
    }

    let mut out = vec![0i64; arr.len()];
    for &v in arr.iter().rev() {
        let k = slot(v);
        count[k] -= 1;
        out[count[k]] = v;
    }
    arr.copy_from_slice(&out);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_small_range() {
        let mut v = vec![4, 2, 2, 8, 3, 3, 1];
        counting_sort(&mut v).unwrap();
        assert_eq!(v, vec![1, 2, 2, 3, 3, 4, 8]);
    }

    #[test]
    fn handles_negatives() {
        let mut v = vec![-5, 3, 0, -5, -1];
        counting_sort(&mut v).unwrap();
        assert_eq!(v, vec![-5, -5, -1, 0, 3]);
    }

    #[test]
    fn rejects_huge_range() {
        let mut v = vec![i64::MIN, i64::MAX];
        let err = counting_sort(&mut v).unwrap_err();
        assert!(matches!(err, AlgoError::RangeTooLarge { .. }));
        assert_eq!(v, vec![i64::MIN, i64::MAX]);
    }

    #[test]
    fn empty_is_noop() {
        let mut v: Vec<i64> = vec![];
        assert!(counting_sort(&mut v).is_ok());
    }
}

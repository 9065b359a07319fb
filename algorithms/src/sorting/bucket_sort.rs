//! Bucket sort for floating-point input.
//!
//! Variables:
//!   N          : number of values, also the number of buckets
//!   lo, hi     : min and max of the input
//!
//! Equations:
//!   bucket(x) = min(N - 1, floor(N * (x - lo) / (hi - lo)))
//!   each bucket is insertion-sorted, buckets are concatenated in order
//!
//! Uniformly distributed input gives O(N) expected time.

use crate::error::{AlgoError, Result};

pub fn bucket_sort(arr: &mut [f64]) -> Result<()> {
    if arr.iter().any(|v| v.is_nan()) {
        return Err(AlgoError::NotANumber);
    }
    let n = arr.len();
    if n <= 1 {
        return Ok(());
    }

    let lo = arr.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = arr.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = hi - lo;
    if span == 0.0 {
        return Ok(());
    }
    if !span.is_finite() {
        // Infinite endpoints make the interpolation meaningless.
        arr.sort_by(f64::total_cmp);
        return Ok(());
    }

    let mut buckets: Vec<Vec<f64>> = vec![Vec::new(); n];
    for &v in arr.iter() {
        let idx = ((n as f64) * (v - lo) / span) as usize;
        buckets[idx.min(n - 1)].push(v);
    }

    let mut k = 0;
    for bucket in &mut buckets {
        bucket.sort_by(f64::total_cmp);
        for &v in bucket.iter() {
            arr[k] = v;
            k += 1;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_unit_interval() {
        let mut v = vec![0.78, 0.17, 0.39, 0.26, 0.72, 0.94, 0.21, 0.12, 0.23, 0.68];
        bucket_sort(&mut v).unwrap();
        assert_eq!(v, vec![0.12, 0.17, 0.21, 0.23, 0.26, 0.39, 0.68, 0.72, 0.78, 0.94]);
    }

    #[test]
    fn sorts_outside_unit_interval() {
        let mut v = vec![12.5, -3.0, 100.0, 0.0, 12.5];
        bucket_sort(&mut v).unwrap();
        assert_eq!(v, vec![-3.0, 0.0, 12.5, 12.5, 100.0]);
    }

    #[test]
    fn rejects_nan() {
        let mut v = vec![1.0, f64::NAN];
        assert_eq!(bucket_sort(&mut v), Err(AlgoError::NotANumber));
    }

    #[test]
    fn infinite_values() {
        let mut v = vec![f64::INFINITY, 1.0, f64::NEG_INFINITY];
        bucket_sort(&mut v).unwrap();
        assert_eq!(v, vec![f64::NEG_INFINITY, 1.0, f64::INFINITY]);
    }
}

//! Maximum-sum contiguous subarray.
//!
//! Equations:
//!   Kadane:  cur(i) = max(a[i], cur(i-1) + a[i]),  best = max cur(i)      O(n)
//!   Divide:  best(l..r) = max(best(l..m), best(m..r), cross(m))           O(n log n)

use std::ops::Range;

use crate::error::{AlgoError, Result};

// Sums are accumulated in i128, which cannot overflow for any slice of i64
// that fits in memory. Only the final answer has to fit back into i64.
fn narrow(sum: i128) -> Result<i64> {
    i64::try_from(sum).map_err(|_| AlgoError::Overflow("max_subarray"))
}

/// Largest sum and the first index range achieving it.
pub fn max_subarray_kadane(arr: &[i64]) -> Result<(i64, Range<usize>)> {
    let (&first, rest) = arr.split_first().ok_or(AlgoError::EmptyInput)?;
    let (mut cur, mut start) = (i128::from(first), 0);
    let (mut best, mut best_range) = (cur, 0..1);
    for (offset, &x) in rest.iter().enumerate() {
        let i = offset + 1;
        if cur < 0 {
            cur = i128::from(x);
            start = i;
        } else {
            cur += i128::from(x);
        }
        if cur > best {
            best = cur;
            best_range = start..i + 1;
        }
    }
    Ok((narrow(best)?, best_range))
}

pub fn max_subarray_divide(arr: &[i64]) -> Result<i64> {
    fn go(arr: &[i64]) -> i128 {
        if arr.len() == 1 {
            return i128::from(arr[0]);
        }
        let mid = arr.len() / 2;
        let (left, right) = arr.split_at(mid);

        let mut cross_left = i128::MIN;
        let mut sum = 0i128;
        for &x in left.iter().rev() {
            sum += i128::from(x);
            cross_left = cross_left.max(sum);
        }
        let mut cross_right = i128::MIN;
        sum = 0;
        for &x in right {
            sum += i128::from(x);
            cross_right = cross_right.max(sum);
        }

        go(left).max(go(right)).max(cross_left + cross_right)
    }
    if arr.is_empty() {
        return Err(AlgoError::EmptyInput);
    }
    narrow(go(arr))
}

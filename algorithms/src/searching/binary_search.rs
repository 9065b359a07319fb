//! Binary search family over sorted slices.
//!
//! Variables:
//!   [l, r)  : half-open window still holding a possible match
//!   m       : l + (r - l) / 2
//!
//! Equations:
//!   arr[m] <  target  =>  l = m + 1
//!   arr[m] >  target  =>  r = m
//!   arr[m] == target  =>  found
//!   Complexity: O(log N)

use std::cmp::Ordering;

pub fn binary_search<T: Ord>(arr: &[T], target: &T) -> Option<usize> {
    let (mut l, mut r) = (0, arr.len());
    while l < r {
        let m = l + (r - l) / 2;
        match arr[m].cmp(target) {
            Ordering::Equal => return Some(m),
            Ordering::Less => l = m + 1,
            Ordering::Greater => r = m,
        }
    }
    None
}

pub fn binary_search_recursive<T: Ord>(arr: &[T], target: &T) -> Option<usize> {
    fn go<T: Ord>(arr: &[T], target: &T, l: usize, r: usize) -> Option<usize> {
        if l >= r {
            return None;
        }
        let m = l + (r - l) / 2;
        match arr[m].cmp(target) {
            Ordering::Equal => Some(m),
            Ordering::Less => go(arr, target, m + 1, r),
            Ordering::Greater => go(arr, target, l, m),
        }
    }
    go(arr, target, 0, arr.len())
}

/// First index `i` with `arr[i] >= target`, or `arr.len()`.
pub fn lower_bound<T: Ord>(arr: &[T], target: &T) -> usize {
    let (mut l, mut r) = (0, arr.len());
    while l < r {
        let m = l + (r - l) / 2;
        if arr[m] < *target {
            l = m + 1;
        } else {
            r = m;
        }
    }
    l
}

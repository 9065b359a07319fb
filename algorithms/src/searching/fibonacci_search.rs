//! Fibonacci search over sorted slices.
//!
//! Variables:
//!   f2, f1, f : consecutive Fibonacci numbers, f = f1 + f2 >= N
//!   offset    : count of elements already eliminated from the front
//!
//! Equations:
//!   probe i = min(offset + f2, N) - 1
//!   arr[i] < target  =>  shift window down one Fibonacci step, offset = i + 1
//!   arr[i] > target  =>  shift window down two Fibonacci steps
//!   Uses only addition/subtraction to pick probes.

use std::cmp::Ordering;

pub fn fibonacci_search<T: Ord>(arr: &[T], target: &T) -> Option<usize> {
    let n = arr.len();
    if n == 0 {
        return None;
    }
    let (mut f2, mut f1) = (0usize, 1usize);
    let mut f = f2 + f1;
    while f < n {
        f2 = f1;
        f1 = f;
        f = f1 + f2;
    }

    let mut offset = 0usize;
    while f > 1 {
        let i = (offset + f2).min(n) - 1;
        match arr[i].cmp(target) {
            Ordering::Less => {
                f = f1;
                f1 = f2;
                f2 = f - f1;
                offset = i + 1;
            }
            Ordering::Greater => {
                f = f2;
                f1 -= f2;
                f2 = f - f1;
            }
            Ordering::Equal => return Some(i),
        }
    }
    (f1 == 1 && offset < n && arr[offset] == *target).then_some(offset)
}

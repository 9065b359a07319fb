//! Lomuto quicksort, last element as pivot.
//!
//! Variables:
//!   p : final index of the pivot after partition
//!
//! Equations:
//!   partition: arr[..p] <= arr[p] < arr[p+1..]
//!   recursion: smaller side recursed, larger side looped
//!              => stack depth <= log2(N) even when every split is 0 / N-1
//!   time:      O(N log N) expected, O(N^2) on sorted or all-equal input

pub fn quick_sort<T: Ord>(mut arr: &mut [T]) {
    while arr.len() > 1 {
        let p = partition(arr);
        let (left, rest) = std::mem::take(&mut arr).split_at_mut(p);
        let right = &mut rest[1..];
        if left.len() < right.len() {
            quick_sort(left);
            arr = right;
        } else {
            quick_sort(right);
            arr = left;
        }
    }
}

/// Places the last element at its final position and returns that index.
/// Everything left of it is `<=` the pivot, everything right is `>`.
pub fn partition<T: Ord>(arr: &mut [T]) -> usize {
    let pivot = arr.len() - 1;
    let mut store = 0;
    for j in 0..pivot {
        if arr[j] <= arr[pivot] {
            arr.swap(store, j);
            store += 1;
        }
    }
    arr.swap(store, pivot);
    store
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partition_splits_around_pivot() {
        let mut v = vec![10, 80, 30, 90, 40, 50, 70];
        let p = partition(&mut v);
        assert_eq!(v[p], 70);
        assert!(v[..p].iter().all(|x| *x <= 70));
        assert!(v[p + 1..].iter().all(|x| *x > 70));
    }

    #[test]
    fn sorts_all_equal() {
        let mut v = vec![7; 16];
        quick_sort(&mut v);
        assert_eq!(v, vec![7; 16]);
    }

    #[test]
    fn sorts_negative_values() {
        let mut v = vec![3, -1, 0, -7, 2];
        quick_sort(&mut v);
        assert_eq!(v, vec![-7, -1, 0, 2, 3]);
    }

    #[test]
    fn degenerate_splits_stay_shallow() {
        // every partition here is 0 / N-1, so the work is quadratic
        let n = 20_000;
        let mut v: Vec<i64> = (0..n).collect();
        quick_sort(&mut v);
        assert!(v.windows(2).all(|w| w[0] <= w[1]));

        let mut v: Vec<i64> = (0..n).rev().collect();
        quick_sort(&mut v);
        assert_eq!(v, (0..n).collect::<Vec<_>>());

        let mut v = vec![3u8; n as usize];
        quick_sort(&mut v);
        assert!(v.iter().all(|&x| x == 3));
    }
}

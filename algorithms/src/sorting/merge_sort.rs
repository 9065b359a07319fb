//! Top-down merge sort.
//!
//! Variables:
//!   arr  : &mut [T]  — slice to sort, length N
//!   buf  : Vec<T>    — scratch copy of the left half during a merge
//!
//! Equations:
//!   sort(arr) = merge(sort(arr[..N/2]), sort(arr[N/2..]))
//!   merge takes from the left run on ties  =>  stable
//!   Complexity: O(N log N) time, O(N) extra space

pub fn merge_sort<T: Ord + Clone>(arr: &mut [T]) {
    let len = arr.len();
    if len <= 1 {
        return;
    }
    let mid = len / 2;
    merge_sort(&mut arr[..mid]);
    merge_sort(&mut arr[mid..]);
    merge_in_place(arr, mid);
}

fn merge_in_place<T: Ord + Clone>(arr: &mut [T], mid: usize) {
    let left = arr[..mid].to_vec();
    let (mut i, mut j, mut k) = (0, mid, 0);
    while i < left.len() && j < arr.len() {
        if left[i] <= arr[j] {
            arr[k] = left[i].clone();
            i += 1;
        } else {
            arr[k] = arr[j].clone();
            j += 1;
        }
        k += 1;
    }
    while i < left.len() {
        arr[k] = left[i].clone();
        i += 1;
        k += 1;
    }
}

/// Merge two already-sorted slices into a new sorted vector.
pub fn merge_sorted<T: Ord + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let mut out = Vec::with_capacity(a.len() + b.len());
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        if a[i] <= b[j] {
            out.push(a[i].clone());
            i += 1;
        } else {
            out.push(b[j].clone());
            j += 1;
        }
    }
    out.extend_from_slice(&a[i..]);
    out.extend_from_slice(&b[j..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_odd_length() {
        let mut v = vec![38, 27, 43, 3, 9, 82, 10];
        merge_sort(&mut v);
        assert_eq!(v, vec![3, 9, 10, 27, 38, 43, 82]);
    }

    #[test]
    fn equal_keys_keep_input_order() {
        let mut v = vec![Tagged(4, 0), Tagged(2, 1), Tagged(2, 2), Tagged(8, 3), Tagged(2, 4), Tagged(1, 5)];
        merge_sort(&mut v);
        let tags: Vec<usize> = v.iter().filter(|t| t.0 == 2).map(|t| t.1).collect();
        assert_eq!(tags, vec![1, 2, 4]);
    }

    #[derive(Debug, Clone)]
    struct Tagged(i32, usize);

    impl PartialEq for Tagged {
        fn eq(&self, other: &Self) -> bool {
            self.0 == other.0
        }
    }
    impl Eq for Tagged {}
    impl PartialOrd for Tagged {
        fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
            Some(self.cmp(other))
        }
    }
    impl Ord for Tagged {
        fn cmp(&self, other: &Self) -> std::cmp::Ordering {
            self.0.cmp(&other.0)
        }
    }

    #[test]
    fn merge_sorted_interleaves() {
        assert_eq!(merge_sorted(&[1, 4, 9], &[2, 3, 10, 11]), vec![1, 2, 3, 4, 9, 10, 11]);
        assert_eq!(merge_sorted::<i32>(&[], &[]), Vec::<i32>::new());
    }
}

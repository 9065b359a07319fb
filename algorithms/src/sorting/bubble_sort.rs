/// Repeatedly swaps adjacent out-of-order pairs. Stops early once a pass
/// completes without a swap, so already-sorted input costs O(n).
pub fn bubble_sort<T: Ord>(arr: &mut [T]) {
    let n = arr.len();
    for i in 0..n.saturating_sub(1) {
        let mut swapped = false;
        for j in 0..n - i - 1 {
            if arr[j] > arr[j + 1] {
                arr.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_reference_array() {
        let mut v = vec![64, 34, 25, 12, 22, 11, 90];
        bubble_sort(&mut v);
        assert_eq!(v, vec![11, 12, 22, 25, 34, 64, 90]);
    }

    #[test]
    fn keeps_equal_keys_in_order() {
        let mut v = vec![Keyed(2, 'a'), Keyed(1, 'b'), Keyed(2, 'c'), Keyed(1, 'd')];
        bubble_sort(&mut v);
        let tags: String = v.iter().map(|k| k.1).collect();
        assert_eq!(tags, "bdac");
    }

    #[derive(Debug, Clone, Copy)]
    struct Keyed(i32, char);

    impl PartialEq for Keyed {
        fn eq(&self, other: &Self) -> bool {
            self.0 == other.0
        }
    }
    impl Eq for Keyed {}
    impl PartialOrd for Keyed {
        fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
            Some(self.cmp(other))
        }
    }
    impl Ord for Keyed {
        fn cmp(&self, other: &Self) -> std::cmp::Ordering {
            self.0.cmp(&other.0)
        }
    }
}

pub fn heap_sort<T: Ord>(arr: &mut [T]) {
    let len = arr.len();
    for i in (0..len / 2).rev() {
        sift_down(arr, len, i);
    }
    for end in (1..len).rev() {
        arr.swap(0, end);
        sift_down(arr, end, 0);
    }
}

// Max-heap sift over arr[..n].
fn sift_down<T: Ord>(arr: &mut [T], n: usize, mut i: usize) {
    loop {
        let mut largest = i;
        let l = 2 * i + 1;
        let r = 2 * i + 2;
        if l < n && arr[l] > arr[largest] {
            largest = l;
        }
        if r < n && arr[r] > arr[largest] {
            largest = r;
        }
        if largest == i {
            return;
        }
        arr.swap(i, largest);
        i = largest;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_reference_array() {
        let mut v = vec![12, 11, 13, 5, 6, 7];
        heap_sort(&mut v);
        assert_eq!(v, vec![5, 6, 7, 11, 12, 13]);
    }

    #[test]
    fn two_elements() {
        let mut v = vec![2, 1];
        heap_sort(&mut v);
        assert_eq!(v, vec![1, 2]);
    }
}

/// Shell sort with the halving gap sequence n/2, n/4, ..., 1.
pub fn shell_sort<T: Ord>(arr: &mut [T]) {
    let n = arr.len();
    let mut gap = n / 2;
    while gap > 0 {
        for i in gap..n {
            let mut j = i;
            while j >= gap && arr[j - gap] > arr[j] {
                arr.swap(j - gap, j);
                j -= gap;
            }
        }
        gap /= 2;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_reference_array() {
        let mut v = vec![64, 34, 25, 12, 22, 11, 90];
        shell_sort(&mut v);
        assert_eq!(v, vec![11, 12, 22, 25, 34, 64, 90]);
    }
}

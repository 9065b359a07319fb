/// Splits the window into thirds with two probes per step.
pub fn ternary_search<T: Ord>(arr: &[T], target: &T) -> Option<usize> {
    let (mut l, mut r) = (0usize, arr.len());
    while l < r {
        let third = (r - 1 - l) / 3;
        let m1 = l + third;
        let m2 = r - 1 - third;
        if arr[m1] == *target {
            return Some(m1);
        }
        if arr[m2] == *target {
            return Some(m2);
        }
        if *target < arr[m1] {
            r = m1;
        } else if *target > arr[m2] {
            l = m2 + 1;
        } else {
            l = m1 + 1;
            r = m2;
        }
    }
    None
}

/// Jump search with block size floor(sqrt(n)): skip whole blocks while their
/// last element is below the target, then scan the block linearly.
pub fn jump_search<T: Ord>(arr: &[T], target: &T) -> Option<usize> {
    let n = arr.len();
    if n == 0 {
        return None;
    }
    let step = ((n as f64).sqrt() as usize).max(1);
    let mut prev = 0;
    let mut end = step.min(n);
    while arr[end - 1] < *target {
        prev = end;
        if prev >= n {
            return None;
        }
        end = (end + step).min(n);
    }
    arr[prev..end].iter().position(|v| v == target).map(|i| prev + i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_every_element() {
        let v: Vec<i32> = (0..50).map(|x| x * 3).collect();
        for (i, x) in v.iter().enumerate() {
            assert_eq!(jump_search(&v, x), Some(i));
        }
        assert_eq!(jump_search(&v, &4), None);
        assert_eq!(jump_search(&v, &1000), None);
    }

    #[test]
    fn tiny_inputs() {
        assert_eq!(jump_search(&[5], &5), Some(0));
        assert_eq!(jump_search(&[5], &6), None);
        assert_eq!(jump_search::<i32>(&[], &6), None);
    }
}

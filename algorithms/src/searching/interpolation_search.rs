//! Interpolation search over sorted integers.
//!
//! Equations:
//!   pos = lo + (target - arr[lo]) * (hi - lo) / (arr[hi] - arr[lo])
//!   expected O(log log N) probes on uniformly spaced keys, O(N) worst case

pub fn interpolation_search(arr: &[i64], target: i64) -> Option<usize> {
    if arr.is_empty() {
        return None;
    }
    let (mut lo, mut hi) = (0usize, arr.len() - 1);
    while lo <= hi && target >= arr[lo] && target <= arr[hi] {
        if arr[hi] == arr[lo] {
            return (arr[lo] == target).then_some(lo);
        }
        let num = (target as i128 - arr[lo] as i128) * (hi - lo) as i128;
        let den = arr[hi] as i128 - arr[lo] as i128;
        let pos = lo + (num / den) as usize;

        if arr[pos] == target {
            return Some(pos);
        }
        if arr[pos] < target {
            lo = pos + 1;
        } else {
            if pos == 0 {
                return None;
            }
            hi = pos - 1;
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_keys() {
        let v: Vec<i64> = (0..100).map(|x| x * 10).collect();
        assert_eq!(interpolation_search(&v, 370), Some(37));
        assert_eq!(interpolation_search(&v, 375), None);
        assert_eq!(interpolation_search(&v, -10), None);
    }

    #[test]
    fn skewed_and_repeated_keys() {
        let v = [1, 2, 2, 2, 3, 1000, 1_000_000];
        assert_eq!(interpolation_search(&v, 1000), Some(5));
        assert_eq!(v[interpolation_search(&v, 2).unwrap()], 2);
        assert_eq!(interpolation_search(&[4, 4, 4], 4), Some(0));
        assert_eq!(interpolation_search(&[4, 4, 4], 5), None);
    }

    #[test]
    fn extreme_values_do_not_overflow() {
        let v = [i64::MIN, 0, i64::MAX];
        assert_eq!(interpolation_search(&v, i64::MAX), Some(2));
        assert_eq!(interpolation_search(&v, 0), Some(1));
    }
}

//! LSD radix sort, base 10.
//!
//! Equations:
//!   digit(x, e) = (x / e) mod 10,   e = 1, 10, 100, ...  while max / e > 0
//!   each pass is a stable counting sort on digit(x, e)
//!   Complexity: O(d * (N + 10)),  d = number of digits of max

pub fn radix_sort(arr: &mut [u64]) {
    let Some(&max) = arr.iter().max() else {
        return;
    };
    let mut exp: u64 = 1;
    while max / exp > 0 {
        counting_pass(arr, exp);
        match exp.checked_mul(10) {
            Some(next) => exp = next,
            None => break,
        }
    }
}

fn counting_pass(arr: &mut [u64], exp: u64) {
    let digit = |v: u64| ((v / exp) % 10) as usize;
    let mut count = [0usize; 10];
    for &v in arr.iter() {
        count[digit(v)] += 1;
    }
    for d in 1..10 {
        count[d] += count[d - 1];
    }
    let mut out = vec![0u64; arr.len()];
    for &v in arr.iter().rev() {
        let d = digit(v);
        count[d] -= 1;
        out[count[d]] = v;
    }
    arr.copy_from_slice(&out);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_reference_array() {
        let mut v = vec![170, 45, 75, 90, 802, 24, 2, 66];
        radix_sort(&mut v);
        assert_eq!(v, vec![2, 24, 45, 66, 75, 90, 170, 802]);
    }

    #[test]
    fn handles_u64_max() {
        let mut v = vec![u64::MAX, 0, 10, u64::MAX - 1];
        radix_sort(&mut v);
        assert_eq!(v, vec![0, 10, u64::MAX - 1, u64::MAX]);
    }

    #[test]
    fn all_zero() {
        let mut v = vec![0, 0, 0];
        radix_sort(&mut v);
        assert_eq!(v, vec![0, 0, 0]);
    }
}

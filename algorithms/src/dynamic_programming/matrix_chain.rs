//! Matrix chain multiplication order.
//!
//! Variables:
//!   d[0..=n] : matrix i (1-based) is d[i-1] x d[i]
//!
//! Equations:
//!   m[i][i] = 0
//!   m[i][j] = min over i <= k < j of m[i][k] + m[k+1][j] + d[i-1]·d[k]·d[j]
//!   O(n³) time, O(n²) space

use crate::error::{AlgoError, Result};

const OVERFLOW: AlgoError = AlgoError::Overflow("matrix_chain_order");

fn check(dims: &[u64]) -> Result<usize> {
    if dims.len() < 2 {
        return Err(AlgoError::InvalidArgument(
            "a matrix chain needs at least two dimensions".into(),
        ));
    }
    Ok(dims.len() - 1)
}

fn cost(dims: &[u64], i: usize, k: usize, j: usize, left: u64, right: u64) -> Result<u64> {
    dims[i - 1]
        .checked_mul(dims[k])
        .and_then(|p| p.checked_mul(dims[j]))
        .and_then(|p| p.checked_add(left))
        .and_then(|p| p.checked_add(right))
        .ok_or(OVERFLOW)
}

// (cost table, split table), both 1-based
fn tables(dims: &[u64]) -> Result<(Vec<Vec<u64>>, Vec<Vec<usize>>)> {
    let n = check(dims)?;
    let mut m = vec![vec![0u64; n + 1]; n + 1];
    let mut split = vec![vec![0usize; n + 1]; n + 1];
    for len in 2..=n {
        for i in 1..=n - len + 1 {
            let j = i + len - 1;
            m[i][j] = u64::MAX;
            for k in i..j {
                let c = cost(dims, i, k, j, m[i][k], m[k + 1][j])?;
                if c < m[i][j] {
                    m[i][j] = c;
                    split[i][j] = k;
                }
            }
        }
    }
    Ok((m, split))
}

/// Minimum number of scalar multiplications. A single matrix costs 0.
pub fn matrix_chain_order(dims: &[u64]) -> Result<u64> {
    let (m, _) = tables(dims)?;
    Ok(m[1][dims.len() - 1])
}

/// Optimal grouping written as `((A1A2)A3)`.
pub fn matrix_chain_parenthesization(dims: &[u64]) -> Result<String> {
    fn write(split: &[Vec<usize>], i: usize, j: usize, out: &mut String) {
        if i == j {
            out.push_str(&format!("A{i}"));
            return;
        }
        let k = split[i][j];
        out.push('(');
        write(split, i, k, out);
        write(split, k + 1, j, out);
        out.push(')');
    }
    let (_, split) = tables(dims)?;
    let mut out = String::new();
    write(&split, 1, dims.len() - 1, &mut out);
    Ok(out)
}

/// Exponential-time oracle.
pub fn matrix_chain_recursive(dims: &[u64]) -> Result<u64> {
    fn go(dims: &[u64], i: usize, j: usize) -> Result<u64> {
        if i == j {
            return Ok(0);
        }
        let mut best = u64::MAX;
        for k in i..j {
            let c = cost(dims, i, k, j, go(dims, i, k)?, go(dims, k + 1, j)?)?;
            best = best.min(c);
        }
        Ok(best)
    }
    let n = check(dims)?;
    go(dims, 1, n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_chains() {
        assert_eq!(matrix_chain_order(&[40, 20, 30, 10, 30]), Ok(26_000));
        assert_eq!(matrix_chain_recursive(&[40, 20, 30, 10, 30]), Ok(26_000));
        assert_eq!(
            matrix_chain_parenthesization(&[40, 20, 30, 10, 30]).unwrap(),
            "((A1(A2A3))A4)"
        );
        assert_eq!(matrix_chain_order(&[1, 2, 3, 4]), Ok(18));
        assert_eq!(matrix_chain_parenthesization(&[1, 2, 3, 4]).unwrap(), "((A1A2)A3)");
        assert_eq!(matrix_chain_order(&[10, 20, 30]), Ok(6_000));
    }

    #[test]
    fn single_matrix_and_bad_input() {
        assert_eq!(matrix_chain_order(&[5, 10]), Ok(0));
        assert_eq!(matrix_chain_parenthesization(&[5, 10]).unwrap(), "A1");
        assert!(matches!(matrix_chain_order(&[5]), Err(AlgoError::InvalidArgument(_))));
        assert!(matrix_chain_recursive(&[]).is_err());
    }

    #[test]
    fn overflow_is_reported() {
        let huge = u64::MAX / 2;
        assert_eq!(matrix_chain_order(&[huge, huge, huge]), Err(OVERFLOW));
    }
}

//! Result invariants shared by tests and the demonstration runner.
//!
//! Variables:
//!   value : T  — the output of an algorithm
//!
//! Equations:
//!   NonNegative:  value >= 0
//!   Sorted:       value[i] <= value[i+1]          for all i
//!   Permutation:  multiset(value) == multiset(reference)

/// Defines invariants over algorithm outputs.
pub trait Invariant<T: ?Sized> {
    /// Checks if a value satisfies the invariant
    fn check(&self, value: &T) -> bool;
}

/// Value must be non-negative.
pub struct NonNegative;

impl Invariant<i64> for NonNegative {
    fn check(&self, value: &i64) -> bool {
        *value >= 0
    }
}

impl Invariant<[i64]> for NonNegative {
    fn check(&self, value: &[i64]) -> bool {
        value.iter().all(|v| *v >= 0)
    }
}

/// A sequence must be sorted in non-decreasing order.
pub struct Sorted;

impl<T: PartialOrd> Invariant<[T]> for Sorted {
    fn check(&self, value: &[T]) -> bool {
        value.windows(2).all(|w| w[0] <= w[1])
    }
}

/// A sequence must hold exactly the same elements as `reference`.
pub struct PermutationOf<'a, T>(pub &'a [T]);

impl<T: Ord + Clone> Invariant<[T]> for PermutationOf<'_, T> {
    fn check(&self, value: &[T]) -> bool {
        if value.len() != self.0.len() {
            return false;
        }
        let mut a = value.to_vec();
        let mut b = self.0.to_vec();
        a.sort();
        b.sort();
        a == b
    }
}

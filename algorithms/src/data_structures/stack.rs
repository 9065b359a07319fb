//! Stack: LIFO structure backed by Vec.
//!
//! Variables:
//!   data : Vec<T>  backing storage
//!   N    : usize   current number of elements = data.len()
//!
//! Equations:
//!   push(x): data[N] = x,  N' = N + 1       O(1) amortised
//!   pop():   N' = N - 1,   returns data[N-1] O(1)
//!   peek():  returns &data[N-1]              O(1)

use crate::error::{AlgoError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    data: Vec<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self { Self::new() }
}

impl<T> Stack<T> {
    pub fn new() -> Self { Self { data: Vec::new() } }
    pub fn push(&mut self, val: T)      { self.data.push(val); }
    pub fn pop(&mut self)  -> Option<T> { self.data.pop() }
    pub fn peek(&self) -> Option<&T>    { self.data.last() }
    pub fn is_empty(&self) -> bool      { self.data.is_empty() }
    pub fn len(&self) -> usize          { self.data.len() }
    pub fn clear(&mut self)             { self.data.clear(); }

    /// `pop` for callers that treat an empty stack as a runtime error.
    pub fn pop_or_err(&mut self) -> Result<T> {
        self.data.pop().ok_or(AlgoError::EmptyInput)
    }

    /// Top to bottom.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter().rev()
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self { data: iter.into_iter().collect() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_in_first_out() {
        let mut s: Stack<i32> = (1..=3).collect();
        assert_eq!(s.peek(), Some(&3));
        assert_eq!(s.iter().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
        assert_eq!(s.pop(), Some(3));
        s.push(10);
        assert_eq!(s.pop_or_err(), Ok(10));
        assert_eq!(s.len(), 2);
        s.clear();
        assert_eq!(s.pop_or_err(), Err(AlgoError::EmptyInput));
    }
}

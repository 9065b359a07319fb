//! Queue: FIFO ring buffer of fixed capacity.
//!
//! Variables:
//!   buf  : Vec<Option<T>>  circular backing array, length C
//!   head : usize           index of next dequeue
//!   tail : usize           index of next enqueue
//!   len  : usize           current occupancy
//!
//! Equations:
//!   enqueue(x): buf[tail] = x,  tail = (tail+1) mod C,  len += 1
//!   dequeue():  x = buf[head],  head = (head+1) mod C,  len -= 1
//!   full  iff len == C
//!   empty iff len == 0

use crate::error::{AlgoError, Result};

#[derive(Debug, Clone)]
pub struct Queue<T> {
    buf: Vec<Option<T>>,
    head: usize,
    tail: usize,
    len: usize,
}

impl<T> Queue<T> {
    pub fn new(capacity: usize) -> Self {
        let mut buf = Vec::with_capacity(capacity);
        buf.resize_with(capacity, || None);
        Self { buf, head: 0, tail: 0, len: 0 }
    }

    pub fn enqueue(&mut self, val: T) -> Result<()> {
        if self.is_full() {
            tracing::trace!(capacity = self.buf.len(), "queue full");
            return Err(AlgoError::CapacityExceeded { capacity: self.buf.len() });
        }
        self.buf[self.tail] = Some(val);
        self.tail = (self.tail + 1) % self.buf.len();
        self.len += 1;
        Ok(())
    }

    pub fn dequeue(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let val = self.buf[self.head].take();
        self.head = (self.head + 1) % self.buf.len();
        self.len -= 1;
        val
    }

    pub fn peek(&self) -> Option<&T> {
        self.buf.get(self.head).and_then(Option::as_ref)
    }
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
    pub fn is_full(&self) -> bool {
        self.len == self.buf.len()
    }
    pub fn len(&self) -> usize {
        self.len
    }
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Front to back.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        let cap = self.buf.len();
        (0..self.len).filter_map(move |k| self.buf[(self.head + k) % cap].as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_around() {
        let mut q = Queue::new(3);
        q.enqueue(1).unwrap();
        q.enqueue(2).unwrap();
        q.enqueue(3).unwrap();
        assert!(q.is_full());
        assert_eq!(q.enqueue(4), Err(AlgoError::CapacityExceeded { capacity: 3 }));
        assert_eq!(q.dequeue(), Some(1));
        q.enqueue(4).unwrap();
        assert_eq!(q.iter().copied().collect::<Vec<_>>(), vec![2, 3, 4]);
        assert_eq!(q.peek(), Some(&2));
    }

    #[test]
    fn zero_capacity_rejects_everything() {
        let mut q: Queue<u8> = Queue::new(0);
        assert!(q.enqueue(1).is_err());
        assert_eq!(q.dequeue(), None);
        assert_eq!(q.peek(), None);
        assert_eq!(q.capacity(), 0);
    }
}

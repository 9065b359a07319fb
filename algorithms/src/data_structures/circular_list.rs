//! Circular singly-linked list over a slab.
//!
//! Only the tail is stored: the front is always `tail.next`, so pushing at
//! either end splices after the tail, and `rotate` just moves the tail.
//!
//!   push_front / push_back / pop_front   O(1)
//!   pop_back                             O(N)  (needs the tail's predecessor)
//!   rotate(k)                            O(k mod N)

use std::fmt;

#[derive(Debug, Clone)]
struct Node<T> {
    val: T,
    next: usize,
}

#[derive(Clone)]
pub struct CircularList<T> {
    slots: Vec<Option<Node<T>>>,
    free: Vec<usize>,
    tail: Option<usize>,
    len: usize,
}

impl<T> Default for CircularList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> CircularList<T> {
    pub fn new() -> Self {
        Self { slots: Vec::new(), free: Vec::new(), tail: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn push_front(&mut self, val: T) {
        self.splice_after_tail(val);
    }

    pub fn push_back(&mut self, val: T) {
        let id = self.splice_after_tail(val);
        self.tail = Some(id);
    }

    pub fn pop_front(&mut self) -> Option<T> {
        let tail = self.tail?;
        let head = self.node(tail)?.next;
        let node = self.slots.get_mut(head)?.take()?;
        if head == tail {
            self.tail = None;
        } else if let Some(t) = self.node_mut(tail) {
            t.next = node.next;
        }
        self.release(head);
        Some(node.val)
    }

    pub fn pop_back(&mut self) -> Option<T> {
        let tail = self.tail?;
        if self.len == 1 {
            return self.pop_front();
        }
        let mut before = self.node(tail)?.next;
        while self.node(before)?.next != tail {
            before = self.node(before)?.next;
        }
        let node = self.slots.get_mut(tail)?.take()?;
        if let Some(b) = self.node_mut(before) {
            b.next = node.next;
        }
        self.tail = Some(before);
        self.release(tail);
        Some(node.val)
    }

    /// Moves the first `k` elements to the back, one lap per `len` steps.
    pub fn rotate(&mut self, k: usize) {
        if self.len == 0 {
            return;
        }
        let steps = k % self.len;
        for _ in 0..steps {
            match self.tail.and_then(|t| self.node(t)) {
                Some(t) => self.tail = Some(t.next),
                None => return,
            }
        }
        tracing::trace!(steps, len = self.len, "circular list rotated");
    }

    pub fn front(&self) -> Option<&T> {
        let head = self.node(self.tail?)?.next;
        self.node(head).map(|n| &n.val)
    }

    pub fn back(&self) -> Option<&T> {
        self.node(self.tail?).map(|n| &n.val)
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.tail = None;
        self.len = 0;
    }

    /// Exactly one lap, front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        let next = self.tail.and_then(|t| self.node(t)).map(|t| t.next);
        Iter { list: self, next, remaining: self.len }
    }

    fn node(&self, id: usize) -> Option<&Node<T>> {
        self.slots.get(id).and_then(Option::as_ref)
    }

    fn node_mut(&mut self, id: usize) -> Option<&mut Node<T>> {
        self.slots.get_mut(id).and_then(Option::as_mut)
    }

    // Inserts between tail and head; the new node becomes the front.
    fn splice_after_tail(&mut self, val: T) -> usize {
        let id = self.free.pop().unwrap_or(self.slots.len());
        let next = match self.tail.and_then(|t| self.node(t)) {
            Some(t) => t.next,
            None => id,
        };
        let node = Some(Node { val, next });
        if id == self.slots.len() {
            self.slots.push(node);
        } else {
            self.slots[id] = node;
        }
        match self.tail.and_then(|t| self.node_mut(t)) {
            Some(t) => t.next = id,
            None => self.tail = Some(id),
        }
        self.len += 1;
        id
    }

    fn release(&mut self, id: usize) {
        self.free.push(id);
        self.len -= 1;
    }
}

impl<T: fmt::Debug> fmt::Debug for CircularList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for CircularList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = CircularList::new();
        for v in iter {
            list.push_back(v);
        }
        list
    }
}

pub struct Iter<'a, T> {
    list: &'a CircularList<T>,
    next: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.node(self.next?)?;
        self.next = Some(node.next);
        self.remaining -= 1;
        Some(&node.val)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(list: &CircularList<i32>) -> Vec<i32> {
        list.iter().copied().collect()
    }

    #[test]
    fn ends_and_single_element() {
        let mut list = CircularList::new();
        list.push_back(2);
        assert_eq!(list.front(), Some(&2));
        assert_eq!(list.back(), Some(&2));
        list.push_front(1);
        list.push_back(3);
        assert_eq!(collect(&list), vec![1, 2, 3]);
        assert_eq!(list.pop_back(), Some(3));
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.pop_back(), Some(2));
        assert!(list.is_empty());
        assert_eq!(list.pop_front(), None);
        assert_eq!(list.front(), None);
    }

    #[test]
    fn rotate_moves_front_to_back() {
        let mut list: CircularList<i32> = (1..=5).collect();
        list.rotate(2);
        assert_eq!(collect(&list), vec![3, 4, 5, 1, 2]);
        list.rotate(5);
        assert_eq!(collect(&list), vec![3, 4, 5, 1, 2]);
        assert_eq!(list.front(), Some(&3));
        assert_eq!(list.back(), Some(&2));
    }

    #[test]
    fn iteration_stops_after_one_lap() {
        let mut list: CircularList<i32> = (0..3).collect();
        assert_eq!(list.iter().count(), 3);
        list.clear();
        assert_eq!(list.iter().count(), 0);
        list.rotate(4);
        assert!(list.is_empty());
    }

    #[test]
    fn slots_are_recycled() {
        let mut list: CircularList<i32> = (0..3).collect();
        list.pop_front();
        list.push_back(9);
        assert_eq!(list.slots.len(), 3);
        assert_eq!(collect(&list), vec![1, 2, 9]);
    }
}

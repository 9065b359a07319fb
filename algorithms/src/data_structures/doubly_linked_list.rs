//! Doubly-linked list stored in a slab.
//!
//! Variables:
//!   slots : Vec<Option<Node<T>>>  node storage; None marks a free slot
//!   free  : Vec<usize>            indices of free slots, reused before growing
//!   head, tail : Option<usize>    slot indices of the ends
//!
//! Equations:
//!   node(i).next = j  <=>  node(j).prev = i
//!   head.prev = None,  tail.next = None
//!   slot_at(k): walk from whichever end is closer    O(min(k, N-k))

use std::fmt;

use crate::error::{check_index, AlgoError, Result};

#[derive(Debug, Clone)]
struct Node<T> {
    val: T,
    prev: Option<usize>,
    next: Option<usize>,
}

#[derive(Clone)]
pub struct DoublyLinkedList<T> {
    slots: Vec<Option<Node<T>>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DoublyLinkedList<T> {
    pub fn new() -> Self {
        Self { slots: Vec::new(), free: Vec::new(), head: None, tail: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn push_front(&mut self, val: T) {
        let old = self.head;
        let id = self.alloc(Node { val, prev: None, next: old });
        match old.and_then(|h| self.node_mut(h)) {
            Some(h) => h.prev = Some(id),
            None => self.tail = Some(id),
        }
        self.head = Some(id);
    }

    pub fn push_back(&mut self, val: T) {
        let old = self.tail;
        let id = self.alloc(Node { val, prev: old, next: None });
        match old.and_then(|t| self.node_mut(t)) {
            Some(t) => t.next = Some(id),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
    }

    pub fn pop_front(&mut self) -> Option<T> {
        self.unlink(self.head?)
    }

    pub fn pop_back(&mut self) -> Option<T> {
        self.unlink(self.tail?)
    }

    /// Inserts so that `val` ends up at position `index`; `index == len` appends.
    pub fn insert_at(&mut self, index: usize, val: T) -> Result<()> {
        let len = self.len;
        if index > len {
            return Err(AlgoError::IndexOutOfRange { index, len });
        }
        if index == 0 {
            self.push_front(val);
            return Ok(());
        }
        if index == len {
            self.push_back(val);
            return Ok(());
        }
        let missing = AlgoError::IndexOutOfRange { index, len };
        let at = self.slot_at(index).ok_or(missing.clone())?;
        let before = self.node(at).and_then(|n| n.prev).ok_or(missing)?;
        let id = self.alloc(Node { val, prev: Some(before), next: Some(at) });
        if let Some(n) = self.node_mut(before) {
            n.next = Some(id);
        }
        if let Some(n) = self.node_mut(at) {
            n.prev = Some(id);
        }
        Ok(())
    }

    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        let len = self.len;
        check_index(index, len)?;
        self.slot_at(index)
            .and_then(|id| self.unlink(id))
            .ok_or(AlgoError::IndexOutOfRange { index, len })
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.slot_at(index).and_then(|id| self.node(id)).map(|n| &n.val)
    }

    pub fn peek_front(&self) -> Option<&T> {
        self.node(self.head?).map(|n| &n.val)
    }

    pub fn peek_back(&self) -> Option<&T> {
        self.node(self.tail?).map(|n| &n.val)
    }

    /// Swaps every node's links; no values move.
    pub fn reverse(&mut self) {
        for node in self.slots.iter_mut().flatten() {
            std::mem::swap(&mut node.prev, &mut node.next);
        }
        std::mem::swap(&mut self.head, &mut self.tail);
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter { list: self, front: self.head, back: self.tail, remaining: self.len }
    }

    /// Back to front, following `prev` links.
    pub fn iter_rev(&self) -> std::iter::Rev<Iter<'_, T>> {
        self.iter().rev()
    }

    fn node(&self, id: usize) -> Option<&Node<T>> {
        self.slots.get(id).and_then(Option::as_ref)
    }

    fn node_mut(&mut self, id: usize) -> Option<&mut Node<T>> {
        self.slots.get_mut(id).and_then(Option::as_mut)
    }

    fn alloc(&mut self, node: Node<T>) -> usize {
        self.len += 1;
        match self.free.pop() {
            Some(id) => {
                self.slots[id] = Some(node);
                id
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        }
    }

    fn unlink(&mut self, id: usize) -> Option<T> {
        let node = self.slots.get_mut(id)?.take()?;
        match node.prev.and_then(|p| self.node_mut(p)) {
            Some(p) => p.next = node.next,
            None => self.head = node.next,
        }
        match node.next.and_then(|n| self.node_mut(n)) {
            Some(n) => n.prev = node.prev,
            None => self.tail = node.prev,
        }
        self.free.push(id);
        self.len -= 1;
        Some(node.val)
    }

    fn slot_at(&self, index: usize) -> Option<usize> {
        if index >= self.len {
            return None;
        }
        if index <= self.len / 2 {
            let mut cur = self.head;
            for _ in 0..index {
                cur = self.node(cur?)?.next;
            }
            cur
        } else {
            let mut cur = self.tail;
            for _ in 0..(self.len - 1 - index) {
                cur = self.node(cur?)?.prev;
            }
            cur
        }
    }
}

impl<T: PartialEq> DoublyLinkedList<T> {
    pub fn find(&self, val: &T) -> Option<usize> {
        self.iter().position(|v| v == val)
    }

    pub fn contains(&self, val: &T) -> bool {
        self.find(val).is_some()
    }
}

impl<T: fmt::Debug> fmt::Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = DoublyLinkedList::new();
        for v in iter {
            list.push_back(v);
        }
        list
    }
}

pub struct Iter<'a, T> {
    list: &'a DoublyLinkedList<T>,
    front: Option<usize>,
    back: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.node(self.front?)?;
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.val)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.node(self.back?)?;
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.val)
    }
}

pub struct IntoIter<T>(DoublyLinkedList<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.0.pop_front()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.0.pop_back()
    }
}

impl<T> IntoIterator for DoublyLinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(list: &DoublyLinkedList<i32>) -> Vec<i32> {
        list.iter().copied().collect()
    }

    #[test]
    fn both_ends() {
        let mut list = DoublyLinkedList::new();
        list.push_back(2);
        list.push_front(1);
        list.push_back(3);
        assert_eq!(collect(&list), vec![1, 2, 3]);
        assert_eq!(list.iter_rev().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
        assert_eq!(list.peek_front(), Some(&1));
        assert_eq!(list.peek_back(), Some(&3));
        assert_eq!(list.pop_back(), Some(3));
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.pop_front(), Some(2));
        assert_eq!(list.pop_front(), None);
        assert_eq!(list.peek_back(), None);
    }

    #[test]
    fn middle_edits_keep_links_consistent() {
        let mut list: DoublyLinkedList<i32> = vec![10, 20, 40, 50].into_iter().collect();
        list.insert_at(2, 30).unwrap();
        assert_eq!(collect(&list), vec![10, 20, 30, 40, 50]);
        assert_eq!(list.remove_at(3), Ok(40));
        assert_eq!(list.remove_at(0), Ok(10));
        assert_eq!(list.remove_at(9), Err(AlgoError::IndexOutOfRange { index: 9, len: 3 }));
        assert_eq!(collect(&list), vec![20, 30, 50]);
        assert_eq!(list.iter_rev().copied().collect::<Vec<_>>(), vec![50, 30, 20]);
        assert_eq!(list.get(2), Some(&50));
        assert_eq!(list.find(&30), Some(1));
        assert!(!list.contains(&40));
    }

    #[test]
    fn freed_slots_are_reused() {
        let mut list = DoublyLinkedList::new();
        for v in 0..4 {
            list.push_back(v);
        }
        list.pop_front();
        list.pop_front();
        list.push_front(-1);
        list.push_front(-2);
        assert_eq!(list.slots.len(), 4);
        assert_eq!(collect(&list), vec![-2, -1, 2, 3]);
    }

    #[test]
    fn reverse_swaps_direction() {
        let mut list: DoublyLinkedList<i32> = (1..=5).collect();
        list.reverse();
        assert_eq!(collect(&list), vec![5, 4, 3, 2, 1]);
        assert_eq!(list.into_iter().rev().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn clear_empties() {
        let mut list: DoublyLinkedList<i32> = (1..=3).collect();
        list.clear();
        assert!(list.is_empty());
        list.push_back(7);
        assert_eq!(collect(&list), vec![7]);
    }
}

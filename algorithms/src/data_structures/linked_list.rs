//! Singly-linked list with owned nodes.
//!
//! Variables:
//!   head : Option<Box<Node<T>>>  pointer to first node, None if empty
//!   N    : usize                 number of nodes
//!
//! Equations:
//!   push_front(x): new_node.next = head,  head = new_node,  N' = N+1  O(1)
//!   pop_front():   head = head.next,  N' = N-1                         O(1)
//!   push_back(x):  walk to tail, tail.next = new_node                  O(N)
//!   insert_at(i):  walk to node i-1, splice after it     0 <= i <= N   O(i)
//!   remove_at(i):  walk to node i-1, unlink its next     0 <= i <  N   O(i)
//!   reverse():     relink every next pointer backwards                 O(N)

use std::fmt;

use crate::error::{check_index, AlgoError, Result};

struct Node<T> {
    val: T,
    next: Option<Box<Node<T>>>,
}

pub struct LinkedList<T> {
    head: Option<Box<Node<T>>>,
    len: usize,
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    pub fn push_front(&mut self, val: T) {
        let node = Box::new(Node { val, next: self.head.take() });
        self.head = Some(node);
        self.len += 1;
    }

    pub fn pop_front(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            self.head = node.next;
            self.len -= 1;
            node.val
        })
    }

    pub fn push_back(&mut self, val: T) {
        if self.is_empty() {
            return self.push_front(val);
        }
        let last = self.len - 1;
        if let Some(tail) = self.node_mut(last) {
            tail.next = Some(Box::new(Node { val, next: None }));
            self.len += 1;
        }
    }

    pub fn pop_back(&mut self) -> Option<T> {
        if self.len <= 1 {
            return self.pop_front();
        }
        let before = self.node_mut(self.len - 2)?;
        let last = before.next.take()?;
        self.len -= 1;
        Some(last.val)
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
        let prev = self
            .node_mut(index - 1)
            .ok_or(AlgoError::IndexOutOfRange { index, len })?;
        prev.next = Some(Box::new(Node { val, next: prev.next.take() }));
        self.len += 1;
        Ok(())
    }

    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        let len = self.len;
        check_index(index, len)?;
        let missing = AlgoError::IndexOutOfRange { index, len };
        if index == 0 {
            return self.pop_front().ok_or(missing);
        }
        let prev = self.node_mut(index - 1).ok_or(missing.clone())?;
        let mut node = prev.next.take().ok_or(missing)?;
        prev.next = node.next.take();
        self.len -= 1;
        Ok(node.val)
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.iter().nth(index)
    }

    pub fn peek_front(&self) -> Option<&T> {
        self.head.as_ref().map(|n| &n.val)
    }

    pub fn reverse(&mut self) {
        let mut prev = None;
        let mut cur = self.head.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
            node.next = prev;
            prev = Some(node);
        }
        self.head = prev;
    }

    /// Drops nodes one at a time so long lists don't recurse in `Box` drop.
    pub fn clear(&mut self) {
        let mut cur = self.head.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
        }
        self.len = 0;
    }

    pub fn len(&self) -> usize {
        self.len
    }
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter { next: self.head.as_deref() }
    }

    fn node_mut(&mut self, index: usize) -> Option<&mut Node<T>> {
        let mut cur = self.head.as_deref_mut();
        for _ in 0..index {
            cur = cur?.next.as_deref_mut();
        }
        cur
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// Position of the first node equal to `val`.
    pub fn find(&self, val: &T) -> Option<usize> {
        self.iter().position(|v| v == val)
    }

    pub fn contains(&self, val: &T) -> bool {
        self.find(val).is_some()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        for v in iter {
            list.push_front(v);
        }
        list.reverse();
        list
    }
}

pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.val
        })
    }
}

pub struct IntoIter<T>(LinkedList<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.0.pop_front()
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter(self)
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(list: &LinkedList<i32>) -> Vec<i32> {
        list.iter().copied().collect()
    }

    #[test]
    fn push_and_pop_both_ends() {
        let mut list = LinkedList::new();
        list.push_back(10);
        list.push_back(20);
        list.push_front(5);
        assert_eq!(collect(&list), vec![5, 10, 20]);
        assert_eq!(list.pop_back(), Some(20));
        assert_eq!(list.pop_front(), Some(5));
        assert_eq!(list.pop_back(), Some(10));
        assert_eq!(list.pop_back(), None);
        assert!(list.is_empty());
    }

    #[test]
    fn positional_insert_and_remove() {
        let mut list: LinkedList<i32> = [1, 2, 4].into_iter().collect();
        list.insert_at(2, 3).unwrap();
        list.insert_at(4, 5).unwrap();
        list.insert_at(0, 0).unwrap();
        assert_eq!(collect(&list), vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(
            list.insert_at(9, 9),
            Err(AlgoError::IndexOutOfRange { index: 9, len: 6 })
        );
        assert_eq!(list.remove_at(3), Ok(3));
        assert_eq!(list.remove_at(0), Ok(0));
        assert_eq!(list.remove_at(3), Ok(5));
        assert!(list.remove_at(3).is_err());
        assert_eq!(collect(&list), vec![1, 2, 4]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn search_and_access() {
        let list: LinkedList<i32> = vec![7, 8, 9, 8].into_iter().collect();
        assert_eq!(list.find(&8), Some(1));
        assert!(list.contains(&9));
        assert!(!list.contains(&1));
        assert_eq!(list.get(3), Some(&8));
        assert_eq!(list.get(4), None);
        assert_eq!(list.peek_front(), Some(&7));
    }

    #[test]
    fn reverse_and_clear() {
        let mut list: LinkedList<i32> = (1..=4).collect();
        list.reverse();
        assert_eq!(list.clone().into_iter().collect::<Vec<_>>(), vec![4, 3, 2, 1]);
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.peek_front(), None);
        list.reverse();
        assert_eq!(list, LinkedList::new());
    }

    #[test]
    fn long_list_drops_without_overflow() {
        let list: LinkedList<u32> = (0..200_000).collect();
        assert_eq!(list.len(), 200_000);
    }
}

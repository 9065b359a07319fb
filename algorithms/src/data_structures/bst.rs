//! Unbalanced binary search tree with owned nodes.
//!
//! Variables:
//!   root : Option<Box<Node<T>>>
//!   h    : height, 0 for the empty tree, 1 for a single node
//!
//! Equations:
//!   BST invariant: left < node < right for every node (duplicates rejected)
//!   insert / contains / remove:  O(h)
//!   remove(two children): replace with in-order successor, delete that
//!   balanced  iff |h(left) - h(right)| <= 1 at every node
//!
//! Nothing here recurses on the tree shape: sorted input builds a chain of
//! depth n, so every walk keeps its own stack.

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt;

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    val: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    fn leaf(val: T) -> Box<Self> {
        Box::new(Self { val, left: None, right: None })
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Order {
    Pre,
    In,
    Post,
}

pub struct BinarySearchTree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self { root: None, len: 0 }
    }
}

impl<T: Ord> BinarySearchTree<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false if the value was already present.
    pub fn insert(&mut self, val: T) -> bool {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = match val.cmp(&node.val) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => return false,
            };
        }
        *link = Some(Node::leaf(val));
        self.len += 1;
        true
    }

    pub fn remove(&mut self, val: &T) -> bool {
        let mut link = &mut self.root;
        loop {
            match link.as_deref().map(|node| val.cmp(&node.val)) {
                None => return false,
                Some(Ordering::Equal) => break,
                Some(ord) => {
                    let Some(node) = link else { return false };
                    link = if ord == Ordering::Less { &mut node.left } else { &mut node.right };
                }
            }
        }
        let Some(mut node) = link.take() else { return false };
        *link = match (node.left.take(), node.right.take()) {
            (None, None) => None,
            (Some(child), None) | (None, Some(child)) => Some(child),
            (Some(left), Some(right)) => {
                let mut right = Some(right);
                if let Some(successor) = take_min(&mut right) {
                    node.val = successor;
                }
                node.left = Some(left);
                node.right = right;
                Some(node)
            }
        };
        self.len -= 1;
        true
    }

    pub fn contains(&self, val: &T) -> bool {
        self.level_of(val).is_some()
    }

    pub fn min(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.val)
    }

    pub fn max(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.val)
    }

    /// Depth of `val` counting the root as level 1.
    pub fn level_of(&self, val: &T) -> Option<usize> {
        let mut cur = self.root.as_deref();
        let mut level = 1;
        while let Some(node) = cur {
            cur = match val.cmp(&node.val) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return Some(level),
            };
            level += 1;
        }
        None
    }

    /// Checks the ordering invariant. Fails after [`mirror`](Self::mirror).
    pub fn is_bst(&self) -> bool {
        self.walk(Order::In).windows(2).all(|w| w[0] < w[1])
    }
}

impl<T> BinarySearchTree<T> {
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn clear(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
        self.len = 0;
    }

    pub fn height(&self) -> usize {
        self.fold(0usize, |_, l, r| 1 + l.max(r))
    }

    pub fn is_balanced(&self) -> bool {
        // height of a balanced subtree, None once one is not
        self.fold(Some(0usize), |_, l, r| match (l, r) {
            (Some(l), Some(r)) if l.abs_diff(r) <= 1 => Some(1 + l.max(r)),
            _ => None,
        })
        .is_some()
    }

    pub fn count_leaves(&self) -> usize {
        self.fold(0usize, |node, l, r| {
            if node.left.is_none() && node.right.is_none() {
                1
            } else {
                l + r
            }
        })
    }

    /// Swaps left and right children everywhere. The tree then orders its
    /// values descending, so searches and inserts no longer apply until it is
    /// mirrored back.
    pub fn mirror(&mut self) {
        let mut stack: Vec<&mut Node<T>> = self.root.as_deref_mut().into_iter().collect();
        while let Some(node) = stack.pop() {
            std::mem::swap(&mut node.left, &mut node.right);
            stack.extend(node.left.as_deref_mut());
            stack.extend(node.right.as_deref_mut());
        }
    }

    /// Depth-first walk emitting each value on its first, second or third
    /// visit for pre-, in- and post-order.
    fn walk(&self, order: Order) -> Vec<&T> {
        let emit_on = match order {
            Order::Pre => 0,
            Order::In => 1,
            Order::Post => 2,
        };
        let mut out = Vec::with_capacity(self.len);
        let mut stack: Vec<(&Node<T>, u8)> = self.root.as_deref().map(|n| (n, 0)).into_iter().collect();
        while let Some((node, visits)) = stack.pop() {
            if visits == emit_on {
                out.push(&node.val);
            }
            match visits {
                0 => {
                    stack.push((node, 1));
                    stack.extend(node.left.as_deref().map(|n| (n, 0)));
                }
                1 => {
                    stack.push((node, 2));
                    stack.extend(node.right.as_deref().map(|n| (n, 0)));
                }
                _ => {}
            }
        }
        out
    }

    /// Post-order fold: `f(node, left, right)` sees its children's results,
    /// a missing child contributes `empty`.
    fn fold<R: Copy>(&self, empty: R, mut f: impl FnMut(&Node<T>, R, R) -> R) -> R {
        let mut todo: Vec<(Option<&Node<T>>, bool)> = vec![(self.root.as_deref(), false)];
        let mut done: Vec<R> = Vec::new();
        while let Some((link, expanded)) = todo.pop() {
            match link {
                None => done.push(empty),
                Some(node) if !expanded => {
                    todo.push((Some(node), true));
                    todo.push((node.right.as_deref(), false));
                    todo.push((node.left.as_deref(), false));
                }
                Some(node) => {
                    let right = done.pop().unwrap_or(empty);
                    let left = done.pop().unwrap_or(empty);
                    done.push(f(node, left, right));
                }
            }
        }
        done.pop().unwrap_or(empty)
    }
}

impl<T: Clone> BinarySearchTree<T> {
    pub fn inorder(&self) -> Vec<T> {
        self.walk(Order::In).into_iter().cloned().collect()
    }

    pub fn preorder(&self) -> Vec<T> {
        self.walk(Order::Pre).into_iter().cloned().collect()
    }

    pub fn postorder(&self) -> Vec<T> {
        self.walk(Order::Post).into_iter().cloned().collect()
    }

    pub fn inorder_iterative(&self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.len);
        let mut stack: Vec<&Node<T>> = Vec::new();
        let mut cur = self.root.as_deref();
        while cur.is_some() || !stack.is_empty() {
            while let Some(node) = cur {
                stack.push(node);
                cur = node.left.as_deref();
            }
            if let Some(node) = stack.pop() {
                out.push(node.val.clone());
                cur = node.right.as_deref();
            }
        }
        out
    }

    pub fn preorder_iterative(&self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.len);
        let mut stack: Vec<&Node<T>> = self.root.as_deref().into_iter().collect();
        while let Some(node) = stack.pop() {
            out.push(node.val.clone());
            stack.extend(node.right.as_deref());
            stack.extend(node.left.as_deref());
        }
        out
    }

    /// Two stacks: the first emits node-right-left, the second reverses it.
    pub fn postorder_iterative(&self) -> Vec<T> {
        let mut first: Vec<&Node<T>> = self.root.as_deref().into_iter().collect();
        let mut second = Vec::with_capacity(self.len);
        while let Some(node) = first.pop() {
            second.push(node);
            first.extend(node.left.as_deref());
            first.extend(node.right.as_deref());
        }
        second.into_iter().rev().map(|n| n.val.clone()).collect()
    }

    /// Breadth-first, one inner vector per depth.
    pub fn levels(&self) -> Vec<Vec<T>> {
        let mut out = Vec::new();
        let mut queue: VecDeque<&Node<T>> = self.root.as_deref().into_iter().collect();
        while !queue.is_empty() {
            let mut level = Vec::with_capacity(queue.len());
            for _ in 0..queue.len() {
                let Some(node) = queue.pop_front() else { break };
                level.push(node.val.clone());
                queue.extend(node.left.as_deref());
                queue.extend(node.right.as_deref());
            }
            out.push(level);
        }
        out
    }

    pub fn level_order(&self) -> Vec<T> {
        self.levels().into_iter().flatten().collect()
    }
}

impl<T> Drop for BinarySearchTree<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

// Re-inserting in pre-order rebuilds the same shape.
impl<T: Ord + Clone> Clone for BinarySearchTree<T> {
    fn clone(&self) -> Self {
        self.walk(Order::Pre).into_iter().cloned().collect()
    }
}

impl<T: fmt::Debug> fmt::Debug for BinarySearchTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.walk(Order::In)).finish()
    }
}

impl<T: Ord> FromIterator<T> for BinarySearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = BinarySearchTree::new();
        for v in iter {
            tree.insert(v);
        }
        tree
    }
}

// Detaches the leftmost node of a non-empty subtree and returns its value.
fn take_min<T>(mut link: &mut Link<T>) -> Option<T> {
    while link.as_ref()?.left.is_some() {
        link = &mut link.as_mut()?.left;
    }
    let mut node = link.take()?;
    *link = node.right.take();
    Some(node.val)
}

#[cfg(test)]
mod tests {
    use super::*;

    // The textbook sample:
    //          50
    //        /    \
    //      30      70
    //     /  \    /  \
    //    20  40  60  80
    fn sample() -> BinarySearchTree<i32> {
        [50, 30, 70, 20, 40, 60, 80].into_iter().collect()
    }

    #[test]
    fn traversals() {
        let t = sample();
        assert_eq!(t.inorder(), vec![20, 30, 40, 50, 60, 70, 80]);
        assert_eq!(t.preorder(), vec![50, 30, 20, 40, 70, 60, 80]);
        assert_eq!(t.postorder(), vec![20, 40, 30, 60, 80, 70, 50]);
        assert_eq!(t.level_order(), vec![50, 30, 70, 20, 40, 60, 80]);
        assert_eq!(t.levels(), vec![vec![50], vec![30, 70], vec![20, 40, 60, 80]]);
    }

    #[test]
    fn iterative_traversals_match_recursive() {
        let t: BinarySearchTree<i32> = [8, 3, 10, 1, 6, 14, 4, 7, 13].into_iter().collect();
        assert_eq!(t.inorder_iterative(), t.inorder());
        assert_eq!(t.preorder_iterative(), t.preorder());
        assert_eq!(t.postorder_iterative(), t.postorder());
    }

    #[test]
    fn queries() {
        let t = sample();
        assert_eq!(t.len(), 7);
        assert_eq!(t.min(), Some(&20));
        assert_eq!(t.max(), Some(&80));
        assert!(t.contains(&60));
        assert!(!t.contains(&65));
        assert_eq!(t.height(), 3);
        assert_eq!(t.level_of(&50), Some(1));
        assert_eq!(t.level_of(&40), Some(3));
        assert_eq!(t.level_of(&45), None);
        assert_eq!(t.count_leaves(), 4);
        assert!(t.is_balanced());
        assert!(t.is_bst());
    }

    #[test]
    fn duplicates_are_ignored() {
        let mut t = sample();
        assert!(!t.insert(40));
        assert_eq!(t.len(), 7);
    }

    #[test]
    fn remove_each_shape_of_node() {
        let mut t = sample();
        assert!(t.remove(&20)); // leaf
        assert!(t.remove(&30)); // one child
        assert!(t.remove(&50)); // two children, successor 60
        assert!(!t.remove(&99));
        assert_eq!(t.inorder(), vec![40, 60, 70, 80]);
        assert_eq!(t.preorder()[0], 60);
        assert_eq!(t.len(), 4);
        assert!(t.is_bst());
    }

    #[test]
    fn skewed_tree_is_unbalanced() {
        let t: BinarySearchTree<i32> = (1..=4).collect();
        assert_eq!(t.height(), 4);
        assert!(!t.is_balanced());
        assert_eq!(t.count_leaves(), 1);
    }

    #[test]
    fn mirror_reverses_inorder() {
        let mut t = sample();
        t.mirror();
        assert_eq!(t.inorder(), vec![80, 70, 60, 50, 40, 30, 20]);
        assert!(!t.is_bst());
        t.mirror();
        assert!(t.is_bst());
    }

    #[test]
    fn empty_tree() {
        let mut t: BinarySearchTree<i32> = BinarySearchTree::new();
        assert!(t.is_empty());
        assert_eq!(t.height(), 0);
        assert_eq!(t.min(), None);
        assert!(t.levels().is_empty());
        assert!(t.is_balanced());
        t.insert(1);
        t.clear();
        assert_eq!(t.len(), 0);
    }

    #[test]
    fn sorted_input_builds_a_deep_chain() {
        // each insert walks the whole chain, so keep n moderate
        let n = 30_000;
        let mut t: BinarySearchTree<i64> = (0..n).collect();
        assert_eq!(t.len(), n as usize);
        assert_eq!(t.height(), n as usize);
        assert_eq!(t.level_of(&(n - 1)), Some(n as usize));
        assert_eq!(t.count_leaves(), 1);
        assert!(t.is_bst());
        assert_eq!(t.inorder().len(), n as usize);
        assert!(t.remove(&0));
        assert!(t.remove(&(n / 2)));
        assert_eq!(t.len(), n as usize - 2);
        assert_eq!(t.preorder_iterative(), t.preorder());
        assert_eq!(t.postorder_iterative(), t.postorder());
        t.clear();
        assert!(t.is_empty());
    }

    #[test]
    fn clone_keeps_shape() {
        let t = sample();
        let c = t.clone();
        assert_eq!(c.levels(), t.levels());
        assert_eq!(format!("{c:?}"), "{20, 30, 40, 50, 60, 70, 80}");
    }
}

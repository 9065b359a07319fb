//! Search through a binary search tree built from the input order.
//!
//! Variables:
//!   nodes[k] : (index into input, left child, right child)
//!   d        : depth of the node holding the target, root = 0
//!
//! Equations:
//!   insert arr[i]:  walk from the root, left if arr[i] < node, else right
//!   search:         O(d), d <= n - 1 for sorted input
//!
//! Nodes live in a flat vector linked by index, so building and walking a
//! degenerate tree never recurses. Values equal to a node go to its right
//! subtree, so the first occurrence of a value is the one reached first.

use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BstHit {
    /// Position of the matching element in the input slice.
    pub index: usize,
    /// Edges from the root to the matching node.
    pub depth: usize,
}

struct Node {
    index: usize,
    left: Option<usize>,
    right: Option<usize>,
}

fn build<T: Ord>(arr: &[T]) -> Vec<Node> {
    let mut nodes: Vec<Node> = Vec::with_capacity(arr.len());
    for (index, val) in arr.iter().enumerate() {
        let fresh = nodes.len();
        let mut slot = if nodes.is_empty() { None } else { Some(0) };
        while let Some(k) = slot {
            let node = &mut nodes[k];
            let child = if *val < arr[node.index] { &mut node.left } else { &mut node.right };
            match *child {
                Some(next) => slot = Some(next),
                None => {
                    *child = Some(fresh);
                    slot = None;
                }
            }
        }
        nodes.push(Node { index, left: None, right: None });
    }
    nodes
}

/// Index and depth of the tree node holding `target`.
pub fn bst_locate<T: Ord>(arr: &[T], target: &T) -> Option<BstHit> {
    let nodes = build(arr);
    let mut cur = if nodes.is_empty() { None } else { Some(0) };
    let mut depth = 0;
    while let Some(k) = cur {
        let node = &nodes[k];
        cur = match target.cmp(&arr[node.index]) {
            Ordering::Equal => return Some(BstHit { index: node.index, depth }),
            Ordering::Less => node.left,
            Ordering::Greater => node.right,
        };
        depth += 1;
    }
    None
}

/// Index of the first occurrence of `target`, found through the tree.
pub fn bst_search<T: Ord>(arr: &[T], target: &T) -> Option<usize> {
    bst_locate(arr, target).map(|hit| hit.index)
}

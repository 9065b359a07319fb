//! Disjoint-set forest.
//!
//! Variables:
//!   parent : Vec<usize>  parent[x] == x  iff  x is a root
//!   rank   : Vec<u8>     upper bound on tree height
//!
//! Equations:
//!   find(x):     follow parent to the root, then point every visited node at it
//!   union(a, b): attach the lower-rank root under the higher; equal ranks bump rank
//!   Amortised cost: O(α(N)) per operation

#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
    sets: usize,
}

impl DisjointSet {
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            sets: n,
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Representative of `x`'s set. Panics if `x >= len()`.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut cur = x;
        while self.parent[cur] != root {
            let next = self.parent[cur];
            self.parent[cur] = root;
            cur = next;
        }
        root
    }

    /// Merges the sets of `a` and `b`. Returns false when they were already one set.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra == rb {
            return false;
        }
        match self.rank[ra].cmp(&self.rank[rb]) {
            std::cmp::Ordering::Less => self.parent[ra] = rb,
            std::cmp::Ordering::Greater => self.parent[rb] = ra,
            std::cmp::Ordering::Equal => {
                self.parent[rb] = ra;
                self.rank[ra] = self.rank[ra].saturating_add(1);
            }
        }
        self.sets -= 1;
        true
    }

    pub fn connected(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }

    /// Number of disjoint sets.
    pub fn set_count(&self) -> usize {
        self.sets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unions_merge_sets() {
        let mut ds = DisjointSet::new(6);
        assert_eq!(ds.set_count(), 6);
        assert!(ds.union(0, 1));
        assert!(ds.union(2, 3));
        assert!(ds.union(1, 3));
        assert!(!ds.union(0, 2));
        assert!(ds.connected(0, 3));
        assert!(!ds.connected(0, 4));
        assert_eq!(ds.set_count(), 3);
    }

    #[test]
    fn long_chain_compresses() {
        let mut ds = DisjointSet::new(100);
        for i in 1..100 {
            ds.union(i - 1, i);
        }
        let root = ds.find(99);
        assert!((0..100).all(|i| ds.find(i) == root));
        assert_eq!(ds.set_count(), 1);
        assert_eq!(ds.len(), 100);
    }
}

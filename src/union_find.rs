//! Disjoint-set forest over a fixed universe `0..n`.
//!
//! Roots store the negated size of their component, other elements store
//! their parent. `find` compresses paths and `join` attaches the smaller tree
//! under the larger one.

/// A union-find structure with union by size and path compression.
#[derive(Debug, Clone)]
pub struct DisjointSetForest {
    /// Parent index, or `-size` for a root.
    parent: Vec<isize>,
    /// Dense label per element, assigned by `normalize_nontrivial`.
    labels: Vec<Option<usize>>,
    normalized: bool,
}

impl DisjointSetForest {
    /// Creates a forest of `n` singleton sets.
    pub fn new(n: usize) -> Self {
        Self {
            parent: vec![-1; n],
            labels: vec![None; n],
            normalized: false,
        }
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the representative of `x`'s set.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] >= 0 {
            root = self.parent[root] as usize;
        }
        let mut current = x;
        while current != root {
            let next = self.parent[current] as usize;
            self.parent[current] = root as isize;
            current = next;
        }
        root
    }

    /// Merges the sets of `a` and `b`.
    ///
    /// Returns `false` if they were already in the same set.
    pub fn join(&mut self, a: usize, b: usize) -> bool {
        let mut a = self.find(a);
        let mut b = self.find(b);
        if a == b {
            return false;
        }
        // Sizes are negated, so the larger set has the smaller value.
        if self.parent[a] > self.parent[b] {
            std::mem::swap(&mut a, &mut b);
        }
        self.parent[a] += self.parent[b];
        self.parent[b] = a as isize;
        true
    }

    pub fn same_set(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }

    /// Returns the number of elements in `x`'s set.
    pub fn size(&mut self, x: usize) -> usize {
        let root = self.find(x);
        (-self.parent[root]) as usize
    }

    /// Assigns dense labels to every component of size > 1.
    ///
    /// Labels `0, 1, 2, ...` are handed out in order of the smallest element
    /// of each component. Singletons stay unlabeled. Must be called once,
    /// after all joins.
    ///
    /// Returns the number of labels assigned.
    pub fn normalize_nontrivial(&mut self) -> usize {
        assert!(!self.normalized, "Forest is already normalized");
        self.normalized = true;

        let mut next = 0;
        for x in 0..self.len() {
            if self.size(x) > 1 {
                let root = self.find(x);
                let label = *self.labels[root].get_or_insert_with(|| {
                    next += 1;
                    next - 1
                });
                self.labels[x] = Some(label);
            }
        }
        next
    }

    /// Returns the label of `x`, or `None` for singletons or before
    /// normalization.
    pub fn label(&self, x: usize) -> Option<usize> {
        self.labels[x]
    }
}

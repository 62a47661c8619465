//! Union-find (disjoint-set) over dense integer nodes.
//!
//! Classic array-backed union-find with path compression and union by
//! size: any interleaving of `union` and `find` costs amortized
//! near-constant time per operation (inverse Ackermann). The node count is
//! fixed at construction; the tracker sizes it to the cell count plus the
//! four edge sentinels.

/// A partition of `0..len` into disjoint sets.
///
/// `find` compresses paths, so lookups mutate internal parent links; every
/// query therefore takes `&mut self`. The *partition* itself is only
/// changed by `union`.
///
/// ## Example
///
/// ```
/// use rust_hex::DisjointSet;
///
/// let mut sets = DisjointSet::new(4);
/// assert!(!sets.connected(0, 2));
///
/// sets.union(0, 1);
/// sets.union(1, 2);
/// assert!(sets.connected(0, 2));
/// assert!(!sets.connected(0, 3));
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSet {
    /// Parent links; a root points to itself.
    parent: Vec<u32>,
    /// Set sizes, meaningful at roots only.
    size: Vec<u32>,
}

impl DisjointSet {
    /// Create `len` singleton sets.
    #[must_use]
    pub fn new(len: usize) -> Self {
        assert!(len <= u32::MAX as usize, "node count must fit in u32");

        Self {
            parent: (0..len as u32).collect(),
            size: vec![1; len],
        }
    }

    /// Total number of nodes (not sets).
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Check whether the structure holds no nodes at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Find the representative of the set containing `node`.
    ///
    /// Compresses the walked path: every node on it is re-parented
    /// directly to the root.
    pub fn find(&mut self, node: usize) -> usize {
        let mut root = node;
        while self.parent[root] as usize != root {
            root = self.parent[root] as usize;
        }

        let mut current = node;
        while current != root {
            let next = self.parent[current] as usize;
            self.parent[current] = root as u32;
            current = next;
        }

        root
    }

    /// Merge the sets containing `a` and `b`.
    ///
    /// Returns `true` if two distinct sets were merged, `false` if the
    /// nodes already shared one. The smaller set is attached under the
    /// larger root (union by size).
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }

        let (big, small) = if self.size[root_a] >= self.size[root_b] {
            (root_a, root_b)
        } else {
            (root_b, root_a)
        };

        self.parent[small] = big as u32;
        self.size[big] += self.size[small];
        true
    }

    /// Check whether two nodes share a set.
    pub fn connected(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }

    /// Size of the set containing `node`.
    pub fn set_size(&mut self, node: usize) -> usize {
        let root = self.find(node);
        self.size[root] as usize
    }
}

//! Minimum-tracking tree over per-vertex degree values.
//!
//! A complete binary tree with the tracked values in the leaves, where each
//! branch node holds the minimum of its two children. Minimum lookup and
//! point updates both cost O(log n), which is what makes the greedy peel
//! loop O((m + n) log(m + n) + E) overall.

/// Priority structure answering "which vertex currently has the smallest
/// value" over a fixed set of vertices.
///
/// Leaves map 1:1 to vertex indices. Padding leaves (when the vertex count
/// is not a power of two) and retired leaves hold `f64::INFINITY`, so they
/// can never win a minimum query.
#[derive(Debug, Clone)]
pub struct MinTree {
    /// Branches followed by leaves, heap layout: children of `i` are
    /// `2i + 1` and `2i + 2`.
    nodes: Vec<f64>,
    height: usize,
    num_branches: usize,
    len: usize,
}

impl MinTree {
    /// Build a tree over the given initial values in O(n).
    ///
    /// An empty slice yields a tree whose only (padding) leaf is infinite,
    /// so [`min`](Self::min) stays total.
    pub fn new(values: &[f64]) -> Self {
        let len = values.len();
        let num_leaves = len.max(1).next_power_of_two();
        let height = num_leaves.trailing_zeros() as usize;
        let num_branches = num_leaves - 1;

        let mut nodes = vec![f64::INFINITY; num_branches + num_leaves];
        nodes[num_branches..num_branches + len].copy_from_slice(values);
        for i in (0..num_branches).rev() {
            nodes[i] = nodes[2 * i + 1].min(nodes[2 * i + 2]);
        }

        MinTree {
            nodes,
            height,
            num_branches,
            len,
        }
    }

    /// Number of vertices this tree was built over.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree was built over zero vertices.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current value of vertex `index`.
    ///
    /// # Panics
    /// Panics if `index >= len()`.
    pub fn value(&self, index: usize) -> f64 {
        assert!(
            index < self.len,
            "vertex index {index} out of bounds for tree of {} leaves",
            self.len
        );
        self.nodes[self.num_branches + index]
    }

    /// Vertex index and value of the current minimum, in O(log n).
    ///
    /// Ties descend into the left child, so the smallest index among equal
    /// minima is returned. Once every vertex is retired the returned value
    /// is `f64::INFINITY`.
    pub fn min(&self) -> (usize, f64) {
        let mut cur = 0;
        for _ in 0..self.height {
            let left = 2 * cur + 1;
            cur = if self.nodes[left] <= self.nodes[left + 1] {
                left
            } else {
                left + 1
            };
        }
        (cur - self.num_branches, self.nodes[cur])
    }

    /// Add `delta` to the value of vertex `index`, in O(log n).
    ///
    /// Ancestors are recomputed bottom-up, stopping as soon as one level is
    /// unchanged. A delta applied to a retired (infinite) vertex leaves it
    /// infinite, which is what lets callers decrement neighbors without
    /// checking liveness first.
    ///
    /// # Panics
    /// Panics if `index >= len()`.
    pub fn update(&mut self, index: usize, delta: f64) {
        assert!(
            index < self.len,
            "vertex index {index} out of bounds for tree of {} leaves",
            self.len
        );
        let leaf = self.num_branches + index;
        self.nodes[leaf] += delta;
        self.pull_up(leaf);
    }

    /// Permanently exclude vertex `index` from minimum queries by setting
    /// its leaf to `f64::INFINITY`.
    ///
    /// # Panics
    /// Panics if `index >= len()`.
    pub fn retire(&mut self, index: usize) {
        assert!(
            index < self.len,
            "vertex index {index} out of bounds for tree of {} leaves",
            self.len
        );
        let leaf = self.num_branches + index;
        self.nodes[leaf] = f64::INFINITY;
        self.pull_up(leaf);
    }

    /// Recompute branch values on the path from `leaf` to the root, with
    /// the usual early stop once a branch value is unchanged.
    fn pull_up(&mut self, mut cur: usize) {
        for _ in 0..self.height {
            cur = (cur - 1) / 2;
            let left = 2 * cur + 1;
            let next = self.nodes[left].min(self.nodes[left + 1]);
            if self.nodes[cur] == next {
                break;
            }
            self.nodes[cur] = next;
        }
    }
}

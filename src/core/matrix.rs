//! Sparse binary bipartite adjacency.
//!
//! Rows model one vertex class (e.g. user accounts) and columns the other
//! (e.g. products or followees). Edges are unweighted and stored in both
//! directions so row and column neighborhoods are equally cheap to walk.

use std::collections::BTreeSet;

use crate::error::{GraphError, Result};

/// Binary bipartite graph in adjacency-list form.
///
/// Neighbor lists are kept sorted and duplicate-free, so membership tests
/// are O(log deg) and iteration yields edges in (row, col) order.
#[derive(Debug, Clone, Default)]
pub struct SparseBipartite {
    row_adj: Vec<Vec<usize>>,
    col_adj: Vec<Vec<usize>>,
    edge_count: usize,
}

impl SparseBipartite {
    /// Create an edgeless graph with the given shape.
    pub fn new(num_rows: usize, num_cols: usize) -> Self {
        SparseBipartite {
            row_adj: vec![Vec::new(); num_rows],
            col_adj: vec![Vec::new(); num_cols],
            edge_count: 0,
        }
    }

    /// Build a graph of fixed shape from an edge list.
    ///
    /// Duplicate edges collapse to a single entry. Returns an error if any
    /// endpoint lies outside the declared shape.
    pub fn with_shape(num_rows: usize, num_cols: usize, edges: &[(usize, usize)]) -> Result<Self> {
        let mut matrix = SparseBipartite::new(num_rows, num_cols);
        for &(row, col) in edges {
            matrix.insert(row, col)?;
        }
        Ok(matrix)
    }

    /// Build a graph from parallel endpoint arrays, one edge per position.
    ///
    /// The shape is inferred as one past the largest index seen on each
    /// side. Returns [`GraphError::DimensionMismatch`] when the arrays
    /// differ in length and [`GraphError::EmptyGraph`] when they are empty.
    pub fn from_edges(sources: &[usize], dests: &[usize]) -> Result<Self> {
        if sources.len() != dests.len() {
            return Err(GraphError::DimensionMismatch {
                expected: sources.len(),
                got: dests.len(),
            });
        }
        let pairs: Vec<(usize, usize)> = sources
            .iter()
            .copied()
            .zip(dests.iter().copied())
            .collect();
        Self::from_pairs(&pairs)
    }

    /// Build a graph from an edge list, inferring the shape as one past the
    /// largest index seen on each side.
    ///
    /// Returns [`GraphError::EmptyGraph`] for an empty list, since no shape
    /// can be inferred from it.
    pub fn from_pairs(pairs: &[(usize, usize)]) -> Result<Self> {
        if pairs.is_empty() {
            return Err(GraphError::EmptyGraph);
        }
        let num_rows = pairs.iter().map(|&(r, _)| r).max().unwrap_or(0) + 1;
        let num_cols = pairs.iter().map(|&(_, c)| c).max().unwrap_or(0) + 1;
        Self::with_shape(num_rows, num_cols, pairs)
    }

    /// Insert a single edge, keeping neighbor lists sorted.
    ///
    /// Returns `Ok(true)` if the edge was new and `Ok(false)` if it was
    /// already present.
    pub fn insert(&mut self, row: usize, col: usize) -> Result<bool> {
        if row >= self.row_adj.len() {
            return Err(GraphError::InvalidParameter(format!(
                "row index {row} out of bounds for {} rows",
                self.row_adj.len()
            )));
        }
        if col >= self.col_adj.len() {
            return Err(GraphError::InvalidParameter(format!(
                "column index {col} out of bounds for {} columns",
                self.col_adj.len()
            )));
        }
        match self.row_adj[row].binary_search(&col) {
            Ok(_) => Ok(false),
            Err(pos) => {
                self.row_adj[row].insert(pos, col);
                // Both directions are kept consistent, so the reverse entry
                // is guaranteed absent here.
                if let Err(pos) = self.col_adj[col].binary_search(&row) {
                    self.col_adj[col].insert(pos, row);
                }
                self.edge_count += 1;
                Ok(true)
            }
        }
    }

    /// Number of row vertices.
    pub fn rows(&self) -> usize {
        self.row_adj.len()
    }

    /// Number of column vertices.
    pub fn cols(&self) -> usize {
        self.col_adj.len()
    }

    /// Number of distinct edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Whether the graph holds no edges at all.
    pub fn is_empty(&self) -> bool {
        self.edge_count == 0
    }

    /// Whether the edge (row, col) is present. Out-of-range indices simply
    /// report `false`.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.row_adj
            .get(row)
            .map_or(false, |adj| adj.binary_search(&col).is_ok())
    }

    /// Sorted column neighbors of `row`.
    ///
    /// # Panics
    /// Panics if `row >= rows()`.
    pub fn row_neighbors(&self, row: usize) -> &[usize] {
        &self.row_adj[row]
    }

    /// Sorted row neighbors of `col`.
    ///
    /// # Panics
    /// Panics if `col >= cols()`.
    pub fn col_neighbors(&self, col: usize) -> &[usize] {
        &self.col_adj[col]
    }

    /// Degree of a single row vertex.
    ///
    /// # Panics
    /// Panics if `row >= rows()`.
    pub fn row_degree(&self, row: usize) -> usize {
        self.row_adj[row].len()
    }

    /// Degree of a single column vertex.
    ///
    /// # Panics
    /// Panics if `col >= cols()`.
    pub fn col_degree(&self, col: usize) -> usize {
        self.col_adj[col].len()
    }

    /// Degree of every row vertex.
    pub fn row_degrees(&self) -> Vec<usize> {
        self.row_adj.iter().map(Vec::len).collect()
    }

    /// Degree of every column vertex.
    pub fn col_degrees(&self) -> Vec<usize> {
        self.col_adj.iter().map(Vec::len).collect()
    }

    /// All edges in (row, col) order.
    pub fn entries(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.row_adj
            .iter()
            .enumerate()
            .flat_map(|(row, adj)| adj.iter().map(move |&col| (row, col)))
    }

    /// Number of edges inside the block `rows x cols`.
    pub fn block_mass(&self, rows: &BTreeSet<usize>, cols: &BTreeSet<usize>) -> usize {
        rows.iter()
            .filter_map(|&r| self.row_adj.get(r))
            .map(|adj| adj.iter().filter(|c| cols.contains(c)).count())
            .sum()
    }

    /// Delete every edge inside the block `rows x cols`, returning how many
    /// were removed. Used to suppress an already-detected block before
    /// peeling again.
    pub fn zero_block(&mut self, rows: &BTreeSet<usize>, cols: &BTreeSet<usize>) -> usize {
        let mut removed = 0;
        for &row in rows {
            if let Some(adj) = self.row_adj.get_mut(row) {
                let before = adj.len();
                adj.retain(|col| !cols.contains(col));
                removed += before - adj.len();
            }
        }
        for &col in cols {
            if let Some(adj) = self.col_adj.get_mut(col) {
                adj.retain(|row| !rows.contains(row));
            }
        }
        self.edge_count -= removed;
        removed
    }

    /// Restrict to rows and columns meeting the given minimum degrees,
    /// measured on this graph before any removal.
    ///
    /// Returns the reindexed subgraph together with the original indices of
    /// the surviving rows and columns, so detections on the subgraph can be
    /// mapped back.
    pub fn filter_by_degree(
        &self,
        min_row_degree: usize,
        min_col_degree: usize,
    ) -> (SparseBipartite, Vec<usize>, Vec<usize>) {
        let kept_rows: Vec<usize> = (0..self.rows())
            .filter(|&r| self.row_adj[r].len() >= min_row_degree)
            .collect();
        let kept_cols: Vec<usize> = (0..self.cols())
            .filter(|&c| self.col_adj[c].len() >= min_col_degree)
            .collect();

        let mut col_map = vec![None; self.cols()];
        for (new_col, &old_col) in kept_cols.iter().enumerate() {
            col_map[old_col] = Some(new_col);
        }

        let mut sub = SparseBipartite::new(kept_rows.len(), kept_cols.len());
        for (new_row, &old_row) in kept_rows.iter().enumerate() {
            for &old_col in &self.row_adj[old_row] {
                if let Some(new_col) = col_map[old_col] {
                    // Source lists are sorted, so plain pushes stay sorted.
                    sub.row_adj[new_row].push(new_col);
                    sub.col_adj[new_col].push(new_row);
                    sub.edge_count += 1;
                }
            }
        }
        (sub, kept_rows, kept_cols)
    }
}

//! [`BitAdjacency`] — the n×n bit-adjacency matrix. Stored as n rows
//! of `FixedBitSet`, each of width n, giving O(word) row-level set algebra to
//! every primitive in [`crate::subgraph`].

use fixedbitset::FixedBitSet;
use std::hash::Hash;

use crate::label_graph::LabelGraph;
use crate::vertex_index::VertexIndex;

/// The adjacency matrix: `row(i).contains(j)` iff `(i, j)` is an edge.
///
/// Built once from a [`LabelGraph`] and a matching [`VertexIndex`], then
/// immutable for the rest of the engine's lifetime.
pub struct BitAdjacency {
    n: usize,
    rows: Vec<FixedBitSet>,
}

impl BitAdjacency {
    /// For each vertex and each of its neighbors, sets the corresponding bit
    /// in that vertex's row. An undirected input naturally symmetrizes
    /// the matrix because both endpoints list the edge.
    pub(crate) fn build<L, G>(graph: G, index: &VertexIndex<L>) -> Self
    where
        L: Clone + Eq + Hash,
        G: LabelGraph<Label = L>,
    {
        let n = index.len();
        let mut rows = vec![FixedBitSet::with_capacity(n); n];
        for label in graph.vertices() {
            let i = index
                .index_of(&label)
                .expect("every vertex the graph enumerates must be in its own index");
            for neighbor in graph.neighbors(&label) {
                if let Some(j) = index.index_of(&neighbor) {
                    rows[i].insert(j);
                }
            }
        }
        BitAdjacency { n, rows }
    }

    /// Vertex count `n`.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Read-only view of the i-th adjacency row.
    pub fn row(&self, i: usize) -> &FixedBitSet {
        &self.rows[i]
    }

    /// A fresh all-ones bit-vector of width `n`, the universe subsets are
    /// complemented against.
    pub(crate) fn universe(&self) -> FixedBitSet {
        let mut full = FixedBitSet::with_capacity(self.n);
        for v in 0..self.n {
            full.insert(v);
        }
        full
    }
}

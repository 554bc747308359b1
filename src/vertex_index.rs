//! [`VertexIndex`] — the bijection between caller labels and dense `usize`
//! indices. Everything past this module works purely in integers.

use fixedbitset::FixedBitSet;
use hashbrown::HashMap;
use std::hash::Hash;

use crate::engine::EngineBuildError;
use crate::label_graph::LabelGraph;

/// Bijection `Label <-> [0, n)`, built once and never mutated.
pub struct VertexIndex<L> {
    forward: HashMap<L, usize>,
    reverse: Vec<L>,
}

impl<L: Clone + Eq + Hash> VertexIndex<L> {
    /// Enumerates `graph`'s vertices in its natural order and assigns
    /// consecutive indices.
    pub(crate) fn build<G>(graph: G) -> Result<Self, EngineBuildError>
    where
        G: LabelGraph<Label = L>,
    {
        let n = graph.vertex_count();
        let mut forward = HashMap::with_capacity(n);
        let mut reverse = Vec::with_capacity(n);
        for label in graph.vertices() {
            if forward.insert(label.clone(), reverse.len()).is_some() {
                return Err(EngineBuildError::DuplicateLabel);
            }
            reverse.push(label);
        }
        Ok(VertexIndex { forward, reverse })
    }

    /// Vertex count `n`.
    pub fn len(&self) -> usize {
        self.reverse.len()
    }

    /// Whether the index has no vertices.
    pub fn is_empty(&self) -> bool {
        self.reverse.is_empty()
    }

    /// The dense index assigned to `label`. `None` for a label never seen at
    /// construction.
    pub fn index_of(&self, label: &L) -> Option<usize> {
        self.forward.get(label).copied()
    }

    /// The label assigned to `index`. `None` for an index outside `[0, n)`.
    pub fn label_of(&self, index: usize) -> Option<&L> {
        self.reverse.get(index)
    }

    /// Translates a set of labels into a bitset over this index's dense
    /// space. Foreign labels (not part of this index) are silently dropped.
    pub fn bitset_of<'a, I>(&self, labels: I) -> FixedBitSet
    where
        I: IntoIterator<Item = &'a L>,
        L: 'a,
    {
        let mut set = FixedBitSet::with_capacity(self.len());
        for label in labels {
            if let Some(index) = self.index_of(label) {
                set.insert(index);
            }
        }
        set
    }

    /// Translates a bitset back into the labels it contains. Bits past
    /// `n - 1` are ignored.
    pub fn labels_of(&self, bits: &FixedBitSet) -> Vec<L> {
        bits.ones().filter_map(|i| self.label_of(i).cloned()).collect()
    }
}

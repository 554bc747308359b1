//! [`Engine`] ties [`VertexIndex`] and [`BitAdjacency`] together and is the
//! crate's public surface: construction, label translation, the subgraph
//! primitives, and the PMC oracle, all hung off one immutable value.

use std::hash::Hash;

use fixedbitset::FixedBitSet;
use thiserror::Error;

use crate::bit_adjacency::BitAdjacency;
use crate::label_graph::LabelGraph;
use crate::pmc;
use crate::subgraph;
use crate::vertex_index::VertexIndex;

/// The only fallible entry point in this crate. Query methods on
/// a built [`Engine`] never return `Result`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineBuildError {
    /// `n * n` (the bit count of one dense adjacency row times the row
    /// count) would overflow `usize` on this host.
    #[error(
        "label graph reports {reported} vertices; an n*n dense adjacency matrix \
         would overflow this host's usize"
    )]
    TooManyVertices {
        /// The vertex count `graph.vertex_count()` reported.
        reported: usize,
    },
    /// `LabelGraph::vertices` yielded the same label twice.
    #[error("label graph's vertex enumeration produced the same label twice")]
    DuplicateLabel,
}

/// The bitset-indexed subgraph engine. Immutable after [`Engine::build`];
/// every query method is a pure function of `(self, bitset)` and safe to call
/// concurrently from any number of threads.
pub struct Engine<L> {
    index: VertexIndex<L>,
    adjacency: BitAdjacency,
}

impl<L: Clone + Eq + Hash> Engine<L> {
    /// Builds the engine from a label-graph. Vertices are enumerated in
    /// `graph`'s own iteration order to assign indices `0..n`; for each
    /// vertex, neighborhood bits are set in its row. The resulting engine
    /// holds no reference back to `graph`.
    pub fn build<G>(graph: G) -> Result<Self, EngineBuildError>
    where
        G: LabelGraph<Label = L>,
    {
        let reported = graph.vertex_count();
        if reported.checked_mul(reported).is_none() {
            return Err(EngineBuildError::TooManyVertices { reported });
        }

        let index = VertexIndex::build(graph)?;
        let adjacency = BitAdjacency::build(graph, &index);

        #[cfg(feature = "logging")]
        log::debug!(
            "built pmc engine: n={} edge_bits={}",
            adjacency.n(),
            (0..adjacency.n())
                .map(|i| adjacency.row(i).count_ones(..))
                .sum::<usize>(),
        );

        Ok(Engine { index, adjacency })
    }

    /// Vertex count `n`.
    pub fn n(&self) -> usize {
        self.index.len()
    }

    /// The dense index assigned to `label` at construction, if any.
    pub fn index_of(&self, label: &L) -> Option<usize> {
        self.index.index_of(label)
    }

    /// The label a dense index was assigned to at construction, if any.
    pub fn label_of(&self, index: usize) -> Option<&L> {
        self.index.label_of(index)
    }

    /// Translates a set of labels into a bitset over this engine's indices.
    /// Labels foreign to this engine are silently dropped.
    pub fn bitset_of<'a, I>(&self, labels: I) -> FixedBitSet
    where
        I: IntoIterator<Item = &'a L>,
        L: 'a,
    {
        self.index.bitset_of(labels)
    }

    /// Translates a bitset back into the labels it contains.
    pub fn labels_of(&self, bits: &FixedBitSet) -> Vec<L> {
        self.index.labels_of(bits)
    }

    /// Read-only view of a vertex's adjacency row, indexed by dense `usize`.
    pub fn row(&self, index: usize) -> &FixedBitSet {
        self.adjacency.row(index)
    }

    /// Vertices of `S` with a neighbor outside `S`.
    pub fn interior_border(&self, s: &FixedBitSet) -> FixedBitSet {
        subgraph::interior_border(&self.adjacency, s)
    }

    /// `N(S)`: vertices outside `S` with a neighbor in `S`.
    pub fn exterior_border(&self, s: &FixedBitSet) -> FixedBitSet {
        subgraph::exterior_border(&self.adjacency, s)
    }

    /// Single pass: adds every `v ∈ N(S)` whose neighborhood already lies in
    /// `S ∪ N(S)` as computed before this call. `N(S)` is deliberately not
    /// recomputed after each inclusion.
    pub fn saturate_in_place(&self, s: &mut FixedBitSet) {
        subgraph::saturate_in_place(&self.adjacency, s)
    }

    /// Loops [`Engine::saturate_in_place`] to a fixed point.
    pub fn saturate_to_fixed_point(&self, s: &mut FixedBitSet) {
        subgraph::saturate_to_fixed_point(&self.adjacency, s)
    }

    /// Any `v ∈ N(S)` whose neighborhood lies in `S ∪ N(S)`, or `None` if
    /// none exists.
    pub fn absorbable(&self, s: &FixedBitSet) -> Option<usize> {
        subgraph::absorbable(&self.adjacency, s)
    }

    /// The connected components of `G[V∖S]`.
    pub fn separate(&self, s: &FixedBitSet) -> Vec<FixedBitSet> {
        subgraph::separate(&self.adjacency, s)
    }

    /// Whether `S` is a potential maximal clique of the underlying graph.
    pub fn is_potential_maximal_clique(&self, s: &FixedBitSet) -> bool {
        pmc::is_potential_maximal_clique(&self.adjacency, s)
    }
}

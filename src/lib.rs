//! A bitset-indexed subgraph engine for potential-maximal-clique based
//! treewidth computation.
//!
//! This crate is the hard engineering surface underneath an exact treewidth
//! solver following the Bouchitté–Todinca paradigm: a compact bit-adjacency
//! representation of a graph, the set-algebraic primitives that every
//! minimal-separator and potential-maximal-clique search is built from, and
//! the PMC decision procedure itself. It does not ship a general-purpose
//! graph container, a CLI, or a solver — those are external collaborators
//! that consume the surface exposed here through [`Engine`].
//!
//! ```
//! use pmc_engine::{AdjacencyList, Engine};
//!
//! // Path 1 - 2 - 3 - 4 - 5
//! let mut g = AdjacencyList::new();
//! g.add_edge(1, 2);
//! g.add_edge(2, 3);
//! g.add_edge(3, 4);
//! g.add_edge(4, 5);
//!
//! let engine = Engine::build(&g).unwrap();
//! let s = engine.bitset_of(&[2, 3]);
//! assert!(engine.is_potential_maximal_clique(&s));
//! ```

mod bit_adjacency;
mod engine;
mod label_graph;
mod pmc;
mod subgraph;
mod vertex_index;

pub use engine::{Engine, EngineBuildError};
pub use label_graph::{AdjacencyList, LabelGraph};

/// Re-exported so callers can construct and inspect subsets without a direct
/// dependency on `fixedbitset` themselves.
pub use fixedbitset::FixedBitSet;

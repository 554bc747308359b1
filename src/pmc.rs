//! The decision procedure for "is `S` a potential maximal clique of `G`?",
//! expressed entirely in terms of [`crate::subgraph`].

use fixedbitset::FixedBitSet;

use crate::bit_adjacency::BitAdjacency;
use crate::subgraph::{exterior_border, intersects, separate};

/// Bouchitté–Todinca local characterization: `S` is a PMC iff
///
/// - (P1) every component of `G[V∖S]` has an exterior border strictly
///   smaller than `S`, and
/// - (P2) every non-edge inside `S` is bridged by some component touching
///   both endpoints.
///
/// `S = V` is degenerate: `separate(V)` has no components left to violate
/// either condition, so the function vacuously returns `true` (see
/// `DESIGN.md` for why `S = ∅` is not the same case).
pub fn is_potential_maximal_clique(adj: &BitAdjacency, s: &FixedBitSet) -> bool {
    let components = separate(adj, s);
    let target = s.count_ones(..);

    if !satisfies_p1(adj, &components, target) {
        return false;
    }
    satisfies_p2(adj, s, &components)
}

fn satisfies_p1(adj: &BitAdjacency, components: &[FixedBitSet], target: usize) -> bool {
    components
        .iter()
        .all(|c| exterior_border(adj, c).count_ones(..) < target)
}

fn satisfies_p2(adj: &BitAdjacency, s: &FixedBitSet, components: &[FixedBitSet]) -> bool {
    let vertices: Vec<usize> = s.ones().collect();
    for (i, &u) in vertices.iter().enumerate() {
        for &v in &vertices[i + 1..] {
            if adj.row(u).contains(v) {
                continue;
            }
            let bridged = components
                .iter()
                .any(|c| intersects(c, adj.row(u)) && intersects(c, adj.row(v)));
            if !bridged {
                return false;
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label_graph::AdjacencyList;
    use crate::vertex_index::VertexIndex;

    fn build(edges: &[(i32, i32)], vertices: &[i32]) -> (BitAdjacency, VertexIndex<i32>) {
        let mut g = AdjacencyList::new();
        for &v in vertices {
            g.add_vertex(v);
        }
        for &(a, b) in edges {
            g.add_edge(a, b);
        }
        let index = VertexIndex::build(&g).unwrap();
        let adj = BitAdjacency::build(&g, &index);
        (adj, index)
    }

    /// Path 1-2-3-4-5: an adjacent pair is a PMC, a non-adjacent pair is not.
    #[test]
    fn path5_pmc_cases() {
        let (adj, index) = build(&[(1, 2), (2, 3), (3, 4), (4, 5)], &[]);

        let s = index.bitset_of(&[2, 3]);
        assert!(is_potential_maximal_clique(&adj, &s));

        let s = index.bitset_of(&[1, 3]);
        assert!(!is_potential_maximal_clique(&adj, &s));
    }

    /// K4 on {1,2,3,4}.
    #[test]
    fn k4_full_set_is_vacuously_pmc_but_triangle_is_not() {
        let (adj, index) = build(
            &[(1, 2), (1, 3), (1, 4), (2, 3), (2, 4), (3, 4)],
            &[],
        );

        let full = index.bitset_of(&[1, 2, 3, 4]);
        assert!(is_potential_maximal_clique(&adj, &full));

        let triangle = index.bitset_of(&[1, 2, 3]);
        assert!(!is_potential_maximal_clique(&adj, &triangle));
    }

    /// 4-cycle 1-2-3-4-1.
    #[test]
    fn c4_opposite_pair_is_not_pmc() {
        let (adj, index) = build(&[(1, 2), (2, 3), (3, 4), (4, 1)], &[]);
        let s = index.bitset_of(&[1, 3]);
        assert!(!is_potential_maximal_clique(&adj, &s));
    }

    /// V={1..5}, E={(1,2),(1,4),(2,3),(2,4),(4,5)}: {2,4} is not a PMC on its
    /// own, but adding the bridging vertex 1 makes it one.
    #[test]
    fn adding_the_bridging_vertex_turns_a_non_pmc_into_a_pmc() {
        let (adj, index) = build(
            &[(1, 2), (1, 4), (2, 3), (2, 4), (4, 5)],
            &[],
        );

        let s = index.bitset_of(&[2, 4]);
        assert!(!is_potential_maximal_clique(&adj, &s));

        let s = index.bitset_of(&[1, 2, 4]);
        assert!(is_potential_maximal_clique(&adj, &s));
    }

    /// The empty set is only vacuously a PMC when there is nothing to
    /// separate in the first place: with any vertex present, `separate(∅)`
    /// yields at least one component whose exterior border can never be
    /// smaller than `|S| = 0`.
    #[test]
    fn empty_set_is_not_pmc_of_a_nonempty_connected_graph() {
        let (adj, _index) = build(&[(1, 2), (2, 3)], &[]);
        let empty = FixedBitSet::with_capacity(adj.n());
        assert!(!is_potential_maximal_clique(&adj, &empty));
    }

    #[test]
    fn empty_set_is_pmc_of_the_empty_graph() {
        let (adj, _index) = build(&[], &[]);
        let empty = FixedBitSet::with_capacity(adj.n());
        assert!(is_potential_maximal_clique(&adj, &empty));
    }
}

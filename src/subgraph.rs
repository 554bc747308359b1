//! Set-algebraic primitives on subsets `S ⊆ V`, expressed
//! purely in terms of [`BitAdjacency`] row lookups. Every function here is a
//! pure function of `(adjacency, bitset)`, safe to call concurrently from any
//! number of threads.
//!
//! Bitset comparisons below go through `clone` + `difference_with`/
//! `intersect_with` rather than the `&`/`|`/`!` operator overloads, so that
//! this module only leans on the oldest, most stable corner of
//! `fixedbitset`'s API.

use fixedbitset::FixedBitSet;

use crate::bit_adjacency::BitAdjacency;

fn is_empty(s: &FixedBitSet) -> bool {
    s.count_ones(..) == 0
}

pub(crate) fn intersects(a: &FixedBitSet, b: &FixedBitSet) -> bool {
    let mut tmp = a.clone();
    tmp.intersect_with(b);
    !is_empty(&tmp)
}

pub(crate) fn is_subset(a: &FixedBitSet, b: &FixedBitSet) -> bool {
    let mut tmp = a.clone();
    tmp.difference_with(b);
    is_empty(&tmp)
}

/// `complement(S) = V̄ ∧ ¬S`: every vertex not in `S`.
pub fn complement(adj: &BitAdjacency, s: &FixedBitSet) -> FixedBitSet {
    let mut out = adj.universe();
    out.difference_with(s);
    out
}

/// Vertices of `S` with a neighbor outside `S`.
pub fn interior_border(adj: &BitAdjacency, s: &FixedBitSet) -> FixedBitSet {
    let outside = complement(adj, s);
    let mut out = FixedBitSet::with_capacity(adj.n());
    for v in s.ones() {
        if intersects(adj.row(v), &outside) {
            out.insert(v);
        }
    }
    out
}

/// `N(S)`: vertices outside `S` with a neighbor
/// in `S`. Equal, as a set, to `interior_border` of the complement.
pub fn exterior_border(adj: &BitAdjacency, s: &FixedBitSet) -> FixedBitSet {
    let outside = complement(adj, s);
    let mut border = FixedBitSet::with_capacity(adj.n());
    for v in s.ones() {
        if intersects(adj.row(v), &outside) {
            border.union_with(adj.row(v));
        }
    }
    border.difference_with(s);
    border
}

/// Saturates `S` in place. Adds every `v ∈ N(S)` whose neighborhood
/// is a subset of `S ∪ N(S)` **as computed before this call** — `N(S)` is
/// deliberately not recomputed after each inclusion, so this is a single pass
/// rather than a closure. See [`saturate_to_fixed_point`] for the latter.
pub fn saturate_in_place(adj: &BitAdjacency, s: &mut FixedBitSet) {
    let border = exterior_border(adj, s);
    let mut closure = s.clone();
    closure.union_with(&border);
    for v in border.ones() {
        if is_subset(adj.row(v), &closure) {
            s.insert(v);
        }
    }
}

/// Repeats [`saturate_in_place`] until a pass adds nothing, yielding the
/// closure of `S` under the "all neighbors already inside" rule. A useful
/// building block for callers that want the fixed point instead of one pass.
pub fn saturate_to_fixed_point(adj: &BitAdjacency, s: &mut FixedBitSet) {
    loop {
        let before = s.count_ones(..);
        saturate_in_place(adj, s);
        if s.count_ones(..) == before {
            break;
        }
    }
}

/// Any `v ∈ N(S)` whose neighborhood lies in
/// `S ∪ N(S)`, or `None` if none exists. Any such vertex satisfies the
/// contract; this picks the lowest-indexed one.
pub fn absorbable(adj: &BitAdjacency, s: &FixedBitSet) -> Option<usize> {
    let border = exterior_border(adj, s);
    let mut closure = s.clone();
    closure.union_with(&border);
    border.ones().find(|&v| is_subset(adj.row(v), &closure))
}

/// The connected components of `G[V∖S]`, as bit-vectors.
/// Uses an explicit work-list DFS rather than recursion to bound stack depth
/// on large graphs.
pub fn separate(adj: &BitAdjacency, s: &FixedBitSet) -> Vec<FixedBitSet> {
    let n = adj.n();
    let mut visited = s.clone();
    let mut components = Vec::new();

    for start in 0..n {
        if visited.contains(start) {
            continue;
        }
        let mut component = FixedBitSet::with_capacity(n);
        let mut stack = vec![start];
        visited.insert(start);
        component.insert(start);

        while let Some(v) = stack.pop() {
            for w in adj.row(v).ones() {
                if !visited.contains(w) {
                    visited.insert(w);
                    component.insert(w);
                    stack.push(w);
                }
            }
        }
        components.push(component);
    }
    components
}

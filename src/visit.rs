//! Graph trait family.
//!
//! The matching engine in [`algo::matching`](crate::algo::matching) is generic
//! over these traits rather than hardcoded to [`Graph`](crate::graph::Graph):
//! any adjacency structure that can enumerate its vertices, enumerate a
//! vertex's neighbors, hand back a dense `usize` index per vertex, and lend
//! out a visited-set all by itself can be matched directly, with no copy into
//! an intermediate representation.

use fixedbitset::FixedBitSet;

/// Associated node/edge identifier types, the root of the trait family.
pub trait GraphBase {
    type NodeId: Copy + PartialEq;
    type EdgeId: Copy + PartialEq;
}

impl<'a, G> GraphBase for &'a G
where
    G: GraphBase,
{
    type NodeId = G::NodeId;
    type EdgeId = G::EdgeId;
}

/// Marker for reference-like graph handles that are cheap to copy around.
pub trait GraphRef: Copy + GraphBase {}

impl<'a, G> GraphRef for &'a G where G: GraphBase {}

/// A dense mapping between a graph's node identifiers and `0..node_bound()`.
pub trait NodeIndexable: GraphBase {
    /// An upper bound on the number of node indices in use.
    fn node_bound(&self) -> usize;
    /// Convert `a` to a dense index in `0..self.node_bound()`.
    fn to_index(&self, a: Self::NodeId) -> usize;
    /// Convert a dense index back to a node identifier.
    fn from_index(&self, i: usize) -> Self::NodeId;
}

impl<'a, G> NodeIndexable for &'a G
where
    G: NodeIndexable,
{
    fn node_bound(&self) -> usize {
        (**self).node_bound()
    }
    fn to_index(&self, a: Self::NodeId) -> usize {
        (**self).to_index(a)
    }
    fn from_index(&self, i: usize) -> Self::NodeId {
        (**self).from_index(i)
    }
}

/// A [`NodeIndexable`] whose indices are exactly `0..node_count()`, with no
/// holes. The matching engine relies on this to size its per-phase vectors.
pub trait NodeCompactIndexable: NodeIndexable {}

impl<'a, G> NodeCompactIndexable for &'a G where G: NodeCompactIndexable {}

/// Vertex enumeration.
pub trait IntoNodeIdentifiers: GraphRef {
    type NodeIdentifiers: Iterator<Item = Self::NodeId>;
    fn node_identifiers(self) -> Self::NodeIdentifiers;
    fn node_count(&self) -> usize;
}

impl<'a, G> IntoNodeIdentifiers for &'a G
where
    G: IntoNodeIdentifiers,
{
    type NodeIdentifiers = G::NodeIdentifiers;
    fn node_identifiers(self) -> Self::NodeIdentifiers {
        (*self).node_identifiers()
    }
    fn node_count(&self) -> usize {
        (**self).node_count()
    }
}

/// Neighbor enumeration. For an undirected adapter this yields each neighbor
/// once per incident edge; a concrete adapter that stores parallel edges is
/// free to yield the same neighbor more than once, since callers are expected
/// to treat parallel edges as one (spec.md, "Non-goals").
pub trait IntoNeighbors: GraphRef {
    type Neighbors: Iterator<Item = Self::NodeId>;
    fn neighbors(self, a: Self::NodeId) -> Self::Neighbors;
}

impl<'a, G> IntoNeighbors for &'a G
where
    G: IntoNeighbors,
{
    type Neighbors = G::Neighbors;
    fn neighbors(self, a: Self::NodeId) -> Self::Neighbors {
        (*self).neighbors(a)
    }
}

/// A set of visited nodes, produced fresh by [`Visitable::visit_map`].
pub trait VisitMap<N> {
    /// Mark `a` visited; returns `true` if this is the first time.
    fn visit(&mut self, a: N) -> bool;
    fn is_visited(&self, a: &N) -> bool;
}

impl VisitMap<usize> for FixedBitSet {
    fn visit(&mut self, a: usize) -> bool {
        let present = self.contains(a);
        self.insert(a);
        !present
    }
    fn is_visited(&self, a: &usize) -> bool {
        self.contains(*a)
    }
}

/// A graph that can produce a fresh visited-set sized to its own vertex count.
pub trait Visitable: GraphBase {
    type Map: VisitMap<Self::NodeId>;
    fn visit_map(&self) -> Self::Map;
    fn reset_map(&self, map: &mut Self::Map);
}

impl<'a, G> Visitable for &'a G
where
    G: Visitable,
{
    type Map = G::Map;
    fn visit_map(&self) -> Self::Map {
        (**self).visit_map()
    }
    fn reset_map(&self, map: &mut Self::Map) {
        (**self).reset_map(map)
    }
}

//! `Graph<N, E, Ty, Ix>` is an adjacency-list graph, the one concrete graph
//! type this crate ships. The matching engine never names it directly — it
//! is generic over the traits in [`crate::visit`] — but tests and doctests
//! need something concrete to build and run against.

use std::fmt;
use std::marker::PhantomData;

use crate::visit::{
    GraphBase, IntoNeighbors, IntoNodeIdentifiers, NodeCompactIndexable, NodeIndexable, Visitable,
};

/// The default index type, `u32`, to keep graphs compact in the common case.
pub type DefaultIx = u32;

/// The unsigned integer type used for node indices.
///
/// # Safety
/// `new`, `index`, and `max` must agree: `Self::new(i).index() == i` for all
/// `i <= Self::max().index()`.
pub unsafe trait IndexType: Copy + Default + Ord + fmt::Debug + 'static {
    fn new(x: usize) -> Self;
    fn index(&self) -> usize;
    fn max() -> Self;
}

unsafe impl IndexType for usize {
    fn new(x: usize) -> Self {
        x
    }
    fn index(&self) -> usize {
        *self
    }
    fn max() -> Self {
        usize::MAX
    }
}

unsafe impl IndexType for u32 {
    fn new(x: usize) -> Self {
        x as u32
    }
    fn index(&self) -> usize {
        *self as usize
    }
    fn max() -> Self {
        u32::MAX
    }
}

/// Marker type for a directed graph.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Directed {}
/// Marker type for an undirected graph.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Undirected {}

/// A marker trait for the directedness of a [`Graph`].
pub trait EdgeType {
    fn is_directed() -> bool;
}

impl EdgeType for Directed {
    fn is_directed() -> bool {
        true
    }
}

impl EdgeType for Undirected {
    fn is_directed() -> bool {
        false
    }
}

/// A node identifier, a dense index into [`Graph`]'s node storage.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeIndex<Ix = DefaultIx>(Ix);

impl<Ix: IndexType> NodeIndex<Ix> {
    pub fn new(x: usize) -> Self {
        NodeIndex(IndexType::new(x))
    }
    pub fn index(self) -> usize {
        self.0.index()
    }
}

impl<Ix: IndexType> fmt::Debug for NodeIndex<Ix> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "NodeIndex({})", self.index())
    }
}

struct Node<N> {
    weight: N,
    neighbors: Vec<usize>,
}

/// An adjacency-list graph over node weights `N` and edge weights `E`,
/// directed or undirected per `Ty`, indexed by `Ix`.
///
/// Parallel edges are permitted in storage (`add_edge` never checks for an
/// existing edge) but the matching engine treats them as a single edge
/// between two vertices, per spec.md's multi-edge Non-goal.
pub struct Graph<N, E, Ty = Undirected, Ix = DefaultIx> {
    nodes: Vec<Node<N>>,
    edge_weights: Vec<E>,
    ty: PhantomData<Ty>,
    ix: PhantomData<Ix>,
}

/// A `Graph` with undirected edge type.
pub type UnGraph<N, E, Ix = DefaultIx> = Graph<N, E, Undirected, Ix>;
/// A `Graph` with directed edge type.
pub type DiGraph<N, E, Ix = DefaultIx> = Graph<N, E, Directed, Ix>;

impl<N, E, Ty: EdgeType, Ix: IndexType> Graph<N, E, Ty, Ix> {
    pub fn new() -> Self {
        Graph {
            nodes: Vec::new(),
            edge_weights: Vec::new(),
            ty: PhantomData,
            ix: PhantomData,
        }
    }

    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Graph {
            nodes: Vec::with_capacity(nodes),
            edge_weights: Vec::with_capacity(edges),
            ty: PhantomData,
            ix: PhantomData,
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_weights.len()
    }

    pub fn is_directed(&self) -> bool {
        Ty::is_directed()
    }

    pub fn add_node(&mut self, weight: N) -> NodeIndex<Ix> {
        let index = self.nodes.len();
        self.nodes.push(Node {
            weight,
            neighbors: Vec::new(),
        });
        NodeIndex::new(index)
    }

    /// Add an edge `a -- b` (or `a -> b` if `Ty = Directed`). Does not check
    /// for an existing parallel edge between the same endpoints.
    pub fn add_edge(&mut self, a: NodeIndex<Ix>, b: NodeIndex<Ix>, weight: E) {
        self.edge_weights.push(weight);
        self.nodes[a.index()].neighbors.push(b.index());
        if !Ty::is_directed() && a != b {
            self.nodes[b.index()].neighbors.push(a.index());
        }
    }

    pub fn node_weight(&self, a: NodeIndex<Ix>) -> Option<&N> {
        self.nodes.get(a.index()).map(|n| &n.weight)
    }
}

impl<N, E, Ty: EdgeType, Ix: IndexType> Default for Graph<N, E, Ty, Ix> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N, E, Ty: EdgeType, Ix: IndexType> GraphBase for Graph<N, E, Ty, Ix> {
    type NodeId = NodeIndex<Ix>;
    type EdgeId = usize;
}

impl<N, E, Ty: EdgeType, Ix: IndexType> NodeIndexable for Graph<N, E, Ty, Ix> {
    fn node_bound(&self) -> usize {
        self.node_count()
    }
    fn to_index(&self, a: Self::NodeId) -> usize {
        a.index()
    }
    fn from_index(&self, i: usize) -> Self::NodeId {
        NodeIndex::new(i)
    }
}

impl<N, E, Ty: EdgeType, Ix: IndexType> NodeCompactIndexable for Graph<N, E, Ty, Ix> {}

impl<'a, N, E, Ty: EdgeType, Ix: IndexType> IntoNeighbors for &'a Graph<N, E, Ty, Ix> {
    type Neighbors = std::iter::Map<std::iter::Copied<std::slice::Iter<'a, usize>>, fn(usize) -> NodeIndex<Ix>>;
    fn neighbors(self, a: Self::NodeId) -> Self::Neighbors {
        self.nodes[a.index()]
            .neighbors
            .iter()
            .copied()
            .map(NodeIndex::new)
    }
}

impl<'a, N, E, Ty: EdgeType, Ix: IndexType> IntoNodeIdentifiers for &'a Graph<N, E, Ty, Ix> {
    type NodeIdentifiers = std::iter::Map<std::ops::Range<usize>, fn(usize) -> NodeIndex<Ix>>;
    fn node_identifiers(self) -> Self::NodeIdentifiers {
        (0..self.nodes.len()).map(NodeIndex::new)
    }
    fn node_count(&self) -> usize {
        Graph::node_count(self)
    }
}

impl<N, E, Ty: EdgeType, Ix: IndexType> Visitable for Graph<N, E, Ty, Ix> {
    type Map = fixedbitset::FixedBitSet;
    fn visit_map(&self) -> Self::Map {
        fixedbitset::FixedBitSet::with_capacity(self.node_count())
    }
    fn reset_map(&self, map: &mut Self::Map) {
        map.clear();
        map.grow(self.node_count());
    }
}

impl<Ix> crate::visit::VisitMap<NodeIndex<Ix>> for fixedbitset::FixedBitSet
where
    Ix: IndexType,
{
    fn visit(&mut self, a: NodeIndex<Ix>) -> bool {
        let present = self.contains(a.index());
        self.insert(a.index());
        !present
    }
    fn is_visited(&self, a: &NodeIndex<Ix>) -> bool {
        self.contains(a.index())
    }
}

//! **micali-vazirani** computes a maximum cardinality matching of a general
//! undirected graph.
//!
//! The entry point is [`algo::matching::maximum_matching`], which runs the
//! Micali-Vazirani algorithm (Peterson & Loui's presentation) in
//! `O(sqrt(|V|) * |E|)`. [`graph::Graph`] is the one concrete adjacency-list
//! graph type this crate ships, for callers who don't already have their own
//! graph type; the algorithm itself is generic over the [`visit`] trait
//! family, so it runs directly against any adapter that implements them.
//!
//! ```
//! use micali_vazirani::algo::matching::maximum_matching;
//! use micali_vazirani::graph::UnGraph;
//!
//! let mut g: UnGraph<(), ()> = UnGraph::new();
//! let a = g.add_node(());
//! let b = g.add_node(());
//! let c = g.add_node(());
//! g.add_edge(a, b, ());
//! g.add_edge(b, c, ());
//!
//! let matching = maximum_matching(&g);
//! assert_eq!(matching.len(), 1);
//! ```

pub mod algo;
pub mod graph;
pub mod visit;

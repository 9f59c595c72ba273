//! Test-only helpers: graph builders and an independent matching oracle.
//!
//! None of this is shipped library API — it exists purely to give
//! `tests/matching.rs` fixtures and a second, independently-implemented
//! algorithm to cross-check cardinalities against.

#![allow(dead_code)]

use micali_vazirani::graph::UnGraph;
use micali_vazirani::visit::{IntoNeighbors, IntoNodeIdentifiers};

/// The Petersen graph: five outer vertices in a 5-cycle, five inner
/// vertices in a pentagram, joined by five spokes. Famously has a perfect
/// matching despite not being bipartite or having a Hamiltonian cycle.
pub fn petersen() -> UnGraph<(), ()> {
    let mut g = UnGraph::new();
    let outer: Vec<_> = (0..5).map(|_| g.add_node(())).collect();
    let inner: Vec<_> = (0..5).map(|_| g.add_node(())).collect();
    for i in 0..5 {
        g.add_edge(outer[i], outer[(i + 1) % 5], ());
        g.add_edge(outer[i], inner[i], ());
        g.add_edge(inner[i], inner[(i + 2) % 5], ());
    }
    g
}

/// Two disjoint 5-cycles (C5) joined by a single edge between one vertex of
/// each — the spec.md §8 "two odd cycles joined by an edge" scenario.
pub fn two_odd_cycles_joined() -> UnGraph<(), ()> {
    let mut g = UnGraph::new();
    let a: Vec<_> = (0..5).map(|_| g.add_node(())).collect();
    let b: Vec<_> = (0..5).map(|_| g.add_node(())).collect();
    for i in 0..5 {
        g.add_edge(a[i], a[(i + 1) % 5], ());
        g.add_edge(b[i], b[(i + 1) % 5], ());
    }
    g.add_edge(a[0], b[0], ());
    g
}

/// A single 5-vertex blossom hanging off a stem of unmatched path edges —
/// the spec.md §8 "single 5-blossom with stem" scenario: a C5 with one extra
/// pendant path attached to one of its vertices.
pub fn blossom_with_stem(stem_len: usize) -> UnGraph<(), ()> {
    let mut g = UnGraph::new();
    let cycle: Vec<_> = (0..5).map(|_| g.add_node(())).collect();
    for i in 0..5 {
        g.add_edge(cycle[i], cycle[(i + 1) % 5], ());
    }
    let mut prev = cycle[0];
    for _ in 0..stem_len {
        let next = g.add_node(());
        g.add_edge(prev, next, ());
        prev = next;
    }
    g
}

/// An Erdos-Renyi random undirected graph: every unordered pair of the
/// `order` vertices is joined independently with probability `p`. Mirrors
/// the plain `rand::random` style of generating test graphs.
pub fn erdos_renyi(order: usize, p: f64) -> UnGraph<(), ()> {
    let mut g = UnGraph::with_capacity(order, 0);
    let nodes: Vec<_> = (0..order).map(|_| g.add_node(())).collect();
    for u in 0..order {
        for v in (u + 1)..order {
            if rand::random::<f64>() < p {
                g.add_edge(nodes[u], nodes[v], ());
            }
        }
    }
    g
}

pub fn edge_list(g: &UnGraph<(), ()>) -> Vec<(usize, usize)> {
    let mut edges = Vec::new();
    let mut seen = std::collections::HashSet::new();
    for u in g.node_identifiers() {
        for v in g.neighbors(u) {
            let (a, b) = (u.index(), v.index());
            let key = if a <= b { (a, b) } else { (b, a) };
            if seen.insert(key) {
                edges.push(key);
            }
        }
    }
    edges
}

/// An independent `O(|V|^3)` maximum-cardinality-matching oracle (Edmonds'
/// blossom algorithm over an explicit adjacency list), used only to
/// cross-check the matching size the engine under test produces. This is
/// not a restoration of any shipped code — the teacher's own Gabow-based
/// `maximum_matching` this crate replaced never survived the rework, so
/// this is a fresh, compact implementation of a different classical
/// blossom algorithm, written for this purpose only (see DESIGN.md).
pub struct Oracle {
    adj: Vec<Vec<usize>>,
}

const NONE: usize = usize::MAX;

impl Oracle {
    pub fn new(n: usize, edges: &[(usize, usize)]) -> Self {
        let mut adj = vec![Vec::new(); n];
        for &(u, v) in edges {
            if u != v {
                adj[u].push(v);
                adj[v].push(u);
            }
        }
        Oracle { adj }
    }

    pub fn from_graph(g: &UnGraph<(), ()>) -> Self {
        Oracle::new(g.node_count(), &edge_list(g))
    }

    pub fn max_matching_size(&self) -> usize {
        let n = self.adj.len();
        let mut mate = vec![NONE; n];
        for root in 0..n {
            if mate[root] == NONE {
                if let Some(exposed) = self.find_augmenting_path(root, &mate) {
                    self.flip_along(exposed, &mut mate);
                }
            }
        }
        mate.iter().filter(|&&m| m != NONE).count() / 2
    }

    fn lca(&self, mut x: usize, mut y: usize, mate: &[usize], parent: &[usize], base: &[usize]) -> usize {
        let n = self.adj.len();
        let mut seen = vec![false; n];
        loop {
            x = base[x];
            seen[x] = true;
            if mate[x] == NONE {
                break;
            }
            x = parent[mate[x]];
        }
        loop {
            y = base[y];
            if seen[y] {
                return y;
            }
            y = parent[mate[y]];
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn mark_path(
        &self,
        mut v: usize,
        lca: usize,
        mut child: usize,
        mate: &[usize],
        parent: &mut [usize],
        base: &[usize],
        in_blossom: &mut [bool],
    ) {
        while base[v] != lca {
            in_blossom[base[v]] = true;
            in_blossom[base[mate[v]]] = true;
            parent[v] = child;
            child = mate[v];
            v = parent[mate[v]];
        }
    }

    /// Returns the exposed vertex an augmenting path from `root` reaches, if
    /// any; `parent` links (captured via the returned closure-free state)
    /// are reconstructed by replaying the search once more in `flip_along`.
    fn find_augmenting_path(&self, root: usize, mate: &[usize]) -> Option<(Vec<usize>, usize)> {
        let n = self.adj.len();
        let mut parent = vec![NONE; n];
        let mut base: Vec<usize> = (0..n).collect();
        let mut visited = vec![false; n];
        let mut queue = std::collections::VecDeque::new();

        visited[root] = true;
        queue.push_back(root);

        while let Some(v) = queue.pop_front() {
            for &to in &self.adj[v] {
                if base[v] == base[to] || mate[v] == to {
                    continue;
                }
                if to == root || (mate[to] != NONE && parent[mate[to]] != NONE) {
                    let lca = self.lca(v, to, mate, &parent, &base);
                    let mut in_blossom = vec![false; n];
                    self.mark_path(v, lca, to, mate, &mut parent, &base, &mut in_blossom);
                    self.mark_path(to, lca, v, mate, &mut parent, &base, &mut in_blossom);
                    for i in 0..n {
                        if in_blossom[base[i]] {
                            base[i] = lca;
                            if !visited[i] {
                                visited[i] = true;
                                queue.push_back(i);
                            }
                        }
                    }
                } else if parent[to] == NONE {
                    parent[to] = v;
                    if mate[to] == NONE {
                        return Some((parent, to));
                    }
                    visited[mate[to]] = true;
                    queue.push_back(mate[to]);
                }
            }
        }
        None
    }

    fn flip_along(&self, (parent, mut u): (Vec<usize>, usize), mate: &mut [usize]) {
        while u != NONE {
            let pv = parent[u];
            let ppv = mate[pv];
            mate[u] = pv;
            mate[pv] = u;
            u = ppv;
        }
    }
}

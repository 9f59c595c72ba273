//! Maximum cardinality matching in general undirected graphs.
//!
//! [`maximum_matching`] runs the Micali-Vazirani algorithm: repeated phases
//! of a level breadth-first search that classifies every edge as a tree edge
//! or a bridge, a double depth-first search that closes bridges into
//! "blooms" (generalized blossoms) when they do not yet lead to an
//! augmenting path, and — once a bridge's two depth-first walkers both reach
//! an exposed vertex — path reconstruction through any blooms traversed,
//! followed by augmentation and a count-decay erasure pass that retires
//! every vertex no longer reachable by a shorter alternating path. Each phase
//! grows the matching by a set of vertex-disjoint augmenting paths of equal,
//! shortest length; the matching is maximum once a phase finds none.
//!
//! [`greedy_matching`] is an independent, much cheaper heuristic: a single
//! non-backtracking depth-first sweep that matches greedily. It is not used
//! to seed [`maximum_matching`] — each call starts from the empty matching.

use std::collections::{HashSet, VecDeque};

use crate::visit::{GraphBase, IntoNeighbors, IntoNodeIdentifiers, NodeCompactIndexable, NodeIndexable};

// ---------------------------------------------------------------------
// Result type
// ---------------------------------------------------------------------

/// A matching: a set of vertex-disjoint edges of `graph`.
pub struct Matching<G: GraphBase> {
    graph: G,
    mate: Vec<Option<G::NodeId>>,
    n_edges: usize,
}

impl<G> Matching<G>
where
    G: NodeIndexable,
{
    fn new(graph: G, mate: Vec<Option<G::NodeId>>) -> Self {
        let n_edges = mate.iter().filter(|m| m.is_some()).count() / 2;
        Matching {
            graph,
            mate,
            n_edges,
        }
    }

    /// The vertex matched to `node`, if any.
    pub fn mate(&self, node: G::NodeId) -> Option<G::NodeId> {
        self.mate[self.graph.to_index(node)]
    }

    /// `true` if `node` is matched.
    pub fn contains_node(&self, node: G::NodeId) -> bool {
        self.mate(node).is_some()
    }

    /// `true` if `a -- b` is an edge of the matching.
    pub fn contains_edge(&self, a: G::NodeId, b: G::NodeId) -> bool {
        self.mate(a) == Some(b)
    }

    /// The number of matched edges.
    pub fn len(&self) -> usize {
        self.n_edges
    }

    pub fn is_empty(&self) -> bool {
        self.n_edges == 0
    }

    /// `true` if every vertex is matched.
    pub fn is_perfect(&self) -> bool {
        self.mate.iter().all(Option::is_some)
    }

    /// Iterate over the matched vertices.
    pub fn nodes(&self) -> impl Iterator<Item = G::NodeId> + '_ {
        self.mate
            .iter()
            .enumerate()
            .filter(|(_, m)| m.is_some())
            .map(move |(i, _)| self.graph.from_index(i))
    }

    /// Iterate over the matched edges, each endpoint pair reported once.
    pub fn edges(&self) -> impl Iterator<Item = (G::NodeId, G::NodeId)> + '_ {
        self.mate
            .iter()
            .enumerate()
            .filter_map(move |(i, m)| m.map(|u| (i, self.graph.to_index(u))))
            .filter(|(i, j)| i < j)
            .map(move |(i, j)| (self.graph.from_index(i), self.graph.from_index(j)))
    }
}

// ---------------------------------------------------------------------
// Greedy heuristic (independent of the exact algorithm below)
// ---------------------------------------------------------------------

/// A linear-time non-backtracking-DFS greedy matching. Not necessarily
/// maximum; useful on its own as a cheap heuristic.
pub fn greedy_matching<G>(graph: G) -> Matching<G>
where
    G: NodeCompactIndexable + IntoNodeIdentifiers + IntoNeighbors,
{
    let n = graph.node_bound();
    let mut mate: Vec<Option<usize>> = vec![None; n];
    let mut visited = vec![false; n];
    for start in graph.node_identifiers() {
        let s = graph.to_index(start);
        if visited[s] {
            continue;
        }
        greedy_dfs(graph, s, &mut visited, &mut mate);
    }
    let out: Vec<Option<G::NodeId>> = mate
        .into_iter()
        .map(|m| m.map(|i| graph.from_index(i)))
        .collect();
    Matching::new(graph, out)
}

fn greedy_dfs<G>(graph: G, v: usize, visited: &mut [bool], mate: &mut [Option<usize>])
where
    G: NodeIndexable + IntoNeighbors,
{
    visited[v] = true;
    for u in graph.neighbors(graph.from_index(v)) {
        let u = graph.to_index(u);
        if visited[u] {
            continue;
        }
        if mate[v].is_none() && mate[u].is_none() {
            mate[v] = Some(u);
            mate[u] = Some(v);
        }
        if !visited[u] {
            greedy_dfs(graph, u, visited, mate);
        }
    }
}

// ---------------------------------------------------------------------
// Micali-Vazirani engine
// ---------------------------------------------------------------------

type VIdx = usize;
type BloomId = usize;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mark {
    Unmarked,
    Left,
    Right,
}

/// A bloom: the generalized blossom this engine closes over a bridge that
/// does not (yet) lead to an augmenting path. `peaks` are the bridge
/// endpoints that founded it; `base` is the outermost vertex the bloom
/// encloses, i.e. the fixed point of repeatedly following `bloom -> base`.
#[derive(Clone, Copy, Debug)]
struct Bloom {
    peaks: (VIdx, VIdx),
    base: VIdx,
}

#[derive(Clone, Debug)]
struct VertexState {
    even_level: Option<usize>,
    odd_level: Option<usize>,
    bloom: Option<BloomId>,
    predecessors: Vec<VIdx>,
    successors: Vec<VIdx>,
    anomalies: Vec<VIdx>,
    count: usize,
    erased: bool,
    visited: bool,
    mark: Mark,
    parent: Option<VIdx>,
}

impl Default for VertexState {
    fn default() -> Self {
        VertexState {
            even_level: None,
            odd_level: None,
            bloom: None,
            predecessors: Vec::new(),
            successors: Vec::new(),
            anomalies: Vec::new(),
            count: 0,
            erased: false,
            visited: false,
            mark: Mark::Unmarked,
            parent: None,
        }
    }
}

impl VertexState {
    fn level(&self) -> Option<usize> {
        match (self.even_level, self.odd_level) {
            (Some(e), Some(o)) => Some(e.min(o)),
            (Some(e), None) => Some(e),
            (None, Some(o)) => Some(o),
            (None, None) => None,
        }
    }
}

fn edge_key(a: VIdx, b: VIdx) -> (VIdx, VIdx) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// One phase of the search: grows the matching by a maximal set of
/// vertex-disjoint shortest augmenting paths, or finds none.
struct Phase<G> {
    graph: G,
    n: usize,
    mate: Vec<Option<VIdx>>,
    vs: Vec<VertexState>,
    blooms: Vec<Bloom>,
    candidates: Vec<Vec<VIdx>>,
    bridges: Vec<Vec<(VIdx, VIdx)>>,
    bridge_seen: HashSet<(usize, (VIdx, VIdx))>,
    used_edges: HashSet<(VIdx, VIdx)>,
    visited_edges: HashSet<(VIdx, VIdx)>,
    augmented: bool,
}

impl<G> Phase<G>
where
    G: NodeCompactIndexable + IntoNeighbors,
{
    fn new(graph: G, n: usize, mate: Vec<Option<VIdx>>) -> Self {
        Phase {
            graph,
            n,
            mate,
            vs: vec![VertexState::default(); n],
            blooms: Vec::new(),
            candidates: Vec::new(),
            bridges: Vec::new(),
            bridge_seen: HashSet::new(),
            used_edges: HashSet::new(),
            visited_edges: HashSet::new(),
            augmented: false,
        }
    }

    fn neighbor_indices(&self, v: VIdx) -> Vec<VIdx> {
        let node = self.graph.from_index(v);
        self.graph
            .neighbors(node)
            .map(|u| self.graph.to_index(u))
            .filter(|&u| u != v)
            .collect()
    }

    fn level_of(&self, v: VIdx) -> usize {
        self.vs[v]
            .level()
            .expect("find_path/open_bloom only visit leveled vertices")
    }

    fn push_candidate(&mut self, level: usize, v: VIdx) {
        while self.candidates.len() <= level {
            self.candidates.push(Vec::new());
        }
        self.candidates[level].push(v);
    }

    fn ensure_bridge_level(&mut self, level: usize) {
        while self.bridges.len() <= level {
            self.bridges.push(Vec::new());
        }
    }

    fn add_bridge(&mut self, level: usize, s: VIdx, t: VIdx) {
        self.ensure_bridge_level(level);
        if !self.bridge_seen.insert((level, edge_key(s, t))) {
            return;
        }
        self.bridges[level].push((s, t));
    }

    fn is_used(&self, a: VIdx, b: VIdx) -> bool {
        self.used_edges.contains(&edge_key(a, b))
    }

    fn mark_used(&mut self, a: VIdx, b: VIdx) {
        self.used_edges.insert(edge_key(a, b));
    }

    /// `base*(v)`: follow the bloom chain out to the outermost enclosing
    /// base. A bloom never encloses its own base (spec.md §7 invariant),
    /// so this terminates.
    fn base_star(&self, v: VIdx) -> VIdx {
        let mut cur = v;
        let mut steps = 0;
        while let Some(b) = self.vs[cur].bloom {
            debug_assert!(steps <= self.n, "bloom chain does not terminate");
            steps += 1;
            cur = self.blooms[b].base;
        }
        cur
    }

    // -- 4.3 level BFS -------------------------------------------------

    fn run(&mut self) -> bool {
        for v in 0..self.n {
            if self.mate[v].is_none() {
                self.vs[v].even_level = Some(0);
                self.push_candidate(0, v);
            }
        }
        let mut i = 0;
        loop {
            if i >= self.candidates.len() || self.candidates[i].is_empty() {
                break;
            }
            self.ensure_bridge_level(i);
            if i % 2 == 0 {
                self.scan_even_level(i);
            } else {
                self.scan_odd_level(i);
            }
            let mut idx = 0;
            while idx < self.bridges[i].len() {
                let (s, t) = self.bridges[i][idx];
                idx += 1;
                if self.vs[s].erased || self.vs[t].erased {
                    continue;
                }
                if self.augment_blossom(s, t, i) {
                    self.augmented = true;
                }
            }
            if self.augmented {
                break;
            }
            i += 1;
        }
        self.augmented
    }

    fn scan_even_level(&mut self, i: usize) {
        let verts = self.candidates[i].clone();
        for v in verts {
            if self.vs[v].erased {
                continue;
            }
            let mut seen = HashSet::new();
            for u in self.neighbor_indices(v) {
                if !seen.insert(u) {
                    continue;
                }
                if self.vs[u].erased || self.mate[v] == Some(u) {
                    continue;
                }
                if let Some(eu) = self.vs[u].even_level {
                    let lvl = (eu + i) / 2;
                    self.add_bridge(lvl, u, v);
                    continue;
                }
                if self.vs[u].odd_level.is_none() {
                    self.vs[u].odd_level = Some(i + 1);
                }
                if self.vs[u].odd_level == Some(i + 1) {
                    self.vs[u].predecessors.push(v);
                    self.vs[v].successors.push(u);
                    self.vs[u].count += 1;
                    self.push_candidate(i + 1, u);
                } else if let Some(ou) = self.vs[u].odd_level {
                    if ou < i {
                        self.vs[u].anomalies.push(v);
                    }
                }
            }
        }
    }

    fn scan_odd_level(&mut self, i: usize) {
        let verts = self.candidates[i].clone();
        for v in verts {
            if self.vs[v].erased || self.vs[v].bloom.is_some() {
                continue;
            }
            let u = match self.mate[v] {
                Some(u) => u,
                None => continue,
            };
            if let Some(ou) = self.vs[u].odd_level {
                let lvl = (ou + i) / 2;
                self.add_bridge(lvl, u, v);
            } else {
                self.vs[u].predecessors = vec![v];
                self.vs[v].successors.push(u);
                self.vs[u].count = 1;
                self.vs[u].even_level = Some(i + 1);
                self.push_candidate(i + 1, u);
            }
        }
    }

    // -- 4.4 double DFS / bloom formation -------------------------------

    fn augment_blossom(&mut self, s: VIdx, t: VIdx, i: usize) -> bool {
        let mut bloom_nodes = Vec::new();
        let base_l = self.base_star(s);
        let base_r = self.base_star(t);
        if base_l == base_r {
            return false;
        }
        if self.vs[s].bloom.is_some() {
            self.vs[base_l].parent = Some(s);
        }
        if self.vs[t].bloom.is_some() {
            self.vs[base_r].parent = Some(t);
        }
        self.vs[base_l].mark = Mark::Left;
        self.vs[base_r].mark = Mark::Right;
        bloom_nodes.push(base_l);
        bloom_nodes.push(base_r);
        let mut v_l = Some(base_l);
        let mut v_r = Some(base_r);
        let mut barrier = base_r;
        let mut dcv: Option<VIdx> = None;

        loop {
            // Defensive early exit, reproduced verbatim from the reference
            // (spec.md §9 open question): either walker can go dead — no
            // forward predecessor and no parent to retreat to — without the
            // two trees ever colliding. Bail out with no bloom rather than
            // treat whatever vertex is left as a deepest common vertex.
            let (vl, vr) = match (v_l, v_r) {
                (Some(vl), Some(vr)) => (vl, vr),
                _ => return false,
            };
            if self.mate[vl].is_none() && self.mate[vr].is_none() {
                let path_l = self.find_path(s, vl, None);
                let path_r = self.find_path(t, vr, None);
                let joined = connect_path(path_l, path_r, s, t);
                self.link_parents(&joined);
                self.augment_matching(vl, vr);
                self.erase_path(&joined);
                return true;
            }
            let level_l = self.vs[vl].level().unwrap_or(0);
            let level_r = self.vs[vr].level().unwrap_or(0);
            let bloom_found = if level_l >= level_r {
                self.left_dfs_step(s, &mut v_l, vr, &mut bloom_nodes, &mut dcv)
            } else {
                self.right_dfs_step(&mut v_l, &mut v_r, &mut barrier, &mut bloom_nodes, &mut dcv)
            };
            if bloom_found {
                break;
            }
        }

        // The loop above can only break via `left_dfs_step` reporting a
        // collision; if the two trees genuinely never intersected, `dcv` is
        // still `None` here. Reproduce the guarded early return rather than
        // synthesizing a base from whichever vertex the left walker happens
        // to be standing on (spec.md §9).
        let base = match dcv {
            Some(d) => d,
            None => return false,
        };
        self.vs[base].mark = Mark::Unmarked;
        let bloom_id = self.blooms.len();
        self.blooms.push(Bloom {
            peaks: (s, t),
            base,
        });
        for v in bloom_nodes {
            if self.vs[v].mark == Mark::Unmarked || self.vs[v].bloom.is_some() {
                continue;
            }
            let lvl = self.vs[v].level().unwrap();
            if lvl % 2 == 0 {
                self.vs[v].odd_level = Some(2 * i + 1 - self.vs[v].even_level.unwrap());
                self.vs[v].bloom = Some(bloom_id);
            } else {
                self.vs[v].even_level = Some(2 * i + 1 - self.vs[v].odd_level.unwrap());
                self.vs[v].bloom = Some(bloom_id);
                let new_level = self.vs[v].even_level.unwrap();
                self.push_candidate(new_level, v);
                let anomalies = std::mem::take(&mut self.vs[v].anomalies);
                for z in anomalies {
                    if self.vs[z].erased {
                        continue;
                    }
                    if let Some(ez) = self.vs[z].even_level {
                        let lvl2 = (new_level + ez) / 2;
                        self.mark_used(v, z);
                        self.add_bridge(lvl2, v, z);
                    }
                }
            }
        }
        false
    }

    /// One step of the left-hand walker. Returns `true` exactly when it has
    /// backtracked all the way to `s` with no further forward move — the
    /// signal that the bridge closes into a bloom rather than an augmenting
    /// path (only the left walker ever reports this; see DESIGN.md).
    fn left_dfs_step(
        &mut self,
        s: VIdx,
        v_l: &mut Option<VIdx>,
        v_r: VIdx,
        bloom_nodes: &mut Vec<VIdx>,
        dcv: &mut Option<VIdx>,
    ) -> bool {
        let cur = v_l.expect("augment_blossom steps only while both walkers are alive");
        let preds = self.vs[cur].predecessors.clone();
        for u_raw in preds {
            if self.is_used(cur, u_raw) || self.vs[u_raw].erased {
                continue;
            }
            self.mark_used(cur, u_raw);
            let u = if self.vs[u_raw].bloom.is_some() {
                self.base_star(u_raw)
            } else {
                u_raw
            };
            if self.vs[u].mark == Mark::Unmarked {
                self.vs[u].mark = Mark::Left;
                self.vs[u].parent = Some(cur);
                *v_l = Some(u);
                bloom_nodes.push(u);
                return false;
            } else if u == v_r {
                *dcv = Some(u);
            }
        }
        if cur == s {
            return true;
        }
        // No forward move and not back at `s`: retreat to the DFS-tree
        // parent, which is `None` exactly when this walker has gone dead
        // (the defensive early exit in `augment_blossom` catches that on
        // the next iteration).
        *v_l = self.vs[cur].parent;
        false
    }

    /// One step of the right-hand walker. Never itself reports "bloom
    /// found" (see `left_dfs_step`); its job is to locate the deepest
    /// common vertex and, via the barrier, force the left walker to keep
    /// retreating until it reaches `s`.
    fn right_dfs_step(
        &mut self,
        v_l: &mut Option<VIdx>,
        v_r: &mut Option<VIdx>,
        barrier: &mut VIdx,
        bloom_nodes: &mut Vec<VIdx>,
        dcv: &mut Option<VIdx>,
    ) -> bool {
        let cur = v_r.expect("augment_blossom steps only while both walkers are alive");
        let cur_l = v_l.expect("augment_blossom steps only while both walkers are alive");
        let preds = self.vs[cur].predecessors.clone();
        for u_raw in preds {
            if self.is_used(cur, u_raw) || self.vs[u_raw].erased {
                continue;
            }
            self.mark_used(cur, u_raw);
            let u = if self.vs[u_raw].bloom.is_some() {
                self.base_star(u_raw)
            } else {
                u_raw
            };
            if self.vs[u].mark == Mark::Unmarked {
                self.vs[u].mark = Mark::Right;
                self.vs[u].parent = Some(cur);
                *v_r = Some(u);
                bloom_nodes.push(u);
                return false;
            } else if u == cur_l {
                *dcv = Some(u);
            }
        }
        if cur == *barrier {
            match *dcv {
                Some(d) => {
                    *v_r = Some(d);
                    *barrier = d;
                    self.vs[d].mark = Mark::Right;
                    if let Some(p) = self.vs[cur_l].parent {
                        *v_l = Some(p);
                    }
                }
                None => {
                    // Defensive early exit, reproduced verbatim from the
                    // reference (spec.md §9 open question): the barrier was
                    // reached without ever recording a deepest common
                    // vertex. Go dead instead of forcing the left walker
                    // back on the strength of a base that was never found.
                    *v_r = None;
                }
            }
        } else {
            *v_r = self.vs[cur].parent;
        }
        false
    }

    // -- 4.5 path reconstruction ----------------------------------------

    fn same_mark(&self, u: VIdx, high: VIdx) -> bool {
        let m = self.vs[high].mark;
        m != Mark::Unmarked && self.vs[u].mark == m
    }

    /// An alternating sequence of vertices from `high` down to `low`, every
    /// vertex within the bloom `b` (or outside all blooms) along the way.
    fn find_path(&mut self, high: VIdx, low: VIdx, b: Option<BloomId>) -> Vec<VIdx> {
        debug_assert!(self.level_of(high) >= self.level_of(low));
        let mut v = high;
        loop {
            if v == low {
                break;
            }
            let preds = self.vs[v].predecessors.clone();
            let mut advanced = false;
            for p in preds {
                let key = edge_key(v, p);
                if self.visited_edges.contains(&key) {
                    continue;
                }
                self.visited_edges.insert(key);
                let in_other_bloom = matches!(self.vs[v].bloom, Some(bl) if Some(bl) != b);
                let candidate = if in_other_bloom {
                    self.blooms[self.vs[v].bloom.unwrap()].base
                } else {
                    p
                };
                let ok = !self.vs[candidate].erased
                    && self.vs[candidate].level().is_some()
                    && self.level_of(candidate) >= self.level_of(low)
                    && (candidate == low
                        || (!self.vs[candidate].visited
                            && (self.same_mark(candidate, high)
                                || matches!(self.vs[candidate].bloom, Some(bl) if Some(bl) != b))));
                if ok {
                    self.vs[candidate].parent = Some(v);
                    self.vs[candidate].visited = true;
                    v = candidate;
                    advanced = true;
                    break;
                }
            }
            if advanced {
                continue;
            }
            match self.vs[v].parent {
                Some(p) => v = p,
                None => break,
            }
        }
        let mut path = vec![low];
        let mut cur = low;
        while cur != high {
            match self.vs[cur].parent {
                Some(p) => {
                    cur = p;
                    path.push(cur);
                }
                None => break,
            }
        }
        path.reverse();
        self.splice_blooms(&mut path, b);
        path
    }

    fn splice_blooms(&mut self, path: &mut Vec<VIdx>, b: Option<BloomId>) {
        let mut j = 0;
        while j + 1 < path.len() {
            let x = path[j];
            if let Some(bloom_id) = self.vs[x].bloom {
                if Some(bloom_id) != b {
                    let detour = self.open_bloom(x, bloom_id);
                    // `detour` always starts at `x` itself and `x`'s bloom
                    // tag is immutable, so re-reading `path[j]` next
                    // iteration would just re-open the same bloom forever.
                    // Skip past the whole inserted detour instead.
                    let detour_len = detour.len();
                    path.splice(j..=j + 1, detour);
                    j += detour_len;
                    continue;
                }
            }
            j += 1;
        }
    }

    /// An alternating path from `x` (somewhere inside `bloom_id`) out to the
    /// bloom's base.
    fn open_bloom(&mut self, x: VIdx, bloom_id: BloomId) -> Vec<VIdx> {
        let base = self.blooms[bloom_id].base;
        let (peak_s, peak_t) = self.blooms[bloom_id].peaks;
        let level_x = self.level_of(x);
        if level_x % 2 == 0 {
            self.find_path(x, base, Some(bloom_id))
        } else if self.vs[x].mark == Mark::Left {
            let to_x = self.find_path(peak_s, x, Some(bloom_id));
            let to_base = self.find_path(peak_t, base, Some(bloom_id));
            connect_path(to_x, to_base, peak_s, peak_t)
        } else {
            let to_x = self.find_path(peak_t, x, Some(bloom_id));
            let to_base = self.find_path(peak_s, base, Some(bloom_id));
            connect_path(to_x, to_base, peak_t, peak_s)
        }
    }

    fn link_parents(&mut self, path: &[VIdx]) {
        for w in path.windows(2) {
            self.vs[w[1]].parent = Some(w[0]);
        }
    }

    // -- 4.6 augmentation and erasure -----------------------------------

    fn augment_matching(&mut self, lv: VIdx, rv: VIdx) {
        let mut second = rv;
        loop {
            let first = match self.vs[second].parent {
                Some(p) => p,
                None => break,
            };
            if self.mate[first] != Some(second) {
                self.mate[first] = Some(second);
                self.mate[second] = Some(first);
            }
            if first == lv {
                break;
            }
            second = first;
        }
    }

    fn erase_path(&mut self, path: &[VIdx]) {
        let mut queue: VecDeque<VIdx> = path.iter().copied().collect();
        while let Some(y) = queue.pop_front() {
            if self.vs[y].erased {
                continue;
            }
            self.vs[y].erased = true;
            let succs = self.vs[y].successors.clone();
            for z in succs {
                if self.vs[z].erased {
                    continue;
                }
                if self.vs[z].count > 0 {
                    self.vs[z].count -= 1;
                    if self.vs[z].count == 0 {
                        queue.push_back(z);
                    }
                }
            }
        }
    }
}

fn connect_path(mut path_l: Vec<VIdx>, path_r: Vec<VIdx>, s: VIdx, t: VIdx) -> Vec<VIdx> {
    debug_assert_eq!(path_l.first().copied(), Some(s));
    debug_assert_eq!(path_r.first().copied(), Some(t));
    path_l.reverse();
    path_l.extend(path_r);
    path_l
}

// ---------------------------------------------------------------------
// Outer controller (4.1)
// ---------------------------------------------------------------------

/// Compute a maximum cardinality matching of `graph` via the Micali-Vazirani
/// algorithm. Runs phases, each growing the matching by a maximal set of
/// vertex-disjoint shortest augmenting paths, until a phase finds none.
pub fn maximum_matching<G>(graph: G) -> Matching<G>
where
    G: NodeCompactIndexable + IntoNodeIdentifiers + IntoNeighbors,
{
    let n = graph.node_bound();
    let mut mate: Vec<Option<VIdx>> = vec![None; n];
    loop {
        let mut phase = Phase::new(graph, n, mate);
        let augmented = phase.run();
        mate = phase.mate;
        if !augmented {
            break;
        }
    }
    for v in 0..n {
        if let Some(u) = mate[v] {
            debug_assert_eq!(mate[u], Some(v), "matching must be symmetric");
        }
    }
    let out: Vec<Option<G::NodeId>> = mate
        .into_iter()
        .map(|m| m.map(|i| graph.from_index(i)))
        .collect();
    Matching::new(graph, out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::UnGraph;

    fn path4() -> UnGraph<(), ()> {
        let mut g = UnGraph::new();
        let a = g.add_node(());
        let b = g.add_node(());
        let c = g.add_node(());
        let d = g.add_node(());
        g.add_edge(a, b, ());
        g.add_edge(b, c, ());
        g.add_edge(c, d, ());
        g
    }

    #[test]
    fn matches_path_of_four_perfectly() {
        let g = path4();
        let m = maximum_matching(&g);
        assert_eq!(m.len(), 2);
        assert!(m.is_perfect());
    }

    #[test]
    fn single_edge() {
        let mut g = UnGraph::new();
        let a = g.add_node(());
        let b = g.add_node(());
        g.add_edge(a, b, ());
        let m = maximum_matching(&g);
        assert_eq!(m.len(), 1);
        assert!(m.contains_edge(a, b));
    }

    #[test]
    fn empty_graph() {
        let g: UnGraph<(), ()> = UnGraph::new();
        let m = maximum_matching(&g);
        assert_eq!(m.len(), 0);
    }

    #[test]
    fn odd_cycle_leaves_one_unmatched() {
        let mut g = UnGraph::new();
        let nodes: Vec<_> = (0..5).map(|_| g.add_node(())).collect();
        for i in 0..5 {
            g.add_edge(nodes[i], nodes[(i + 1) % 5], ());
        }
        let m = maximum_matching(&g);
        assert_eq!(m.len(), 2);
    }
}

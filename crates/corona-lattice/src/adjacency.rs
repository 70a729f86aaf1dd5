use serde::Serialize;

// ─────────────────────────────────────────────
// SortedAdjacency
// ─────────────────────────────────────────────

/// Undirected adjacency lists indexed by vertex, each kept strictly
/// descending.
///
/// Every mutation goes through [`connect`](Self::connect) or
/// [`isolate`](Self::isolate), so the ordering invariant holds after every
/// call rather than being restored by a sort at the end. Ring growth reads
/// `neighbors(v)[0]` and `[1]` as "the two most recently attached
/// neighbors", which is only meaningful because of this ordering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SortedAdjacency {
    lists: Vec<Vec<usize>>,
}

impl SortedAdjacency {
    pub fn new() -> Self {
        Self::default()
    }

    /// `count` vertices, no edges.
    pub fn with_vertices(count: usize) -> Self {
        Self { lists: vec![Vec::new(); count] }
    }

    // ── Mutations ──────────────────────────────────────

    /// Append `count` isolated vertices; returns the index of the first one.
    pub fn push_vertices(&mut self, count: usize) -> usize {
        let first = self.lists.len();
        self.lists.resize_with(first + count, Vec::new);
        first
    }

    /// Add the undirected edge `a`–`b`.
    ///
    /// Self loops and edges already present are ignored. Returns whether an
    /// edge was added.
    pub fn connect(&mut self, a: usize, b: usize) -> bool {
        if a == b {
            return false;
        }
        let added = insert_descending(&mut self.lists[a], b);
        if added {
            insert_descending(&mut self.lists[b], a);
        }
        added
    }

    /// Remove every edge touching `v`. Returns the number removed.
    pub fn isolate(&mut self, v: usize) -> usize {
        let former = std::mem::take(&mut self.lists[v]);
        for &n in &former {
            self.lists[n].retain(|&m| m != v);
        }
        former.len()
    }

    // ── Queries ────────────────────────────────────────

    /// Neighbors of `v`, highest index first. Empty for unknown vertices.
    pub fn neighbors(&self, v: usize) -> &[usize] {
        self.lists.get(v).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn degree(&self, v: usize) -> usize {
        self.neighbors(v).len()
    }

    pub fn contains_edge(&self, a: usize, b: usize) -> bool {
        self.neighbors(a).binary_search_by(|n| b.cmp(n)).is_ok()
    }

    /// Number of vertices, isolated ones included.
    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.lists.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Vertices whose degree is neither 0 nor `q`.
    pub fn deficient(&self, q: usize) -> usize {
        self.lists
            .iter()
            .filter(|l| !l.is_empty() && l.len() != q)
            .count()
    }

    /// True iff every vertex has degree exactly `q` or 0.
    pub fn is_regular(&self, q: usize) -> bool {
        self.lists.iter().all(|l| l.is_empty() || l.len() == q)
    }

    pub fn lists(&self) -> &[Vec<usize>] {
        &self.lists
    }
}

/// Insert `n` into a strictly descending list. No-op if already present.
fn insert_descending(list: &mut Vec<usize>, n: usize) -> bool {
    match list.binary_search_by(|m| n.cmp(m)) {
        Ok(_) => false,
        Err(pos) => {
            list.insert(pos, n);
            true
        }
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

use std::collections::BTreeSet;

/// Undirected simple graph over nodes `0..node_count`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    node_count: usize,
    edges: BTreeSet<(usize, usize)>,
}

impl Graph {
    pub fn new() -> Self {
        Self::with_nodes(0)
    }

    pub fn with_nodes(node_count: usize) -> Self {
        Self {
            node_count,
            edges: BTreeSet::new(),
        }
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Adds the edge `a -- b`. Self loops, duplicates and edges touching
    /// unknown nodes are ignored; returns whether the edge was inserted.
    pub fn add_edge(&mut self, a: usize, b: usize) -> bool {
        if a == b || a >= self.node_count || b >= self.node_count {
            return false;
        }
        self.edges.insert(normalize(a, b))
    }

    pub fn has_edge(&self, a: usize, b: usize) -> bool {
        self.edges.contains(&normalize(a, b))
    }

    /// Edges as `(low, high)` pairs in ascending order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.edges.iter().copied()
    }

    pub fn degree(&self, node: usize) -> usize {
        self.edges
            .iter()
            .filter(|(a, b)| *a == node || *b == node)
            .count()
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

fn normalize(a: usize, b: usize) -> (usize, usize) {
    if a <= b { (a, b) } else { (b, a) }
}

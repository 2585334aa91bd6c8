//! Parametric graph generators.
//!
//! Node numbering follows the usual conventions: the star hub is node 0, the
//! balanced tree is numbered breadth-first from the root and the ring of the
//! small-world graph runs through `0..n` in order.

use crate::ir::Graph;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const MAX_TREE_NODES: usize = 1 << 20;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum GenerateError {
    #[error("probability must lie in [0, 1], got {0}")]
    Probability(f64),
    #[error("balanced tree needs a branching factor of at least 1")]
    Branching,
    #[error("balanced tree with branching {branching} and depth {depth} is too large")]
    TreeTooLarge { branching: usize, depth: u32 },
}

/// A graph family together with the parameters it is built from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Archetype {
    Star { leaves: usize },
    BalancedTree { branching: usize, depth: u32 },
    SmallWorld { nodes: usize, ring_degree: usize, probability: f64 },
    Random { nodes: usize, probability: f64 },
}

impl Archetype {
    pub fn build<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Graph, GenerateError> {
        match *self {
            Self::Star { leaves } => Ok(star_graph(leaves)),
            Self::BalancedTree { branching, depth } => balanced_tree(branching, depth),
            Self::SmallWorld {
                nodes,
                ring_degree,
                probability,
            } => newman_watts_strogatz_graph(nodes, ring_degree, probability, rng),
            Self::Random { nodes, probability } => erdos_renyi_graph(nodes, probability, rng),
        }
    }

    pub fn is_randomized(&self) -> bool {
        matches!(self, Self::SmallWorld { .. } | Self::Random { .. })
    }
}

/// One hub (node 0) joined to `leaves` leaf nodes.
pub fn star_graph(leaves: usize) -> Graph {
    let mut graph = Graph::with_nodes(leaves + 1);
    for leaf in 1..=leaves {
        graph.add_edge(0, leaf);
    }
    graph
}

/// Perfectly balanced tree of the given depth where every internal node has
/// `branching` children.
pub fn balanced_tree(branching: usize, depth: u32) -> Result<Graph, GenerateError> {
    if branching == 0 {
        return Err(GenerateError::Branching);
    }
    let too_large = GenerateError::TreeTooLarge { branching, depth };
    let mut nodes = 0usize;
    let mut level = 1usize;
    for _ in 0..=depth {
        nodes = nodes
            .checked_add(level)
            .filter(|total| *total <= MAX_TREE_NODES)
            .ok_or_else(|| too_large.clone())?;
        level = level.saturating_mul(branching);
    }
    let mut graph = Graph::with_nodes(nodes);
    for child in 1..nodes {
        graph.add_edge((child - 1) / branching, child);
    }
    Ok(graph)
}

/// Newman–Watts–Strogatz small-world graph.
///
/// Starts from a ring where every node is joined to its `ring_degree / 2`
/// nearest neighbours on each side, then for each ring edge `(u, v)` adds a
/// shortcut `(u, w)` with probability `probability`, `w` drawn uniformly.
/// A target that would make a loop or a duplicate is redrawn until a free
/// one turns up or `u` is already joined to every other node. Ring edges are
/// never removed.
pub fn newman_watts_strogatz_graph<R: Rng + ?Sized>(
    nodes: usize,
    ring_degree: usize,
    probability: f64,
    rng: &mut R,
) -> Result<Graph, GenerateError> {
    check_probability(probability)?;
    if ring_degree >= nodes {
        return Ok(complete_graph(nodes));
    }
    let mut graph = Graph::with_nodes(nodes);
    let half = ring_degree / 2;
    let mut ring = Vec::with_capacity(nodes * half);
    for offset in 1..=half {
        for u in 0..nodes {
            let v = (u + offset) % nodes;
            graph.add_edge(u, v);
            ring.push(u);
        }
    }
    for u in ring {
        if !rng.gen_bool(probability) {
            continue;
        }
        let mut w = rng.gen_range(0..nodes);
        loop {
            if w != u && !graph.has_edge(u, w) {
                graph.add_edge(u, w);
                break;
            }
            if graph.degree(u) >= nodes - 1 {
                break;
            }
            w = rng.gen_range(0..nodes);
        }
    }
    Ok(graph)
}

/// Erdős–Rényi `G(n, p)`: every pair of nodes is joined independently with
/// probability `probability`.
pub fn erdos_renyi_graph<R: Rng + ?Sized>(
    nodes: usize,
    probability: f64,
    rng: &mut R,
) -> Result<Graph, GenerateError> {
    check_probability(probability)?;
    let mut graph = Graph::with_nodes(nodes);
    for a in 0..nodes {
        for b in (a + 1)..nodes {
            if rng.gen_bool(probability) {
                graph.add_edge(a, b);
            }
        }
    }
    Ok(graph)
}

fn complete_graph(nodes: usize) -> Graph {
    let mut graph = Graph::with_nodes(nodes);
    for a in 0..nodes {
        for b in (a + 1)..nodes {
            graph.add_edge(a, b);
        }
    }
    graph
}

fn check_probability(probability: f64) -> Result<(), GenerateError> {
    if (0.0..=1.0).contains(&probability) {
        Ok(())
    } else {
        Err(GenerateError::Probability(probability))
    }
}

//! `EdgeList`: ordered collection of edges with fast coincidence lookup.
//!
//! The overlay builder must detect when a freshly noded edge covers exactly
//! the same coordinate run as an edge already collected (possibly traversed
//! the other way), because coincident edges merge labels instead of being
//! inserted twice. Lookup is by an orientation-normalized key: the run is
//! flipped, if needed, so the lexicographically smaller endpoint comes
//! first, then reduced to coordinate bit keys.

use crate::geom::coordinate::{CoordKey, Coordinate};
use crate::topology::graph::PlanarGraph;
use crate::topology::handles::EdgeId;
use hashbrown::HashMap;
use std::cmp::Ordering;

/// Insertion-ordered edge collection keyed by orientation-normalized
/// coordinate runs.
#[derive(Clone, Debug, Default)]
pub struct EdgeList {
    edges: Vec<EdgeId>,
    by_coords: HashMap<Vec<CoordKey>, EdgeId>,
}

impl EdgeList {
    /// An empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of collected edges.
    #[inline]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// True when no edge has been collected.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Collected edges in insertion order.
    #[inline]
    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    /// Edge at a list position.
    #[inline]
    pub fn get(&self, index: usize) -> Option<EdgeId> {
        self.edges.get(index).copied()
    }

    /// Append an edge and index it by its normalized coordinate run.
    ///
    /// A later edge with the same run (either orientation) replaces nothing;
    /// callers check [`find_equal_edge`](Self::find_equal_edge) first and
    /// merge labels instead of re-adding.
    pub fn add(&mut self, graph: &PlanarGraph, edge: EdgeId) {
        let key = canonical_key(graph.edge(edge).coords());
        self.edges.push(edge);
        self.by_coords.entry(key).or_insert(edge);
    }

    /// The already-collected edge with the same coordinate run as `coords`,
    /// in either orientation.
    pub fn find_equal_edge(&self, coords: &[Coordinate]) -> Option<EdgeId> {
        self.by_coords.get(&canonical_key(coords)).copied()
    }

    /// Position of the first collected edge with the same coordinate run,
    /// in either orientation.
    pub fn find_edge_index(&self, coords: &[Coordinate]) -> Option<usize> {
        let target = self.find_equal_edge(coords)?;
        self.edges.iter().position(|&e| e == target)
    }
}

/// Reduce a coordinate run to its orientation-normalized key: flipped so the
/// smaller end leads, then mapped to bit keys.
fn canonical_key(coords: &[Coordinate]) -> Vec<CoordKey> {
    let forward_is_smaller = coords
        .iter()
        .zip(coords.iter().rev())
        .map(|(a, b)| a.compare(b))
        .find(|o| *o != Ordering::Equal)
        .is_none_or(|o| o == Ordering::Less);
    if forward_is_smaller {
        coords.iter().map(Coordinate::key).collect()
    } else {
        coords.iter().rev().map(Coordinate::key).collect()
    }
}

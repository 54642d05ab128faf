//! `Edge`: an undirected coordinate run between two graph nodes.
//!
//! An edge owns its coordinate sequence, its label, and its depth delta (the
//! net interior-depth change crossing the edge from left to right). Each
//! edge is traversed by exactly two symmetric [`DirectedEdge`]s, created
//! together with the edge by the graph arena.
//!
//! [`DirectedEdge`]: crate::topology::directed_edge::DirectedEdge

use crate::geom::coordinate::Coordinate;
use crate::topology::handles::DirectedEdgeId;
use crate::topology::label::Label;

/// An undirected edge of the planar graph.
#[derive(Clone, Debug)]
pub struct Edge {
    coords: Vec<Coordinate>,
    label: Label,
    depth_delta: i32,
    /// Whether the edge lies inside the result area; `None` until the
    /// covered-line scan has decided.
    covered: Option<bool>,
    /// Forward and reverse traversals; filled by the arena at creation.
    dirs: [DirectedEdgeId; 2],
}

impl Edge {
    pub(crate) fn new(
        coords: Vec<Coordinate>,
        label: Label,
        depth_delta: i32,
        dirs: [DirectedEdgeId; 2],
    ) -> Self {
        Edge {
            coords,
            label,
            depth_delta,
            covered: None,
            dirs,
        }
    }

    /// The edge's coordinate run, in forward order.
    #[inline]
    pub fn coords(&self) -> &[Coordinate] {
        &self.coords
    }

    /// First coordinate of the run.
    #[inline]
    pub fn start(&self) -> Coordinate {
        self.coords[0]
    }

    /// Last coordinate of the run.
    #[inline]
    pub fn end(&self) -> Coordinate {
        self.coords[self.coords.len() - 1]
    }

    /// True when the run closes on itself.
    #[inline]
    pub fn is_closed(&self) -> bool {
        self.start() == self.end()
    }

    /// The edge label.
    #[inline]
    pub fn label(&self) -> &Label {
        &self.label
    }

    /// Mutable access to the edge label (used while labelling accumulates).
    #[inline]
    pub fn label_mut(&mut self) -> &mut Label {
        &mut self.label
    }

    /// Net left-to-right interior depth change across the edge.
    #[inline]
    pub fn depth_delta(&self) -> i32 {
        self.depth_delta
    }

    /// Replace the depth delta (the builder adjusts it when merging
    /// coincident edges).
    #[inline]
    pub fn set_depth_delta(&mut self, delta: i32) {
        self.depth_delta = delta;
    }

    /// `Some(true)` when the edge was found inside the result area,
    /// `Some(false)` when outside, `None` while undecided.
    #[inline]
    pub fn covered(&self) -> Option<bool> {
        self.covered
    }

    #[inline]
    pub(crate) fn set_covered(&mut self, covered: bool) {
        self.covered = Some(covered);
    }

    /// The two directed traversals of this edge: `[forward, reverse]`.
    #[inline]
    pub fn dirs(&self) -> [DirectedEdgeId; 2] {
        self.dirs
    }

    /// True when the two coordinate runs are identical pointwise.
    pub fn pointwise_equal(&self, other: &Edge) -> bool {
        self.coords == other.coords
    }

    /// Orientation-independent coordinate equality: equal forward, or equal
    /// with one run reversed.
    pub fn coords_equal_unoriented(&self, other: &[Coordinate]) -> bool {
        if self.coords.len() != other.len() {
            return false;
        }
        self.coords.iter().eq(other.iter()) || self.coords.iter().eq(other.iter().rev())
    }
}

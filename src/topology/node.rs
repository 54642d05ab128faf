//! `Node`: a graph vertex owning the star of its incident directed edges.

use crate::geom::coordinate::Coordinate;
use crate::topology::label::Label;
use crate::topology::star::EdgeEndStar;

/// A vertex of the planar graph: a coordinate, the merged node label, and
/// the CCW-ordered star of incident directed edges.
#[derive(Clone, Debug)]
pub struct Node {
    coord: Coordinate,
    label: Label,
    star: EdgeEndStar,
}

impl Node {
    pub(crate) fn new(coord: Coordinate) -> Self {
        Node {
            coord,
            label: Label::new_line(),
            star: EdgeEndStar::new(),
        }
    }

    /// The node's coordinate.
    #[inline]
    pub fn coord(&self) -> Coordinate {
        self.coord
    }

    /// The merged label accumulated from incident edges.
    #[inline]
    pub fn label(&self) -> &Label {
        &self.label
    }

    /// Mutable label access for the labelling phase.
    #[inline]
    pub fn label_mut(&mut self) -> &mut Label {
        &mut self.label
    }

    /// The CCW-ordered star of incident directed edges.
    #[inline]
    pub fn star(&self) -> &EdgeEndStar {
        &self.star
    }

    pub(crate) fn star_mut(&mut self) -> &mut EdgeEndStar {
        &mut self.star
    }

    /// True when no edge touches this node.
    #[inline]
    pub fn is_isolated(&self) -> bool {
        self.star.is_empty()
    }
}

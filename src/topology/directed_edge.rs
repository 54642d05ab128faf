//! `DirectedEdge`: one directed traversal of an edge.
//!
//! Each edge owns two directed edges, mutually symmetric: same coordinates,
//! opposite traversal direction. The directed edge is where all per-side
//! traversal state lives: the label as seen in this direction (the edge
//! label, flipped for the reverse traversal), the left/right depths assigned
//! during depth propagation, the in-result flag, and the `next`/`next_min`
//! links that ring building walks.

use crate::error::TopologyError;
use crate::geom::coordinate::Coordinate;
use crate::geom::quadrant::Quadrant;
use crate::topology::edge_ring::RingId;
use crate::topology::handles::{DirectedEdgeId, EdgeId, NodeId};
use crate::topology::label::Label;
use crate::topology::location::{Location, Position};

/// One directed traversal of an [`Edge`](crate::topology::edge::Edge).
#[derive(Clone, Debug)]
pub struct DirectedEdge {
    edge: EdgeId,
    forward: bool,
    origin: NodeId,
    /// Origin coordinate and the first distinct coordinate along the
    /// traversal; together they define the initial direction vector.
    p0: Coordinate,
    p1: Coordinate,
    quadrant: Quadrant,
    /// The opposite traversal of the same edge.
    sym: DirectedEdgeId,
    /// Successor in the result-ring chain, set by ring linking.
    next: Option<DirectedEdgeId>,
    /// Successor in the minimal-ring chain.
    next_min: Option<DirectedEdgeId>,
    /// Maximal ring this edge was assigned to.
    ring: Option<RingId>,
    /// Minimal ring this edge was assigned to.
    min_ring: Option<RingId>,
    in_result: bool,
    /// Left/Right depths; `None` until depth propagation assigns them.
    depth: [Option<i32>; 2],
    label: Label,
}

impl DirectedEdge {
    pub(crate) fn new(
        edge: EdgeId,
        forward: bool,
        origin: NodeId,
        p0: Coordinate,
        p1: Coordinate,
        quadrant: Quadrant,
        label: Label,
    ) -> Self {
        DirectedEdge {
            edge,
            forward,
            origin,
            p0,
            p1,
            quadrant,
            // patched by the arena right after the symmetric pair exists
            sym: DirectedEdgeId::new(u32::MAX),
            next: None,
            next_min: None,
            ring: None,
            min_ring: None,
            in_result: false,
            depth: [None, None],
            label,
        }
    }

    /// The undirected edge this traversal belongs to.
    #[inline]
    pub fn edge(&self) -> EdgeId {
        self.edge
    }

    /// True for the traversal that follows the edge's stored coordinate
    /// order.
    #[inline]
    pub fn is_forward(&self) -> bool {
        self.forward
    }

    /// Node this traversal leaves from.
    #[inline]
    pub fn origin(&self) -> NodeId {
        self.origin
    }

    /// Origin coordinate.
    #[inline]
    pub fn p0(&self) -> Coordinate {
        self.p0
    }

    /// First distinct coordinate along the traversal.
    #[inline]
    pub fn p1(&self) -> Coordinate {
        self.p1
    }

    /// Horizontal component of the initial direction vector.
    #[inline]
    pub fn dx(&self) -> f64 {
        self.p1.x - self.p0.x
    }

    /// Vertical component of the initial direction vector.
    #[inline]
    pub fn dy(&self) -> f64 {
        self.p1.y - self.p0.y
    }

    /// Quadrant of the initial direction vector.
    #[inline]
    pub fn quadrant(&self) -> Quadrant {
        self.quadrant
    }

    /// The opposite traversal of the same edge.
    #[inline]
    pub fn sym(&self) -> DirectedEdgeId {
        self.sym
    }

    pub(crate) fn set_sym(&mut self, sym: DirectedEdgeId) {
        self.sym = sym;
    }

    /// Label as seen along this traversal (reverse traversals carry the
    /// edge label with Left/Right swapped).
    #[inline]
    pub fn label(&self) -> &Label {
        &self.label
    }

    /// Mutable label access for the labelling phase.
    #[inline]
    pub fn label_mut(&mut self) -> &mut Label {
        &mut self.label
    }

    /// Successor in the result-ring chain.
    #[inline]
    pub fn next(&self) -> Option<DirectedEdgeId> {
        self.next
    }

    pub(crate) fn set_next(&mut self, next: DirectedEdgeId) {
        self.next = Some(next);
    }

    /// Successor in the minimal-ring chain.
    #[inline]
    pub fn next_min(&self) -> Option<DirectedEdgeId> {
        self.next_min
    }

    pub(crate) fn set_next_min(&mut self, next: DirectedEdgeId) {
        self.next_min = Some(next);
    }

    /// Maximal ring this edge belongs to, once assigned.
    #[inline]
    pub fn ring(&self) -> Option<RingId> {
        self.ring
    }

    pub(crate) fn set_ring(&mut self, ring: RingId) {
        self.ring = Some(ring);
    }

    /// Minimal ring this edge belongs to, once assigned.
    #[inline]
    pub fn min_ring(&self) -> Option<RingId> {
        self.min_ring
    }

    pub(crate) fn set_min_ring(&mut self, ring: RingId) {
        self.min_ring = Some(ring);
    }

    /// True when this directed edge is part of the operation result.
    #[inline]
    pub fn in_result(&self) -> bool {
        self.in_result
    }

    /// Flag this directed edge as part of the result.
    #[inline]
    pub fn set_in_result(&mut self, in_result: bool) {
        self.in_result = in_result;
    }

    /// Depth on the given side, `None` until assigned.
    /// Only Left and Right are meaningful.
    #[inline]
    pub fn depth(&self, pos: Position) -> Option<i32> {
        match pos {
            Position::Left => self.depth[0],
            Position::Right => self.depth[1],
            Position::On => None,
        }
    }

    /// Assign the depth on one side. Write-once: assigning a different
    /// value to an already-assigned side is a depth mismatch.
    pub fn set_depth(&mut self, pos: Position, value: i32) -> Result<(), TopologyError> {
        let slot = match pos {
            Position::Left => &mut self.depth[0],
            Position::Right => &mut self.depth[1],
            Position::On => return Ok(()),
        };
        match *slot {
            Some(existing) if existing != value => Err(TopologyError::DepthMismatch {
                coord: self.p0,
                expected: existing,
                found: value,
            }),
            _ => {
                *slot = Some(value);
                Ok(())
            }
        }
    }

    /// True for an edge that represents pure linework: line-shaped for at
    /// least one operand and exterior (or unlabelled) for every area
    /// operand.
    pub fn is_line_edge(&self) -> bool {
        let is_line = self.label.is_line_at(0) || self.label.is_line_at(1);
        let exterior_if_area_0 =
            !self.label.is_area_at(0) || self.label.all_positions_equal(0, Location::Exterior);
        let exterior_if_area_1 =
            !self.label.is_area_at(1) || self.label.all_positions_equal(1, Location::Exterior);
        is_line && exterior_if_area_0 && exterior_if_area_1
    }

    /// True when both sides of the edge are interior to every area operand;
    /// such an edge lies strictly inside the result area and never bounds
    /// it.
    pub fn is_interior_area_edge(&self) -> bool {
        (0..2).all(|geom| {
            self.label.is_area_at(geom)
                && self.label.get(geom, Position::Left) == Some(Location::Interior)
                && self.label.get(geom, Position::Right) == Some(Location::Interior)
        })
    }
}

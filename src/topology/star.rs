//! `EdgeEndStar`: the CCW-ordered ring of directed edges at a node, and the
//! star algorithms that drive labelling and ring linking.
//!
//! Every algorithm here walks the star in its stored counter-clockwise
//! order, which the graph maintains on insertion (quadrant first, exact
//! orientation within a quadrant). That order is load-bearing: depth
//! propagation transfers the right depth of one edge onto the next edge's
//! side, and ring linking pairs each incoming result edge with the next
//! outgoing one.

use crate::error::TopologyError;
use crate::topology::edge_ring::RingId;
use crate::topology::graph::PlanarGraph;
use crate::topology::handles::{DirectedEdgeId, NodeId};
use crate::topology::location::{Location, Position};

/// CCW-ordered collection of the directed edges incident on one node.
#[derive(Clone, Debug, Default)]
pub struct EdgeEndStar {
    edges: Vec<DirectedEdgeId>,
}

impl EdgeEndStar {
    pub(crate) fn new() -> Self {
        EdgeEndStar { edges: Vec::new() }
    }

    /// Number of incident directed edges.
    #[inline]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// True when the star is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// The incident directed edges in CCW order.
    #[inline]
    pub fn edges(&self) -> &[DirectedEdgeId] {
        &self.edges
    }

    /// Index of a directed edge within the CCW order.
    pub fn position_of(&self, dir: DirectedEdgeId) -> Option<usize> {
        self.edges.iter().position(|&d| d == dir)
    }

    pub(crate) fn insert_at(&mut self, index: usize, dir: DirectedEdgeId) {
        self.edges.insert(index, dir);
    }
}

/// State machine for ring linking: pair each incoming result edge with the
/// next outgoing result edge in CCW order.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum LinkState {
    ScanningForIncoming,
    LinkingToOutgoing,
}

impl PlanarGraph {
    /// Merge the labels of the incident edges into a node-level label, for
    /// every node of the graph.
    ///
    /// For each operand: if any incident edge lies in that operand's
    /// interior *or on its boundary*, the node's location for the operand
    /// becomes Interior. Treating boundary incidence as Interior mirrors
    /// the published overlay algorithm and is intentional.
    pub fn compute_labelling(&mut self) {
        for node in self.node_ids() {
            self.compute_node_label(node);
        }
    }

    /// Label-merge for a single node; see [`compute_labelling`](Self::compute_labelling).
    pub fn compute_node_label(&mut self, node: NodeId) {
        let star: Vec<_> = self.node(node).star().edges().to_vec();
        for geom in 0..2 {
            let touched = star.iter().any(|&d| {
                let edge = self.dir(d).edge();
                matches!(
                    self.edge(edge).label().on(geom),
                    Some(Location::Interior) | Some(Location::Boundary)
                )
            });
            if touched {
                self.node_mut(node)
                    .label_mut()
                    .set(geom, Position::On, Location::Interior);
            }
        }
    }

    /// Each directed edge absorbs its symmetric partner's label
    /// (fill-only-null), so both traversals see the union of the evidence.
    pub fn merge_sym_labels(&mut self, node: NodeId) {
        let star: Vec<_> = self.node(node).star().edges().to_vec();
        for d in star {
            let sym_label = *self.dir(self.dir(d).sym()).label();
            self.dir_mut(d).label_mut().merge(&sym_label);
        }
    }

    /// Fill every still-undetermined entry of each incident edge's label
    /// from the merged node label.
    pub fn update_labelling(&mut self, node: NodeId) {
        let node_label = *self.node(node).label();
        let star: Vec<_> = self.node(node).star().edges().to_vec();
        for d in star {
            for geom in 0..2 {
                if let Some(loc) = node_label.on(geom) {
                    self.dir_mut(d).label_mut().set_all_if_none(geom, loc);
                }
            }
        }
    }

    /// Propagate depths around the star, starting just after `start` and
    /// wrapping the full CCW cycle.
    ///
    /// Each edge's right depth is seeded from the running value; its left
    /// depth follows from the edge's own depth delta. After the full wrap
    /// the running value must equal `start`'s already-known right depth;
    /// a disagreement is [`TopologyError::DepthMismatch`], the central
    /// self-consistency check of the labelling phase.
    pub fn compute_depths(
        &mut self,
        node: NodeId,
        start: DirectedEdgeId,
    ) -> Result<(), TopologyError> {
        let star: Vec<_> = self.node(node).star().edges().to_vec();
        let start_index =
            self.node(node)
                .star()
                .position_of(start)
                .ok_or(TopologyError::MissingGraphComponent {
                    what: "start edge not in node star",
                })?;

        let start_depth = self.dir(start).depth(Position::Left).unwrap_or(0);
        let target_last_depth = self.dir(start).depth(Position::Right).unwrap_or(0);

        // from just after the start edge to the end of the cycle
        let next_depth = self.propagate_depths(&star[start_index + 1..], start_depth)?;
        // then from the cycle start back around to the start edge
        let last_depth = self.propagate_depths(&star[..start_index], next_depth)?;

        if last_depth != target_last_depth {
            return Err(TopologyError::DepthMismatch {
                coord: self.node(node).coord(),
                expected: target_last_depth,
                found: last_depth,
            });
        }
        Ok(())
    }

    fn propagate_depths(
        &mut self,
        edges: &[DirectedEdgeId],
        start_depth: i32,
    ) -> Result<i32, TopologyError> {
        let mut curr_depth = start_depth;
        for &d in edges {
            self.set_edge_depths(d, Position::Right, curr_depth)?;
            curr_depth = self.dir(d).depth(Position::Left).ok_or_else(|| {
                TopologyError::InvariantViolation {
                    what: format!("left depth unset after assignment on directed edge {d}"),
                }
            })?;
        }
        Ok(curr_depth)
    }

    /// Single CCW pass that marks line-type edges lying inside the result
    /// area as covered, so duplicate linework inside polygon results is
    /// suppressed.
    ///
    /// The pass tracks whether the walk is currently inside the result
    /// area, flipping only at area-type directed edges flagged in-result:
    /// an outgoing result edge exits the area, an incoming one enters it.
    pub fn find_covered_line_edges(&mut self, node: NodeId) {
        let star: Vec<_> = self.node(node).star().edges().to_vec();

        // Seed from the first area edge with a result flag; without one the
        // coverage of line edges at this node cannot be decided here.
        let mut start_loc = None;
        for &d in &star {
            let sym = self.dir(d).sym();
            if !self.dir(d).is_line_edge() {
                if self.dir(d).in_result() {
                    start_loc = Some(Location::Interior);
                    break;
                }
                if self.dir(sym).in_result() {
                    start_loc = Some(Location::Exterior);
                    break;
                }
            }
        }
        let Some(mut curr_loc) = start_loc else {
            return;
        };

        for &d in &star {
            let sym = self.dir(d).sym();
            if self.dir(d).is_line_edge() {
                let covered = curr_loc == Location::Interior;
                let edge = self.dir(d).edge();
                self.edge_mut(edge).set_covered(covered);
            } else {
                if self.dir(d).in_result() {
                    curr_loc = Location::Exterior;
                }
                if self.dir(sym).in_result() {
                    curr_loc = Location::Interior;
                }
            }
        }
    }

    /// Link the in-result directed edges around this node into `next`
    /// chains: each incoming result edge is paired with the next outgoing
    /// result edge in CCW order.
    ///
    /// Fails with [`TopologyError::DanglingEdge`] when an incoming edge is
    /// left without an outgoing partner.
    pub fn link_result_directed_edges(&mut self, node: NodeId) -> Result<(), TopologyError> {
        let result_area = self.result_area_edges(node);

        let mut first_out = None;
        let mut incoming = None;
        let mut state = LinkState::ScanningForIncoming;

        for &next_out in &result_area {
            let next_in = self.dir(next_out).sym();
            if !self.dir(next_out).label().is_area() {
                continue;
            }
            if first_out.is_none() && self.dir(next_out).in_result() {
                first_out = Some(next_out);
            }
            match state {
                LinkState::ScanningForIncoming => {
                    if self.dir(next_in).in_result() {
                        incoming = Some(next_in);
                        state = LinkState::LinkingToOutgoing;
                    }
                }
                LinkState::LinkingToOutgoing => {
                    if self.dir(next_out).in_result() {
                        if let Some(inc) = incoming {
                            self.dir_mut(inc).set_next(next_out);
                        }
                        state = LinkState::ScanningForIncoming;
                    }
                }
            }
        }

        if state == LinkState::LinkingToOutgoing {
            let (Some(inc), Some(first)) = (incoming, first_out) else {
                return Err(TopologyError::DanglingEdge {
                    coord: self.node(node).coord(),
                });
            };
            self.dir_mut(inc).set_next(first);
        }
        Ok(())
    }

    /// Like [`link_result_directed_edges`](Self::link_result_directed_edges)
    /// but restricted to the directed edges of one maximal ring, chaining
    /// `next_min` links instead. Scans the star in reverse (CW) order, which
    /// pairs edges inside a single maximal ring correctly.
    pub fn link_minimal_directed_edges(
        &mut self,
        node: NodeId,
        ring: RingId,
    ) -> Result<(), TopologyError> {
        let result_area = self.result_area_edges(node);

        let mut first_out = None;
        let mut incoming = None;
        let mut state = LinkState::ScanningForIncoming;

        for &next_out in result_area.iter().rev() {
            let next_in = self.dir(next_out).sym();
            if first_out.is_none() && self.dir(next_out).ring() == Some(ring) {
                first_out = Some(next_out);
            }
            match state {
                LinkState::ScanningForIncoming => {
                    if self.dir(next_in).ring() == Some(ring) {
                        incoming = Some(next_in);
                        state = LinkState::LinkingToOutgoing;
                    }
                }
                LinkState::LinkingToOutgoing => {
                    if self.dir(next_out).ring() == Some(ring) {
                        if let Some(inc) = incoming {
                            self.dir_mut(inc).set_next_min(next_out);
                        }
                        state = LinkState::ScanningForIncoming;
                    }
                }
            }
        }

        if state == LinkState::LinkingToOutgoing {
            let (Some(inc), Some(first)) = (incoming, first_out) else {
                return Err(TopologyError::DanglingEdge {
                    coord: self.node(node).coord(),
                });
            };
            self.dir_mut(inc).set_next_min(first);
        }
        Ok(())
    }

    /// Link *every* incident directed edge into one `next` cycle,
    /// unconditionally: each incoming edge chains to the outgoing edge that
    /// precedes it in CCW order. Used by connectivity analysis over the
    /// whole graph rather than a result subset.
    pub fn link_all_directed_edges(&mut self, node: NodeId) {
        let star: Vec<_> = self.node(node).star().edges().to_vec();

        let mut prev_out: Option<DirectedEdgeId> = None;
        let mut first_in: Option<DirectedEdgeId> = None;
        for &next_out in star.iter().rev() {
            let next_in = self.dir(next_out).sym();
            if first_in.is_none() {
                first_in = Some(next_in);
            }
            if let Some(prev) = prev_out {
                self.dir_mut(next_in).set_next(prev);
            }
            prev_out = Some(next_out);
        }
        if let (Some(first), Some(prev)) = (first_in, prev_out) {
            self.dir_mut(first).set_next(prev);
        }
    }

    /// The star's first or last edge, whichever can seed rightmost-edge
    /// detection: when the two straddle the horizontal axis the
    /// non-horizontal one wins.
    ///
    /// Fails with [`TopologyError::AmbiguousRightmostEdge`] when both
    /// candidates are exactly horizontal.
    pub fn rightmost_edge(&self, node: NodeId) -> Result<DirectedEdgeId, TopologyError> {
        let star = self.node(node).star().edges();
        let first = *star.first().ok_or(TopologyError::MissingGraphComponent {
            what: "rightmost edge of an empty star",
        })?;
        if star.len() == 1 {
            return Ok(first);
        }
        let last = star[star.len() - 1];

        let quad_first = self.dir(first).quadrant();
        let quad_last = self.dir(last).quadrant();
        if quad_first.is_northern() && quad_last.is_northern() {
            Ok(first)
        } else if !quad_first.is_northern() && !quad_last.is_northern() {
            Ok(last)
        } else if self.dir(first).dy() != 0.0 {
            // the candidates straddle the horizontal axis; pick the one
            // that actually leaves it
            Ok(first)
        } else if self.dir(last).dy() != 0.0 {
            Ok(last)
        } else {
            Err(TopologyError::AmbiguousRightmostEdge {
                coord: self.node(node).coord(),
            })
        }
    }

    /// Incident area edges participating in the result (the edge or its
    /// partner is flagged in-result), in CCW order.
    fn result_area_edges(&self, node: NodeId) -> Vec<DirectedEdgeId> {
        self.node(node)
            .star()
            .edges()
            .iter()
            .copied()
            .filter(|&d| self.dir(d).in_result() || self.dir(self.dir(d).sym()).in_result())
            .collect()
    }
}

//! Overlay-result selection and the ring-building pipeline.
//!
//! Once depths are resolved every directed edge carries the Left/Right
//! locations of both operands. Result selection is a pure predicate over the
//! two Right-side locations ([`is_result_of_op`]); marking, node-by-node
//! linking and ring walking then turn the flagged edges into closed
//! [`EdgeRing`]s. [`PlanarGraph::build_result_rings`] runs the whole
//! pipeline; the individual stages stay public for callers that interleave
//! their own steps (covered-line scanning, for instance).

use crate::error::TopologyError;
use crate::topology::edge_ring::{EdgeRing, RingId, RingKind};
use crate::topology::graph::PlanarGraph;
use crate::topology::location::{Location, Position};

/// The four set-theoretic overlay operations.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum OverlayKind {
    /// Points in both operands.
    Intersection,
    /// Points in either operand.
    Union,
    /// Points in operand 0 but not operand 1.
    Difference,
    /// Points in exactly one operand.
    SymDifference,
}

/// Whether a point with the given per-operand locations belongs to the
/// result of `kind`.
///
/// Boundary counts as Interior here: a result edge's off-side may lie on
/// the other operand's boundary, and such edges still bound the result
/// area. `None` (no evidence for that operand) counts as Exterior.
pub fn is_result_of_op(
    loc0: Option<Location>,
    loc1: Option<Location>,
    kind: OverlayKind,
) -> bool {
    let in0 = matches!(loc0, Some(Location::Interior) | Some(Location::Boundary));
    let in1 = matches!(loc1, Some(Location::Interior) | Some(Location::Boundary));
    match kind {
        OverlayKind::Intersection => in0 && in1,
        OverlayKind::Union => in0 || in1,
        OverlayKind::Difference => in0 && !in1,
        OverlayKind::SymDifference => in0 != in1,
    }
}

impl PlanarGraph {
    /// Flag the directed edges that bound the result area of `kind`.
    ///
    /// An edge qualifies when its label is area-type, its interior side is
    /// not interior to *both* operands (such edges lie strictly inside the
    /// result), and its Right side satisfies [`is_result_of_op`].
    pub fn mark_result_area_edges(&mut self, kind: OverlayKind) {
        for d in self.directed_edge_ids() {
            let dir = self.dir(d);
            let label = *dir.label();
            if label.is_area()
                && !dir.is_interior_area_edge()
                && is_result_of_op(
                    label.get(0, Position::Right),
                    label.get(1, Position::Right),
                    kind,
                )
            {
                self.dir_mut(d).set_in_result(true);
            }
        }
    }

    /// Unmark edges whose *both* traversals were selected. Such an edge lies
    /// strictly inside the result area (its two sides are both in-result)
    /// and bounds nothing.
    pub fn cancel_duplicate_result_edges(&mut self) {
        for d in self.directed_edge_ids() {
            let sym = self.dir(d).sym();
            if self.dir(d).in_result() && self.dir(sym).in_result() {
                self.dir_mut(d).set_in_result(false);
                self.dir_mut(sym).set_in_result(false);
            }
        }
    }

    /// Run result-ring linking at every node of the graph.
    pub fn link_result_directed_edges_all(&mut self) -> Result<(), TopologyError> {
        let nodes: Vec<_> = self.node_ids().collect();
        for node in nodes {
            self.link_result_directed_edges(node)?;
        }
        Ok(())
    }

    /// Walk every maximal ring reachable from the in-result edges.
    ///
    /// Ring ids are assigned in walk order starting at 0.
    pub fn build_maximal_rings(&mut self) -> Result<Vec<EdgeRing>, TopologyError> {
        let mut rings = Vec::new();
        for d in self.directed_edge_ids() {
            if self.dir(d).in_result() && self.dir(d).ring().is_none() {
                let id = RingId::new(rings.len() as u32);
                rings.push(EdgeRing::build(self, id, RingKind::Maximal, d)?);
            }
        }
        Ok(rings)
    }

    /// Split one maximal ring into its minimal rings.
    ///
    /// A maximal ring that never repeats a node is already minimal and
    /// yields an empty vector; the caller keeps the maximal ring itself.
    /// Otherwise `next_min` links are built at every node the ring passes
    /// through and each unclaimed edge seeds one minimal ring, with ids
    /// allocated from `next_id` onward.
    pub fn build_minimal_rings(
        &mut self,
        maximal: &EdgeRing,
        next_id: &mut u32,
    ) -> Result<Vec<EdgeRing>, TopologyError> {
        if maximal.max_node_repeats(self) <= 1 {
            return Ok(Vec::new());
        }
        for &de in maximal.edges() {
            let node = self.dir(de).origin();
            self.link_minimal_directed_edges(node, maximal.id())?;
        }
        let mut rings = Vec::new();
        for &de in maximal.edges() {
            if self.dir(de).min_ring().is_none() {
                let id = RingId::new(*next_id);
                *next_id += 1;
                rings.push(EdgeRing::build(self, id, RingKind::Minimal, de)?);
            }
        }
        Ok(rings)
    }

    /// The full result pipeline: mark, link, walk maximal rings, and split
    /// self-touching ones into minimal rings.
    ///
    /// Returns the final ring set: minimal rings where a maximal ring
    /// touched itself, the maximal ring itself elsewhere.
    pub fn build_result_rings(
        &mut self,
        kind: OverlayKind,
    ) -> Result<Vec<EdgeRing>, TopologyError> {
        self.mark_result_area_edges(kind);
        self.cancel_duplicate_result_edges();
        self.link_result_directed_edges_all()?;
        let maximal = self.build_maximal_rings()?;

        let mut next_min_id = maximal.len() as u32;
        let mut out = Vec::new();
        for ring in maximal {
            let minimal = self.build_minimal_rings(&ring, &mut next_min_id)?;
            if minimal.is_empty() {
                out.push(ring);
            } else {
                out.extend(minimal);
            }
        }
        Ok(out)
    }
}

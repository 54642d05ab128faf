//! `EdgeRing`: a closed chain of directed edges walked out of the linked
//! graph.
//!
//! After ring linking, every in-result directed edge has a `next` successor
//! (and, within one maximal ring, a `next_min` successor). An edge ring is
//! the closed walk from a start edge back to itself along those links,
//! together with the accumulated coordinate run, the merged ring label, and
//! the lazily computed hole flag.
//!
//! The same walk builds both ring flavours: a [`RingKind::Maximal`] ring
//! follows `next` and may touch itself at nodes of degree > 2; a
//! [`RingKind::Minimal`] ring follows `next_min` and never self-touches.

use crate::error::TopologyError;
use crate::geom::coordinate::Coordinate;
use crate::geom::orientation::is_ccw;
use crate::topology::graph::PlanarGraph;
use crate::topology::handles::DirectedEdgeId;
use crate::topology::label::Label;
use crate::topology::location::Position;
use once_cell::sync::OnceCell;

pub use crate::topology::handles::RingId;

/// Which successor chain a ring was walked along.
#[derive(Copy, Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum RingKind {
    /// Walks `next` links; may pass through a node more than once.
    Maximal,
    /// Walks `next_min` links; visits each node at most once.
    Minimal,
}

/// A closed chain of directed edges with its coordinate run and merged
/// label.
#[derive(Debug)]
pub struct EdgeRing {
    id: RingId,
    kind: RingKind,
    edges: Vec<DirectedEdgeId>,
    pts: Vec<Coordinate>,
    label: Label,
    is_hole: OnceCell<bool>,
}

impl EdgeRing {
    /// Walk a ring out of the graph starting at `start`, assigning every
    /// visited directed edge to ring `id`.
    ///
    /// Fails with [`TopologyError::DanglingEdge`] when the chain ends on an
    /// unlinked edge, and with [`TopologyError::RingVisitTwice`] when the
    /// walk re-enters an edge it already claimed without having closed.
    pub fn build(
        graph: &mut PlanarGraph,
        id: RingId,
        kind: RingKind,
        start: DirectedEdgeId,
    ) -> Result<EdgeRing, TopologyError> {
        let mut ring = EdgeRing {
            id,
            kind,
            edges: Vec::new(),
            pts: Vec::new(),
            label: Label::new_line(),
            is_hole: OnceCell::new(),
        };

        let mut de = start;
        loop {
            let assigned = match kind {
                RingKind::Maximal => graph.dir(de).ring(),
                RingKind::Minimal => graph.dir(de).min_ring(),
            };
            if assigned == Some(id) {
                return Err(TopologyError::RingVisitTwice {
                    coord: graph.dir(de).p0(),
                });
            }

            ring.edges.push(de);
            ring.merge_label(graph.dir(de).label());
            ring.append_coords(graph, de);
            match kind {
                RingKind::Maximal => graph.dir_mut(de).set_ring(id),
                RingKind::Minimal => graph.dir_mut(de).set_min_ring(id),
            }

            let next = match kind {
                RingKind::Maximal => graph.dir(de).next(),
                RingKind::Minimal => graph.dir(de).next_min(),
            };
            let Some(next) = next else {
                let terminus = graph.dir(graph.dir(de).sym()).p0();
                return Err(TopologyError::DanglingEdge { coord: terminus });
            };
            if next == start {
                break;
            }
            de = next;
        }
        Ok(ring)
    }

    /// Absorb one directed edge's label into the ring label: for each area
    /// operand, the first known Right-side location wins.
    fn merge_label(&mut self, edge_label: &Label) {
        for geom in 0..2 {
            let Some(loc) = edge_label.get(geom, Position::Right) else {
                continue;
            };
            if self.label.on(geom).is_none() {
                self.label.set_on(geom, loc);
            }
        }
    }

    /// Append the edge's coordinates in traversal order, skipping the shared
    /// endpoint between consecutive edges.
    fn append_coords(&mut self, graph: &PlanarGraph, de: DirectedEdgeId) {
        let first = self.pts.is_empty();
        let coords = graph.edge(graph.dir(de).edge()).coords();
        if graph.dir(de).is_forward() {
            let from = if first { 0 } else { 1 };
            self.pts.extend_from_slice(&coords[from..]);
        } else {
            let until = if first { coords.len() } else { coords.len() - 1 };
            self.pts.extend(coords[..until].iter().rev());
        }
    }

    /// This ring's handle.
    #[inline]
    pub fn id(&self) -> RingId {
        self.id
    }

    /// Which successor chain the ring was walked along.
    #[inline]
    pub fn kind(&self) -> RingKind {
        self.kind
    }

    /// The directed edges of the ring, in walk order.
    #[inline]
    pub fn edges(&self) -> &[DirectedEdgeId] {
        &self.edges
    }

    /// The ring's coordinate run, closed (the last point repeats the first).
    #[inline]
    pub fn coords(&self) -> &[Coordinate] {
        &self.pts
    }

    /// The merged ring label.
    #[inline]
    pub fn label(&self) -> &Label {
        &self.label
    }

    /// True when the ring winds counter-clockwise, i.e. bounds a hole.
    /// Result shells are walked clockwise, holes counter-clockwise.
    pub fn is_hole(&self) -> bool {
        *self.is_hole.get_or_init(|| is_ccw(&self.pts))
    }

    /// Highest number of times the ring passes through a single node.
    /// Greater than 1 only for maximal rings, which then need splitting
    /// into minimal rings.
    pub fn max_node_repeats(&self, graph: &PlanarGraph) -> usize {
        let mut counts = hashbrown::HashMap::new();
        for &de in &self.edges {
            *counts.entry(graph.dir(de).origin()).or_insert(0usize) += 1;
        }
        counts.values().copied().max().unwrap_or(0)
    }
}

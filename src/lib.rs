//! # geom-graph
//!
//! geom-graph is a planar-graph topology engine for geometry overlay
//! operations. It builds a labelled planar graph from the noded edges of one
//! or two input geometries (operands 0 and 1) and answers the topological
//! questions that underlie intersection, union and difference: whether the
//! input edge set is properly noded, which side of each edge lies in which
//! operand's interior, and how the directed edges of the result link up into
//! closed rings.
//!
//! The crate deliberately stops at the graph boundary. Intersection finding,
//! edge splitting and final ring-to-polygon assembly are the caller's job;
//! this crate consumes already-noded coordinate runs plus side labels, and
//! produces directed edges flagged as in-result together with linked
//! [`EdgeRing`](topology::edge_ring::EdgeRing)s.
//!
//! ## Determinism
//!
//! Edge order around each node (counter-clockwise, starting from the positive
//! x-axis) and edge-list insertion order are semantically load-bearing: ring
//! linking walks them directly. Both orders are fully deterministic, and the
//! graph is exclusively owned by the operation that builds it.
//!
//! ## Errors
//!
//! All public APIs are non-panicking and return
//! [`TopologyError`](error::TopologyError). Input defects (bad noding) are
//! detected by the pre-flight [`NodingValidator`](noding::validator::NodingValidator);
//! everything else in the error enum signals an internal consistency defect
//! that is fatal for the operation.

pub mod debug_invariants;
pub mod error;
pub mod geom;
pub mod noding;
pub mod topology;

pub use debug_invariants::DebugInvariants;
pub use error::TopologyError;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::error::TopologyError;
    pub use crate::geom::coordinate::Coordinate;
    pub use crate::geom::quadrant::Quadrant;
    pub use crate::noding::segment_string::SegmentString;
    pub use crate::noding::validator::{NodingValidator, ValidationOptions, ViolationHandling};
    pub use crate::topology::depth::Depth;
    pub use crate::topology::edge_list::EdgeList;
    pub use crate::topology::edge_ring::{EdgeRing, RingId, RingKind};
    pub use crate::topology::graph::PlanarGraph;
    pub use crate::topology::label::{Label, TopologyLocation};
    pub use crate::topology::location::{Location, Position};
    pub use crate::topology::result::{OverlayKind, is_result_of_op};
    pub use crate::topology::{DirectedEdgeId, EdgeId, NodeId};
}

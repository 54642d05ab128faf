//! TopologyError: Unified error type for geom-graph public APIs
//!
//! This error type is used throughout the crate to provide robust,
//! non-panicking error handling. Variants fall into two classes: input
//! defects (detected by the noding validator before any graph mutation,
//! recoverable by the caller) and internal consistency defects (fatal for
//! the operation; no partial result is produced).

use crate::geom::coordinate::Coordinate;
use thiserror::Error;

/// Unified error type for planar-graph topology operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TopologyError {
    /// Two segments intersect somewhere other than a shared endpoint.
    /// Input defect: the operand is non-simple or was not noded.
    #[error("noding violation at {coord}: segments intersect away from a shared endpoint")]
    NodingViolation {
        /// Offending intersection point.
        coord: Coordinate,
    },
    /// A coordinate run contains two consecutive equal points.
    #[error("zero-length segment at {coord}")]
    ZeroLengthSegment {
        /// The repeated point.
        coord: Coordinate,
    },
    /// An edge needs at least two coordinates.
    #[error("edge requires at least 2 coordinates, found {found}")]
    TooFewCoordinates {
        /// Number of coordinates supplied.
        found: usize,
    },
    /// Quadrant of a zero-length direction vector is undefined.
    #[error("cannot compute the quadrant of a zero-length direction vector")]
    ZeroDirectionVector,
    /// Depth propagation around a node star closed on a value that
    /// contradicts the start edge's known depth, or a directed edge was
    /// assigned two different depths for the same side. Signals a
    /// non-simple or badly noded input.
    #[error("depth mismatch at {coord}: expected {expected}, found {found}")]
    DepthMismatch {
        /// Node or edge coordinate where the contradiction surfaced.
        coord: Coordinate,
        /// Depth already recorded for the position.
        expected: i32,
        /// Depth the propagation arrived at.
        found: i32,
    },
    /// Ring linking found an incoming result edge with no outgoing edge to
    /// pair it with. Fatal for the ring.
    #[error("dangling edge at {coord}: no outgoing directed edge found")]
    DanglingEdge {
        /// Coordinate of the node being linked.
        coord: Coordinate,
    },
    /// Both candidate edges of a star are exactly horizontal, so the
    /// rightmost edge (used to seed ring orientation) is ambiguous.
    #[error("ambiguous rightmost edge at {coord}: two horizontal edges incident on node")]
    AmbiguousRightmostEdge {
        /// Coordinate of the node.
        coord: Coordinate,
    },
    /// Ring building revisited a directed edge already assigned to the ring
    /// under construction.
    #[error("directed edge at {coord} visited twice during ring building")]
    RingVisitTwice {
        /// Coordinate where the walk looped back.
        coord: Coordinate,
    },
    /// An arena id did not resolve to a live graph component.
    #[error("missing graph component: {what}")]
    MissingGraphComponent {
        /// What kind of component the id should have resolved to.
        what: &'static str,
    },
    /// A structural invariant of the graph does not hold.
    #[error("graph invariant violated: {what}")]
    InvariantViolation {
        /// Description of the broken invariant.
        what: String,
    },
}

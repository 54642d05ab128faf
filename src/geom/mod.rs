//! Leaf geometric primitives for the topology graph.
//!
//! Nothing in here knows about labels, depths or the graph; these are the
//! value types and predicates the graph layers are built from:
//! - [`coordinate::Coordinate`]: value-compared (x, y) pairs
//! - [`quadrant::Quadrant`]: coarse angular bucketing of edge directions
//! - [`orientation`]: exact orientation index and ring orientation
//! - [`segment`]: segment-pair relationship classification for the noding
//!   validator

pub mod coordinate;
pub mod orientation;
pub mod quadrant;
pub mod segment;

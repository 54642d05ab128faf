//! The labelled planar graph and its algorithms.
//!
//! This module provides the core types for building and interrogating the
//! topology graph of an overlay operation:
//! - [`label`] / [`location`] / [`depth`]: the labelling primitives
//! - [`edge`], [`directed_edge`], [`node`]: arena records
//! - [`graph`]: the [`graph::PlanarGraph`] arena that owns everything
//! - [`star`]: the CCW-ordered edge star at each node and its algorithms
//! - [`edge_list`], [`edge_ring`], [`result`]: edge registry, ring building
//!   and overlay-result selection
//!
//! Most users will build a [`graph::PlanarGraph`], insert noded edges, and
//! run labelling, depth propagation and ring linking through its methods.

pub mod depth;
pub mod directed_edge;
pub mod edge;
pub mod edge_list;
pub mod edge_ring;
pub mod graph;
pub mod handles;
pub mod label;
pub mod location;
pub mod node;
pub mod result;
pub mod star;

pub use handles::{DirectedEdgeId, EdgeId, NodeId};

//! Noding pre-flight: segment strings and the validator that checks an edge
//! set is properly noded before graph construction begins.
//!
//! The graph layer assumes its input edges only ever meet at shared
//! endpoints. [`validator::NodingValidator`] verifies that assumption over a
//! set of [`segment_string::SegmentString`]s and reports the first witness
//! coordinate of any interior intersection.

pub mod segment_string;
pub mod validator;

pub use segment_string::SegmentString;
pub use validator::{NodingValidator, ValidationOptions, ViolationHandling};

//! `Coordinate`: a planar (x, y) pair, compared by value.
//!
//! Coordinates are plain `f64` pairs. Two coordinates are equal iff both
//! components compare equal, which is what node lookup and edge
//! deduplication rely on. For use as a hash-map key the coordinate is
//! reduced to a [`CoordKey`] of normalized bit patterns (`-0.0` collapses to
//! `0.0`), so value-equal coordinates always collide.

use std::cmp::Ordering;
use std::fmt;

/// A planar coordinate, compared by value.
#[derive(Copy, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Coordinate {
    /// Easting / horizontal ordinate.
    pub x: f64,
    /// Northing / vertical ordinate.
    pub y: f64,
}

impl Coordinate {
    /// Construct a coordinate from its two ordinates.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Coordinate { x, y }
    }

    /// Total lexicographic order (x first, then y), usable on any finite
    /// coordinate. Used to orientation-normalize coordinate runs.
    #[inline]
    pub fn compare(&self, other: &Coordinate) -> Ordering {
        self.x
            .total_cmp(&other.x)
            .then_with(|| self.y.total_cmp(&other.y))
    }

    /// Hashable key with `-0.0` normalized to `0.0`.
    #[inline]
    pub fn key(&self) -> CoordKey {
        CoordKey {
            x: normalize_bits(self.x),
            y: normalize_bits(self.y),
        }
    }
}

#[inline]
fn normalize_bits(v: f64) -> u64 {
    // -0.0 == 0.0 by value, so they must share a key.
    if v == 0.0 { 0.0f64.to_bits() } else { v.to_bits() }
}

/// Bit-level key for coordinate-indexed maps.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct CoordKey {
    x: u64,
    y: u64,
}

impl fmt::Debug for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Coordinate")
            .field(&self.x)
            .field(&self.y)
            .finish()
    }
}

/// Prints as `(x, y)`; used verbatim in error messages.
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(f64, f64)> for Coordinate {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Coordinate::new(x, y)
    }
}

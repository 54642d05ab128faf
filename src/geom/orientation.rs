//! Exact orientation predicates and ring orientation.
//!
//! The engine never computes intersection points itself, but it does need to
//! *classify*: on which side of a directed segment a point lies (edge-star
//! ordering, segment relationship tests) and whether a closed ring winds
//! counter-clockwise (shell/hole discrimination). Side classification goes
//! through `robust::orient2d` so near-collinear inputs bucket consistently.

use crate::geom::coordinate::Coordinate;

/// Counter-clockwise turn.
pub const CCW: i8 = 1;
/// Clockwise turn.
pub const CW: i8 = -1;
/// No turn; the three points are collinear.
pub const COLLINEAR: i8 = 0;

#[inline]
fn rc(p: Coordinate) -> robust::Coord<f64> {
    robust::Coord { x: p.x, y: p.y }
}

/// Orientation index of the turn `p0 -> p1 -> p2`:
/// [`CCW`] for a left turn, [`CW`] for a right turn, [`COLLINEAR`] otherwise.
#[inline]
pub fn orientation_index(p0: Coordinate, p1: Coordinate, p2: Coordinate) -> i8 {
    let det = robust::orient2d(rc(p0), rc(p1), rc(p2));
    if det > 0.0 {
        CCW
    } else if det < 0.0 {
        CW
    } else {
        COLLINEAR
    }
}

/// Twice the signed area of the ring, positive when the ring winds CCW.
///
/// The ring may be given open or closed; the closing segment is implied.
pub fn signed_area2(ring: &[Coordinate]) -> f64 {
    if ring.len() < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..ring.len() {
        let p = ring[i];
        let q = ring[(i + 1) % ring.len()];
        sum += p.x * q.y - q.x * p.y;
    }
    sum
}

/// True iff the ring winds counter-clockwise.
#[inline]
pub fn is_ccw(ring: &[Coordinate]) -> bool {
    signed_area2(ring) > 0.0
}

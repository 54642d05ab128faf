//! Segment-pair relationship classification.
//!
//! The noding validator only needs to *recognize* how two segments meet,
//! never to node them. A pair is valid when the segments are disjoint or
//! meet at a shared endpoint; everything else (a proper interior crossing, an
//! endpoint landing on the interior of the other segment, or a collinear
//! overlap of positive length) breaks the noding precondition and is
//! reported with a witness coordinate.

use crate::geom::coordinate::Coordinate;
use crate::geom::orientation::{COLLINEAR, orientation_index};

/// How two segments relate to each other.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SegmentRelation {
    /// No common point.
    Disjoint,
    /// The only common point is an endpoint of both segments.
    SharedEndpoint(Coordinate),
    /// Interiors cross at the carried (approximate) point.
    ProperCrossing(Coordinate),
    /// An endpoint of one segment lies in the interior of the other.
    EndpointOnInterior(Coordinate),
    /// The segments are collinear and share more than a single point; the
    /// carried coordinate is an endpoint inside the overlap.
    CollinearOverlap(Coordinate),
}

impl SegmentRelation {
    /// True for the relations a properly noded segment set must not contain.
    #[inline]
    pub fn is_noding_violation(&self) -> bool {
        matches!(
            self,
            SegmentRelation::ProperCrossing(_)
                | SegmentRelation::EndpointOnInterior(_)
                | SegmentRelation::CollinearOverlap(_)
        )
    }

    /// Witness coordinate of a violating relation.
    pub fn violation_coord(&self) -> Option<Coordinate> {
        match *self {
            SegmentRelation::ProperCrossing(c)
            | SegmentRelation::EndpointOnInterior(c)
            | SegmentRelation::CollinearOverlap(c) => Some(c),
            _ => None,
        }
    }
}

/// Classify how segment `p0-p1` relates to segment `q0-q1`.
pub fn relate_segments(
    p0: Coordinate,
    p1: Coordinate,
    q0: Coordinate,
    q1: Coordinate,
) -> SegmentRelation {
    if !envelopes_overlap(p0, p1, q0, q1) {
        return SegmentRelation::Disjoint;
    }

    let a = orientation_index(p0, p1, q0);
    let b = orientation_index(p0, p1, q1);
    let c = orientation_index(q0, q1, p0);
    let d = orientation_index(q0, q1, p1);

    if a == COLLINEAR && b == COLLINEAR {
        return relate_collinear(p0, p1, q0, q1);
    }

    if a != b && a != COLLINEAR && b != COLLINEAR && c != d && c != COLLINEAR && d != COLLINEAR {
        return SegmentRelation::ProperCrossing(crossing_point(p0, p1, q0, q1));
    }

    // At most one orientation is zero here: a single touch point, if any.
    let touches = [
        (a, q0, p0, p1),
        (b, q1, p0, p1),
        (c, p0, q0, q1),
        (d, p1, q0, q1),
    ];
    let mut shared = None;
    for (orient, pt, s0, s1) in touches {
        if orient == COLLINEAR && in_envelope(pt, s0, s1) {
            if pt == s0 || pt == s1 {
                shared = Some(pt);
            } else {
                return SegmentRelation::EndpointOnInterior(pt);
            }
        }
    }
    match shared {
        Some(pt) => SegmentRelation::SharedEndpoint(pt),
        None => SegmentRelation::Disjoint,
    }
}

fn relate_collinear(
    p0: Coordinate,
    p1: Coordinate,
    q0: Coordinate,
    q1: Coordinate,
) -> SegmentRelation {
    // Measure along the dominant axis; segments are collinear so one axis
    // carries the full order.
    let vertical = (p1.x - p0.x).abs() < (p1.y - p0.y).abs();
    let m = |p: Coordinate| if vertical { p.y } else { p.x };

    let (plo, phi) = minmax_by(p0, p1, m);
    let (qlo, qhi) = minmax_by(q0, q1, m);

    let lo = if m(plo) >= m(qlo) { plo } else { qlo };
    let hi = if m(phi) <= m(qhi) { phi } else { qhi };

    if m(lo) > m(hi) {
        SegmentRelation::Disjoint
    } else if m(lo) == m(hi) {
        // Single common point; for collinear segments it is an endpoint of
        // both, so this is a legal shared endpoint.
        SegmentRelation::SharedEndpoint(lo)
    } else {
        SegmentRelation::CollinearOverlap(lo)
    }
}

fn minmax_by(
    a: Coordinate,
    b: Coordinate,
    m: impl Fn(Coordinate) -> f64,
) -> (Coordinate, Coordinate) {
    if m(a) <= m(b) { (a, b) } else { (b, a) }
}

#[inline]
fn envelopes_overlap(p0: Coordinate, p1: Coordinate, q0: Coordinate, q1: Coordinate) -> bool {
    p0.x.min(p1.x) <= q0.x.max(q1.x)
        && q0.x.min(q1.x) <= p0.x.max(p1.x)
        && p0.y.min(p1.y) <= q0.y.max(q1.y)
        && q0.y.min(q1.y) <= p0.y.max(p1.y)
}

#[inline]
fn in_envelope(p: Coordinate, s0: Coordinate, s1: Coordinate) -> bool {
    s0.x.min(s1.x) <= p.x && p.x <= s0.x.max(s1.x) && s0.y.min(s1.y) <= p.y && p.y <= s0.y.max(s1.y)
}

/// Approximate intersection point of two properly crossing segments.
/// Diagnostic only; the engine never feeds this back into the graph.
fn crossing_point(p0: Coordinate, p1: Coordinate, q0: Coordinate, q1: Coordinate) -> Coordinate {
    let dpx = p1.x - p0.x;
    let dpy = p1.y - p0.y;
    let dqx = q1.x - q0.x;
    let dqy = q1.y - q0.y;
    let denom = dpx * dqy - dpy * dqx;
    // denom != 0: the caller established a proper crossing.
    let t = ((q0.x - p0.x) * dqy - (q0.y - p0.y) * dqx) / denom;
    Coordinate::new(p0.x + t * dpx, p0.y + t * dpy)
}

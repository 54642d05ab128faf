//! `Quadrant`: coarse angular bucketing of edge directions.
//!
//! Directed edges around a node are ordered counter-clockwise. The quadrant
//! of an edge's initial direction vector gives the coarse key of that order;
//! a finer orientation comparison breaks ties within a quadrant. Quadrants
//! are numbered CCW from the positive x-axis: NE=0, NW=1, SW=2, SE=3.

use crate::error::TopologyError;
use crate::geom::coordinate::Coordinate;

/// One of four 90° angular sectors.
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    serde::Serialize,
    serde::Deserialize,
)]
#[repr(u8)]
pub enum Quadrant {
    /// dx ≥ 0, dy ≥ 0
    NE = 0,
    /// dx < 0, dy ≥ 0
    NW = 1,
    /// dx < 0, dy < 0
    SW = 2,
    /// dx ≥ 0, dy < 0
    SE = 3,
}

impl Quadrant {
    /// Quadrant of the displacement vector `(dx, dy)`.
    ///
    /// Fails with [`TopologyError::ZeroDirectionVector`] when both components
    /// are zero.
    pub fn from_delta(dx: f64, dy: f64) -> Result<Self, TopologyError> {
        if dx == 0.0 && dy == 0.0 {
            return Err(TopologyError::ZeroDirectionVector);
        }
        Ok(match (dx >= 0.0, dy >= 0.0) {
            (true, true) => Quadrant::NE,
            (false, true) => Quadrant::NW,
            (false, false) => Quadrant::SW,
            (true, false) => Quadrant::SE,
        })
    }

    /// Quadrant of the direction from `p0` to `p1`.
    ///
    /// Fails when the two points are equal.
    #[inline]
    pub fn from_points(p0: Coordinate, p1: Coordinate) -> Result<Self, TopologyError> {
        Self::from_delta(p1.x - p0.x, p1.y - p0.y)
    }

    /// Numeric value of the quadrant (0..4, CCW from the positive x-axis).
    #[inline]
    pub const fn as_index(self) -> u8 {
        self as u8
    }

    /// Quadrant for a numeric value, taken mod 4.
    #[inline]
    pub const fn from_index(index: u8) -> Self {
        match index % 4 {
            0 => Quadrant::NE,
            1 => Quadrant::NW,
            2 => Quadrant::SW,
            _ => Quadrant::SE,
        }
    }

    /// True for NE and NW (direction vector has dy ≥ 0).
    #[inline]
    pub const fn is_northern(self) -> bool {
        matches!(self, Quadrant::NE | Quadrant::NW)
    }

    /// True iff the two quadrants are diagonally opposite (difference of 2
    /// mod 4), meaning their directions share no half-plane.
    #[inline]
    pub const fn is_opposite(self, other: Quadrant) -> bool {
        (self.as_index() + 4 - other.as_index()) % 4 == 2
    }

    /// The quadrant lying in the half-plane common to both arguments, or
    /// `None` when they are opposite and share no half-plane.
    ///
    /// Equal quadrants are their own answer; otherwise the result is the
    /// smaller of the two, except the pair {NE, SE} which wraps to SE.
    pub const fn common_half_plane(q1: Quadrant, q2: Quadrant) -> Option<Quadrant> {
        if q1.as_index() == q2.as_index() {
            return Some(q1);
        }
        if q1.is_opposite(q2) {
            return None;
        }
        let min = if q1.as_index() < q2.as_index() { q1 } else { q2 };
        let max = if q1.as_index() < q2.as_index() { q2 } else { q1 };
        // {NE, SE} straddles the seam at the positive x-axis.
        if min.as_index() == 0 && max.as_index() == 3 {
            Some(Quadrant::SE)
        } else {
            Some(min)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_directions() {
        assert_eq!(Quadrant::from_delta(1.0, 0.0).unwrap(), Quadrant::NE);
        assert_eq!(Quadrant::from_delta(0.0, 1.0).unwrap(), Quadrant::NE);
        assert_eq!(Quadrant::from_delta(-1.0, 0.0).unwrap(), Quadrant::NW);
        assert_eq!(Quadrant::from_delta(0.0, -1.0).unwrap(), Quadrant::SE);
        assert_eq!(Quadrant::from_delta(-1.0, -1.0).unwrap(), Quadrant::SW);
    }

    #[test]
    fn zero_vector_fails() {
        assert_eq!(
            Quadrant::from_delta(0.0, 0.0),
            Err(TopologyError::ZeroDirectionVector)
        );
        let p = Coordinate::new(3.0, 4.0);
        assert_eq!(
            Quadrant::from_points(p, p),
            Err(TopologyError::ZeroDirectionVector)
        );
    }

    #[test]
    fn northern_hemisphere() {
        assert!(Quadrant::NE.is_northern());
        assert!(Quadrant::NW.is_northern());
        assert!(!Quadrant::SW.is_northern());
        assert!(!Quadrant::SE.is_northern());
    }

    #[test]
    fn opposite_pairs() {
        assert!(Quadrant::NE.is_opposite(Quadrant::SW));
        assert!(Quadrant::NW.is_opposite(Quadrant::SE));
        assert!(!Quadrant::NE.is_opposite(Quadrant::NW));
        assert!(!Quadrant::NE.is_opposite(Quadrant::NE));
    }

    #[test]
    fn common_half_plane_identity() {
        for q in [Quadrant::NE, Quadrant::NW, Quadrant::SW, Quadrant::SE] {
            assert_eq!(Quadrant::common_half_plane(q, q), Some(q));
        }
    }

    #[test]
    fn common_half_plane_opposites_are_none() {
        assert_eq!(Quadrant::common_half_plane(Quadrant::NE, Quadrant::SW), None);
        assert_eq!(Quadrant::common_half_plane(Quadrant::SE, Quadrant::NW), None);
    }

    #[test]
    fn common_half_plane_adjacent() {
        assert_eq!(
            Quadrant::common_half_plane(Quadrant::NE, Quadrant::NW),
            Some(Quadrant::NE)
        );
        assert_eq!(
            Quadrant::common_half_plane(Quadrant::SW, Quadrant::NW),
            Some(Quadrant::NW)
        );
        // the {NE, SE} pair wraps across the positive x-axis
        assert_eq!(
            Quadrant::common_half_plane(Quadrant::NE, Quadrant::SE),
            Some(Quadrant::SE)
        );
        assert_eq!(
            Quadrant::common_half_plane(Quadrant::SE, Quadrant::NE),
            Some(Quadrant::SE)
        );
    }

    #[test]
    fn index_roundtrip() {
        for i in 0..4u8 {
            assert_eq!(Quadrant::from_index(i).as_index(), i);
        }
        assert_eq!(Quadrant::from_index(7), Quadrant::SE);
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn total_on_nonzero_vectors(dx in -1e9f64..1e9, dy in -1e9f64..1e9) {
            prop_assume!(dx != 0.0 || dy != 0.0);
            let q = Quadrant::from_delta(dx, dy).unwrap();
            prop_assert!(q.as_index() < 4);
        }

        #[test]
        fn opposite_iff_no_common_half_plane(a in 0u8..4, b in 0u8..4) {
            let q1 = Quadrant::from_index(a);
            let q2 = Quadrant::from_index(b);
            prop_assert_eq!(
                Quadrant::common_half_plane(q1, q2).is_none(),
                q1.is_opposite(q2)
            );
        }
    }
}

//! `SegmentString`: a coordinate run viewed as its consecutive segments.

use crate::error::TopologyError;
use crate::geom::coordinate::Coordinate;
use itertools::Itertools;

/// A polyline to be validated, viewed segment by segment.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SegmentString {
    coords: Vec<Coordinate>,
}

impl SegmentString {
    /// Wrap a coordinate run. At least two coordinates are required.
    pub fn new(coords: Vec<Coordinate>) -> Result<Self, TopologyError> {
        if coords.len() < 2 {
            return Err(TopologyError::TooFewCoordinates {
                found: coords.len(),
            });
        }
        Ok(SegmentString { coords })
    }

    /// The underlying coordinate run.
    #[inline]
    pub fn coords(&self) -> &[Coordinate] {
        &self.coords
    }

    /// Number of segments (one less than the number of coordinates).
    #[inline]
    pub fn segment_count(&self) -> usize {
        self.coords.len() - 1
    }

    /// True when the run closes on itself.
    #[inline]
    pub fn is_closed(&self) -> bool {
        self.coords.first() == self.coords.last()
    }

    /// The consecutive segments of the run.
    pub fn segments(&self) -> impl Iterator<Item = (Coordinate, Coordinate)> + '_ {
        self.coords.iter().copied().tuple_windows()
    }
}

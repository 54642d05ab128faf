//! `NodingValidator`: all-pairs check that a segment set is properly noded.

use crate::error::TopologyError;
use crate::geom::segment::relate_segments;
use crate::noding::segment_string::SegmentString;
use itertools::Itertools;

/// What to do when a violation is found.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum ViolationHandling {
    /// Log each violation at warn level and report success.
    Warn,
    /// Fail on the first violation.
    #[default]
    Error,
}

/// Validator configuration.
#[derive(Copy, Clone, Debug, Default)]
pub struct ValidationOptions {
    /// Skip the zero-length segment check (consecutive duplicate
    /// coordinates). The check runs by default.
    pub skip_zero_length_check: bool,
    /// Violation handling; failing is the default.
    pub handling: ViolationHandling,
}

/// Checks that no two segments of the input meet anywhere except at shared
/// endpoints.
///
/// The check is exhaustive over all segment pairs, within and across
/// strings. Adjacent segments of one string share an endpoint by
/// construction, which is legal; everything beyond that single shared point
/// is a violation.
#[derive(Debug)]
pub struct NodingValidator<'a> {
    strings: &'a [SegmentString],
    options: ValidationOptions,
}

impl<'a> NodingValidator<'a> {
    /// Validator with default options (zero-length check on, fail on first
    /// violation).
    pub fn new(strings: &'a [SegmentString]) -> Self {
        NodingValidator {
            strings,
            options: ValidationOptions::default(),
        }
    }

    /// Validator with explicit options.
    pub fn with_options(strings: &'a [SegmentString], options: ValidationOptions) -> Self {
        NodingValidator { strings, options }
    }

    /// Run the full check.
    ///
    /// With [`ViolationHandling::Error`] the first violation aborts with
    /// [`TopologyError::NodingViolation`] (or
    /// [`TopologyError::ZeroLengthSegment`]); with
    /// [`ViolationHandling::Warn`] every violation is logged and `Ok` is
    /// returned.
    pub fn check_valid(&self) -> Result<(), TopologyError> {
        if !self.options.skip_zero_length_check {
            self.check_no_zero_length_segments()?;
        }
        self.check_no_interior_intersections()
    }

    fn check_no_zero_length_segments(&self) -> Result<(), TopologyError> {
        for string in self.strings {
            for (a, b) in string.segments() {
                if a == b {
                    match self.options.handling {
                        ViolationHandling::Warn => {
                            log::warn!("zero-length segment at {a}");
                        }
                        ViolationHandling::Error => {
                            return Err(TopologyError::ZeroLengthSegment { coord: a });
                        }
                    }
                }
            }
        }
        Ok(())
    }

    fn check_no_interior_intersections(&self) -> Result<(), TopologyError> {
        let segments: Vec<_> = self.strings.iter().flat_map(|s| s.segments()).collect();
        for ((p0, p1), (q0, q1)) in segments.iter().copied().tuple_combinations() {
            let relation = relate_segments(p0, p1, q0, q1);
            if let Some(coord) = relation.violation_coord() {
                match self.options.handling {
                    ViolationHandling::Warn => {
                        log::warn!(
                            "noding violation at {coord}: {relation:?} between \
                             {p0}-{p1} and {q0}-{q1}"
                        );
                    }
                    ViolationHandling::Error => {
                        return Err(TopologyError::NodingViolation { coord });
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::coordinate::Coordinate;

    fn c(x: f64, y: f64) -> Coordinate {
        Coordinate::new(x, y)
    }

    fn string(coords: &[(f64, f64)]) -> SegmentString {
        SegmentString::new(coords.iter().map(|&(x, y)| c(x, y)).collect()).unwrap()
    }

    #[test]
    fn crossing_segments_fail() {
        let strings = [
            string(&[(0.0, 0.0), (2.0, 2.0)]),
            string(&[(0.0, 2.0), (2.0, 0.0)]),
        ];
        let err = NodingValidator::new(&strings).check_valid().unwrap_err();
        assert_eq!(
            err,
            TopologyError::NodingViolation {
                coord: c(1.0, 1.0)
            }
        );
    }

    #[test]
    fn shared_endpoints_pass() {
        let strings = [
            string(&[(0.0, 0.0), (1.0, 1.0)]),
            string(&[(1.0, 1.0), (2.0, 0.0)]),
            string(&[(1.0, 1.0), (1.0, 3.0)]),
        ];
        assert!(NodingValidator::new(&strings).check_valid().is_ok());
    }

    #[test]
    fn endpoint_on_interior_fails() {
        let strings = [
            string(&[(0.0, 0.0), (4.0, 0.0)]),
            string(&[(2.0, 0.0), (2.0, 3.0)]),
        ];
        let err = NodingValidator::new(&strings).check_valid().unwrap_err();
        assert_eq!(
            err,
            TopologyError::NodingViolation {
                coord: c(2.0, 0.0)
            }
        );
    }

    #[test]
    fn collinear_overlap_fails() {
        let strings = [
            string(&[(0.0, 0.0), (3.0, 0.0)]),
            string(&[(1.0, 0.0), (5.0, 0.0)]),
        ];
        assert!(NodingValidator::new(&strings).check_valid().is_err());
    }

    #[test]
    fn intra_string_crossing_fails() {
        // one string whose last segment crosses its first
        let strings = [string(&[(0.0, 0.0), (4.0, 0.0), (4.0, 2.0), (2.0, -1.0)])];
        assert!(NodingValidator::new(&strings).check_valid().is_err());
    }

    #[test]
    fn zero_length_segment_fails_by_default() {
        let strings = [string(&[(0.0, 0.0), (0.0, 0.0), (1.0, 0.0)])];
        let err = NodingValidator::new(&strings).check_valid().unwrap_err();
        assert_eq!(
            err,
            TopologyError::ZeroLengthSegment {
                coord: c(0.0, 0.0)
            }
        );
    }

    #[test]
    fn zero_length_check_can_be_skipped() {
        let strings = [string(&[(0.0, 0.0), (0.0, 0.0), (1.0, 0.0)])];
        let options = ValidationOptions {
            skip_zero_length_check: true,
            ..Default::default()
        };
        assert!(
            NodingValidator::with_options(&strings, options)
                .check_valid()
                .is_ok()
        );
    }

    #[test]
    fn warn_mode_reports_success() {
        let strings = [
            string(&[(0.0, 0.0), (2.0, 2.0)]),
            string(&[(0.0, 2.0), (2.0, 0.0)]),
        ];
        let options = ValidationOptions {
            handling: ViolationHandling::Warn,
            ..Default::default()
        };
        assert!(
            NodingValidator::with_options(&strings, options)
                .check_valid()
                .is_ok()
        );
    }

    #[test]
    fn well_noded_square_pair_passes() {
        // two squares meeting along a shared edge; the shared edge appears
        // once, as proper noding requires
        let strings = [
            string(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.0, 0.0)]),
            string(&[(1.0, 0.0), (2.0, 0.0), (2.0, 1.0), (1.0, 1.0)]),
        ];
        assert!(NodingValidator::new(&strings).check_valid().is_ok());
    }
}

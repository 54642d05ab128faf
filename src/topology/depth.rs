//! `Depth`: per-operand, per-side traversal-count accumulator.
//!
//! A depth counts how many times the area on one side of an edge lies within
//! an operand's interior. Where a label is a boolean classification, a depth
//! is a crossing multiplicity: coincident edges contributed by overlapping
//! rings *sum*, which is what makes interior/exterior inference robust under
//! duplicated linework. Unknown cells are `None`, never a sentinel value, so
//! arithmetic on an undetermined depth cannot happen silently.

use crate::topology::label::Label;
use crate::topology::location::{Location, Position};
use std::fmt;

/// Depth contribution of a location: Exterior adds 0, Interior adds 1,
/// Boundary contributes nothing.
#[inline]
pub const fn depth_at_location(loc: Location) -> Option<i32> {
    match loc {
        Location::Exterior => Some(0),
        Location::Interior => Some(1),
        Location::Boundary => None,
    }
}

/// A 2×3 grid of optional traversal counts: operand × position.
/// The On column is carried for addressing symmetry but depth semantics only
/// use Left and Right.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Depth {
    depth: [[Option<i32>; 3]; 2],
}

impl Depth {
    /// A fully-unknown depth grid.
    #[inline]
    pub const fn new() -> Self {
        Depth {
            depth: [[None; 3]; 2],
        }
    }

    /// Cell at (`geom`, `pos`), `None` when still unknown.
    #[inline]
    pub fn get(&self, geom: usize, pos: Position) -> Option<i32> {
        self.depth[geom][pos as usize]
    }

    /// Overwrite the cell at (`geom`, `pos`).
    #[inline]
    pub fn set(&mut self, geom: usize, pos: Position, value: i32) {
        self.depth[geom][pos as usize] = Some(value);
    }

    /// True when every cell of both operands is unknown.
    pub fn is_null(&self) -> bool {
        self.depth
            .iter()
            .all(|row| row.iter().all(|c| c.is_none()))
    }

    /// True when every cell of `geom` is unknown.
    pub fn is_null_at(&self, geom: usize) -> bool {
        self.depth[geom].iter().all(|c| c.is_none())
    }

    /// True when the single cell at (`geom`, `pos`) is unknown.
    #[inline]
    pub fn is_null_cell(&self, geom: usize, pos: Position) -> bool {
        self.depth[geom][pos as usize].is_none()
    }

    /// Count one interior crossing at (`geom`, `pos`). Non-interior
    /// locations leave the cell untouched; an unknown cell starts at zero.
    pub fn add(&mut self, geom: usize, pos: Position, loc: Location) {
        if loc == Location::Interior {
            let cell = &mut self.depth[geom][pos as usize];
            *cell = Some(cell.unwrap_or(0) + 1);
        }
    }

    /// Accumulate a label's side locations into the grid. For each operand
    /// and each of Left/Right: an Interior or Exterior location initializes
    /// an unknown cell with its contribution, and *adds* to a known cell —
    /// coincident edges deliberately sum.
    pub fn add_label(&mut self, label: &Label) {
        for geom in 0..2 {
            for pos in [Position::Left, Position::Right] {
                let Some(loc) = label.get(geom, pos) else {
                    continue;
                };
                let Some(contribution) = depth_at_location(loc) else {
                    continue;
                };
                let cell = &mut self.depth[geom][pos as usize];
                *cell = match *cell {
                    None => Some(contribution),
                    Some(v) => Some(v + contribution),
                };
            }
        }
    }

    /// Right depth minus left depth for `geom`; unknown sides count as 0.
    /// For a valid ring this equals the edge's own depth delta.
    pub fn delta(&self, geom: usize) -> i32 {
        self.get(geom, Position::Right).unwrap_or(0) - self.get(geom, Position::Left).unwrap_or(0)
    }

    /// Location inferred from a cell: Exterior when the depth is unknown or
    /// ≤ 0, Interior otherwise.
    pub fn location_at(&self, geom: usize, pos: Position) -> Location {
        match self.get(geom, pos) {
            Some(d) if d > 0 => Location::Interior,
            _ => Location::Exterior,
        }
    }

    /// Collapse raw traversal counts back into a binary inside/outside
    /// signal: per operand, subtract the smaller of the Left/Right depths
    /// (floored at 0), then clamp each side to {0, 1}. Unknown sides of a
    /// partially-known operand become 0.
    pub fn normalize(&mut self) {
        for geom in 0..2 {
            if self.is_null_at(geom) {
                continue;
            }
            let mut min_depth = i32::MAX;
            for pos in [Position::Left, Position::Right] {
                if let Some(v) = self.depth[geom][pos as usize] {
                    min_depth = min_depth.min(v);
                }
            }
            if min_depth < 0 {
                min_depth = 0;
            }
            for pos in [Position::Left, Position::Right] {
                let cell = &mut self.depth[geom][pos as usize];
                let above = cell.is_some_and(|v| v > min_depth);
                *cell = Some(if above { 1 } else { 0 });
            }
        }
    }
}

impl fmt::Display for Depth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cell = |c: Option<i32>| match c {
            Some(v) => v.to_string(),
            None => "?".to_string(),
        };
        write!(
            f,
            "A:{}/{} B:{}/{}",
            cell(self.get(0, Position::Left)),
            cell(self.get(0, Position::Right)),
            cell(self.get(1, Position::Left)),
            cell(self.get(1, Position::Right)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::label::TopologyLocation;
    use crate::topology::location::Location::*;
    use crate::topology::location::Position::*;

    #[test]
    fn starts_unknown() {
        let d = Depth::new();
        assert!(d.is_null());
        assert!(d.is_null_at(0));
        assert!(d.is_null_cell(1, Right));
    }

    #[test]
    fn add_counts_interior_only() {
        let mut d = Depth::new();
        d.add(0, Left, Exterior);
        assert!(d.is_null_cell(0, Left));
        d.add(0, Left, Interior);
        d.add(0, Left, Interior);
        assert_eq!(d.get(0, Left), Some(2));
    }

    #[test]
    fn add_label_initializes_then_accumulates() {
        let label = Label::new(
            TopologyLocation::area_at(Boundary, Interior, Exterior),
            TopologyLocation::line(),
        );
        let mut d = Depth::new();
        d.add_label(&label);
        assert_eq!(d.get(0, Left), Some(1));
        assert_eq!(d.get(0, Right), Some(0));
        assert!(d.is_null_at(1));

        // a second coincident pass sums
        d.add_label(&label);
        assert_eq!(d.get(0, Left), Some(2));
        assert_eq!(d.get(0, Right), Some(0));
    }

    #[test]
    fn boundary_contributes_nothing() {
        let label = Label::new(
            TopologyLocation::area_at(Boundary, Boundary, Boundary),
            TopologyLocation::line(),
        );
        let mut d = Depth::new();
        d.add_label(&label);
        assert!(d.is_null());
    }

    #[test]
    fn delta_and_locations() {
        let mut d = Depth::new();
        d.set(0, Left, 0);
        d.set(0, Right, 2);
        assert_eq!(d.delta(0), 2);
        assert_eq!(d.location_at(0, Left), Exterior);
        assert_eq!(d.location_at(0, Right), Interior);
        // unknown cells read as exterior
        assert_eq!(d.location_at(1, Left), Exterior);
    }

    #[test]
    fn normalize_clamps_to_binary() {
        let mut d = Depth::new();
        d.set(0, Left, 3);
        d.set(0, Right, 5);
        d.normalize();
        assert_eq!(d.get(0, Left), Some(0));
        assert_eq!(d.get(0, Right), Some(1));
        // untouched operand stays unknown
        assert!(d.is_null_at(1));
    }

    #[test]
    fn normalize_equal_depths_collapse_to_zero() {
        let mut d = Depth::new();
        d.set(1, Left, 2);
        d.set(1, Right, 2);
        d.normalize();
        assert_eq!(d.get(1, Left), Some(0));
        assert_eq!(d.get(1, Right), Some(0));
    }
}

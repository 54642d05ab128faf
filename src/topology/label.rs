//! `TopologyLocation` and `Label`: per-operand side labelling of edges and
//! nodes.
//!
//! A `TopologyLocation` records where one operand geometry lies relative to a
//! graph component. Line-shaped components only have an On entry; area-shaped
//! components additionally carry Left and Right entries. A `Label` is a pair
//! of topology locations, one per operand (index 0 and 1).
//!
//! Labels are filled in progressively while the graph is labelled. The merge
//! rule is fill-only-null: an entry, once set, is never overwritten; the only
//! structural change merge may make is upgrading a line-shaped location to
//! an area-shaped one (preserving On, with Left/Right starting undetermined).

use crate::topology::location::{Location, Position, symbol_or_dash};
use std::fmt;

/// Per-operand location information for one graph component.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TopologyLocation {
    /// Line-shaped: only the On position is meaningful.
    Line {
        /// Location of the operand on the component itself.
        on: Option<Location>,
    },
    /// Area-shaped: On plus the areas to the left and right.
    Area {
        /// Location on the component itself.
        on: Option<Location>,
        /// Location of the area left of the component.
        left: Option<Location>,
        /// Location of the area right of the component.
        right: Option<Location>,
    },
}

impl TopologyLocation {
    /// Undetermined line-shaped location.
    #[inline]
    pub const fn line() -> Self {
        TopologyLocation::Line { on: None }
    }

    /// Line-shaped location with a known On value.
    #[inline]
    pub const fn line_at(on: Location) -> Self {
        TopologyLocation::Line { on: Some(on) }
    }

    /// Undetermined area-shaped location.
    #[inline]
    pub const fn area() -> Self {
        TopologyLocation::Area {
            on: None,
            left: None,
            right: None,
        }
    }

    /// Area-shaped location with all three entries known.
    #[inline]
    pub const fn area_at(on: Location, left: Location, right: Location) -> Self {
        TopologyLocation::Area {
            on: Some(on),
            left: Some(left),
            right: Some(right),
        }
    }

    /// True for the area-shaped variant.
    #[inline]
    pub const fn is_area(&self) -> bool {
        matches!(self, TopologyLocation::Area { .. })
    }

    /// True for the line-shaped variant.
    #[inline]
    pub const fn is_line(&self) -> bool {
        matches!(self, TopologyLocation::Line { .. })
    }

    /// Entry at `pos`; Left/Right of a line-shaped location are `None`.
    #[inline]
    pub const fn get(&self, pos: Position) -> Option<Location> {
        match (self, pos) {
            (TopologyLocation::Line { on }, Position::On) => *on,
            (TopologyLocation::Line { .. }, _) => None,
            (TopologyLocation::Area { on, .. }, Position::On) => *on,
            (TopologyLocation::Area { left, .. }, Position::Left) => *left,
            (TopologyLocation::Area { right, .. }, Position::Right) => *right,
        }
    }

    /// Set the entry at `pos`. Setting Left or Right on a line-shaped
    /// location upgrades it to area-shaped first (On is preserved).
    pub fn set(&mut self, pos: Position, loc: Location) {
        if pos != Position::On && self.is_line() {
            self.upgrade_to_area();
        }
        match (self, pos) {
            (TopologyLocation::Line { on }, Position::On) => *on = Some(loc),
            (TopologyLocation::Area { on, .. }, Position::On) => *on = Some(loc),
            (TopologyLocation::Area { left, .. }, Position::Left) => *left = Some(loc),
            (TopologyLocation::Area { right, .. }, Position::Right) => *right = Some(loc),
            (TopologyLocation::Line { .. }, _) => unreachable!("upgraded above"),
        }
    }

    /// Set every entry of this location to `loc`.
    pub fn set_all(&mut self, loc: Location) {
        match self {
            TopologyLocation::Line { on } => *on = Some(loc),
            TopologyLocation::Area { on, left, right } => {
                *on = Some(loc);
                *left = Some(loc);
                *right = Some(loc);
            }
        }
    }

    /// Set every still-undetermined entry to `loc`.
    pub fn set_all_if_none(&mut self, loc: Location) {
        match self {
            TopologyLocation::Line { on } => {
                if on.is_none() {
                    *on = Some(loc);
                }
            }
            TopologyLocation::Area { on, left, right } => {
                for slot in [on, left, right] {
                    if slot.is_none() {
                        *slot = Some(loc);
                    }
                }
            }
        }
    }

    /// True when every entry is undetermined.
    pub const fn is_null(&self) -> bool {
        match self {
            TopologyLocation::Line { on } => on.is_none(),
            TopologyLocation::Area { on, left, right } => {
                on.is_none() && left.is_none() && right.is_none()
            }
        }
    }

    /// True when at least one entry is undetermined.
    pub const fn is_any_null(&self) -> bool {
        match self {
            TopologyLocation::Line { on } => on.is_none(),
            TopologyLocation::Area { on, left, right } => {
                on.is_none() || left.is_none() || right.is_none()
            }
        }
    }

    /// True when every entry equals `loc`.
    pub fn all_positions_equal(&self, loc: Location) -> bool {
        match self {
            TopologyLocation::Line { on } => *on == Some(loc),
            TopologyLocation::Area { on, left, right } => {
                *on == Some(loc) && *left == Some(loc) && *right == Some(loc)
            }
        }
    }

    /// True when both locations carry the same entry at `pos`.
    #[inline]
    pub fn positions_equal(&self, other: &TopologyLocation, pos: Position) -> bool {
        self.get(pos) == other.get(pos)
    }

    /// Swap Left and Right. Used when an edge is traversed in reverse;
    /// line-shaped locations are unaffected.
    pub fn flip(&mut self) {
        if let TopologyLocation::Area { left, right, .. } = self {
            std::mem::swap(left, right);
        }
    }

    /// Merge `other` into `self`: upgrade line→area if `other` is
    /// area-shaped, then copy `other`'s entries into every still-undetermined
    /// entry of `self`. Never overwrites a determined entry.
    pub fn merge(&mut self, other: &TopologyLocation) {
        if other.is_area() && self.is_line() {
            self.upgrade_to_area();
        }
        match self {
            TopologyLocation::Line { on } => {
                if on.is_none() {
                    *on = other.get(Position::On);
                }
            }
            TopologyLocation::Area { on, left, right } => {
                if on.is_none() {
                    *on = other.get(Position::On);
                }
                if left.is_none() {
                    *left = other.get(Position::Left);
                }
                if right.is_none() {
                    *right = other.get(Position::Right);
                }
            }
        }
    }

    /// Collapse an area-shaped location to line-shaped, keeping On.
    pub fn to_line(&mut self) {
        if let TopologyLocation::Area { on, .. } = self {
            *self = TopologyLocation::Line { on: *on };
        }
    }

    fn upgrade_to_area(&mut self) {
        if let TopologyLocation::Line { on } = self {
            *self = TopologyLocation::Area {
                on: *on,
                left: None,
                right: None,
            };
        }
    }
}

/// Renders Left/On/Right as single characters, `-` for undetermined.
impl fmt::Display for TopologyLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TopologyLocation::Line { on } => write!(f, "{}", symbol_or_dash(*on)),
            TopologyLocation::Area { on, left, right } => write!(
                f,
                "{}{}{}",
                symbol_or_dash(*left),
                symbol_or_dash(*on),
                symbol_or_dash(*right)
            ),
        }
    }
}

/// A pair of topology locations, one per operand.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Label {
    elt: [TopologyLocation; 2],
}

impl Label {
    /// Label with undetermined line-shaped locations for both operands.
    #[inline]
    pub const fn new_line() -> Self {
        Label {
            elt: [TopologyLocation::line(), TopologyLocation::line()],
        }
    }

    /// Label with undetermined area-shaped locations for both operands.
    #[inline]
    pub const fn new_area() -> Self {
        Label {
            elt: [TopologyLocation::area(), TopologyLocation::area()],
        }
    }

    /// Label from two explicit per-operand locations.
    #[inline]
    pub const fn new(loc0: TopologyLocation, loc1: TopologyLocation) -> Self {
        Label { elt: [loc0, loc1] }
    }

    /// The per-operand location for `geom` (0 or 1).
    #[inline]
    pub fn location(&self, geom: usize) -> &TopologyLocation {
        &self.elt[geom]
    }

    /// Entry at (`geom`, `pos`).
    #[inline]
    pub fn get(&self, geom: usize, pos: Position) -> Option<Location> {
        self.elt[geom].get(pos)
    }

    /// The On entry for `geom`.
    #[inline]
    pub fn on(&self, geom: usize) -> Option<Location> {
        self.elt[geom].get(Position::On)
    }

    /// Set the entry at (`geom`, `pos`).
    #[inline]
    pub fn set(&mut self, geom: usize, pos: Position, loc: Location) {
        self.elt[geom].set(pos, loc);
    }

    /// Set the On entry for `geom`.
    #[inline]
    pub fn set_on(&mut self, geom: usize, loc: Location) {
        self.elt[geom].set(Position::On, loc);
    }

    /// Set every entry of both operands to `loc`.
    pub fn set_all(&mut self, loc: Location) {
        for e in &mut self.elt {
            e.set_all(loc);
        }
    }

    /// Set every still-undetermined entry of `geom` to `loc`.
    #[inline]
    pub fn set_all_if_none(&mut self, geom: usize, loc: Location) {
        self.elt[geom].set_all_if_none(loc);
    }

    /// Swap Left and Right for both operands.
    pub fn flip(&mut self) {
        for e in &mut self.elt {
            e.flip();
        }
    }

    /// A copy with Left and Right swapped.
    pub fn flipped(&self) -> Label {
        let mut l = *self;
        l.flip();
        l
    }

    /// Merge `other` into `self` per the fill-only-null rule, operand by
    /// operand. Idempotent.
    pub fn merge(&mut self, other: &Label) {
        for (mine, theirs) in self.elt.iter_mut().zip(other.elt.iter()) {
            mine.merge(theirs);
        }
    }

    /// True if either operand's location is area-shaped.
    #[inline]
    pub fn is_area(&self) -> bool {
        self.elt[0].is_area() || self.elt[1].is_area()
    }

    /// True if the location for `geom` is area-shaped.
    #[inline]
    pub fn is_area_at(&self, geom: usize) -> bool {
        self.elt[geom].is_area()
    }

    /// True if the location for `geom` is line-shaped.
    #[inline]
    pub fn is_line_at(&self, geom: usize) -> bool {
        self.elt[geom].is_line()
    }

    /// True if every entry for `geom` is undetermined.
    #[inline]
    pub fn is_null_at(&self, geom: usize) -> bool {
        self.elt[geom].is_null()
    }

    /// True if any entry for `geom` is undetermined.
    #[inline]
    pub fn is_any_null_at(&self, geom: usize) -> bool {
        self.elt[geom].is_any_null()
    }

    /// True when every entry for `geom` equals `loc`.
    #[inline]
    pub fn all_positions_equal(&self, geom: usize, loc: Location) -> bool {
        self.elt[geom].all_positions_equal(loc)
    }

    /// Collapse the location for `geom` to line-shaped, keeping On.
    #[inline]
    pub fn to_line(&mut self, geom: usize) {
        self.elt[geom].to_line();
    }

    /// Number of operands with at least one determined entry.
    pub fn geometry_count(&self) -> usize {
        self.elt.iter().filter(|e| !e.is_null()).count()
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "A:{} B:{}", self.elt[0], self.elt[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::location::Location::*;

    #[test]
    fn line_has_no_sides() {
        let t = TopologyLocation::line_at(Interior);
        assert_eq!(t.get(Position::On), Some(Interior));
        assert_eq!(t.get(Position::Left), None);
        assert_eq!(t.get(Position::Right), None);
        assert!(t.is_line());
        assert!(!t.is_null());
    }

    #[test]
    fn flip_swaps_sides() {
        let mut t = TopologyLocation::area_at(Boundary, Interior, Exterior);
        t.flip();
        assert_eq!(t.get(Position::Left), Some(Exterior));
        assert_eq!(t.get(Position::Right), Some(Interior));
        assert_eq!(t.get(Position::On), Some(Boundary));

        let mut l = TopologyLocation::line_at(Interior);
        l.flip();
        assert_eq!(l, TopologyLocation::line_at(Interior));
    }

    #[test]
    fn merge_fills_only_null() {
        let mut t = TopologyLocation::area_at(Boundary, Interior, Exterior);
        let other = TopologyLocation::area_at(Exterior, Exterior, Interior);
        t.merge(&other);
        // nothing overwritten
        assert_eq!(t, TopologyLocation::area_at(Boundary, Interior, Exterior));

        let mut partial = TopologyLocation::area();
        partial.set(Position::Left, Interior);
        partial.merge(&other);
        assert_eq!(partial.get(Position::Left), Some(Interior));
        assert_eq!(partial.get(Position::On), Some(Exterior));
        assert_eq!(partial.get(Position::Right), Some(Interior));
    }

    #[test]
    fn merge_upgrades_line_to_area() {
        let mut t = TopologyLocation::line_at(Boundary);
        let other = TopologyLocation::area_at(Interior, Interior, Exterior);
        t.merge(&other);
        assert!(t.is_area());
        // the existing On value survives the upgrade
        assert_eq!(t.get(Position::On), Some(Boundary));
        assert_eq!(t.get(Position::Left), Some(Interior));
        assert_eq!(t.get(Position::Right), Some(Exterior));
    }

    #[test]
    fn merge_is_idempotent() {
        let src = TopologyLocation::area_at(Interior, Exterior, Interior);
        let mut once = TopologyLocation::line_at(Boundary);
        once.merge(&src);
        let mut twice = once;
        twice.merge(&src);
        assert_eq!(once, twice);
    }

    #[test]
    fn set_upgrades_line_on_side_write() {
        let mut t = TopologyLocation::line_at(Interior);
        t.set(Position::Right, Exterior);
        assert!(t.is_area());
        assert_eq!(t.get(Position::On), Some(Interior));
        assert_eq!(t.get(Position::Right), Some(Exterior));
    }

    #[test]
    fn to_line_keeps_on() {
        let mut t = TopologyLocation::area_at(Boundary, Interior, Exterior);
        t.to_line();
        assert_eq!(t, TopologyLocation::line_at(Boundary));
    }

    #[test]
    fn all_positions_equal() {
        let t = TopologyLocation::area_at(Interior, Interior, Interior);
        assert!(t.all_positions_equal(Interior));
        assert!(!t.all_positions_equal(Exterior));
        let partial = TopologyLocation::area();
        assert!(!partial.all_positions_equal(Interior));
    }

    #[test]
    fn label_merge_and_count() {
        let mut l = Label::new(TopologyLocation::line(), TopologyLocation::area());
        assert_eq!(l.geometry_count(), 0);
        let other = Label::new(
            TopologyLocation::line_at(Interior),
            TopologyLocation::area_at(Boundary, Interior, Exterior),
        );
        l.merge(&other);
        assert_eq!(l.geometry_count(), 2);
        assert_eq!(l.on(0), Some(Interior));
        assert_eq!(l.get(1, Position::Left), Some(Interior));
    }

    #[test]
    fn label_flipped_copy() {
        let l = Label::new(
            TopologyLocation::area_at(Boundary, Interior, Exterior),
            TopologyLocation::line_at(Exterior),
        );
        let f = l.flipped();
        assert_eq!(f.get(0, Position::Left), Some(Exterior));
        assert_eq!(f.get(0, Position::Right), Some(Interior));
        // flipping twice restores the original
        assert_eq!(f.flipped(), l);
    }

    #[test]
    fn display_symbols() {
        let l = Label::new(
            TopologyLocation::area_at(Boundary, Interior, Exterior),
            TopologyLocation::line(),
        );
        assert_eq!(format!("{l}"), "A:IBE B:-");
    }

    #[test]
    fn positions_equal_compares_one_side() {
        let a = TopologyLocation::area_at(Boundary, Interior, Exterior);
        let b = TopologyLocation::area_at(Boundary, Exterior, Exterior);
        assert!(a.positions_equal(&b, Position::On));
        assert!(a.positions_equal(&b, Position::Right));
        assert!(!a.positions_equal(&b, Position::Left));
        // a line's missing side never matches a determined one
        let line = TopologyLocation::line_at(Boundary);
        assert!(!a.positions_equal(&line, Position::Left));
        assert!(a.positions_equal(&line, Position::On));
    }
}

//! `Location` and `Position`: the vocabulary of topological labelling.
//!
//! A location classifies a point relative to one operand geometry; a
//! position names which part of an edge a location talks about (the edge
//! itself, or the area to its left or right). "Not yet determined" is
//! represented as `Option<Location>::None` throughout the crate; there is no
//! sentinel value.

use std::fmt;

/// Classification of a point relative to one operand geometry.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Location {
    /// Inside the operand.
    Interior,
    /// On the operand's boundary.
    Boundary,
    /// Outside the operand.
    Exterior,
}

impl Location {
    /// Single-character rendering used by label displays: I, B or E.
    #[inline]
    pub const fn symbol(self) -> char {
        match self {
            Location::Interior => 'I',
            Location::Boundary => 'B',
            Location::Exterior => 'E',
        }
    }
}

/// Render an undetermined location as `-`.
#[inline]
pub const fn symbol_or_dash(loc: Option<Location>) -> char {
    match loc {
        Some(l) => l.symbol(),
        None => '-',
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Which part of an edge a label entry refers to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[repr(u8)]
pub enum Position {
    /// The edge itself.
    On = 0,
    /// The area left of the edge, facing along its direction.
    Left = 1,
    /// The area right of the edge.
    Right = 2,
}

impl Position {
    /// Left ↔ Right; On maps to itself.
    #[inline]
    pub const fn opposite(self) -> Position {
        match self {
            Position::On => Position::On,
            Position::Left => Position::Right,
            Position::Right => Position::Left,
        }
    }
}

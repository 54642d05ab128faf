//! Strong, zero-cost handles for graph components.
//!
//! The planar graph is an arena: nodes, edges and directed edges live in
//! flat vectors owned by one `PlanarGraph`, and every cross-reference
//! (`sym`, `next`, ring membership, star entries) is a typed index into
//! those vectors. This keeps the graph acyclic-by-construction and lets the
//! whole operation state drop as a single unit. The newtypes below make the
//! three id spaces mutually un-mixable at compile time.

use std::fmt;

macro_rules! handle {
    ($(#[$doc:meta])* $name:ident, $label:literal) => {
        $(#[$doc])*
        #[derive(
            Copy,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[repr(transparent)]
        pub struct $name(u32);

        impl $name {
            /// Handle for the given arena slot.
            #[inline]
            pub const fn new(raw: u32) -> Self {
                $name(raw)
            }

            /// Raw arena slot.
            #[inline]
            pub const fn get(self) -> u32 {
                self.0
            }

            /// Raw arena slot as a vector index.
            #[inline]
            pub const fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_tuple($label).field(&self.0).finish()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

handle!(
    /// Handle of a [`Node`](crate::topology::node::Node) in the graph arena.
    NodeId,
    "NodeId"
);
handle!(
    /// Handle of an [`Edge`](crate::topology::edge::Edge) in the graph arena.
    EdgeId,
    "EdgeId"
);
handle!(
    /// Handle of a [`DirectedEdge`](crate::topology::directed_edge::DirectedEdge)
    /// in the graph arena.
    DirectedEdgeId,
    "DirectedEdgeId"
);
handle!(
    /// Handle of an [`EdgeRing`](crate::topology::edge_ring::EdgeRing) in a
    /// built ring set.
    RingId,
    "RingId"
);

#[cfg(test)]
mod layout_tests {
    use super::*;
    use static_assertions::{assert_eq_align, assert_eq_size};

    // Handles must stay pointer-free and 4 bytes wide.
    assert_eq_size!(NodeId, u32);
    assert_eq_size!(EdgeId, u32);
    assert_eq_size!(DirectedEdgeId, u32);

    #[test]
    fn alignment_matches_u32() {
        assert_eq_align!(NodeId, u32);
        assert_eq_align!(DirectedEdgeId, u32);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_and_get() {
        let e = EdgeId::new(42);
        assert_eq!(e.get(), 42);
        assert_eq!(e.index(), 42usize);
    }

    #[test]
    fn debug_and_display() {
        let n = NodeId::new(7);
        assert_eq!(format!("{n:?}"), "NodeId(7)");
        assert_eq!(format!("{n}"), "7");
    }

    #[test]
    fn ordering_and_hash() {
        use std::collections::HashSet;
        let a = DirectedEdgeId::new(1);
        let b = DirectedEdgeId::new(2);
        assert!(a < b);
        let mut set = HashSet::new();
        set.insert(a);
        set.insert(b);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn serde_roundtrip() {
        let id = EdgeId::new(123);
        let s = serde_json::to_string(&id).unwrap();
        let id2: EdgeId = serde_json::from_str(&s).unwrap();
        assert_eq!(id2, id);
    }
}

//! `PlanarGraph`: the arena that owns one operation's topology graph.
//!
//! One graph instance is built per overlay/validity operation, used, and
//! dropped as a unit. Nodes, edges and directed edges live in flat vectors;
//! all cross-references are typed indices, so there are no reference cycles
//! and no shared ownership. Inserting an edge creates its two symmetric
//! directed edges and threads each into the CCW-ordered star of its origin
//! node; that insertion order is the only place star order is established,
//! and every downstream algorithm depends on it.

use crate::debug_invariants::DebugInvariants;
use crate::error::TopologyError;
use crate::geom::coordinate::{CoordKey, Coordinate};
use crate::geom::orientation::{CCW, CW, orientation_index};
use crate::geom::quadrant::Quadrant;
use crate::topology::directed_edge::DirectedEdge;
use crate::topology::edge::Edge;
use crate::topology::handles::{DirectedEdgeId, EdgeId, NodeId};
use crate::topology::label::Label;
use crate::topology::location::Position;
use crate::topology::node::Node;
use hashbrown::HashMap;
use itertools::Itertools;
use std::cmp::Ordering;

/// The planar topology graph of one overlay operation.
#[derive(Clone, Debug, Default)]
pub struct PlanarGraph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    dirs: Vec<DirectedEdge>,
    node_index: HashMap<CoordKey, NodeId>,
}

impl PlanarGraph {
    /// An empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of undirected edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Number of directed edges (always twice the edge count).
    #[inline]
    pub fn directed_edge_count(&self) -> usize {
        self.dirs.len()
    }

    /// All node handles, in insertion order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + use<> {
        (0..self.nodes.len() as u32).map(NodeId::new)
    }

    /// All edge handles, in insertion order.
    pub fn edge_ids(&self) -> impl Iterator<Item = EdgeId> + use<> {
        (0..self.edges.len() as u32).map(EdgeId::new)
    }

    /// All directed-edge handles, in insertion order.
    pub fn directed_edge_ids(&self) -> impl Iterator<Item = DirectedEdgeId> + use<> {
        (0..self.dirs.len() as u32).map(DirectedEdgeId::new)
    }

    /// The node with the given handle.
    ///
    /// Handles are only ever produced by this graph, so lookups index
    /// directly.
    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }

    /// The edge with the given handle.
    #[inline]
    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id.index()]
    }

    /// Mutable access to an edge (label accumulation, depth delta).
    #[inline]
    pub fn edge_mut(&mut self, id: EdgeId) -> &mut Edge {
        &mut self.edges[id.index()]
    }

    /// The directed edge with the given handle.
    #[inline]
    pub fn dir(&self, id: DirectedEdgeId) -> &DirectedEdge {
        &self.dirs[id.index()]
    }

    /// Mutable access to a directed edge.
    #[inline]
    pub fn dir_mut(&mut self, id: DirectedEdgeId) -> &mut DirectedEdge {
        &mut self.dirs[id.index()]
    }

    /// Node at the given coordinate, if one exists.
    pub fn node_at(&self, coord: Coordinate) -> Option<NodeId> {
        self.node_index.get(&coord.key()).copied()
    }

    /// Find or create the node at `coord`.
    pub fn add_node(&mut self, coord: Coordinate) -> NodeId {
        if let Some(existing) = self.node_index.get(&coord.key()) {
            return *existing;
        }
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(Node::new(coord));
        self.node_index.insert(coord.key(), id);
        id
    }

    /// Insert a noded edge with its label and depth delta.
    ///
    /// Creates the edge, its two symmetric directed edges (the reverse
    /// traversal carries the label with Left/Right flipped), the endpoint
    /// nodes if needed, and threads both directed edges into their origin
    /// stars in CCW order.
    pub fn add_edge(
        &mut self,
        coords: Vec<Coordinate>,
        label: Label,
        depth_delta: i32,
    ) -> Result<EdgeId, TopologyError> {
        if coords.len() < 2 {
            return Err(TopologyError::TooFewCoordinates {
                found: coords.len(),
            });
        }
        if let Some((dup, _)) = coords.iter().tuple_windows().find(|(a, b)| a == b) {
            return Err(TopologyError::ZeroLengthSegment { coord: *dup });
        }

        let n = coords.len();
        let fwd_quadrant = Quadrant::from_points(coords[0], coords[1])?;
        let rev_quadrant = Quadrant::from_points(coords[n - 1], coords[n - 2])?;

        let start_node = self.add_node(coords[0]);
        let end_node = self.add_node(coords[n - 1]);

        let edge_id = EdgeId::new(self.edges.len() as u32);
        let fwd_id = DirectedEdgeId::new(self.dirs.len() as u32);
        let rev_id = DirectedEdgeId::new(self.dirs.len() as u32 + 1);

        let mut forward = DirectedEdge::new(
            edge_id,
            true,
            start_node,
            coords[0],
            coords[1],
            fwd_quadrant,
            label,
        );
        let mut reverse = DirectedEdge::new(
            edge_id,
            false,
            end_node,
            coords[n - 1],
            coords[n - 2],
            rev_quadrant,
            label.flipped(),
        );
        forward.set_sym(rev_id);
        reverse.set_sym(fwd_id);
        self.dirs.push(forward);
        self.dirs.push(reverse);
        self.edges
            .push(Edge::new(coords, label, depth_delta, [fwd_id, rev_id]));

        self.insert_into_star(start_node, fwd_id);
        self.insert_into_star(end_node, rev_id);
        self.debug_assert_invariants();
        Ok(edge_id)
    }

    /// Assign both side depths of a directed edge from one known side,
    /// using the edge's depth delta; write-once per side.
    ///
    /// The delta is the right depth minus the left depth along the forward
    /// traversal, so crossing left-to-right adds it and right-to-left
    /// subtracts it; the reverse traversal negates it.
    pub fn set_edge_depths(
        &mut self,
        dir: DirectedEdgeId,
        pos: Position,
        depth: i32,
    ) -> Result<(), TopologyError> {
        let mut delta = self.edge(self.dir(dir).edge()).depth_delta();
        if !self.dir(dir).is_forward() {
            delta = -delta;
        }
        let direction_factor = if pos == Position::Left { 1 } else { -1 };
        let opposite_depth = depth + delta * direction_factor;

        self.dir_mut(dir).set_depth(pos, depth)?;
        self.dir_mut(dir).set_depth(pos.opposite(), opposite_depth)?;
        Ok(())
    }

    fn insert_into_star(&mut self, node: NodeId, dir: DirectedEdgeId) {
        let star = self.node(node).star().edges();
        let mut index = star.len();
        for (i, &existing) in star.iter().enumerate() {
            if self.compare_direction(dir, existing) == Ordering::Less {
                index = i;
                break;
            }
        }
        self.node_mut(node).star_mut().insert_at(index, dir);
    }

    /// Total CCW order of two directed edges around their shared origin:
    /// coarse quadrant comparison, then the exact orientation of one edge's
    /// direction point against the other's direction.
    pub fn compare_direction(&self, a: DirectedEdgeId, b: DirectedEdgeId) -> Ordering {
        let da = self.dir(a);
        let db = self.dir(b);
        if da.dx() == db.dx() && da.dy() == db.dy() {
            return Ordering::Equal;
        }
        match da.quadrant().cmp(&db.quadrant()) {
            Ordering::Equal => match orientation_index(db.p0(), db.p1(), da.p1()) {
                CCW => Ordering::Greater,
                CW => Ordering::Less,
                _ => Ordering::Equal,
            },
            unequal => unequal,
        }
    }
}

impl DebugInvariants for PlanarGraph {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "PlanarGraph");
    }

    fn validate_invariants(&self) -> Result<(), TopologyError> {
        for d in self.directed_edge_ids() {
            let dir = self.dir(d);
            if dir.sym().index() >= self.dirs.len() {
                return Err(TopologyError::InvariantViolation {
                    what: format!("directed edge {d} has an out-of-range sym"),
                });
            }
            let sym = self.dir(dir.sym());
            if sym.sym() != d {
                return Err(TopologyError::InvariantViolation {
                    what: format!("sym of directed edge {d} is not an involution"),
                });
            }
            if sym.edge() != dir.edge() || sym.is_forward() == dir.is_forward() {
                return Err(TopologyError::InvariantViolation {
                    what: format!("directed edge {d} and its sym disagree on their edge"),
                });
            }
            if self
                .node(dir.origin())
                .star()
                .position_of(d)
                .is_none()
            {
                return Err(TopologyError::InvariantViolation {
                    what: format!("directed edge {d} is missing from its origin star"),
                });
            }
        }
        for e in self.edge_ids() {
            let [fwd, rev] = self.edge(e).dirs();
            if self.dir(fwd).edge() != e
                || self.dir(rev).edge() != e
                || !self.dir(fwd).is_forward()
                || self.dir(rev).is_forward()
            {
                return Err(TopologyError::InvariantViolation {
                    what: format!("edge {e} and its directed edges disagree"),
                });
            }
        }
        for n in self.node_ids() {
            let node = self.node(n);
            if self.node_at(node.coord()) != Some(n) {
                return Err(TopologyError::InvariantViolation {
                    what: format!("node {n} is not indexed by its coordinate"),
                });
            }
            let star = node.star().edges();
            for (&a, &b) in star.iter().tuple_windows() {
                if self.compare_direction(a, b) == Ordering::Greater {
                    return Err(TopologyError::InvariantViolation {
                        what: format!("star of node {n} is not in CCW order"),
                    });
                }
            }
            for &d in star {
                if self.dir(d).origin() != n {
                    return Err(TopologyError::InvariantViolation {
                        what: format!("star of node {n} lists a foreign directed edge"),
                    });
                }
            }
        }
        Ok(())
    }
}

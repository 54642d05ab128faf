//! Covered-line detection: line edges at a result-area node are marked
//! covered exactly when they leave into the result interior.

mod util;

use geom_graph::prelude::*;
use util::{add_run, boundary_label, c};

/// CW square boundary of operand 0 with its bottom edge split at (1,0),
/// plus one line edge poking into the interior and one poking out.
fn square_with_lines() -> (PlanarGraph, NodeId, EdgeId, EdgeId) {
    let mut g = PlanarGraph::new();
    let boundary: &[&[(f64, f64)]] = &[
        &[(0.0, 0.0), (0.0, 2.0)],
        &[(0.0, 2.0), (2.0, 2.0)],
        &[(2.0, 2.0), (2.0, 0.0)],
        &[(2.0, 0.0), (1.0, 0.0)],
        &[(1.0, 0.0), (0.0, 0.0)],
    ];
    for run in boundary {
        add_run(&mut g, run, boundary_label(0));
    }
    let line_label = Label::new(TopologyLocation::line_at(Location::Interior), TopologyLocation::line());
    let (inward, _) = add_run(&mut g, &[(1.0, 0.0), (1.0, 1.0)], line_label);
    let (outward, _) = add_run(&mut g, &[(1.0, 0.0), (1.0, -1.0)], line_label);
    let node = g.node_at(c(1.0, 0.0)).unwrap();
    (g, node, inward, outward)
}

#[test]
fn lines_into_the_result_interior_are_covered() {
    let (mut g, node, inward, outward) = square_with_lines();
    g.mark_result_area_edges(OverlayKind::Union);
    g.find_covered_line_edges(node);

    assert_eq!(g.edge(inward).covered(), Some(true));
    assert_eq!(g.edge(outward).covered(), Some(false));
}

#[test]
fn without_result_edges_coverage_stays_undecided() {
    let (mut g, node, inward, outward) = square_with_lines();
    // no result marking at all: the scan has no seed and must not guess
    g.find_covered_line_edges(node);
    assert_eq!(g.edge(inward).covered(), None);
    assert_eq!(g.edge(outward).covered(), None);
}

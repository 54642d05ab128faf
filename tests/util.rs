#![allow(dead_code)]
use geom_graph::prelude::*;

pub fn c(x: f64, y: f64) -> Coordinate {
    Coordinate::new(x, y)
}

/// Boundary label of an area operand walked clockwise: On=Boundary, the
/// interior on the right. The other operand stays unlabelled line-type.
pub fn boundary_label(geom: usize) -> Label {
    let area = TopologyLocation::area_at(Location::Boundary, Location::Exterior, Location::Interior);
    if geom == 0 {
        Label::new(area, TopologyLocation::line())
    } else {
        Label::new(TopologyLocation::line(), area)
    }
}

/// Fully-labelled boundary edge of one operand lying entirely at `other_loc`
/// relative to the other operand.
pub fn overlay_label(geom: usize, other_loc: Location) -> Label {
    let own = TopologyLocation::area_at(Location::Boundary, Location::Exterior, Location::Interior);
    let other = TopologyLocation::area_at(other_loc, other_loc, other_loc);
    if geom == 0 {
        Label::new(own, other)
    } else {
        Label::new(other, own)
    }
}

/// Insert one labelled single-run edge and return its forward directed edge.
pub fn add_run(
    g: &mut PlanarGraph,
    coords: &[(f64, f64)],
    label: Label,
) -> (EdgeId, DirectedEdgeId) {
    let coords: Vec<_> = coords.iter().map(|&(x, y)| c(x, y)).collect();
    let e = g.add_edge(coords, label, 1).unwrap();
    let d = g.edge(e).dirs()[0];
    (e, d)
}

/// The standard two-overlapping-squares fixture: operand 0 is the square
/// (0,0)-(2,2), operand 1 the square (1,1)-(3,3), both walked clockwise and
/// already noded at the crossing points (1,2) and (2,1).
///
/// Returns the graph plus the forward directed edges of operand 0 and
/// operand 1, in walk order.
pub fn overlapping_squares() -> (PlanarGraph, Vec<DirectedEdgeId>, Vec<DirectedEdgeId>) {
    overlapping_squares_scaled(1.0)
}

/// Same fixture with every coordinate multiplied by `scale`.
pub fn overlapping_squares_scaled(
    scale: f64,
) -> (PlanarGraph, Vec<DirectedEdgeId>, Vec<DirectedEdgeId>) {
    use Location::{Exterior, Interior};
    let mut g = PlanarGraph::new();

    // operand 0, CW from (0,0); the runs between (1,2) and (2,1) via (2,2)
    // lie inside operand 1
    let a_runs: &[(&[(f64, f64)], Location)] = &[
        (&[(0.0, 0.0), (0.0, 2.0)], Exterior),
        (&[(0.0, 2.0), (1.0, 2.0)], Exterior),
        (&[(1.0, 2.0), (2.0, 2.0)], Interior),
        (&[(2.0, 2.0), (2.0, 1.0)], Interior),
        (&[(2.0, 1.0), (2.0, 0.0)], Exterior),
        (&[(2.0, 0.0), (0.0, 0.0)], Exterior),
    ];
    // operand 1, CW from (1,1); the runs touching (1,1) lie inside operand 0
    let b_runs: &[(&[(f64, f64)], Location)] = &[
        (&[(1.0, 1.0), (1.0, 2.0)], Interior),
        (&[(1.0, 2.0), (1.0, 3.0)], Exterior),
        (&[(1.0, 3.0), (3.0, 3.0)], Exterior),
        (&[(3.0, 3.0), (3.0, 1.0)], Exterior),
        (&[(3.0, 1.0), (2.0, 1.0)], Exterior),
        (&[(2.0, 1.0), (1.0, 1.0)], Interior),
    ];

    let scaled = |run: &[(f64, f64)]| -> Vec<(f64, f64)> {
        run.iter().map(|&(x, y)| (x * scale, y * scale)).collect()
    };
    let a = a_runs
        .iter()
        .map(|&(run, loc)| add_run(&mut g, &scaled(run), overlay_label(0, loc)).1)
        .collect();
    let b = b_runs
        .iter()
        .map(|&(run, loc)| add_run(&mut g, &scaled(run), overlay_label(1, loc)).1)
        .collect();
    (g, a, b)
}

/// Closed coordinate runs compare equal up to the choice of start point.
pub fn assert_same_ring(got: &[Coordinate], want: &[(f64, f64)]) {
    let want: Vec<_> = want.iter().map(|&(x, y)| c(x, y)).collect();
    assert_eq!(
        got.len(),
        want.len(),
        "ring length differs\n got={got:?}\nwant={want:?}"
    );
    // both runs are closed; compare the open parts under rotation
    let open_got = &got[..got.len() - 1];
    let open_want = &want[..want.len() - 1];
    let n = open_got.len();
    let matches = (0..n).any(|shift| (0..n).all(|i| open_got[(i + shift) % n] == open_want[i]));
    assert!(matches, "rings differ\n got={got:?}\nwant={want:?}");
}

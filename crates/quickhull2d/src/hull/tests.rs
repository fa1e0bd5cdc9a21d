use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::geom::rand::{draw_point_cloud, CloudCfg, ReplayToken};
use crate::geom::{lexicographic_cmp, Line, Point, Side};

use super::*;

fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
    coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

fn set(coords: &[(f64, f64)]) -> PointSet {
    pts(coords).into_iter().collect()
}

fn hull_set(coords: &[(f64, f64)]) -> PointSet {
    convex_hull(&pts(coords)).unwrap().into_vertices()
}

/// Inside-or-on-boundary test against a CCW polygon, with a small slack for
/// cross products evaluated in floating point.
fn inside_or_on(polygon: &[Point], p: Point) -> bool {
    let n = polygon.len();
    (0..n).all(|i| {
        let edge = Line::new(polygon[i], polygon[(i + 1) % n]);
        edge.signed_area(p) >= -1e-6
    })
}

#[test]
fn empty_and_singleton_inputs() {
    assert!(hull_set(&[]).is_empty());
    assert_eq!(hull_set(&[(5.0, 5.0)]), set(&[(5.0, 5.0)]));
}

#[test]
fn pair_input_keeps_both_points() {
    let hull = convex_hull(&pts(&[(0.0, 0.0), (1.0, 1.0)])).unwrap();
    assert_eq!(*hull.vertices(), set(&[(0.0, 0.0), (1.0, 1.0)]));
    assert_eq!(
        hull.diameter(),
        Some((Point::new(0.0, 0.0), Point::new(1.0, 1.0)))
    );
}

#[test]
fn duplicate_coordinates_collapse() {
    assert_eq!(hull_set(&[(5.0, 5.0), (5.0, 5.0)]), set(&[(5.0, 5.0)]));
    assert_eq!(
        hull_set(&[(0.0, 0.0), (1.0, 1.0), (0.0, 0.0), (1.0, 1.0)]),
        set(&[(0.0, 0.0), (1.0, 1.0)])
    );
}

#[test]
fn triangle_keeps_all_vertices() {
    let coords = [(0.0, 0.0), (4.0, 0.0), (2.0, 4.0)];
    assert_eq!(hull_set(&coords), set(&coords));
}

#[test]
fn square_excludes_interior_point() {
    let hull = hull_set(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0), (2.0, 2.0)]);
    assert_eq!(
        hull,
        set(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)])
    );
}

#[test]
fn collinear_input_keeps_extremes_only() {
    let hull = hull_set(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)]);
    assert_eq!(hull, set(&[(0.0, 0.0), (3.0, 0.0)]));
}

#[test]
fn vertical_diameter() {
    // min and max share an x coordinate; the old slope/intercept test would
    // divide by zero here.
    let coords = [(0.0, 0.0), (0.0, 4.0), (2.0, 2.0)];
    assert_eq!(hull_set(&coords), set(&coords));
}

#[test]
fn rejects_non_finite_coordinates() {
    let nan = convex_hull(&pts(&[(0.0, 0.0), (f64::NAN, 1.0)]));
    assert!(matches!(
        nan,
        Err(HullError::NonFinite { x, y }) if x.is_nan() && y == 1.0
    ));
    let inf = convex_hull(&pts(&[(f64::INFINITY, 0.0)]));
    assert!(matches!(inf, Err(HullError::NonFinite { .. })));
}

#[test]
fn partition_excludes_on_line_points() {
    let line = Line::new(Point::new(0.0, 0.0), Point::new(4.0, 0.0));
    let points = set(&[(1.0, 1.0), (2.0, 0.0), (3.0, -1.0)]);
    assert_eq!(partition(&points, &line, Side::Above), set(&[(1.0, 1.0)]));
    assert_eq!(partition(&points, &line, Side::Below), set(&[(3.0, -1.0)]));
}

#[test]
fn farthest_breaks_ties_lexicographically() {
    let line = Line::new(Point::new(0.0, 0.0), Point::new(4.0, 0.0));
    let points = set(&[(3.0, 2.0), (1.0, 2.0), (2.0, 1.0)]);
    assert_eq!(farthest(&points, &line), Some(Point::new(1.0, 2.0)));
    assert_eq!(farthest(&PointSet::new(), &line), None);
}

#[test]
fn discovery_trace_records_border_edges() {
    let hull = convex_hull(&pts(&[(0.0, 0.0), (4.0, 4.0), (0.0, 4.0), (4.0, 0.0)])).unwrap();
    let (min, max) = hull.diameter().unwrap();
    assert_eq!(min, Point::new(0.0, 0.0));
    assert_eq!(max, Point::new(4.0, 4.0));
    assert_eq!(hull.discoveries().len(), 2);
    assert!(hull
        .discoveries()
        .iter()
        .any(|d| d.vertex == Point::new(0.0, 4.0) && d.edge == (min, max)));
    assert!(hull
        .discoveries()
        .iter()
        .any(|d| d.vertex == Point::new(4.0, 0.0) && d.edge == (max, min)));
}

#[test]
fn polygon_of_square_is_ccw() {
    let hull = convex_hull(&pts(&[
        (0.0, 0.0),
        (4.0, 0.0),
        (4.0, 4.0),
        (0.0, 4.0),
        (2.0, 2.0),
    ]))
    .unwrap();
    assert_eq!(
        hull.polygon(),
        pts(&[(4.0, 0.0), (4.0, 4.0), (0.0, 4.0), (0.0, 0.0)])
    );
}

#[test]
fn polygon_of_degenerate_hulls() {
    assert!(convex_hull(&[]).unwrap().polygon().is_empty());
    assert_eq!(
        convex_hull(&pts(&[(2.0, 0.0), (0.0, 0.0), (1.0, 0.0)]))
            .unwrap()
            .polygon(),
        pts(&[(0.0, 0.0), (2.0, 0.0)])
    );
}

#[test]
fn polygon_visits_every_vertex_once() {
    let points = draw_point_cloud(
        CloudCfg {
            count: 200,
            half_extent: 50.0,
        },
        ReplayToken { seed: 5, index: 0 },
    );
    let hull = convex_hull(&points).unwrap();
    let polygon = hull.polygon();
    assert_eq!(polygon.len(), hull.len());
    let as_set: PointSet = polygon.iter().copied().collect();
    assert_eq!(as_set, *hull.vertices());
}

proptest! {
    #[test]
    fn hull_is_subset_and_extremes_are_included(seed in 0u64..500) {
        let points = draw_point_cloud(
            CloudCfg { count: 48, half_extent: 25.0 },
            ReplayToken { seed, index: 0 },
        );
        let hull = convex_hull(&points).unwrap();
        let input: PointSet = points.iter().copied().collect();
        prop_assert!(hull.vertices().is_subset(&input));

        let min = points.iter().copied().min_by(lexicographic_cmp).unwrap();
        let max = points.iter().copied().max_by(lexicographic_cmp).unwrap();
        prop_assert!(hull.contains(min));
        prop_assert!(hull.contains(max));
    }

    #[test]
    fn hull_is_permutation_invariant(
        coords in prop::collection::vec((-100.0f64..100.0, -100.0f64..100.0), 0..40),
        seed in any::<u64>(),
    ) {
        let points = pts(&coords);
        let mut shuffled = points.clone();
        shuffled.shuffle(&mut StdRng::seed_from_u64(seed));
        let a = convex_hull(&points).unwrap();
        let b = convex_hull(&shuffled).unwrap();
        prop_assert_eq!(a.vertices(), b.vertices());
    }

    #[test]
    fn hull_is_idempotent(seed in 0u64..500) {
        let points = draw_point_cloud(
            CloudCfg { count: 48, half_extent: 25.0 },
            ReplayToken { seed, index: 1 },
        );
        let once = convex_hull(&points).unwrap();
        let again_input: Vec<Point> = once.vertices().iter().copied().collect();
        let twice = convex_hull(&again_input).unwrap();
        prop_assert_eq!(once.vertices(), twice.vertices());
    }

    #[test]
    fn non_hull_points_lie_inside_the_polygon(seed in 0u64..500) {
        let points = draw_point_cloud(
            CloudCfg { count: 48, half_extent: 25.0 },
            ReplayToken { seed, index: 2 },
        );
        let hull = convex_hull(&points).unwrap();
        let polygon = hull.polygon();
        prop_assume!(polygon.len() >= 3);
        for &p in &points {
            prop_assert!(inside_or_on(&polygon, p), "point {} escaped the hull", p);
        }
    }
}

mod test_utils;

use approx::assert_relative_eq;
use polyclip::polygon;
use polyclip::polygon::Polygon;
use polyclip::{difference, intersection, union, xor};
use test_utils::{area, verify_hole_relations};

/// Unit rectangle and a triangle overlapping its lower right region. The
/// triangle has a vertical left edge at x = 0.5 reaching below the rectangle
/// and a slanted edge of slope -1.2 crossing y = 0 at x = 109/120.
fn rect_and_triangle() -> (Polygon<f64>, Polygon<f64>) {
    let rect = polygon![[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]];
    let triangle = polygon![[(0.5, 0.49), (0.5, -0.6), (1.69 / 1.2, -0.6)]];
    (rect, triangle)
}

#[test]
fn intersection_of_rectangle_and_triangle() {
    let (rect, triangle) = rect_and_triangle();

    let result = intersection(&rect, &triangle).unwrap();
    assert_eq!(result.len(), 1);
    let contour = result.contour(0);
    assert!(contour.holes().is_empty());
    assert_eq!(contour.len(), 3);

    let expected = [(0.5, 0.0), (0.9083333, 0.0), (0.5, 0.49)];
    for &(x, y) in &expected {
        assert!(
            contour
                .points()
                .iter()
                .any(|p| (p.x - x).abs() < 1e-6 && (p.y - y).abs() < 1e-6),
            "expected vertex ({}, {}) in {:?}",
            x,
            y,
            contour.points()
        );
    }
    verify_hole_relations(&result);
}

#[test]
fn intersection_is_commutative() {
    let (rect, triangle) = rect_and_triangle();

    let ab = intersection(&rect, &triangle).unwrap();
    let ba = intersection(&triangle, &rect).unwrap();
    assert_eq!(ab.len(), ba.len());
    assert_relative_eq!(area(&ab), area(&ba), epsilon = 1e-9);
}

#[test]
fn union_and_intersection_areas_are_consistent() {
    // |A| + |B| = |A u B| + |A n B|
    let (a, b) = rect_and_triangle();

    let u = union(&a, &b).unwrap();
    let i = intersection(&a, &b).unwrap();
    verify_hole_relations(&u);
    assert_relative_eq!(area(&a) + area(&b), area(&u) + area(&i), epsilon = 1e-9);

    let d = difference(&a, &b).unwrap();
    let x = xor(&a, &b).unwrap();
    assert_relative_eq!(area(&d), area(&a) - area(&i), epsilon = 1e-9);
    assert_relative_eq!(area(&x), area(&u) - area(&i), epsilon = 1e-9);
}

#[test]
fn xor_separates_regions_touching_at_a_vertex() {
    // the symmetric difference of the rectangle and the triangle consists of
    // the notched rectangle and the triangle part below it, meeting only at
    // single points; the overlap region must not be traced twice
    let (a, b) = rect_and_triangle();

    let x = xor(&a, &b).unwrap();
    let i = intersection(&a, &b).unwrap();
    assert_relative_eq!(
        area(&x),
        area(&a) + area(&b) - 2.0 * area(&i),
        epsilon = 1e-9
    );
    verify_hole_relations(&x);

    for c in x.iter() {
        for (j, p) in c.points().iter().enumerate() {
            assert!(
                !c.points()[j + 1..].contains(p),
                "contour visits {:?} twice: {:?}",
                p,
                c.points()
            );
        }
    }
}

#[test]
fn difference_produces_hole() {
    let outer = polygon![[(0.0, 0.0), (3.0, 0.0), (3.0, 3.0), (0.0, 3.0)]];
    let inner = polygon![[(1.0, 1.0), (2.0, 1.0), (2.0, 2.0), (1.0, 2.0)]];

    let result = difference(&outer, &inner).unwrap();
    assert_eq!(result.len(), 2);
    assert_relative_eq!(area(&result), 8.0, epsilon = 1e-9);

    let holes: Vec<usize> = (0..result.len())
        .filter(|&i| result.contour(i).is_hole())
        .collect();
    assert_eq!(holes.len(), 1);
    verify_hole_relations(&result);
}

#[test]
fn xor_of_contained_polygon_equals_difference() {
    let outer = polygon![[(0.0, 0.0), (3.0, 0.0), (3.0, 3.0), (0.0, 3.0)]];
    let inner = polygon![[(1.0, 1.0), (2.0, 1.0), (2.0, 2.0), (1.0, 2.0)]];

    let x = xor(&outer, &inner).unwrap();
    let d = difference(&outer, &inner).unwrap();
    assert_eq!(x.len(), d.len());
    assert_relative_eq!(area(&x), area(&d), epsilon = 1e-9);
    verify_hole_relations(&x);
}

#[test]
fn nested_difference_keeps_island() {
    // subtracting a ring from a square leaves the square's rim and an island
    let square = polygon![[(0.0, 0.0), (9.0, 0.0), (9.0, 9.0), (0.0, 9.0)]];
    let mut ring = polygon![
        [(1.0, 1.0), (8.0, 1.0), (8.0, 8.0), (1.0, 8.0)],
        [(2.0, 2.0), (7.0, 2.0), (7.0, 7.0), (2.0, 7.0)],
    ];
    ring.compute_holes();

    let result = difference(&square, &ring).unwrap();
    assert_eq!(result.len(), 3);
    // 81 - (49 - 25) = 57
    assert_relative_eq!(area(&result), 57.0, epsilon = 1e-9);
    verify_hole_relations(&result);
}

#[test]
fn partially_overlapping_collinear_edges() {
    // the squares share part of their boundary on x = 2
    let a = polygon![[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]];
    let b = polygon![[(2.0, 0.5), (4.0, 0.5), (4.0, 1.5), (2.0, 1.5)]];

    let u = union(&a, &b).unwrap();
    assert_relative_eq!(area(&u), 6.0, epsilon = 1e-9);
    verify_hole_relations(&u);

    let i = intersection(&a, &b).unwrap();
    assert_relative_eq!(area(&i), 0.0, epsilon = 1e-9);

    let d = difference(&a, &b).unwrap();
    assert_relative_eq!(area(&d), 4.0, epsilon = 1e-9);
}

#[test]
fn contained_collinear_edge() {
    // b's top edge lies inside a's bottom edge
    let a = polygon![[(0.0, 0.0), (4.0, 0.0), (4.0, 2.0), (0.0, 2.0)]];
    let b = polygon![[(1.0, -2.0), (3.0, -2.0), (3.0, 0.0), (1.0, 0.0)]];

    let u = union(&a, &b).unwrap();
    assert_relative_eq!(area(&u), 12.0, epsilon = 1e-9);
    verify_hole_relations(&u);
}

#[test]
fn tiny_perturbation_does_not_change_topology() {
    let a = polygon![[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]];
    let b = polygon![[(1.0, 1.0), (3.0, 1.0), (3.0, 3.0), (1.0, 3.0)]];
    let b_perturbed: Polygon<f64> = polygon![[
        (1.0 + 1e-15, 1.0),
        (3.0, 1.0 - 1e-15),
        (3.0, 3.0),
        (1.0, 3.0 + 1e-15),
    ]];

    let r = intersection(&a, &b).unwrap();
    let rp = intersection(&a, &b_perturbed).unwrap();
    assert_eq!(r.len(), rp.len());
    assert_eq!(r.contour(0).len(), rp.contour(0).len());
    for p in r.contour(0).points() {
        assert!(
            rp.contour(0)
                .points()
                .iter()
                .any(|q| (p.x - q.x).abs() < 1e-6 && (p.y - q.y).abs() < 1e-6),
            "no vertex near ({}, {})",
            p.x,
            p.y
        );
    }
    verify_hole_relations(&rp);
}

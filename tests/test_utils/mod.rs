use polyclip::polygon::Polygon;

/// Total signed area of the polygon. Holes wind opposite to their parent, so
/// summing the signed contour areas subtracts them automatically.
pub fn area(polygon: &Polygon<f64>) -> f64 {
    polygon.iter().map(|c| c.signed_area_sum() / 2.0).sum()
}

/// Asserts the structural invariants of the polygon's hole relations: every
/// hole index is in range, every contour flagged as a hole has exactly one
/// parent, parent chains contain no cycles, and holes wind opposite to their
/// parent.
pub fn verify_hole_relations(polygon: &Polygon<f64>) {
    let n = polygon.len();
    let mut parent: Vec<Option<usize>> = vec![None; n];

    for i in 0..n {
        for &h in polygon.contour(i).holes() {
            assert!(h < n, "hole index {} out of range (contour {})", h, i);
            assert_ne!(h, i, "contour {} lists itself as a hole", i);
            assert!(
                polygon.contour(h).is_hole(),
                "contour {} referenced as hole of {} but not flagged as hole",
                h,
                i
            );
            assert!(
                parent[h].is_none(),
                "contour {} has more than one parent",
                h
            );
            parent[h] = Some(i);
            assert_ne!(
                polygon.contour(h).counter_clockwise(),
                polygon.contour(i).counter_clockwise(),
                "hole {} winds the same way as its parent {}",
                h,
                i
            );
        }
    }

    for i in 0..n {
        assert_eq!(
            polygon.contour(i).is_hole(),
            parent[i].is_some(),
            "is_hole flag of contour {} disagrees with the hole lists",
            i
        );
        // a parent chain longer than the contour count means a cycle
        let mut steps = 0;
        let mut at = i;
        while let Some(p) = parent[at] {
            at = p;
            steps += 1;
            assert!(steps <= n, "cycle in hole relations at contour {}", i);
        }
    }
}

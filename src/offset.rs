//! Polygon offsetting (buffering) built on the Boolean operations.
//!
//! Each edge contributes a rectangle extruded along its outward normal, each
//! vertex where the rectangles fan apart contributes an arc fan, and the
//! pieces are applied to the polygon one union (growing) or difference
//! (shrinking) at a time.

use crate::boolean::{boolean_op, BooleanOp};
use crate::core::math::{Point, Segment};
use crate::core::traits::Real;
use crate::error::ClipError;
use crate::polygon::{Contour, Polygon};

/// Options for polygon offsetting.
#[derive(Debug, Clone)]
pub struct OffsetOptions {
    /// Count of segments approximating the arc fan at a vertex. An odd count
    /// places one fan vertex exactly at the offset distance from the corner.
    pub arc_segment_count: usize,
}

impl Default for OffsetOptions {
    #[inline]
    fn default() -> Self {
        OffsetOptions {
            arc_segment_count: 1,
        }
    }
}

/// Offsets the polygon boundary by `distance` with default options.
///
/// Positive distances grow the polygon, negative distances shrink it. Holes
/// shrink when the polygon grows and vice versa.
pub fn offset_polygon<T>(polygon: &Polygon<T>, distance: T) -> Result<Polygon<T>, ClipError>
where
    T: Real,
{
    offset_polygon_opt(polygon, distance, &OffsetOptions::default())
}

/// Offsets the polygon boundary by `distance`.
///
/// Fails with [ClipError::InvalidOffsetParameter] for a non-finite distance
/// or a zero arc segment count. A zero distance returns the input unchanged.
pub fn offset_polygon_opt<T>(
    polygon: &Polygon<T>,
    distance: T,
    options: &OffsetOptions,
) -> Result<Polygon<T>, ClipError>
where
    T: Real,
{
    if !distance.is_finite() {
        return Err(ClipError::InvalidOffsetParameter(
            "offset distance must be finite",
        ));
    }
    if options.arc_segment_count == 0 {
        return Err(ClipError::InvalidOffsetParameter(
            "arc segment count must be at least 1",
        ));
    }
    if distance == T::zero() {
        return Ok(polygon.clone());
    }

    // normalizing windings (externals counter-clockwise, holes clockwise)
    // lets the same signed distance and operation handle holes: their
    // outward normals point into the cavity
    let mut base = polygon.clone();
    base.compute_holes();

    let growing = distance > T::zero();
    let op = if growing {
        BooleanOp::Union
    } else {
        BooleanOp::Difference
    };

    let mut pieces: Vec<Contour<T>> = Vec::new();
    for contour in &base {
        let n = contour.len();
        if n < 3 {
            continue;
        }
        let left_turn = left_turns(contour.points());
        for j in 0..n {
            let s = contour.segment(j);
            if s.is_degenerate() {
                continue;
            }
            pieces.push(offset_rectangle(&s, distance));

            // the rectangles of this edge and the next fan apart when the
            // turn direction matches the side they are extruded to
            let next_j = (j + 1) % n;
            if left_turn[next_j] != growing {
                continue;
            }
            let next_s = contour.segment(next_j);
            if next_s.is_degenerate() {
                continue;
            }
            let arc_start = s.end + s.outward_normal() * distance;
            let arc_end = next_s.begin + next_s.outward_normal() * distance;
            pieces.push(arc_contour(
                s.end,
                distance,
                arc_start,
                arc_end,
                options.arc_segment_count,
            ));
        }
    }

    let mut result = base;
    for piece in pieces {
        result = boolean_op(&result, &Polygon::from_contours(vec![piece]), op)?;
    }
    Ok(result)
}

impl<T> Polygon<T>
where
    T: Real,
{
    /// Offsets the polygon boundary, see [offset_polygon].
    pub fn offset(&self, distance: T) -> Result<Polygon<T>, ClipError> {
        offset_polygon(self, distance)
    }
}

/// Rectangle spanned by the segment and its copy shifted along the outward
/// normal by `distance`.
fn offset_rectangle<T>(s: &Segment<T>, distance: T) -> Contour<T>
where
    T: Real,
{
    let shift = s.outward_normal() * distance;
    let mut c = Contour::with_capacity(4);
    c.add(s.begin);
    c.add(s.end);
    c.add(s.end + shift);
    c.add(s.begin + shift);
    c
}

/// Fan of `segment_count` triangles from `center` covering the arc from
/// `arc_start` to `arc_end` at radius `|radius|`, sweeping towards the side
/// the sign of `radius` selects.
fn arc_contour<T>(
    center: Point<T>,
    radius: T,
    arc_start: Point<T>,
    arc_end: Point<T>,
    segment_count: usize,
) -> Contour<T>
where
    T: Real,
{
    let tau = T::tau();

    let mut start_angle = (arc_start.y - center.y).atan2(arc_start.x - center.x);
    if start_angle < T::zero() {
        start_angle = start_angle + tau;
    }
    let mut end_angle = (arc_end.y - center.y).atan2(arc_end.x - center.x);
    if end_angle < T::zero() {
        end_angle = end_angle + tau;
    }

    // angle swept going clockwise from start to end
    let enclosed = if start_angle > end_angle {
        start_angle - end_angle
    } else {
        start_angle + tau - end_angle
    };

    let count = T::from(segment_count).unwrap();
    let step = if radius < T::zero() {
        -enclosed / count
    } else {
        (tau - enclosed) / count
    };

    let r = radius.abs();
    let mut contour = Contour::with_capacity(segment_count + 2);
    contour.add(center);
    // the fan must meet the neighboring offset rectangles exactly at their
    // corners, so the boundary vertices are taken verbatim and only the
    // interior fan points come from trig
    contour.add(arc_start);
    let mut angle = start_angle;
    for _ in 1..segment_count {
        angle = angle + step;
        contour.add(Point::new(
            center.x + angle.cos() * r,
            center.y + angle.sin() * r,
        ));
    }
    contour.add(arc_end);
    contour
}

/// For each vertex, whether the boundary turns left there.
fn left_turns<T>(points: &[Point<T>]) -> Vec<bool>
where
    T: Real,
{
    let n = points.len();
    let mut turns = Vec::with_capacity(n);
    for i in 0..n {
        let p = points[i];
        let prev = points[(i + n - 1) % n];
        let next = points[(i + 1) % n];
        let vp = prev - p;
        let vn = next - p;
        turns.push(vp.perp_dot(vn) < T::zero());
    }
    turns
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::FuzzyEq;

    fn area(polygon: &Polygon<f64>) -> f64 {
        polygon.iter().map(|c| c.signed_area_sum() / 2.0).sum()
    }

    #[test]
    fn grow_square() {
        let p = polygon![[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]];
        let r = offset_polygon(&p, 1.0).unwrap();
        assert_eq!(r.len(), 1);
        // four side rectangles plus one corner triangle per vertex
        crate::assert_fuzzy_eq!(area(&r), 1.0 + 4.0 + 4.0 * 0.5, 1e-6);
    }

    #[test]
    fn shrink_square() {
        let p = polygon![[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]];
        let r = offset_polygon(&p, -1.0).unwrap();
        assert_eq!(r.len(), 1);
        crate::assert_fuzzy_eq!(area(&r), 4.0, 1e-6);
    }

    #[test]
    fn zero_distance_is_identity() {
        let p = polygon![[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]];
        let r = offset_polygon(&p, 0.0).unwrap();
        assert_eq!(r.contour(0).points(), p.contour(0).points());
    }

    #[test]
    fn invalid_parameters_are_rejected() {
        let p = polygon![[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]];
        assert!(matches!(
            offset_polygon(&p, f64::NAN),
            Err(ClipError::InvalidOffsetParameter(_))
        ));
        assert!(matches!(
            offset_polygon_opt(&p, 1.0, &OffsetOptions {
                arc_segment_count: 0
            }),
            Err(ClipError::InvalidOffsetParameter(_))
        ));
    }

    #[test]
    fn arc_fan_with_single_segment_is_a_corner_triangle() {
        let c = arc_contour(
            Point::new(0.0, 0.0),
            1.0,
            Point::new(1.0, 0.0),
            Point::new(0.0, 1.0),
            1,
        );
        assert_eq!(c.len(), 3);
        assert_eq!(c.point(0), Point::new(0.0, 0.0));
        assert_eq!(c.point(1), Point::new(1.0, 0.0));
        assert_eq!(c.point(2), Point::new(0.0, 1.0));
    }

    #[test]
    fn arc_fan_boundary_vertices_are_bitwise_exact() {
        // the given endpoints must come back untouched; only the interior
        // fan points are computed from angles
        let c = arc_contour(
            Point::new(0.0, 0.0),
            1.0,
            Point::new(1.0, 0.0),
            Point::new(0.0, 1.0),
            2,
        );
        assert_eq!(c.len(), 4);
        assert_eq!(c.point(1), Point::new(1.0, 0.0));
        assert_eq!(c.point(3), Point::new(0.0, 1.0));
        crate::assert_fuzzy_eq!(c.point(2).x, std::f64::consts::FRAC_1_SQRT_2, 1e-12);
        crate::assert_fuzzy_eq!(c.point(2).y, std::f64::consts::FRAC_1_SQRT_2, 1e-12);
    }
}

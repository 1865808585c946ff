use super::{Point, Segment};
use crate::core::traits::Real;

/// Holds the result of finding the intersect between two line segments.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum SegmentIntr<T>
where
    T: Real,
{
    /// No intersect, segments are disjoint, parallel, or collinear without overlap.
    NoIntersect,
    /// Segments intersect at a single point.
    OnePoint {
        /// The intersection point, snapped to the nearest segment endpoint if
        /// within the closeness epsilon.
        point: Point<T>,
    },
    /// Segments are collinear and share more than a single point.
    Overlapping {
        /// Start of the shared interval (sweep order along the first segment).
        point0: Point<T>,
        /// End of the shared interval.
        point1: Point<T>,
    },
}

/// Snaps `p` to the nearest endpoint of either segment when their squared
/// distance is below the closeness epsilon. Keeps intersection points computed
/// parametrically from drifting off the endpoints they arose from.
fn snap_to_endpoint<T>(p: Point<T>, seg_a: Segment<T>, seg_b: Segment<T>) -> Point<T>
where
    T: Real,
{
    let candidates = [seg_a.begin, seg_a.end, seg_b.begin, seg_b.end];
    let mut best = p;
    let mut best_dist = T::geometric_epsilon();
    for c in candidates {
        let d = p.dist_squared(c);
        if d < best_dist {
            best = c;
            best_dist = d;
        }
    }
    best
}

/// Finds the intersect between two line segments.
///
/// The parallelism test is scale invariant: the segments count as parallel
/// when the squared cross product of their directions is at most
/// `epsilon * |dA|^2 * |dB|^2` with `epsilon` being
/// [Real::geometric_epsilon]. Single intersection points are snapped to the
/// nearest endpoint within the closeness epsilon, as are both endpoints of a
/// collinear overlap interval. A collinear pair whose parametric intervals
/// are strictly disjoint is `NoIntersect`; intervals sharing exactly one
/// parameter value yield `OnePoint`.
pub fn segment_intr<T>(seg_a: Segment<T>, seg_b: Segment<T>) -> SegmentIntr<T>
where
    T: Real,
{
    use SegmentIntr::*;

    let eps = T::geometric_epsilon();

    let d_a = seg_a.end - seg_a.begin;
    let d_b = seg_b.end - seg_b.begin;
    let e = seg_b.begin - seg_a.begin;

    let kross = d_a.perp_dot(d_b);
    let sqr_kross = kross * kross;
    let sqr_len_a = d_a.length_squared();
    let sqr_len_b = d_b.length_squared();

    if sqr_kross > eps * sqr_len_a * sqr_len_b {
        // segments not parallel
        let s = e.perp_dot(d_b) / kross;
        if s < T::zero() || s > T::one() {
            return NoIntersect;
        }

        let t = e.perp_dot(d_a) / kross;
        if t < T::zero() || t > T::one() {
            return NoIntersect;
        }

        let point = snap_to_endpoint(seg_a.begin + d_a * s, seg_a, seg_b);
        return OnePoint { point };
    }

    // segments parallel, collinear only if e is also parallel to d_a
    let sqr_len_e = e.length_squared();
    let kross_e = e.perp_dot(d_a);
    if kross_e * kross_e > eps * sqr_len_a * sqr_len_e {
        return NoIntersect;
    }

    // collinear, project seg_b onto seg_a's parametric space
    let s0 = d_a.dot(e) / sqr_len_a;
    let s1 = s0 + d_a.dot(d_b) / sqr_len_a;
    let (s_min, s_max) = if s0 < s1 { (s0, s1) } else { (s1, s0) };

    if s_min > T::one() || s_max < T::zero() {
        // parametric intervals strictly disjoint
        return NoIntersect;
    }

    let w0 = if s_min < T::zero() { T::zero() } else { s_min };
    let w1 = if s_max > T::one() { T::one() } else { s_max };

    if w0 == w1 {
        // intervals touch at a single parameter value
        let point = snap_to_endpoint(seg_a.begin + d_a * w0, seg_a, seg_b);
        return OnePoint { point };
    }

    Overlapping {
        point0: snap_to_endpoint(seg_a.begin + d_a * w0, seg_a, seg_b),
        point1: snap_to_endpoint(seg_a.begin + d_a * w1, seg_a, seg_b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(x0: f64, y0: f64, x1: f64, y1: f64) -> Segment<f64> {
        Segment::new(Point::new(x0, y0), Point::new(x1, y1))
    }

    #[test]
    fn crossing_segments() {
        let a = seg(0.0, 0.0, 2.0, 2.0);
        let b = seg(0.0, 2.0, 2.0, 0.0);
        match segment_intr(a, b) {
            SegmentIntr::OnePoint { point } => {
                assert_eq!(point, Point::new(1.0, 1.0));
            }
            other => panic!("expected single intersection point, got {:?}", other),
        }
    }

    #[test]
    fn disjoint_segments() {
        let a = seg(0.0, 0.0, 1.0, 0.0);
        let b = seg(0.0, 1.0, 1.0, 2.0);
        assert_eq!(segment_intr(a, b), SegmentIntr::NoIntersect);
    }

    #[test]
    fn parallel_segments() {
        let a = seg(0.0, 0.0, 2.0, 0.0);
        let b = seg(0.0, 1.0, 2.0, 1.0);
        assert_eq!(segment_intr(a, b), SegmentIntr::NoIntersect);
    }

    #[test]
    fn collinear_disjoint() {
        let a = seg(0.0, 0.0, 1.0, 0.0);
        let b = seg(2.0, 0.0, 3.0, 0.0);
        assert_eq!(segment_intr(a, b), SegmentIntr::NoIntersect);
    }

    #[test]
    fn collinear_touching_at_endpoint() {
        let a = seg(0.0, 0.0, 1.0, 0.0);
        let b = seg(1.0, 0.0, 2.0, 0.0);
        match segment_intr(a, b) {
            SegmentIntr::OnePoint { point } => {
                assert_eq!(point, Point::new(1.0, 0.0));
            }
            other => panic!("expected single touch point, got {:?}", other),
        }
    }

    #[test]
    fn collinear_overlap() {
        let a = seg(0.0, 0.0, 2.0, 0.0);
        let b = seg(1.0, 0.0, 3.0, 0.0);
        match segment_intr(a, b) {
            SegmentIntr::Overlapping { point0, point1 } => {
                assert_eq!(point0, Point::new(1.0, 0.0));
                assert_eq!(point1, Point::new(2.0, 0.0));
            }
            other => panic!("expected overlap interval, got {:?}", other),
        }
    }

    #[test]
    fn identical_segments_overlap_fully() {
        let a = seg(0.0, 0.0, 2.0, 2.0);
        match segment_intr(a, a) {
            SegmentIntr::Overlapping { point0, point1 } => {
                assert_eq!(point0, a.begin);
                assert_eq!(point1, a.end);
            }
            other => panic!("expected full overlap, got {:?}", other),
        }
    }

    #[test]
    fn shared_endpoint_snaps_exactly() {
        // intersection at a shared endpoint computed parametrically still
        // returns the exact endpoint coordinates
        let a = seg(0.0, 0.0, 1.0, 1.0);
        let b = seg(1.0, 1.0, 2.0, 0.0);
        match segment_intr(a, b) {
            SegmentIntr::OnePoint { point } => {
                assert_eq!(point, Point::new(1.0, 1.0));
            }
            other => panic!("expected endpoint touch, got {:?}", other),
        }
    }

    #[test]
    fn near_endpoint_snaps_to_endpoint() {
        let a = seg(0.0, 0.0, 1.0, 0.0);
        // crosses seg_a a hair away from its right endpoint
        let b = seg(1.0 - 1e-9, -1.0, 1.0 - 1e-9, 1.0);
        match segment_intr(a, b) {
            SegmentIntr::OnePoint { point } => {
                assert_eq!(point, Point::new(1.0, 0.0));
            }
            other => panic!("expected snapped point, got {:?}", other),
        }
    }
}

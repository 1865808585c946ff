//! Geometric primitives shared by the sweep and offset algorithms.
mod point;
mod segment;
mod segment_intersect;

pub use point::Point;
pub use segment::Segment;
pub use segment_intersect::{segment_intr, SegmentIntr};

use crate::core::traits::Real;

/// Twice the signed area of the triangle `(p0, p1, p2)`.
///
/// Positive when the points wind counter-clockwise, negative when clockwise,
/// zero when collinear. This is the single orientation predicate used by all
/// above/below and collinearity tests.
#[inline]
pub fn signed_area<T>(p0: Point<T>, p1: Point<T>, p2: Point<T>) -> T
where
    T: Real,
{
    (p0.x - p2.x) * (p1.y - p2.y) - (p1.x - p2.x) * (p0.y - p2.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_area_orientation() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(1.0, 0.0);
        let c = Point::new(0.0, 1.0);
        assert!(signed_area(a, b, c) > 0.0);
        assert!(signed_area(a, c, b) < 0.0);
        assert_eq!(signed_area(a, b, Point::new(2.0, 0.0)), 0.0);
    }
}

use crate::core::math::Point;
use crate::core::traits::Real;

/// Axis aligned bounding box.
///
/// An empty box has `min` components at positive infinity and `max`
/// components at negative infinity so that combining it with any other box
/// yields the other box unchanged.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox<T = f64> {
    pub x_min: T,
    pub y_min: T,
    pub x_max: T,
    pub y_max: T,
}

impl<T> BoundingBox<T>
where
    T: Real,
{
    #[inline]
    pub fn new(x_min: T, y_min: T, x_max: T, y_max: T) -> Self {
        BoundingBox {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    /// Creates an empty bounding box containing no points.
    #[inline]
    pub fn empty() -> Self {
        BoundingBox {
            x_min: T::infinity(),
            y_min: T::infinity(),
            x_max: T::neg_infinity(),
            y_max: T::neg_infinity(),
        }
    }

    /// Expands the box to contain `point`.
    #[inline]
    pub fn add_point(&mut self, point: Point<T>) {
        self.x_min = self.x_min.min(point.x);
        self.y_min = self.y_min.min(point.y);
        self.x_max = self.x_max.max(point.x);
        self.y_max = self.y_max.max(point.y);
    }

    /// Component-wise min/max combination of the two boxes.
    #[inline]
    pub fn combine(&self, other: &Self) -> Self {
        BoundingBox {
            x_min: self.x_min.min(other.x_min),
            y_min: self.y_min.min(other.y_min),
            x_max: self.x_max.max(other.x_max),
            y_max: self.y_max.max(other.y_max),
        }
    }

    /// Closed interval overlap test (boxes sharing only a boundary overlap).
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.x_min <= other.x_max
            && self.x_max >= other.x_min
            && self.y_min <= other.y_max
            && self.y_max >= other.y_min
    }
}

impl<T> Default for BoundingBox<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_combines_as_identity() {
        let b = BoundingBox::new(0.0, 1.0, 2.0, 3.0);
        assert_eq!(BoundingBox::empty().combine(&b), b);
        assert_eq!(b.combine(&BoundingBox::empty()), b);
    }

    #[test]
    fn add_point_expands() {
        let mut b = BoundingBox::empty();
        b.add_point(Point::new(1.0, 2.0));
        b.add_point(Point::new(-1.0, 5.0));
        assert_eq!(b, BoundingBox::new(-1.0, 2.0, 1.0, 5.0));
    }

    #[test]
    fn overlap_is_closed_interval() {
        let a = BoundingBox::new(0.0, 0.0, 1.0, 1.0);
        let b = BoundingBox::new(1.0, 1.0, 2.0, 2.0);
        let c = BoundingBox::new(1.1, 1.1, 2.0, 2.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
    }
}

use super::Point;
use crate::core::traits::Real;

/// Line segment between two points.
///
/// The segment is directed from `begin` to `end` for the purposes of normal
/// computation; set-membership predicates ignore the direction.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment<T = f64> {
    pub begin: Point<T>,
    pub end: Point<T>,
}

impl<T> Segment<T>
where
    T: Real,
{
    #[inline]
    pub fn new(begin: Point<T>, end: Point<T>) -> Self {
        Segment { begin, end }
    }

    /// Returns `true` if both endpoints have the same x coordinate.
    #[inline]
    pub fn is_vertical(&self) -> bool {
        self.begin.x == self.end.x
    }

    /// Returns `true` if both endpoints are the exact same point.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.begin == self.end
    }

    /// Lexicographically smaller endpoint (x first, then y).
    #[inline]
    pub fn min(&self) -> Point<T> {
        if (self.begin.x, self.begin.y) <= (self.end.x, self.end.y) {
            self.begin
        } else {
            self.end
        }
    }

    /// Lexicographically larger endpoint (x first, then y).
    #[inline]
    pub fn max(&self) -> Point<T> {
        if (self.begin.x, self.begin.y) <= (self.end.x, self.end.y) {
            self.end
        } else {
            self.begin
        }
    }

    /// Unit normal pointing to the left of the `begin -> end` direction.
    ///
    /// Undefined (NaN components) for degenerate segments.
    #[inline]
    pub fn inward_normal(&self) -> Point<T> {
        let d = self.end - self.begin;
        Point::new(-d.y, d.x).normalize()
    }

    /// Unit normal pointing to the right of the `begin -> end` direction.
    #[inline]
    pub fn outward_normal(&self) -> Point<T> {
        -self.inward_normal()
    }
}

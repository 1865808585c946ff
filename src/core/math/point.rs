use crate::core::traits::{FuzzyEq, Real};
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// 2D point or vector with `x` and `y` components.
///
/// Arithmetic operators treat it as a vector; geometric predicates treat it
/// as a point. `PartialEq` is exact component equality, closeness tests with
/// rounding tolerance go through [Point::is_close_to].
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point<T = f64> {
    pub x: T,
    pub y: T,
}

impl<T> Point<T>
where
    T: Real,
{
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Point { x, y }
    }

    #[inline]
    pub fn zero() -> Self {
        Point {
            x: T::zero(),
            y: T::zero(),
        }
    }

    /// Dot product.
    #[inline]
    pub fn dot(&self, other: Self) -> T {
        self.x * other.x + self.y * other.y
    }

    /// Perpendicular dot product (2D cross product z component).
    #[inline]
    pub fn perp_dot(&self, other: Self) -> T {
        self.x * other.y - self.y * other.x
    }

    #[inline]
    pub fn length_squared(&self) -> T {
        self.dot(*self)
    }

    #[inline]
    pub fn length(&self) -> T {
        self.length_squared().sqrt()
    }

    /// Squared distance between `self` and `other`.
    #[inline]
    pub fn dist_squared(&self, other: Self) -> T {
        (other - *self).length_squared()
    }

    /// Returns the unit length vector in the direction of `self`.
    ///
    /// Note if `self` has zero length the result is undefined (NaN components).
    #[inline]
    pub fn normalize(&self) -> Self {
        *self / self.length()
    }

    /// Returns `true` if the squared distance to `other` is below
    /// [Real::geometric_epsilon].
    #[inline]
    pub fn is_close_to(&self, other: Self) -> bool {
        self.dist_squared(other) < T::geometric_epsilon()
    }

    #[inline]
    pub fn fuzzy_eq_eps(&self, other: Self, eps: T) -> bool {
        self.x.fuzzy_eq_eps(other.x, eps) && self.y.fuzzy_eq_eps(other.y, eps)
    }

    #[inline]
    pub fn fuzzy_eq(&self, other: Self) -> bool {
        self.fuzzy_eq_eps(other, T::fuzzy_epsilon())
    }
}

impl<T> Add for Point<T>
where
    T: Real,
{
    type Output = Point<T>;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T> AddAssign for Point<T>
where
    T: Real,
{
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.x = self.x + rhs.x;
        self.y = self.y + rhs.y;
    }
}

impl<T> Sub for Point<T>
where
    T: Real,
{
    type Output = Point<T>;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T> SubAssign for Point<T>
where
    T: Real,
{
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.x = self.x - rhs.x;
        self.y = self.y - rhs.y;
    }
}

impl<T> Mul<T> for Point<T>
where
    T: Real,
{
    type Output = Point<T>;

    #[inline]
    fn mul(self, rhs: T) -> Self::Output {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl<T> Div<T> for Point<T>
where
    T: Real,
{
    type Output = Point<T>;

    #[inline]
    fn div(self, rhs: T) -> Self::Output {
        Point::new(self.x / rhs, self.y / rhs)
    }
}

impl<T> Neg for Point<T>
where
    T: Real,
{
    type Output = Point<T>;

    #[inline]
    fn neg(self) -> Self::Output {
        Point::new(-self.x, -self.y)
    }
}

impl<T> Default for Point<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Point::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vector_arithmetic() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(3.0, -1.0);
        assert_eq!(a + b, Point::new(4.0, 1.0));
        assert_eq!(b - a, Point::new(2.0, -3.0));
        assert_eq!(a * 2.0, Point::new(2.0, 4.0));
        assert_eq!(b / 2.0, Point::new(1.5, -0.5));
        assert_eq!(-a, Point::new(-1.0, -2.0));
    }

    #[test]
    fn perp_dot_sign() {
        let a = Point::new(1.0, 0.0);
        let b = Point::new(0.0, 1.0);
        assert!(a.perp_dot(b) > 0.0);
        assert!(b.perp_dot(a) < 0.0);
        assert_eq!(a.perp_dot(a), 0.0);
    }

    #[test]
    fn closeness() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(1e-5, 1e-5);
        let c = Point::new(1e-3, 0.0);
        assert!(a.is_close_to(b));
        assert!(!a.is_close_to(c));
        assert_ne!(a, b);
    }

    #[test]
    fn normalize_unit_length() {
        let v = Point::new(3.0, 4.0).normalize();
        crate::assert_fuzzy_eq!(v.length(), 1.0);
    }
}

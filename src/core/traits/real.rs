use super::FuzzyEq;

/// Trait representing a real number (e.g. 1.1, -3.5, etc.) usable as a polygon coordinate.
pub trait Real:
    num_traits::real::Real + FuzzyEq + std::default::Default + std::fmt::Debug + 'static
{
    fn infinity() -> Self;

    fn neg_infinity() -> Self;

    fn is_finite(self) -> bool;

    #[inline]
    fn pi() -> Self {
        Self::from(std::f64::consts::PI).unwrap()
    }

    #[inline]
    fn tau() -> Self {
        Self::from(std::f64::consts::TAU).unwrap()
    }

    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    /// Epsilon used by the clipping algorithm for geometric closeness tests.
    ///
    /// Two points are considered coincident when their squared distance is less
    /// than this value, and two segment directions parallel when the squared
    /// cross product is below this fraction of the product of their squared
    /// lengths.
    #[inline]
    fn geometric_epsilon() -> Self {
        Self::from(1e-8).unwrap()
    }
}

macro_rules! impl_real {
    ($ty:ident) => {
        impl Real for $ty {
            #[inline]
            fn infinity() -> Self {
                $ty::INFINITY
            }

            #[inline]
            fn neg_infinity() -> Self {
                $ty::NEG_INFINITY
            }

            #[inline]
            fn is_finite(self) -> bool {
                $ty::is_finite(self)
            }

            #[inline]
            fn pi() -> Self {
                std::$ty::consts::PI
            }

            #[inline]
            fn tau() -> Self {
                std::$ty::consts::TAU
            }

            #[inline]
            fn two() -> Self {
                2.0
            }
        }
    };
}

impl_real!(f32);
impl_real!(f64);

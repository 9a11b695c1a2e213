//! Numeric trait used throughout the crate.
use static_aabb2d_index::IndexableNum;

/// Trait representing a real number (e.g. 1.1, -3.5, etc.) that can be compared against a
/// tolerance.
///
/// All tolerance comparisons are inclusive: a value whose magnitude is exactly the tolerance is
/// treated as zero.
///
/// # Examples
///
/// ```
/// # use polysplit::core::traits::*;
/// let a = 0.1 + 0.2;
/// assert_ne!(a, 0.3);
/// assert!(a.fuzzy_eq_eps(0.3, 1e-10));
/// assert!(1e-10f64.fuzzy_zero_eps(1e-10));
/// assert!(!2e-10f64.fuzzy_zero_eps(1e-10));
/// ```
pub trait Real:
    num_traits::real::Real
    + num_traits::Bounded
    + IndexableNum
    + std::default::Default
    + std::fmt::Debug
    + 'static
{
    /// Default absolute tolerance used for intersection tests and sliver removal (`1e-10`).
    fn split_tolerance() -> Self;

    /// Returns `true` if the value is neither NaN nor infinite.
    fn is_finite_value(self) -> bool;

    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    /// Returns `true` if `|self - other| <= eps`.
    #[inline]
    fn fuzzy_eq_eps(self, other: Self, eps: Self) -> bool {
        (self - other).abs() <= eps
    }

    /// [Real::fuzzy_eq_eps] using [Real::split_tolerance].
    #[inline]
    fn fuzzy_eq(self, other: Self) -> bool {
        self.fuzzy_eq_eps(other, Self::split_tolerance())
    }

    /// Returns `true` if `|self| <= eps`.
    #[inline]
    fn fuzzy_zero_eps(self, eps: Self) -> bool {
        self.abs() <= eps
    }

    /// Test if `self` is in range between `min` and `max` with some epsilon for fuzzy comparing.
    ///
    /// ```
    /// # use polysplit::core::traits::*;
    /// assert!(0.99f64.fuzzy_in_range_eps(1.0, 2.0, 0.05));
    /// assert!(2.0f64.fuzzy_in_range_eps(1.0, 2.0, 1e-10));
    /// assert!(!2.5f64.fuzzy_in_range_eps(1.0, 2.0, 1e-10));
    /// ```
    #[inline]
    fn fuzzy_in_range_eps(self, min: Self, max: Self, eps: Self) -> bool {
        self + eps >= min && self <= max + eps
    }

    /// Sign of the value after snapping `|self| <= eps` to zero.
    #[inline]
    fn fuzzy_sign_eps(self, eps: Self) -> i8 {
        if self.fuzzy_zero_eps(eps) {
            0
        } else if self > Self::zero() {
            1
        } else {
            -1
        }
    }
}

macro_rules! impl_real {
    ($ty:ty) => {
        impl Real for $ty {
            #[inline]
            fn split_tolerance() -> Self {
                1.0e-10
            }

            #[inline]
            fn is_finite_value(self) -> bool {
                self.is_finite()
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

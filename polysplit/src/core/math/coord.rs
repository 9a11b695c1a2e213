use crate::core::traits::Real;
use std::ops;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A 2D coordinate (or vector) with `x` and `y` components.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Coord<T = f64> {
    pub x: T,
    pub y: T,
}

impl<T> Coord<T>
where
    T: Real,
{
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Coord { x, y }
    }

    #[inline]
    pub fn zero() -> Self {
        Coord::new(T::zero(), T::zero())
    }

    /// Uniformly scale the vector by `scale_factor`.
    #[inline]
    pub fn scale(&self, scale_factor: T) -> Self {
        coord(scale_factor * self.x, scale_factor * self.y)
    }

    #[inline]
    pub fn dot(&self, other: Self) -> T {
        self.x * other.x + self.y * other.y
    }

    /// Perpendicular dot product (`self.x * other.y - self.y * other.x`), the z component of the
    /// 3D cross product.
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

    /// Component wise fuzzy equality using `eps`.
    #[inline]
    pub fn fuzzy_eq_eps(&self, other: Self, eps: T) -> bool {
        self.x.fuzzy_eq_eps(other.x, eps) && self.y.fuzzy_eq_eps(other.y, eps)
    }

    #[inline]
    pub fn fuzzy_eq(&self, other: Self) -> bool {
        self.fuzzy_eq_eps(other, T::split_tolerance())
    }

    /// Returns `true` if both components are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite_value() && self.y.is_finite_value()
    }
}

#[inline(always)]
pub fn coord<T>(x: T, y: T) -> Coord<T>
where
    T: Real,
{
    Coord::new(x, y)
}

macro_rules! impl_binary_op {
    ($op_trait:ident, $op_func:ident, $op:tt) => {
        impl<T: Real> ops::$op_trait<Coord<T>> for Coord<T> {
            type Output = Coord<T>;
            #[inline]
            fn $op_func(self, rhs: Coord<T>) -> Self::Output {
                Coord::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }

        impl<T: Real> ops::$op_trait<&Coord<T>> for Coord<T> {
            type Output = Coord<T>;
            #[inline]
            fn $op_func(self, rhs: &Coord<T>) -> Self::Output {
                Coord::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }
    };
}

impl_binary_op!(Add, add, +);
impl_binary_op!(Sub, sub, -);

impl<T: Real> ops::Neg for Coord<T> {
    type Output = Coord<T>;
    #[inline]
    fn neg(self) -> Self::Output {
        Coord::new(-self.x, -self.y)
    }
}

impl<T: Real> From<(T, T)> for Coord<T> {
    #[inline]
    fn from((x, y): (T, T)) -> Self {
        Coord::new(x, y)
    }
}

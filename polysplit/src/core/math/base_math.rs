use super::Coord;
use crate::core::traits::Real;

/// Distance squared between the points `p0` and `p1`.
#[inline]
pub fn dist_squared<T>(p0: Coord<T>, p1: Coord<T>) -> T
where
    T: Real,
{
    let d = p0 - p1;
    d.dot(d)
}

/// Midpoint of a line segment defined by `p0` to `p1`.
#[inline]
pub fn midpoint<T>(p0: Coord<T>, p1: Coord<T>) -> Coord<T>
where
    T: Real,
{
    Coord::new((p0.x + p1.x) / T::two(), (p0.y + p1.y) / T::two())
}

/// Returns the point on the line segment going from `p0` to `p1` at parametric value `t`.
#[inline]
pub fn point_from_parametric<T>(p0: Coord<T>, p1: Coord<T>, t: T) -> Coord<T>
where
    T: Real,
{
    p0 + (p1 - p0).scale(t)
}

/// Orientation determinant of `point` relative to the directed line `p0 -> p1`.
///
/// This is the determinant of the 3x3 matrix `[[p0.x, p0.y, 1], [p1.x, p1.y, 1], [point.x,
/// point.y, 1]]`, evaluated in its translated form for better precision. It is positive when
/// `point` is left of the line, negative when right of it and zero when collinear.
///
/// # Examples
///
/// ```
/// # use polysplit::core::math::*;
/// let p0 = Coord::new(0.0, 0.0);
/// let p1 = Coord::new(2.0, 0.0);
/// assert_eq!(orient_det(p0, p1, Coord::new(1.0, 1.0)), 2.0);
/// assert_eq!(orient_det(p0, p1, Coord::new(1.0, -1.0)), -2.0);
/// assert_eq!(orient_det(p0, p1, Coord::new(5.0, 0.0)), 0.0);
/// ```
#[inline]
pub fn orient_det<T>(p0: Coord<T>, p1: Coord<T>, point: Coord<T>) -> T
where
    T: Real,
{
    (p1 - p0).perp_dot(point - p0)
}

/// Returns true if `point` is left of the direction vector `p1 - p0`.
#[inline]
pub fn is_left<T>(p0: Coord<T>, p1: Coord<T>, point: Coord<T>) -> bool
where
    T: Real,
{
    orient_det(p0, p1, point) > T::zero()
}

/// Returns the closest point on the line segment from `p0` to `p1` to the `point` given.
#[inline]
pub fn seg_closest_point<T>(p0: Coord<T>, p1: Coord<T>, point: Coord<T>) -> Coord<T>
where
    T: Real,
{
    let v = p1 - p0;
    let w = point - p0;
    let c1 = w.dot(v);
    if c1 <= T::zero() {
        return p0;
    }

    let c2 = v.length_squared();
    if c2 <= c1 {
        return p1;
    }

    p0 + v.scale(c1 / c2)
}

/// Returns true if `point` lies within `eps` distance of the line segment `p0` to `p1`.
///
/// # Examples
///
/// ```
/// # use polysplit::core::math::*;
/// let p0 = Coord::new(0.0, 0.0);
/// let p1 = Coord::new(10.0, 0.0);
/// assert!(point_on_seg(p0, p1, Coord::new(5.0, 0.0), 1e-10));
/// assert!(point_on_seg(p0, p1, Coord::new(10.0, 0.0), 1e-10));
/// assert!(!point_on_seg(p0, p1, Coord::new(5.0, 1e-3), 1e-10));
/// assert!(!point_on_seg(p0, p1, Coord::new(11.0, 0.0), 1e-10));
/// ```
#[inline]
pub fn point_on_seg<T>(p0: Coord<T>, p1: Coord<T>, point: Coord<T>, eps: T) -> bool
where
    T: Real,
{
    dist_squared(seg_closest_point(p0, p1, point), point) <= eps * eps
}

/// Returns true if the projection of `point` onto the line through `p0` and `p1` falls within the
/// segment, using `eps` as a distance tolerance at either end.
#[inline]
pub fn projects_within_seg<T>(p0: Coord<T>, p1: Coord<T>, point: Coord<T>, eps: T) -> bool
where
    T: Real,
{
    let v = p1 - p0;
    let len_squared = v.length_squared();
    if len_squared.fuzzy_zero_eps(eps * eps) {
        return point.fuzzy_eq_eps(p0, eps);
    }

    let len = len_squared.sqrt();
    // signed distance along the segment from p0
    let along = (point - p0).dot(v) / len;
    along.fuzzy_in_range_eps(T::zero(), len, eps)
}

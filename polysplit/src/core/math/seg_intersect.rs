use super::Coord;
use crate::core::traits::Real;

/// Holds the result of intersecting two line segments.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum SegSegIntr<T> {
    /// Segments are parallel and not collinear, or at least one of them has no length.
    NoIntersect,
    /// Segments lie on the same line (they may or may not overlap).
    Collinear,
    /// The segments cross each other within their bounds.
    TrueIntersect {
        /// Parametric value for intersect on first segment.
        seg1_t: T,
        /// Parametric value for intersect on second segment.
        seg2_t: T,
    },
    /// The supporting lines cross but one or both of the segments must be extended to reach.
    FalseIntersect {
        /// Parametric value for intersect on first segment.
        seg1_t: T,
        /// Parametric value for intersect on second segment.
        seg2_t: T,
    },
}

/// Finds the intersect between the line segments `v1->v2` and `u1->u2`.
///
/// Parametric values follow `P(t) = p0 + t * (p1 - p0)` for each segment. `epsilon` is applied to
/// the perpendicular dot product (parallel test) and to the parametric values after scaling them
/// by segment length, so the bounds check is a distance check.
///
/// # Examples
///
/// ```
/// # use polysplit::core::math::*;
/// let v1 = Coord::new(0.0, 0.0);
/// let v2 = Coord::new(1.0, 0.0);
/// let u1 = Coord::new(0.5, -1.0);
/// let u2 = Coord::new(0.5, 1.0);
/// match seg_seg_intr(v1, v2, u1, u2, 1e-10) {
///     SegSegIntr::TrueIntersect { seg1_t, seg2_t } => {
///         assert_eq!(seg1_t, 0.5);
///         assert_eq!(seg2_t, 0.5);
///     }
///     r => unreachable!("expected true intersect, got {:?}", r),
/// }
/// ```
pub fn seg_seg_intr<T>(
    v1: Coord<T>,
    v2: Coord<T>,
    u1: Coord<T>,
    u2: Coord<T>,
    epsilon: T,
) -> SegSegIntr<T>
where
    T: Real,
{
    // http://geomalgorithms.com/a05-_intersect-1.html
    use SegSegIntr::*;

    let v = v2 - v1;
    let u = u2 - u1;
    let v_pdot_u = v.perp_dot(u);
    let w = v1 - u1;

    if v_pdot_u.fuzzy_zero_eps(epsilon) {
        if v.length_squared().fuzzy_zero_eps(epsilon) || u.length_squared().fuzzy_zero_eps(epsilon)
        {
            return NoIntersect;
        }

        if v.perp_dot(w).fuzzy_zero_eps(epsilon) && u.perp_dot(w).fuzzy_zero_eps(epsilon) {
            return Collinear;
        }

        return NoIntersect;
    }

    let seg1_t = u.perp_dot(w) / v_pdot_u;
    let seg2_t = v.perp_dot(w) / v_pdot_u;

    let seg1_length = v.length();
    let seg2_length = u.length();
    if (seg1_t * seg1_length).fuzzy_in_range_eps(T::zero(), seg1_length, epsilon)
        && (seg2_t * seg2_length).fuzzy_in_range_eps(T::zero(), seg2_length, epsilon)
    {
        TrueIntersect { seg1_t, seg2_t }
    } else {
        FalseIntersect { seg1_t, seg2_t }
    }
}

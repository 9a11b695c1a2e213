//! Removes duplicate and near duplicate fragments.
//!
//! Two fragments are duplicates when the area of their symmetric difference is within tolerance.
//! The intersection area is found by slicing the edges of each fragment where they cross the
//! other and keeping the slices that bound the shared region.
use crate::{
    core::{
        math::{midpoint, point_from_parametric, seg_seg_intr, Coord, SegSegIntr},
        traits::Real,
    },
    geometry::{PointLocation, Polygon, PolygonPart, Ring},
};

/// Returns true if `a` and `b` have the same vertexes in the same cyclic order (either direction)
/// within `eps`, regardless of start vertex.
pub fn rings_match_cyclic<T>(a: &Ring<T>, b: &Ring<T>, eps: T) -> bool
where
    T: Real,
{
    let n = a.vertex_count();
    if n != b.vertex_count() {
        return false;
    }

    if n == 0 {
        return true;
    }

    let matches_from = |offset: usize, reverse: bool| {
        (0..n).all(|i| {
            let j = if reverse { offset + n - i } else { offset + i };
            a.vertex(i).fuzzy_eq_eps(b.vertex(j), eps)
        })
    };

    (0..n).any(|offset| matches_from(offset, false) || matches_from(offset, true))
}

/// Every ring of `a` matches a ring of `b` as a cyclic vertex sequence.
fn rings_all_match<T>(a: &PolygonPart<T>, b: &PolygonPart<T>, eps: T) -> bool
where
    T: Real,
{
    a.iter_rings()
        .all(|(_, ra)| b.iter_rings().any(|(_, rb)| rings_match_cyclic(ra, rb, eps)))
}

/// Fragment as a part with a clockwise shell followed by counter clockwise holes.
fn to_oriented_part<T>(polygon: &Polygon<T>) -> PolygonPart<T>
where
    T: Real,
{
    let mut rings = polygon.rings().iter().filter(|r| !r.is_empty()).cloned();
    match rings.next() {
        Some(shell) => PolygonPart::new(shell, rings.collect()).into_oriented(),
        None => PolygonPart::default(),
    }
}

/// Parametric values strictly inside `v1->v2` where the edges of `other` cross or overlap it,
/// sorted and with near repeats removed.
fn slice_params<T>(v1: Coord<T>, v2: Coord<T>, other: &PolygonPart<T>, eps: T) -> Vec<T>
where
    T: Real,
{
    let v = v2 - v1;
    let len_sq = v.length_squared();
    if len_sq.fuzzy_zero_eps(eps) {
        return Vec::new();
    }

    let t_eps = eps / len_sq.sqrt();
    let interior = |t: T| t > t_eps && t < T::one() - t_eps;
    let mut params = Vec::new();
    for (_, r) in other.iter_rings() {
        for (_, u1, u2) in r.iter_edges() {
            match seg_seg_intr(v1, v2, u1, u2, eps) {
                SegSegIntr::TrueIntersect { seg1_t, .. } => {
                    if interior(seg1_t) {
                        params.push(seg1_t);
                    }
                }
                SegSegIntr::Collinear => {
                    for u in [u1, u2] {
                        let t = (u - v1).dot(v) / len_sq;
                        if interior(t) {
                            params.push(t);
                        }
                    }
                }
                _ => {}
            }
        }
    }

    params.sort_by(|x, y| x.partial_cmp(y).unwrap_or(std::cmp::Ordering::Equal));
    params.dedup_by(|x, y| (*x - *y).abs() <= t_eps);
    params
}

/// Twice the signed area swept by the slices of `part`'s edges that bound its overlap with
/// `other`, measured from `origin`.
///
/// With `keep_shared` a slice lying on the boundary of `other` counts when both boundaries run
/// the same way there (the two areas lie on the same side of it).
fn overlap_boundary_sum<T>(
    part: &PolygonPart<T>,
    other: &PolygonPart<T>,
    origin: Coord<T>,
    keep_shared: bool,
    eps: T,
) -> T
where
    T: Real,
{
    let mut sum = T::zero();
    for (_, r) in part.iter_rings() {
        for (_, v1, v2) in r.iter_edges() {
            let params = slice_params(v1, v2, other, eps);
            let mut prev = v1;
            let ends = params
                .iter()
                .map(|&t| point_from_parametric(v1, v2, t))
                .chain(std::iter::once(v2));
            for next in ends {
                let mid = midpoint(prev, next);
                let keep = match other.locate(mid, eps) {
                    PointLocation::Inside => true,
                    PointLocation::Outside => false,
                    PointLocation::OnBoundary => {
                        keep_shared
                            && other
                                .boundary_hit(mid, eps)
                                .and_then(|hit| other.ring(hit.ring_index)?.edge(hit.edge_index))
                                .is_some_and(|(u1, u2)| (u2 - u1).dot(v2 - v1) > T::zero())
                    }
                };

                if keep {
                    sum = sum + (prev - origin).perp_dot(next - origin);
                }

                prev = next;
            }
        }
    }

    sum
}

/// Area of the region covered by both `a` and `b`.
fn intersection_area<T>(a: &PolygonPart<T>, b: &PolygonPart<T>, eps: T) -> T
where
    T: Real,
{
    let origin = match a.shell.coords().first() {
        Some(&c) => c,
        None => return T::zero(),
    };

    let double_area = overlap_boundary_sum(a, b, origin, true, eps)
        + overlap_boundary_sum(b, a, origin, false, eps);
    (double_area / T::two()).abs()
}

fn part_symmetric_difference<T>(a: &PolygonPart<T>, b: &PolygonPart<T>, eps: T) -> T
where
    T: Real,
{
    let area = a.area() + b.area() - T::two() * intersection_area(a, b, eps);
    num_traits::real::Real::max(area, T::zero())
}

/// Area covered by exactly one of `a` and `b`.
pub fn symmetric_difference_area<T>(a: &Polygon<T>, b: &Polygon<T>, eps: T) -> T
where
    T: Real,
{
    part_symmetric_difference(&to_oriented_part(a), &to_oriented_part(b), eps)
}

/// Returns true if `a` and `b` cover the same area, their symmetric difference is within `eps`.
///
/// Matching rings and differing areas are decided without computing the symmetric difference.
pub fn fragments_coincide<T>(a: &Polygon<T>, b: &Polygon<T>, eps: T) -> bool
where
    T: Real,
{
    let pa = to_oriented_part(a);
    let pb = to_oriented_part(b);
    match (pa.shell.is_empty(), pb.shell.is_empty()) {
        (true, true) => return true,
        (true, false) => return pb.area() <= eps,
        (false, true) => return pa.area() <= eps,
        (false, false) => {}
    }

    if !pa.area().fuzzy_eq_eps(pb.area(), eps) {
        return false;
    }

    if pa.ring_count() == pb.ring_count() && rings_all_match(&pa, &pb, eps) {
        return true;
    }

    part_symmetric_difference(&pa, &pb, eps) <= eps
}

/// Remove duplicate fragments keeping the first occurrence, O(n^2) in fragment count.
pub fn dedup_fragments<T>(fragments: Vec<Polygon<T>>, eps: T) -> Vec<Polygon<T>>
where
    T: Real,
{
    let mut result: Vec<Polygon<T>> = Vec::with_capacity(fragments.len());
    for f in fragments {
        if result.iter().any(|kept| fragments_coincide(kept, &f, eps)) {
            log::debug!("dropping duplicate fragment with area {:?}", f.area());
            continue;
        }

        result.push(f);
    }

    result
}

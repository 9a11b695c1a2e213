//! Normalizes input polygons into oriented parts (an island with its holes).
use crate::{
    core::{math::Coord, traits::Real},
    geometry::{Polygon, PolygonPart, Ring, RingOrientation},
    split::SplitError,
};
use static_aabb2d_index::{StaticAABB2DIndexBuilder, AABB};

/// Closed coordinate arrays for every non empty ring of `polygon`.
pub fn to_vertex_arrays<T>(polygon: &Polygon<T>) -> Vec<Vec<Coord<T>>>
where
    T: Real,
{
    polygon
        .rings()
        .iter()
        .filter(|r| !r.is_empty())
        .map(|r| Ring::new(r.coords().to_vec()).coords().to_vec())
        .collect()
}

/// Separate `polygon` into independent closed rings with repeated positions removed.
///
/// Rings with fewer than 3 distinct vertexes or an area at or below `pos_equal_eps` carry no area
/// and are dropped.
pub fn separate_parts<T>(polygon: &Polygon<T>, pos_equal_eps: T) -> Vec<Ring<T>>
where
    T: Real,
{
    let mut result = Vec::with_capacity(polygon.rings().len());
    for (i, coords) in to_vertex_arrays(polygon).into_iter().enumerate() {
        let ring = Ring::from_open_coords(coords, pos_equal_eps);
        if ring.vertex_count() < 3 || ring.signed_area().abs() <= pos_equal_eps {
            log::warn!(
                "dropping degenerate ring {} ({} distinct vertexes)",
                i,
                ring.vertex_count()
            );
            continue;
        }

        result.push(ring);
    }

    result
}

#[inline]
fn aabb_contains<T>(outer: &AABB<T>, inner: &AABB<T>) -> bool
where
    T: Real,
{
    outer.min_x <= inner.min_x
        && outer.min_y <= inner.min_y
        && outer.max_x >= inner.max_x
        && outer.max_y >= inner.max_y
}

/// Returns true if `inner` lies inside `outer` (rings are assumed to not cross each other).
pub fn ring_contains_ring<T>(outer: &Ring<T>, inner: &Ring<T>, pos_equal_eps: T) -> bool
where
    T: Real,
{
    match inner.point_off_boundary_of(outer, pos_equal_eps) {
        Some(p) => outer.winding_number(p) != 0,
        // every vertex and edge midpoint of inner lies on outer, treat as the same ring
        None => false,
    }
}

/// Classify every ring as island or hole by containment depth and fix the winding direction.
///
/// A ring contained by an even number of other rings is an island (made clockwise), one contained
/// by an odd number is a hole (made counter clockwise) and is attached to the smallest island
/// containing it. Parts are returned in the input order of their islands.
pub fn fix_orientation<T>(
    rings: Vec<Ring<T>>,
    pos_equal_eps: T,
) -> Result<Vec<PolygonPart<T>>, SplitError>
where
    T: Real,
{
    let extents: Vec<AABB<T>> = rings
        .iter()
        .map(|r| {
            r.extents().ok_or_else(|| {
                SplitError::GeometryInconsistency("empty ring given to fix_orientation".into())
            })
        })
        .collect::<Result<_, _>>()?;

    let index = {
        let mut builder = StaticAABB2DIndexBuilder::new(rings.len());
        for e in extents.iter() {
            builder.add(e.min_x, e.min_y, e.max_x, e.max_y);
        }
        builder.build()?
    };

    let mut containers: Vec<Vec<usize>> = Vec::with_capacity(rings.len());
    let mut query_stack = Vec::new();
    for (i, ring) in rings.iter().enumerate() {
        let e = &extents[i];
        let candidates =
            index.query_with_stack(e.min_x, e.min_y, e.max_x, e.max_y, &mut query_stack);
        let mut contained_by: Vec<usize> = candidates
            .into_iter()
            .filter(|&j| {
                j != i
                    && aabb_contains(&extents[j], e)
                    && ring_contains_ring(&rings[j], ring, pos_equal_eps)
            })
            .collect();
        contained_by.sort_unstable();
        containers.push(contained_by);
    }

    let is_hole: Vec<bool> = containers.iter().map(|c| c.len() % 2 == 1).collect();

    let mut parts: Vec<Option<PolygonPart<T>>> = vec![None; rings.len()];
    let mut holes: Vec<(usize, Ring<T>)> = Vec::new();
    for (i, ring) in rings.into_iter().enumerate() {
        if is_hole[i] {
            holes.push((i, ring.with_orientation(RingOrientation::CounterClockwise)));
        } else {
            let shell = ring.with_orientation(RingOrientation::Clockwise);
            parts[i] = Some(PolygonPart::new(shell, Vec::new()));
        }
    }

    for (i, hole) in holes {
        // smallest containing island is the one nested deepest
        let parent = containers[i]
            .iter()
            .copied()
            .filter(|&j| !is_hole[j])
            .max_by_key(|&j| containers[j].len());

        match parent.and_then(|j| parts[j].as_mut()) {
            Some(part) => part.holes.push(hole),
            None => {
                return Err(SplitError::GeometryInconsistency(format!(
                    "hole ring {} has no containing island",
                    i
                )))
            }
        }
    }

    Ok(parts.into_iter().flatten().collect())
}

/// Stitch parts back into a single polygon, each island followed by its holes.
pub fn combine_parts<T, I>(parts: I) -> Polygon<T>
where
    T: Real,
    I: IntoIterator<Item = PolygonPart<T>>,
{
    parts
        .into_iter()
        .fold(Polygon::default(), |acc, part| {
            let mut rings = acc.into_rings();
            rings.extend(Polygon::from(part).into_rings());
            Polygon::new(rings)
        })
}

/// Separate and orient `polygon` into parts ready for splitting.
pub fn prepare_polygon<T>(
    polygon: &Polygon<T>,
    pos_equal_eps: T,
) -> Result<Vec<PolygonPart<T>>, SplitError>
where
    T: Real,
{
    let rings = separate_parts(polygon, pos_equal_eps);
    if rings.is_empty() {
        return Err(SplitError::InvalidInput("polygon has no ring with area"));
    }

    let parts = fix_orientation(rings, pos_equal_eps)?;
    log::trace!("prepared polygon into {} part(s)", parts.len());
    Ok(parts)
}

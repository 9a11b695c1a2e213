//! Splits rings and polygon parts along chords.
use crate::{
    core::{math::Coord, traits::Real},
    geometry::{PolygonPart, Ring, RingOrientation},
    split::{Chord, SplitError},
};

fn resolve_ring<'a, T>(
    part: &'a PolygonPart<T>,
    ring_index: usize,
) -> Result<&'a Ring<T>, SplitError>
where
    T: Real,
{
    part.ring(ring_index).ok_or_else(|| {
        SplitError::GeometryInconsistency(format!(
            "ring index {} out of range for part with {} ring(s)",
            ring_index,
            part.ring_count()
        ))
    })
}

fn check_edge_index<T>(ring: &Ring<T>, edge_index: usize) -> Result<(), SplitError>
where
    T: Real,
{
    if ring.edge(edge_index).is_none() {
        return Err(SplitError::GeometryInconsistency(format!(
            "edge index {} out of range for ring with {} vertexes",
            edge_index,
            ring.vertex_count()
        )));
    }

    Ok(())
}

/// Split `ring` in two along `chord`, whose first point lies on edge `start_edge` and last point
/// lies on edge `end_edge`.
///
/// The first ring is the chord followed by the ring vertexes walked forward from the end of
/// `end_edge` up to the start of `start_edge`. The second ring is the chord reversed followed by
/// the complementary walk from the end of `start_edge` up to the start of `end_edge`. Both rings
/// keep the chord direction and orientation they get from the walk, callers orient them.
///
/// When both ends lie on the same edge the chord cuts off the area between itself and that edge.
///
/// # Examples
///
/// ```
/// # use polysplit::ring;
/// # use polysplit::geometry::*;
/// # use polysplit::split::internal::ring_split::split_ring_in_two;
/// let square = ring![(0.0f64, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0)];
/// let chord = [coord(5.0, 0.0), coord(5.0, 10.0)];
/// let (a, b) = split_ring_in_two(&chord, &square, 4, 2, 1e-10).unwrap();
/// assert_eq!(a.vertex_count(), 4);
/// assert_eq!(b.vertex_count(), 4);
/// assert_eq!(a.signed_area().abs(), 50.0);
/// assert_eq!(b.signed_area().abs(), 50.0);
/// ```
pub fn split_ring_in_two<T>(
    chord: &[Coord<T>],
    ring: &Ring<T>,
    start_edge: usize,
    end_edge: usize,
    pos_equal_eps: T,
) -> Result<(Ring<T>, Ring<T>), SplitError>
where
    T: Real,
{
    if chord.len() < 2 {
        return Err(SplitError::GeometryInconsistency(
            "chord must have at least 2 points".to_string(),
        ));
    }

    check_edge_index(ring, start_edge)?;
    check_edge_index(ring, end_edge)?;

    let n = ring.vertex_count();
    // vertex at the end of each edge
    let start_vertex = start_edge % n;
    let end_vertex = end_edge % n;

    let (len_a, len_b) = if start_edge != end_edge {
        (
            ring.fwd_wrapping_dist(end_vertex, start_vertex),
            ring.fwd_wrapping_dist(start_vertex, end_vertex),
        )
    } else {
        let edge_start = ring.vertex(start_edge - 1);
        let chord_start = chord[0];
        let chord_end = chord[chord.len() - 1];
        let start_param = (chord_start - edge_start).length_squared();
        let end_param = (chord_end - edge_start).length_squared();
        if start_param <= end_param {
            (n, 0)
        } else {
            (0, n)
        }
    };

    let ring_a = Ring::from_open_coords(
        chord.iter().copied().chain(ring.arc(end_vertex, len_a)),
        pos_equal_eps,
    );
    let ring_b = Ring::from_open_coords(
        chord.iter().rev().copied().chain(ring.arc(start_vertex, len_b)),
        pos_equal_eps,
    );

    Ok((ring_a, ring_b))
}

/// Join two different rings with a chord into one keyhole ring. The chord is walked out and back,
/// every vertex of both rings is visited once.
pub fn bridge_rings<T>(
    chord: &[Coord<T>],
    ring_s: &Ring<T>,
    start_edge: usize,
    ring_e: &Ring<T>,
    end_edge: usize,
    pos_equal_eps: T,
) -> Result<Ring<T>, SplitError>
where
    T: Real,
{
    if chord.len() < 2 {
        return Err(SplitError::GeometryInconsistency(
            "chord must have at least 2 points".to_string(),
        ));
    }

    check_edge_index(ring_s, start_edge)?;
    check_edge_index(ring_e, end_edge)?;

    let ns = ring_s.vertex_count();
    let ne = ring_e.vertex_count();
    let s = chord[0];
    let e = chord[chord.len() - 1];
    let inner = &chord[1..chord.len() - 1];

    let coords = std::iter::once(s)
        .chain(ring_s.arc(start_edge % ns, ns))
        .chain(std::iter::once(s))
        .chain(inner.iter().copied())
        .chain(std::iter::once(e))
        .chain(ring_e.arc(end_edge % ne, ne))
        .chain(std::iter::once(e))
        .chain(inner.iter().rev().copied());

    Ok(Ring::from_open_coords(coords, pos_equal_eps))
}

/// Returns true if `hole` lies inside `ring`, tested with a point of the hole off the ring's
/// boundary.
fn hole_inside<T>(ring: &Ring<T>, hole: &Ring<T>, pos_equal_eps: T) -> bool
where
    T: Real,
{
    match hole.point_off_boundary_of(ring, pos_equal_eps) {
        Some(p) => ring.winding_number(p) != 0,
        None => true,
    }
}

/// Split `part` along `chord`.
///
/// - Both ends on the shell: the shell is split in two and holes go to the side containing them.
/// - Both ends on the same hole: the hole is split, the smaller piece (the area cut off between
///   the chord and the hole) becomes a new island and the larger piece replaces the hole.
/// - Ends on different rings: the rings are bridged into one keyhole ring, giving a single part.
///
/// Returned parts have clockwise shells and counter clockwise holes.
pub fn split_part<T>(
    part: &PolygonPart<T>,
    chord: &Chord<T>,
    pos_equal_eps: T,
) -> Result<Vec<PolygonPart<T>>, SplitError>
where
    T: Real,
{
    let rs = chord.start.ring_index;
    let re = chord.end.ring_index;
    let ring_s = resolve_ring(part, rs)?;
    let ring_e = resolve_ring(part, re)?;

    if rs == re {
        let (a, b) = split_ring_in_two(
            &chord.points,
            ring_s,
            chord.start.edge_index,
            chord.end.edge_index,
            pos_equal_eps,
        )?;

        if rs == 0 {
            log::debug!(
                "splitting shell between edges {} and {}",
                chord.start.edge_index,
                chord.end.edge_index
            );
            let a = a.with_orientation(RingOrientation::Clockwise);
            let b = b.with_orientation(RingOrientation::Clockwise);
            let (holes_a, holes_b): (Vec<_>, Vec<_>) = part
                .holes
                .iter()
                .cloned()
                .partition(|h| hole_inside(&a, h, pos_equal_eps));
            return Ok(vec![
                PolygonPart::new(a, holes_a),
                PolygonPart::new(b, holes_b),
            ]);
        }

        log::debug!("cutting pocket off hole {}", rs - 1);
        let (pocket, enlarged) = if a.signed_area().abs() <= b.signed_area().abs() {
            (a, b)
        } else {
            (b, a)
        };
        let pocket = pocket.with_orientation(RingOrientation::Clockwise);
        let enlarged = enlarged.with_orientation(RingOrientation::CounterClockwise);

        let mut main_holes = Vec::with_capacity(part.holes.len());
        let mut pocket_holes = Vec::new();
        for (i, h) in part.holes.iter().enumerate() {
            if i == rs - 1 {
                main_holes.push(enlarged.clone());
            } else if hole_inside(&pocket, h, pos_equal_eps) {
                pocket_holes.push(h.clone());
            } else {
                main_holes.push(h.clone());
            }
        }

        return Ok(vec![
            PolygonPart::new(part.shell.clone(), main_holes),
            PolygonPart::new(pocket, pocket_holes),
        ]);
    }

    log::debug!("bridging ring {} to ring {}", rs, re);
    let merged = bridge_rings(
        &chord.points,
        ring_s,
        chord.start.edge_index,
        ring_e,
        chord.end.edge_index,
        pos_equal_eps,
    )?;

    let (keep, remove) = if rs < re { (rs, re) } else { (re, rs) };
    let mut holes = Vec::with_capacity(part.holes.len());
    let mut shell = part.shell.clone();
    if keep == 0 {
        shell = merged.with_orientation(RingOrientation::Clockwise);
        holes.extend(
            part.holes
                .iter()
                .enumerate()
                .filter(|&(i, _)| i + 1 != remove)
                .map(|(_, h)| h.clone()),
        );
    } else {
        let merged = merged.with_orientation(RingOrientation::CounterClockwise);
        for (i, h) in part.holes.iter().enumerate() {
            if i + 1 == keep {
                holes.push(merged.clone());
            } else if i + 1 != remove {
                holes.push(h.clone());
            }
        }
    }

    Ok(vec![PolygonPart::new(shell, holes)])
}

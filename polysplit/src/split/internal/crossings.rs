//! Finds where line segments cross polygon ring edges.
use crate::{
    core::{
        math::{
            dist_squared, orient_det, point_from_parametric, projects_within_seg, seg_seg_intr,
            Coord, SegSegIntr,
        },
        traits::Real,
    },
    geometry::{Line, PolygonPart, Ring},
    progress::ProgressSink,
    split::{IntersectionRecord, SplitError},
};

/// Find every crossing between the segment `p -> q` and the edges of `ring`, appending them to
/// `output` in edge order.
///
/// Every ring vertex is classified by the sign of its orientation determinant against the
/// segment, values within `eps` of zero are treated as touching the supporting line. A sign
/// change between the two vertexes of an edge means the edge crosses the supporting line and the
/// bounded segment/segment intersect is then computed and validated. A vertex touching the line
/// only counts as a crossing when the ring passes through to the other side (the next non zero
/// sign after it is opposite to the one before it) and the vertex lies within the segment.
/// Tangent touches and collinear runs that return to the same side are not crossings.
pub fn find_segment_crossings<T>(
    p: Coord<T>,
    q: Coord<T>,
    ring: &Ring<T>,
    ring_index: usize,
    segment_index: usize,
    eps: T,
    output: &mut Vec<IntersectionRecord<T>>,
) where
    T: Real,
{
    let n = ring.vertex_count();
    if n < 2 || dist_squared(p, q) <= eps * eps {
        return;
    }

    let signs: Vec<i8> = ring
        .arc(0, n)
        .map(|v| orient_det(p, q, v).fuzzy_sign_eps(eps))
        .collect();

    if signs.iter().all(|&s| s == 0) {
        // ring is collinear with the segment
        return;
    }

    for edge_index in 1..=n {
        let a = edge_index - 1;
        let b = edge_index % n;
        let (sa, sb) = (signs[a], signs[b]);
        let va = ring.vertex(a);
        let vb = ring.vertex(b);

        if sa * sb < 0 {
            if let SegSegIntr::TrueIntersect { seg2_t, .. } = seg_seg_intr(p, q, va, vb, eps) {
                let point = point_from_parametric(va, vb, seg2_t);
                log::trace!(
                    "segment {} crosses ring {} edge {} at {:?}",
                    segment_index,
                    ring_index,
                    edge_index,
                    point
                );
                output.push(IntersectionRecord {
                    point,
                    ring_index,
                    edge_index,
                    segment_index,
                });
            }
        } else if sb == 0 && sa != 0 {
            // arrived at a vertex touching the line, look past any collinear run
            let mut k = ring.next_wrapping_index(b);
            while signs[k] == 0 {
                k = ring.next_wrapping_index(k);
            }

            if signs[k] != sa && projects_within_seg(p, q, vb, eps) {
                log::trace!(
                    "segment {} passes through ring {} vertex {}",
                    segment_index,
                    ring_index,
                    b
                );
                output.push(IntersectionRecord {
                    point: vb,
                    ring_index,
                    edge_index,
                    segment_index,
                });
            }
        }
    }
}

/// Stable insertion sort of `records` by distance from `origin`, equal distances keep their
/// discovery order.
pub fn sort_by_distance<T>(records: &mut [IntersectionRecord<T>], origin: Coord<T>)
where
    T: Real,
{
    for i in 1..records.len() {
        let mut j = i;
        while j > 0
            && dist_squared(records[j - 1].point, origin) > dist_squared(records[j].point, origin)
        {
            records.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// Crossings between `line` and every ring of `part`, one list per line segment sorted by distance
/// from the segment start.
///
/// Cancellation is polled once per line segment.
pub fn find_line_crossings<T, S>(
    part: &PolygonPart<T>,
    line: &Line<T>,
    eps: T,
    sink: &S,
) -> Result<Vec<Vec<IntersectionRecord<T>>>, SplitError>
where
    T: Real,
    S: ProgressSink + ?Sized,
{
    let mut result = Vec::with_capacity(line.segment_count());
    for (segment_index, p, q) in line.iter_segments() {
        if sink.is_cancelled() {
            return Err(SplitError::Cancelled);
        }

        let mut records = Vec::new();
        for (ring_index, ring) in part.iter_rings() {
            find_segment_crossings(p, q, ring, ring_index, segment_index, eps, &mut records);
        }

        sort_by_distance(&mut records, p);
        result.push(records);
    }

    Ok(result)
}

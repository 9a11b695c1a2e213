//! Case handlers turning located line vertexes and crossings into chords.
//!
//! All handlers share one station walk ([extract_chords]): each line segment is cut at the
//! crossings in its interior and the pieces between consecutive stations are walked in order.
//! Maximal interior runs that start and end on the boundary become chords. How a segment's
//! pieces are walked depends on its [Transition], the handlers differ in the preconditions they
//! check and in how they report crossing count anomalies.
use super::classify::PartLineIntersects;
use crate::{
    core::{
        math::{midpoint, Coord},
        traits::Real,
    },
    geometry::{BoundaryHit, Line, PointLocation, PolygonPart},
    progress::ProgressSink,
    split::{Chord, SplitError, Transition},
};

/// Point along the line where interior/exterior status may change.
#[derive(Debug, Copy, Clone)]
struct Station<T> {
    point: Coord<T>,
    hit: Option<BoundaryHit>,
}

/// Boundary hit for every line vertex, from its location or from a crossing landing on it.
fn vertex_hits<T>(
    part: &PolygonPart<T>,
    line: &Line<T>,
    intrs: &PartLineIntersects<T>,
    eps: T,
) -> Vec<Option<BoundaryHit>>
where
    T: Real,
{
    let mut hits: Vec<Option<BoundaryHit>> = line
        .coords()
        .iter()
        .zip(intrs.locations.iter())
        .map(|(&c, &l)| {
            if l == PointLocation::OnBoundary {
                part.boundary_hit(c, eps)
            } else {
                None
            }
        })
        .collect();

    for (segment_index, p, q) in line.iter_segments() {
        for intr in intrs.crossings[segment_index].iter() {
            if intr.point.fuzzy_eq_eps(p, eps) {
                hits[segment_index].get_or_insert(intr.hit());
            } else if intr.point.fuzzy_eq_eps(q, eps) {
                hits[segment_index + 1].get_or_insert(intr.hit());
            }
        }
    }

    hits
}

/// Stations of one segment: its start, the crossings strictly between its ends, its end.
fn segment_stations<T>(
    intrs: &PartLineIntersects<T>,
    segment_index: usize,
    p: Station<T>,
    q: Station<T>,
    eps: T,
) -> Vec<Station<T>>
where
    T: Real,
{
    let crossings = &intrs.crossings[segment_index];
    let mut stations = Vec::with_capacity(crossings.len() + 2);
    stations.push(p);
    for intr in crossings.iter() {
        let last = stations[stations.len() - 1].point;
        if intr.point.fuzzy_eq_eps(p.point, eps)
            || intr.point.fuzzy_eq_eps(q.point, eps)
            || intr.point.fuzzy_eq_eps(last, eps)
        {
            continue;
        }

        stations.push(Station {
            point: intr.point,
            hit: Some(intr.hit()),
        });
    }

    stations.push(q);
    stations
}

/// State of the walk along the line: the interior run in progress and the chords closed so far.
struct ChordWalk<'a, T> {
    part: &'a PolygonPart<T>,
    eps: T,
    // start hit and points of the interior run being walked
    run: Option<(Option<BoundaryHit>, Vec<Coord<T>>)>,
    chords: Vec<Chord<T>>,
}

impl<'a, T> ChordWalk<'a, T>
where
    T: Real,
{
    fn new(part: &'a PolygonPart<T>, eps: T) -> Self {
        ChordWalk {
            part,
            eps,
            run: None,
            chords: Vec::new(),
        }
    }

    /// Extend the current run by the interior piece `a->b`, closing it if `b` is on the boundary.
    fn interior(&mut self, a: &Station<T>, b: &Station<T>) {
        if a.point.fuzzy_eq_eps(b.point, self.eps) {
            return;
        }

        self.run
            .get_or_insert_with(|| (a.hit, vec![a.point]))
            .1
            .push(b.point);

        let end = match b.hit {
            Some(hit) => hit,
            None => return,
        };

        match self.run.take() {
            Some((Some(start), points)) => {
                let chord = Chord { points, start, end };
                if chord.start_point().fuzzy_eq_eps(chord.end_point(), self.eps) {
                    log::debug!("skipping closed chord at {:?}", chord.start_point());
                } else {
                    self.chords.push(chord);
                }
            }
            Some((None, _)) => {
                log::debug!("skipping interior run dangling from a line end inside the polygon");
            }
            None => {}
        }
    }

    #[inline]
    fn exterior(&mut self) {
        self.run = None;
    }

    /// Classify the piece `a->b` by its midpoint.
    fn piece(&mut self, a: &Station<T>, b: &Station<T>) {
        if a.point.fuzzy_eq_eps(b.point, self.eps) {
            return;
        }

        if self.part.locate(midpoint(a.point, b.point), self.eps) == PointLocation::Inside {
            self.interior(a, b);
        } else {
            self.exterior();
        }
    }

    fn pieces(&mut self, stations: &[Station<T>]) {
        for w in stations.windows(2) {
            self.piece(&w[0], &w[1]);
        }
    }

    /// Both ends covered. Strictly interior ends with no crossing between them form one interior
    /// piece.
    fn walk_in_in(&mut self, stations: &[Station<T>]) {
        match stations {
            [p, q] if p.hit.is_none() && q.hit.is_none() => self.interior(p, q),
            _ => self.pieces(stations),
        }
    }

    /// Start covered, end outside. A strictly interior start with a single crossing runs inside
    /// up to the crossing and outside after it.
    fn walk_in_out(&mut self, stations: &[Station<T>]) {
        match stations {
            [p, x, _] if p.hit.is_none() => {
                self.interior(p, x);
                self.exterior();
            }
            _ => self.pieces(stations),
        }
    }

    /// Start outside, end covered. Mirror of [ChordWalk::walk_in_out].
    fn walk_out_in(&mut self, stations: &[Station<T>]) {
        match stations {
            [_, x, q] if q.hit.is_none() => {
                self.exterior();
                self.interior(x, q);
            }
            _ => self.pieces(stations),
        }
    }

    /// Both ends outside. Without crossings the segment stays outside.
    fn walk_out_out(&mut self, stations: &[Station<T>]) {
        match stations {
            [p, q] if p.hit.is_none() && q.hit.is_none() => self.exterior(),
            _ => self.pieces(stations),
        }
    }

    #[inline]
    fn finish(self) -> Vec<Chord<T>> {
        self.chords
    }
}

/// Walk the line segment by segment and collect every interior run that starts and ends on the
/// boundary.
pub fn extract_chords<T, S>(
    part: &PolygonPart<T>,
    line: &Line<T>,
    intrs: &PartLineIntersects<T>,
    eps: T,
    sink: &S,
) -> Result<Vec<Chord<T>>, SplitError>
where
    T: Real,
    S: ProgressSink + ?Sized,
{
    let hits = vertex_hits(part, line, intrs, eps);
    let mut walk = ChordWalk::new(part, eps);
    for (segment_index, p, q) in line.iter_segments() {
        if sink.is_cancelled() {
            return Err(SplitError::Cancelled);
        }

        let p = Station {
            point: p,
            hit: hits[segment_index],
        };
        let q = Station {
            point: q,
            hit: hits[segment_index + 1],
        };
        let stations = segment_stations(intrs, segment_index, p, q, eps);
        match intrs.transition(segment_index) {
            Transition::InIn => walk.walk_in_in(&stations),
            Transition::InOut => walk.walk_in_out(&stations),
            Transition::OutIn => walk.walk_out_in(&stations),
            Transition::OutOut => walk.walk_out_out(&stations),
        }
    }

    Ok(walk.finish())
}

/// Handler for lines with every vertex covered by the part.
///
/// Without crossings or vertexes on the boundary the line lies fully in the interior and cannot
/// split.
pub fn process_all_inside<T, S>(
    part: &PolygonPart<T>,
    line: &Line<T>,
    intrs: &PartLineIntersects<T>,
    eps: T,
    sink: &S,
) -> Result<Vec<Chord<T>>, SplitError>
where
    T: Real,
    S: ProgressSink + ?Sized,
{
    if intrs.total_crossings() == 0
        && !intrs.locations.iter().any(|&l| l == PointLocation::OnBoundary)
    {
        log::debug!("line lies in the interior without touching the boundary");
        return Ok(Vec::new());
    }

    extract_chords(part, line, intrs, eps, sink)
}

/// Handler for lines with no vertex covered by the part.
pub fn process_all_outside<T, S>(
    part: &PolygonPart<T>,
    line: &Line<T>,
    intrs: &PartLineIntersects<T>,
    eps: T,
    sink: &S,
) -> Result<Vec<Chord<T>>, SplitError>
where
    T: Real,
    S: ProgressSink + ?Sized,
{
    let total = intrs.total_crossings();
    if total == 0 {
        return Ok(Vec::new());
    }

    let chords = extract_chords(part, line, intrs, eps, sink)?;
    if chords.len() != total / 2 {
        // happens for lines passing through the boundary at vertexes shared by two chords
        log::debug!(
            "{} crossing(s) produced {} chord(s), expected {}",
            total,
            chords.len(),
            total / 2
        );
    }

    Ok(chords)
}

/// Handler for lines with vertexes both inside and outside the part.
pub fn process_part_in_and_out<T, S>(
    part: &PolygonPart<T>,
    line: &Line<T>,
    intrs: &PartLineIntersects<T>,
    eps: T,
    sink: &S,
) -> Result<Vec<Chord<T>>, SplitError>
where
    T: Real,
    S: ProgressSink + ?Sized,
{
    for (segment_index, c) in intrs.crossings.iter().enumerate() {
        let transition = intrs.transition(segment_index);
        if !intrs.segment_touches_boundary(segment_index)
            && (c.len() % 2 == 1) != transition.expects_odd_crossings()
        {
            log::warn!(
                "segment {} is {:?} but has {} crossing(s)",
                segment_index,
                transition,
                c.len()
            );
        }
    }

    extract_chords(part, line, intrs, eps, sink)
}

/// Restricted handler refusing any segment with more than one crossing in its interior.
///
/// Crossings at a segment's own end points are not counted, they belong to the line vertex.
pub fn process_fast<T, S>(
    part: &PolygonPart<T>,
    line: &Line<T>,
    intrs: &PartLineIntersects<T>,
    eps: T,
    sink: &S,
) -> Result<Vec<Chord<T>>, SplitError>
where
    T: Real,
    S: ProgressSink + ?Sized,
{
    for (segment_index, p, q) in line.iter_segments() {
        let crossings = intrs.crossings[segment_index]
            .iter()
            .filter(|intr| !intr.point.fuzzy_eq_eps(p, eps) && !intr.point.fuzzy_eq_eps(q, eps))
            .count();

        if crossings > 1 {
            return Err(SplitError::UnsupportedMultiplicity {
                segment: segment_index,
                crossings,
            });
        }

        let transition = intrs.transition(segment_index);
        if !intrs.segment_touches_boundary(segment_index)
            && (crossings == 1) != transition.expects_odd_crossings()
        {
            return Err(SplitError::GeometryInconsistency(format!(
                "segment {} is {:?} but has {} crossing(s)",
                segment_index, transition, crossings
            )));
        }
    }

    extract_chords(part, line, intrs, eps, sink)
}

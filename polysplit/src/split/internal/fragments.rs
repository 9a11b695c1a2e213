//! Accumulates the fragments produced by successive chords.
use super::{
    classify::PartLineIntersects, dedup::dedup_fragments, handlers::extract_chords,
    ring_split::split_part,
};
use crate::{
    core::{math::midpoint, traits::Real},
    geometry::{Line, PointLocation, Polygon, PolygonPart},
    progress::ProgressSink,
    split::{Chord, SplitError},
};

fn drop_slivers<T>(pieces: Vec<PolygonPart<T>>, pos_equal_eps: T) -> Vec<PolygonPart<T>>
where
    T: Real,
{
    pieces
        .into_iter()
        .filter(|p| {
            let keep = p.area() > pos_equal_eps;
            if !keep {
                log::debug!("discarding sliver with area {:?}", p.area());
            }
            keep
        })
        .collect()
}

/// Index of the piece whose interior holds every segment of `chord`.
fn piece_holding<T>(
    pieces: &[PolygonPart<T>],
    chord: &Chord<T>,
    pos_equal_eps: T,
) -> Option<usize>
where
    T: Real,
{
    pieces.iter().position(|p| {
        chord
            .points
            .windows(2)
            .all(|w| p.locate(midpoint(w[0], w[1]), pos_equal_eps) == PointLocation::Inside)
    })
}

/// Cut `part` by every chord `line` forms with it.
///
/// The chords are found once against `part`. The first one splits `part` using the edges it was
/// found on, each later one splits the piece that holds it with its ends re-attached to that
/// piece's nearest edges. A chord is never searched for again in the pieces it produced.
pub fn cut_part<T, S>(
    part: PolygonPart<T>,
    line: &Line<T>,
    pos_equal_eps: T,
    sink: &S,
) -> Result<Vec<PolygonPart<T>>, SplitError>
where
    T: Real,
    S: ProgressSink + ?Sized,
{
    let intrs = PartLineIntersects::find(&part, line, pos_equal_eps, sink)?;
    let mut chords = extract_chords(&part, line, &intrs, pos_equal_eps, sink)?.into_iter();
    let first = match chords.next() {
        Some(c) => c,
        None => return Ok(vec![part]),
    };

    let mut pieces = drop_slivers(split_part(&part, &first, pos_equal_eps)?, pos_equal_eps);
    for mut chord in chords {
        if sink.is_cancelled() {
            return Err(SplitError::Cancelled);
        }

        let i = match piece_holding(&pieces, &chord, pos_equal_eps) {
            Some(i) => i,
            None => {
                log::debug!(
                    "chord from {:?} to {:?} does not lie within a single piece, skipped",
                    chord.start_point(),
                    chord.end_point()
                );
                continue;
            }
        };

        let piece = &pieces[i];
        match (
            piece.nearest_boundary_hit(chord.start_point()),
            piece.nearest_boundary_hit(chord.end_point()),
        ) {
            (Some(start), Some(end)) => {
                chord.start = start;
                chord.end = end;
            }
            _ => {
                return Err(SplitError::GeometryInconsistency(
                    "piece holding a chord has no boundary".to_string(),
                ))
            }
        }

        let split = drop_slivers(split_part(piece, &chord, pos_equal_eps)?, pos_equal_eps);
        pieces.splice(i..=i, split);
    }

    Ok(pieces)
}

/// Builds the fragment set of one polygon part chord by chord.
///
/// The first chord splits the part directly using the edges it was found on. Later chords may
/// cross fragments already produced so each is cut against every current fragment with
/// [cut_part].
#[derive(Debug, Clone)]
pub struct FragmentSetBuilder<T> {
    fragments: Vec<PolygonPart<T>>,
    splits: usize,
    pos_equal_eps: T,
}

impl<T> FragmentSetBuilder<T>
where
    T: Real,
{
    pub fn new(source: PolygonPart<T>, pos_equal_eps: T) -> Self {
        FragmentSetBuilder {
            fragments: vec![source],
            splits: 0,
            pos_equal_eps,
        }
    }

    /// Current fragments.
    #[inline]
    pub fn fragments(&self) -> &[PolygonPart<T>] {
        &self.fragments
    }

    /// Number of chords applied.
    #[inline]
    pub fn splits(&self) -> usize {
        self.splits
    }

    /// Apply `chord` to the fragment set.
    pub fn apply<S>(&mut self, chord: &Chord<T>, sink: &S) -> Result<(), SplitError>
    where
        S: ProgressSink + ?Sized,
    {
        if sink.is_cancelled() {
            return Err(SplitError::Cancelled);
        }

        let eps = self.pos_equal_eps;
        let current = std::mem::take(&mut self.fragments);
        if self.splits == 0 {
            for part in current.iter() {
                self.fragments
                    .extend(drop_slivers(split_part(part, chord, eps)?, eps));
            }
        } else {
            let line = Line::new(chord.points.clone());
            for part in current {
                self.fragments.extend(cut_part(part, &line, eps, sink)?);
            }
        }

        self.splits += 1;
        log::trace!(
            "fragment set has {} fragment(s) after {} chord(s)",
            self.fragments.len(),
            self.splits
        );
        Ok(())
    }

    /// Finish the set, `None` if the part ended up with fewer than two fragments (not split).
    pub fn build(self) -> Option<Vec<Polygon<T>>> {
        if self.fragments.len() < 2 {
            return None;
        }

        let polygons = self
            .fragments
            .into_iter()
            .map(|p| Polygon::from(p.into_oriented()))
            .collect();
        Some(dedup_fragments(polygons, self.pos_equal_eps))
    }
}

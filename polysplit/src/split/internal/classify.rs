//! Locates line vertexes against a polygon part and routes to the matching case handler.
use super::{
    crossings::find_line_crossings,
    handlers::{process_all_inside, process_all_outside, process_fast, process_part_in_and_out},
};
use crate::{
    core::traits::Real,
    geometry::{Line, PointLocation, PolygonPart},
    progress::ProgressSink,
    split::{
        Chord, IntersectionRecord, LineClass, SplitError, SplitMode, SplitOptions, Transition,
    },
};

/// Everything known about how a line meets a polygon part before chords are extracted.
#[derive(Debug, Clone)]
pub struct PartLineIntersects<T> {
    /// Location of each line vertex.
    pub locations: Vec<PointLocation>,
    /// Crossings for each line segment, sorted by distance from the segment start.
    pub crossings: Vec<Vec<IntersectionRecord<T>>>,
}

impl<T> PartLineIntersects<T>
where
    T: Real,
{
    /// Locate the line vertexes and find all segment crossings.
    pub fn find<S>(
        part: &PolygonPart<T>,
        line: &Line<T>,
        eps: T,
        sink: &S,
    ) -> Result<Self, SplitError>
    where
        S: ProgressSink + ?Sized,
    {
        let locations = locate_line_vertexes(part, line, eps);
        let crossings = find_line_crossings(part, line, eps, sink)?;
        Ok(PartLineIntersects {
            locations,
            crossings,
        })
    }

    #[inline]
    pub fn total_crossings(&self) -> usize {
        self.crossings.iter().map(|c| c.len()).sum()
    }

    #[inline]
    pub fn line_class(&self) -> LineClass {
        LineClass::from_locations(&self.locations)
    }

    #[inline]
    pub fn transition(&self, segment_index: usize) -> Transition {
        Transition::new(
            self.locations[segment_index],
            self.locations[segment_index + 1],
        )
    }

    /// Returns true if either end of the segment lies on the part boundary.
    #[inline]
    pub fn segment_touches_boundary(&self, segment_index: usize) -> bool {
        self.locations[segment_index] == PointLocation::OnBoundary
            || self.locations[segment_index + 1] == PointLocation::OnBoundary
    }
}

/// Location of every line vertex relative to `part`.
pub fn locate_line_vertexes<T>(
    part: &PolygonPart<T>,
    line: &Line<T>,
    eps: T,
) -> Vec<PointLocation>
where
    T: Real,
{
    line.coords().iter().map(|&c| part.locate(c, eps)).collect()
}

/// Extract the chords along which `line` splits `part`, routing to the handler for the line's
/// classification (or the fast handler when requested).
pub fn find_part_chords<T, S>(
    part: &PolygonPart<T>,
    line: &Line<T>,
    options: &SplitOptions<T>,
    sink: &S,
) -> Result<Vec<Chord<T>>, SplitError>
where
    T: Real,
    S: ProgressSink + ?Sized,
{
    let eps = options.tolerance;
    let intrs = PartLineIntersects::find(part, line, eps, sink)?;

    if options.mode == SplitMode::Fast {
        return process_fast(part, line, &intrs, eps, sink);
    }

    let class = intrs.line_class();
    log::debug!(
        "line classified {:?} with {} crossing(s)",
        class,
        intrs.total_crossings()
    );

    match class {
        LineClass::AllInside => process_all_inside(part, line, &intrs, eps, sink),
        LineClass::AllOutside => process_all_outside(part, line, &intrs, eps, sink),
        LineClass::Mixed => process_part_in_and_out(part, line, &intrs, eps, sink),
    }
}

//! Splitting polygons by lines.
//!
//! The line is processed one 2 point segment at a time. Every run of the line that passes through
//! the interior of a polygon part with both ends on the part's boundary is a chord, and each chord
//! cuts the part (or the fragments already cut from it) in two. Runs that dangle from a line end
//! inside the polygon do not split.
mod error;
pub mod internal;
mod types;

pub use error::*;
pub use types::*;

use crate::{
    core::traits::Real,
    geometry::{Line, Polygon},
    progress::{NoProgress, ProgressSink, ProgressTracker},
};
use internal::{
    classify::find_part_chords, fragments::FragmentSetBuilder, ring_prep::prepare_polygon,
};

/// Controls how strictly crossing counts are checked.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum SplitMode {
    /// Any number of crossings per line segment is supported, count anomalies are logged.
    #[default]
    Accurate,
    /// Refuse line segments crossing the boundary more than once
    /// ([SplitError::UnsupportedMultiplicity]) or with a crossing count contradicting their end
    /// point locations ([SplitError::GeometryInconsistency]).
    Fast,
}

/// Options for [split_polygon_opt].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SplitOptions<T> {
    /// Absolute tolerance for position comparisons, orientation determinants and sliver removal.
    pub tolerance: T,
    pub mode: SplitMode,
}

impl<T> SplitOptions<T>
where
    T: Real,
{
    #[inline]
    pub fn new() -> Self {
        Self {
            tolerance: T::split_tolerance(),
            mode: SplitMode::Accurate,
        }
    }
}

impl<T> Default for SplitOptions<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// A polygon and the line to split it with, one item of a [split_features] batch.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitFeature<T = f64> {
    pub polygon: Polygon<T>,
    pub line: Line<T>,
}

impl<T> SplitFeature<T>
where
    T: Real,
{
    pub fn new(polygon: Polygon<T>, line: Line<T>) -> Self {
        SplitFeature { polygon, line }
    }
}

fn validate_input<T>(
    polygon: &Polygon<T>,
    line: &Line<T>,
    options: &SplitOptions<T>,
) -> Result<(), SplitError>
where
    T: Real,
{
    if polygon.is_empty() {
        return Err(SplitError::InvalidInput("polygon has no coordinates"));
    }

    if line.len() < 2 {
        return Err(SplitError::InvalidInput("line must have at least 2 points"));
    }

    if !polygon.is_finite() || !line.is_finite() {
        return Err(SplitError::InvalidInput("coordinates must be finite"));
    }

    if !options.tolerance.is_finite_value() || options.tolerance < T::zero() {
        return Err(SplitError::InvalidInput(
            "tolerance must be finite and not negative",
        ));
    }

    Ok(())
}

fn split_polygon_impl<T, S>(
    polygon: &Polygon<T>,
    line: &Line<T>,
    options: &SplitOptions<T>,
    sink: &mut S,
    report_progress: bool,
) -> Result<Vec<Polygon<T>>, SplitError>
where
    T: Real,
    S: ProgressSink + ?Sized,
{
    validate_input(polygon, line, options)?;
    let eps = options.tolerance;
    let parts = prepare_polygon(polygon, eps)?;
    let part_count = parts.len();
    let mut tracker = ProgressTracker::new(part_count);

    let mut outcomes = Vec::with_capacity(part_count);
    let mut any_split = false;
    for (i, part) in parts.into_iter().enumerate() {
        if sink.is_cancelled() {
            return Err(SplitError::Cancelled);
        }

        let chords = find_part_chords(&part, line, options, &*sink)?;
        log::debug!("part {} has {} chord(s)", i, chords.len());

        let fragments = if chords.is_empty() {
            None
        } else {
            let mut builder = FragmentSetBuilder::new(part.clone(), eps);
            for chord in chords.iter() {
                builder.apply(chord, &*sink)?;
            }
            builder.build()
        };

        any_split |= fragments.is_some();
        outcomes.push((part, fragments));

        if report_progress {
            let message = format!("split part {} of {}", i + 1, part_count);
            tracker.step(i + 1, &message, sink);
        }
    }

    if !any_split {
        return Ok(Vec::new());
    }

    let mut result = Vec::new();
    for (part, fragments) in outcomes {
        match fragments {
            Some(f) => result.extend(f),
            None => result.push(Polygon::from(part)),
        }
    }

    Ok(result)
}

/// Split `polygon` by `line` using default options.
///
/// Returns the fragments, or an empty set if the line does not split any part of the polygon.
///
/// # Examples
///
/// ```
/// # use polysplit::{ring, line_string};
/// # use polysplit::geometry::*;
/// # use polysplit::split::*;
/// let square = Polygon::new(vec![ring![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]]);
///
/// let through = line_string![(5.0, -5.0), (5.0, 15.0)];
/// let fragments = split_polygon(&square, &through).unwrap();
/// assert_eq!(fragments.len(), 2);
///
/// let interior = line_string![(2.0, 2.0), (8.0, 8.0)];
/// assert!(split_polygon(&square, &interior).unwrap().is_empty());
/// ```
pub fn split_polygon<T>(
    polygon: &Polygon<T>,
    line: &Line<T>,
) -> Result<Vec<Polygon<T>>, SplitError>
where
    T: Real,
{
    split_polygon_opt(polygon, line, &SplitOptions::new(), &mut NoProgress)
}

/// Split `polygon` by `line` with the options given, reporting progress per polygon part to
/// `sink` and polling it for cancellation.
///
/// Every part of a multi-part polygon is processed. If no part is split the result is empty,
/// otherwise parts that were split contribute their fragments and untouched parts are passed
/// through unchanged, in part order.
pub fn split_polygon_opt<T, S>(
    polygon: &Polygon<T>,
    line: &Line<T>,
    options: &SplitOptions<T>,
    sink: &mut S,
) -> Result<Vec<Polygon<T>>, SplitError>
where
    T: Real,
    S: ProgressSink + ?Sized,
{
    split_polygon_impl(polygon, line, options, sink, true)
}

/// Split every feature, returning one fragment set per feature in order.
///
/// Cancellation is checked before each feature and progress is reported after each feature as
/// `round(done * 100 / total)`, only when that value increases. The first error stops the batch.
pub fn split_features<T, S>(
    features: &[SplitFeature<T>],
    options: &SplitOptions<T>,
    sink: &mut S,
) -> Result<Vec<Vec<Polygon<T>>>, SplitError>
where
    T: Real,
    S: ProgressSink + ?Sized,
{
    let total = features.len();
    let mut tracker = ProgressTracker::new(total);
    let mut result = Vec::with_capacity(total);
    for (i, feature) in features.iter().enumerate() {
        if sink.is_cancelled() {
            log::debug!("cancelled before feature {} of {}", i + 1, total);
            return Err(SplitError::Cancelled);
        }

        result.push(split_polygon_impl(
            &feature.polygon,
            &feature.line,
            options,
            sink,
            false,
        )?);

        let message = format!("split feature {} of {}", i + 1, total);
        tracker.step(i + 1, &message, sink);
    }

    Ok(result)
}

impl<T> Polygon<T>
where
    T: Real,
{
    /// See [split_polygon].
    #[inline]
    pub fn split_by(&self, line: &Line<T>) -> Result<Vec<Polygon<T>>, SplitError> {
        split_polygon(self, line)
    }

    /// See [split_polygon_opt].
    #[inline]
    pub fn split_by_opt<S>(
        &self,
        line: &Line<T>,
        options: &SplitOptions<T>,
        sink: &mut S,
    ) -> Result<Vec<Polygon<T>>, SplitError>
    where
        S: ProgressSink + ?Sized,
    {
        split_polygon_opt(self, line, options, sink)
    }
}

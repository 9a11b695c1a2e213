/// Errors that can occur while splitting a polygon by a line.
///
/// [SplitError::Cancelled] is not a failure of the algorithm: it reports that the caller's
/// [ProgressSink](crate::progress::ProgressSink) asked to stop. Any partial output must be
/// discarded in that case.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SplitError {
    /// Polygon without coordinates, line with fewer than 2 points, or a non finite coordinate.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),

    /// A line segment crosses the polygon boundary more than once while splitting in
    /// [SplitMode::Fast](super::SplitMode::Fast).
    #[error("line segment {segment} crosses the polygon boundary {crossings} times, fast mode supports at most one")]
    UnsupportedMultiplicity { segment: usize, crossings: usize },

    /// Edge or ring indexes that do not resolve, or crossing counts that contradict the point
    /// locations.
    #[error("geometry inconsistency: {0}")]
    GeometryInconsistency(String),

    /// The progress sink requested cancellation.
    #[error("operation cancelled")]
    Cancelled,
}

impl SplitError {
    /// Returns true if this is the cancellation outcome rather than a failure.
    #[inline]
    pub fn is_cancelled(&self) -> bool {
        matches!(self, SplitError::Cancelled)
    }
}

impl From<static_aabb2d_index::StaticAABB2DIndexBuildError> for SplitError {
    fn from(err: static_aabb2d_index::StaticAABB2DIndexBuildError) -> Self {
        SplitError::GeometryInconsistency(format!("spatial index build failed: {}", err))
    }
}

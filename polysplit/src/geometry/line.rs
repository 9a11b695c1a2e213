use crate::core::{math::Coord, traits::Real};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Open sequence of coordinates used to cut polygons, processed as consecutive 2 point segments.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Line<T = f64> {
    coords: Vec<Coord<T>>,
}

impl<T> Line<T>
where
    T: Real,
{
    #[inline]
    pub fn new(coords: Vec<Coord<T>>) -> Self {
        Line { coords }
    }

    #[inline]
    pub fn coords(&self) -> &[Coord<T>] {
        &self.coords
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Number of 2 point segments (`len() - 1`, or 0 for lines with fewer than 2 points).
    #[inline]
    pub fn segment_count(&self) -> usize {
        self.coords.len().saturating_sub(1)
    }

    /// Start and end point of segment `index`.
    #[inline]
    pub fn segment(&self, index: usize) -> Option<(Coord<T>, Coord<T>)> {
        if index + 1 < self.coords.len() {
            Some((self.coords[index], self.coords[index + 1]))
        } else {
            None
        }
    }

    /// Iterate over all segments as `(segment_index, start, end)`.
    pub fn iter_segments(&self) -> impl Iterator<Item = (usize, Coord<T>, Coord<T>)> + '_ {
        self.coords
            .windows(2)
            .enumerate()
            .map(|(i, w)| (i, w[0], w[1]))
    }

    /// Returns true if every coordinate is finite.
    pub fn is_finite(&self) -> bool {
        self.coords.iter().all(|c| c.is_finite())
    }
}

impl<T> From<Vec<Coord<T>>> for Line<T>
where
    T: Real,
{
    fn from(coords: Vec<Coord<T>>) -> Self {
        Line::new(coords)
    }
}

use crate::{
    core::{math::Coord, traits::Real},
    geometry::{BoundaryHit, PointLocation},
};

/// A point where a line segment crosses a polygon ring edge.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct IntersectionRecord<T = f64> {
    /// Intersect position.
    pub point: Coord<T>,
    /// Ring within the polygon part (0 is the shell, `k >= 1` is hole `k - 1`).
    pub ring_index: usize,
    /// Edge index within the ring, the edge goes from vertex `edge_index - 1` to vertex
    /// `edge_index`.
    pub edge_index: usize,
    /// Index of the line segment that produced the crossing.
    pub segment_index: usize,
}

impl<T> IntersectionRecord<T>
where
    T: Real,
{
    #[inline]
    pub fn hit(&self) -> BoundaryHit {
        BoundaryHit {
            ring_index: self.ring_index,
            edge_index: self.edge_index,
        }
    }
}

/// Polyline that runs through the interior of a polygon part and whose end points lie on its
/// boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct Chord<T = f64> {
    /// Positions from the start boundary point to the end boundary point (at least 2).
    pub points: Vec<Coord<T>>,
    /// Ring and edge the first point lies on.
    pub start: BoundaryHit,
    /// Ring and edge the last point lies on.
    pub end: BoundaryHit,
}

impl<T> Chord<T>
where
    T: Real,
{
    #[inline]
    pub fn start_point(&self) -> Coord<T> {
        self.points[0]
    }

    #[inline]
    pub fn end_point(&self) -> Coord<T> {
        self.points[self.points.len() - 1]
    }
}

/// Classification of a whole line against a polygon part by the locations of its vertexes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum LineClass {
    /// Every line vertex is covered (inside or on the boundary).
    AllInside,
    /// No line vertex is covered.
    AllOutside,
    Mixed,
}

impl LineClass {
    /// Classify from the vertex locations.
    pub fn from_locations(locations: &[PointLocation]) -> Self {
        let covered = locations.iter().filter(|l| l.is_covered()).count();
        if covered == locations.len() {
            LineClass::AllInside
        } else if covered == 0 {
            LineClass::AllOutside
        } else {
            LineClass::Mixed
        }
    }
}

/// Transition of a single line segment between its start and end point locations.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Transition {
    InIn,
    InOut,
    OutIn,
    OutOut,
}

impl Transition {
    pub fn new(start: PointLocation, end: PointLocation) -> Self {
        match (start.is_covered(), end.is_covered()) {
            (true, true) => Transition::InIn,
            (true, false) => Transition::InOut,
            (false, true) => Transition::OutIn,
            (false, false) => Transition::OutOut,
        }
    }

    /// Returns true if an odd number of boundary crossings is expected for the transition.
    #[inline]
    pub fn expects_odd_crossings(self) -> bool {
        matches!(self, Transition::InOut | Transition::OutIn)
    }
}

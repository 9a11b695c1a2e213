use crate::core::{
    math::{dist_squared, is_left, midpoint, point_on_seg, seg_closest_point, Coord},
    traits::Real,
};
use static_aabb2d_index::AABB;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Orientation (direction of travel) of a closed ring.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum RingOrientation {
    /// Vertexes go clockwise (negative signed area). Islands are clockwise.
    Clockwise,
    /// Vertexes go counter clockwise (positive signed area). Holes are counter clockwise.
    CounterClockwise,
}

/// Location of a point relative to a ring or polygon.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PointLocation {
    Inside,
    Outside,
    /// Point is within tolerance of the boundary.
    OnBoundary,
}

impl PointLocation {
    /// Returns true if the location is covered by the area (inside or on the boundary).
    #[inline]
    pub fn is_covered(self) -> bool {
        !matches!(self, PointLocation::Outside)
    }
}

/// Closed sequence of coordinates, the first coordinate is repeated as the last.
///
/// Edge indexes run `1..=n` where `n` is [Ring::vertex_count]: edge `j` goes from vertex `j - 1`
/// to vertex `j`, with vertex `n` being vertex `0` again.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ring<T = f64> {
    coords: Vec<Coord<T>>,
}

impl<T> Ring<T>
where
    T: Real,
{
    /// Create a ring from coordinates, appending the first coordinate if the sequence is not
    /// already closed (exact comparison).
    pub fn new(mut coords: Vec<Coord<T>>) -> Self {
        if let (Some(&first), Some(&last)) = (coords.first(), coords.last()) {
            if first != last || coords.len() == 1 {
                coords.push(first);
            }
        }

        Ring { coords }
    }

    /// Create a ring from an open sequence of coordinates, dropping consecutive coordinates that
    /// fuzzy equal their predecessor (and trailing ones that equal the first) then closing it.
    pub fn from_open_coords<I>(coords: I, pos_equal_eps: T) -> Self
    where
        I: IntoIterator<Item = Coord<T>>,
    {
        let mut result: Vec<Coord<T>> = Vec::new();
        for c in coords {
            match result.last() {
                Some(last) if last.fuzzy_eq_eps(c, pos_equal_eps) => {}
                _ => result.push(c),
            }
        }

        while result.len() > 1 && result[result.len() - 1].fuzzy_eq_eps(result[0], pos_equal_eps)
        {
            result.pop();
        }

        Ring::new(result)
    }

    /// All coordinates including the closing repeat of the first.
    #[inline]
    pub fn coords(&self) -> &[Coord<T>] {
        &self.coords
    }

    /// Number of unique vertexes (closing coordinate not counted).
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.coords.len().saturating_sub(1)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Vertex at `index`, wrapping indexes at or past [Ring::vertex_count].
    ///
    /// # Panics
    ///
    /// Panics if the ring has no vertexes.
    #[inline]
    pub fn vertex(&self, index: usize) -> Coord<T> {
        self.coords[index % self.vertex_count()]
    }

    /// Start and end point of edge `edge_index` (`1..=n`), or `None` if out of range.
    #[inline]
    pub fn edge(&self, edge_index: usize) -> Option<(Coord<T>, Coord<T>)> {
        if edge_index == 0 || edge_index > self.vertex_count() {
            return None;
        }

        Some((self.coords[edge_index - 1], self.coords[edge_index]))
    }

    /// Iterate over the edges as `(edge_index, start, end)`.
    pub fn iter_edges(&self) -> impl Iterator<Item = (usize, Coord<T>, Coord<T>)> + '_ {
        self.coords
            .windows(2)
            .enumerate()
            .map(|(i, w)| (i + 1, w[0], w[1]))
    }

    /// Forward distance from `start_index` to `end_index` walking with wraparound.
    ///
    /// # Examples
    ///
    /// ```
    /// # use polysplit::ring;
    /// # use polysplit::geometry::*;
    /// let r = ring![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];
    /// assert_eq!(r.fwd_wrapping_dist(1, 3), 2);
    /// assert_eq!(r.fwd_wrapping_dist(3, 1), 2);
    /// assert_eq!(r.fwd_wrapping_dist(3, 0), 1);
    /// assert_eq!(r.fwd_wrapping_dist(2, 2), 0);
    /// ```
    #[inline]
    pub fn fwd_wrapping_dist(&self, start_index: usize, end_index: usize) -> usize {
        let n = self.vertex_count();
        debug_assert!(start_index < n && end_index < n, "index out of bounds");
        if start_index <= end_index {
            end_index - start_index
        } else {
            n - start_index + end_index
        }
    }

    /// Next vertex index with wraparound.
    #[inline]
    pub fn next_wrapping_index(&self, index: usize) -> usize {
        let next = index + 1;
        if next >= self.vertex_count() {
            0
        } else {
            next
        }
    }

    /// Iterate `len` vertexes walking forward from `start_index`, wrapping past the last vertex
    /// back to vertex 0.
    ///
    /// # Examples
    ///
    /// ```
    /// # use polysplit::ring;
    /// # use polysplit::geometry::*;
    /// let r = ring![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];
    /// let walked: Vec<_> = r.arc(3, 3).collect();
    /// assert_eq!(walked, vec![coord(0.0, 1.0), coord(0.0, 0.0), coord(1.0, 0.0)]);
    /// ```
    #[inline]
    pub fn arc(&self, start_index: usize, len: usize) -> RingArc<'_, T> {
        let n = self.vertex_count();
        RingArc {
            vertexes: &self.coords[..n],
            index: if n == 0 { 0 } else { start_index % n },
            remaining: if n == 0 { 0 } else { len },
        }
    }

    /// Signed area using the shoelace formula, positive if counter clockwise.
    ///
    /// Coordinates are taken relative to the first vertex so large offsets (e.g. projected map
    /// coordinates) do not swamp the result.
    pub fn signed_area(&self) -> T {
        if self.vertex_count() < 3 {
            return T::zero();
        }

        let origin = self.coords[0];
        let mut double_area = T::zero();
        for w in self.coords.windows(2) {
            double_area = double_area + (w[0] - origin).perp_dot(w[1] - origin);
        }

        double_area / T::two()
    }

    #[inline]
    pub fn orientation(&self) -> RingOrientation {
        if self.signed_area() < T::zero() {
            RingOrientation::Clockwise
        } else {
            RingOrientation::CounterClockwise
        }
    }

    /// Return the ring with its direction reversed, the start vertex is kept.
    pub fn reversed(&self) -> Self {
        let mut coords = self.coords.clone();
        coords.reverse();
        Ring { coords }
    }

    /// Return the ring with the orientation given, reversing it if required.
    pub fn with_orientation(self, orientation: RingOrientation) -> Self {
        if self.orientation() == orientation {
            self
        } else {
            self.reversed()
        }
    }

    /// Axis aligned bounding box of the ring, `None` if the ring is empty.
    pub fn extents(&self) -> Option<AABB<T>> {
        let first = self.coords.first()?;
        let mut result = AABB::new(first.x, first.y, first.x, first.y);
        for c in self.coords.iter().skip(1) {
            if c.x < result.min_x {
                result.min_x = c.x;
            } else if c.x > result.max_x {
                result.max_x = c.x;
            }

            if c.y < result.min_y {
                result.min_y = c.y;
            } else if c.y > result.max_y {
                result.max_y = c.y;
            }
        }

        Some(result)
    }

    /// Winding number of the ring around `point`, positive for counter clockwise windings.
    ///
    /// Points on the boundary give an unspecified result, use [Ring::locate] to detect them.
    ///
    /// # Examples
    ///
    /// ```
    /// # use polysplit::ring;
    /// # use polysplit::geometry::*;
    /// let r = ring![(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)];
    /// assert_eq!(r.winding_number(coord(1.0, 1.0)), 1);
    /// assert_eq!(r.winding_number(coord(3.0, 1.0)), 0);
    /// assert_eq!(r.reversed().winding_number(coord(1.0, 1.0)), -1);
    /// ```
    pub fn winding_number(&self, point: Coord<T>) -> i32 {
        let mut winding = 0;
        for (_, v1, v2) in self.iter_edges() {
            if v1.y <= point.y {
                if v2.y > point.y && is_left(v1, v2, point) {
                    // left and upward crossing
                    winding += 1;
                }
            } else if v2.y <= point.y && !is_left(v1, v2, point) {
                // right and downward crossing
                winding -= 1;
            }
        }

        winding
    }

    /// First edge (lowest edge index) within `eps` distance of `point`.
    pub fn edge_at(&self, point: Coord<T>, eps: T) -> Option<usize> {
        self.iter_edges()
            .find(|&(_, v1, v2)| point_on_seg(v1, v2, point, eps))
            .map(|(i, _, _)| i)
    }

    /// Edge closest to `point` with its squared distance, ties go to the lowest edge index.
    pub fn nearest_edge(&self, point: Coord<T>) -> Option<(usize, T)> {
        let mut result: Option<(usize, T)> = None;
        for (i, v1, v2) in self.iter_edges() {
            let d = dist_squared(seg_closest_point(v1, v2, point), point);
            match result {
                Some((_, best)) if best <= d => {}
                _ => result = Some((i, d)),
            }
        }

        result
    }

    /// Locate `point` relative to the area enclosed by the ring, regardless of orientation.
    pub fn locate(&self, point: Coord<T>, eps: T) -> PointLocation {
        if self.edge_at(point, eps).is_some() {
            PointLocation::OnBoundary
        } else if self.winding_number(point) != 0 {
            PointLocation::Inside
        } else {
            PointLocation::Outside
        }
    }

    /// Find a point of this ring that is strictly off the boundary of `other`, trying vertexes
    /// first then edge midpoints.
    pub fn point_off_boundary_of(&self, other: &Ring<T>, eps: T) -> Option<Coord<T>> {
        let n = self.vertex_count();
        let candidates = self.coords[..n]
            .iter()
            .copied()
            .chain(self.iter_edges().map(|(_, v1, v2)| midpoint(v1, v2)));

        for c in candidates {
            if other.edge_at(c, eps).is_none() {
                return Some(c);
            }
        }

        None
    }

    /// Returns true if `point` fuzzy equals one of the ring's vertexes.
    pub fn has_vertex_at(&self, point: Coord<T>, eps: T) -> bool {
        let eps2 = eps * eps;
        self.coords[..self.vertex_count()]
            .iter()
            .any(|&v| dist_squared(v, point) <= eps2)
    }
}

/// Iterator over ring vertexes walking forward with wraparound, see [Ring::arc].
#[derive(Debug, Clone)]
pub struct RingArc<'a, T> {
    vertexes: &'a [Coord<T>],
    index: usize,
    remaining: usize,
}

impl<'a, T> Iterator for RingArc<'a, T>
where
    T: Real,
{
    type Item = Coord<T>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let result = self.vertexes[self.index];
        self.remaining -= 1;
        self.index += 1;
        if self.index == self.vertexes.len() {
            self.index = 0;
        }

        Some(result)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for RingArc<'a, T> where T: Real {}

use super::{PointLocation, Ring, RingOrientation};
use crate::core::{math::Coord, traits::Real};
use static_aabb2d_index::AABB;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Ring and edge a point was found on.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct BoundaryHit {
    /// Ring within a [PolygonPart], 0 is the shell and `k >= 1` is hole `k - 1`.
    pub ring_index: usize,
    /// Edge index within the ring (`1..=n`).
    pub edge_index: usize,
}

/// General polygon made of one or more closed rings, possibly with several islands each with
/// holes.
///
/// Input polygons may have any ring order and orientation. Polygons produced by splitting always
/// hold one island (clockwise) followed by its holes (counter clockwise).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polygon<T = f64> {
    rings: Vec<Ring<T>>,
}

impl<T> Polygon<T>
where
    T: Real,
{
    #[inline]
    pub fn new(rings: Vec<Ring<T>>) -> Self {
        Polygon { rings }
    }

    #[inline]
    pub fn rings(&self) -> &[Ring<T>] {
        &self.rings
    }

    #[inline]
    pub fn into_rings(self) -> Vec<Ring<T>> {
        self.rings
    }

    /// Returns true if the polygon has no rings or only empty rings.
    pub fn is_empty(&self) -> bool {
        self.rings.iter().all(|r| r.is_empty())
    }

    /// Net area for polygons following the island clockwise / hole counter clockwise convention
    /// (positive for such polygons).
    ///
    /// # Examples
    ///
    /// ```
    /// # use polysplit::ring;
    /// # use polysplit::geometry::*;
    /// let island = ring![(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0)];
    /// let hole = ring![(4.0, 4.0), (6.0, 4.0), (6.0, 6.0), (4.0, 6.0)];
    /// let polygon = Polygon::new(vec![island, hole]);
    /// assert_eq!(polygon.area(), 96.0);
    /// ```
    pub fn area(&self) -> T {
        self.rings
            .iter()
            .fold(T::zero(), |acc, r| acc - r.signed_area())
    }

    /// Bounding box of all rings, `None` if the polygon is empty.
    pub fn extents(&self) -> Option<AABB<T>> {
        let mut iter = self.rings.iter().filter_map(|r| r.extents());
        let mut result = iter.next()?;
        for e in iter {
            if e.min_x < result.min_x {
                result.min_x = e.min_x;
            }
            if e.min_y < result.min_y {
                result.min_y = e.min_y;
            }
            if e.max_x > result.max_x {
                result.max_x = e.max_x;
            }
            if e.max_y > result.max_y {
                result.max_y = e.max_y;
            }
        }

        Some(result)
    }

    /// Returns true if every coordinate is finite.
    pub fn is_finite(&self) -> bool {
        self.rings
            .iter()
            .all(|r| r.coords().iter().all(|c| c.is_finite()))
    }
}

impl<T> From<PolygonPart<T>> for Polygon<T>
where
    T: Real,
{
    fn from(part: PolygonPart<T>) -> Self {
        let mut rings = Vec::with_capacity(part.holes.len() + 1);
        rings.push(part.shell);
        rings.extend(part.holes);
        Polygon { rings }
    }
}

/// One island of a polygon with the holes it directly contains.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolygonPart<T = f64> {
    pub shell: Ring<T>,
    pub holes: Vec<Ring<T>>,
}

impl<T> PolygonPart<T>
where
    T: Real,
{
    pub fn new(shell: Ring<T>, holes: Vec<Ring<T>>) -> Self {
        PolygonPart { shell, holes }
    }

    /// Ring count (shell and holes).
    #[inline]
    pub fn ring_count(&self) -> usize {
        self.holes.len() + 1
    }

    /// Ring by index, 0 is the shell and `k >= 1` is `holes[k - 1]`.
    #[inline]
    pub fn ring(&self, ring_index: usize) -> Option<&Ring<T>> {
        if ring_index == 0 {
            Some(&self.shell)
        } else {
            self.holes.get(ring_index - 1)
        }
    }

    /// Iterate over `(ring_index, ring)` for the shell followed by the holes.
    pub fn iter_rings(&self) -> impl Iterator<Item = (usize, &Ring<T>)> + '_ {
        std::iter::once(&self.shell).chain(self.holes.iter()).enumerate()
    }

    /// First ring and edge within `eps` of `point`.
    pub fn boundary_hit(&self, point: Coord<T>, eps: T) -> Option<BoundaryHit> {
        self.iter_rings().find_map(|(ring_index, r)| {
            r.edge_at(point, eps).map(|edge_index| BoundaryHit {
                ring_index,
                edge_index,
            })
        })
    }

    /// Ring and edge nearest to `point`, `None` only if every ring is empty.
    ///
    /// Used to re-attach a chord end to the boundary of a piece produced by an earlier cut, where
    /// the end may sit slightly off the new edges.
    pub fn nearest_boundary_hit(&self, point: Coord<T>) -> Option<BoundaryHit> {
        let mut result: Option<(BoundaryHit, T)> = None;
        for (ring_index, r) in self.iter_rings() {
            if let Some((edge_index, d)) = r.nearest_edge(point) {
                match result {
                    Some((_, best)) if best <= d => {}
                    _ => {
                        result = Some((
                            BoundaryHit {
                                ring_index,
                                edge_index,
                            },
                            d,
                        ))
                    }
                }
            }
        }

        result.map(|(hit, _)| hit)
    }

    /// Locate `point` relative to the area of the part (inside the shell and outside all holes).
    pub fn locate(&self, point: Coord<T>, eps: T) -> PointLocation {
        if self.boundary_hit(point, eps).is_some() {
            return PointLocation::OnBoundary;
        }

        if self.shell.winding_number(point) == 0
            || self.holes.iter().any(|h| h.winding_number(point) != 0)
        {
            PointLocation::Outside
        } else {
            PointLocation::Inside
        }
    }

    /// Net area (shell area minus hole areas), independent of ring orientation.
    pub fn area(&self) -> T {
        self.holes
            .iter()
            .fold(self.shell.signed_area().abs(), |acc, h| {
                acc - h.signed_area().abs()
            })
    }

    /// Orient the shell clockwise and the holes counter clockwise.
    pub fn into_oriented(self) -> Self {
        PolygonPart {
            shell: self.shell.with_orientation(RingOrientation::Clockwise),
            holes: self
                .holes
                .into_iter()
                .map(|h| h.with_orientation(RingOrientation::CounterClockwise))
                .collect(),
        }
    }
}

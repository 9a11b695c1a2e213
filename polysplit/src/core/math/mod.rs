//! Core 2D math: coordinates, orientation tests, distances and segment intersection.
mod base_math;
mod coord;
mod seg_intersect;

pub use base_math::*;
pub use coord::{coord, Coord};
pub use seg_intersect::{seg_seg_intr, SegSegIntr};

//! Geometry types consumed and produced by the split algorithm.
mod line;
mod polygon;
mod ring;

pub use line::*;
pub use polygon::*;
pub use ring::*;

pub use crate::core::math::{coord, Coord};

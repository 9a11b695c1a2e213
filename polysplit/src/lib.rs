//! Polygon splitting by lines.
//!
//! A [Polygon](geometry::Polygon) (possibly multi-part, with holes) is partitioned into the
//! fragments obtained by cutting it along every part of a [Line](geometry::Line) that crosses its
//! boundary. See [split::split_polygon] for the entry point.
//!
//! # Examples
//!
//! ```
//! # use polysplit::{ring, line_string};
//! # use polysplit::geometry::*;
//! # use polysplit::split::*;
//! let square = Polygon::new(vec![ring![(0.0f64, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]]);
//! let cut = line_string![(5.0, -5.0), (5.0, 15.0)];
//! let fragments = square.split_by(&cut).unwrap();
//! assert_eq!(fragments.len(), 2);
//! for f in fragments.iter() {
//!     assert!((f.area().abs() - 50.0).abs() < 1e-9);
//! }
//! ```
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

pub mod core;
pub mod geometry;
pub mod progress;
pub mod split;

pub use static_aabb2d_index::AABB;

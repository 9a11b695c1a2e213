//! Core module has the numeric trait and the low level math shared by the geometry types and the
//! split algorithm.
pub mod math;
pub mod traits;

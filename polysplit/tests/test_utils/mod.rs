#![allow(dead_code)]
mod fragment_properties;
mod polygon_modifiers;
mod shapes;

pub use fragment_properties::*;
pub use polygon_modifiers::*;
pub use shapes::*;

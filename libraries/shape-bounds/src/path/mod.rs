//! Shape-agnostic outline description consumed by hit testing and by rendering backends.

mod geometry;
mod segment;

pub use geometry::{Figure, FillRule, PathGeometry};
pub use segment::PathSegment;

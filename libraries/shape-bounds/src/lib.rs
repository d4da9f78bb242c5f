//! Shape-bounds: spatial geometry and hit-testing for vector diagram shapes.
//!
//! The crate answers three questions for any shape the editor knows about: which point handle is under the pointer,
//! does the shape contain the pointer, and does the shape overlap a selection rectangle. Every query is a pure function
//! of borrowed shape data; nothing is cached or mutated between calls.
//!
//! ```
//! use shape_bounds::{BoundsRegistry, LineShape, Point, PointShape, Rect, Shape};
//!
//! let line = LineShape::new(PointShape::new(0., 0.), PointShape::new(10., 10.));
//! let registry = BoundsRegistry::global();
//!
//! assert!(registry.contains(Shape::Line(&line), Point::new(5., 5.2), 1., 1.));
//! assert!(registry.overlaps(Shape::Line(&line), Point::new(5., 5.).expand_to_rect(3.), 1., 1.));
//! assert!(!registry.overlaps(Shape::Line(&line), Rect::new(-8., 2., 6., 6.), 1., 1.));
//! ```

pub mod bounds;
pub mod consts;
mod error;
pub mod math;
mod options;
pub mod path;
pub mod polygon;
pub mod query;
pub mod sampling;
mod shape;

pub use bounds::{Bounds, BoundsRegistry};
pub use error::GeometryError;
pub use math::{Point, Rect, Segment, Size};
pub use options::SamplingOptions;
pub use path::{Figure, FillRule, PathGeometry, PathSegment};
pub use shape::*;

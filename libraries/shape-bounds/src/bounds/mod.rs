//! Bounds testers for every [`ShapeKind`] and the registry that dispatches to them.
//!
//! Callers never pick a tester themselves; they hand a [`Shape`] to a [`BoundsRegistry`], which indexes its table by the
//! shape's kind. The registry is passed back into every tester so composite shapes can ask it about their point handles.

mod arc;
mod bezier;
mod ellipse;
mod line;
mod path;
mod point;
mod rectangle;

pub use arc::{ArcBounds, arc_bounding_circle};
pub use bezier::{CubicBezierBounds, QuadraticBezierBounds};
pub use ellipse::EllipseBounds;
pub use line::LineBounds;
pub use path::PathBounds;
pub use point::PointBounds;
pub use rectangle::{ImageBounds, RectangleBounds, TextBounds};

use crate::SamplingOptions;
use crate::math::{Point, Rect};
use crate::shape::{PointHandle, PointShape, Shape, ShapeKind};
use std::fmt::{Debug, Formatter};
use strum::EnumCount;

/// The uniform hit-testing contract implemented once per shape kind.
///
/// `radius` is the pick tolerance in the shape's local coordinates. `scale` compensates for zoom and only affects shapes
/// flagged with [`crate::ShapeState::SIZE`]. Handing a tester a shape of another kind is a programmer error: it panics in
/// debug builds and yields `None`/`false` in release builds.
pub trait Bounds: Sync {
	/// The shape kind this tester handles.
	fn kind(&self) -> ShapeKind;

	/// Find the point handle of `shape` under `target`.
	fn try_to_get_point(&self, shape: Shape<'_>, target: Point, radius: f64, scale: f64, registry: &BoundsRegistry) -> Option<PointHandle>;

	/// Does `shape` contain `target`.
	fn contains(&self, shape: Shape<'_>, target: Point, radius: f64, scale: f64, registry: &BoundsRegistry) -> bool;

	/// Does `shape` overlap `target`.
	fn overlaps(&self, shape: Shape<'_>, target: Rect, radius: f64, scale: f64, registry: &BoundsRegistry) -> bool;
}

/// Type-keyed table of bounds testers, indexed by [`ShapeKind`] discriminant.
///
/// Built once at startup and only read afterwards.
#[derive(Clone, Copy)]
pub struct BoundsRegistry {
	testers: [&'static dyn Bounds; ShapeKind::COUNT],
	options: SamplingOptions,
}

static GLOBAL_REGISTRY: BoundsRegistry = BoundsRegistry::new();

impl BoundsRegistry {
	/// The table with the built-in tester for every shape kind and default sampling options.
	pub const fn new() -> Self {
		Self {
			testers: [
				&PointBounds,
				&LineBounds,
				&RectangleBounds,
				&EllipseBounds,
				&ArcBounds,
				&CubicBezierBounds,
				&QuadraticBezierBounds,
				&PathBounds,
				&ImageBounds,
				&TextBounds,
			],
			options: SamplingOptions::new(),
		}
	}

	/// The shared default registry.
	pub fn global() -> &'static BoundsRegistry {
		&GLOBAL_REGISTRY
	}

	#[must_use]
	pub fn with_options(mut self, options: SamplingOptions) -> Self {
		self.options = options.clamped();
		self
	}

	/// Replace the tester for the kind it reports.
	#[must_use]
	pub fn with_tester(mut self, tester: &'static dyn Bounds) -> Self {
		self.testers[tester.kind().index()] = tester;
		self
	}

	pub fn options(&self) -> &SamplingOptions {
		&self.options
	}

	#[inline]
	pub fn tester(&self, kind: ShapeKind) -> &'static dyn Bounds {
		self.testers[kind.index()]
	}

	pub fn try_to_get_point(&self, shape: Shape<'_>, target: Point, radius: f64, scale: f64) -> Option<PointHandle> {
		self.tester(shape.kind()).try_to_get_point(shape, target, radius, scale, self)
	}

	pub fn contains(&self, shape: Shape<'_>, target: Point, radius: f64, scale: f64) -> bool {
		self.tester(shape.kind()).contains(shape, target, radius, scale, self)
	}

	pub fn overlaps(&self, shape: Shape<'_>, target: Rect, radius: f64, scale: f64) -> bool {
		self.tester(shape.kind()).overlaps(shape, target, radius, scale, self)
	}
}

impl Default for BoundsRegistry {
	fn default() -> Self {
		Self::new()
	}
}

impl Debug for BoundsRegistry {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("BoundsRegistry")
			.field("kinds", &self.testers.iter().map(|tester| tester.kind()).collect::<Vec<_>>())
			.field("options", &self.options)
			.finish()
	}
}

/// Report a tester invoked with a shape of the wrong kind.
#[cold]
fn kind_mismatch<T: Default>(expected: ShapeKind, shape: Shape<'_>) -> T {
	let found = shape.kind();
	log::error!("The {expected} bounds tester was handed a {found} shape");
	if cfg!(debug_assertions) {
		panic!("The {expected} bounds tester was handed a {found} shape");
	}
	T::default()
}

/// Ask the registry about each point shape in turn, returning the first hit labelled with its position in `handles`.
fn first_point_handle<'a>(handles: impl IntoIterator<Item = &'a PointShape>, target: Point, radius: f64, scale: f64, registry: &BoundsRegistry) -> Option<PointHandle> {
	handles
		.into_iter()
		.enumerate()
		.find_map(|(index, point)| registry.try_to_get_point(Shape::Point(point), target, radius, scale).map(|handle| handle.with_index(index)))
}

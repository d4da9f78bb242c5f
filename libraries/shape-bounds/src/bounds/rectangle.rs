//! Box-shaped kinds: their pick area is the normalized rectangle between their two corner handles.

use super::{Bounds, BoundsRegistry, first_point_handle, kind_mismatch};
use crate::math::{Point, Rect};
use crate::shape::{BoxCorners, PointHandle, Shape, ShapeKind, ShapeState};

/// The box between the corners, scaled about its center for constant-size shapes.
pub(super) fn pick_box(corners: &BoxCorners, state: ShapeState, scale: f64) -> Rect {
	corners.rect().scale_about_center(state.effective_scale(scale))
}

pub(super) fn box_handle(corners: &BoxCorners, target: Point, radius: f64, scale: f64, registry: &BoundsRegistry) -> Option<PointHandle> {
	first_point_handle(corners.handles(), target, radius, scale, registry)
}

pub(super) fn box_contains(corners: &BoxCorners, state: ShapeState, target: Point, scale: f64) -> bool {
	pick_box(corners, state, scale).contains(target)
}

pub(super) fn box_overlaps(corners: &BoxCorners, state: ShapeState, target: &Rect, scale: f64) -> bool {
	pick_box(corners, state, scale).intersects_with(target)
}

/// Implements [`Bounds`] for a kind whose shape carries `corners` and `state` fields.
macro_rules! box_bounds {
	($(#[$attr:meta])* $name:ident, $variant:ident) => {
		$(#[$attr])*
		#[derive(Debug, Clone, Copy, Default)]
		pub struct $name;

		impl Bounds for $name {
			fn kind(&self) -> ShapeKind {
				ShapeKind::$variant
			}

			fn try_to_get_point(&self, shape: Shape<'_>, target: Point, radius: f64, scale: f64, registry: &BoundsRegistry) -> Option<PointHandle> {
				let Shape::$variant(data) = shape else { return kind_mismatch(self.kind(), shape) };
				box_handle(&data.corners, target, radius, scale, registry)
			}

			fn contains(&self, shape: Shape<'_>, target: Point, _radius: f64, scale: f64, _registry: &BoundsRegistry) -> bool {
				let Shape::$variant(data) = shape else { return kind_mismatch(self.kind(), shape) };
				box_contains(&data.corners, data.state, target, scale)
			}

			fn overlaps(&self, shape: Shape<'_>, target: Rect, _radius: f64, scale: f64, _registry: &BoundsRegistry) -> bool {
				let Shape::$variant(data) = shape else { return kind_mismatch(self.kind(), shape) };
				box_overlaps(&data.corners, data.state, &target, scale)
			}
		}
	};
}

pub(super) use box_bounds;

box_bounds!(RectangleBounds, Rectangle);
box_bounds!(
	/// Images are picked through their placement box regardless of pixel transparency.
	ImageBounds,
	Image
);
box_bounds!(
	/// Text is picked through its layout box, not its glyph outlines.
	TextBounds,
	Text
);

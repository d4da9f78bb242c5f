use super::{Bounds, BoundsRegistry, first_point_handle, kind_mismatch};
use crate::consts::DEGENERATE_LENGTH_SQUARED;
use crate::math::{Point, Rect};
use crate::shape::{ArcShape, PointHandle, Shape, ShapeKind};

/// An arc is picked through the square around the circle it lies on, and all four control points are its handles.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArcBounds;

/// The circle whose diameter is the chord from `point1` to `point2`, as `(center, radius)`.
pub fn arc_bounding_circle(arc: &ArcShape) -> (Point, f64) {
	let center = arc.point1.position.midpoint(arc.point2.position);
	(center, arc.point1.position.distance_to(center))
}

/// The square around the bounding circle, or `None` when the chord has collapsed to a point.
fn pick_square(arc: &ArcShape, scale: f64) -> Option<Rect> {
	let (center, radius) = arc_bounding_circle(arc);
	if radius < DEGENERATE_LENGTH_SQUARED.sqrt() {
		return None;
	}
	Some(center.expand_to_rect(radius * arc.state.effective_scale(scale)))
}

impl Bounds for ArcBounds {
	fn kind(&self) -> ShapeKind {
		ShapeKind::Arc
	}

	fn try_to_get_point(&self, shape: Shape<'_>, target: Point, radius: f64, scale: f64, registry: &BoundsRegistry) -> Option<PointHandle> {
		let Shape::Arc(arc) = shape else { return kind_mismatch(self.kind(), shape) };

		first_point_handle(arc.handles(), target, radius, scale, registry)
	}

	fn contains(&self, shape: Shape<'_>, target: Point, _radius: f64, scale: f64, _registry: &BoundsRegistry) -> bool {
		let Shape::Arc(arc) = shape else { return kind_mismatch(self.kind(), shape) };

		pick_square(arc, scale).is_some_and(|square| square.contains(target))
	}

	fn overlaps(&self, shape: Shape<'_>, target: Rect, _radius: f64, scale: f64, _registry: &BoundsRegistry) -> bool {
		let Shape::Arc(arc) = shape else { return kind_mismatch(self.kind(), shape) };

		pick_square(arc, scale).is_some_and(|square| square.intersects_with(&target))
	}
}

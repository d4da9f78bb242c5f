use super::{Bounds, BoundsRegistry, kind_mismatch};
use crate::math::{Point, Rect};
use crate::shape::{PointHandle, PointShape, Shape, ShapeKind};

/// A point is picked through the square of side `2 * radius` centered on it.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointBounds;

fn pick_square(point: &PointShape, radius: f64, scale: f64) -> Rect {
	point.position.expand_to_rect(radius * point.state.effective_scale(scale))
}

impl Bounds for PointBounds {
	fn kind(&self) -> ShapeKind {
		ShapeKind::Point
	}

	fn try_to_get_point(&self, shape: Shape<'_>, target: Point, radius: f64, scale: f64, _registry: &BoundsRegistry) -> Option<PointHandle> {
		let Shape::Point(point) = shape else { return kind_mismatch(self.kind(), shape) };

		pick_square(point, radius, scale).contains(target).then(|| point.handle())
	}

	fn contains(&self, shape: Shape<'_>, target: Point, radius: f64, scale: f64, _registry: &BoundsRegistry) -> bool {
		let Shape::Point(point) = shape else { return kind_mismatch(self.kind(), shape) };

		pick_square(point, radius, scale).contains(target)
	}

	fn overlaps(&self, shape: Shape<'_>, target: Rect, radius: f64, scale: f64, _registry: &BoundsRegistry) -> bool {
		let Shape::Point(point) = shape else { return kind_mismatch(self.kind(), shape) };

		pick_square(point, radius, scale).intersects_with(&target)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::shape::ShapeState;

	#[test]
	fn pick_square_edges_are_inclusive() {
		let registry = BoundsRegistry::global();
		let point = PointShape::new(25., 25.).with_id(7);
		let shape = Shape::Point(&point);

		assert!(PointBounds.contains(shape, Point::new(28., 22.), 3., 1., registry));
		assert!(!PointBounds.contains(shape, Point::new(28.1, 25.), 3., 1., registry));

		let handle = PointBounds.try_to_get_point(shape, Point::new(26., 24.), 3., 1., registry);
		assert_eq!(
			handle,
			Some(PointHandle {
				id: Some(point.id),
				index: 0,
				position: Point::new(25., 25.),
			})
		);
	}

	#[test]
	fn scale_only_applies_to_constant_size_points() {
		let registry = BoundsRegistry::global();
		let plain = PointShape::new(0., 0.);
		let sized = PointShape::new(0., 0.).with_state(ShapeState::SIZE);
		let target = Point::new(5., 0.);

		assert!(!PointBounds.contains(Shape::Point(&plain), target, 3., 2., registry));
		assert!(PointBounds.contains(Shape::Point(&sized), target, 3., 2., registry));
		assert!(!PointBounds.contains(Shape::Point(&sized), target, 3., 1., registry));
	}

	#[test]
	fn overlaps_touching_rect() {
		let registry = BoundsRegistry::global();
		let point = PointShape::new(10., 10.);

		assert!(PointBounds.overlaps(Shape::Point(&point), Rect::new(12., 12., 5., 5.), 2., 1., registry));
		assert!(!PointBounds.overlaps(Shape::Point(&point), Rect::new(12.5, 12., 5., 5.), 2., 1., registry));
	}
}

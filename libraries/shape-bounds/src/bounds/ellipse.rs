use super::rectangle::{box_bounds, box_contains, box_handle, box_overlaps};
use super::{Bounds, BoundsRegistry, kind_mismatch};
use crate::math::{Point, Rect};
use crate::shape::{PointHandle, Shape, ShapeKind};

box_bounds!(
	/// An ellipse is picked through its bounding box, the same area its selection outline covers.
	EllipseBounds,
	Ellipse
);

#[cfg(test)]
mod tests {
	use super::*;
	use crate::shape::{EllipseShape, PointShape};

	#[test]
	fn corners_of_the_box_are_inside() {
		let registry = BoundsRegistry::global();
		let ellipse = EllipseShape::new(PointShape::new(0., 0.), PointShape::new(20., 10.));
		let shape = Shape::Ellipse(&ellipse);

		// Outside the true ellipse, but inside its box
		assert!(EllipseBounds.contains(shape, Point::new(1., 1.), 1., 1., registry));
		assert!(!EllipseBounds.contains(shape, Point::new(21., 1.), 1., 1., registry));
		assert!(EllipseBounds.overlaps(shape, Rect::new(-5., -5., 5.5, 5.5), 1., 1., registry));
		assert_eq!(EllipseBounds.try_to_get_point(shape, Point::new(20., 10.), 1., 1., registry).map(|handle| handle.index), Some(1));
	}
}

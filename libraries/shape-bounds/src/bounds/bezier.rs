use super::{Bounds, BoundsRegistry, first_point_handle, kind_mismatch};
use crate::SamplingOptions;
use crate::math::{Point, Rect};
use crate::polygon;
use crate::sampling::{PointBuffer, sample_cubic, sample_quadratic};
use crate::shape::{CubicBezierShape, PointHandle, QuadraticBezierShape, Shape, ShapeKind};

/// A cubic curve is picked through the polygon enclosed by its flattened outline.
#[derive(Debug, Clone, Copy, Default)]
pub struct CubicBezierBounds;

/// A quadratic curve is picked through the polygon enclosed by its flattened outline.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuadraticBezierBounds;

fn cubic_outline(curve: &CubicBezierShape, options: &SamplingOptions) -> PointBuffer {
	let mut points = PointBuffer::new();
	points.push(curve.point1.position);
	sample_cubic(curve.point1.position, curve.point2.position, curve.point3.position, curve.point4.position, options.curve_segments, &mut points);
	points
}

fn quadratic_outline(curve: &QuadraticBezierShape, options: &SamplingOptions) -> PointBuffer {
	let mut points = PointBuffer::new();
	points.push(curve.point1.position);
	sample_quadratic(curve.point1.position, curve.point2.position, curve.point3.position, options.curve_segments, &mut points);
	points
}

impl Bounds for CubicBezierBounds {
	fn kind(&self) -> ShapeKind {
		ShapeKind::CubicBezier
	}

	fn try_to_get_point(&self, shape: Shape<'_>, target: Point, radius: f64, scale: f64, registry: &BoundsRegistry) -> Option<PointHandle> {
		let Shape::CubicBezier(curve) = shape else { return kind_mismatch(self.kind(), shape) };

		first_point_handle(curve.handles(), target, radius, scale, registry)
	}

	fn contains(&self, shape: Shape<'_>, target: Point, _radius: f64, scale: f64, registry: &BoundsRegistry) -> bool {
		let Shape::CubicBezier(curve) = shape else { return kind_mismatch(self.kind(), shape) };

		polygon::contains(&mut cubic_outline(curve, registry.options()), target, curve.state.effective_scale(scale))
	}

	fn overlaps(&self, shape: Shape<'_>, target: Rect, _radius: f64, scale: f64, registry: &BoundsRegistry) -> bool {
		let Shape::CubicBezier(curve) = shape else { return kind_mismatch(self.kind(), shape) };

		polygon::overlap(&mut cubic_outline(curve, registry.options()), &target, curve.state.effective_scale(scale))
	}
}

impl Bounds for QuadraticBezierBounds {
	fn kind(&self) -> ShapeKind {
		ShapeKind::QuadraticBezier
	}

	fn try_to_get_point(&self, shape: Shape<'_>, target: Point, radius: f64, scale: f64, registry: &BoundsRegistry) -> Option<PointHandle> {
		let Shape::QuadraticBezier(curve) = shape else { return kind_mismatch(self.kind(), shape) };

		first_point_handle(curve.handles(), target, radius, scale, registry)
	}

	fn contains(&self, shape: Shape<'_>, target: Point, _radius: f64, scale: f64, registry: &BoundsRegistry) -> bool {
		let Shape::QuadraticBezier(curve) = shape else { return kind_mismatch(self.kind(), shape) };

		polygon::contains(&mut quadratic_outline(curve, registry.options()), target, curve.state.effective_scale(scale))
	}

	fn overlaps(&self, shape: Shape<'_>, target: Rect, _radius: f64, scale: f64, registry: &BoundsRegistry) -> bool {
		let Shape::QuadraticBezier(curve) = shape else { return kind_mismatch(self.kind(), shape) };

		polygon::overlap(&mut quadratic_outline(curve, registry.options()), &target, curve.state.effective_scale(scale))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::shape::PointShape;

	/// An arch from (0, 0) to (30, 0) bulging up to y = -15.
	fn arch() -> CubicBezierShape {
		CubicBezierShape::new(PointShape::new(0., 0.), PointShape::new(0., -20.), PointShape::new(30., -20.), PointShape::new(30., 0.))
	}

	#[test]
	fn cubic_contains_the_area_under_the_arch() {
		let registry = BoundsRegistry::global();
		let curve = arch();
		let shape = Shape::CubicBezier(&curve);

		assert!(CubicBezierBounds.contains(shape, Point::new(15., -10.), 1., 1., registry));
		assert!(!CubicBezierBounds.contains(shape, Point::new(15., -16.), 1., 1., registry));
		assert!(!CubicBezierBounds.contains(shape, Point::new(15., 1.), 1., 1., registry));
	}

	#[test]
	fn cubic_overlaps() {
		let registry = BoundsRegistry::global();
		let curve = arch();
		let shape = Shape::CubicBezier(&curve);

		// Crossing the top of the arch
		assert!(CubicBezierBounds.overlaps(shape, Rect::new(10., -18., 10., 5.), 1., 1., registry));
		// Enclosed by the arch
		assert!(CubicBezierBounds.overlaps(shape, Rect::new(12., -8., 6., 4.), 1., 1., registry));
		// Enclosing the arch
		assert!(CubicBezierBounds.overlaps(shape, Rect::new(-10., -30., 50., 40.), 1., 1., registry));
		assert!(!CubicBezierBounds.overlaps(shape, Rect::new(40., -10., 5., 5.), 1., 1., registry));
	}

	#[test]
	fn control_points_are_handles() {
		let registry = BoundsRegistry::global();
		let curve = arch();
		let shape = Shape::CubicBezier(&curve);

		let handle = CubicBezierBounds.try_to_get_point(shape, Point::new(29., -19.), 2., 1., registry).unwrap();
		assert_eq!((handle.index, handle.position), (2, Point::new(30., -20.)));
		assert!(CubicBezierBounds.try_to_get_point(shape, Point::new(15., -10.), 2., 1., registry).is_none());
	}

	#[test]
	fn quadratic_contains_and_overlaps() {
		let registry = BoundsRegistry::global();
		// Peaks at (10, -10)
		let curve = QuadraticBezierShape::new(PointShape::new(0., 0.), PointShape::new(10., -20.), PointShape::new(20., 0.));
		let shape = Shape::QuadraticBezier(&curve);

		assert!(QuadraticBezierBounds.contains(shape, Point::new(10., -5.), 1., 1., registry));
		assert!(!QuadraticBezierBounds.contains(shape, Point::new(10., -12.), 1., 1., registry));
		assert!(QuadraticBezierBounds.overlaps(shape, Rect::new(8., -12., 4., 4.), 1., 1., registry));
		assert!(!QuadraticBezierBounds.overlaps(shape, Rect::new(8., -16., 4., 4.), 1., 1., registry));
		assert_eq!(QuadraticBezierBounds.try_to_get_point(shape, Point::new(10., -20.), 1., 1., registry).map(|handle| handle.index), Some(1));
	}

	#[test]
	fn coarse_sampling_is_configurable() {
		let curve = QuadraticBezierShape::new(PointShape::new(0., 0.), PointShape::new(10., -20.), PointShape::new(20., 0.));
		let registry = BoundsRegistry::new().with_options(SamplingOptions {
			curve_segments: 1,
			..SamplingOptions::default()
		});
		// A single segment collapses the curve onto its chord
		assert!(!QuadraticBezierBounds.contains(Shape::QuadraticBezier(&curve), Point::new(10., -5.), 1., 1., &registry));
	}
}

use super::{Bounds, BoundsRegistry, kind_mismatch};
use crate::math::{Point, Rect};
use crate::polygon;
use crate::sampling::flatten_geometry;
use crate::shape::{PointHandle, PointShape, Shape, ShapeKind};

/// A path is picked through the polygon of all its flattened figures combined. Every point any segment references is a
/// handle; those handles carry no [`crate::PointId`] because they are not point shapes of their own.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathBounds;

impl Bounds for PathBounds {
	fn kind(&self) -> ShapeKind {
		ShapeKind::Path
	}

	fn try_to_get_point(&self, shape: Shape<'_>, target: Point, radius: f64, scale: f64, registry: &BoundsRegistry) -> Option<PointHandle> {
		let Shape::Path(path) = shape else { return kind_mismatch(self.kind(), shape) };

		path.geometry.points().enumerate().find_map(|(index, position)| {
			let point = PointShape {
				position,
				state: path.state,
				..Default::default()
			};
			registry.try_to_get_point(Shape::Point(&point), target, radius, scale).map(|handle| PointHandle { id: None, index, ..handle })
		})
	}

	fn contains(&self, shape: Shape<'_>, target: Point, _radius: f64, scale: f64, registry: &BoundsRegistry) -> bool {
		let Shape::Path(path) = shape else { return kind_mismatch(self.kind(), shape) };

		polygon::contains(&mut flatten_geometry(&path.geometry, registry.options()), target, path.state.effective_scale(scale))
	}

	fn overlaps(&self, shape: Shape<'_>, target: Rect, _radius: f64, scale: f64, registry: &BoundsRegistry) -> bool {
		let Shape::Path(path) = shape else { return kind_mismatch(self.kind(), shape) };

		polygon::overlap(&mut flatten_geometry(&path.geometry, registry.options()), &target, path.state.effective_scale(scale))
	}
}

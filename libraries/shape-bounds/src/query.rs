//! Hit tests over a whole shape collection, as the pointer and selection tools run them.
//!
//! Collections are ordered back to front, the way they are drawn. Pointer queries therefore walk them in reverse so
//! the topmost shape wins, while rubber-band selection reports matches in collection order.

use crate::bounds::BoundsRegistry;
use crate::math::{Point, Rect};
use crate::shape::{PointHandle, PointShape, Shape, ShapeState};

/// The topmost point handle under `target`, searching every shape front to back.
pub fn try_to_get_point(shapes: &[Shape<'_>], target: Point, radius: f64, scale: f64, registry: &BoundsRegistry) -> Option<PointHandle> {
	let (index, handle) = shapes.iter().enumerate().rev().find_map(|(index, shape)| Some((index, registry.try_to_get_point(*shape, target, radius, scale)?)))?;
	log::trace!("Point handle {} of shape {index} found at {:?}", handle.index, handle.position);
	Some(handle)
}

/// The topmost handle under `target` that a connection can attach to.
///
/// If any point shape in the collection is flagged [`ShapeState::CONNECTOR`], only flagged points qualify. Otherwise every
/// standalone [`Shape::Point`] is a connection point.
pub fn try_to_get_connection_point(shapes: &[Shape<'_>], target: Point, radius: f64, scale: f64, registry: &BoundsRegistry) -> Option<PointHandle> {
	let any_flagged = shapes.iter().any(|shape| shape.point_shapes().iter().any(|point| point.state.contains(ShapeState::CONNECTOR)));

	let connectable = |shape: &Shape<'_>, point: &PointShape| if any_flagged { point.state.contains(ShapeState::CONNECTOR) } else { matches!(shape, Shape::Point(_)) };

	shapes.iter().rev().find_map(|shape| {
		shape.point_shapes().into_iter().enumerate().filter(|(_, point)| connectable(shape, point)).find_map(|(index, point)| {
			let handle = registry.try_to_get_point(Shape::Point(point), target, radius, scale)?;
			log::trace!("Connection point {:?} found at {:?}", point.id, handle.position);
			Some(handle.with_index(index))
		})
	})
}

/// Index of the topmost shape whose handles or body contain `target`.
pub fn try_to_get_shape(shapes: &[Shape<'_>], target: Point, radius: f64, scale: f64, registry: &BoundsRegistry) -> Option<usize> {
	let index = shapes
		.iter()
		.rposition(|shape| registry.try_to_get_point(*shape, target, radius, scale).is_some() || registry.contains(*shape, target, radius, scale))?;
	log::trace!("Shape {index} ({}) is under {target:?}", shapes[index].kind());
	Some(index)
}

/// Indices of every shape overlapping the selection rectangle, in collection order.
pub fn try_to_get_shapes(shapes: &[Shape<'_>], rect: Rect, radius: f64, scale: f64, registry: &BoundsRegistry) -> Vec<usize> {
	let selected = shapes
		.iter()
		.enumerate()
		.filter(|(_, shape)| registry.overlaps(**shape, rect, radius, scale))
		.map(|(index, _)| index)
		.collect::<Vec<_>>();
	log::trace!("{} of {} shapes overlap {rect:?}", selected.len(), shapes.len());
	selected
}

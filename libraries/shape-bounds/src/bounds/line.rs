use super::{Bounds, BoundsRegistry, first_point_handle, kind_mismatch};
use crate::math::{Point, Rect, Segment};
use crate::shape::{LineShape, PointHandle, Shape, ShapeKind};

/// A line is picked within `radius` of its bounded segment, and its two end points are its handles.
///
/// A zero-length line has no body to pick; only its handles can still be grabbed.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineBounds;

/// The line's segment, scaled about its midpoint for constant-size lines.
fn pick_segment(line: &LineShape, scale: f64) -> Segment {
	let (start, end) = (line.start.position, line.end.position);
	let scale = line.state.effective_scale(scale);
	if scale == 1. {
		return Segment::new(start, end);
	}

	let center = start.midpoint(end);
	Segment::new(start.scale_at(center, scale), end.scale_at(center, scale))
}

impl Bounds for LineBounds {
	fn kind(&self) -> ShapeKind {
		ShapeKind::Line
	}

	fn try_to_get_point(&self, shape: Shape<'_>, target: Point, radius: f64, scale: f64, registry: &BoundsRegistry) -> Option<PointHandle> {
		let Shape::Line(line) = shape else { return kind_mismatch(self.kind(), shape) };

		first_point_handle([&line.start, &line.end], target, radius, scale, registry)
	}

	fn contains(&self, shape: Shape<'_>, target: Point, radius: f64, scale: f64, _registry: &BoundsRegistry) -> bool {
		let Shape::Line(line) = shape else { return kind_mismatch(self.kind(), shape) };

		let segment = pick_segment(line, scale);
		!segment.is_degenerate() && segment.distance_to(target) < radius
	}

	fn overlaps(&self, shape: Shape<'_>, target: Rect, _radius: f64, scale: f64, _registry: &BoundsRegistry) -> bool {
		let Shape::Line(line) = shape else { return kind_mismatch(self.kind(), shape) };

		let segment = pick_segment(line, scale);
		!segment.is_degenerate() && segment.intersects_rect(&target)
	}
}

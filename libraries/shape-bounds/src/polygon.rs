//! Generic polygon hit tests over sampled point sequences.
//!
//! A point sequence is treated as a closed polygon; the edge from the last point back to the first is implied.

use crate::math::{Point, Rect, Segment};

/// Scale every point about the center of the sequence's bounding box. A `scale` of `1` leaves the points untouched.
pub fn scale_about_center(points: &mut [Point], scale: f64) {
	if scale == 1. {
		return;
	}
	let Some(bounds) = Rect::from_point_iter(points.iter().copied()) else { return };

	let center = bounds.center();
	for point in points {
		*point = point.scale_at(center, scale);
	}
}

/// Closed-polygon edges, including the closing edge.
pub fn edges(points: &[Point]) -> impl Iterator<Item = Segment> + '_ {
	let closing = match points {
		[first, .., last] => Some(Segment::new(*last, *first)),
		_ => None,
	};
	points.windows(2).map(|pair| Segment::new(pair[0], pair[1])).chain(closing)
}

/// Even-odd point in polygon test.
pub fn contains_point(points: &[Point], target: Point) -> bool {
	if points.len() < 3 {
		return false;
	}

	let mut inside = false;
	for edge in edges(points) {
		let (a, b) = (edge.a, edge.b);
		if (a.y > target.y) != (b.y > target.y) {
			let crossing_x = a.x + (target.y - a.y) / (b.y - a.y) * (b.x - a.x);
			if target.x < crossing_x {
				inside = !inside;
			}
		}
	}
	inside
}

/// Whether the polygon and the rectangle share any area or boundary.
///
/// This is the case if any of the following conditions are true:
/// - an edge of the polygon crosses the rectangle
/// - the rectangle is entirely contained within the polygon
/// - the polygon is entirely contained within the rectangle (covered by the first condition, since its edges lie inside)
pub fn overlaps_rect(points: &[Point], rect: &Rect) -> bool {
	match points {
		[] => false,
		[point] => rect.contains(*point),
		_ => edges(points).any(|edge| edge.intersects_rect(rect)) || contains_point(points, rect.center()),
	}
}

/// Point in polygon after scaling the polygon about its center, reusing the caller's buffer.
pub fn contains(points: &mut [Point], target: Point, scale: f64) -> bool {
	scale_about_center(points, scale);
	contains_point(points, target)
}

/// Polygon and rectangle overlap after scaling the polygon about its center, reusing the caller's buffer.
pub fn overlap(points: &mut [Point], rect: &Rect, scale: f64) -> bool {
	scale_about_center(points, scale);
	overlaps_rect(points, rect)
}

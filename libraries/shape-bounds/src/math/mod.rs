mod point;
mod rect;
mod segment;
mod size;

pub use point::Point;
pub use rect::Rect;
pub use segment::Segment;
pub use size::Size;

use crate::consts::MAX_ABSOLUTE_DIFFERENCE;

/// Compare two `f64` numbers with a provided max absolute value difference.
pub fn f64_compare(a: f64, b: f64, max_abs_diff: f64) -> bool {
	(a - b).abs() < max_abs_diff
}

/// Compare two points component-wise with a provided max absolute value difference.
pub fn point_compare(a: Point, b: Point, max_abs_diff: f64) -> bool {
	f64_compare(a.x, b.x, max_abs_diff) && f64_compare(a.y, b.y, max_abs_diff)
}

/// Compare two points using the crate-wide [`MAX_ABSOLUTE_DIFFERENCE`].
pub fn points_approximately_equal(a: Point, b: Point) -> bool {
	point_compare(a, b, MAX_ABSOLUTE_DIFFERENCE)
}

use super::Rect;
use glam::{DMat2, DVec2};

/// A point in the shape's local coordinate space, with Y increasing downward.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

impl Point {
	pub const ZERO: Self = Self::new(0., 0.);

	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	pub fn is_finite(&self) -> bool {
		self.x.is_finite() && self.y.is_finite()
	}

	pub fn midpoint(self, other: Point) -> Point {
		((DVec2::from(self) + DVec2::from(other)) * 0.5).into()
	}

	pub fn distance_to(self, other: Point) -> f64 {
		DVec2::from(self).distance(other.into())
	}

	/// Angle in degrees of the vector from `self` to `other`, in the range `[0, 360)`.
	///
	/// Angles grow clockwise on screen since the Y axis points down. The angle between a point and itself is `0`.
	pub fn angle_between(self, other: Point) -> f64 {
		let delta = DVec2::from(other) - DVec2::from(self);
		if delta == DVec2::ZERO {
			return 0.;
		}

		let degrees = delta.y.atan2(delta.x).to_degrees();
		let degrees = if degrees < 0. { degrees + 360. } else { degrees };
		// `-0.0 + 360.` and tiny negative angles can round up to exactly 360
		if degrees >= 360. { 0. } else { degrees }
	}

	/// Rotate this point around `center` by `degrees`, clockwise on screen.
	#[must_use]
	pub fn rotate_at(self, center: Point, degrees: f64) -> Point {
		let center = DVec2::from(center);
		let rotated = DMat2::from_angle(degrees.to_radians()) * (DVec2::from(self) - center) + center;
		rotated.into()
	}

	/// Scale this point away from (or towards) `center` by `factor`.
	#[must_use]
	pub fn scale_at(self, center: Point, factor: f64) -> Point {
		let center = DVec2::from(center);
		((DVec2::from(self) - center) * factor + center).into()
	}

	/// Orthogonal projection onto the infinite line through `a` and `b`.
	///
	/// Returns `a` when the line is degenerate (`a == b`).
	pub fn project_on_line(self, a: Point, b: Point) -> Point {
		let (a, b) = (DVec2::from(a), DVec2::from(b));
		let direction = b - a;
		let length_squared = direction.length_squared();
		if length_squared == 0. {
			return a.into();
		}

		let t = (DVec2::from(self) - a).dot(direction) / length_squared;
		(a + direction * t).into()
	}

	/// The nearest point on the infinite line through `a` and `b`.
	///
	/// This is not clamped to the segment between `a` and `b`; use [`super::Segment::nearest_point`] for that.
	pub fn nearest_on_line(self, a: Point, b: Point) -> Point {
		self.project_on_line(a, b)
	}

	/// Exact test of whether this point equals its projection onto the line through `a` and `b`.
	///
	/// Only reliable for axis-aligned lines (grid snapping); floating point round-off makes it fail on generic lines.
	pub fn is_on_line(self, a: Point, b: Point) -> bool {
		self == self.project_on_line(a, b)
	}

	/// The square pick area of side `2 * radius` centered on this point.
	pub fn expand_to_rect(self, radius: f64) -> Rect {
		Rect::new(self.x - radius, self.y - radius, 2. * radius, 2. * radius)
	}
}

impl From<DVec2> for Point {
	fn from(value: DVec2) -> Self {
		Self::new(value.x, value.y)
	}
}

impl From<Point> for DVec2 {
	fn from(value: Point) -> Self {
		DVec2::new(value.x, value.y)
	}
}

impl From<(f64, f64)> for Point {
	fn from((x, y): (f64, f64)) -> Self {
		Self::new(x, y)
	}
}

#[cfg(feature = "kurbo")]
impl From<Point> for kurbo::Point {
	fn from(value: Point) -> Self {
		kurbo::Point::new(value.x, value.y)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::math::{f64_compare, point_compare};

	#[test]
	fn distance() {
		assert_eq!(Point::new(0., 0.).distance_to(Point::new(3., 4.)), 5.);
		assert_eq!(Point::new(-2., 7.).distance_to(Point::new(-2., 7.)), 0.);
	}

	#[test]
	fn angle_between_follows_screen_convention() {
		let origin = Point::new(10., 10.);
		assert_eq!(origin.angle_between(origin), 0.);
		assert!(f64_compare(origin.angle_between(Point::new(20., 10.)), 0., 1e-12));
		assert!(f64_compare(origin.angle_between(Point::new(10., 20.)), 90., 1e-12));
		assert!(f64_compare(origin.angle_between(Point::new(0., 10.)), 180., 1e-12));
		assert!(f64_compare(origin.angle_between(Point::new(10., 0.)), 270., 1e-12));
		assert!(f64_compare(origin.angle_between(Point::new(20., 0.)), 315., 1e-12));
	}

	#[test]
	fn angle_between_stays_in_range() {
		let center = Point::new(-3., 4.);
		for step in 0..720 {
			let angle = Point::new(5., 4.).rotate_at(center, step as f64 * 0.5);
			let measured = center.angle_between(angle);
			assert!((0.0..360.).contains(&measured), "{measured} out of range at step {step}");
		}
	}

	#[test]
	fn rotate_at_identity_and_full_turn() {
		let point = Point::new(12.5, -3.25);
		let center = Point::new(4., 9.);
		assert_eq!(point.rotate_at(center, 0.), point);
		assert!(point_compare(point.rotate_at(center, 360.), point, 1e-9));
	}

	#[test]
	fn rotate_then_complement_returns_home() {
		let point = Point::new(30., 40.);
		let center = Point::new(-7., 2.);
		for degrees in [1., 15., 45., 90., 133.7, 180., 270., 359.] {
			let back = point.rotate_at(center, degrees).rotate_at(center, 360. - degrees);
			assert!(point_compare(back, point, 1e-9), "{degrees}: {back:?}");
		}
	}

	#[test]
	fn rotation_direction_matches_angle_between() {
		let center = Point::new(0., 0.);
		let rotated = Point::new(10., 0.).rotate_at(center, 90.);
		assert!(point_compare(rotated, Point::new(0., 10.), 1e-9));
		assert!(f64_compare(center.angle_between(rotated), 90., 1e-9));
	}

	#[test]
	fn projection() {
		let projected = Point::new(5., 5.).project_on_line(Point::new(0., 0.), Point::new(10., 0.));
		assert_eq!(projected, Point::new(5., 0.));

		// Beyond the end of the segment, the infinite line is still used
		let projected = Point::new(25., 3.).nearest_on_line(Point::new(0., 0.), Point::new(10., 0.));
		assert_eq!(projected, Point::new(25., 0.));
	}

	#[test]
	fn projection_on_degenerate_line() {
		let a = Point::new(3., 3.);
		assert_eq!(Point::new(10., -4.).project_on_line(a, a), a);
	}

	#[test]
	fn is_on_line() {
		assert!(Point::new(0., 25.).is_on_line(Point::new(0., 0.), Point::new(0., 50.)));
		assert!(!Point::new(0.1, 25.).is_on_line(Point::new(0., 0.), Point::new(0., 50.)));
		assert!(Point::new(70., 10.).is_on_line(Point::new(0., 10.), Point::new(50., 10.)));
	}

	#[test]
	fn expand_to_rect() {
		assert_eq!(Point::new(25., 25.).expand_to_rect(3.), Rect::new(22., 22., 6., 6.));
	}

	#[test]
	fn expand_to_rect_contains_center() {
		for radius in [0., 0.5, 1., 7., 1e6] {
			let point = Point::new(-13.5, 42.);
			let rect = point.expand_to_rect(radius);
			assert!(rect.contains(point));
			assert_eq!(rect.width, 2. * radius);
			assert_eq!(rect.height, 2. * radius);
		}
	}
}

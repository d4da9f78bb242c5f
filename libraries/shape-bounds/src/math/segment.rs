use super::{Point, Rect};
use glam::DVec2;

const COLLINEAR_EPS: f64 = f64::EPSILON * 64.;

/// A bounded straight line between two points, used as an operand for intersection and clipping.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
	pub a: Point,
	pub b: Point,
}

impl Segment {
	pub const fn new(a: Point, b: Point) -> Self {
		Self { a, b }
	}

	pub fn length(&self) -> f64 {
		self.a.distance_to(self.b)
	}

	pub fn is_degenerate(&self) -> bool {
		self.a == self.b
	}

	#[must_use]
	pub fn reversed(&self) -> Self {
		Self::new(self.b, self.a)
	}

	/// The point on the segment closest to `point`, clamped to the segment's end points.
	pub fn nearest_point(&self, point: Point) -> Point {
		let (a, b) = (DVec2::from(self.a), DVec2::from(self.b));
		let direction = b - a;
		let length_squared = direction.length_squared();
		if length_squared == 0. {
			return self.a;
		}

		let t = ((DVec2::from(point) - a).dot(direction) / length_squared).clamp(0., 1.);
		(a + direction * t).into()
	}

	/// Distance from `point` to the nearest point of the bounded segment.
	pub fn distance_to(&self, point: Point) -> f64 {
		self.nearest_point(point).distance_to(point)
	}

	/// The point where two bounded segments cross, or `None` if they miss each other or are parallel.
	pub fn intersection(&self, other: &Segment) -> Option<Point> {
		// https://en.wikipedia.org/wiki/Intersection_(geometry)#Two_line_segments
		let (p1, p2, p3, p4) = (DVec2::from(self.a), DVec2::from(self.b), DVec2::from(other.a), DVec2::from(other.b));

		let a = p2 - p1;
		let b = p3 - p4;
		let c = p3 - p1;

		let denom = a.x * b.y - a.y * b.x;
		if denom.abs() < COLLINEAR_EPS {
			return None;
		}

		let s = (c.x * b.y - c.y * b.x) / denom;
		let t = (a.x * c.y - a.y * c.x) / denom;

		((0.0..=1.).contains(&s) && (0.0..=1.).contains(&t)).then(|| (p1 + a * s).into())
	}

	/// Clip the segment to `rect` with the Liang-Barsky algorithm, returning the part that lies inside it.
	pub fn clip_to_rect(&self, rect: &Rect) -> Option<Segment> {
		let delta = DVec2::from(self.b) - DVec2::from(self.a);
		let p = [-delta.x, delta.x, -delta.y, delta.y];
		let q = [self.a.x - rect.left(), rect.right() - self.a.x, self.a.y - rect.top(), rect.bottom() - self.a.y];

		let mut t0: f64 = 0.;
		let mut t1: f64 = 1.;
		for (p, q) in p.into_iter().zip(q) {
			if p == 0. {
				// Parallel to this edge and entirely outside of it
				if q < 0. {
					return None;
				}
				continue;
			}

			let r = q / p;
			if p < 0. {
				if r > t1 {
					return None;
				}
				t0 = t0.max(r);
			} else {
				if r < t0 {
					return None;
				}
				t1 = t1.min(r);
			}
		}

		let start = DVec2::from(self.a);
		Some(Segment::new((start + delta * t0).into(), (start + delta * t1).into()))
	}

	/// Whether any part of the segment lies inside `rect` (boundary included).
	pub fn intersects_rect(&self, rect: &Rect) -> bool {
		self.clip_to_rect(rect).is_some()
	}
}

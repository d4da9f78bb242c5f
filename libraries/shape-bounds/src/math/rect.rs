use super::Point;

/// An axis aligned rectangle defined by its top left corner and a non-negative size.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
	pub x: f64,
	pub y: f64,
	pub width: f64,
	pub height: f64,
}

impl Rect {
	pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
		Self { x, y, width, height }
	}

	/// Normalize a box defined by two arbitrary corner points.
	#[must_use]
	pub fn from_points(p1: Point, p2: Point) -> Self {
		Self::from_points_with_margin(p1, p2, 0., 0.)
	}

	/// Normalize a box defined by two arbitrary corner points, then grow it by `margin_x` on the left and right and by
	/// `margin_y` on the top and bottom.
	#[must_use]
	pub fn from_points_with_margin(p1: Point, p2: Point, margin_x: f64, margin_y: f64) -> Self {
		let x = p1.x.min(p2.x);
		let y = p1.y.min(p2.y);
		let width = (p2.x - p1.x).abs();
		let height = (p2.y - p1.y).abs();
		Self::new(x - margin_x, y - margin_y, width + 2. * margin_x, height + 2. * margin_y)
	}

	/// The smallest rect containing every point, or `None` for an empty iterator.
	#[must_use]
	pub fn from_point_iter(points: impl IntoIterator<Item = Point>) -> Option<Self> {
		let mut points = points.into_iter();
		let first = points.next()?;
		let [min, max] = points.fold([first, first], |[min, max], point| {
			[Point::new(min.x.min(point.x), min.y.min(point.y)), Point::new(max.x.max(point.x), max.y.max(point.y))]
		});
		Some(Self::from_points(min, max))
	}

	#[inline]
	pub fn left(&self) -> f64 {
		self.x
	}
	#[inline]
	pub fn top(&self) -> f64 {
		self.y
	}
	#[inline]
	pub fn right(&self) -> f64 {
		self.x + self.width
	}
	#[inline]
	pub fn bottom(&self) -> f64 {
		self.y + self.height
	}

	pub fn top_left(&self) -> Point {
		Point::new(self.left(), self.top())
	}

	pub fn bottom_right(&self) -> Point {
		Point::new(self.right(), self.bottom())
	}

	pub fn center(&self) -> Point {
		Point::new(self.x + self.width / 2., self.y + self.height / 2.)
	}

	/// The four corners, clockwise on screen starting from the top left.
	pub fn corners(&self) -> [Point; 4] {
		[
			self.top_left(),
			Point::new(self.right(), self.top()),
			self.bottom_right(),
			Point::new(self.left(), self.bottom()),
		]
	}

	/// Does this rect contain a point. Points on the boundary are contained.
	pub fn contains(&self, point: Point) -> bool {
		point.x >= self.left() && point.x <= self.right() && point.y >= self.top() && point.y <= self.bottom()
	}

	/// Checks if two rects intersect. Rects that only share an edge or a corner intersect.
	pub fn intersects_with(&self, other: &Rect) -> bool {
		self.left() <= other.right() && other.left() <= self.right() && self.top() <= other.bottom() && other.top() <= self.bottom()
	}

	/// Expand a rect by a certain amount on left/right and on top/bottom.
	#[must_use]
	pub fn expand_by(&self, x: f64, y: f64) -> Self {
		Self::from_points_with_margin(self.top_left(), self.bottom_right(), x, y)
	}

	/// Scale the rect about its center.
	#[must_use]
	pub fn scale_about_center(&self, factor: f64) -> Self {
		let center = self.center();
		Self::from_points(self.top_left().scale_at(center, factor), self.bottom_right().scale_at(center, factor))
	}
}

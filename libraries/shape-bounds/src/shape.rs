//! Read-only shape data handed to the bounds testers by the document layer, which owns it.

use crate::math::{Point, Rect};
use crate::path::PathGeometry;
use smallvec::{SmallVec, smallvec};

/// Identifier of a point shape, stable across edits so connections can refer to it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointId(pub u64);

bitflags::bitflags! {
	/// Per-shape state consulted by the bounds testers.
	#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
	#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
	pub struct ShapeState: u32 {
		/// The shape keeps a constant on-screen size, so its pick geometry is scaled to compensate for zoom.
		const SIZE = 1 << 0;
		/// The point accepts connections from lines and wires being drawn.
		const CONNECTOR = 1 << 1;
	}
}

impl ShapeState {
	/// The factor a query `scale` contributes for a shape in this state: `scale` itself for constant-size shapes, `1`
	/// for everything else or when `scale` is not a usable positive number.
	pub fn effective_scale(&self, scale: f64) -> f64 {
		if self.contains(ShapeState::SIZE) && scale.is_finite() && scale > 0. { scale } else { 1. }
	}
}

/// The closed set of shape kinds the engine can bounds-test. The discriminant indexes the bounds registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumCount, strum::EnumIter, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShapeKind {
	Point,
	Line,
	Rectangle,
	Ellipse,
	Arc,
	CubicBezier,
	QuadraticBezier,
	Path,
	Image,
	Text,
}

impl ShapeKind {
	#[inline]
	pub const fn index(self) -> usize {
		self as usize
	}
}

/// A grabbable control point found under the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointHandle {
	/// Set when the handle is a point shape, so connections can be attached to it.
	pub id: Option<PointId>,
	/// Ordinal of the handle within the shape that owns it.
	pub index: usize,
	pub position: Point,
}

impl PointHandle {
	#[must_use]
	pub fn with_index(self, index: usize) -> Self {
		Self { index, ..self }
	}
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointShape {
	pub id: PointId,
	pub position: Point,
	pub state: ShapeState,
}

impl PointShape {
	pub fn new(x: f64, y: f64) -> Self {
		Self {
			position: Point::new(x, y),
			..Default::default()
		}
	}

	#[must_use]
	pub fn with_id(self, id: u64) -> Self {
		Self { id: PointId(id), ..self }
	}

	#[must_use]
	pub fn with_state(self, state: ShapeState) -> Self {
		Self { state, ..self }
	}

	pub fn handle(&self) -> PointHandle {
		PointHandle {
			id: Some(self.id),
			index: 0,
			position: self.position,
		}
	}
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineShape {
	pub start: PointShape,
	pub end: PointShape,
	pub state: ShapeState,
}

impl LineShape {
	pub fn new(start: PointShape, end: PointShape) -> Self {
		Self { start, end, state: ShapeState::empty() }
	}
}

/// Corner points shared by every box-shaped kind.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoxCorners {
	pub top_left: PointShape,
	pub bottom_right: PointShape,
}

impl BoxCorners {
	pub fn new(top_left: PointShape, bottom_right: PointShape) -> Self {
		Self { top_left, bottom_right }
	}

	/// The normalized box between the two corners.
	pub fn rect(&self) -> Rect {
		Rect::from_points(self.top_left.position, self.bottom_right.position)
	}

	pub fn handles(&self) -> [&PointShape; 2] {
		[&self.top_left, &self.bottom_right]
	}
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RectangleShape {
	pub corners: BoxCorners,
	pub state: ShapeState,
}

impl RectangleShape {
	pub fn new(top_left: PointShape, bottom_right: PointShape) -> Self {
		Self {
			corners: BoxCorners::new(top_left, bottom_right),
			state: ShapeState::empty(),
		}
	}
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EllipseShape {
	pub corners: BoxCorners,
	pub state: ShapeState,
}

impl EllipseShape {
	pub fn new(top_left: PointShape, bottom_right: PointShape) -> Self {
		Self {
			corners: BoxCorners::new(top_left, bottom_right),
			state: ShapeState::empty(),
		}
	}
}

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImageShape {
	pub corners: BoxCorners,
	/// Key of the image in the document's resource store.
	pub key: String,
	pub state: ShapeState,
}

impl ImageShape {
	pub fn new(top_left: PointShape, bottom_right: PointShape, key: impl Into<String>) -> Self {
		Self {
			corners: BoxCorners::new(top_left, bottom_right),
			key: key.into(),
			state: ShapeState::empty(),
		}
	}
}

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextShape {
	pub corners: BoxCorners,
	pub text: String,
	pub state: ShapeState,
}

impl TextShape {
	pub fn new(top_left: PointShape, bottom_right: PointShape, text: impl Into<String>) -> Self {
		Self {
			corners: BoxCorners::new(top_left, bottom_right),
			text: text.into(),
			state: ShapeState::empty(),
		}
	}
}

/// An arc described by four control points: `point1` and `point2` span the circle, `point3` and `point4` mark where the
/// arc starts and ends on it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArcShape {
	pub point1: PointShape,
	pub point2: PointShape,
	pub point3: PointShape,
	pub point4: PointShape,
	pub state: ShapeState,
}

impl ArcShape {
	pub fn new(point1: PointShape, point2: PointShape, point3: PointShape, point4: PointShape) -> Self {
		Self {
			point1,
			point2,
			point3,
			point4,
			state: ShapeState::empty(),
		}
	}

	pub fn handles(&self) -> [&PointShape; 4] {
		[&self.point1, &self.point2, &self.point3, &self.point4]
	}
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CubicBezierShape {
	pub point1: PointShape,
	pub point2: PointShape,
	pub point3: PointShape,
	pub point4: PointShape,
	pub state: ShapeState,
}

impl CubicBezierShape {
	pub fn new(point1: PointShape, point2: PointShape, point3: PointShape, point4: PointShape) -> Self {
		Self {
			point1,
			point2,
			point3,
			point4,
			state: ShapeState::empty(),
		}
	}

	pub fn handles(&self) -> [&PointShape; 4] {
		[&self.point1, &self.point2, &self.point3, &self.point4]
	}
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuadraticBezierShape {
	pub point1: PointShape,
	pub point2: PointShape,
	pub point3: PointShape,
	pub state: ShapeState,
}

impl QuadraticBezierShape {
	pub fn new(point1: PointShape, point2: PointShape, point3: PointShape) -> Self {
		Self {
			point1,
			point2,
			point3,
			state: ShapeState::empty(),
		}
	}

	pub fn handles(&self) -> [&PointShape; 3] {
		[&self.point1, &self.point2, &self.point3]
	}
}

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathShape {
	pub geometry: PathGeometry,
	pub state: ShapeState,
}

impl PathShape {
	pub fn new(geometry: PathGeometry) -> Self {
		Self {
			geometry,
			state: ShapeState::empty(),
		}
	}
}

/// A borrowed view of any shape, as handed to the bounds registry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape<'a> {
	Point(&'a PointShape),
	Line(&'a LineShape),
	Rectangle(&'a RectangleShape),
	Ellipse(&'a EllipseShape),
	Arc(&'a ArcShape),
	CubicBezier(&'a CubicBezierShape),
	QuadraticBezier(&'a QuadraticBezierShape),
	Path(&'a PathShape),
	Image(&'a ImageShape),
	Text(&'a TextShape),
}

impl Shape<'_> {
	pub fn kind(&self) -> ShapeKind {
		match self {
			Shape::Point(_) => ShapeKind::Point,
			Shape::Line(_) => ShapeKind::Line,
			Shape::Rectangle(_) => ShapeKind::Rectangle,
			Shape::Ellipse(_) => ShapeKind::Ellipse,
			Shape::Arc(_) => ShapeKind::Arc,
			Shape::CubicBezier(_) => ShapeKind::CubicBezier,
			Shape::QuadraticBezier(_) => ShapeKind::QuadraticBezier,
			Shape::Path(_) => ShapeKind::Path,
			Shape::Image(_) => ShapeKind::Image,
			Shape::Text(_) => ShapeKind::Text,
		}
	}

	pub fn state(&self) -> ShapeState {
		match self {
			Shape::Point(shape) => shape.state,
			Shape::Line(shape) => shape.state,
			Shape::Rectangle(shape) => shape.state,
			Shape::Ellipse(shape) => shape.state,
			Shape::Arc(shape) => shape.state,
			Shape::CubicBezier(shape) => shape.state,
			Shape::QuadraticBezier(shape) => shape.state,
			Shape::Path(shape) => shape.state,
			Shape::Image(shape) => shape.state,
			Shape::Text(shape) => shape.state,
		}
	}
}

impl<'a> Shape<'a> {
	/// The point shapes this shape is built from, in handle order. Paths have none: their points are plain coordinates.
	pub fn point_shapes(self) -> SmallVec<[&'a PointShape; 4]> {
		match self {
			Shape::Point(shape) => smallvec![shape],
			Shape::Line(shape) => smallvec![&shape.start, &shape.end],
			Shape::Rectangle(shape) => SmallVec::from_slice(&shape.corners.handles()),
			Shape::Ellipse(shape) => SmallVec::from_slice(&shape.corners.handles()),
			Shape::Image(shape) => SmallVec::from_slice(&shape.corners.handles()),
			Shape::Text(shape) => SmallVec::from_slice(&shape.corners.handles()),
			Shape::Arc(shape) => SmallVec::from_slice(&shape.handles()),
			Shape::CubicBezier(shape) => SmallVec::from_slice(&shape.handles()),
			Shape::QuadraticBezier(shape) => SmallVec::from_slice(&shape.handles()),
			Shape::Path(_) => SmallVec::new(),
		}
	}
}

macro_rules! impl_from_shape_ref {
	($($variant:ident($shape:ty)),* $(,)?) => {
		$(
			impl<'a> From<&'a $shape> for Shape<'a> {
				fn from(shape: &'a $shape) -> Self {
					Shape::$variant(shape)
				}
			}
		)*
	};
}

impl_from_shape_ref! {
	Point(PointShape),
	Line(LineShape),
	Rectangle(RectangleShape),
	Ellipse(EllipseShape),
	Arc(ArcShape),
	CubicBezier(CubicBezierShape),
	QuadraticBezier(QuadraticBezierShape),
	Path(PathShape),
	Image(ImageShape),
	Text(TextShape),
}

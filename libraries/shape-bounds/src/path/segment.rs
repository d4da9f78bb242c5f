use crate::error::GeometryError;
use crate::math::{Point, Size};

/// One typed piece of a [`super::Figure`] outline.
///
/// A segment starts at the end point of the segment before it (or the figure's start point) and ends at its own
/// terminal point.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathSegment {
	Line {
		point: Point,
	},
	/// An elliptical arc in SVG end point parametrization.
	Arc {
		point: Point,
		/// The radii of the ellipse.
		size: Size,
		/// Rotation of the ellipse's X axis, in degrees.
		rotation_angle: f64,
		is_large_arc: bool,
		/// `true` when the arc travels in the direction of increasing angle, which is clockwise on screen.
		sweep_clockwise: bool,
	},
	CubicBezier {
		p1: Point,
		p2: Point,
		p3: Point,
	},
	QuadraticBezier {
		p1: Point,
		p2: Point,
	},
	/// Consecutive line segments; must contain at least one point.
	PolyLine {
		points: Vec<Point>,
	},
	/// Consecutive cubic curves, three points per curve.
	PolyCubicBezier {
		points: Vec<Point>,
	},
	/// Consecutive quadratic curves, two points per curve.
	PolyQuadraticBezier {
		points: Vec<Point>,
	},
}

impl PathSegment {
	pub fn kind_name(&self) -> &'static str {
		match self {
			PathSegment::Line { .. } => "line",
			PathSegment::Arc { .. } => "arc",
			PathSegment::CubicBezier { .. } => "cubic bezier",
			PathSegment::QuadraticBezier { .. } => "quadratic bezier",
			PathSegment::PolyLine { .. } => "poly line",
			PathSegment::PolyCubicBezier { .. } => "poly cubic bezier",
			PathSegment::PolyQuadraticBezier { .. } => "poly quadratic bezier",
		}
	}

	/// Number of points consumed by each piece of a poly segment, or `None` for singular segments.
	pub fn stride(&self) -> Option<usize> {
		match self {
			PathSegment::PolyLine { .. } => Some(1),
			PathSegment::PolyCubicBezier { .. } => Some(3),
			PathSegment::PolyQuadraticBezier { .. } => Some(2),
			_ => None,
		}
	}

	/// The terminal point, which becomes the current point of the next segment.
	///
	/// For poly segments this is the end of the last complete group; `None` when there is no complete group.
	pub fn end_point(&self) -> Option<Point> {
		match self {
			PathSegment::Line { point } | PathSegment::Arc { point, .. } => Some(*point),
			PathSegment::CubicBezier { p3, .. } => Some(*p3),
			PathSegment::QuadraticBezier { p2, .. } => Some(*p2),
			PathSegment::PolyLine { points } | PathSegment::PolyCubicBezier { points } | PathSegment::PolyQuadraticBezier { points } => {
				let stride = self.stride().unwrap_or(1);
				let complete = points.len() / stride * stride;
				complete.checked_sub(1).map(|index| points[index])
			}
		}
	}

	/// Every discrete point referenced by this segment, in order, including any malformed poly tail.
	pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
		let (fixed, run): ([Option<Point>; 3], &[Point]) = match self {
			PathSegment::Line { point } | PathSegment::Arc { point, .. } => ([Some(*point), None, None], &[]),
			PathSegment::CubicBezier { p1, p2, p3 } => ([Some(*p1), Some(*p2), Some(*p3)], &[]),
			PathSegment::QuadraticBezier { p1, p2 } => ([Some(*p1), Some(*p2), None], &[]),
			PathSegment::PolyLine { points } | PathSegment::PolyCubicBezier { points } | PathSegment::PolyQuadraticBezier { points } => ([None; 3], points.as_slice()),
		};
		fixed.into_iter().flatten().chain(run.iter().copied())
	}

	/// Check the point-count invariant of poly segments.
	pub fn validate(&self) -> Result<(), GeometryError> {
		match self {
			PathSegment::PolyLine { points } if points.is_empty() => Err(GeometryError::EmptyPolyLine),
			PathSegment::PolyCubicBezier { points } | PathSegment::PolyQuadraticBezier { points } => {
				let stride = self.stride().unwrap_or(1);
				if points.is_empty() || points.len() % stride != 0 {
					return Err(GeometryError::MalformedPolySegment {
						kind: self.kind_name(),
						len: points.len(),
						stride,
					});
				}
				Ok(())
			}
			_ => Ok(()),
		}
	}

	/// Whether all coordinates and arc parameters are finite.
	pub fn is_finite(&self) -> bool {
		let parameters_finite = match self {
			PathSegment::Arc { size, rotation_angle, .. } => size.is_finite() && rotation_angle.is_finite(),
			_ => true,
		};
		parameters_finite && self.points().all(|point| point.is_finite())
	}
}

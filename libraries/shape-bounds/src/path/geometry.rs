use super::PathSegment;
use crate::error::GeometryError;
use crate::math::{Point, Rect, Size};

/// Rule deciding which regions enclosed by overlapping figures are filled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FillRule {
	#[default]
	EvenOdd,
	NonZero,
}

/// A single open or closed sub-path: a start point followed by a connected run of segments.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Figure {
	pub start: Point,
	pub segments: Vec<PathSegment>,
	pub is_closed: bool,
}

impl Figure {
	pub fn new(start: Point, is_closed: bool) -> Self {
		Self {
			start,
			segments: Vec::new(),
			is_closed,
		}
	}

	/// The current point, where the next appended segment starts.
	pub fn current_point(&self) -> Point {
		self.segments.iter().rev().find_map(PathSegment::end_point).unwrap_or(self.start)
	}

	pub fn push(&mut self, segment: PathSegment) -> &mut Self {
		self.segments.push(segment);
		self
	}

	pub fn line_to(&mut self, point: Point) -> &mut Self {
		self.push(PathSegment::Line { point })
	}

	pub fn cubic_to(&mut self, p1: Point, p2: Point, p3: Point) -> &mut Self {
		self.push(PathSegment::CubicBezier { p1, p2, p3 })
	}

	pub fn quadratic_to(&mut self, p1: Point, p2: Point) -> &mut Self {
		self.push(PathSegment::QuadraticBezier { p1, p2 })
	}

	pub fn arc_to(&mut self, point: Point, size: Size, rotation_angle: f64, is_large_arc: bool, sweep_clockwise: bool) -> &mut Self {
		self.push(PathSegment::Arc {
			point,
			size,
			rotation_angle,
			is_large_arc,
			sweep_clockwise,
		})
	}

	/// The start point followed by every point referenced by the figure's segments.
	pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
		std::iter::once(self.start).chain(self.segments.iter().flat_map(PathSegment::points))
	}

	pub fn validate(&self) -> Result<(), GeometryError> {
		self.segments.iter().try_for_each(PathSegment::validate)
	}
}

/// A renderer-agnostic outline made of any number of figures.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathGeometry {
	pub figures: Vec<Figure>,
	pub fill_rule: FillRule,
}

impl PathGeometry {
	pub fn new(fill_rule: FillRule) -> Self {
		Self { figures: Vec::new(), fill_rule }
	}

	pub fn with_figure(mut self, figure: Figure) -> Self {
		self.figures.push(figure);
		self
	}

	pub fn is_empty(&self) -> bool {
		self.figures.is_empty()
	}

	/// Every discrete point referenced by any figure, in order.
	pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
		self.figures.iter().flat_map(Figure::points)
	}

	/// The box around all referenced points, including curve control points.
	pub fn bounds(&self) -> Option<Rect> {
		Rect::from_point_iter(self.points())
	}

	/// Check every segment's point-count invariant and that all coordinates are finite.
	pub fn validate(&self) -> Result<(), GeometryError> {
		for (index, figure) in self.figures.iter().enumerate() {
			figure.validate()?;
			if !figure.start.is_finite() || !figure.segments.iter().all(PathSegment::is_finite) {
				return Err(GeometryError::NonFiniteCoordinate { figure: index });
			}
		}
		Ok(())
	}
}

#[cfg(feature = "kurbo")]
impl PathGeometry {
	/// Convert into a [`kurbo::BezPath`] for rendering backends. Arcs are approximated by cubics within `tolerance`.
	pub fn to_bezpath(&self, tolerance: f64) -> kurbo::BezPath {
		let mut path = kurbo::BezPath::new();

		for figure in &self.figures {
			path.move_to(figure.start);
			let mut current = figure.start;

			for segment in &figure.segments {
				match segment {
					PathSegment::Line { point } => path.line_to(*point),
					PathSegment::CubicBezier { p1, p2, p3 } => path.curve_to(*p1, *p2, *p3),
					PathSegment::QuadraticBezier { p1, p2 } => path.quad_to(*p1, *p2),
					PathSegment::PolyLine { points } => points.iter().for_each(|point| path.line_to(*point)),
					PathSegment::PolyCubicBezier { points } => points.chunks_exact(3).for_each(|curve| path.curve_to(curve[0], curve[1], curve[2])),
					PathSegment::PolyQuadraticBezier { points } => points.chunks_exact(2).for_each(|curve| path.quad_to(curve[0], curve[1])),
					PathSegment::Arc {
						point,
						size,
						rotation_angle,
						is_large_arc,
						sweep_clockwise,
					} => {
						let size = size.normalized();
						let svg_arc = kurbo::SvgArc {
							from: current.into(),
							to: (*point).into(),
							radii: kurbo::Vec2::new(size.width, size.height),
							x_rotation: rotation_angle.to_radians(),
							large_arc: *is_large_arc,
							sweep: *sweep_clockwise,
						};
						match kurbo::Arc::from_svg_arc(&svg_arc) {
							Some(arc) => arc.to_cubic_beziers(tolerance, |p1, p2, p3| path.curve_to(p1, p2, p3)),
							None => path.line_to(*point),
						}
					}
				}
				current = segment.end_point().unwrap_or(current);
			}

			if figure.is_closed {
				path.close_path();
			}
		}

		path
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn triangle() -> Figure {
		let mut figure = Figure::new(Point::new(0., 0.), true);
		figure.line_to(Point::new(10., 0.)).line_to(Point::new(5., 8.));
		figure
	}

	#[test]
	fn current_point_follows_segments() {
		let mut figure = Figure::new(Point::new(1., 1.), false);
		assert_eq!(figure.current_point(), Point::new(1., 1.));

		figure.cubic_to(Point::new(2., 0.), Point::new(3., 0.), Point::new(4., 1.));
		assert_eq!(figure.current_point(), Point::new(4., 1.));

		// A poly segment without a complete group does not move the current point
		figure.push(PathSegment::PolyCubicBezier { points: vec![Point::new(9., 9.)] });
		assert_eq!(figure.current_point(), Point::new(4., 1.));
	}

	#[test]
	fn points_and_bounds() {
		let mut curve = Figure::new(Point::new(20., 20.), false);
		curve.quadratic_to(Point::new(25., -5.), Point::new(30., 20.));
		let geometry = PathGeometry::new(FillRule::NonZero).with_figure(triangle()).with_figure(curve);

		assert_eq!(geometry.points().count(), 6);
		assert_eq!(geometry.bounds(), Some(Rect::new(0., -5., 30., 25.)));
		assert_eq!(PathGeometry::default().bounds(), None);
	}

	#[test]
	fn validate_reports_first_problem() {
		let geometry = PathGeometry::default().with_figure(triangle());
		assert_eq!(geometry.validate(), Ok(()));

		let mut broken = triangle();
		broken.push(PathSegment::PolyQuadraticBezier {
			points: vec![Point::new(1., 1.), Point::new(2., 2.), Point::new(3., 3.)],
		});
		let geometry = PathGeometry::default().with_figure(triangle()).with_figure(broken);
		assert!(matches!(geometry.validate(), Err(GeometryError::MalformedPolySegment { len: 3, stride: 2, .. })));

		let mut non_finite = triangle();
		non_finite.line_to(Point::new(f64::INFINITY, 0.));
		let geometry = PathGeometry::default().with_figure(triangle()).with_figure(non_finite);
		assert_eq!(geometry.validate(), Err(GeometryError::NonFiniteCoordinate { figure: 1 }));
	}

	#[cfg(feature = "kurbo")]
	#[test]
	fn converts_to_bezpath() {
		let mut figure = triangle();
		figure.arc_to(Point::new(0., 0.), Size::new(5., 5.), 0., false, true);
		let path = PathGeometry::default().with_figure(figure).to_bezpath(0.1);

		let elements = path.elements();
		assert_eq!(elements.first(), Some(&kurbo::PathEl::MoveTo(kurbo::Point::new(0., 0.))));
		assert_eq!(elements.last(), Some(&kurbo::PathEl::ClosePath));
		assert!(elements.iter().any(|element| matches!(element, kurbo::PathEl::CurveTo(..))));
	}
}

//! Flattening of curves, arcs and whole path figures into point sequences for the polygon tests in [`crate::polygon`].

use crate::SamplingOptions;
use crate::consts::{DEGENERATE_LENGTH_SQUARED, INLINE_SAMPLE_CAPACITY};
use crate::math::{Point, Size};
use crate::path::{Figure, PathGeometry, PathSegment};
use glam::{DMat2, DVec2};
use smallvec::SmallVec;
use std::f64::consts::{FRAC_PI_2, TAU};

/// Sampled points; small shapes are flattened without touching the heap.
pub type PointBuffer = SmallVec<[Point; INLINE_SAMPLE_CAPACITY]>;

/// Append `segments` evenly spaced samples of the cubic curve, excluding `start` and ending exactly on `p3`.
pub fn sample_cubic(start: Point, p1: Point, p2: Point, p3: Point, segments: usize, out: &mut PointBuffer) {
	let [p0, p1, p2] = [start, p1, p2].map(DVec2::from);
	let segments = segments.max(1);

	out.extend((1..segments).map(|i| {
		let t = i as f64 / segments as f64;
		let p01 = p0.lerp(p1, t);
		let p12 = p1.lerp(p2, t);
		let p23 = p2.lerp(DVec2::from(p3), t);
		let p012 = p01.lerp(p12, t);
		let p123 = p12.lerp(p23, t);
		Point::from(p012.lerp(p123, t))
	}));
	out.push(p3);
}

/// Append `segments` evenly spaced samples of the quadratic curve, excluding `start` and ending exactly on `p2`.
pub fn sample_quadratic(start: Point, p1: Point, p2: Point, segments: usize, out: &mut PointBuffer) {
	let [p0, p1] = [start, p1].map(DVec2::from);
	let segments = segments.max(1);

	out.extend((1..segments).map(|i| {
		let t = i as f64 / segments as f64;
		let p01 = p0.lerp(p1, t);
		let p12 = p1.lerp(DVec2::from(p2), t);
		Point::from(p01.lerp(p12, t))
	}));
	out.push(p2);
}

/// Center parametrization of an elliptical arc.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcCenterParametrization {
	pub center: Point,
	/// Radii after they have been scaled up to reach the end point.
	pub radii: Size,
	/// Rotation of the ellipse's X axis, in radians.
	pub rotation: f64,
	/// Start angle, in radians.
	pub start_angle: f64,
	/// Signed sweep, in radians. Positive values travel clockwise on screen.
	pub sweep_angle: f64,
}

impl ArcCenterParametrization {
	/// Convert an SVG style end point arc to its center form.
	///
	/// Returns `None` when the arc is degenerate: equal end points or a zero radius.
	/// See <https://www.w3.org/TR/SVG2/implnote.html#ArcConversionEndpointToCenter>.
	pub fn from_endpoints(start: Point, end: Point, size: Size, rotation_angle: f64, is_large_arc: bool, sweep_clockwise: bool) -> Option<Self> {
		let size = size.normalized();
		let (start, end) = (DVec2::from(start), DVec2::from(end));
		if size.is_degenerate() || start.distance_squared(end) < DEGENERATE_LENGTH_SQUARED {
			return None;
		}

		let rotation = rotation_angle.to_radians();
		let prime = DMat2::from_angle(-rotation) * (start - end) * 0.5;

		let (mut rx, mut ry) = (size.width, size.height);
		let lambda = (prime.x * prime.x) / (rx * rx) + (prime.y * prime.y) / (ry * ry);
		if lambda > 1. {
			let lambda_sqrt = lambda.sqrt();
			rx *= lambda_sqrt;
			ry *= lambda_sqrt;
		}

		let (rx2, ry2) = (rx * rx, ry * ry);
		let (x2, y2) = (prime.x * prime.x, prime.y * prime.y);
		let sign = if is_large_arc == sweep_clockwise { -1. } else { 1. };
		let multiplier = sign * ((rx2 * ry2 - rx2 * y2 - ry2 * x2) / (rx2 * y2 + ry2 * x2)).max(0.).sqrt();
		let center_prime = DVec2::new(multiplier * rx * prime.y / ry, -multiplier * ry * prime.x / rx);

		let center = DMat2::from_angle(rotation) * center_prime + (start + end) * 0.5;

		let from = DVec2::new((prime.x - center_prime.x) / rx, (prime.y - center_prime.y) / ry);
		let to = DVec2::new((-prime.x - center_prime.x) / rx, (-prime.y - center_prime.y) / ry);
		let start_angle = DVec2::X.perp_dot(from).atan2(DVec2::X.dot(from));
		let mut sweep_angle = from.perp_dot(to).atan2(from.dot(to));

		if !sweep_clockwise && sweep_angle > 0. {
			sweep_angle -= TAU;
		} else if sweep_clockwise && sweep_angle < 0. {
			sweep_angle += TAU;
		}

		Some(Self {
			center: center.into(),
			radii: Size::new(rx, ry),
			rotation,
			start_angle,
			sweep_angle,
		})
	}

	/// The point on the ellipse at `angle` radians.
	pub fn point_at(&self, angle: f64) -> Point {
		let local = DVec2::new(self.radii.width * angle.cos(), self.radii.height * angle.sin());
		(DMat2::from_angle(self.rotation) * local + DVec2::from(self.center)).into()
	}
}

/// Append samples of an elliptical arc from `start` to `end`, excluding `start` and ending exactly on `end`.
///
/// Degenerate arcs collapse to a straight line to `end`.
pub fn sample_arc(start: Point, end: Point, size: Size, rotation_angle: f64, is_large_arc: bool, sweep_clockwise: bool, segments_per_quarter: usize, out: &mut PointBuffer) {
	let Some(arc) = ArcCenterParametrization::from_endpoints(start, end, size, rotation_angle, is_large_arc, sweep_clockwise) else {
		if start != end {
			out.push(end);
		}
		return;
	};

	let segments = ((arc.sweep_angle.abs() / FRAC_PI_2) * segments_per_quarter.max(1) as f64).ceil().max(1.) as usize;
	out.extend((1..segments).map(|i| arc.point_at(arc.start_angle + arc.sweep_angle * i as f64 / segments as f64)));
	out.push(end);
}

/// Append the samples of one segment that starts at `current`, returning the point the next segment starts at.
///
/// Poly segments are flattened group by group; a malformed tail that does not fill a whole group is skipped.
pub fn flatten_segment(current: Point, segment: &PathSegment, options: &SamplingOptions, out: &mut PointBuffer) -> Point {
	let options = options.clamped();

	match segment {
		PathSegment::Line { point } => out.push(*point),
		PathSegment::Arc {
			point,
			size,
			rotation_angle,
			is_large_arc,
			sweep_clockwise,
		} => sample_arc(current, *point, *size, *rotation_angle, *is_large_arc, *sweep_clockwise, options.arc_segments_per_quarter, out),
		PathSegment::CubicBezier { p1, p2, p3 } => sample_cubic(current, *p1, *p2, *p3, options.curve_segments, out),
		PathSegment::QuadraticBezier { p1, p2 } => sample_quadratic(current, *p1, *p2, options.curve_segments, out),
		PathSegment::PolyLine { points } => out.extend(points.iter().copied()),
		PathSegment::PolyCubicBezier { points } => {
			let mut start = current;
			let curves = points.chunks_exact(3);
			warn_on_malformed_tail(segment, curves.remainder().len());
			for curve in curves {
				sample_cubic(start, curve[0], curve[1], curve[2], options.curve_segments, out);
				start = curve[2];
			}
		}
		PathSegment::PolyQuadraticBezier { points } => {
			let mut start = current;
			let curves = points.chunks_exact(2);
			warn_on_malformed_tail(segment, curves.remainder().len());
			for curve in curves {
				sample_quadratic(start, curve[0], curve[1], options.curve_segments, out);
				start = curve[1];
			}
		}
	}

	segment.end_point().unwrap_or(current)
}

fn warn_on_malformed_tail(segment: &PathSegment, remainder: usize) {
	if remainder > 0 {
		log::warn!("Skipping {remainder} trailing point(s) of a malformed {} segment", segment.kind_name());
	}
}

/// Append the start point and the samples of every segment of `figure`.
pub fn flatten_figure(figure: &Figure, options: &SamplingOptions, out: &mut PointBuffer) {
	out.push(figure.start);
	figure.segments.iter().fold(figure.start, |current, segment| flatten_segment(current, segment, options, out));
}

/// Flatten every figure of `geometry` into one combined point sequence.
pub fn flatten_geometry(geometry: &PathGeometry, options: &SamplingOptions) -> PointBuffer {
	let mut out = PointBuffer::new();
	for figure in &geometry.figures {
		flatten_figure(figure, options, &mut out);
	}
	out
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::math::{f64_compare, point_compare};

	#[test]
	fn cubic_samples_end_on_the_curve() {
		let mut out = PointBuffer::new();
		let start = Point::new(0., 0.);
		sample_cubic(start, Point::new(0., 10.), Point::new(10., 10.), Point::new(10., 0.), 4, &mut out);

		assert_eq!(out.len(), 4);
		assert_eq!(out[3], Point::new(10., 0.));
		// Symmetric curve peaks at 3/4 of the handle height
		assert!(point_compare(out[1], Point::new(5., 7.5), 1e-12));
	}

	#[test]
	fn quadratic_midpoint() {
		let mut out = PointBuffer::new();
		sample_quadratic(Point::new(0., 0.), Point::new(5., 10.), Point::new(10., 0.), 2, &mut out);
		assert_eq!(out.as_slice(), &[Point::new(5., 5.), Point::new(10., 0.)]);
	}

	#[test]
	fn zero_segment_count_is_clamped() {
		let mut out = PointBuffer::new();
		sample_quadratic(Point::new(0., 0.), Point::new(5., 10.), Point::new(10., 0.), 0, &mut out);
		assert_eq!(out.as_slice(), &[Point::new(10., 0.)]);
	}

	#[test]
	fn half_circle_arc() {
		let start = Point::new(0., 0.);
		let end = Point::new(10., 0.);
		let arc = ArcCenterParametrization::from_endpoints(start, end, Size::new(5., 5.), 0., false, true).unwrap();
		assert!(point_compare(arc.center, Point::new(5., 0.), 1e-9));
		assert!(f64_compare(arc.sweep_angle, std::f64::consts::PI, 1e-9));

		let mut out = PointBuffer::new();
		sample_arc(start, end, Size::new(5., 5.), 0., false, true, 4, &mut out);
		assert_eq!(out.len(), 8);
		assert_eq!(out.last(), Some(&end));
		for point in &out {
			assert!(f64_compare(point.distance_to(Point::new(5., 0.)), 5., 1e-9));
		}
		// Clockwise on screen from the left goes through the top half (negative Y)
		assert!(out[3].y < 0.);
	}

	#[test]
	fn counter_clockwise_arc_goes_below() {
		let mut out = PointBuffer::new();
		sample_arc(Point::new(0., 0.), Point::new(10., 0.), Size::new(5., 5.), 0., false, false, 4, &mut out);
		assert!(out[3].y > 0.);
	}

	#[test]
	fn small_radii_are_scaled_up() {
		let arc = ArcCenterParametrization::from_endpoints(Point::new(0., 0.), Point::new(10., 0.), Size::new(1., 1.), 0., false, true).unwrap();
		assert!(f64_compare(arc.radii.width, 5., 1e-9));
		assert!(point_compare(arc.center, Point::new(5., 0.), 1e-9));
	}

	#[test]
	fn degenerate_arcs_become_lines() {
		let mut out = PointBuffer::new();
		sample_arc(Point::new(0., 0.), Point::new(10., 0.), Size::new(0., 5.), 0., false, true, 4, &mut out);
		assert_eq!(out.as_slice(), &[Point::new(10., 0.)]);

		out.clear();
		sample_arc(Point::new(3., 3.), Point::new(3., 3.), Size::new(5., 5.), 0., true, true, 4, &mut out);
		assert!(out.is_empty());
	}

	#[test]
	fn malformed_poly_tail_is_skipped() {
		let _ = env_logger::builder().is_test(true).try_init();

		let options = SamplingOptions { curve_segments: 2, ..Default::default() };
		let segment = PathSegment::PolyQuadraticBezier {
			points: vec![Point::new(5., 10.), Point::new(10., 0.), Point::new(99., 99.)],
		};
		let mut out = PointBuffer::new();
		let next = flatten_segment(Point::new(0., 0.), &segment, &options, &mut out);

		assert_eq!(next, Point::new(10., 0.));
		assert_eq!(out.as_slice(), &[Point::new(5., 5.), Point::new(10., 0.)]);
	}

	#[test]
	fn poly_cubic_chains_groups() {
		let options = SamplingOptions { curve_segments: 1, ..Default::default() };
		let segment = PathSegment::PolyCubicBezier {
			points: vec![Point::new(1., 1.), Point::new(2., 1.), Point::new(3., 0.), Point::new(4., -1.), Point::new(5., -1.), Point::new(6., 0.)],
		};
		let mut out = PointBuffer::new();
		let next = flatten_segment(Point::new(0., 0.), &segment, &options, &mut out);
		assert_eq!(next, Point::new(6., 0.));
		assert_eq!(out.as_slice(), &[Point::new(3., 0.), Point::new(6., 0.)]);
	}

	#[test]
	fn flatten_geometry_combines_figures() {
		let mut square = Figure::new(Point::new(0., 0.), true);
		square.push(PathSegment::PolyLine {
			points: vec![Point::new(10., 0.), Point::new(10., 10.), Point::new(0., 10.)],
		});
		let mut curve = Figure::new(Point::new(20., 0.), false);
		curve.cubic_to(Point::new(20., 5.), Point::new(30., 5.), Point::new(30., 0.));

		let geometry = PathGeometry::default().with_figure(square).with_figure(curve);
		let points = flatten_geometry(&geometry, &SamplingOptions::default());

		assert_eq!(points.len(), 4 + 1 + SamplingOptions::default().curve_segments);
		assert_eq!(points[4], Point::new(20., 0.));
		assert_eq!(points.last(), Some(&Point::new(30., 0.)));
	}
}

use criterion::{Criterion, criterion_group, criterion_main};
use shape_bounds::*;
use std::hint::black_box;

pub fn criterion_benchmark(crit: &mut Criterion) {
	let registry = BoundsRegistry::global();
	let cubic = cubic();
	let path = path();
	let shapes = scene();
	let shapes = shapes.iter().map(Shape::from).collect::<Vec<_>>();

	crit.bench_function("cubic contains", |bench| {
		bench.iter(|| registry.contains(Shape::CubicBezier(black_box(&cubic)), black_box(Point::new(300., 520.)), 4., 1.))
	});
	crit.bench_function("path overlaps", |bench| {
		bench.iter(|| registry.overlaps(Shape::Path(black_box(&path)), black_box(Rect::new(120., 120., 40., 40.)), 4., 1.))
	});
	crit.bench_function("scene pointer query", |bench| {
		bench.iter(|| query::try_to_get_shape(black_box(&shapes), black_box(Point::new(512., 384.)), 4., 1., registry))
	});
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

fn cubic() -> CubicBezierShape {
	CubicBezierShape::new(
		PointShape::new(458.37027, 572.165771),
		PointShape::new(428.525848, 486.720093),
		PointShape::new(368.618805, 467.485992),
		PointShape::new(273., 476.),
	)
}

fn path() -> PathShape {
	let mut figure = Figure::new(Point::new(100., 100.), true);
	figure
		.cubic_to(Point::new(150., 40.), Point::new(250., 40.), Point::new(300., 100.))
		.arc_to(Point::new(300., 200.), Size::new(50., 50.), 0., false, true)
		.quadratic_to(Point::new(200., 260.), Point::new(100., 200.));
	PathShape::new(PathGeometry::new(FillRule::EvenOdd).with_figure(figure))
}

fn scene() -> Vec<RectangleShape> {
	(0..200)
		.map(|i| {
			let offset = (i % 20) as f64 * 50.;
			let row = (i / 20) as f64 * 75.;
			RectangleShape::new(PointShape::new(offset, row), PointShape::new(offset + 40., row + 60.))
		})
		.collect()
}

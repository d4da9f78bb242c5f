// Implementation constants

/// Constant used to determine if `f64`s are equivalent.
pub const MAX_ABSOLUTE_DIFFERENCE: f64 = 1e-9;

/// Squared lengths below this value make a line or arc chord degenerate.
pub const DEGENERATE_LENGTH_SQUARED: f64 = 1e-18;

/// Default number of line segments a cubic or quadratic curve is flattened into.
pub const DEFAULT_CURVE_SEGMENTS: usize = 24;

/// Default number of line segments for every quarter turn of an elliptical arc.
pub const DEFAULT_ARC_SEGMENTS_PER_QUARTER: usize = 8;

/// Number of points kept inline by [`crate::sampling::PointBuffer`] before it spills to the heap.
pub const INLINE_SAMPLE_CAPACITY: usize = 64;

use crate::consts::{DEFAULT_ARC_SEGMENTS_PER_QUARTER, DEFAULT_CURVE_SEGMENTS};

/// Struct to represent the parameters used when curves are flattened for hit testing.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SamplingOptions {
	/// Number of line segments every cubic or quadratic curve is split into. The default value is `24`.
	/// Hit testing tolerances are coarse compared to rendering, so a fixed subdivision is precise enough.
	pub curve_segments: usize,
	/// Number of line segments used for each quarter turn of an elliptical arc. The default value is `8`.
	pub arc_segments_per_quarter: usize,
}

impl SamplingOptions {
	pub const fn new() -> Self {
		Self {
			curve_segments: DEFAULT_CURVE_SEGMENTS,
			arc_segments_per_quarter: DEFAULT_ARC_SEGMENTS_PER_QUARTER,
		}
	}

	/// The options with every count raised to at least one.
	#[must_use]
	pub fn clamped(self) -> Self {
		Self {
			curve_segments: self.curve_segments.max(1),
			arc_segments_per_quarter: self.arc_segments_per_quarter.max(1),
		}
	}
}

impl Default for SamplingOptions {
	fn default() -> Self {
		Self::new()
	}
}

/// A width and height pair, such as the radii of an elliptical arc.
///
/// Negative components are allowed while a shape is being edited; [`Size::normalized`] is applied before use.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
	pub width: f64,
	pub height: f64,
}

impl Size {
	pub const fn new(width: f64, height: f64) -> Self {
		Self { width, height }
	}

	/// The same size with both components made non-negative.
	#[must_use]
	pub fn normalized(self) -> Self {
		Self::new(self.width.abs(), self.height.abs())
	}

	pub fn is_finite(&self) -> bool {
		self.width.is_finite() && self.height.is_finite()
	}

	/// Whether either component is zero, which collapses an arc into a straight line.
	pub fn is_degenerate(&self) -> bool {
		self.width == 0. || self.height == 0.
	}
}

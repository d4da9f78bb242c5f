use thiserror::Error;

/// A set of data-integrity problems that can be found in a [`crate::PathGeometry`].
///
/// Queries never report these; the sampler skips whatever it cannot use. They exist so that the layer which builds
/// path geometry can validate its output up front.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
	#[error("{kind} segment has {len} points, which is not a positive multiple of {stride}")]
	MalformedPolySegment { kind: &'static str, len: usize, stride: usize },
	#[error("poly line segment has no points")]
	EmptyPolyLine,
	#[error("non-finite coordinate in figure {figure}")]
	NonFiniteCoordinate { figure: usize },
}

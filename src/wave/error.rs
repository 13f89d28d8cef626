use thiserror::Error;

/// Errors returned while building or indexing a [`crate::wave::Wave`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WaveError {
    /// `product(shape)` overflowed `usize`.
    #[error("shape element count overflow")]
    ShapeOverflow,
    /// The number of provided elements doesn't match `product(shape)`.
    #[error("wrong element count: expected {expected}, got {actual}")]
    WrongElementCount { expected: usize, actual: usize },
    /// The wave has fewer dimensions than the requested axis.
    #[error("axis {axis} out of bounds for a wave with {ndim} dimension(s)")]
    AxisOutOfBounds { axis: usize, ndim: usize },
    /// The index lies past the end of its axis.
    #[error("index {index} out of bounds for axis {axis} of length {len}")]
    IndexOutOfBounds { axis: usize, index: usize, len: usize },
    /// More labels were supplied than the axis has positions.
    #[error("too many labels for axis {axis} of length {len}")]
    TooManyLabels { axis: usize, len: usize },
}

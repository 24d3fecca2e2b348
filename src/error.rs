/// Errors returned by front extraction, volume estimation, and comparison.
///
/// Structural errors ([`ShapeMismatch`](Error::ShapeMismatch),
/// [`DimensionOutOfRange`](Error::DimensionOutOfRange), ...) are caller bugs
/// and surface immediately. [`DegenerateInput`](Error::DegenerateInput) is
/// an expected data condition: it is produced by a
/// [`Triangulator`](crate::triangulation::Triangulator) and absorbed by the
/// [`VolumeEstimator`](crate::volume::VolumeEstimator), which reports a zero
/// volume instead.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Returned when two vectors, or a vector and the sense vector, differ in length.
    #[error("shape mismatch: expected {expected} dimensions, got {got}")]
    ShapeMismatch {
        /// The expected number of dimensions.
        expected: usize,
        /// The actual number of dimensions.
        got: usize,
    },

    /// Returned when a configured dimension index does not exist.
    #[error("dimension index {index} out of range for {dimensions} objectives")]
    DimensionOutOfRange {
        /// The offending index.
        index: usize,
        /// The number of objectives available.
        dimensions: usize,
    },

    /// Returned when both base dimensions of the volume estimator are the same.
    #[error("base dimensions must differ, both are {0}")]
    DuplicateBaseDimensions(usize),

    /// Returned when an objective value is NaN or infinite.
    #[error("non-finite objective value in vector {index} at dimension {dimension}")]
    NonFiniteValue {
        /// Position of the vector in the input collection.
        index: usize,
        /// The dimension holding the value.
        dimension: usize,
    },

    /// Returned by a triangulator when fewer than three distinct points are
    /// given or all points are collinear.
    #[error("degenerate triangulation input: {distinct} distinct points, or all collinear")]
    DegenerateInput {
        /// Number of distinct points that were supplied.
        distinct: usize,
    },

    /// Returned when a [`DuplicatePolicy::Jitter`](crate::volume::DuplicatePolicy::Jitter)
    /// scale is negative, NaN, or infinite.
    #[error("jitter scale must be finite and non-negative, got {0}")]
    InvalidJitterScale(f64),

    /// Returned when two solver results in one comparison share a label.
    #[error("duplicate solver label '{0}'")]
    DuplicateLabel(String),
}

/// Convenience alias for results in this crate.
pub type Result<T> = core::result::Result<T, Error>;

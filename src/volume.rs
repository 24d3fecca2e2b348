//! Triangulated volume metric of a Pareto front.
//!
//! The front is projected onto two **base** objectives and triangulated in
//! that plane. Each triangle, lifted by a third **height** objective, spans
//! a tetrahedron with the origin whose signed volume is `det(M) / 6`, where
//! the rows of `M` are the `(base_x, base_y, height)` coordinates of its
//! three vertices. The metric is the absolute value of the sum of those
//! signed volumes.
//!
//! The number is only meaningful relative to other fronts measured with the
//! same base and height objectives; it is not a physical quantity.
//!
//! ```
//! use pareto_compare::Sense;
//! use pareto_compare::pareto::extract_front;
//! use pareto_compare::volume::VolumeEstimator;
//!
//! // GW, E, UF
//! let results = vec![
//!     vec![10.0, 687.0, 0.01002],
//!     vec![8.0, 767.0, 0.01101],
//!     vec![6.0, 904.0, 0.01205],
//!     vec![5.0, 1016.0, 0.01906],
//! ];
//! let front = extract_front(&results, &Sense::minimize_all(3), 0).unwrap();
//!
//! // Triangulate (E, UF), lift by GW.
//! let volume = VolumeEstimator::new(0, (1, 2)).estimate(&front).unwrap();
//! assert!(volume > 0.0);
//! ```

use std::sync::Arc;

use nalgebra::Matrix3;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::pareto::ParetoFront;
use crate::triangulation::{Delaunator, Point2, Simplex, Triangulator};

const MAX_JITTER_ATTEMPTS: usize = 16;

/// How front members that share base coordinates are handed to the
/// triangulator.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DuplicatePolicy {
    /// Only the first member with given base coordinates is triangulated;
    /// later ones are rejected. This is the default.
    #[default]
    KeepFirst,
    /// Later duplicates are displaced by a seeded uniform offset of at most
    /// `scale` times the extent of each base axis. A point that still
    /// collides after a few attempts (always the case for a zero `scale`)
    /// is rejected as under [`KeepFirst`](Self::KeepFirst).
    Jitter {
        /// Offset magnitude relative to the axis extent.
        scale: f64,
        /// Seed for the perturbation, so results stay reproducible.
        seed: u64,
    },
}

impl DuplicatePolicy {
    /// Fails unless a jitter scale is finite and non-negative.
    pub(crate) fn validate(self) -> Result<()> {
        match self {
            Self::Jitter { scale, .. } if !(scale.is_finite() && scale >= 0.0) => {
                Err(Error::InvalidJitterScale(scale))
            }
            _ => Ok(()),
        }
    }
}

/// Computes the triangulated volume metric of Pareto fronts.
///
/// # Defaults
///
/// - Duplicate policy: [`DuplicatePolicy::KeepFirst`]
/// - Triangulator: [`Delaunator`]
#[derive(Clone)]
pub struct VolumeEstimator {
    height_dimension: usize,
    base_dimensions: (usize, usize),
    duplicate_policy: DuplicatePolicy,
    triangulator: Arc<dyn Triangulator>,
}

impl core::fmt::Debug for VolumeEstimator {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("VolumeEstimator")
            .field("height_dimension", &self.height_dimension)
            .field("base_dimensions", &self.base_dimensions)
            .field("duplicate_policy", &self.duplicate_policy)
            .finish_non_exhaustive()
    }
}

impl VolumeEstimator {
    /// Creates an estimator lifting the `base_dimensions` plane by
    /// `height_dimension`.
    #[must_use]
    pub fn new(height_dimension: usize, base_dimensions: (usize, usize)) -> Self {
        Self {
            height_dimension,
            base_dimensions,
            duplicate_policy: DuplicatePolicy::default(),
            triangulator: Arc::new(Delaunator),
        }
    }

    /// Set how members with identical base coordinates are treated.
    #[must_use]
    pub fn duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }

    /// Use a different triangulation backend.
    #[must_use]
    pub fn triangulator(mut self, triangulator: impl Triangulator + 'static) -> Self {
        self.triangulator = Arc::new(triangulator);
        self
    }

    pub(crate) fn shared_triangulator(mut self, triangulator: Arc<dyn Triangulator>) -> Self {
        self.triangulator = triangulator;
        self
    }

    /// The height objective.
    #[must_use]
    pub fn height_dimension(&self) -> usize {
        self.height_dimension
    }

    /// The two base objectives.
    #[must_use]
    pub fn base_dimensions(&self) -> (usize, usize) {
        self.base_dimensions
    }

    /// Compute the volume metric of `front`.
    ///
    /// Fronts that cannot be triangulated (fewer than three distinct base
    /// points, or collinear base points) have volume `0.0`.
    ///
    /// # Errors
    ///
    /// - [`Error::DuplicateBaseDimensions`] if both base objectives are the same.
    /// - [`Error::InvalidJitterScale`] if the duplicate policy jitters by a
    ///   negative or non-finite scale.
    /// - [`Error::DimensionOutOfRange`] if a configured objective does not
    ///   exist in the front's vectors.
    /// - Any non-degeneracy error the triangulator reports.
    pub fn estimate(&self, front: &ParetoFront) -> Result<f64> {
        let (bx, by) = self.base_dimensions;
        if bx == by {
            return Err(Error::DuplicateBaseDimensions(bx));
        }
        self.duplicate_policy.validate()?;
        if front.is_empty() {
            return Ok(0.0);
        }

        let xs = front.column(bx)?;
        let ys = front.column(by)?;
        let zs = front.column(self.height_dimension)?;

        let (points, heights) = self.resolve_duplicates(&xs, &ys, &zs);

        let simplices = match self.triangulator.triangulate(&points) {
            Ok(simplices) => simplices,
            Err(Error::DegenerateInput { .. }) => {
                trace_debug!(points = points.len(), "degenerate front, volume is zero");
                return Ok(0.0);
            }
            Err(e) => return Err(e),
        };

        let signed: f64 = simplices
            .iter()
            .map(|&s| lifted_volume(&points, &heights, s))
            .sum();

        Ok(signed.abs())
    }

    /// Base points and heights to triangulate, after applying the
    /// duplicate policy.
    fn resolve_duplicates(&self, xs: &[f64], ys: &[f64], zs: &[f64]) -> (Vec<Point2>, Vec<f64>) {
        let mut points: Vec<Point2> = Vec::with_capacity(xs.len());
        let mut heights: Vec<f64> = Vec::with_capacity(xs.len());

        match self.duplicate_policy {
            DuplicatePolicy::KeepFirst => {
                for ((&x, &y), &z) in xs.iter().zip(ys).zip(zs) {
                    let p = Point2::new(x, y);
                    if !points.contains(&p) {
                        points.push(p);
                        heights.push(z);
                    }
                }
            }
            DuplicatePolicy::Jitter { scale, seed } => {
                let mut rng = fastrand::Rng::with_seed(seed);
                let step_x = scale * axis_extent(xs);
                let step_y = scale * axis_extent(ys);
                for ((&x, &y), &z) in xs.iter().zip(ys).zip(zs) {
                    let mut p = Point2::new(x, y);
                    for _ in 0..MAX_JITTER_ATTEMPTS {
                        if !points.contains(&p) {
                            break;
                        }
                        p = Point2::new(
                            x + step_x * (2.0 * rng.f64() - 1.0),
                            y + step_y * (2.0 * rng.f64() - 1.0),
                        );
                    }
                    // A zero scale cannot separate the points; reject like KeepFirst.
                    if !points.contains(&p) {
                        points.push(p);
                        heights.push(z);
                    }
                }
            }
        }

        (points, heights)
    }
}

/// Compute the volume metric of `front` with the default triangulator and
/// duplicate policy.
///
/// # Errors
///
/// Same as [`VolumeEstimator::estimate`].
pub fn estimate_volume(
    front: &ParetoFront,
    height_dimension: usize,
    base_dimensions: (usize, usize),
) -> Result<f64> {
    VolumeEstimator::new(height_dimension, base_dimensions).estimate(front)
}

/// Signed volume of the tetrahedron spanned by the origin and three
/// `(x, y, height)` vertices.
#[must_use]
pub fn simplex_volume(vertices: [[f64; 3]; 3]) -> f64 {
    let [a, b, c] = vertices;
    Matrix3::new(a[0], a[1], a[2], b[0], b[1], b[2], c[0], c[1], c[2]).determinant() / 6.0
}

/// Signed contribution of one simplex, taken counter-clockwise in the base
/// plane so that every triangle contributes with the same orientation.
fn lifted_volume(points: &[Point2], heights: &[f64], simplex: Simplex) -> f64 {
    let [i, j, k] = simplex.counter_clockwise(points).vertices();
    let lift = |n: usize| [points[n].x, points[n].y, heights[n]];
    simplex_volume([lift(i), lift(j), lift(k)])
}

/// Spread of an axis, or 1.0 when all values coincide.
fn axis_extent(values: &[f64]) -> f64 {
    let (lo, hi) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    let extent = hi - lo;
    if extent > 0.0 { extent } else { 1.0 }
}

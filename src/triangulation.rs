//! Planar Delaunay triangulation behind a pluggable [`Triangulator`] trait.
//!
//! The volume estimator only needs triangles ([`Simplex`]) that cover the
//! convex hull of a 2D point set without overlap and satisfy the
//! empty-circumcircle property. Any [`Triangulator`] can be injected. The
//! default [`Delaunator`] hands the points to the
//! [`delaunator`](https://docs.rs/delaunator) crate and maps its output
//! back to input indices.
//!
//! # Degenerate input
//!
//! Fewer than three distinct points, or points that are all collinear,
//! have no triangulation. Implementations return
//! [`Error::DegenerateInput`] for them.
//!
//! # Example
//!
//! ```
//! use pareto_compare::triangulation::{Delaunator, Point2, Triangulator};
//!
//! let points = [
//!     Point2::new(0.0, 0.0),
//!     Point2::new(1.0, 0.0),
//!     Point2::new(1.0, 1.0),
//!     Point2::new(0.0, 1.0),
//! ];
//! let simplices = Delaunator.triangulate(&points).unwrap();
//! assert_eq!(simplices.len(), 2);
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A point in the triangulation plane.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point2 {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point2 {
    /// Creates a point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A triangle, as three indices into the triangulated point slice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Simplex(pub [usize; 3]);

impl Simplex {
    /// The vertex indices.
    #[must_use]
    pub fn vertices(self) -> [usize; 3] {
        self.0
    }

    /// Twice the signed area; positive for counter-clockwise vertices.
    ///
    /// # Panics
    ///
    /// Panics if an index is out of bounds for `points`.
    #[must_use]
    pub fn signed_area2(self, points: &[Point2]) -> f64 {
        let [a, b, c] = self.0;
        cross(points[a], points[b], points[c])
    }

    /// The same triangle with counter-clockwise vertex order.
    #[must_use]
    pub fn counter_clockwise(self, points: &[Point2]) -> Self {
        let [a, b, c] = self.0;
        if self.signed_area2(points) < 0.0 {
            Self([a, c, b])
        } else {
            self
        }
    }
}

/// A planar triangulation service.
///
/// Implementations must be reentrant: a [`Comparison`](crate::Comparison)
/// may call them from several threads at once under the `parallel`
/// feature.
pub trait Triangulator: Send + Sync {
    /// Triangulate `points`.
    ///
    /// The returned simplices index into `points`, cover its convex hull
    /// without overlap, and satisfy the Delaunay property. Repeated points
    /// are allowed; only the first copy is referenced.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DegenerateInput`] for fewer than three distinct
    /// points or an all-collinear set, and [`Error::NonFiniteValue`] for a
    /// NaN or infinite coordinate.
    fn triangulate(&self, points: &[Point2]) -> Result<Vec<Simplex>>;
}

/// Default triangulator, backed by the `delaunator` crate.
///
/// Output triangles are counter-clockwise.
#[derive(Clone, Copy, Debug, Default)]
pub struct Delaunator;

impl Triangulator for Delaunator {
    fn triangulate(&self, points: &[Point2]) -> Result<Vec<Simplex>> {
        if let Some(index) = points
            .iter()
            .position(|p| !p.x.is_finite() || !p.y.is_finite())
        {
            let dimension = usize::from(points[index].x.is_finite());
            return Err(Error::NonFiniteValue { index, dimension });
        }

        let distinct = distinct_indices(points);
        if distinct.len() < 3 {
            return Err(Error::DegenerateInput {
                distinct: distinct.len(),
            });
        }

        let coords: Vec<delaunator::Point> = distinct
            .iter()
            .map(|&i| delaunator::Point {
                x: points[i].x,
                y: points[i].y,
            })
            .collect();
        let triangulation = delaunator::triangulate(&coords);

        // Collinear input comes back as a hull with no triangles.
        if triangulation.triangles.is_empty() {
            return Err(Error::DegenerateInput {
                distinct: distinct.len(),
            });
        }

        let simplices: Vec<Simplex> = triangulation
            .triangles
            .chunks_exact(3)
            .map(|t| {
                Simplex([distinct[t[0]], distinct[t[1]], distinct[t[2]]]).counter_clockwise(points)
            })
            .collect();

        trace_debug!(
            points = points.len(),
            triangles = simplices.len(),
            "triangulation built"
        );

        Ok(simplices)
    }
}

/// Positions of the first occurrence of each distinct point.
fn distinct_indices(points: &[Point2]) -> Vec<usize> {
    let mut seen: Vec<usize> = Vec::with_capacity(points.len());
    for (i, p) in points.iter().enumerate() {
        if !seen.iter().any(|&j| points[j] == *p) {
            seen.push(i);
        }
    }
    seen
}

fn cross(a: Point2, b: Point2, c: Point2) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

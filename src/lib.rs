#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(unreachable_pub)]
#![deny(clippy::correctness)]
#![deny(clippy::suspicious)]
#![deny(clippy::style)]
#![deny(clippy::complexity)]
#![deny(clippy::perf)]
#![deny(clippy::pedantic)]
#![deny(clippy::std_instead_of_core)]

//! Pareto front extraction and volume comparison for multi-objective
//! solver results. Given the objective vectors each solver produced (for a
//! network-design problem: gateways used, energy, utilization factor), it
//! finds every solver's non-dominated front, orders it deterministically,
//! and measures a triangulated volume under the front so solvers can be
//! ranked by a number rather than by eye.
//!
//! # Getting Started
//!
//! ```
//! use pareto_compare::prelude::*;
//!
//! let exact = SolverResult::new("exact", vec![
//!     vec![10.0, 687.0, 0.01002],
//!     vec![8.0, 767.0, 0.01101],
//!     vec![6.0, 904.0, 0.01205],
//!     vec![5.0, 1016.0, 0.01906],
//!     vec![4.0, 1164.0, 0.02407],
//! ]);
//!
//! // Front ordered by gateways; volume over the (energy, UF) plane,
//! // lifted by gateways.
//! let report = compare(&[exact], &Sense::minimize_all(3), 0, 0, (1, 2)).unwrap();
//! let summary = &report["exact"];
//! assert_eq!(summary.front_size, 5);
//! assert!(summary.volume > 0.0);
//! ```
//!
//! # Core Concepts
//!
//! | Type | Role |
//! |------|------|
//! | [`Sense`] | Whether an objective is minimized or maximized. |
//! | [`dominance::dominates`] | Pareto dominance between two objective vectors. |
//! | [`ParetoFront`](pareto::ParetoFront) | Ordered non-dominated subset, from [`pareto::extract_front`]. |
//! | [`Triangulator`](triangulation::Triangulator) | Planar Delaunay triangulation backend. |
//! | [`VolumeEstimator`](volume::VolumeEstimator) | Triangulated volume metric of a front. |
//! | [`Comparison`] | Run configuration; turns [`SolverResult`]s into a [`ComparisonReport`]. |
//!
//! # Feature Flags
//!
//! | Flag | What it enables | Default |
//! |------|----------------|---------|
//! | `serde` | `Serialize`/`Deserialize` on public types, [`ComparisonReport::save`]/[`ComparisonReport::load`] | off |
//! | `parallel` | Solvers summarized on the rayon thread pool in [`Comparison::run`] | off |
//! | `tracing` | Structured log events via [`tracing`](https://docs.rs/tracing) at each stage | off |

/// Emit a `tracing::info!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_info {
    ($($arg:tt)*) => { tracing::info!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_info {
    ($($arg:tt)*) => {};
}

/// Emit a `tracing::debug!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_debug {
    ($($arg:tt)*) => { tracing::debug!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_debug {
    ($($arg:tt)*) => {};
}

mod comparison;
pub mod dominance;
mod error;
pub mod pareto;
pub mod triangulation;
mod types;
pub mod volume;

pub use comparison::{
    Comparison, ComparisonBuilder, ComparisonReport, SolverResult, SolverSummary, compare,
};
pub use error::{Error, Result};
pub use types::{ObjectiveVector, Sense};

/// Convenient wildcard import for the most common types.
///
/// ```
/// use pareto_compare::prelude::*;
/// ```
pub mod prelude {
    pub use crate::comparison::{
        Comparison, ComparisonBuilder, ComparisonReport, SolverResult, SolverSummary, compare,
    };
    pub use crate::dominance::dominates;
    pub use crate::error::{Error, Result};
    pub use crate::pareto::{ParetoFront, dedup, extract_front, projected_front};
    pub use crate::triangulation::{Delaunator, Point2, Simplex, Triangulator};
    pub use crate::types::{ObjectiveVector, Sense};
    pub use crate::volume::{DuplicatePolicy, VolumeEstimator, estimate_volume};
}

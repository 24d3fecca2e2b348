//! Cross-solver comparison of Pareto fronts and their volume metrics.
//!
//! A [`Comparison`] holds one run configuration (objective senses, the
//! ordering key, and a [`VolumeEstimator`]). [`Comparison::run`] takes one
//! [`SolverResult`] per solver and returns a [`ComparisonReport`] mapping
//! each solver label to its front, front size, and volume.
//!
//! Each solver is processed independently, so the order of the results
//! does not affect any individual summary. Ranking across solvers is left
//! to the caller; [`ComparisonReport::ranked`] offers the usual ordering.
//!
//! # Examples
//!
//! ```
//! use pareto_compare::prelude::*;
//!
//! // Objectives: gateways, energy, utilization factor.
//! let exact = SolverResult::new("exact", vec![
//!     vec![10.0, 687.0, 0.01002],
//!     vec![8.0, 767.0, 0.01101],
//!     vec![6.0, 904.0, 0.01205],
//!     vec![5.0, 1016.0, 0.01906],
//! ]);
//! let greedy = SolverResult::new("greedy", vec![
//!     vec![12.0, 752.0, 0.012529],
//!     vec![10.0, 789.0, 0.014530],
//! ]);
//!
//! let comparison = Comparison::builder()
//!     .minimize_all(3)
//!     .height_dimension(0)
//!     .base_dimensions(1, 2)
//!     .build()
//!     .unwrap();
//! let report = comparison.run(&[exact, greedy]).unwrap();
//!
//! assert_eq!(report["greedy"].front_size, 2);
//! assert!(report["greedy"].volume.abs() < f64::EPSILON); // two points: degenerate
//! assert_eq!(report.ranked()[0].0, "exact");
//! ```

mod builder;
mod export;
#[cfg(feature = "serde")]
mod persistence;

use std::collections::BTreeMap;

pub use builder::ComparisonBuilder;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::pareto::{ParetoFront, extract_front};
use crate::types::{ObjectiveVector, Sense};
use crate::volume::VolumeEstimator;

/// The objective vectors one solver produced.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SolverResult {
    /// The solver identity, unique within a comparison.
    pub label: String,
    /// One objective vector per solution the solver reported.
    pub vectors: Vec<ObjectiveVector>,
}

impl SolverResult {
    /// Creates a solver result.
    #[must_use]
    pub fn new(label: impl Into<String>, vectors: Vec<ObjectiveVector>) -> Self {
        Self {
            label: label.into(),
            vectors,
        }
    }
}

/// Per-solver outcome of a comparison.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SolverSummary {
    /// The solver's Pareto front.
    pub front: ParetoFront,
    /// The triangulated volume metric of the front.
    pub volume: f64,
    /// Number of front members, duplicates included.
    pub front_size: usize,
}

/// Solver label -> summary, iterated in label order.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ComparisonReport {
    solvers: BTreeMap<String, SolverSummary>,
}

impl ComparisonReport {
    /// Returns the summary for `label`.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<&SolverSummary> {
        self.solvers.get(label)
    }

    /// Number of solvers in the report.
    #[must_use]
    pub fn len(&self) -> usize {
        self.solvers.len()
    }

    /// Returns `true` if no solver was compared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.solvers.is_empty()
    }

    /// Iterates over `(label, summary)` pairs in label order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SolverSummary)> {
        self.solvers.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Solver labels in label order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.solvers.keys().map(String::as_str)
    }

    /// Solvers ordered best first: volume descending, then front size
    /// descending, then label ascending.
    #[must_use]
    pub fn ranked(&self) -> Vec<(&str, &SolverSummary)> {
        let mut ranked: Vec<_> = self.iter().collect();
        ranked.sort_by(|(la, a), (lb, b)| {
            b.volume
                .total_cmp(&a.volume)
                .then(b.front_size.cmp(&a.front_size))
                .then_with(|| la.cmp(lb))
        });
        ranked
    }

    /// Consumes the report, returning the underlying map.
    #[must_use]
    pub fn into_inner(self) -> BTreeMap<String, SolverSummary> {
        self.solvers
    }
}

impl core::ops::Index<&str> for ComparisonReport {
    type Output = SolverSummary;

    /// # Panics
    ///
    /// Panics if `label` is not in the report.
    fn index(&self, label: &str) -> &SolverSummary {
        &self.solvers[label]
    }
}

impl<'a> IntoIterator for &'a ComparisonReport {
    type Item = (&'a String, &'a SolverSummary);
    type IntoIter = std::collections::btree_map::Iter<'a, String, SolverSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.solvers.iter()
    }
}

/// A validated comparison configuration.
///
/// Created via [`Comparison::builder()`]. Cheap to clone and safe to share
/// across threads.
#[derive(Clone, Debug)]
pub struct Comparison {
    senses: Vec<Sense>,
    primary_key: usize,
    estimator: VolumeEstimator,
}

impl Comparison {
    /// Returns a builder with default settings.
    #[must_use]
    pub fn builder() -> ComparisonBuilder {
        ComparisonBuilder::new()
    }

    /// The per-objective senses.
    #[must_use]
    pub fn senses(&self) -> &[Sense] {
        &self.senses
    }

    /// The objective fronts are ordered by.
    #[must_use]
    pub fn primary_key(&self) -> usize {
        self.primary_key
    }

    /// The volume estimator applied to each front.
    #[must_use]
    pub fn estimator(&self) -> &VolumeEstimator {
        &self.estimator
    }

    /// Extract the front of one solver and measure its volume.
    ///
    /// # Errors
    ///
    /// Returns the structural errors of
    /// [`extract_front`](crate::pareto::extract_front) and
    /// [`VolumeEstimator::estimate`].
    pub fn summarize(&self, result: &SolverResult) -> Result<SolverSummary> {
        let front = extract_front(&result.vectors, &self.senses, self.primary_key)?;
        let volume = self.estimator.estimate(&front)?;
        let front_size = front.len();

        trace_debug!(
            solver = %result.label,
            front_size,
            volume,
            "solver summarized"
        );

        Ok(SolverSummary {
            front,
            volume,
            front_size,
        })
    }

    /// Summarize every solver.
    ///
    /// With the `parallel` feature, solvers are summarized on the rayon
    /// thread pool; the report is the same either way.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateLabel`] if two results share a label, or
    /// the first error [`summarize`](Self::summarize) reports.
    pub fn run(&self, results: &[SolverResult]) -> Result<ComparisonReport> {
        for (i, r) in results.iter().enumerate() {
            if results[..i].iter().any(|other| other.label == r.label) {
                return Err(Error::DuplicateLabel(r.label.clone()));
            }
        }

        #[cfg(feature = "parallel")]
        let summaries: Vec<SolverSummary> = {
            use rayon::prelude::*;
            results
                .par_iter()
                .map(|r| self.summarize(r))
                .collect::<Result<_>>()?
        };
        #[cfg(not(feature = "parallel"))]
        let summaries: Vec<SolverSummary> = results
            .iter()
            .map(|r| self.summarize(r))
            .collect::<Result<_>>()?;

        let solvers: BTreeMap<String, SolverSummary> = results
            .iter()
            .map(|r| r.label.clone())
            .zip(summaries)
            .collect();

        trace_info!(solvers = solvers.len(), "comparison finished");

        Ok(ComparisonReport { solvers })
    }
}

/// Compare solvers in one call.
///
/// Shorthand for building a [`Comparison`] with the given settings and the
/// default duplicate policy and triangulator, then running it.
///
/// # Errors
///
/// Returns the validation errors of [`ComparisonBuilder::build`] and the
/// errors of [`Comparison::run`].
pub fn compare(
    results: &[SolverResult],
    senses: &[Sense],
    primary_key: usize,
    height_dimension: usize,
    base_dimensions: (usize, usize),
) -> Result<ComparisonReport> {
    Comparison::builder()
        .senses(senses.to_vec())
        .primary_key(primary_key)
        .height_dimension(height_dimension)
        .base_dimensions(base_dimensions.0, base_dimensions.1)
        .build()?
        .run(results)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn results() -> Vec<SolverResult> {
        vec![
            SolverResult::new(
                "a",
                vec![
                    vec![1.0, 0.0, 2.0],
                    vec![1.0, 1.0, 0.5],
                    vec![1.0, 2.0, 0.0],
                    vec![2.0, 1.0, 1.0],
                ],
            ),
            SolverResult::new("b", vec![vec![1.0, 2.0, 3.0]]),
        ]
    }

    #[test]
    fn test_run_summaries() {
        let report = compare(&results(), &Sense::minimize_all(3), 0, 0, (1, 2)).unwrap();
        assert_eq!(report.len(), 2);

        let a = &report["a"];
        // (2, 1, 1) is dominated by (1, 1, 0.5).
        assert_eq!(a.front_size, 3);
        assert_eq!(a.front.len(), a.front_size);
        // Base triangle of area 0.5 at height 1: 1 * 0.5 / 3.
        assert!((a.volume - 1.0 / 6.0).abs() < 1e-12);

        let b = &report["b"];
        assert_eq!(b.front_size, 1);
        assert!(b.volume.abs() < f64::EPSILON);
    }

    #[test]
    fn test_ranked_order() {
        let report = compare(&results(), &Sense::minimize_all(3), 0, 0, (1, 2)).unwrap();
        let labels: Vec<&str> = report.ranked().into_iter().map(|(l, _)| l).collect();
        assert_eq!(labels, vec!["a", "b"]);
    }

    #[test]
    fn test_ranked_ties_by_size_then_label() {
        let report = compare(
            &[
                SolverResult::new("z", vec![vec![1.0, 1.0, 1.0]]),
                SolverResult::new("y", vec![vec![1.0, 1.0, 1.0]]),
                SolverResult::new("x", vec![vec![0.0, 1.0, 2.0], vec![0.0, 2.0, 1.0]]),
            ],
            &Sense::minimize_all(3),
            0,
            0,
            (1, 2),
        )
        .unwrap();
        let labels: Vec<&str> = report.ranked().into_iter().map(|(l, _)| l).collect();
        assert_eq!(labels, vec!["x", "y", "z"]);
    }

    #[test]
    fn test_duplicate_label_rejected() {
        let mut rs = results();
        rs.push(SolverResult::new("a", vec![]));
        let err = compare(&rs, &Sense::minimize_all(3), 0, 0, (1, 2)).unwrap_err();
        assert!(matches!(err, Error::DuplicateLabel(l) if l == "a"));
    }

    #[test]
    fn test_empty_results() {
        let report = compare(&[], &Sense::minimize_all(3), 0, 0, (1, 2)).unwrap();
        assert!(report.is_empty());
    }

    #[test]
    fn test_shape_error_surfaces() {
        let rs = vec![SolverResult::new("bad", vec![vec![1.0, 2.0]])];
        let err = compare(&rs, &Sense::minimize_all(3), 0, 0, (1, 2)).unwrap_err();
        assert!(matches!(err, Error::ShapeMismatch { .. }));
    }
}

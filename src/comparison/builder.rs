use std::sync::Arc;

use crate::error::{Error, Result};
use crate::pareto::check_index;
use crate::triangulation::Triangulator;
use crate::types::Sense;
use crate::volume::{DuplicatePolicy, VolumeEstimator};

use super::Comparison;

/// A builder for constructing [`Comparison`] instances with a fluent API.
///
/// Created via [`Comparison::builder()`]. Collects the objective senses,
/// ordering key, and volume settings, and validates them together in
/// [`build`](Self::build).
///
/// # Defaults
///
/// - Senses: none (must be set)
/// - Primary key: objective `0`
/// - Height objective: `0`
/// - Base objectives: `(1, 2)`
/// - Duplicate policy: [`DuplicatePolicy::KeepFirst`]
/// - Triangulator: [`Delaunator`](crate::triangulation::Delaunator)
///
/// # Examples
///
/// ```
/// use pareto_compare::prelude::*;
///
/// let comparison = Comparison::builder()
///     .senses(vec![Sense::Minimize, Sense::Minimize, Sense::Maximize])
///     .primary_key(1)
///     .duplicate_policy(DuplicatePolicy::Jitter { scale: 1e-9, seed: 7 })
///     .build()
///     .unwrap();
///
/// assert_eq!(comparison.primary_key(), 1);
/// assert_eq!(comparison.estimator().base_dimensions(), (1, 2));
/// ```
pub struct ComparisonBuilder {
    senses: Vec<Sense>,
    primary_key: usize,
    height_dimension: usize,
    base_dimensions: (usize, usize),
    duplicate_policy: DuplicatePolicy,
    triangulator: Option<Box<dyn Triangulator>>,
}

impl ComparisonBuilder {
    pub(super) fn new() -> Self {
        Self {
            senses: Vec::new(),
            primary_key: 0,
            height_dimension: 0,
            base_dimensions: (1, 2),
            duplicate_policy: DuplicatePolicy::default(),
            triangulator: None,
        }
    }

    /// Set the sense of every objective.
    #[must_use]
    pub fn senses(mut self, senses: Vec<Sense>) -> Self {
        self.senses = senses;
        self
    }

    /// Minimize all `n` objectives.
    #[must_use]
    pub fn minimize_all(mut self, n: usize) -> Self {
        self.senses = Sense::minimize_all(n);
        self
    }

    /// Set the objective fronts are sorted by.
    #[must_use]
    pub fn primary_key(mut self, index: usize) -> Self {
        self.primary_key = index;
        self
    }

    /// Set the objective used as height by the volume metric.
    #[must_use]
    pub fn height_dimension(mut self, index: usize) -> Self {
        self.height_dimension = index;
        self
    }

    /// Set the two objectives spanning the triangulation plane.
    #[must_use]
    pub fn base_dimensions(mut self, x: usize, y: usize) -> Self {
        self.base_dimensions = (x, y);
        self
    }

    /// Set how front members with identical base coordinates are handled.
    #[must_use]
    pub fn duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }

    /// Set a custom triangulation backend.
    #[must_use]
    pub fn triangulator(mut self, triangulator: impl Triangulator + 'static) -> Self {
        self.triangulator = Some(Box::new(triangulator));
        self
    }

    /// Validate the settings and build the [`Comparison`].
    ///
    /// # Errors
    ///
    /// - [`Error::DimensionOutOfRange`] if the primary key, height, or a
    ///   base objective is not below the number of senses.
    /// - [`Error::DuplicateBaseDimensions`] if both base objectives are equal.
    /// - [`Error::InvalidJitterScale`] if the duplicate policy jitters by a
    ///   negative or non-finite scale.
    pub fn build(self) -> Result<Comparison> {
        let n = self.senses.len();
        let (bx, by) = self.base_dimensions;
        check_index(self.primary_key, n)?;
        check_index(self.height_dimension, n)?;
        check_index(bx, n)?;
        check_index(by, n)?;
        if bx == by {
            return Err(Error::DuplicateBaseDimensions(bx));
        }
        self.duplicate_policy.validate()?;

        let mut estimator = VolumeEstimator::new(self.height_dimension, self.base_dimensions)
            .duplicate_policy(self.duplicate_policy);
        if let Some(triangulator) = self.triangulator {
            estimator = estimator.shared_triangulator(Arc::from(triangulator));
        }

        Ok(Comparison {
            senses: self.senses,
            primary_key: self.primary_key,
            estimator,
        })
    }
}

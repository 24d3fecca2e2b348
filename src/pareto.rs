//! Pareto front extraction.
//!
//! Given a collection of objective vectors, the **Pareto front** is the
//! subset that no other member of the collection dominates. This module
//! extracts that subset and orders it deterministically so that fronts
//! computed from permuted inputs compare equal.
//!
//! # Available functions
//!
//! | Function | Purpose |
//! |---|---|
//! | [`extract_front`] | Non-dominated subset, sorted by a primary key dimension |
//! | [`extract_front_indices`] | Same, as indices into the input |
//! | [`dedup`] | Drop exact duplicate vectors, keeping first occurrences |
//! | [`project`] | Select a subset of objective columns |
//! | [`projected_front`] | Front of a projection onto chosen objectives |
//!
//! # Duplicates
//!
//! Two identical vectors do not dominate each other, so **both** survive
//! into the front. Call [`dedup`] first if one copy is wanted.
//!
//! # Example
//!
//! ```
//! use pareto_compare::Sense;
//! use pareto_compare::pareto::extract_front;
//!
//! let vectors = vec![
//!     vec![1.0, 5.0],
//!     vec![2.0, 3.0], // dominated by (2, 2)
//!     vec![3.0, 1.0],
//!     vec![2.0, 2.0],
//! ];
//! let front = extract_front(&vectors, &Sense::minimize_all(2), 0).unwrap();
//! assert_eq!(front.members(), &[vec![1.0, 5.0], vec![2.0, 2.0], vec![3.0, 1.0]]);
//! ```

use core::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::dominance::{check_shape, dominates_unchecked};
use crate::error::{Error, Result};
use crate::types::{ObjectiveVector, Sense};

/// An ordered, pairwise non-dominated sequence of objective vectors.
///
/// Members are sorted ascending by the primary key dimension the front was
/// extracted with, ties broken by the remaining dimensions in declared
/// order.
///
/// With the `serde` feature a front serializes as a plain array of
/// vectors. Deserializing checks that every member has the same length
/// and only finite values. Order and mutual non-dominance depend on the
/// senses and primary key, which are not stored, so a loaded front is
/// trusted on those.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "StoredFront", into = "StoredFront")
)]
pub struct ParetoFront {
    members: Vec<ObjectiveVector>,
}

/// On-disk form of a [`ParetoFront`].
#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
struct StoredFront(Vec<ObjectiveVector>);

#[cfg(feature = "serde")]
impl From<ParetoFront> for StoredFront {
    fn from(front: ParetoFront) -> Self {
        Self(front.members)
    }
}

#[cfg(feature = "serde")]
impl TryFrom<StoredFront> for ParetoFront {
    type Error = Error;

    fn try_from(StoredFront(members): StoredFront) -> Result<Self> {
        if let Some(first) = members.first() {
            let width = first.len();
            for (index, v) in members.iter().enumerate() {
                if v.len() != width {
                    return Err(Error::ShapeMismatch {
                        expected: width,
                        got: v.len(),
                    });
                }
                if let Some(dimension) = v.iter().position(|x| !x.is_finite()) {
                    return Err(Error::NonFiniteValue { index, dimension });
                }
            }
        }
        Ok(Self { members })
    }
}

impl ParetoFront {
    #[cfg(test)]
    pub(crate) fn from_unchecked(members: Vec<ObjectiveVector>) -> Self {
        Self { members }
    }

    /// Returns the members in front order.
    #[must_use]
    pub fn members(&self) -> &[ObjectiveVector] {
        &self.members
    }

    /// Number of members, duplicates included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` if the front has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Iterates over the members in front order.
    pub fn iter(&self) -> core::slice::Iter<'_, ObjectiveVector> {
        self.members.iter()
    }

    /// Consumes the front, returning its members.
    #[must_use]
    pub fn into_members(self) -> Vec<ObjectiveVector> {
        self.members
    }

    /// Returns one column of the front.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionOutOfRange`] if any member is too short.
    pub fn column(&self, dimension: usize) -> Result<Vec<f64>> {
        self.members
            .iter()
            .map(|m| {
                m.get(dimension).copied().ok_or(Error::DimensionOutOfRange {
                    index: dimension,
                    dimensions: m.len(),
                })
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a ParetoFront {
    type Item = &'a ObjectiveVector;
    type IntoIter = core::slice::Iter<'a, ObjectiveVector>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

impl AsRef<[ObjectiveVector]> for ParetoFront {
    fn as_ref(&self) -> &[ObjectiveVector] {
        &self.members
    }
}

/// Extract the Pareto front of `vectors`.
///
/// Every candidate is checked against every other input (by position, not
/// by value) and dropped if any of them dominates it. The survivors are
/// sorted ascending by `primary_key`, then by the remaining dimensions in
/// declared order.
///
/// This is the quadratic pairwise scan: O(n² · d) for n vectors of d
/// objectives. An empty input gives an empty front; a single vector is
/// always its own front.
///
/// # Errors
///
/// - [`Error::DimensionOutOfRange`] if `primary_key >= senses.len()`.
/// - [`Error::ShapeMismatch`] if a vector's length differs from `senses`.
/// - [`Error::NonFiniteValue`] if a vector holds NaN or an infinity.
pub fn extract_front(
    vectors: &[ObjectiveVector],
    senses: &[Sense],
    primary_key: usize,
) -> Result<ParetoFront> {
    let indices = extract_front_indices(vectors, senses, primary_key)?;
    let members = indices.into_iter().map(|i| vectors[i].clone()).collect();
    Ok(ParetoFront { members })
}

/// Like [`extract_front`], but returns positions into `vectors`.
///
/// Useful when each vector carries side data (a run id, a parameter set)
/// the caller wants to keep alongside the front.
///
/// # Errors
///
/// Same as [`extract_front`].
pub fn extract_front_indices(
    vectors: &[ObjectiveVector],
    senses: &[Sense],
    primary_key: usize,
) -> Result<Vec<usize>> {
    check_index(primary_key, senses.len())?;
    validate(vectors, senses)?;

    let mut kept: Vec<usize> = (0..vectors.len())
        .filter(|&i| {
            !vectors
                .iter()
                .enumerate()
                .any(|(j, w)| j != i && dominates_unchecked(w, &vectors[i], senses))
        })
        .collect();

    kept.sort_by(|&a, &b| front_order(&vectors[a], &vectors[b], primary_key));

    trace_debug!(
        candidates = vectors.len(),
        front_size = kept.len(),
        "front extracted"
    );

    Ok(kept)
}

/// Remove exact duplicates, keeping the first occurrence of each vector.
///
/// Relative order of the kept vectors is preserved.
#[must_use]
pub fn dedup(vectors: &[ObjectiveVector]) -> Vec<ObjectiveVector> {
    let mut out: Vec<ObjectiveVector> = Vec::with_capacity(vectors.len());
    for v in vectors {
        if !out.iter().any(|u| u == v) {
            out.push(v.clone());
        }
    }
    out
}

/// Select the objective columns `dimensions` (in that order) from each vector.
///
/// # Errors
///
/// Returns [`Error::DimensionOutOfRange`] if a vector has no such column.
pub fn project(vectors: &[ObjectiveVector], dimensions: &[usize]) -> Result<Vec<ObjectiveVector>> {
    vectors
        .iter()
        .map(|v| {
            dimensions
                .iter()
                .map(|&d| {
                    v.get(d).copied().ok_or(Error::DimensionOutOfRange {
                        index: d,
                        dimensions: v.len(),
                    })
                })
                .collect::<Result<ObjectiveVector>>()
        })
        .collect()
}

/// Front of `vectors` projected onto `dimensions`.
///
/// `senses` describes the full vectors; the senses of the selected
/// dimensions are carried over. `primary_key` indexes the **projected**
/// vectors, so `projected_front(v, &[1, 0], s, 0)` orders by the original
/// dimension 1.
///
/// # Errors
///
/// Same as [`extract_front`], checked against the full vectors, plus
/// [`Error::DimensionOutOfRange`] for a bad entry in `dimensions`.
pub fn projected_front(
    vectors: &[ObjectiveVector],
    dimensions: &[usize],
    senses: &[Sense],
    primary_key: usize,
) -> Result<ParetoFront> {
    validate(vectors, senses)?;
    for &d in dimensions {
        check_index(d, senses.len())?;
    }
    let projected_senses: Vec<Sense> = dimensions.iter().map(|&d| senses[d]).collect();
    let projected = project(vectors, dimensions)?;
    extract_front(&projected, &projected_senses, primary_key)
}

/// Fails unless every vector matches `senses` in length and is finite.
pub(crate) fn validate(vectors: &[ObjectiveVector], senses: &[Sense]) -> Result<()> {
    for (index, v) in vectors.iter().enumerate() {
        check_shape(v, senses)?;
        if let Some(dimension) = v.iter().position(|x| !x.is_finite()) {
            return Err(Error::NonFiniteValue { index, dimension });
        }
    }
    Ok(())
}

pub(crate) fn check_index(index: usize, dimensions: usize) -> Result<()> {
    if index < dimensions {
        Ok(())
    } else {
        Err(Error::DimensionOutOfRange { index, dimensions })
    }
}

/// Primary key first, then the other dimensions in declared order.
fn front_order(a: &[f64], b: &[f64], primary_key: usize) -> Ordering {
    a[primary_key].total_cmp(&b[primary_key]).then_with(|| {
        a.iter()
            .zip(b)
            .enumerate()
            .filter(|&(d, _)| d != primary_key)
            .map(|(_, (x, y))| x.total_cmp(y))
            .find(|o| o.is_ne())
            .unwrap_or(Ordering::Equal)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn min(n: usize) -> Vec<Sense> {
        Sense::minimize_all(n)
    }

    #[test]
    fn test_known_front() {
        let values = vec![
            vec![1.0, 5.0],
            vec![2.0, 3.0],
            vec![3.0, 1.0],
            vec![2.0, 2.0],
        ];
        let front = extract_front(&values, &min(2), 0).unwrap();
        assert_eq!(
            front.members(),
            &[vec![1.0, 5.0], vec![2.0, 2.0], vec![3.0, 1.0]]
        );
    }

    #[test]
    fn test_indices_in_front_order() {
        let values = vec![
            vec![3.0, 1.0],
            vec![4.0, 4.0],
            vec![1.0, 5.0],
            vec![2.0, 2.0],
        ];
        let idx = extract_front_indices(&values, &min(2), 0).unwrap();
        assert_eq!(idx, vec![2, 3, 0]);
    }

    #[test]
    fn test_empty_input() {
        let front = extract_front(&[], &min(3), 0).unwrap();
        assert!(front.is_empty());
    }

    #[test]
    fn test_single_vector_survives() {
        let front = extract_front(&[vec![7.0, 7.0]], &min(2), 1).unwrap();
        assert_eq!(front.len(), 1);
    }

    #[test]
    fn test_duplicates_both_kept() {
        let values = vec![vec![1.0, 1.0, 1.0], vec![1.0, 1.0, 1.0]];
        let front = extract_front(&values, &min(3), 0).unwrap();
        assert_eq!(front.len(), 2);
    }

    #[test]
    fn test_duplicates_of_dominated_vector_dropped() {
        let values = vec![vec![2.0, 2.0], vec![2.0, 2.0], vec![1.0, 1.0]];
        let front = extract_front(&values, &min(2), 0).unwrap();
        assert_eq!(front.members(), &[vec![1.0, 1.0]]);
    }

    #[test]
    fn test_maximize_sense() {
        let senses = [Sense::Minimize, Sense::Maximize];
        let values = vec![vec![1.0, 1.0], vec![1.0, 2.0], vec![0.5, 0.5]];
        let front = extract_front(&values, &senses, 0).unwrap();
        assert_eq!(front.members(), &[vec![0.5, 0.5], vec![1.0, 2.0]]);
    }

    #[test]
    fn test_sort_by_primary_key_then_declared_order() {
        // Mutually non-dominated in 3 objectives.
        let values = vec![
            vec![2.0, 1.0, 9.0],
            vec![1.0, 9.0, 1.0],
            vec![2.0, 0.5, 10.0],
            vec![3.0, 0.1, 0.1],
        ];
        let front = extract_front(&values, &min(3), 1).unwrap();
        let keys: Vec<f64> = front.column(1).unwrap();
        assert_eq!(keys, vec![0.1, 0.5, 1.0, 9.0]);
    }

    #[test]
    fn test_tie_break_skips_primary_key() {
        let values = vec![vec![5.0, 1.0, 2.0], vec![4.0, 1.0, 3.0]];
        // Both non-dominated; primary key 1 ties, dimension 0 decides.
        let front = extract_front(&values, &min(3), 1).unwrap();
        assert_eq!(front.members()[0], vec![4.0, 1.0, 3.0]);
    }

    #[test]
    fn test_primary_key_out_of_range() {
        let err = extract_front(&[vec![1.0]], &min(1), 1).unwrap_err();
        assert!(matches!(
            err,
            Error::DimensionOutOfRange {
                index: 1,
                dimensions: 1
            }
        ));
    }

    #[test]
    fn test_shape_mismatch() {
        let err = extract_front(&[vec![1.0, 2.0], vec![1.0]], &min(2), 0).unwrap_err();
        assert!(matches!(err, Error::ShapeMismatch { .. }));
    }

    #[test]
    fn test_non_finite_rejected() {
        let err = extract_front(&[vec![1.0, 2.0], vec![f64::NAN, 0.0]], &min(2), 0).unwrap_err();
        assert!(matches!(
            err,
            Error::NonFiniteValue {
                index: 1,
                dimension: 0
            }
        ));
    }

    #[test]
    fn test_dedup_keeps_first() {
        let values = vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![1.0, 2.0]];
        assert_eq!(dedup(&values), vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
    }

    #[test]
    fn test_project_reorders_columns() {
        let values = vec![vec![1.0, 2.0, 3.0]];
        assert_eq!(project(&values, &[2, 0]).unwrap(), vec![vec![3.0, 1.0]]);
        assert!(project(&values, &[3]).is_err());
    }

    #[test]
    fn test_projected_front() {
        // GW, E, UF
        let values = vec![
            vec![10.0, 687.0, 0.010],
            vec![8.0, 767.0, 0.011],
            vec![9.0, 800.0, 0.009],
        ];
        // E vs GW: (800, 9) is dominated by (767, 8).
        let front = projected_front(&values, &[1, 0], &min(3), 0).unwrap();
        assert_eq!(front.members(), &[vec![687.0, 10.0], vec![767.0, 8.0]]);
    }
}

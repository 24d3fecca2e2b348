//! Pareto dominance between objective vectors.
//!
//! A vector **dominates** another if it is at least as good in every
//! objective and strictly better in at least one, where "good" follows the
//! per-objective [`Sense`]. The relation is a strict partial order:
//! irreflexive, asymmetric, and transitive. Two equal vectors never
//! dominate each other.
//!
//! ```
//! use pareto_compare::Sense;
//! use pareto_compare::dominance::dominates;
//!
//! let senses = [Sense::Minimize, Sense::Maximize];
//! assert!(dominates(&[1.0, 5.0], &[2.0, 4.0], &senses).unwrap());
//! assert!(!dominates(&[1.0, 5.0], &[1.0, 5.0], &senses).unwrap());
//! ```

use crate::error::{Error, Result};
use crate::types::Sense;

/// Returns `true` if `a` Pareto-dominates `b` under `senses`.
///
/// # Errors
///
/// Returns [`Error::ShapeMismatch`] if `a`, `b`, and `senses` do not all
/// have the same length.
pub fn dominates(a: &[f64], b: &[f64], senses: &[Sense]) -> Result<bool> {
    check_shape(a, senses)?;
    check_shape(b, senses)?;
    Ok(dominates_unchecked(a, b, senses))
}

/// Fails with [`Error::ShapeMismatch`] unless `v` has one value per sense.
pub fn check_shape(v: &[f64], senses: &[Sense]) -> Result<()> {
    if v.len() == senses.len() {
        Ok(())
    } else {
        Err(Error::ShapeMismatch {
            expected: senses.len(),
            got: v.len(),
        })
    }
}

/// Dominance test without shape validation.
///
/// Callers must have checked the shapes already; extra trailing values are
/// ignored by the zip.
pub(crate) fn dominates_unchecked(a: &[f64], b: &[f64], senses: &[Sense]) -> bool {
    debug_assert_eq!(a.len(), b.len());
    debug_assert_eq!(a.len(), senses.len());

    let mut strictly_better = false;
    for ((&av, &bv), sense) in a.iter().zip(b).zip(senses) {
        let (av, bv) = (sense.normalize(av), sense.normalize(bv));
        if av > bv {
            return false;
        }
        if av < bv {
            strictly_better = true;
        }
    }
    strictly_better
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIN2: [Sense; 2] = [Sense::Minimize, Sense::Minimize];

    #[test]
    fn test_dominates_basic() {
        assert!(dominates(&[1.0, 1.0], &[2.0, 2.0], &MIN2).unwrap());
        assert!(!dominates(&[2.0, 2.0], &[1.0, 1.0], &MIN2).unwrap());
        assert!(!dominates(&[1.0, 1.0], &[1.0, 1.0], &MIN2).unwrap());
    }

    #[test]
    fn test_dominates_weakly_better() {
        // Equal in x, better in y.
        assert!(dominates(&[2.0, 2.0], &[2.0, 3.0], &MIN2).unwrap());
        assert!(!dominates(&[2.0, 3.0], &[2.0, 2.0], &MIN2).unwrap());
    }

    #[test]
    fn test_dominates_incomparable() {
        assert!(!dominates(&[1.0, 3.0], &[3.0, 1.0], &MIN2).unwrap());
        assert!(!dominates(&[3.0, 1.0], &[1.0, 3.0], &MIN2).unwrap());
    }

    #[test]
    fn test_dominates_maximize() {
        let senses = [Sense::Maximize, Sense::Minimize];
        assert!(dominates(&[5.0, 1.0], &[3.0, 2.0], &senses).unwrap());
        assert!(!dominates(&[3.0, 2.0], &[5.0, 1.0], &senses).unwrap());
    }

    #[test]
    fn test_shape_mismatch() {
        let err = dominates(&[1.0, 2.0, 3.0], &[1.0, 2.0], &MIN2).unwrap_err();
        assert!(matches!(
            err,
            Error::ShapeMismatch {
                expected: 2,
                got: 3
            }
        ));
        let err = dominates(&[1.0, 2.0], &[1.0], &MIN2).unwrap_err();
        assert!(matches!(
            err,
            Error::ShapeMismatch {
                expected: 2,
                got: 1
            }
        ));
    }

    #[test]
    fn test_empty_vectors_never_dominate() {
        assert!(!dominates(&[], &[], &[]).unwrap());
    }
}

//! Core types shared by every stage of a comparison.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One objective vector, e.g. `[gateways, energy, utilization]`.
pub type ObjectiveVector = Vec<f64>;

/// The optimization sense of a single objective.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Sense {
    /// Smaller values are better.
    Minimize,
    /// Larger values are better.
    Maximize,
}

impl Sense {
    /// Map `value` into minimize-space: unchanged for [`Minimize`](Self::Minimize),
    /// negated for [`Maximize`](Self::Maximize).
    #[must_use]
    #[inline]
    pub fn normalize(self, value: f64) -> f64 {
        match self {
            Self::Minimize => value,
            Self::Maximize => -value,
        }
    }

    /// Build a sense vector with `n` minimized objectives.
    #[must_use]
    pub fn minimize_all(n: usize) -> Vec<Self> {
        vec![Self::Minimize; n]
    }
}

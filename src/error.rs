use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors raised by the numeric primitives in [`crate::primitives`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NumericError {
    /// `seq`'s step sign can't reach `stop` from `start` (or the step is
    /// zero).
    BadStep,
    /// `bisect_find_strict` found no interior solution: the predicate was
    /// false at 0, or true across the whole range.
    OutOfRange,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadStep => write!(f, "step sign is incompatible with start/stop direction"),
            Self::OutOfRange => write!(f, "no solution within the searched range"),
        }
    }
}

/// Raised by [`crate::validator::CeilingValidator`] when a dive step's
/// ambient pressure is strictly below its ascent ceiling.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EngineError {
    CeilingViolated { pressure: f64, ceiling: f64 },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CeilingViolated { pressure, ceiling } => write!(
                f,
                "ambient pressure {pressure} bar is below the ascent ceiling of {ceiling} bar"
            ),
        }
    }
}

/// A single invalid [`crate::model::ModelConfig`] field, named and explained
/// rather than collapsed into one opaque message.
#[derive(Debug, PartialEq, Eq)]
pub struct ConfigValidationErr {
    pub field: &'static str,
    pub reason: &'static str,
}

impl ConfigValidationErr {
    pub const fn new(field: &'static str, reason: &'static str) -> Self {
        Self { field, reason }
    }
}

impl fmt::Display for ConfigValidationErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid config field [{}]: {}", self.field, self.reason)
    }
}

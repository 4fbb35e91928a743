//! Gas mix value type.
//!
//! O2, He, N2 percentages. The core only consumes the nitrogen fraction.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A breathing gas mix, fractions expressed as percentages (`[0, 100]`).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Gas {
    o2: f64,
    he: f64,
    n2: f64,
}

impl fmt::Display for Gas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0}/{:.0}", self.o2, self.he)
    }
}

impl Gas {
    /// Construct a mix from O2 and He percentages; N2 is whatever remains.
    ///
    /// Panics if either fraction is outside `[0, 100]` or their sum exceeds
    /// 100, rather than returning a `Result` for these preconditions.
    pub fn new(o2_percent: f64, he_percent: f64) -> Self {
        if !(0.0..=100.0).contains(&o2_percent) {
            panic!("invalid O2 percentage [{o2_percent}]");
        }
        if !(0.0..=100.0).contains(&he_percent) {
            panic!("invalid He percentage [{he_percent}]");
        }
        if o2_percent + he_percent > 100.0 {
            panic!("invalid gas mix, O2 + He can't exceed 100%");
        }

        Self {
            o2: o2_percent,
            he: he_percent,
            n2: 100.0 - (o2_percent + he_percent),
        }
    }

    /// Standard air: 21% O2, 0% He.
    pub fn air() -> Self {
        Self::new(21.0, 0.0)
    }

    pub fn o2(&self) -> f64 {
        self.o2
    }

    pub fn he(&self) -> f64 {
        self.he
    }

    /// Nitrogen fraction as a percentage in `[0, 100]`.
    pub fn n2(&self) -> f64 {
        self.n2
    }
}

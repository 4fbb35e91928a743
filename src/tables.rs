//! Immutable ZH-L16 coefficient tables.
//!
//! Two parameterizations, same shape: sixteen-entry A/B/half-life vectors
//! for each inert gas. `ZHL_16B_GF` and `ZHL_16C_GF` differ only in their
//! numeric contents.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub const NUM_COMPARTMENTS: usize = 16;

/// One variant's full coefficient set: A, B, and half-life for both
/// nitrogen and helium, sixteen compartments each, index-aligned.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CoefficientSet {
    pub n2_a: [f64; NUM_COMPARTMENTS],
    pub n2_b: [f64; NUM_COMPARTMENTS],
    pub n2_half_life: [f64; NUM_COMPARTMENTS],
    pub he_a: [f64; NUM_COMPARTMENTS],
    pub he_b: [f64; NUM_COMPARTMENTS],
    pub he_half_life: [f64; NUM_COMPARTMENTS],
}

/// Which coefficient table a [`crate::model::Model`] is bound to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ZhlVariant {
    /// ZH-L16B-GF, tuned for table-based planning. Source: `gfdeco.f` by
    /// Eric Baker.
    B,
    /// ZH-L16C-GF, tuned for real-time dive computers. Source: OSTC
    /// firmware.
    C,
}

impl ZhlVariant {
    pub const fn coefficients(self) -> &'static CoefficientSet {
        match self {
            Self::B => &ZHL_16B_GF,
            Self::C => &ZHL_16C_GF,
        }
    }
}

pub const ZHL_16B_GF: CoefficientSet = CoefficientSet {
    n2_a: [
        1.1696, 1.0000, 0.8618, 0.7562, 0.6667, 0.5600, 0.4947, 0.4500, 0.4187, 0.3798, 0.3497,
        0.3223, 0.2850, 0.2737, 0.2523, 0.2327,
    ],
    n2_b: [
        0.5578, 0.6514, 0.7222, 0.7825, 0.8126, 0.8434, 0.8693, 0.8910, 0.9092, 0.9222, 0.9319,
        0.9403, 0.9477, 0.9544, 0.9602, 0.9653,
    ],
    n2_half_life: [
        5.0, 8.0, 12.5, 18.5, 27.0, 38.3, 54.3, 77.0, 109.0, 146.0, 187.0, 239.0, 305.0, 390.0,
        498.0, 635.0,
    ],
    he_a: [
        1.6189, 1.3830, 1.1919, 1.0458, 0.9220, 0.8205, 0.7305, 0.6502, 0.5950, 0.5545, 0.5333,
        0.5189, 0.5181, 0.5176, 0.5172, 0.5119,
    ],
    he_b: [
        0.4770, 0.5747, 0.6527, 0.7223, 0.7582, 0.7957, 0.8279, 0.8553, 0.8757, 0.8903, 0.8997,
        0.9073, 0.9122, 0.9171, 0.9217, 0.9267,
    ],
    he_half_life: [
        1.88, 3.02, 4.72, 6.99, 10.21, 14.48, 20.53, 29.11, 41.20, 55.19, 70.69, 90.34, 115.29,
        147.42, 188.24, 240.03,
    ],
};

pub const ZHL_16C_GF: CoefficientSet = CoefficientSet {
    n2_a: [
        1.2599, 1.0000, 0.8618, 0.7562, 0.6200, 0.5043, 0.4410, 0.4000, 0.3750, 0.3500, 0.3295,
        0.3065, 0.2835, 0.2610, 0.2480, 0.2327,
    ],
    n2_b: [
        0.5050, 0.6514, 0.7222, 0.7825, 0.8126, 0.8434, 0.8693, 0.8910, 0.9092, 0.9222, 0.9319,
        0.9403, 0.9477, 0.9544, 0.9602, 0.9653,
    ],
    n2_half_life: [
        4.0, 8.0, 12.5, 18.5, 27.0, 38.3, 54.3, 77.0, 109.0, 146.0, 187.0, 239.0, 305.0, 390.0,
        498.0, 635.0,
    ],
    he_a: [
        1.7424, 1.3830, 1.1919, 1.0458, 0.9220, 0.8205, 0.7305, 0.6502, 0.5950, 0.5545, 0.5333,
        0.5189, 0.5181, 0.5176, 0.5172, 0.5119,
    ],
    he_b: [
        0.4245, 0.5747, 0.6527, 0.7223, 0.7582, 0.7957, 0.8279, 0.8553, 0.8757, 0.8903, 0.8997,
        0.9073, 0.9122, 0.9171, 0.9217, 0.9267,
    ],
    he_half_life: [
        1.51, 3.02, 4.72, 6.99, 10.21, 14.48, 20.53, 29.11, 41.20, 55.19, 70.69, 90.34, 115.29,
        147.42, 188.24, 240.03,
    ],
};

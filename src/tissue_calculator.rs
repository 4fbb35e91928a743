//! Applies the Schreiner loader across a compartment table.

use crate::gas::Gas;
use crate::schreiner::eq_schreiner;

pub const WATER_VAPOUR_PRESSURE_DEFAULT: f64 = 0.0627;

/// Binds the Schreiner loader to a variant's N2 half-life table and a
/// water-vapour-pressure constant. Holds no mutable state.
#[derive(Clone, Copy, Debug)]
pub struct TissueCalculator {
    n2_half_life: [f64; 16],
    water_vapour_pressure: f64,
}

impl TissueCalculator {
    pub fn new(n2_half_life: [f64; 16], water_vapour_pressure: f64) -> Self {
        Self {
            n2_half_life,
            water_vapour_pressure,
        }
    }

    pub fn water_vapour_pressure(&self) -> f64 {
        self.water_vapour_pressure
    }

    /// Gas loading of a single compartment `k`.
    pub fn load_tissue(
        &self,
        abs_p: f64,
        time_s: f64,
        gas: &Gas,
        rate: f64,
        tissue_pressure: f64,
        k: usize,
    ) -> f64 {
        let half_life = self.n2_half_life[k];
        eq_schreiner(
            abs_p,
            time_s,
            gas.n2() / 100.0,
            rate,
            tissue_pressure,
            half_life,
            self.water_vapour_pressure,
        )
    }
}

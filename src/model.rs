//! Model state & API: `init`, `load`, `gf_limit`, `pressure_limit`.
//!
//! A validated config struct with builder methods, paired with a model
//! struct bound to a coefficient table at construction, generalized to two
//! interchangeable ZH-L16 variants and a gradient-factor-as-fraction
//! convention (`(0, 1.5]`).

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::ceiling::eq_gf_limit;
use crate::error::ConfigValidationErr;
use crate::gas::Gas;
use crate::tables::{NUM_COMPARTMENTS, ZhlVariant};
use crate::tissue_calculator::TissueCalculator;

const GF_RANGE_ERR_MSG: &str = "gradient factors must be in (0, 1.5]";
const GF_ORDER_ERR_MSG: &str = "gf_low can't be higher than gf_high";
const SURFACE_PRESSURE_ERR_MSG: &str = "surface pressure must be a positive bar value above water vapour pressure";
const WATER_VAPOUR_PRESSURE_ERR_MSG: &str = "water vapour pressure must be a positive bar value";

/// Gradient factors, surface pressure, water-vapour-pressure constant, and
/// the ZH-L16 variant a [`Model`] is bound to.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ModelConfig {
    pub gf_low: f64,
    pub gf_high: f64,
    pub surface_pressure: f64,
    pub water_vapour_pressure: f64,
    pub variant: ZhlVariant,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            gf_low: 0.30,
            gf_high: 0.85,
            surface_pressure: 1.01325,
            water_vapour_pressure: 0.0627,
            variant: ZhlVariant::C,
        }
    }
}

impl ModelConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_gradient_factors(mut self, gf_low: f64, gf_high: f64) -> Self {
        self.gf_low = gf_low;
        self.gf_high = gf_high;
        self
    }

    pub fn with_surface_pressure(mut self, surface_pressure: f64) -> Self {
        self.surface_pressure = surface_pressure;
        self
    }

    pub fn with_water_vapour_pressure(mut self, water_vapour_pressure: f64) -> Self {
        self.water_vapour_pressure = water_vapour_pressure;
        self
    }

    pub fn with_variant(mut self, variant: ZhlVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigValidationErr> {
        self.validate_gradient_factors()?;
        self.validate_water_vapour_pressure()?;
        self.validate_surface_pressure()?;
        Ok(())
    }

    fn validate_gradient_factors(&self) -> Result<(), ConfigValidationErr> {
        let in_range = |gf: f64| gf > 0.0 && gf <= 1.5;
        if !in_range(self.gf_low) || !in_range(self.gf_high) {
            return Err(ConfigValidationErr::new("gf", GF_RANGE_ERR_MSG));
        }
        if self.gf_low > self.gf_high {
            return Err(ConfigValidationErr::new("gf", GF_ORDER_ERR_MSG));
        }
        Ok(())
    }

    fn validate_water_vapour_pressure(&self) -> Result<(), ConfigValidationErr> {
        if self.water_vapour_pressure <= 0.0 {
            return Err(ConfigValidationErr::new(
                "water_vapour_pressure",
                WATER_VAPOUR_PRESSURE_ERR_MSG,
            ));
        }
        Ok(())
    }

    fn validate_surface_pressure(&self) -> Result<(), ConfigValidationErr> {
        if self.surface_pressure <= self.water_vapour_pressure {
            return Err(ConfigValidationErr::new(
                "surface_pressure",
                SURFACE_PRESSURE_ERR_MSG,
            ));
        }
        Ok(())
    }
}

/// Immutable inert-gas state: sixteen compartment pressures plus the
/// gradient-factor value the planner currently associates with this state.
/// Every [`Model`] loader returns a fresh `Data` rather than mutating its
/// input.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Data {
    tissues: [f64; NUM_COMPARTMENTS],
    gf: f64,
}

impl Data {
    pub fn tissues(&self) -> &[f64; NUM_COMPARTMENTS] {
        &self.tissues
    }

    pub fn gf(&self) -> f64 {
        self.gf
    }

    /// Replace the gradient-factor value carried by this state, leaving
    /// tissue pressures untouched. Planners call this as they walk from
    /// depth toward the surface.
    pub fn with_gf(mut self, gf: f64) -> Self {
        self.gf = gf;
        self
    }
}

impl fmt::Display for Data {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Data(gf={:.2}, tissues={:?})", self.gf, self.tissues)
    }
}

/// Bühlmann ZH-L16 model with Baker's gradient-factor extension, bound to
/// one coefficient variant and one pair of gradient factors.
#[derive(Clone, Copy, Debug)]
pub struct Model {
    config: ModelConfig,
    calc: TissueCalculator,
}

impl Model {
    /// Construct a model for `config`'s variant, gradient factors, and
    /// water-vapour-pressure constant.
    ///
    /// Panics on an invalid config rather than returning a `Result`;
    /// validate up front with [`ModelConfig::validate`] to avoid the panic.
    pub fn new(config: ModelConfig) -> Self {
        if let Err(e) = config.validate() {
            panic!("{e}");
        }
        let calc = TissueCalculator::new(
            config.variant.coefficients().n2_half_life,
            config.water_vapour_pressure,
        );
        Self { config, calc }
    }

    pub fn config(&self) -> ModelConfig {
        self.config
    }

    /// Initialize every compartment to air equilibrium at `surface_pressure`:
    /// `0.7902 · (surface_pressure − water_vapour_pressure)`.
    pub fn init(&self, surface_pressure: f64) -> Data {
        let p = 0.7902 * (surface_pressure - self.calc.water_vapour_pressure());
        Data {
            tissues: [p; NUM_COMPARTMENTS],
            gf: self.config.gf_low,
        }
    }

    /// Apply the Schreiner loader to all sixteen compartments for one
    /// segment, returning a fresh [`Data`] carrying `data.gf` unchanged.
    pub fn load(&self, abs_p: f64, time_s: f64, gas: &Gas, rate: f64, data: &Data) -> Data {
        let mut tissues = [0.0; NUM_COMPARTMENTS];
        for (k, tissue) in tissues.iter_mut().enumerate() {
            *tissue = self
                .calc
                .load_tissue(abs_p, time_s, gas, rate, data.tissues[k], k);
        }
        Data {
            tissues,
            gf: data.gf,
        }
    }

    /// GF-scaled ascent-ceiling pressure for every compartment, in
    /// compartment index order. Uses `gf_low` when `gf` is `None`.
    pub fn gf_limit(&self, gf: Option<f64>, data: &Data) -> [f64; NUM_COMPARTMENTS] {
        let gf = gf.unwrap_or(self.config.gf_low);
        debug_assert!(gf > 0.0 && gf <= 1.5, "gf={gf}");

        let coefficients = self.config.variant.coefficients();
        let mut ceilings = [0.0; NUM_COMPARTMENTS];
        for k in 0..NUM_COMPARTMENTS {
            ceilings[k] = eq_gf_limit(
                gf,
                data.tissues[k],
                0.0,
                coefficients.n2_a[k],
                coefficients.n2_b[k],
            );
        }
        ceilings
    }

    /// The binding compartment's ascent-ceiling pressure: the maximum over
    /// [`Model::gf_limit`].
    pub fn pressure_limit(&self, data: &Data, gf: Option<f64>) -> f64 {
        self.gf_limit(gf, data)
            .into_iter()
            .fold(f64::NEG_INFINITY, f64::max)
    }
}

//! Schreiner gas-loading equation: the closed-form solution for a
//! compartment's inert-gas pressure under a *linear* ambient-pressure
//! change over a segment (descent, ascent, or constant depth at rate 0).
//!
//! Direct translation of `eq_schreiner` in the DecoTengu reference
//! (`decotengu/model.py`), substituting the crate's `no_std`-friendly
//! `ln`/`exp` shim for `math.log`/`math.exp`.

use crate::math::{exp, ln};

/// Evaluate the new inert-gas partial pressure of one compartment after a
/// segment of `time_s` seconds at ambient-pressure rate `rate` starting
/// from absolute pressure `abs_p`.
///
/// - `abs_p`: absolute pressure at segment start, bar.
/// - `time_s`: segment duration, seconds, strictly positive (caller's
///   responsibility, debug-asserted, not a runtime error).
/// - `gas_fraction`: inert-gas fraction of the breathing mix, in `(0, 1]`.
/// - `rate`: ambient-pressure rate of change, bar/min (negative for
///   ascent).
/// - `tissue_pressure`: current inert-gas pressure in the compartment, bar.
/// - `half_life`: compartment half-life for this gas, minutes.
/// - `water_vapour_pressure`: alveolar water vapour pressure, bar.
#[allow(clippy::too_many_arguments)]
pub fn eq_schreiner(
    abs_p: f64,
    time_s: f64,
    gas_fraction: f64,
    rate: f64,
    tissue_pressure: f64,
    half_life: f64,
    water_vapour_pressure: f64,
) -> f64 {
    debug_assert!(time_s > 0.0, "time_s={time_s}");

    let p_alv = gas_fraction * (abs_p - water_vapour_pressure);
    let t = time_s / 60.0;
    let k = ln(2.0) / half_life;
    let r_g = gas_fraction * rate;

    p_alv + r_g * (t - 1.0 / k) - (p_alv - tissue_pressure - r_g / k) * exp(-k * t)
}

//! Gradient-factor ascent ceiling: the GF-scaled extension of the classic
//! Bühlmann tolerated-supersaturation line, `p_tol = (p − A) / B`.
//!
//! Baker's GF method linearly interpolates between ambient pressure (gf=0)
//! and the Bühlmann limit (gf=1) while staying well-behaved in
//! absolute-pressure space. This is a direct translation of `eq_gf_limit` in
//! the DecoTengu reference (`decotengu/model.py`), preserving its exact
//! algebraic form, including the helium term threaded through at zero, so
//! results match the reference OSTC firmware and `gfdeco.f`.

/// Ascent-ceiling absolute pressure (bar) for one compartment.
///
/// `p_he` is reserved for a future helium-aware extension; the core always
/// calls this with `p_he = 0.0` (see module docs and spec's nitrogen-only
/// simplification). Undefined when `p_n2 + p_he == 0.0`; callers must not
/// evaluate the ceiling on a freshly-zeroed state, call only after `init`.
pub fn eq_gf_limit(gf: f64, p_n2: f64, p_he: f64, n2_a: f64, n2_b: f64) -> f64 {
    debug_assert!(gf > 0.0 && gf <= 1.5, "gf={gf}");

    let p = p_n2 + p_he;
    let a = (n2_a * p_n2 + 0.0 * p_he) / p;
    let b = (n2_b * p_n2 + 0.0 * p_he) / p;

    (p - a * gf) / (gf / b + 1.0 - gf)
}

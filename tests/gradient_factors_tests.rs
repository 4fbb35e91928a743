#[macro_use]
mod fixtures;

use fixtures::{gas_air, model_gf, SURFACE_PRESSURE};
use zhl16gf_core::{bisect_find, recurse_while, CeilingValidator};

#[test]
fn surface_init_matches_reference_equilibrium() {
    let model = model_gf(0.3, 0.85);
    let data = model.init(SURFACE_PRESSURE);
    let expected = 0.7902 * (SURFACE_PRESSURE - 0.0627);
    for &p in data.tissues() {
        assert_close_to_abs!(p, expected, 1e-9);
    }
}

#[test]
fn descent_segment_loads_every_compartment() {
    let model = model_gf(0.3, 0.85);
    let data = model.init(SURFACE_PRESSURE);
    let air = gas_air();

    let loaded = model.load(4.0, 150.0, &air, 18.0, &data);

    // Fast compartment (tau=5.0) takes on most of the ambient swing; the
    // slowest compartment (tau=635.0) barely moves over 150s.
    assert!(loaded.tissues()[0] > data.tissues()[0]);
    assert!(loaded.tissues()[15] > data.tissues()[15]);
    assert!(loaded.tissues()[0] > loaded.tissues()[15]);
}

#[test]
fn ceiling_at_surface_is_well_below_ambient_and_accepted_by_validator() {
    let model = model_gf(0.3, 0.85);
    let data = model.init(SURFACE_PRESSURE);

    let ceiling = model.pressure_limit(&data, Some(0.3));
    assert!(ceiling < SURFACE_PRESSURE, "got {ceiling}");

    let validator = CeilingValidator::new(model);
    assert!(validator.validate(SURFACE_PRESSURE, &data).is_ok());
}

#[test]
fn gf_sweep_is_monotone_non_increasing_after_a_descent() {
    let model = model_gf(0.3, 0.85);
    let data = model.init(SURFACE_PRESSURE);
    let air = gas_air();
    let loaded = model.load(4.0, 150.0, &air, 18.0, &data);

    let low = model.pressure_limit(&loaded, Some(0.3));
    let high = model.pressure_limit(&loaded, Some(0.85));
    assert!(low >= high, "low={low} high={high}");
}

#[test]
fn bisection_of_a_step_function_matches_reference_cases() {
    assert_eq!(bisect_find(100, |k| k < 42), 41);
    assert_eq!(bisect_find(100, |_| true), 100);
    assert_eq!(bisect_find(100, |_| false), -1);
}

#[test]
fn fixed_point_termination_matches_reference_cases() {
    assert_eq!(recurse_while(|&x| x < 10, |x| x + 3, 0), 9);
    assert_eq!(recurse_while(|_: &i32| false, |x| x + 1, 7), 7);
}

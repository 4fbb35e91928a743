#[macro_use]
mod fixtures;

use fixtures::{gas_air, model_gf, model_gf_variant, SURFACE_PRESSURE};
use zhl16gf_core::{CeilingValidator, ConfigValidationErr, EngineError, Model, ModelConfig, ZhlVariant};

#[test]
#[should_panic]
fn should_panic_on_inverted_gradient_factors() {
    let _ = Model::new(ModelConfig::new().with_gradient_factors(0.9, 0.3));
}

#[test]
fn rejects_gradient_factors_outside_valid_range() {
    let bad = ModelConfig::new().with_gradient_factors(0.0, 0.85);
    assert!(matches!(
        bad.validate(),
        Err(ConfigValidationErr { field: "gf", .. })
    ));
}

#[test]
fn rejects_surface_pressure_at_or_below_water_vapour_pressure() {
    let bad = ModelConfig::new().with_water_vapour_pressure(2.0);
    assert!(matches!(
        bad.validate(),
        Err(ConfigValidationErr {
            field: "surface_pressure",
            ..
        })
    ));
}

#[test]
fn b_and_c_variants_diverge_after_an_identical_descent() {
    let air = gas_air();
    let b = model_gf_variant(0.3, 0.85, ZhlVariant::B);
    let c = model_gf_variant(0.3, 0.85, ZhlVariant::C);

    let data_b = b.load(4.0, 150.0, &air, 18.0, &b.init(SURFACE_PRESSURE));
    let data_c = c.load(4.0, 150.0, &air, 18.0, &c.init(SURFACE_PRESSURE));

    // B and C share compartment 4's N2 half-life (27.0 min either way), so
    // loading produces identical tissue pressure in that compartment...
    assert_close_to_abs!(data_b.tissues()[4], data_c.tissues()[4], 1e-9);
    // ...but B and C disagree on compartment 4's A coefficient (0.6667 vs
    // 0.6200), so their ceilings still diverge.
    let ceiling_b = b.pressure_limit(&data_b, Some(0.3));
    let ceiling_c = c.pressure_limit(&data_c, Some(0.3));
    assert!((ceiling_b - ceiling_c).abs() > 1e-6);
}

#[test]
fn validator_rejects_a_step_that_breaches_the_ceiling() {
    let model = model_gf(0.3, 0.85);
    let validator = CeilingValidator::new(model);

    let data = model.init(SURFACE_PRESSURE);
    let air = gas_air();
    let loaded = model.load(5.0, 40.0 * 60.0, &air, 0.0, &data).with_gf(0.3);
    let ceiling = model.pressure_limit(&loaded, Some(loaded.gf()));

    let result = validator.validate(ceiling - 0.2, &loaded);
    assert_eq!(
        result,
        Err(EngineError::CeilingViolated {
            pressure: ceiling - 0.2,
            ceiling,
        })
    );
}

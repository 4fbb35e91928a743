use zhl16gf_core::{Gas, Model, ModelConfig, ZhlVariant};

pub const SURFACE_PRESSURE: f64 = 1.01325;
pub const WATER_VAPOUR_PRESSURE: f64 = 0.0627;

pub fn model_gf(gf_low: f64, gf_high: f64) -> Model {
    Model::new(ModelConfig::new().with_gradient_factors(gf_low, gf_high))
}

pub fn model_gf_variant(gf_low: f64, gf_high: f64, variant: ZhlVariant) -> Model {
    Model::new(
        ModelConfig::new()
            .with_gradient_factors(gf_low, gf_high)
            .with_variant(variant),
    )
}

pub fn gas_air() -> Gas {
    Gas::air()
}

#[macro_export]
macro_rules! assert_close_to_abs {
    ($a:expr, $b:expr, $tolerance:expr) => {
        if ($a - $b).abs() > $tolerance {
            panic!("{} is not close to {} with tolerance of {}", $a, $b, $tolerance);
        }
    };
}

#[macro_export]
macro_rules! assert_close_to_percent {
    ($a:expr, $b:expr, $tolerance_percent:expr) => {
        let tolerance = $b * ($tolerance_percent / 100.0);
        if ($a - $b).abs() > tolerance {
            panic!(
                "{} is not close to {} within {} percent tolerance ({})",
                $a, $b, $tolerance_percent, tolerance
            );
        }
    };
}

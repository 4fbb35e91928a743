#![cfg_attr(feature = "no-std", no_std)]

//! Computational core of a Bühlmann ZH-L16 inert-gas saturation model
//! extended with Eric Baker's gradient-factor method.
//!
//! This crate is deliberately narrow: it is the Schreiner loading equation,
//! the GF ascent-ceiling equation, the tissue-state data model, the two
//! coefficient parameterizations (ZH-L16B-GF, ZH-L16C-GF), and the numeric
//! search primitives (`seq`, `recurse_while`, `bisect_find`) a dive-profile
//! planner drives against them. The planner itself (walking a
//! descent/bottom/ascent schedule, picking gas switches, locating first-stop
//! depths) lives outside this crate; collaborators feed it depth/time/
//! gas/rate tuples and consume `Data`, ceilings, and validation results.

mod ceiling;
mod error;
mod gas;
mod math;
mod model;
mod primitives;
mod schreiner;
mod tables;
mod tissue_calculator;
mod validator;

pub use ceiling::eq_gf_limit;
pub use error::{ConfigValidationErr, EngineError, NumericError};
pub use gas::Gas;
pub use model::{Data, Model, ModelConfig};
pub use primitives::{bisect_find, bisect_find_strict, recurse_while, seq, Seq};
pub use schreiner::eq_schreiner;
pub use tables::{CoefficientSet, ZhlVariant, NUM_COMPARTMENTS, ZHL_16B_GF, ZHL_16C_GF};
pub use tissue_calculator::{TissueCalculator, WATER_VAPOUR_PRESSURE_DEFAULT};
pub use validator::CeilingValidator;

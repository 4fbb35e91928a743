//! Step validator: the Rust rendering of the reference source's
//! `DecoModelValidator` coroutine.
//!
//! The reference expresses the validator as a cooperative receiver fed
//! successive `(pressure, data)` tuples by an engine coroutine pipeline.
//! Rendered here as a plain stateless struct: a consumer that inspects a
//! finite sequence of such tuples and may reject any one with a typed
//! failure.

use crate::error::EngineError;
use crate::model::{Data, Model};

/// Wraps a [`Model`] and checks dive steps against its ascent ceiling.
///
/// Stateless across calls: it carries only the model, never the steps it
/// has seen.
#[derive(Clone, Copy, Debug)]
pub struct CeilingValidator {
    model: Model,
}

impl CeilingValidator {
    pub fn new(model: Model) -> Self {
        Self { model }
    }

    /// Validate one `(pressure, data)` step.
    ///
    /// Fails with [`EngineError::CeilingViolated`] iff `pressure` is
    /// strictly below the ceiling computed from `data` and `data.gf()`.
    /// Equality is permitted, a diver may sit exactly at the ceiling.
    pub fn validate(&self, pressure: f64, data: &Data) -> Result<(), EngineError> {
        let ceiling = self.model.pressure_limit(data, Some(data.gf()));
        if pressure < ceiling {
            return Err(EngineError::CeilingViolated { pressure, ceiling });
        }
        Ok(())
    }
}

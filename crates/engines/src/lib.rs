#![deny(unsafe_code)]
//! Engine registry: maps engine names to implementations, converts fields to
//! pixels, and drives the frame loop that writes PNG snapshots.
//!
//! This crate sits between `drift-core` (which defines the `Engine` trait)
//! and the engine crates (`drift-advection`). The CLI depends on it so the
//! dispatch and export logic lives in one place.

pub mod pixel;

#[cfg(feature = "png")]
pub mod frames;
#[cfg(feature = "png")]
pub mod snapshot;

use drift_core::error::EngineError;
use drift_core::field::Field;
use drift_core::Engine;
use serde_json::Value;

/// All available engine names.
const ENGINE_NAMES: &[&str] = &["advection"];

/// Enumeration of all available engines.
///
/// Use [`EngineKind::from_name`] for string-based construction (CLI).
pub enum EngineKind {
    /// Grid particle advection with push-chain resolution.
    Advection(drift_advection::Advection),
}

impl EngineKind {
    /// Constructs an engine by name.
    ///
    /// Returns `EngineError::UnknownEngine` if the name is not recognized.
    pub fn from_name(
        name: &str,
        bounds: usize,
        seed: u64,
        params: &Value,
    ) -> Result<Self, EngineError> {
        match name {
            "advection" => Ok(EngineKind::Advection(
                drift_advection::Advection::from_json(bounds, seed, params)?,
            )),
            _ => Err(EngineError::UnknownEngine(name.to_string())),
        }
    }

    /// Returns a slice of all recognized engine names.
    pub fn list_engines() -> &'static [&'static str] {
        ENGINE_NAMES
    }
}

impl Engine for EngineKind {
    fn step(&mut self) -> Result<(), EngineError> {
        match self {
            EngineKind::Advection(e) => e.step(),
        }
    }

    fn field(&self) -> &Field {
        match self {
            EngineKind::Advection(e) => e.field(),
        }
    }

    fn frames_done(&self) -> usize {
        match self {
            EngineKind::Advection(e) => e.frames_done(),
        }
    }

    fn params(&self) -> Value {
        match self {
            EngineKind::Advection(e) => e.params(),
        }
    }

    fn param_schema(&self) -> Value {
        match self {
            EngineKind::Advection(e) => e.param_schema(),
        }
    }
}

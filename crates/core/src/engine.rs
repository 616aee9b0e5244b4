//! The core `Engine` trait every drift simulation implements.
//!
//! The trait is object-safe so the frame loop and the CLI can drive engines
//! as `dyn Engine`.

use crate::error::EngineError;
use crate::field::Field;
use serde_json::Value;

/// A frame-stepped simulation that exposes its state as a scalar [`Field`].
///
/// One call to [`Engine::step`] is one frame. After a step, [`Engine::field`]
/// holds the finalized state of that frame, ready to be rasterized through a
/// palette.
pub trait Engine {
    /// Advance the simulation by one frame.
    fn step(&mut self) -> Result<(), EngineError>;

    /// The renderable state, values in [0, 1].
    fn field(&self) -> &Field;

    /// Number of frames completed so far.
    fn frames_done(&self) -> usize;

    /// Current parameter values as a JSON object.
    fn params(&self) -> Value;

    /// Schema describing all available parameters, their types, ranges, and defaults.
    fn param_schema(&self) -> Value;
}

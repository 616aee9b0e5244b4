//! Reproducible description of a simulation run.
//!
//! A [`RunConfig`] captures everything needed to recreate a frame sequence:
//! engine name, grid bounds, frame count, engine parameters, PRNG seed,
//! palette and output directory. The CLI writes it next to the frames as
//! `run.json`.

use crate::error::EngineError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Grid side length used when nothing else is specified.
pub const DEFAULT_BOUNDS: usize = 1024;
/// Number of frames rendered when nothing else is specified.
pub const DEFAULT_FRAMES: usize = 30;
/// Directory frames are written to when nothing else is specified.
pub const DEFAULT_OUTPUT_DIR: &str = "Export";

/// Reproducible specification of a run.
///
/// Two identical `RunConfig` values fed to the same binary produce
/// bit-identical frames.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RunConfig {
    pub engine: String,
    pub bounds: usize,
    pub frames: usize,
    pub params: serde_json::Value,
    pub seed: u64,
    pub palette: String,
    pub output_dir: PathBuf,
}

impl RunConfig {
    /// Creates a config with default frames, palette, output directory and empty params.
    pub fn new(engine: &str, bounds: usize, seed: u64) -> Self {
        Self {
            engine: engine.to_string(),
            bounds,
            frames: DEFAULT_FRAMES,
            params: serde_json::Value::Object(serde_json::Map::new()),
            seed,
            palette: "viridis".to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }

    /// Rejects zero bounds, a `bounds * bounds` overflow, and non-object params.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.bounds == 0 {
            return Err(EngineError::InvalidDimensions);
        }
        self.bounds
            .checked_mul(self.bounds)
            .ok_or(EngineError::InvalidDimensions)?;
        if !self.params.is_object() {
            return Err(EngineError::InvalidParam {
                name: "params".to_string(),
                reason: "must be a JSON object".to_string(),
            });
        }
        Ok(())
    }

    /// Path of the manifest inside the output directory.
    pub fn manifest_path(&self) -> PathBuf {
        self.output_dir.join("run.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_uses_reference_defaults() {
        let c = RunConfig::new("advection", DEFAULT_BOUNDS, 2);
        assert_eq!(c.bounds, 1024);
        assert_eq!(c.frames, 30);
        assert_eq!(c.palette, "viridis");
        assert_eq!(c.output_dir, PathBuf::from("Export"));
        assert_eq!(c.params, serde_json::json!({}));
    }

    #[test]
    fn json_round_trip_with_custom_params() {
        let mut c = RunConfig::new("advection", 256, 99);
        c.params = serde_json::json!({"sigma": 6.0, "refresh_mode": "invert"});
        c.frames = 12;
        let json = serde_json::to_string_pretty(&c).unwrap();
        let restored: RunConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(c, restored);
    }

    #[test]
    fn validate_rejects_zero_and_overflowing_bounds() {
        assert!(RunConfig::new("advection", 64, 1).validate().is_ok());
        assert!(matches!(
            RunConfig::new("advection", 0, 1).validate(),
            Err(EngineError::InvalidDimensions)
        ));
        assert!(RunConfig::new("advection", usize::MAX, 1).validate().is_err());
    }

    #[test]
    fn validate_rejects_non_object_params() {
        let mut c = RunConfig::new("advection", 8, 1);
        c.params = serde_json::json!([1, 2]);
        assert!(matches!(
            c.validate(),
            Err(EngineError::InvalidParam { .. })
        ));
    }

    #[test]
    fn manifest_lives_in_output_dir() {
        let mut c = RunConfig::new("advection", 8, 1);
        c.output_dir = PathBuf::from("/tmp/out");
        assert_eq!(c.manifest_path(), PathBuf::from("/tmp/out/run.json"));
    }
}

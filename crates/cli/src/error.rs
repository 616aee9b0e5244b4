//! Failures of a drift run, each mapped to a process exit code.
//!
//! | code | meaning |
//! |------|---------|
//! | 0    | success |
//! | 2    | clap argument error (before our code runs) |
//! | 10   | engine rejected the configuration or failed to step |
//! | 11   | run manifest or a frame PNG could not be written |
//! | 12   | bad `--params` JSON or unknown palette |
//! | 13   | summary could not be encoded as JSON |

use drift_core::EngineError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    /// Bad bounds, sigma or engine params, unknown engine, or a failed step.
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("cannot write run manifest into {}: {source}", dir.display())]
    Manifest { dir: PathBuf, source: EngineError },

    #[error("frame export into {} stopped: {source}", dir.display())]
    Frames { dir: PathBuf, source: EngineError },

    #[error("invalid --params: {0}")]
    Params(String),

    #[error("unknown palette: {0}")]
    Palette(EngineError),

    #[error("cannot encode summary: {0}")]
    Summary(#[from] serde_json::Error),
}

impl CliError {
    /// Wraps a frame-loop failure: write failures are export errors, the rest
    /// came from the engine itself.
    pub fn frames(dir: PathBuf, err: EngineError) -> Self {
        match err {
            EngineError::Io(_) => CliError::Frames { dir, source: err },
            other => CliError::Engine(other),
        }
    }

    /// Process exit code for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Engine(_) => 10,
            CliError::Manifest { .. } | CliError::Frames { .. } => 11,
            CliError::Params(_) | CliError::Palette(_) => 12,
            CliError::Summary(_) => 13,
        }
    }
}

//! Error types for the drift core.

use thiserror::Error;

/// Errors produced by engine operations.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Grid bounds was zero, or `bounds * bounds` overflowed.
    #[error("invalid bounds: must be at least 1 and bounds * bounds must fit in memory")]
    InvalidDimensions,

    /// The Gaussian smoothing radius was not a positive finite number.
    #[error("invalid sigma {0}: must be finite and greater than zero")]
    InvalidSigma(f64),

    /// A parameter was present and well-typed but its value was rejected.
    #[error("invalid parameter '{name}': {reason}")]
    InvalidParam { name: String, reason: String },

    /// Two fields had incompatible dimensions for an element-wise operation.
    #[error("dimension mismatch: ({lhs_w}, {lhs_h}) vs ({rhs_w}, {rhs_h})")]
    DimensionMismatch {
        lhs_w: usize,
        lhs_h: usize,
        rhs_w: usize,
        rhs_h: usize,
    },

    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A palette could not be constructed from the given colors or name.
    #[error("invalid palette: {0}")]
    InvalidPalette(String),

    /// No engine is registered under the requested name.
    #[error("unknown engine: {0}")]
    UnknownEngine(String),

    /// Creating the output directory or writing a frame failed.
    #[error("i/o error: {0}")]
    Io(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_dimensions_talks_about_bounds() {
        let msg = EngineError::InvalidDimensions.to_string();
        assert!(msg.contains("bounds"), "expected message mentioning bounds, got: {msg}");
        assert!(!msg.contains("width"), "unexpected field terminology in: {msg}");
    }

    #[test]
    fn invalid_sigma_includes_value() {
        let msg = EngineError::InvalidSigma(-3.5).to_string();
        assert!(msg.contains("-3.5"), "missing sigma in: {msg}");
    }

    #[test]
    fn invalid_param_includes_name_and_reason() {
        let err = EngineError::InvalidParam {
            name: "refresh_interval".into(),
            reason: "must be at least 1".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("refresh_interval"), "missing name in: {msg}");
        assert!(msg.contains("at least 1"), "missing reason in: {msg}");
    }

    #[test]
    fn unknown_engine_includes_name() {
        let msg = EngineError::UnknownEngine("lattice-gas".into()).to_string();
        assert!(msg.contains("lattice-gas"), "missing name in: {msg}");
    }

    #[test]
    fn engine_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<EngineError>();
    }
}

//! Helpers for extracting typed parameters from a `serde_json::Value` object.
//!
//! A missing key yields the default. A key that is present with the wrong
//! JSON type is an error, so a typo in `--params` is reported instead of
//! silently running with defaults.

use crate::error::EngineError;
use serde_json::Value;

fn type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn mismatch(name: &str, expected: &str, got: &Value) -> EngineError {
    EngineError::InvalidParam {
        name: name.to_string(),
        reason: format!("expected {expected}, got {}", type_name(got)),
    }
}

/// Extracts an `f64` from `params[name]`. Integers are accepted.
pub fn param_f64(params: &Value, name: &str, default: f64) -> Result<f64, EngineError> {
    match params.get(name) {
        None => Ok(default),
        Some(v) => v.as_f64().ok_or_else(|| mismatch(name, "number", v)),
    }
}

/// Extracts a non-negative integer from `params[name]`.
pub fn param_usize(params: &Value, name: &str, default: usize) -> Result<usize, EngineError> {
    match params.get(name) {
        None => Ok(default),
        Some(v) => v
            .as_u64()
            .map(|n| n as usize)
            .ok_or_else(|| mismatch(name, "non-negative integer", v)),
    }
}

/// Extracts a string from `params[name]`.
pub fn param_string(params: &Value, name: &str, default: &str) -> Result<String, EngineError> {
    match params.get(name) {
        None => Ok(default.to_owned()),
        Some(v) => v
            .as_str()
            .map(String::from)
            .ok_or_else(|| mismatch(name, "string", v)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn param_f64_reads_floats_and_integers() {
        let params = json!({"sigma": 2.5, "count": 10});
        assert_eq!(param_f64(&params, "sigma", 1.0).unwrap(), 2.5);
        assert_eq!(param_f64(&params, "count", 0.0).unwrap(), 10.0);
    }

    #[test]
    fn missing_keys_fall_back_to_default() {
        let params = json!({});
        assert_eq!(param_f64(&params, "sigma", 12.0).unwrap(), 12.0);
        assert_eq!(param_usize(&params, "refresh_interval", 5).unwrap(), 5);
        assert_eq!(param_string(&params, "mode", "resample").unwrap(), "resample");
    }

    #[test]
    fn non_object_params_fall_back_to_default() {
        let params = json!("not an object");
        assert_eq!(param_f64(&params, "sigma", 7.0).unwrap(), 7.0);
    }

    #[test]
    fn wrong_type_is_an_error_naming_the_key() {
        let params = json!({"sigma": "wide"});
        let err = param_f64(&params, "sigma", 1.0).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("sigma") && msg.contains("string"), "{msg}");
    }

    #[test]
    fn param_usize_rejects_fractions_and_negatives() {
        assert!(param_usize(&json!({"n": 2.5}), "n", 1).is_err());
        assert!(param_usize(&json!({"n": -1}), "n", 1).is_err());
        assert_eq!(param_usize(&json!({"n": 42}), "n", 1).unwrap(), 42);
    }

    #[test]
    fn param_string_rejects_numbers() {
        assert!(param_string(&json!({"mode": 3}), "mode", "x").is_err());
        assert_eq!(param_string(&json!({"mode": "invert"}), "mode", "x").unwrap(), "invert");
    }
}

//! Tunable rates for the sky engine and the JSON helpers that read them.
//!
//! The helpers take a JSON value, a key name, and a default. If the key is
//! missing or the value is not the expected type, the default is returned.

use crate::error::EngineError;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Angular frequency of the palette cycle, in rad/s.
pub const DEFAULT_FREQUENCY: f64 = 0.1;
/// Spin accumulator rate, in rad per second of delta.
pub const DEFAULT_SPIN_RATE: f64 = 0.1;

/// Extracts an `f64` from `params[name]`, returning `default` if missing or wrong type.
///
/// Accepts both JSON numbers (including integers) and converts them to f64.
pub fn param_f64(params: &Value, name: &str, default: f64) -> f64 {
    params.get(name).and_then(Value::as_f64).unwrap_or(default)
}

/// Extracts a `String` from `params[name]`, returning `default` if missing or wrong type.
pub fn param_string(params: &Value, name: &str, default: &str) -> String {
    params
        .get(name)
        .and_then(Value::as_str)
        .map(String::from)
        .unwrap_or_else(|| default.to_owned())
}

/// Rate constants driving the palette cycle and the spin accumulator.
///
/// [`Default`] yields the design values (`frequency = 0.1`, `spin_rate = 0.1`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SkyParams {
    /// Angular frequency `f` of the palette cycle (rad/s).
    pub frequency: f64,
    /// Rate at which spin decreases per second of delta.
    pub spin_rate: f64,
}

impl Default for SkyParams {
    fn default() -> Self {
        Self {
            frequency: DEFAULT_FREQUENCY,
            spin_rate: DEFAULT_SPIN_RATE,
        }
    }
}

impl SkyParams {
    /// Extracts parameters from a JSON object, falling back to defaults.
    ///
    /// Returns `EngineError::InvalidParam` for non-finite values, a
    /// non-positive frequency or a negative spin rate.
    pub fn from_json(params: &Value) -> Result<Self, EngineError> {
        let out = Self {
            frequency: param_f64(params, "frequency", DEFAULT_FREQUENCY),
            spin_rate: param_f64(params, "spin_rate", DEFAULT_SPIN_RATE),
        };
        out.validate()?;
        Ok(out)
    }

    /// Checks that both rates are finite, the frequency is positive and the
    /// spin rate is non-negative, so spin can only ever decrease.
    pub fn validate(&self) -> Result<(), EngineError> {
        if !self.frequency.is_finite() || self.frequency <= 0.0 {
            return Err(EngineError::InvalidParam {
                name: "frequency".into(),
                reason: format!("must be finite and positive, got {}", self.frequency),
            });
        }
        if !self.spin_rate.is_finite() || self.spin_rate < 0.0 {
            return Err(EngineError::InvalidParam {
                name: "spin_rate".into(),
                reason: format!("must be finite and non-negative, got {}", self.spin_rate),
            });
        }
        Ok(())
    }

    /// Current values as a JSON object.
    pub fn to_json(&self) -> Value {
        json!({
            "frequency": self.frequency,
            "spin_rate": self.spin_rate,
        })
    }

    /// Schema describing the tunable rates, their types, and defaults.
    pub fn schema() -> Value {
        json!({
            "frequency": {
                "type": "number",
                "default": DEFAULT_FREQUENCY,
                "description": "Angular frequency of the palette cycle (rad/s)"
            },
            "spin_rate": {
                "type": "number",
                "default": DEFAULT_SPIN_RATE,
                "description": "Spin decrease per second of frame delta (rad/s)"
            }
        })
    }
}

//! Speech request parsing
//!
//! A request is a single JSON object read off the wire in one piece.
//! Both fields are optional: `text` defaults to the empty string and
//! `speed` to [`DEFAULT_SPEED`]. Speed is coerced leniently (JSON
//! numbers and numeric strings both work) because upstream callers
//! serialize it inconsistently.

use serde_json::Value;

use crate::error::SpeechError;

/// Speed assumed when the request omits the field
pub const DEFAULT_SPEED: f64 = 1.0;

/// Requests slower than this are synthesized in slow mode
pub const SLOW_SPEED_THRESHOLD: f64 = 0.8;

/// One parsed speech request
#[derive(Debug, Clone, PartialEq)]
pub struct SpeechRequest {
    /// Text to synthesize, may be empty
    pub text: String,

    /// Requested playback speed, 1.0 is normal
    pub speed: f64,
}

impl SpeechRequest {
    /// Parse a request from raw JSON bytes
    pub fn from_slice(input: &[u8]) -> Result<Self, SpeechError> {
        let value: Value =
            serde_json::from_slice(input).map_err(|e| SpeechError::Parse(e.to_string()))?;

        let object = value.as_object().ok_or_else(|| {
            SpeechError::Parse(format!(
                "Expected a JSON object, got {}",
                json_type_name(&value)
            ))
        })?;

        let text = match object.get("text") {
            None => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => {
                return Err(SpeechError::InvalidField(format!(
                    "text must be a string (got {})",
                    json_type_name(other)
                )));
            }
        };

        let speed = match object.get("speed") {
            None => DEFAULT_SPEED,
            Some(value) => coerce_speed(value)?,
        };

        Ok(Self { text, speed })
    }

    /// Whether this request should be synthesized in slow mode
    pub fn slow_mode(&self) -> bool {
        self.speed < SLOW_SPEED_THRESHOLD
    }
}

fn coerce_speed(value: &Value) -> Result<f64, SpeechError> {
    match value {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| SpeechError::InvalidField("speed is out of range".to_string())),
        Value::String(s) => s.trim().parse::<f64>().map_err(|_| {
            SpeechError::InvalidField(format!("speed must be a number (got \"{}\")", s))
        }),
        other => Err(SpeechError::InvalidField(format!(
            "speed must be a number (got {})",
            json_type_name(other)
        ))),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

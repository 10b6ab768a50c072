use crate::error::AppError;
use serde::{Deserialize, Serialize};

/// A numeric field as the API sends it. Ergast encodes numbers as JSON
/// strings ("575"), but some mirrors send plain JSON numbers, so both are
/// accepted and coerced later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LooseInteger {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl LooseInteger {
    /// Coerces the value into an integer.
    ///
    /// Strings are trimmed and parsed as base-10 integers. Floats are
    /// accepted only when they carry no fractional part; "575.5" points are
    /// rejected rather than silently truncated.
    pub fn to_i64(&self, field: &str) -> Result<i64, AppError> {
        match self {
            LooseInteger::Integer(value) => Ok(*value),
            LooseInteger::Float(value) => {
                if value.is_finite() && value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
                    Ok(*value as i64)
                } else {
                    Err(AppError::api_invalid_field(
                        field,
                        value.to_string(),
                        "not a whole number",
                    ))
                }
            }
            LooseInteger::Text(text) => text.trim().parse::<i64>().map_err(|e| {
                AppError::api_invalid_field(field, text.clone(), e.to_string())
            }),
        }
    }

    /// Coerces the value and checks it fits a `u32` no smaller than `min`.
    pub fn to_u32_at_least(&self, field: &str, min: u32) -> Result<u32, AppError> {
        let value = self.to_i64(field)?;
        if value < i64::from(min) {
            return Err(AppError::api_invalid_field(
                field,
                value.to_string(),
                format!("must be at least {min}"),
            ));
        }
        u32::try_from(value)
            .map_err(|e| AppError::api_invalid_field(field, value.to_string(), e.to_string()))
    }
}

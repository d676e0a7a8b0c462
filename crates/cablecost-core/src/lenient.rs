//! Forgiving numeric input. A blank, garbled or non-finite field reads as 0
//! instead of failing, so a half-filled form still produces a breakdown.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

pub fn coerce_f64(raw: &str) -> f64 {
    let trimmed = raw.trim();
    let parsed = match trimmed.parse::<f64>() {
        Ok(value) => Some(value),
        // A single decimal comma, as typed on a Spanish-locale keyboard.
        Err(_) if trimmed.matches(',').count() == 1 && !trimmed.contains('.') => {
            trimmed.replace(',', ".").parse::<f64>().ok()
        }
        Err(_) => None,
    };
    finite_or_zero(parsed.unwrap_or(0.0))
}

/// Truncates toward zero; negative counts clamp to 0.
pub fn coerce_count(raw: &str) -> u32 {
    count_from_f64(coerce_f64(raw))
}

pub fn coerce_bool(raw: &str) -> bool {
    matches!(
        raw.trim().to_lowercase().as_str(),
        "true" | "1" | "yes" | "on" | "si" | "sí"
    )
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

fn count_from_f64(value: f64) -> u32 {
    // `as` saturates: negatives become 0, huge values u32::MAX.
    value.trunc() as u32
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LooseValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    // Arrays, tables, datetimes.
    Other(IgnoredAny),
}

impl LooseValue {
    fn to_f64(&self) -> f64 {
        match self {
            LooseValue::Bool(_) => 0.0,
            LooseValue::Int(value) => *value as f64,
            LooseValue::Float(value) => finite_or_zero(*value),
            LooseValue::Text(text) => coerce_f64(text),
            LooseValue::Other(_) => 0.0,
        }
    }

    fn to_bool(&self) -> bool {
        match self {
            LooseValue::Bool(value) => *value,
            LooseValue::Int(value) => *value != 0,
            LooseValue::Float(value) => *value != 0.0 && value.is_finite(),
            LooseValue::Text(text) => coerce_bool(text),
            LooseValue::Other(_) => false,
        }
    }
}

/// `deserialize_with` adapter: any number or numeric text, 0 otherwise.
pub fn f64_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<LooseValue>::deserialize(deserializer)?;
    Ok(value.map(|v| v.to_f64()).unwrap_or(0.0))
}

pub fn count_or_zero<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    f64_or_zero(deserializer).map(count_from_f64)
}

pub fn bool_or_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<LooseValue>::deserialize(deserializer)?;
    Ok(value.map(|v| v.to_bool()).unwrap_or(false))
}

//! Field decoders for provider payloads.
//!
//! The provider mixes numbers, numeric strings and nulls for the same fields
//! across endpoints; anything that cannot be read as a number becomes zero.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::models::{DEFAULT_DIFFICULTY, MAX_DIFFICULTY, MIN_DIFFICULTY};

fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|n| n.is_finite())
}

fn as_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().filter(|f| f.is_finite()).map(|f| f as i64))
        }
        _ => None,
    }
}

pub fn f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(as_number(&value).unwrap_or(0.0))
}

pub fn i64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(as_integer(&value).unwrap_or(0))
}

/// Money in tenths of a million; never negative, bounded so sums cannot overflow
pub fn tenths<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(as_integer(&value).map_or(0, |n| n.clamp(0, u32::MAX as i64)))
}

pub fn u32<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(as_integer(&value).map_or(0, |n| n.clamp(0, u32::MAX as i64) as u32))
}

pub fn u64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(as_integer(&value).map_or(0, |n| n.max(0) as u64))
}

pub fn opt_u32<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u32>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(as_integer(&value)
        .filter(|n| *n >= 0)
        .map(|n| n.min(u32::MAX as i64) as u32))
}

pub fn bool<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => s.eq_ignore_ascii_case("true"),
        _ => false,
    })
}

/// Difficulty on the 1-5 scale; out-of-range values are clamped, missing ones are medium
pub fn difficulty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(as_integer(&value).map_or(DEFAULT_DIFFICULTY, |n| {
        n.clamp(MIN_DIFFICULTY as i64, MAX_DIFFICULTY as i64) as u8
    }))
}

/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Serde helpers for the Google Ads JSON encoding
//!
//! The REST API encodes `int64` fields (ids, micros, impressions...) as JSON
//! strings and `double` fields as numbers. These helpers accept either form.
//! `null` maps to the default value; any other shape is a deserialization error.

use crate::constants::I64_F64_BOUND;
use serde::de::Error;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserializes a string or number into a `String`, `null` becomes empty
pub fn string_from_any<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Ok(String::new()),
        other => Err(D::Error::custom(format!(
            "expected a string or number, got {other}"
        ))),
    }
}

/// Deserializes a string or number into an `i64`, `null` becomes `0`
///
/// Fractional values are rounded to the nearest integer.
pub fn i64_from_any<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => {
            let s = s.trim();
            match s.parse::<i64>() {
                Ok(v) => Ok(v),
                Err(_) => s
                    .parse::<f64>()
                    .map_err(|_| D::Error::custom(format!("invalid integer string {s:?}")))
                    .and_then(round_to_i64::<D::Error>),
            }
        }
        Value::Number(n) => match n.as_i64() {
            Some(v) => Ok(v),
            None => n
                .as_f64()
                .ok_or_else(|| D::Error::custom(format!("invalid integer {n}")))
                .and_then(round_to_i64::<D::Error>),
        },
        Value::Null => Ok(0),
        other => Err(D::Error::custom(format!(
            "expected an integer or integer string, got {other}"
        ))),
    }
}

/// Deserializes a string or number into an `f64`, `null` becomes `0.0`
pub fn f64_from_any<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => {
            let s = s.trim();
            s.parse::<f64>()
                .ok()
                .filter(|f| f.is_finite())
                .ok_or_else(|| D::Error::custom(format!("invalid number string {s:?}")))
        }
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| D::Error::custom(format!("invalid number {n}"))),
        Value::Null => Ok(0.0),
        other => Err(D::Error::custom(format!(
            "expected a number or number string, got {other}"
        ))),
    }
}

fn round_to_i64<E: Error>(value: f64) -> Result<i64, E> {
    let rounded = value.round();
    if !rounded.is_finite() || rounded >= I64_F64_BOUND || rounded < -I64_F64_BOUND {
        return Err(E::custom(format!("integer {value} out of range")));
    }
    Ok(rounded as i64)
}

/// Returns the trailing segment of a resource name (`customers/123` -> `123`)
#[must_use]
pub fn resource_id(resource_name: &str) -> &str {
    resource_name.rsplit('/').next().unwrap_or_default()
}

//! Boundary conversion for loosely typed JSON identifiers.
//!
//! Trivia clients send category ids and difficulties either as numbers or as
//! numeric strings (`3` or `"3"`). Both are accepted and converted to the
//! canonical integer before any store access.

use serde::{Deserialize, Serialize};

/// An integer that may arrive as a JSON number or a numeric string.
///
/// Deserialization never fails; unusable values are kept so the caller can
/// reject them with the status code that fits the route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FlexibleInt {
    Number(i64),
    Text(String),
    Other(serde_json::Value),
}

impl FlexibleInt {
    /// Canonical `i32` value, or `None` if the input is not an in-range integer
    pub fn to_i32(&self) -> Option<i32> {
        match self {
            FlexibleInt::Number(n) => i32::try_from(*n).ok(),
            FlexibleInt::Text(s) => s.trim().parse::<i32>().ok(),
            FlexibleInt::Other(_) => None,
        }
    }
}

/// A text field that may arrive with the wrong JSON type (`"question": 5`).
///
/// Like [`FlexibleInt`], deserialization keeps the bad value instead of failing
/// the whole body, so a create request can answer it with 422.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FlexibleText {
    Text(String),
    Other(serde_json::Value),
}

impl FlexibleText {
    pub fn into_text(self) -> Option<String> {
        match self {
            FlexibleText::Text(s) => Some(s),
            FlexibleText::Other(_) => None,
        }
    }
}

impl From<&str> for FlexibleText {
    fn from(s: &str) -> Self {
        FlexibleText::Text(s.to_string())
    }
}

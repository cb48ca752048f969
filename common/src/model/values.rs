//! Flat form values: the UI-facing side of the codec.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Property name -> form value for one form session.
pub type ValuesRecord = BTreeMap<String, FormValue>;

/// A single form field value.
///
/// Serialized untagged, so a record reads as plain JSON:
/// `{"Name": "Task A", "Score": 3, "Tags": ["x"], "Done": true, "Due": null}`.
/// Any other JSON (an object, a list of numbers) lands in `Other` so one odd
/// field does not reject the whole record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FormValue {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    List(Vec<String>),
    Other(serde_json::Value),
}

impl FormValue {
    /// Empty values are not sent to the workspace API (checkboxes excepted).
    ///
    /// `false`, `""`, `null`, `0` and `NaN` are empty, as are unrecognised
    /// shapes. Empty lists are not; the string `"0"` is not.
    pub fn is_empty(&self) -> bool {
        match self {
            FormValue::Null => true,
            FormValue::Bool(b) => !b,
            FormValue::Number(n) => *n == 0.0 || n.is_nan(),
            FormValue::Text(s) => s.is_empty(),
            FormValue::List(_) => false,
            FormValue::Other(_) => true,
        }
    }

    /// Boolean coercion used for checkboxes.
    pub fn is_truthy(&self) -> bool {
        match self {
            FormValue::Null => false,
            FormValue::Bool(b) => *b,
            FormValue::Number(n) => *n != 0.0 && !n.is_nan(),
            FormValue::Text(s) => !s.is_empty(),
            FormValue::List(_) => true,
            FormValue::Other(_) => true,
        }
    }

    /// String rendering of the value, lists joined with `,`.
    pub fn to_text(&self) -> String {
        match self {
            FormValue::Null => String::new(),
            FormValue::Bool(b) => b.to_string(),
            FormValue::Number(n) => format_number(*n),
            FormValue::Text(s) => s.clone(),
            FormValue::List(items) => items.join(","),
            FormValue::Other(_) => String::new(),
        }
    }

    /// Finite number carried by the value, parsing text input when needed.
    pub fn as_number(&self) -> Option<f64> {
        let n = match self {
            FormValue::Number(n) => *n,
            FormValue::Text(s) => s.trim().parse::<f64>().ok()?,
            _ => return None,
        };
        n.is_finite().then_some(n)
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            FormValue::List(items) => Some(items),
            _ => None,
        }
    }
}

impl From<&str> for FormValue {
    fn from(value: &str) -> Self {
        FormValue::Text(value.to_string())
    }
}

impl From<String> for FormValue {
    fn from(value: String) -> Self {
        FormValue::Text(value)
    }
}

impl From<f64> for FormValue {
    fn from(value: f64) -> Self {
        FormValue::Number(value)
    }
}

impl From<bool> for FormValue {
    fn from(value: bool) -> Self {
        FormValue::Bool(value)
    }
}

impl From<Vec<String>> for FormValue {
    fn from(value: Vec<String>) -> Self {
        FormValue::List(value)
    }
}

/// Integral floats print without a fractional part (`3` rather than `3.0`).
pub fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

//! Form input and table cell helpers shared with the browser client.
//!
//! These turn raw `<input>` strings into `FormValue`s (and back) and decide
//! how a stored property is shown in the entries table. They hold no UI
//! types so they can be tested on the host.

use crate::model::property::PropertyType;
use crate::model::rich_text::plain_text;
use crate::model::value::PropertyValue;
use crate::model::values::{format_number, FormValue};

/// Placeholder shown for pages without a title.
pub const UNTITLED: &str = "Untitled";

/// Splits a comma-separated multi-select input into trimmed, non-empty names.
pub fn parse_multi_select_input(input: &str) -> FormValue {
    FormValue::List(
        input
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
    )
}

/// Text shown in a multi-select input for the current value.
pub fn multi_select_input_text(value: Option<&FormValue>) -> String {
    match value.and_then(FormValue::as_list) {
        Some(items) => items.join(", "),
        None => String::new(),
    }
}

/// Number inputs clear to `null`; anything else is kept as typed and left for
/// the encoder to parse.
pub fn parse_number_input(input: &str) -> FormValue {
    if input.trim().is_empty() {
        return FormValue::Null;
    }
    match input.trim().parse::<f64>() {
        Ok(n) if n.is_finite() => FormValue::Number(n),
        _ => FormValue::Text(input.to_string()),
    }
}

/// Text shown in a scalar input (`value || ""`).
pub fn input_text(value: Option<&FormValue>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_text(),
        _ => String::new(),
    }
}

/// Checkbox state for the current value.
pub fn input_checked(value: Option<&FormValue>) -> bool {
    value.is_some_and(FormValue::is_truthy)
}

/// The `type` attribute of the `<input>` rendered for a kind.
pub fn input_type(property_type: PropertyType) -> &'static str {
    match property_type {
        PropertyType::Number => "number",
        PropertyType::Date => "date",
        PropertyType::Checkbox => "checkbox",
        PropertyType::Url => "url",
        PropertyType::Email => "email",
        PropertyType::PhoneNumber => "tel",
        PropertyType::Title
        | PropertyType::RichText
        | PropertyType::Select
        | PropertyType::MultiSelect => "text",
    }
}

/// How a stored property is shown in the entries table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    Link { href: String, label: String },
    Chips(Vec<String>),
    Unsupported,
}

impl Cell {
    fn link(href: String, label: String) -> Cell {
        if label.is_empty() {
            Cell::Text(String::new())
        } else {
            Cell::Link { href, label }
        }
    }
}

/// Renders a property of an entry; a missing property is an empty cell.
pub fn cell(value: Option<&PropertyValue>) -> Cell {
    let Some(value) = value else {
        return Cell::Text(String::new());
    };
    match value {
        PropertyValue::Title { title } => Cell::Text(plain_text(title)),
        PropertyValue::RichText { rich_text } => Cell::Text(plain_text(rich_text)),
        PropertyValue::Number { number } => {
            Cell::Text(number.map(format_number).unwrap_or_default())
        }
        PropertyValue::Select { select } => {
            Cell::Text(select.as_ref().map(|o| o.name.clone()).unwrap_or_default())
        }
        PropertyValue::MultiSelect { multi_select } => {
            Cell::Chips(multi_select.iter().map(|o| o.name.clone()).collect())
        }
        PropertyValue::Date { date } => {
            Cell::Text(date.as_ref().map(|d| d.start.clone()).unwrap_or_default())
        }
        PropertyValue::Checkbox { checkbox } => {
            Cell::Text(if *checkbox { "✓" } else { "✗" }.to_string())
        }
        PropertyValue::Url { url } => {
            let url = url.clone().unwrap_or_default();
            Cell::link(url.clone(), url)
        }
        PropertyValue::Email { email } => {
            let email = email.clone().unwrap_or_default();
            Cell::link(format!("mailto:{email}"), email)
        }
        PropertyValue::PhoneNumber { phone_number } => {
            Cell::Text(phone_number.clone().unwrap_or_default())
        }
        PropertyValue::Unsupported => Cell::Unsupported,
    }
}

/// A title for display, falling back to `UNTITLED`.
pub fn display_title(title: String) -> String {
    if title.trim().is_empty() {
        UNTITLED.to_string()
    } else {
        title
    }
}

/// Checks the JSON entered in the raw database form: it must be an object
/// mapping property names to property configurations.
pub fn parse_properties_json(
    input: &str,
) -> Result<serde_json::Map<String, serde_json::Value>, String> {
    match serde_json::from_str::<serde_json::Value>(input) {
        Ok(serde_json::Value::Object(map)) => Ok(map),
        Ok(_) => Err(
            "JSON must be an object mapping property names to property types.".to_string(),
        ),
        Err(_) => Err("Invalid JSON format.".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn value(json: serde_json::Value) -> PropertyValue {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn multi_select_input_is_split_and_trimmed() {
        assert_eq!(
            parse_multi_select_input(" a, b ,,c ,"),
            FormValue::List(vec!["a".into(), "b".into(), "c".into()])
        );
        assert_eq!(parse_multi_select_input(""), FormValue::List(vec![]));
        assert_eq!(
            multi_select_input_text(Some(&FormValue::List(vec!["a".into(), "b".into()]))),
            "a, b"
        );
        assert_eq!(multi_select_input_text(Some(&FormValue::from("a"))), "");
    }

    #[test]
    fn number_input_clears_to_null_and_keeps_invalid_text() {
        assert_eq!(parse_number_input(""), FormValue::Null);
        assert_eq!(parse_number_input("2.5"), FormValue::Number(2.5));
        assert_eq!(parse_number_input("1e"), FormValue::Text("1e".into()));
        assert_eq!(input_text(Some(&FormValue::Number(2.0))), "2");
        assert_eq!(input_text(Some(&FormValue::Null)), "");
        assert_eq!(input_text(None), "");
    }

    #[test]
    fn cells_render_per_kind() {
        assert_eq!(
            cell(Some(&value(json!({ "type": "checkbox", "checkbox": true })))),
            Cell::Text("✓".into())
        );
        assert_eq!(
            cell(Some(&value(json!({ "type": "number", "number": null })))),
            Cell::Text(String::new())
        );
        assert_eq!(
            cell(Some(&value(json!({ "type": "email", "email": "a@b.co" })))),
            Cell::Link {
                href: "mailto:a@b.co".into(),
                label: "a@b.co".into()
            }
        );
        assert_eq!(
            cell(Some(&value(json!({ "type": "url", "url": null })))),
            Cell::Text(String::new())
        );
        assert_eq!(
            cell(Some(&value(json!({ "type": "multi_select", "multi_select": [{ "name": "x" }] })))),
            Cell::Chips(vec!["x".into()])
        );
        assert_eq!(
            cell(Some(&value(json!({ "type": "rollup", "rollup": {} })))),
            Cell::Unsupported
        );
        assert_eq!(cell(None), Cell::Text(String::new()));
    }

    #[test]
    fn properties_json_must_be_an_object() {
        assert!(parse_properties_json(r#"{"Price": {"number": {}}}"#).is_ok());
        assert_eq!(
            parse_properties_json("[1, 2]").unwrap_err(),
            "JSON must be an object mapping property names to property types."
        );
        assert_eq!(parse_properties_json("{").unwrap_err(), "Invalid JSON format.");
    }

    #[test]
    fn blank_titles_fall_back() {
        assert_eq!(display_title("  ".into()), UNTITLED);
        assert_eq!(display_title("Roadmap".into()), "Roadmap");
    }
}

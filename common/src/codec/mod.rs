//! # Property Codec
//!
//! Converts between the workspace API's typed property shapes and the flat
//! `ValuesRecord` used by the forms.
//!
//! - `encode` turns `(schema, values)` into the `properties` payload of a page
//!   create/update request.
//! - `decode` turns the properties of an existing page into form values.
//!
//! Both are total: nothing here returns an error. A value that cannot be
//! encoded (an empty field, a number that does not parse, an unsupported
//! kind) is left out of the output. Callers get no signal that a field was
//! dropped.

use crate::model::page::Page;
use crate::model::property::{PropertyKind, PropertySchema, SelectOption};
use crate::model::rich_text::{plain_text, RichText};
use crate::model::value::{DateValue, PropertyValue};
use crate::model::values::{FormValue, ValuesRecord};
use crate::model::write::{DateWrite, PropertyWrite, RemoteWritePayload, RichTextWrite, SelectWrite};
use std::collections::BTreeMap;

/// Encodes form values against a database schema.
///
/// Every schema key is visited in order. Keys whose value is missing or empty
/// are skipped, except checkboxes which are always sent (`false` when absent).
/// Values for keys that are not in the schema are ignored.
pub fn encode(schema: &PropertySchema, values: &ValuesRecord) -> RemoteWritePayload {
    schema
        .iter()
        .filter_map(|(key, definition)| {
            encode_property(&definition.kind, values.get(key)).map(|write| (key.clone(), write))
        })
        .collect()
}

fn encode_property(kind: &PropertyKind, value: Option<&FormValue>) -> Option<PropertyWrite> {
    let present = value.filter(|v| !v.is_empty());

    match kind {
        PropertyKind::Checkbox => Some(PropertyWrite::Checkbox(
            value.is_some_and(FormValue::is_truthy),
        )),
        PropertyKind::Title => present.map(|v| PropertyWrite::Title(text_runs(v))),
        PropertyKind::RichText => present.map(|v| PropertyWrite::RichText(text_runs(v))),
        PropertyKind::Number => present
            .and_then(FormValue::as_number)
            .map(PropertyWrite::Number),
        PropertyKind::Select { .. } => present.map(|v| PropertyWrite::Select(SelectWrite { name: v.to_text() })),
        PropertyKind::MultiSelect { .. } => match present {
            Some(FormValue::List(names)) if !names.is_empty() => Some(PropertyWrite::MultiSelect(
                names
                    .iter()
                    .map(|name| SelectWrite { name: name.clone() })
                    .collect(),
            )),
            _ => None,
        },
        PropertyKind::Date => present.map(|v| PropertyWrite::Date(DateWrite { start: v.to_text() })),
        PropertyKind::Url => present.map(|v| PropertyWrite::Url(v.to_text())),
        PropertyKind::Email => present.map(|v| PropertyWrite::Email(v.to_text())),
        PropertyKind::PhoneNumber => present.map(|v| PropertyWrite::PhoneNumber(v.to_text())),
        PropertyKind::Unsupported => None,
    }
}

fn text_runs(value: &FormValue) -> Vec<RichTextWrite> {
    vec![RichTextWrite::new(value.to_text())]
}

/// Extracts form values from the properties of a page.
///
/// Unset optional fields normalize to `""` (or `[]` for multi-select); a
/// number without a value stays `null`. Unsupported kinds are left out.
pub fn decode(properties: &BTreeMap<String, PropertyValue>) -> ValuesRecord {
    properties
        .iter()
        .filter_map(|(key, value)| decode_property(value).map(|v| (key.clone(), v)))
        .collect()
}

/// Shorthand for `decode(&page.properties)`.
pub fn decode_page(page: &Page) -> ValuesRecord {
    decode(&page.properties)
}

fn decode_property(value: &PropertyValue) -> Option<FormValue> {
    let decoded = match value {
        PropertyValue::Title { title } => FormValue::Text(plain_text(title)),
        PropertyValue::RichText { rich_text } => FormValue::Text(plain_text(rich_text)),
        PropertyValue::Number { number } => number.map_or(FormValue::Null, FormValue::Number),
        PropertyValue::Select { select } => {
            FormValue::Text(select.as_ref().map(|o| o.name.clone()).unwrap_or_default())
        }
        PropertyValue::MultiSelect { multi_select } => {
            FormValue::List(multi_select.iter().map(|o| o.name.clone()).collect())
        }
        PropertyValue::Date { date } => {
            FormValue::Text(date.as_ref().map(|d| d.start.clone()).unwrap_or_default())
        }
        PropertyValue::Checkbox { checkbox } => FormValue::Bool(*checkbox),
        PropertyValue::Url { url } => FormValue::Text(url.clone().unwrap_or_default()),
        PropertyValue::Email { email } => FormValue::Text(email.clone().unwrap_or_default()),
        PropertyValue::PhoneNumber { phone_number } => {
            FormValue::Text(phone_number.clone().unwrap_or_default())
        }
        PropertyValue::Unsupported => return None,
    };
    Some(decoded)
}

/// The value the API reports back after storing a written property.
impl From<PropertyWrite> for PropertyValue {
    fn from(write: PropertyWrite) -> Self {
        fn runs(writes: Vec<RichTextWrite>) -> Vec<RichText> {
            writes
                .into_iter()
                .map(|w| RichText::plain(w.text.content))
                .collect()
        }

        match write {
            PropertyWrite::Title(title) => PropertyValue::Title { title: runs(title) },
            PropertyWrite::RichText(rich_text) => PropertyValue::RichText {
                rich_text: runs(rich_text),
            },
            PropertyWrite::Number(n) => PropertyValue::Number { number: Some(n) },
            PropertyWrite::Select(s) => PropertyValue::Select {
                select: Some(SelectOption::named(s.name)),
            },
            PropertyWrite::MultiSelect(items) => PropertyValue::MultiSelect {
                multi_select: items.into_iter().map(|s| SelectOption::named(s.name)).collect(),
            },
            PropertyWrite::Date(d) => PropertyValue::Date {
                date: Some(DateValue {
                    start: d.start,
                    ..DateValue::default()
                }),
            },
            PropertyWrite::Checkbox(checked) => PropertyValue::Checkbox { checkbox: checked },
            PropertyWrite::Url(url) => PropertyValue::Url { url: Some(url) },
            PropertyWrite::Email(email) => PropertyValue::Email { email: Some(email) },
            PropertyWrite::PhoneNumber(phone) => PropertyValue::PhoneNumber {
                phone_number: Some(phone),
            },
        }
    }
}

/// Properties of the page the API would store for `encode(schema, values)`.
///
/// Keys left out by `encode` are reported by the API with their empty value,
/// so they are filled in here the same way.
pub fn stored_properties(
    schema: &PropertySchema,
    values: &ValuesRecord,
) -> BTreeMap<String, PropertyValue> {
    let mut written = encode(schema, values);
    schema
        .iter()
        .filter_map(|(key, definition)| {
            let value = match written.remove(key) {
                Some(write) => PropertyValue::from(write),
                None => empty_value(&definition.kind)?,
            };
            Some((key.clone(), value))
        })
        .collect()
}

fn empty_value(kind: &PropertyKind) -> Option<PropertyValue> {
    let value = match kind {
        PropertyKind::Title => PropertyValue::Title { title: vec![] },
        PropertyKind::RichText => PropertyValue::RichText { rich_text: vec![] },
        PropertyKind::Number => PropertyValue::Number { number: None },
        PropertyKind::Select { .. } => PropertyValue::Select { select: None },
        PropertyKind::MultiSelect { .. } => PropertyValue::MultiSelect {
            multi_select: vec![],
        },
        PropertyKind::Date => PropertyValue::Date { date: None },
        PropertyKind::Checkbox => PropertyValue::Checkbox { checkbox: false },
        PropertyKind::Url => PropertyValue::Url { url: None },
        PropertyKind::Email => PropertyValue::Email { email: None },
        PropertyKind::PhoneNumber => PropertyValue::PhoneNumber { phone_number: None },
        PropertyKind::Unsupported => return None,
    };
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::property::PropertyDefinition;
    use serde_json::{json, Value};

    fn schema(entries: &[(&str, PropertyKind)]) -> PropertySchema {
        entries
            .iter()
            .map(|(name, kind)| (name.to_string(), PropertyDefinition::new(kind.clone())))
            .collect()
    }

    fn values(json: Value) -> ValuesRecord {
        serde_json::from_value(json).unwrap()
    }

    fn all_kinds() -> PropertySchema {
        schema(&[
            ("Name", PropertyKind::Title),
            ("Notes", PropertyKind::RichText),
            ("Score", PropertyKind::Number),
            ("Status", PropertyKind::select(&["Todo", "Done"])),
            ("Tags", PropertyKind::multi_select(&["x", "y"])),
            ("Due", PropertyKind::Date),
            ("Done", PropertyKind::Checkbox),
            ("Site", PropertyKind::Url),
            ("Mail", PropertyKind::Email),
            ("Phone", PropertyKind::PhoneNumber),
        ])
    }

    #[test]
    fn encodes_the_reference_task_record() {
        let schema = schema(&[
            ("Name", PropertyKind::Title),
            ("Status", PropertyKind::select(&["Todo"])),
            ("Tags", PropertyKind::multi_select(&["x", "y"])),
            ("Done", PropertyKind::Checkbox),
        ]);
        let values = values(json!({ "Name": "Task A", "Status": "Todo", "Tags": ["x", "y"] }));

        assert_eq!(
            serde_json::to_value(encode(&schema, &values)).unwrap(),
            json!({
                "Name": { "title": [{ "text": { "content": "Task A" } }] },
                "Status": { "select": { "name": "Todo" } },
                "Tags": { "multi_select": [{ "name": "x" }, { "name": "y" }] },
                "Done": { "checkbox": false }
            })
        );
    }

    #[test]
    fn encodes_every_supported_kind() {
        let values = values(json!({
            "Name": "Launch",
            "Notes": "first line",
            "Score": "12.5",
            "Status": "Done",
            "Tags": ["x"],
            "Due": "2024-03-01",
            "Done": true,
            "Site": "https://example.com",
            "Mail": "a@example.com",
            "Phone": "+1 555 0100"
        }));

        assert_eq!(
            serde_json::to_value(encode(&all_kinds(), &values)).unwrap(),
            json!({
                "Name": { "title": [{ "text": { "content": "Launch" } }] },
                "Notes": { "rich_text": [{ "text": { "content": "first line" } }] },
                "Score": { "number": 12.5 },
                "Status": { "select": { "name": "Done" } },
                "Tags": { "multi_select": [{ "name": "x" }] },
                "Due": { "date": { "start": "2024-03-01" } },
                "Done": { "checkbox": true },
                "Site": { "url": "https://example.com" },
                "Mail": { "email": "a@example.com" },
                "Phone": { "phone_number": "+1 555 0100" }
            })
        );
    }

    #[test]
    fn absent_and_empty_values_are_omitted_except_checkbox() {
        let empty = values(json!({
            "Name": "",
            "Notes": null,
            "Status": "",
            "Due": "",
            "Site": "",
            "Mail": null
        }));

        for record in [ValuesRecord::new(), empty] {
            let encoded = encode(&all_kinds(), &record);
            assert_eq!(encoded.len(), 1, "{encoded:?}");
            assert_eq!(encoded["Done"], PropertyWrite::Checkbox(false));
        }
    }

    #[test]
    fn malformed_number_is_silently_dropped() {
        let schema = schema(&[("Count", PropertyKind::Number)]);

        assert!(encode(&schema, &values(json!({ "Count": "abc" }))).is_empty());
        assert!(encode(&schema, &values(json!({ "Count": "" }))).is_empty());
        assert!(encode(&schema, &values(json!({ "Count": 0 }))).is_empty());
        assert_eq!(
            encode(&schema, &values(json!({ "Count": "0" })))["Count"],
            PropertyWrite::Number(0.0)
        );
        assert_eq!(
            encode(&schema, &values(json!({ "Count": " 7 " })))["Count"],
            PropertyWrite::Number(7.0)
        );
    }

    #[test]
    fn falsy_values_are_omitted_for_every_kind() {
        let schema = schema(&[
            ("Count", PropertyKind::Number),
            ("Status", PropertyKind::select(&[])),
            ("Name", PropertyKind::Title),
        ]);
        let encoded = encode(&schema, &values(json!({ "Count": 0, "Status": 0, "Name": false })));
        assert!(encoded.is_empty(), "{encoded:?}");
    }

    #[test]
    fn malformed_shapes_are_omitted_without_touching_other_fields() {
        let encoded = encode(
            &all_kinds(),
            &values(json!({ "Name": "Kept", "Tags": [1, 2], "Status": { "name": "Todo" } })),
        );
        assert_eq!(encoded.keys().collect::<Vec<_>>(), vec!["Done", "Name"]);
    }

    #[test]
    fn empty_multi_select_is_omitted_on_encode_but_kept_on_decode() {
        let schema = schema(&[("Tags", PropertyKind::multi_select(&[]))]);
        assert!(encode(&schema, &values(json!({ "Tags": [] }))).is_empty());
        assert!(encode(&schema, &values(json!({ "Tags": "x" }))).is_empty());

        let properties: BTreeMap<String, PropertyValue> = serde_json::from_value(json!({
            "Tags": { "id": "t", "type": "multi_select", "multi_select": [] }
        }))
        .unwrap();
        assert_eq!(decode(&properties)["Tags"], FormValue::List(vec![]));
    }

    #[test]
    fn checkbox_coerces_any_value_to_bool() {
        let schema = schema(&[("Done", PropertyKind::Checkbox)]);
        let cases = [
            (json!({ "Done": "yes" }), true),
            (json!({ "Done": 1 }), true),
            (json!({ "Done": 0 }), false),
            (json!({ "Done": "" }), false),
            (json!({ "Done": null }), false),
            (json!({ "Done": false }), false),
        ];
        for (input, expected) in cases {
            assert_eq!(
                encode(&schema, &values(input.clone()))["Done"],
                PropertyWrite::Checkbox(expected),
                "{input}"
            );
        }
    }

    #[test]
    fn unsupported_kinds_and_unknown_keys_are_ignored() {
        let schema = schema(&[("Total", PropertyKind::Unsupported), ("Name", PropertyKind::Title)]);
        let encoded = encode(&schema, &values(json!({ "Total": "3", "Name": "n", "Extra": "e" })));
        assert_eq!(encoded.keys().collect::<Vec<_>>(), vec!["Name"]);
    }

    #[test]
    fn encoding_is_deterministic() {
        let values = values(json!({ "Name": "Launch", "Tags": ["y", "x"], "Score": 2 }));
        let first = serde_json::to_string(&encode(&all_kinds(), &values)).unwrap();
        let second = serde_json::to_string(&encode(&all_kinds(), &values)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn decodes_a_remote_record() {
        let properties: BTreeMap<String, PropertyValue> = serde_json::from_value(json!({
            "Name": { "id": "title", "type": "title", "title": [
                { "plain_text": "Task " }, { "plain_text": "A" }
            ] },
            "Notes": { "id": "n", "type": "rich_text", "rich_text": [] },
            "Priority": { "id": "p", "type": "number", "number": null },
            "Score": { "id": "s", "type": "number", "number": 4 },
            "Status": { "id": "st", "type": "select", "select": null },
            "Tags": { "id": "tg", "type": "multi_select", "multi_select": [
                { "id": "1", "name": "x", "color": "red" }
            ] },
            "Due": { "id": "d", "type": "date", "date": { "start": "2024-01-31", "end": null, "time_zone": null } },
            "Done": { "id": "c", "type": "checkbox", "checkbox": true },
            "Site": { "id": "u", "type": "url", "url": null },
            "Mail": { "id": "e", "type": "email", "email": "a@example.com" },
            "Phone": { "id": "ph", "type": "phone_number", "phone_number": null },
            "Owner": { "id": "o", "type": "people", "people": [] }
        }))
        .unwrap();

        assert_eq!(
            serde_json::to_value(decode(&properties)).unwrap(),
            json!({
                "Name": "Task A",
                "Notes": "",
                "Priority": null,
                "Score": 4.0,
                "Status": "",
                "Tags": ["x"],
                "Due": "2024-01-31",
                "Done": true,
                "Site": "",
                "Mail": "a@example.com",
                "Phone": ""
            })
        );
    }

    #[test]
    fn decode_keeps_null_numbers_as_present_keys() {
        let properties: BTreeMap<String, PropertyValue> = serde_json::from_value(json!({
            "Priority": { "type": "number", "number": null }
        }))
        .unwrap();
        let decoded = decode(&properties);
        assert_eq!(serde_json::to_value(&decoded).unwrap(), json!({ "Priority": null }));
    }

    #[test]
    fn round_trip_reproduces_form_values() {
        let original = values(json!({
            "Name": "Launch",
            "Notes": "details",
            "Score": 3.5,
            "Status": "Todo",
            "Tags": ["x", "y"],
            "Due": "2024-05-06",
            "Done": true,
            "Site": "https://example.com",
            "Mail": "a@example.com",
            "Phone": "555"
        }));
        let decoded = decode(&stored_properties(&all_kinds(), &original));
        assert_eq!(decoded, original);

        let re_encoded = encode(&all_kinds(), &decoded);
        assert_eq!(re_encoded, encode(&all_kinds(), &original));
    }

    #[test]
    fn round_trip_normalizes_absent_fields() {
        let original = values(json!({ "Name": "Only a name", "Score": "abc" }));
        let decoded = decode(&stored_properties(&all_kinds(), &original));

        assert_eq!(
            serde_json::to_value(&decoded).unwrap(),
            json!({
                "Name": "Only a name",
                "Notes": "",
                "Score": null,
                "Status": "",
                "Tags": [],
                "Due": "",
                "Done": false,
                "Site": "",
                "Mail": "",
                "Phone": ""
            })
        );
    }
}

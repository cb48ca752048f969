//! Databases: the schema read back from the API and the property shapes used
//! to create a new one.

use crate::model::property::{PropertySchema, PropertyType, SelectConfig, SelectOption};
use crate::model::rich_text::{plain_text, RichText};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Name of the title column added to every database created here.
pub const TITLE_PROPERTY: &str = "Name";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Database {
    pub id: String,
    #[serde(default)]
    pub title: Vec<RichText>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub created_time: Option<String>,
    #[serde(default)]
    pub parent: Option<Parent>,
    #[serde(default)]
    pub properties: PropertySchema,
}

impl Database {
    pub fn title_text(&self) -> String {
        plain_text(&self.title)
    }

    /// Id of the page the database lives in, if its parent is a page.
    pub fn parent_page_id(&self) -> Option<&str> {
        self.parent.as_ref().and_then(|p| p.page_id.as_deref())
    }
}

/// Where a database lives. Only page parents are used here.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Parent {
    #[serde(rename = "type", default)]
    pub parent_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_id: Option<String>,
}

/// A property requested by the database builder form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProperty {
    pub name: String,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<SelectOption>,
}

/// Serializes as `{}`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EmptyConfig {}

/// Creation shape of one property: `{"number": {}}`, `{"select": {"options": [...]}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyConfig {
    Title(EmptyConfig),
    RichText(EmptyConfig),
    Number(EmptyConfig),
    Select(SelectConfig),
    MultiSelect(SelectConfig),
    Date(EmptyConfig),
    Checkbox(EmptyConfig),
    Url(EmptyConfig),
    Email(EmptyConfig),
    PhoneNumber(EmptyConfig),
}

impl PropertyConfig {
    /// Options are only kept for select-like kinds.
    pub fn new(property_type: PropertyType, options: Vec<SelectOption>) -> Self {
        let empty = EmptyConfig::default();
        match property_type {
            PropertyType::Title => PropertyConfig::Title(empty),
            PropertyType::RichText => PropertyConfig::RichText(empty),
            PropertyType::Number => PropertyConfig::Number(empty),
            PropertyType::Select => PropertyConfig::Select(SelectConfig { options }),
            PropertyType::MultiSelect => PropertyConfig::MultiSelect(SelectConfig { options }),
            PropertyType::Date => PropertyConfig::Date(empty),
            PropertyType::Checkbox => PropertyConfig::Checkbox(empty),
            PropertyType::Url => PropertyConfig::Url(empty),
            PropertyType::Email => PropertyConfig::Email(empty),
            PropertyType::PhoneNumber => PropertyConfig::PhoneNumber(empty),
        }
    }
}

/// Builds the `properties` object of a database create request.
///
/// A `Name` title column is always present; requested properties are added
/// after it, a later entry replacing an earlier one with the same name.
pub fn build_database_properties(requested: &[NewProperty]) -> BTreeMap<String, PropertyConfig> {
    let mut properties = BTreeMap::new();
    properties.insert(
        TITLE_PROPERTY.to_string(),
        PropertyConfig::Title(EmptyConfig::default()),
    );
    for property in requested {
        properties.insert(
            property.name.clone(),
            PropertyConfig::new(property.property_type, property.options.clone()),
        );
    }
    properties
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn builder_always_adds_the_title_column() {
        let properties = build_database_properties(&[]);
        assert_eq!(
            serde_json::to_value(&properties).unwrap(),
            json!({ "Name": { "title": {} } })
        );
    }

    #[test]
    fn builder_emits_one_shape_per_kind_with_select_options() {
        let requested = vec![
            NewProperty {
                name: "Status".into(),
                property_type: PropertyType::Select,
                options: vec![SelectOption::named("Todo"), SelectOption::named("Done")],
            },
            NewProperty {
                name: "Score".into(),
                property_type: PropertyType::Number,
                options: vec![SelectOption::named("ignored")],
            },
            NewProperty {
                name: "Contact".into(),
                property_type: PropertyType::PhoneNumber,
                options: vec![],
            },
        ];

        assert_eq!(
            serde_json::to_value(build_database_properties(&requested)).unwrap(),
            json!({
                "Name": { "title": {} },
                "Status": { "select": { "options": [{ "name": "Todo" }, { "name": "Done" }] } },
                "Score": { "number": {} },
                "Contact": { "phone_number": {} }
            })
        );
    }

    #[test]
    fn new_property_rejects_unknown_kinds() {
        let parsed = serde_json::from_value::<NewProperty>(json!({ "name": "X", "type": "formula" }));
        assert!(parsed.is_err());
    }

    #[test]
    fn database_title_joins_runs() {
        let db: Database = serde_json::from_value(json!({
            "object": "database",
            "id": "d",
            "title": [{ "plain_text": "Road" }, { "plain_text": "map" }],
            "parent": { "type": "page_id", "page_id": "p1" },
            "properties": { "Name": { "id": "title", "type": "title", "title": {} } }
        }))
        .unwrap();
        assert_eq!(db.title_text(), "Roadmap");
        assert_eq!(db.properties.len(), 1);
        assert_eq!(db.parent_page_id(), Some("p1"));
    }
}

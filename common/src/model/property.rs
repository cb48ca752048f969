//! Database schema as the workspace API describes it.
//!
//! A database carries a map from property name to a `PropertyDefinition`. The
//! definition is tagged by the remote `type` field; only the ten kinds listed in
//! `PropertyType` are understood, every other remote type lands in
//! `PropertyKind::Unsupported` and is skipped by the codec and the forms.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Property name -> definition, ordered by name so encoding is deterministic.
pub type PropertySchema = BTreeMap<String, PropertyDefinition>;

/// The closed set of property kinds handled by this application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyType {
    Title,
    RichText,
    Number,
    Select,
    MultiSelect,
    Date,
    Checkbox,
    Url,
    Email,
    PhoneNumber,
}

impl PropertyType {
    pub const ALL: [PropertyType; 10] = [
        PropertyType::Title,
        PropertyType::RichText,
        PropertyType::Number,
        PropertyType::Select,
        PropertyType::MultiSelect,
        PropertyType::Date,
        PropertyType::Checkbox,
        PropertyType::Url,
        PropertyType::Email,
        PropertyType::PhoneNumber,
    ];

    /// Kinds a user may add to a new database. The title column is always
    /// created as `Name`, so it is not offered.
    pub const USER_DEFINED: [PropertyType; 9] = [
        PropertyType::RichText,
        PropertyType::Number,
        PropertyType::Select,
        PropertyType::MultiSelect,
        PropertyType::Date,
        PropertyType::Checkbox,
        PropertyType::Url,
        PropertyType::Email,
        PropertyType::PhoneNumber,
    ];

    /// Wire name used by the workspace API.
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Title => "title",
            PropertyType::RichText => "rich_text",
            PropertyType::Number => "number",
            PropertyType::Select => "select",
            PropertyType::MultiSelect => "multi_select",
            PropertyType::Date => "date",
            PropertyType::Checkbox => "checkbox",
            PropertyType::Url => "url",
            PropertyType::Email => "email",
            PropertyType::PhoneNumber => "phone_number",
        }
    }

    /// Human readable label shown in the UI.
    pub fn label(&self) -> &'static str {
        match self {
            PropertyType::Title => "Title",
            PropertyType::RichText => "Text",
            PropertyType::Number => "Number",
            PropertyType::Select => "Select",
            PropertyType::MultiSelect => "Multi Select",
            PropertyType::Date => "Date",
            PropertyType::Checkbox => "Checkbox",
            PropertyType::Url => "URL",
            PropertyType::Email => "Email",
            PropertyType::PhoneNumber => "Phone Number",
        }
    }

    pub fn from_wire(name: &str) -> Option<PropertyType> {
        PropertyType::ALL.into_iter().find(|t| t.as_str() == name)
    }

    /// Whether the kind carries a list of options.
    pub fn has_options(&self) -> bool {
        matches!(self, PropertyType::Select | PropertyType::MultiSelect)
    }
}

/// One option of a `select` or `multi_select` property.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SelectOption {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl SelectOption {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            color: None,
        }
    }
}

/// Option list attached to `select` and `multi_select` definitions.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SelectConfig {
    #[serde(default)]
    pub options: Vec<SelectOption>,
}

/// Kind-specific part of a property definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PropertyKind {
    Title,
    RichText,
    Number,
    Select {
        #[serde(default)]
        select: SelectConfig,
    },
    MultiSelect {
        #[serde(default)]
        multi_select: SelectConfig,
    },
    Date,
    Checkbox,
    Url,
    Email,
    PhoneNumber,
    /// Any remote type outside the supported set (formula, relation, people...).
    #[serde(other)]
    Unsupported,
}

impl PropertyKind {
    pub fn property_type(&self) -> Option<PropertyType> {
        match self {
            PropertyKind::Title => Some(PropertyType::Title),
            PropertyKind::RichText => Some(PropertyType::RichText),
            PropertyKind::Number => Some(PropertyType::Number),
            PropertyKind::Select { .. } => Some(PropertyType::Select),
            PropertyKind::MultiSelect { .. } => Some(PropertyType::MultiSelect),
            PropertyKind::Date => Some(PropertyType::Date),
            PropertyKind::Checkbox => Some(PropertyType::Checkbox),
            PropertyKind::Url => Some(PropertyType::Url),
            PropertyKind::Email => Some(PropertyType::Email),
            PropertyKind::PhoneNumber => Some(PropertyType::PhoneNumber),
            PropertyKind::Unsupported => None,
        }
    }

    /// Options of a select-like kind, empty for every other kind.
    pub fn options(&self) -> &[SelectOption] {
        match self {
            PropertyKind::Select { select } => &select.options,
            PropertyKind::MultiSelect { multi_select } => &multi_select.options,
            _ => &[],
        }
    }

    pub fn select(names: &[&str]) -> Self {
        PropertyKind::Select {
            select: SelectConfig {
                options: names.iter().map(|n| SelectOption::named(*n)).collect(),
            },
        }
    }

    pub fn multi_select(names: &[&str]) -> Self {
        PropertyKind::MultiSelect {
            multi_select: SelectConfig {
                options: names.iter().map(|n| SelectOption::named(*n)).collect(),
            },
        }
    }
}

/// A single entry of a database schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyDefinition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub kind: PropertyKind,
}

impl PropertyDefinition {
    pub fn new(kind: PropertyKind) -> Self {
        Self {
            id: None,
            name: None,
            kind,
        }
    }

    /// Wire name of the definition, `None` when unsupported.
    pub fn type_name(&self) -> Option<&'static str> {
        self.kind.property_type().map(|t| t.as_str())
    }
}

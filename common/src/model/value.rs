//! Typed property values read back from the workspace API.

use crate::model::property::{PropertyType, SelectOption};
use crate::model::rich_text::RichText;
use serde::{Deserialize, Deserializer, Serialize};

/// Date value of a `date` property. Only `start` is edited by the forms.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateValue {
    pub start: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
}

/// One property of a page, tagged by the remote `type` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PropertyValue {
    Title {
        #[serde(default, deserialize_with = "null_as_default")]
        title: Vec<RichText>,
    },
    RichText {
        #[serde(default, deserialize_with = "null_as_default")]
        rich_text: Vec<RichText>,
    },
    Number {
        #[serde(default)]
        number: Option<f64>,
    },
    Select {
        #[serde(default)]
        select: Option<SelectOption>,
    },
    MultiSelect {
        #[serde(default, deserialize_with = "null_as_default")]
        multi_select: Vec<SelectOption>,
    },
    Date {
        #[serde(default)]
        date: Option<DateValue>,
    },
    Checkbox {
        #[serde(default, deserialize_with = "null_as_default")]
        checkbox: bool,
    },
    Url {
        #[serde(default)]
        url: Option<String>,
    },
    Email {
        #[serde(default)]
        email: Option<String>,
    },
    PhoneNumber {
        #[serde(default)]
        phone_number: Option<String>,
    },
    #[serde(other)]
    Unsupported,
}

impl PropertyValue {
    pub fn property_type(&self) -> Option<PropertyType> {
        match self {
            PropertyValue::Title { .. } => Some(PropertyType::Title),
            PropertyValue::RichText { .. } => Some(PropertyType::RichText),
            PropertyValue::Number { .. } => Some(PropertyType::Number),
            PropertyValue::Select { .. } => Some(PropertyType::Select),
            PropertyValue::MultiSelect { .. } => Some(PropertyType::MultiSelect),
            PropertyValue::Date { .. } => Some(PropertyType::Date),
            PropertyValue::Checkbox { .. } => Some(PropertyType::Checkbox),
            PropertyValue::Url { .. } => Some(PropertyType::Url),
            PropertyValue::Email { .. } => Some(PropertyType::Email),
            PropertyValue::PhoneNumber { .. } => Some(PropertyType::PhoneNumber),
            PropertyValue::Unsupported => None,
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

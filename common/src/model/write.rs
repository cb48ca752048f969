//! Property payloads sent to the workspace API on page create/update.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The `properties` field of a page create/update request.
pub type RemoteWritePayload = BTreeMap<String, PropertyWrite>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextContent {
    pub content: String,
}

/// A rich-text run in request form: `{"text": {"content": "..."}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RichTextWrite {
    pub text: TextContent,
}

impl RichTextWrite {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            text: TextContent {
                content: content.into(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectWrite {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWrite {
    pub start: String,
}

/// One encoded property, keyed by its kind: `{"select": {"name": "Todo"}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyWrite {
    Title(Vec<RichTextWrite>),
    RichText(Vec<RichTextWrite>),
    Number(f64),
    Select(SelectWrite),
    MultiSelect(Vec<SelectWrite>),
    Date(DateWrite),
    Checkbox(bool),
    Url(String),
    Email(String),
    PhoneNumber(String),
}

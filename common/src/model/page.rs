use crate::model::rich_text::plain_text;
use crate::model::value::PropertyValue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A page, which is also how database entries are represented remotely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub id: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub created_time: Option<String>,
    #[serde(default)]
    pub last_edited_time: Option<String>,
    #[serde(default)]
    pub properties: BTreeMap<String, PropertyValue>,
}

impl Page {
    /// Text of the page's title property, empty when it has none.
    pub fn title(&self) -> String {
        self.properties
            .values()
            .find_map(|p| match p {
                PropertyValue::Title { title } => Some(plain_text(title)),
                _ => None,
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn title_is_read_from_the_title_property_whatever_its_name() {
        let page: Page = serde_json::from_value(json!({
            "object": "page",
            "id": "59833787-2cf9-4fdf-8782-e53db20768a5",
            "properties": {
                "Tags": { "id": "t", "type": "multi_select", "multi_select": [] },
                "Task": { "id": "title", "type": "title", "title": [
                    { "type": "text", "plain_text": "Write ", "text": { "content": "Write " } },
                    { "type": "text", "plain_text": "docs", "text": { "content": "docs" } }
                ] }
            }
        }))
        .unwrap();
        assert_eq!(page.title(), "Write docs");
        assert!(!page.archived);
    }

    #[test]
    fn untitled_page_has_empty_title() {
        let page: Page = serde_json::from_value(json!({ "id": "p" })).unwrap();
        assert_eq!(page.title(), "");
    }
}

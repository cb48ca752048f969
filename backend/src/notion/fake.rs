//! In-memory `WorkspaceApi` used by the handler tests.

use super::{DatabaseProperties, NotionError, WorkspaceApi};
use async_trait::async_trait;
use common::model::database::Database;
use common::model::page::Page;
use common::model::user::User;
use common::model::value::PropertyValue;
use common::model::write::RemoteWritePayload;
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::sync::Mutex;

pub const DATABASE_ID: &str = "11111111-1111-1111-1111-111111111111";
pub const PAGE_ID: &str = "22222222-2222-2222-2222-222222222222";
pub const PARENT_ID: &str = "33333333-3333-3333-3333-333333333333";

/// Every call the fake received, in order, as `(operation, payload)`.
#[derive(Default)]
pub struct FakeWorkspace {
    pub calls: Mutex<Vec<(String, Value)>>,
    pub fail: bool,
}

impl FakeWorkspace {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<(String, Value)> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, operation: &str, payload: Value) -> Result<(), NotionError> {
        self.calls
            .lock()
            .unwrap()
            .push((operation.to_string(), payload));
        if self.fail {
            return Err(NotionError::Api {
                status: 401,
                code: "unauthorized".into(),
                message: "API token is invalid.".into(),
            });
        }
        Ok(())
    }
}

pub fn database() -> Database {
    serde_json::from_value(json!({
        "id": DATABASE_ID,
        "title": [{ "plain_text": "Tasks" }],
        "properties": {
            "Name": { "id": "title", "type": "title", "title": {} },
            "Done": { "id": "c", "type": "checkbox", "checkbox": {} }
        }
    }))
    .unwrap()
}

pub fn page(properties: BTreeMap<String, PropertyValue>) -> Page {
    Page {
        id: PAGE_ID.to_string(),
        url: None,
        archived: false,
        created_time: None,
        last_edited_time: None,
        properties,
    }
}

fn stored(properties: &RemoteWritePayload) -> BTreeMap<String, PropertyValue> {
    properties
        .iter()
        .map(|(k, w)| (k.clone(), PropertyValue::from(w.clone())))
        .collect()
}

#[async_trait]
impl WorkspaceApi for FakeWorkspace {
    async fn list_databases(&self) -> Result<Vec<Database>, NotionError> {
        self.record("list_databases", Value::Null)?;
        Ok(vec![database()])
    }

    async fn get_database(&self, database_id: &str) -> Result<Database, NotionError> {
        self.record("get_database", json!(database_id))?;
        Ok(database())
    }

    async fn query_entries(&self, database_id: &str) -> Result<Vec<Page>, NotionError> {
        self.record("query_entries", json!(database_id))?;
        let title = serde_json::from_value(json!({
            "type": "title",
            "title": [{ "plain_text": "Task A" }]
        }))?;
        Ok(vec![page(BTreeMap::from([("Name".to_string(), title)]))])
    }

    async fn create_database(
        &self,
        parent_page_id: &str,
        title: &str,
        properties: DatabaseProperties,
    ) -> Result<Database, NotionError> {
        let properties = match properties {
            DatabaseProperties::Built(built) => serde_json::to_value(built)?,
            DatabaseProperties::Raw(raw) => Value::Object(raw),
        };
        self.record(
            "create_database",
            json!({ "parent": parent_page_id, "title": title, "properties": properties }),
        )?;
        Ok(database())
    }

    async fn create_entry(
        &self,
        database_id: &str,
        properties: &RemoteWritePayload,
    ) -> Result<Page, NotionError> {
        self.record(
            "create_entry",
            json!({ "database_id": database_id, "properties": properties }),
        )?;
        Ok(page(stored(properties)))
    }

    async fn update_entry(
        &self,
        page_id: &str,
        properties: &RemoteWritePayload,
    ) -> Result<Page, NotionError> {
        self.record(
            "update_entry",
            json!({ "page_id": page_id, "properties": properties }),
        )?;
        Ok(page(stored(properties)))
    }

    async fn archive_page(&self, page_id: &str) -> Result<Page, NotionError> {
        self.record("archive_page", json!(page_id))?;
        Ok(Page {
            archived: true,
            ..page(BTreeMap::new())
        })
    }

    async fn list_pages(&self) -> Result<Vec<Page>, NotionError> {
        self.record("list_pages", Value::Null)?;
        Ok(vec![page(BTreeMap::new())])
    }

    async fn get_page(&self, page_id: &str) -> Result<Page, NotionError> {
        self.record("get_page", json!(page_id))?;
        Ok(page(BTreeMap::new()))
    }

    async fn create_page(
        &self,
        parent_id: &str,
        title: &str,
        content: Option<&str>,
    ) -> Result<Page, NotionError> {
        self.record(
            "create_page",
            json!({ "parent_id": parent_id, "title": title, "content": content }),
        )?;
        Ok(page(BTreeMap::new()))
    }

    async fn current_user(&self) -> Result<User, NotionError> {
        self.record("current_user", Value::Null)?;
        Ok(User {
            id: "bot".into(),
            name: Some("Integration".into()),
            avatar_url: None,
            user_type: Some("bot".into()),
        })
    }
}

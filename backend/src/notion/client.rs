//! HTTP implementation of `WorkspaceApi` on top of `reqwest`.
//!
//! A single `reqwest::Client` is shared by every worker: it carries the bearer
//! token and the `Notion-Version` header as default headers and enforces the
//! configured timeout on every call.

use super::error::ApiErrorBody;
use super::{DatabaseProperties, NotionError, WorkspaceApi};
use async_trait::async_trait;
use common::model::database::Database;
use common::model::page::Page;
use common::model::user::User;
use common::model::write::RemoteWritePayload;
use log::{debug, warn};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;

/// Largest page size accepted by the search and query endpoints.
const PAGE_SIZE: u32 = 100;

/// Connection settings for `NotionClient`.
#[derive(Debug, Clone)]
pub struct NotionConfig {
    pub api_key: String,
    pub base_url: String,
    pub version: String,
    pub timeout: Duration,
}

/// Paginated list returned by search and query. Only the first page is read.
#[derive(Debug, Deserialize)]
struct ListResponse<T> {
    results: Vec<T>,
    #[serde(default)]
    has_more: bool,
}

pub struct NotionClient {
    http: reqwest::Client,
    base_url: String,
}

impl NotionClient {
    pub fn new(config: &NotionConfig) -> Result<Self, NotionError> {
        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.api_key))
            .map_err(|_| NotionError::Config("API key is not a valid header value".into()))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        headers.insert(
            "Notion-Version",
            HeaderValue::from_str(&config.version)
                .map_err(|_| NotionError::Config("API version is not a valid header value".into()))?,
        );

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .user_agent(concat!("notion-desk/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http
            .request(method, format!("{}/v1/{}", self.base_url, path))
    }

    /// Sends the request and decodes a successful body into `T`.
    ///
    /// Non-2xx responses are turned into `NotionError::Api` using the error
    /// body when the API provides one.
    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, NotionError> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let error: ApiErrorBody = serde_json::from_slice(&body).unwrap_or_default();
            warn!(
                "Workspace API responded {}: {} {}",
                status, error.code, error.message
            );
            return Err(NotionError::Api {
                status: status.as_u16(),
                code: error.code,
                message: error.message,
            });
        }

        Ok(serde_json::from_slice(&body)?)
    }

    async fn search<T: DeserializeOwned>(&self, object: &str) -> Result<Vec<T>, NotionError> {
        debug!("Searching for {} objects", object);
        let list: ListResponse<T> = self
            .send(self.request(Method::POST, "search").json(&json!({
                "filter": { "property": "object", "value": object },
                "page_size": PAGE_SIZE,
            })))
            .await?;
        if list.has_more {
            debug!("Search for {} objects returned more than one page", object);
        }
        Ok(list.results)
    }
}

/// Request body of a page create with a title and an optional paragraph.
pub(crate) fn page_create_body(parent_id: &str, title: &str, content: Option<&str>) -> Value {
    let children: Vec<Value> = content
        .filter(|c| !c.is_empty())
        .map(|content| {
            json!({
                "object": "block",
                "type": "paragraph",
                "paragraph": {
                    "rich_text": [{ "type": "text", "text": { "content": content } }]
                }
            })
        })
        .into_iter()
        .collect();

    json!({
        "parent": { "page_id": parent_id },
        "properties": {
            "title": { "title": [{ "text": { "content": title } }] }
        },
        "children": children,
    })
}

/// Request body of a database create under a parent page.
pub(crate) fn database_create_body(
    parent_page_id: &str,
    title: &str,
    properties: DatabaseProperties,
) -> Result<Value, NotionError> {
    let properties = match properties {
        DatabaseProperties::Built(built) => serde_json::to_value(built)?,
        DatabaseProperties::Raw(raw) => Value::Object(raw),
    };
    Ok(json!({
        "parent": { "type": "page_id", "page_id": parent_page_id },
        "title": [{ "type": "text", "text": { "content": title } }],
        "properties": properties,
    }))
}

#[async_trait]
impl WorkspaceApi for NotionClient {
    async fn list_databases(&self) -> Result<Vec<Database>, NotionError> {
        self.search("database").await
    }

    async fn get_database(&self, database_id: &str) -> Result<Database, NotionError> {
        self.send(self.request(Method::GET, &format!("databases/{}", database_id)))
            .await
    }

    async fn query_entries(&self, database_id: &str) -> Result<Vec<Page>, NotionError> {
        let list: ListResponse<Page> = self
            .send(
                self.request(Method::POST, &format!("databases/{}/query", database_id))
                    .json(&json!({ "page_size": PAGE_SIZE })),
            )
            .await?;
        Ok(list.results)
    }

    async fn create_database(
        &self,
        parent_page_id: &str,
        title: &str,
        properties: DatabaseProperties,
    ) -> Result<Database, NotionError> {
        let body = database_create_body(parent_page_id, title, properties)?;
        self.send(self.request(Method::POST, "databases").json(&body))
            .await
    }

    async fn create_entry(
        &self,
        database_id: &str,
        properties: &RemoteWritePayload,
    ) -> Result<Page, NotionError> {
        self.send(self.request(Method::POST, "pages").json(&json!({
            "parent": { "database_id": database_id },
            "properties": properties,
        })))
        .await
    }

    async fn update_entry(
        &self,
        page_id: &str,
        properties: &RemoteWritePayload,
    ) -> Result<Page, NotionError> {
        self.send(
            self.request(Method::PATCH, &format!("pages/{}", page_id))
                .json(&json!({ "properties": properties })),
        )
        .await
    }

    async fn archive_page(&self, page_id: &str) -> Result<Page, NotionError> {
        self.send(
            self.request(Method::PATCH, &format!("pages/{}", page_id))
                .json(&json!({ "archived": true })),
        )
        .await
    }

    async fn list_pages(&self) -> Result<Vec<Page>, NotionError> {
        self.search("page").await
    }

    async fn get_page(&self, page_id: &str) -> Result<Page, NotionError> {
        self.send(self.request(Method::GET, &format!("pages/{}", page_id)))
            .await
    }

    async fn create_page(
        &self,
        parent_id: &str,
        title: &str,
        content: Option<&str>,
    ) -> Result<Page, NotionError> {
        self.send(
            self.request(Method::POST, "pages")
                .json(&page_create_body(parent_id, title, content)),
        )
        .await
    }

    async fn current_user(&self) -> Result<User, NotionError> {
        self.send(self.request(Method::GET, "users/me")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::database::{build_database_properties, NewProperty};
    use common::model::property::PropertyType;

    #[test]
    fn page_body_adds_a_paragraph_only_for_content() {
        let with = page_create_body("p1", "Notes", Some("Hello"));
        assert_eq!(with["parent"], json!({ "page_id": "p1" }));
        assert_eq!(
            with["properties"]["title"]["title"][0]["text"]["content"],
            json!("Notes")
        );
        assert_eq!(
            with["children"][0]["paragraph"]["rich_text"][0]["text"]["content"],
            json!("Hello")
        );

        assert_eq!(page_create_body("p1", "Notes", None)["children"], json!([]));
        assert_eq!(page_create_body("p1", "Notes", Some(""))["children"], json!([]));
    }

    #[test]
    fn database_body_wraps_built_and_raw_properties() {
        let built = build_database_properties(&[NewProperty {
            name: "Done".into(),
            property_type: PropertyType::Checkbox,
            options: vec![],
        }]);
        let body = database_create_body("p1", "Tasks", DatabaseProperties::Built(built)).unwrap();
        assert_eq!(body["parent"], json!({ "type": "page_id", "page_id": "p1" }));
        assert_eq!(body["title"][0]["text"]["content"], json!("Tasks"));
        assert_eq!(
            body["properties"],
            json!({ "Name": { "title": {} }, "Done": { "checkbox": {} } })
        );

        let raw = json!({ "Price": { "number": { "format": "dollar" } } });
        let body = database_create_body(
            "p1",
            "Prices",
            DatabaseProperties::Raw(raw.as_object().cloned().unwrap()),
        )
        .unwrap();
        assert_eq!(body["properties"], raw);
    }

    #[test]
    fn client_rejects_keys_that_cannot_be_sent_as_headers() {
        let config = NotionConfig {
            api_key: "bad\nkey".into(),
            base_url: "https://api.notion.com/".into(),
            version: "2022-06-28".into(),
            timeout: Duration::from_secs(1),
        };
        assert!(matches!(
            NotionClient::new(&config),
            Err(NotionError::Config(_))
        ));
    }
}

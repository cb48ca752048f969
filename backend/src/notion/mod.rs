//! Access to the remote workspace API.
//!
//! Handlers only see the `WorkspaceApi` trait; `NotionClient` is the HTTP
//! implementation wired in `main.rs`.

mod client;
mod error;
#[cfg(test)]
pub(crate) mod fake;

pub use client::{NotionClient, NotionConfig};
pub use error::NotionError;

use async_trait::async_trait;
use common::model::database::{Database, PropertyConfig};
use common::model::page::Page;
use common::model::user::User;
use common::model::write::RemoteWritePayload;
use std::collections::BTreeMap;
use uuid::Uuid;

/// `properties` of a database create request, either built from the form or
/// passed through from raw JSON.
#[derive(Debug, Clone)]
pub enum DatabaseProperties {
    Built(BTreeMap<String, PropertyConfig>),
    Raw(serde_json::Map<String, serde_json::Value>),
}

/// One remote call per operation; no retries, no batching.
#[async_trait]
pub trait WorkspaceApi: Send + Sync {
    async fn list_databases(&self) -> Result<Vec<Database>, NotionError>;

    async fn get_database(&self, database_id: &str) -> Result<Database, NotionError>;

    async fn query_entries(&self, database_id: &str) -> Result<Vec<Page>, NotionError>;

    async fn create_database(
        &self,
        parent_page_id: &str,
        title: &str,
        properties: DatabaseProperties,
    ) -> Result<Database, NotionError>;

    async fn create_entry(
        &self,
        database_id: &str,
        properties: &RemoteWritePayload,
    ) -> Result<Page, NotionError>;

    async fn update_entry(
        &self,
        page_id: &str,
        properties: &RemoteWritePayload,
    ) -> Result<Page, NotionError>;

    /// Entries are never hard-deleted, only archived.
    async fn archive_page(&self, page_id: &str) -> Result<Page, NotionError>;

    async fn list_pages(&self) -> Result<Vec<Page>, NotionError>;

    async fn get_page(&self, page_id: &str) -> Result<Page, NotionError>;

    async fn create_page(
        &self,
        parent_id: &str,
        title: &str,
        content: Option<&str>,
    ) -> Result<Page, NotionError>;

    async fn current_user(&self) -> Result<User, NotionError>;
}

/// Normalizes a page or database id to its hyphenated form.
///
/// Accepts both the hyphenated and the 32-hex-digit form found in share URLs.
/// Anything else is rejected before it reaches a request path.
pub fn normalize_id(id: &str) -> Result<String, NotionError> {
    Uuid::parse_str(id.trim())
        .map(|uuid| uuid.hyphenated().to_string())
        .map_err(|_| NotionError::InvalidId(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_normalized_to_hyphenated_form() {
        assert_eq!(
            normalize_id("598337872cf94fdf8782e53db20768a5").unwrap(),
            "59833787-2cf9-4fdf-8782-e53db20768a5"
        );
        assert_eq!(
            normalize_id("59833787-2cf9-4fdf-8782-e53db20768a5").unwrap(),
            "59833787-2cf9-4fdf-8782-e53db20768a5"
        );
    }

    #[test]
    fn path_like_ids_are_rejected() {
        assert!(matches!(
            normalize_id("../users/me"),
            Err(NotionError::InvalidId(_))
        ));
        assert!(normalize_id("").is_err());
    }
}

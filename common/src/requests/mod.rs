//! Request payloads sent by the browser client to the backend.

use crate::model::database::NewProperty;
use crate::model::property::PropertySchema;
use crate::model::values::ValuesRecord;
use serde::{Deserialize, Serialize};

/// Body of `POST /api/databases/{id}/entries`.
///
/// The schema travels with the values so the backend can encode without an
/// extra round trip to fetch the database.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEntryRequest {
    pub properties: PropertySchema,
    #[serde(default)]
    pub values: ValuesRecord,
}

/// Body of `PATCH /api/entries/{page_id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateEntryRequest {
    pub database_id: String,
    pub properties: PropertySchema,
    #[serde(default)]
    pub values: ValuesRecord,
}

/// Body of `POST /api/databases`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDatabaseRequest {
    pub title: String,
    pub parent_page_id: String,
    #[serde(default)]
    pub properties: Vec<NewProperty>,
}

/// Body of `POST /api/databases/json`: properties are passed through as typed
/// by the user, in the workspace API's own format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDatabaseJsonRequest {
    pub title: String,
    pub parent_page_id: String,
    pub properties: serde_json::Map<String, serde_json::Value>,
}

/// Body of `POST /api/pages`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePageRequest {
    pub parent_id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

//! Calls to the backend's `/api` routes.
//!
//! Every route answers with the `ApiResponse` envelope; these helpers unwrap
//! it into `Result<T, String>` so components only deal with the data or a
//! message they can show.

use common::model::database::Database;
use common::model::page::Page;
use common::model::user::User;
use common::requests::{
    CreateDatabaseJsonRequest, CreateDatabaseRequest, CreateEntryRequest, CreatePageRequest,
    UpdateEntryRequest,
};
use common::responses::ApiResponse;
use gloo_net::http::{Request, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

async fn send<T: DeserializeOwned>(request: RequestBuilder, fallback: &str) -> Result<T, String> {
    let response = request.send().await.map_err(|e| e.to_string())?;
    let envelope: ApiResponse<T> = response.json().await.map_err(|e| e.to_string())?;
    envelope.into_result(fallback)
}

async fn send_json<B: Serialize, T: DeserializeOwned>(
    request: RequestBuilder,
    body: &B,
    fallback: &str,
) -> Result<T, String> {
    let response = request
        .json(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    let envelope: ApiResponse<T> = response.json().await.map_err(|e| e.to_string())?;
    envelope.into_result(fallback)
}

pub async fn list_databases() -> Result<Vec<Database>, String> {
    send(Request::get("/api/databases"), "Failed to fetch databases").await
}

pub async fn get_database(database_id: &str) -> Result<Database, String> {
    send(
        Request::get(&format!("/api/databases/{}", database_id)),
        "Failed to fetch database",
    )
    .await
}

pub async fn list_entries(database_id: &str) -> Result<Vec<Page>, String> {
    send(
        Request::get(&format!("/api/databases/{}?entries=true", database_id)),
        "Failed to fetch database entries",
    )
    .await
}

pub async fn create_database(request: &CreateDatabaseRequest) -> Result<Database, String> {
    send_json(Request::post("/api/databases"), request, "Failed to create database").await
}

pub async fn create_database_json(request: &CreateDatabaseJsonRequest) -> Result<Database, String> {
    send_json(
        Request::post("/api/databases/json"),
        request,
        "Failed to create database",
    )
    .await
}

pub async fn create_entry(database_id: &str, request: &CreateEntryRequest) -> Result<Page, String> {
    send_json(
        Request::post(&format!("/api/databases/{}/entries", database_id)),
        request,
        "Failed to create database entry",
    )
    .await
}

pub async fn update_entry(page_id: &str, request: &UpdateEntryRequest) -> Result<Page, String> {
    send_json(
        Request::patch(&format!("/api/entries/{}", page_id)),
        request,
        "Failed to update database entry",
    )
    .await
}

pub async fn delete_entry(page_id: &str) -> Result<Page, String> {
    send(
        Request::delete(&format!("/api/entries/{}", page_id)),
        "Failed to delete database entry",
    )
    .await
}

pub async fn list_pages() -> Result<Vec<Page>, String> {
    send(Request::get("/api/pages"), "Failed to fetch pages").await
}

pub async fn create_page(request: &CreatePageRequest) -> Result<Page, String> {
    send_json(Request::post("/api/pages"), request, "Failed to create page").await
}

pub async fn current_user() -> Result<User, String> {
    send(Request::get("/api/users/me"), "Failed to fetch user information").await
}

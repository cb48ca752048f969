//! # Entry Service Module
//!
//! Entries are pages whose parent is a database. Creating one is routed under
//! the owning database (`POST /api/databases/{database_id}/entries`, see
//! `databases::configure_routes`); once created an entry is addressed by its
//! page id:
//!
//! *   **`PATCH /api/entries/{page_id}`**: `update::process`
//! *   **`DELETE /api/entries/{page_id}`**: `delete::process`, archives the page.

pub(crate) mod create;
mod delete;
mod update;

use actix_web::web::{delete, patch, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/entries";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/{page_id}", patch().to(update::process))
        .route("/{page_id}", delete().to(delete::process))
}

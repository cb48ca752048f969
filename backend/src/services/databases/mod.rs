//! # Database Service Module
//!
//! Routes under `/api/databases`:
//!
//! *   **`GET /`**: `list::process`, every database shared with the integration.
//! *   **`POST /`**: `create::process`, a database built from a property list.
//! *   **`POST /json`**: `create::process_json`, a database whose properties are
//!     passed through as raw JSON.
//! *   **`GET /{database_id}`**: `get::process`, the database schema, or its
//!     entries with `?entries=true`.
//! *   **`POST /{database_id}/entries`**: `entries::create::process`, encodes the
//!     submitted form values and creates an entry.

mod create;
mod get;
mod list;

use crate::services::entries;
use actix_web::web::{get, post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/databases";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("", post().to(create::process))
        .route("/json", post().to(create::process_json))
        .route("/{database_id}", get().to(get::process))
        .route("/{database_id}/entries", post().to(entries::create::process))
}

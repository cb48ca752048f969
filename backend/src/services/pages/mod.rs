//! Routes under `/api/pages`: list, get and create plain pages.

mod create;
mod get;
mod list;

use actix_web::web::{get, post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/pages";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("", post().to(create::process))
        .route("/{page_id}", get().to(get::process))
}

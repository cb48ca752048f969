//! HTTP API served under `/api`.
//!
//! Each area (`databases`, `entries`, `pages`, `users`) exposes a
//! `configure_routes()` returning its actix `Scope`; the handlers live in one
//! file per operation. Every handler answers with the `ApiResponse` envelope.

pub mod databases;
pub mod entries;
pub mod pages;
pub mod users;

use crate::notion::NotionError;
use actix_web::error::InternalError;
use actix_web::{web, HttpResponse};
use common::responses::ApiResponse;
use log::{error, warn};
use serde::Serialize;

/// Largest accepted JSON body.
const JSON_LIMIT: usize = 10 * 1024 * 1024; // 10 MB

/// JSON extractor settings: size limit, and malformed bodies answered with the
/// error envelope instead of a plain-text 400.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(JSON_LIMIT)
        .error_handler(|err, _req| {
            let body = ApiResponse::<()>::failure(format!("Invalid request body: {}", err));
            let response = HttpResponse::BadRequest().json(body);
            InternalError::from_response(err, response).into()
        })
}

/// Turns a service result into an HTTP response.
///
/// Invalid identifiers are the caller's fault (`400`). Anything else is
/// logged with its cause and reported with the fixed `failure` message (`500`).
pub(crate) fn respond<T: Serialize>(result: Result<T, NotionError>, failure: &str) -> HttpResponse {
    match result {
        Ok(data) => HttpResponse::Ok().json(ApiResponse::success(data)),
        Err(NotionError::InvalidId(id)) => {
            warn!("{}: invalid identifier {:?}", failure, id);
            HttpResponse::BadRequest().json(ApiResponse::<()>::failure(format!(
                "Invalid identifier: {}",
                id
            )))
        }
        Err(e) => {
            error!("{}: {}", failure, e);
            HttpResponse::InternalServerError().json(ApiResponse::<()>::failure(failure))
        }
    }
}

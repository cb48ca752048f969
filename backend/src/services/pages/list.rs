use crate::notion::WorkspaceApi;
use crate::services::respond;
use actix_web::{web, Responder};

/// `GET /api/pages`
pub async fn process(api: web::Data<dyn WorkspaceApi>) -> impl Responder {
    respond(api.list_pages().await, "Failed to fetch pages")
}

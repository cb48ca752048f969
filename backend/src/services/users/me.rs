use crate::notion::WorkspaceApi;
use crate::services::respond;
use actix_web::{web, Responder};

/// `GET /api/users/me`: the bot user behind the configured API key.
pub async fn process(api: web::Data<dyn WorkspaceApi>) -> impl Responder {
    respond(api.current_user().await, "Failed to fetch user information")
}

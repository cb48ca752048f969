use crate::notion::{normalize_id, NotionError, WorkspaceApi};
use crate::services::respond;
use actix_web::{web, Responder};
use common::model::page::Page;
use log::error;

/// `GET /api/pages/{page_id}`
pub async fn process(api: web::Data<dyn WorkspaceApi>, page_id: web::Path<String>) -> impl Responder {
    respond(get_page(api.get_ref(), &page_id).await, "Failed to fetch page")
}

async fn get_page(api: &dyn WorkspaceApi, page_id: &str) -> Result<Page, NotionError> {
    let page_id = normalize_id(page_id)?;
    api.get_page(&page_id)
        .await
        .inspect_err(|e| error!("Error fetching page {}: {}", page_id, e))
}

//! `POST /api/pages`
//!
//! Creates a page under a parent page. Non-empty `content` becomes a single
//! paragraph block.

use crate::notion::{normalize_id, NotionError, WorkspaceApi};
use crate::services::respond;
use actix_web::{web, Responder};
use common::model::page::Page;
use common::requests::CreatePageRequest;
use log::{error, info};

pub async fn process(
    api: web::Data<dyn WorkspaceApi>,
    request: web::Json<CreatePageRequest>,
) -> impl Responder {
    respond(create_page(api.get_ref(), &request).await, "Failed to create page")
}

async fn create_page(api: &dyn WorkspaceApi, request: &CreatePageRequest) -> Result<Page, NotionError> {
    let parent = normalize_id(&request.parent_id)?;
    let page = api
        .create_page(&parent, &request.title, request.content.as_deref())
        .await
        .inspect_err(|e| error!("Error creating page under {}: {}", parent, e))?;
    info!("Created page {} under {}", page.id, parent);
    Ok(page)
}

//! `POST /api/databases/{database_id}/entries`
//!
//! The browser sends the database schema together with the flat form values;
//! the codec turns them into the remote property payload.

use crate::notion::{normalize_id, NotionError, WorkspaceApi};
use crate::services::respond;
use actix_web::{web, Responder};
use common::codec::encode;
use common::model::page::Page;
use common::requests::CreateEntryRequest;
use log::{debug, error, info};

pub async fn process(
    api: web::Data<dyn WorkspaceApi>,
    database_id: web::Path<String>,
    request: web::Json<CreateEntryRequest>,
) -> impl Responder {
    respond(
        create_entry(api.get_ref(), &database_id, &request).await,
        "Failed to create database entry",
    )
}

async fn create_entry(
    api: &dyn WorkspaceApi,
    database_id: &str,
    request: &CreateEntryRequest,
) -> Result<Page, NotionError> {
    let database_id = normalize_id(database_id)?;
    let payload = encode(&request.properties, &request.values);
    debug!(
        "Encoded {} of {} properties for a new entry in {}",
        payload.len(),
        request.properties.len(),
        database_id
    );

    let page = api
        .create_entry(&database_id, &payload)
        .await
        .inspect_err(|e| error!("Error creating entry in {}: {}", database_id, e))?;
    info!("Created entry {} in {}", page.id, database_id);
    Ok(page)
}

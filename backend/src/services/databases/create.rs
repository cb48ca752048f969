//! # Database Creation Service
//!
//! Two handlers share this module:
//!
//! - `process` (`POST /api/databases`) takes the builder form's property list,
//!   turns it into the remote creation shape with `build_database_properties`
//!   (which always adds the `Name` title column) and creates the database.
//! - `process_json` (`POST /api/databases/json`) forwards a property map typed
//!   by the user as JSON, unchanged.
//!
//! Both validate the parent page id first and answer `400` when it is not a
//! page or database identifier.

use crate::notion::{normalize_id, DatabaseProperties, NotionError, WorkspaceApi};
use crate::services::respond;
use actix_web::{web, Responder};
use common::model::database::{build_database_properties, Database};
use common::requests::{CreateDatabaseJsonRequest, CreateDatabaseRequest};
use log::{error, info};

const FAILURE: &str = "Failed to create database";

pub async fn process(
    api: web::Data<dyn WorkspaceApi>,
    request: web::Json<CreateDatabaseRequest>,
) -> impl Responder {
    let request = request.into_inner();
    let properties = DatabaseProperties::Built(build_database_properties(&request.properties));
    respond(
        create_database(api.get_ref(), &request.parent_page_id, &request.title, properties).await,
        FAILURE,
    )
}

pub async fn process_json(
    api: web::Data<dyn WorkspaceApi>,
    request: web::Json<CreateDatabaseJsonRequest>,
) -> impl Responder {
    let request = request.into_inner();
    let properties = DatabaseProperties::Raw(request.properties);
    respond(
        create_database(api.get_ref(), &request.parent_page_id, &request.title, properties).await,
        FAILURE,
    )
}

async fn create_database(
    api: &dyn WorkspaceApi,
    parent_page_id: &str,
    title: &str,
    properties: DatabaseProperties,
) -> Result<Database, NotionError> {
    let parent = normalize_id(parent_page_id)?;
    let database = api
        .create_database(&parent, title, properties)
        .await
        .inspect_err(|e| error!("Error creating database {:?} under {}: {}", title, parent, e))?;
    info!("Created database {} ({:?})", database.id, title);
    Ok(database)
}

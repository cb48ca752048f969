//! `GET /api/databases/{database_id}`
//!
//! Returns the database with its property schema. With `?entries=true` the
//! same route returns the database's entries instead, which is what the
//! database view loads after the schema.

use crate::notion::{normalize_id, NotionError, WorkspaceApi};
use crate::services::respond;
use actix_web::{web, Responder};
use common::model::database::Database;
use common::model::page::Page;
use log::error;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct DatabaseQuery {
    entries: Option<String>,
}

impl DatabaseQuery {
    fn wants_entries(&self) -> bool {
        self.entries.as_deref() == Some("true")
    }
}

pub async fn process(
    api: web::Data<dyn WorkspaceApi>,
    database_id: web::Path<String>,
    query: web::Query<DatabaseQuery>,
) -> impl Responder {
    if query.wants_entries() {
        respond(
            query_entries(api.get_ref(), &database_id).await,
            "Failed to fetch database entries",
        )
    } else {
        respond(
            get_database(api.get_ref(), &database_id).await,
            "Failed to fetch database",
        )
    }
}

async fn get_database(
    api: &dyn WorkspaceApi,
    database_id: &str,
) -> Result<Database, NotionError> {
    let id = normalize_id(database_id)?;
    api.get_database(&id)
        .await
        .inspect_err(|e| error!("Error fetching database {}: {}", id, e))
}

async fn query_entries(
    api: &dyn WorkspaceApi,
    database_id: &str,
) -> Result<Vec<Page>, NotionError> {
    let id = normalize_id(database_id)?;
    api.query_entries(&id)
        .await
        .inspect_err(|e| error!("Error querying entries of {}: {}", id, e))
}

#[cfg(test)]
mod tests {
    use crate::notion::fake::{FakeWorkspace, DATABASE_ID};
    use crate::services::{databases, testing};
    use actix_web::{test, App};
    use serde_json::{json, Value};
    use std::sync::Arc;

    #[actix_web::test]
    async fn returns_the_schema_by_default() {
        let fake = Arc::new(FakeWorkspace::default());
        let app = test::init_service(
            App::new()
                .app_data(testing::data(&fake))
                .service(databases::configure_routes()),
        )
        .await;

        let uri = format!("/api/databases/{}", DATABASE_ID.replace('-', ""));
        let req = test::TestRequest::get().uri(&uri).to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["properties"]["Done"]["type"], "checkbox");
        assert_eq!(
            fake.calls(),
            vec![("get_database".to_string(), json!(DATABASE_ID))]
        );
    }

    #[actix_web::test]
    async fn returns_entries_when_asked() {
        let fake = Arc::new(FakeWorkspace::default());
        let app = test::init_service(
            App::new()
                .app_data(testing::data(&fake))
                .service(databases::configure_routes()),
        )
        .await;

        let uri = format!("/api/databases/{}?entries=true", DATABASE_ID);
        let req = test::TestRequest::get().uri(&uri).to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["data"][0]["properties"]["Name"]["title"][0]["plain_text"], "Task A");
        assert_eq!(fake.calls()[0].0, "query_entries");
    }

    #[actix_web::test]
    async fn rejects_malformed_ids_without_calling_out() {
        let fake = Arc::new(FakeWorkspace::default());
        let app = test::init_service(
            App::new()
                .app_data(testing::data(&fake))
                .service(databases::configure_routes()),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/databases/not-an-id")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert!(fake.calls().is_empty());
    }
}

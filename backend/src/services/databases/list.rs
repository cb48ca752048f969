use crate::notion::{NotionError, WorkspaceApi};
use crate::services::respond;
use actix_web::{web, Responder};
use common::model::database::Database;
use log::debug;

/// `GET /api/databases`
pub async fn process(api: web::Data<dyn WorkspaceApi>) -> impl Responder {
    respond(list_databases(api.get_ref()).await, "Failed to fetch databases")
}

async fn list_databases(api: &dyn WorkspaceApi) -> Result<Vec<Database>, NotionError> {
    let databases = api.list_databases().await?;
    debug!("Listed {} databases", databases.len());
    Ok(databases)
}

#[cfg(test)]
mod tests {
    use crate::notion::fake::{FakeWorkspace, DATABASE_ID};
    use crate::services::{databases, testing};
    use actix_web::{test, App};
    use serde_json::Value;
    use std::sync::Arc;

    #[actix_web::test]
    async fn lists_databases_in_the_envelope() {
        let fake = Arc::new(FakeWorkspace::default());
        let app = test::init_service(
            App::new()
                .app_data(testing::data(&fake))
                .service(databases::configure_routes()),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/databases").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["success"], true);
        assert_eq!(body["data"][0]["id"], DATABASE_ID);
        assert!(body.get("error").is_none());
    }

    #[actix_web::test]
    async fn remote_failures_become_a_fixed_500() {
        let fake = Arc::new(FakeWorkspace::failing());
        let app = test::init_service(
            App::new()
                .app_data(testing::data(&fake))
                .service(databases::configure_routes()),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/databases").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 500);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Failed to fetch databases");
    }
}

use crate::notion::{normalize_id, NotionError, WorkspaceApi};
use crate::services::respond;
use actix_web::{web, Responder};
use common::model::page::Page;
use log::{error, info};

/// `DELETE /api/entries/{page_id}`: archives the entry. Archived pages can
/// still be restored from the workspace itself.
pub async fn process(api: web::Data<dyn WorkspaceApi>, page_id: web::Path<String>) -> impl Responder {
    respond(
        archive_entry(api.get_ref(), &page_id).await,
        "Failed to delete database entry",
    )
}

async fn archive_entry(api: &dyn WorkspaceApi, page_id: &str) -> Result<Page, NotionError> {
    let page_id = normalize_id(page_id)?;
    let page = api
        .archive_page(&page_id)
        .await
        .inspect_err(|e| error!("Error archiving entry {}: {}", page_id, e))?;
    info!("Archived entry {}", page_id);
    Ok(page)
}

#[cfg(test)]
mod tests {
    use crate::notion::fake::{FakeWorkspace, PAGE_ID};
    use crate::services::{entries, testing};
    use actix_web::{test, App};
    use serde_json::{json, Value};
    use std::sync::Arc;

    #[actix_web::test]
    async fn archives_instead_of_deleting() {
        let fake = Arc::new(FakeWorkspace::default());
        let app = test::init_service(
            App::new()
                .app_data(testing::data(&fake))
                .service(entries::configure_routes()),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/entries/{}", PAGE_ID))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["archived"], true);
        assert_eq!(fake.calls(), vec![("archive_page".to_string(), json!(PAGE_ID))]);
    }

    #[actix_web::test]
    async fn failed_archives_report_the_fixed_message() {
        let fake = Arc::new(FakeWorkspace::failing());
        let app = test::init_service(
            App::new()
                .app_data(testing::data(&fake))
                .service(entries::configure_routes()),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/entries/{}", PAGE_ID))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 500);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Failed to delete database entry");
    }
}

//! `PATCH /api/entries/{page_id}`
//!
//! Same encoding as a create: only the properties that survive `encode` are
//! sent, so clearing a text field in the form leaves the stored value as is.

use crate::notion::{normalize_id, NotionError, WorkspaceApi};
use crate::services::respond;
use actix_web::{web, Responder};
use common::codec::encode;
use common::model::page::Page;
use common::requests::UpdateEntryRequest;
use log::{error, info};

pub async fn process(
    api: web::Data<dyn WorkspaceApi>,
    page_id: web::Path<String>,
    request: web::Json<UpdateEntryRequest>,
) -> impl Responder {
    respond(
        update_entry(api.get_ref(), &page_id, &request).await,
        "Failed to update database entry",
    )
}

async fn update_entry(
    api: &dyn WorkspaceApi,
    page_id: &str,
    request: &UpdateEntryRequest,
) -> Result<Page, NotionError> {
    let page_id = normalize_id(page_id)?;
    let database_id = normalize_id(&request.database_id)?;
    let payload = encode(&request.properties, &request.values);

    let page = api
        .update_entry(&page_id, &payload)
        .await
        .inspect_err(|e| error!("Error updating entry {} of {}: {}", page_id, database_id, e))?;
    info!("Updated entry {} of {}", page.id, database_id);
    Ok(page)
}

#[cfg(test)]
mod tests {
    use crate::notion::fake::{FakeWorkspace, DATABASE_ID, PAGE_ID};
    use crate::services::{entries, json_config, testing};
    use actix_web::{test, App};
    use serde_json::{json, Value};
    use std::sync::Arc;

    #[actix_web::test]
    async fn sends_only_the_encoded_properties() {
        let fake = Arc::new(FakeWorkspace::default());
        let app = test::init_service(
            App::new()
                .app_data(json_config())
                .app_data(testing::data(&fake))
                .service(entries::configure_routes()),
        )
        .await;

        let req = test::TestRequest::patch()
            .uri(&format!("/api/entries/{}", PAGE_ID))
            .set_json(json!({
                "database_id": DATABASE_ID,
                "properties": {
                    "Name": { "type": "title", "title": {} },
                    "Notes": { "type": "rich_text", "rich_text": {} },
                    "Score": { "type": "number", "number": {} },
                    "Tags": { "type": "multi_select", "multi_select": { "options": [] } }
                },
                "values": { "Name": "Renamed", "Notes": "", "Score": 0, "Tags": ["a", "b"] }
            }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["success"], true);

        let (operation, payload) = fake.calls().remove(0);
        assert_eq!(operation, "update_entry");
        assert_eq!(payload["page_id"], PAGE_ID);
        assert_eq!(
            payload["properties"],
            json!({
                "Name": { "title": [{ "text": { "content": "Renamed" } }] },
                "Tags": { "multi_select": [{ "name": "a" }, { "name": "b" }] }
            })
        );
    }

    #[actix_web::test]
    async fn rejects_an_invalid_database_id() {
        let fake = Arc::new(FakeWorkspace::default());
        let app = test::init_service(
            App::new()
                .app_data(json_config())
                .app_data(testing::data(&fake))
                .service(entries::configure_routes()),
        )
        .await;

        let req = test::TestRequest::patch()
            .uri(&format!("/api/entries/{}", PAGE_ID))
            .set_json(json!({ "database_id": "nope", "properties": {}, "values": {} }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
        assert!(fake.calls().is_empty());
    }
}

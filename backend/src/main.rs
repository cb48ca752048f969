mod config;
mod notion;
mod services;

use crate::config::Args;
use crate::notion::{NotionClient, NotionConfig, WorkspaceApi};
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use clap::Parser;
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::{info, warn};
use mime_guess::from_path;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

/// Serves the embedded frontend. Unknown paths fall back to `index.html` so
/// the client-side router can handle them.
async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    let path = req.path().trim_start_matches('/');
    let file_path = if path.is_empty() { "index.html" } else { path };

    match STATIC_DIR.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match STATIC_DIR.get_file("index.html") {
            Some(index) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(index.contents().to_vec()),
            None => HttpResponse::NotFound().body("Not Found"),
        },
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let args = Args::parse();
    let url = args.url();

    let client = NotionClient::new(&NotionConfig {
        api_key: args.notion_api_key.clone(),
        base_url: args.notion_api_url.clone(),
        version: args.notion_version.clone(),
        timeout: args.request_timeout(),
    })
    .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
    let api: web::Data<dyn WorkspaceApi> = web::Data::from(Arc::new(client) as Arc<dyn WorkspaceApi>);

    if args.open_browser {
        let url = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            if let Err(e) = webbrowser::open(&url) {
                warn!("Could not open a browser at {}: {}", url, e);
            }
        });
    }

    info!(
        "Server running at {} (workspace API {}, version {})",
        url, args.notion_api_url, args.notion_version
    );

    HttpServer::new(move || {
        App::new()
            .app_data(services::json_config())
            .app_data(api.clone())
            .service(services::databases::configure_routes())
            .service(services::entries::configure_routes())
            .service(services::pages::configure_routes())
            .service(services::users::configure_routes())
            .default_service(web::route().to(serve_embedded))
    })
    .bind((args.host.as_str(), args.port))?
    .run()
    .await
}

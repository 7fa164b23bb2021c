pub mod config;
pub mod config_loader;
pub mod error;
pub mod handlers;
pub mod listing;
pub mod manifest;
pub mod paths;
pub mod render;
pub mod state;
pub mod store;

pub use crate::config::DocsConfig;
pub use crate::error::{DocsError, DocsResult};
pub use crate::state::AppState;

use crate::handlers::{
    list_examples, list_pages, manifest_json, raw_file, view_manifest, view_page,
};
use axum::{
    Router,
    extract::{OriginalUri, Request},
    http::{HeaderValue, header::LOCATION},
    middleware::{self, Next},
    response::{IntoResponse, Redirect, Response},
    routing::get,
};
use std::path::Path;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

pub fn init(router: Router<AppState>, config: &DocsConfig) -> Router<()> {
    let state = AppState::from_config(config);
    routes(router, state, &config.reference_dir)
}

pub fn routes(router: Router<AppState>, state: AppState, reference_dir: &Path) -> Router<()> {
    let router = router
        .route("/", get(view_manifest))
        .route("/manifest.json", get(manifest_json))
        .route("/pages", get(list_pages))
        .route("/page", get(view_page))
        .route("/examples", get(list_examples))
        .route("/raw", get(raw_file))
        .route("/healthz", get(|| async { "ok" }));

    mount_reference(router, reference_dir)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub const REFERENCE_PREFIX: &str = "/reference";

/// Serves the pre-built reference tree under `/reference` when it exists at
/// startup. Otherwise the mount is left out entirely.
pub fn mount_reference(router: Router<AppState>, dir: &Path) -> Router<AppState> {
    if dir.is_dir() {
        tracing::info!("Serving reference docs from {:?} at {}", dir, REFERENCE_PREFIX);
        let reference = Router::new()
            .fallback_service(ServeDir::new(dir))
            .layer(middleware::from_fn(keep_reference_prefix));
        router.nest_service(REFERENCE_PREFIX, reference)
    } else {
        tracing::info!(
            "Reference docs directory {:?} not found, {} not mounted",
            dir,
            REFERENCE_PREFIX
        );
        router
    }
}

/// Relative links in the reference tree need a trailing slash on the mount
/// root, and `ServeDir` writes directory redirects without the mount prefix.
async fn keep_reference_prefix(
    OriginalUri(original): OriginalUri,
    request: Request,
    next: Next,
) -> Response {
    if original.path() == REFERENCE_PREFIX {
        let location = match original.query() {
            Some(query) => format!("{REFERENCE_PREFIX}/?{query}"),
            None => format!("{REFERENCE_PREFIX}/"),
        };
        return Redirect::temporary(&location).into_response();
    }

    let mut response = next.run(request).await;
    if response.status().is_redirection()
        && let Some(location) = response.headers().get(LOCATION).and_then(|l| l.to_str().ok())
        && location.starts_with('/')
        && let Ok(prefixed) = HeaderValue::from_str(&format!("{REFERENCE_PREFIX}{location}"))
    {
        response.headers_mut().insert(LOCATION, prefixed);
    }
    response
}

//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! A single Axum router serves the Leptos SSR pages, their compiled assets
//! under `/pkg`, and two small operational endpoints. Paths the Leptos route
//! table does not know fall through to the app shell, which renders the
//! not-found page with a 404 status.
//!
//! ARCHITECTURE
//! ============
//! `observe` wraps any router with the unmatched-path recorder plus the
//! diagnostics endpoint. `site` is the Leptos half; tests drive both with
//! hand-built `LeptosOptions`.
//!
//! TRADE-OFFS
//! ==========
//! Only page paths reach the unmatched ring. 404s under `/pkg` (missing build
//! assets) and `/api` (mistyped endpoints) are still traced by `TraceLayer`
//! but are not recorded.

use std::path::PathBuf;

use axum::Router;
use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::{self, Next};
use axum::response::{Json, Response};
use axum::routing::get;
use crallabs_client::util::diagnostics::UnmatchedRoute;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, file_and_error_handler, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

/// Operational endpoints.
fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/api/diagnostics/unmatched", get(unmatched_routes))
        .with_state(state)
}

/// Add the operational endpoints and the 404 recorder to `site`.
pub fn observe(site: Router, state: AppState) -> Router {
    api_routes(state.clone())
        .merge(site)
        .layer(middleware::from_fn_with_state(state, record_unmatched))
}

/// Leptos SSR frontend plus static assets and operational endpoints.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section).
pub fn leptos_app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;

    Ok(observe(site(conf.leptos_options), state)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

/// SSR pages, the not-found fallback and `/pkg` assets.
fn site(leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(crallabs_client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || crallabs_client::app::shell(opts.clone())
        })
        .fallback(file_and_error_handler(crallabs_client::app::shell))
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());
    Router::new()
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .merge(leptos_router)
}

/// Whether a 404 on `path` means a visitor reached an unknown page, as
/// opposed to a missing asset or a mistyped API call.
fn is_page_path(path: &str) -> bool {
    !["/pkg", "/api"]
        .iter()
        .any(|prefix| path == *prefix || path.starts_with(&format!("{prefix}/")))
}

/// Record page requests that end in a 404. This is the only server-side
/// record of an unmatched path; the fallback page does not log during SSR.
async fn record_unmatched(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let path = request.uri().path().to_owned();
    let response = next.run(request).await;
    if response.status() == StatusCode::NOT_FOUND && is_page_path(&path) {
        let record = UnmatchedRoute::new(path);
        tracing::warn!(path = %record.path, "{}", record.message());
        state.record_unmatched(record);
    }
    response
}

async fn unmatched_routes(State(state): State<AppState>) -> Json<Vec<UnmatchedRoute>> {
    Json(state.recent_unmatched())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

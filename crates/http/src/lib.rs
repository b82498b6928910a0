//! HTTP server and static exporter for apidocs.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short closure params are idiomatic")]
#![allow(clippy::single_call_fn, reason = "HTTP handlers are called once from router")]
#![allow(clippy::exhaustive_structs, reason = "HTTP types are stable")]

pub mod api_error;
mod export;
mod handlers;
mod query_types;
pub mod render;
mod response_types;

use axum::{http::Method, routing::get, Json, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use apidocs_core::{Catalog, SiteConfig};

pub use export::{export_site, ExportSummary};
pub use response_types::{EndpointGroupResponse, VersionResponse};

/// Shared state for all HTTP handlers.
///
/// The catalog is a `'static` borrow: handlers read it concurrently and
/// nothing can write to it.
#[derive(Debug, Clone)]
pub struct AppState {
    pub catalog: &'static Catalog,
    pub site: SiteConfig,
}

impl AppState {
    #[must_use]
    pub fn new(catalog: &'static Catalog, site: SiteConfig) -> Self {
        Self { catalog, site }
    }

    /// State backed by the catalog compiled into the binary.
    #[must_use]
    pub fn builtin(site: SiteConfig) -> Self {
        Self::new(Catalog::builtin(), site)
    }
}

/// Builds the application router.
///
/// Pages and JSON routes live under the site's base path, the same prefix
/// every rendered link carries. `/health` and `/version` stay at the root.
pub fn create_router(state: Arc<AppState>) -> Router {
    let json_routes = Router::new()
        .route("/json/endpoints", get(handlers::catalog::list_endpoints))
        .route("/json/endpoints/{endpoint}", get(handlers::catalog::get_endpoint))
        .route("/json/groups", get(handlers::catalog::list_groups))
        .layer(CorsLayer::new().allow_origin(Any).allow_methods([Method::GET]));

    let site_routes = Router::new()
        .route("/", get(handlers::pages::home))
        .route("/api", get(handlers::pages::endpoint_list))
        .route("/api/", get(handlers::pages::endpoint_list))
        .route("/api/{endpoint}", get(handlers::pages::endpoint_detail))
        .merge(json_routes);

    let base_path = state.site.base_path();
    let router = if base_path.is_empty() {
        site_routes
    } else {
        // A nested `/` only matches the bare prefix; links to home end in `/`.
        Router::new()
            .route(&format!("{base_path}/"), get(handlers::pages::home))
            .nest(base_path, site_routes)
    };

    router
        .route("/health", get(health))
        .route("/version", get(version))
        .fallback(handlers::pages::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse { version: env!("CARGO_PKG_VERSION") })
}

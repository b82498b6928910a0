//! HTML page handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use std::sync::Arc;

use crate::query_types::SidebarQuery;
use crate::render::{
    render_endpoint_detail, render_endpoint_list, render_home, render_not_found, RenderContext,
};
use crate::AppState;

fn context<'a>(state: &'a AppState, query: &'a SidebarQuery) -> RenderContext<'a> {
    RenderContext::new(state.catalog, &state.site, &query.q)
}

fn not_found_page(state: &AppState, query: &SidebarQuery) -> Response {
    (StatusCode::NOT_FOUND, Html(render_not_found(&context(state, query)))).into_response()
}

pub async fn home(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SidebarQuery>,
) -> Html<String> {
    Html(render_home(&context(&state, &query)))
}

pub async fn endpoint_list(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SidebarQuery>,
) -> Html<String> {
    Html(render_endpoint_list(&context(&state, &query)))
}

/// `/api/{endpoint}`: exact id match, otherwise the not-found page.
pub async fn endpoint_detail(
    State(state): State<Arc<AppState>>,
    Path(endpoint): Path<String>,
    Query(query): Query<SidebarQuery>,
) -> Response {
    match state.catalog.resolve(&endpoint) {
        Ok(descriptor) => {
            Html(render_endpoint_detail(&context(&state, &query), descriptor)).into_response()
        },
        Err(e) => {
            tracing::debug!(endpoint = %endpoint, error = %e, "rendering not-found page");
            not_found_page(&state, &query)
        },
    }
}

/// Router fallback for paths outside the site.
pub async fn not_found(State(state): State<Arc<AppState>>) -> Response {
    not_found_page(&state, &SidebarQuery::default())
}

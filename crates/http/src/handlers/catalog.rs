//! JSON views of the catalog.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;

use apidocs_core::EndpointDescriptor;

use crate::api_error::ApiError;
use crate::query_types::SidebarQuery;
use crate::response_types::EndpointGroupResponse;
use crate::AppState;

pub async fn list_endpoints(
    State(state): State<Arc<AppState>>,
) -> Json<&'static [EndpointDescriptor]> {
    let catalog = state.catalog;
    Json(catalog.endpoints())
}

pub async fn get_endpoint(
    State(state): State<Arc<AppState>>,
    Path(endpoint): Path<String>,
) -> Result<Json<&'static EndpointDescriptor>, ApiError> {
    let catalog = state.catalog;
    catalog.resolve(&endpoint).map(Json).map_err(|err| ApiError::unresolved(&err))
}

/// Sidebar sections for `?q=`, empty ones left out.
pub async fn list_groups(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SidebarQuery>,
) -> Json<Vec<EndpointGroupResponse>> {
    let catalog = state.catalog;
    let groups = catalog
        .filtered_groups(&query.search())
        .into_iter()
        .filter(|group| !group.is_empty())
        .map(EndpointGroupResponse::from)
        .collect();
    Json(groups)
}

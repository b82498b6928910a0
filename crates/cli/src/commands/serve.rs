use anyhow::Result;
use std::sync::Arc;

use apidocs_core::SiteConfig;
use apidocs_http::{create_router, AppState};

pub(crate) async fn run(port: u16, host: String) -> Result<()> {
    let site = SiteConfig::from_env();
    let state = Arc::new(AppState::builtin(site));
    tracing::info!(
        endpoints = state.catalog.len(),
        base_path = state.site.base_path(),
        "Catalog loaded"
    );

    let router = create_router(state);
    let addr = format!("{host}:{port}");
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

//! Static export of the reference site.
//!
//! Writes one `index.html` per route so any static host (GitHub Pages
//! included) can serve the site without this binary:
//!
//! ```text
//! <out>/index.html
//! <out>/api/index.html
//! <out>/api/<id>/index.html
//! <out>/404.html
//! <out>/endpoints.json
//! ```

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use apidocs_core::{Catalog, SiteConfig};

use crate::render::{
    render_endpoint_detail, render_endpoint_list, render_home, render_not_found, RenderContext,
};

/// What an export run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub out_dir: PathBuf,
    /// HTML documents written, including `404.html`
    pub pages: usize,
}

fn write_page(path: &Path, html: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating directory {}", parent.display()))?;
    }
    fs::write(path, html).with_context(|| format!("writing {}", path.display()))
}

/// Renders every page with an empty sidebar query into `out_dir`.
///
/// Catalog ids are single URL path segments, so each detail page lands in
/// its own directory directly under `api/`.
pub fn export_site(out_dir: &Path, catalog: &Catalog, site: &SiteConfig) -> Result<ExportSummary> {
    let ctx = RenderContext::new(catalog, site, "");
    let mut pages = 0usize;

    write_page(&out_dir.join("index.html"), &render_home(&ctx))?;
    pages += 1;
    write_page(&out_dir.join("api").join("index.html"), &render_endpoint_list(&ctx))?;
    pages += 1;
    for endpoint in catalog {
        let path = out_dir.join("api").join(&endpoint.id).join("index.html");
        write_page(&path, &render_endpoint_detail(&ctx, endpoint))?;
        pages += 1;
    }
    write_page(&out_dir.join("404.html"), &render_not_found(&ctx))?;
    pages += 1;

    let json = serde_json::to_string_pretty(catalog.endpoints())
        .context("serializing endpoint catalog")?;
    fs::write(out_dir.join("endpoints.json"), json)
        .with_context(|| format!("writing {}", out_dir.join("endpoints.json").display()))?;

    tracing::info!(
        out_dir = %out_dir.display(),
        pages,
        base_path = site.base_path(),
        "static site exported"
    );
    Ok(ExportSummary { out_dir: out_dir.to_path_buf(), pages })
}

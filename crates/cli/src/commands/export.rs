use anyhow::Result;
use std::path::Path;

use apidocs_core::{Catalog, SiteConfig};
use apidocs_http::export_site;

pub(crate) fn run(out_dir: &Path, base_path: Option<String>) -> Result<()> {
    let site = base_path.map_or_else(SiteConfig::from_env, |p| SiteConfig::with_base_path(&p));
    let summary = export_site(out_dir, Catalog::builtin(), &site)?;
    println!("Exported {} pages to {}", summary.pages, summary.out_dir.display());
    Ok(())
}

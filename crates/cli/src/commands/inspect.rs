use anyhow::Result;
use serde::Serialize;

use apidocs_core::{Catalog, Category, EndpointDescriptor, SearchQuery};

#[derive(Serialize)]
struct GroupView<'a> {
    category: Category,
    endpoints: Vec<&'a EndpointDescriptor>,
}

pub(crate) fn run_list() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(Catalog::builtin().endpoints())?);
    Ok(())
}

pub(crate) fn run_show(id: &str) -> Result<()> {
    let endpoint = Catalog::builtin().resolve(id)?;
    println!("{}", serde_json::to_string_pretty(endpoint)?);
    Ok(())
}

/// Prints the sidebar view for `query`: non-empty categories only.
pub(crate) fn run_search(query: Option<String>) -> Result<()> {
    let query = SearchQuery::new(query.as_deref().unwrap_or_default());
    let groups: Vec<GroupView<'_>> = Catalog::builtin()
        .filtered_groups(&query)
        .into_iter()
        .filter(|group| !group.is_empty())
        .map(|group| GroupView { category: group.category, endpoints: group.endpoints })
        .collect();
    println!("{}", serde_json::to_string_pretty(&groups)?);
    Ok(())
}

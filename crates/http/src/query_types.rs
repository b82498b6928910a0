//! Request/query types (Deserialize)

use apidocs_core::SearchQuery;
use serde::Deserialize;

/// `?q=` on any page or on `/json/groups`.
#[derive(Debug, Default, Deserialize)]
pub struct SidebarQuery {
    #[serde(default)]
    pub q: String,
}

impl SidebarQuery {
    /// Case-folded and capped at `MAX_QUERY_CHARS`.
    pub fn search(&self) -> SearchQuery {
        SearchQuery::new(&self.q)
    }
}

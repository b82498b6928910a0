//! Sidebar search over grouped endpoints.
//!
//! A query matches a descriptor when its case-folded text is a substring of
//! the case-folded title or description. Filtering runs per category after
//! grouping, so a descriptor only shows up under headings it already belongs to.

use crate::constants::MAX_QUERY_CHARS;
use crate::endpoint::EndpointDescriptor;
use crate::grouping::{group_all, EndpointGroup};

/// A case-folded sidebar query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    folded: String,
}

impl SearchQuery {
    /// Folds `raw` to lowercase, keeping at most [`MAX_QUERY_CHARS`] characters.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        let truncated: String = raw.chars().take(MAX_QUERY_CHARS).collect();
        Self { folded: truncated.to_lowercase() }
    }

    /// An empty query matches everything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.folded.is_empty()
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.folded
    }

    #[must_use]
    pub fn matches(&self, endpoint: &EndpointDescriptor) -> bool {
        self.is_empty()
            || endpoint.title.to_lowercase().contains(&self.folded)
            || endpoint.description.to_lowercase().contains(&self.folded)
    }
}

impl From<&str> for SearchQuery {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

/// Narrows one group's descriptors to those matching `query`, keeping order.
pub fn filter<'a>(
    endpoints: &[&'a EndpointDescriptor],
    query: &SearchQuery,
) -> Vec<&'a EndpointDescriptor> {
    if query.is_empty() {
        return endpoints.to_vec();
    }
    endpoints.iter().copied().filter(|endpoint| query.matches(endpoint)).collect()
}

/// Groups `endpoints` by category, then filters each group independently.
///
/// Every category is returned, including those left empty; callers decide
/// whether to hide them.
pub fn filtered_groups<'a>(
    endpoints: &'a [EndpointDescriptor],
    query: &SearchQuery,
) -> Vec<EndpointGroup<'a>> {
    let groups: Vec<_> = group_all(endpoints)
        .into_iter()
        .map(|group| EndpointGroup {
            category: group.category,
            endpoints: filter(&group.endpoints, query),
        })
        .collect();
    tracing::debug!(
        query = query.as_str(),
        matched = groups.iter().map(EndpointGroup::len).sum::<usize>(),
        "filtered endpoint groups"
    );
    groups
}

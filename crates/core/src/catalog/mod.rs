//! The endpoint catalog.
//!
//! An ordered, immutable list of [`EndpointDescriptor`]s with an id index.
//! The builtin catalog is built once on first access and only ever handed out
//! as `&'static Catalog`.

mod builtin;


use std::collections::HashMap;
use std::sync::LazyLock;

use crate::endpoint::EndpointDescriptor;
use crate::error::{CoreError, Result};
use crate::filter::{filtered_groups, SearchQuery};
use crate::grouping::{group_all, EndpointGroup};

#[expect(clippy::expect_used, reason = "builtin table is checked by catalog_tests")]
static BUILTIN_CATALOG: LazyLock<Catalog> = LazyLock::new(|| {
    Catalog::new(builtin::endpoints()).expect("builtin endpoint ids are unique and routable")
});

/// Ids are spliced into `/api/{id}` links and `api/{id}/` export directories
/// as-is, so only URL-unreserved characters are allowed and `.`/`..` are out.
fn is_path_segment(id: &str) -> bool {
    id != "."
        && id != ".."
        && id.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '~'))
}

/// Ordered endpoint descriptors, immutable after construction.
#[derive(Debug, Clone)]
pub struct Catalog {
    endpoints: Vec<EndpointDescriptor>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Builds a catalog, rejecting empty, duplicate or non-routable ids.
    pub fn new(endpoints: Vec<EndpointDescriptor>) -> Result<Self> {
        let mut index = HashMap::with_capacity(endpoints.len());
        for (position, endpoint) in endpoints.iter().enumerate() {
            if endpoint.id.is_empty() {
                return Err(CoreError::EmptyId);
            }
            if !is_path_segment(&endpoint.id) {
                return Err(CoreError::InvalidId(endpoint.id.clone()));
            }
            if index.insert(endpoint.id.clone(), position).is_some() {
                return Err(CoreError::DuplicateId(endpoint.id.clone()));
            }
        }
        Ok(Self { endpoints, index })
    }

    /// The catalog compiled into the binary.
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN_CATALOG
    }

    /// All descriptors in insertion order.
    #[must_use]
    pub fn endpoints(&self) -> &[EndpointDescriptor] {
        &self.endpoints
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EndpointDescriptor> {
        self.endpoints.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }

    /// Exact-match lookup; no case folding or trimming is applied.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&EndpointDescriptor> {
        self.index.get(id).and_then(|&position| self.endpoints.get(position))
    }

    /// Like [`Catalog::get`], but a miss is a [`CoreError::NotFound`].
    pub fn resolve(&self, id: &str) -> Result<&EndpointDescriptor> {
        self.get(id).ok_or_else(|| {
            tracing::debug!(id, "endpoint id did not resolve");
            CoreError::NotFound { id: id.to_owned() }
        })
    }

    /// Every category with its members, empty groups included.
    #[must_use]
    pub fn groups(&self) -> Vec<EndpointGroup<'_>> {
        group_all(&self.endpoints)
    }

    /// Grouped then filtered view backing the sidebar.
    #[must_use]
    pub fn filtered_groups(&self, query: &SearchQuery) -> Vec<EndpointGroup<'_>> {
        filtered_groups(&self.endpoints, query)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a EndpointDescriptor;
    type IntoIter = std::slice::Iter<'a, EndpointDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

//! Partitioning of a descriptor sequence into sidebar categories.

use serde::Serialize;

use crate::category::Category;
use crate::endpoint::EndpointDescriptor;

/// Descriptors belonging to one category, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EndpointGroup<'a> {
    pub category: Category,
    pub endpoints: Vec<&'a EndpointDescriptor>,
}

impl<'a> EndpointGroup<'a> {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    pub fn ids(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.endpoints.iter().map(|&endpoint| endpoint.id.as_str())
    }
}

/// Descriptors whose id satisfies `category`, preserving input order.
pub fn group(endpoints: &[EndpointDescriptor], category: Category) -> Vec<&EndpointDescriptor> {
    endpoints.iter().filter(|endpoint| category.matches(&endpoint.id)).collect()
}

/// One group per category, in sidebar order. Empty groups are kept.
pub fn group_all(endpoints: &[EndpointDescriptor]) -> Vec<EndpointGroup<'_>> {
    Category::ALL_VARIANTS
        .iter()
        .map(|&category| EndpointGroup { category, endpoints: group(endpoints, category) })
        .collect()
}

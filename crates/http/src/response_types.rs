//! Response types (Serialize)

use serde::Serialize;

use apidocs_core::{Category, EndpointDescriptor, EndpointGroup};

#[derive(Debug, Serialize)]
#[non_exhaustive]
pub struct VersionResponse {
    pub version: &'static str,
}

/// One sidebar section as served by `/json/groups`.
#[derive(Debug, Serialize)]
pub struct EndpointGroupResponse {
    pub category: Category,
    pub label: &'static str,
    pub icon: &'static str,
    pub endpoints: Vec<&'static EndpointDescriptor>,
}

impl From<EndpointGroup<'static>> for EndpointGroupResponse {
    fn from(group: EndpointGroup<'static>) -> Self {
        Self {
            category: group.category,
            label: group.category.label(),
            icon: group.category.icon(),
            endpoints: group.endpoints,
        }
    }
}

//! Endpoint descriptor records.

mod method;

pub use method::HttpMethod;

use serde::{Deserialize, Serialize};

/// Static documentation for a single API endpoint.
///
/// `path` is a display template such as `/api/users/:id`; it is never parsed.
/// The examples are illustrative text, not executed requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointDescriptor {
    /// Routable key, unique within a catalog
    pub id: String,
    pub title: String,
    pub method: HttpMethod,
    pub path: String,
    pub description: String,
    #[serde(default)]
    pub request_example: String,
    #[serde(default)]
    pub response_example: String,
}

impl EndpointDescriptor {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        method: HttpMethod,
        path: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            method,
            path: path.into(),
            description: description.into(),
            request_example: String::new(),
            response_example: String::new(),
        }
    }

    #[must_use]
    pub fn with_examples(
        mut self,
        request_example: impl Into<String>,
        response_example: impl Into<String>,
    ) -> Self {
        self.request_example = request_example.into();
        self.response_example = response_example.into();
        self
    }
}

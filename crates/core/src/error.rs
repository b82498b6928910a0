use std::result::Result as StdResult;

use thiserror::Error;

/// Errors raised by the endpoint catalog
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CoreError {
    #[error("Endpoint not found: {id}")]
    NotFound { id: String },

    #[error("Duplicate endpoint id: {0}")]
    DuplicateId(String),

    #[error("Endpoint id must not be empty")]
    EmptyId,

    #[error("Endpoint id is not a URL path segment: {0:?}")]
    InvalidId(String),

    #[error("Invalid HTTP method: {0}")]
    InvalidMethod(String),
}

impl CoreError {
    /// True for lookups that missed, as opposed to a malformed catalog.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

pub type Result<T> = StdResult<T, CoreError>;

//! HTTP method enumeration for documented endpoints.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// HTTP method of a documented endpoint
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub const ALL_VARIANTS: &'static [HttpMethod] =
        &[HttpMethod::Get, HttpMethod::Post, HttpMethod::Put, HttpMethod::Delete];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match *self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }

    /// CSS class for the method badge, e.g. `method-get`.
    #[must_use]
    pub const fn css_class(&self) -> &'static str {
        match *self {
            Self::Get => "method-get",
            Self::Post => "method-post",
            Self::Put => "method-put",
            Self::Delete => "method-delete",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            "DELETE" => Ok(Self::Delete),
            _ => Err(CoreError::InvalidMethod(s.to_owned())),
        }
    }
}

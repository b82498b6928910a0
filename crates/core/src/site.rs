//! Site-wide rendering settings.

use crate::constants::{BASE_PATH_ENV, DEFAULT_SITE_TITLE};
use crate::env_config::env_string_or;

/// Settings shared by every rendered page.
///
/// `base_path` is the prefix prepended to every internal link. It is stored
/// normalized: either empty, or starting with `/` and without a trailing `/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub title: String,
    base_path: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self { title: DEFAULT_SITE_TITLE.to_owned(), base_path: String::new() }
    }
}

impl SiteConfig {
    #[must_use]
    pub fn with_base_path(base_path: &str) -> Self {
        Self { base_path: normalize_base_path(base_path), ..Self::default() }
    }

    /// Reads `APIDOCS_BASE_PATH`; unset or blank means links are root-relative.
    #[must_use]
    pub fn from_env() -> Self {
        Self::with_base_path(&env_string_or(BASE_PATH_ENV, ""))
    }

    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Prefixes an absolute site path with the base path.
    #[must_use]
    pub fn link(&self, path: &str) -> String {
        if self.base_path.is_empty() {
            return path.to_owned();
        }
        if path == "/" {
            return format!("{}/", self.base_path);
        }
        format!("{}{}", self.base_path, path)
    }
}

fn normalize_base_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return String::new();
    }
    if trimmed.starts_with('/') {
        trimmed.to_owned()
    } else {
        format!("/{trimmed}")
    }
}

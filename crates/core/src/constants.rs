//! Shared constants for apidocs.

/// Default port for `apidocs serve`.
pub const DEFAULT_PORT: u16 = 3000;

/// Default bind address for `apidocs serve`.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Sidebar queries are truncated to this many characters before filtering.
pub const MAX_QUERY_CHARS: usize = 256;

/// Title shown in the navbar and the `<title>` element.
pub const DEFAULT_SITE_TITLE: &str = "API Docs";

/// Base path used when the exported site is hosted on GitHub Pages.
pub const GITHUB_PAGES_BASE_PATH: &str = "/Api_Documentation_Template";

/// Environment variable overriding the default server port.
pub const PORT_ENV: &str = "APIDOCS_PORT";

/// Environment variable overriding the default bind address.
pub const HOST_ENV: &str = "APIDOCS_HOST";

/// Environment variable overriding the link prefix of rendered pages.
pub const BASE_PATH_ENV: &str = "APIDOCS_BASE_PATH";

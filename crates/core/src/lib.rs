//! Core types for apidocs
//!
//! The endpoint catalog and everything derived from it: category grouping,
//! sidebar search filtering and id resolution. Shared by the HTTP server,
//! the static exporter and the CLI.

mod catalog;
mod category;
mod constants;
mod endpoint;
mod env_config;
mod error;
mod filter;
mod grouping;
mod site;

pub use catalog::*;
pub use category::*;
pub use constants::*;
pub use endpoint::*;
pub use env_config::*;
pub use error::*;
pub use filter::*;
pub use grouping::*;
pub use site::*;

// Catalog API module.
// Provides the client and types for the remote product feed.

pub mod client;
pub mod endpoints;
pub mod types;

pub use client::CatalogClient;
pub use types::*;

mod client;
mod models;

pub use client::{CatalogClient, Result};
pub use models::{CatalogConfig, ResolveResponse, StreamEntry};

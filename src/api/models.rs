use serde::{Deserialize, Serialize};

/// Response from the /resolve endpoint
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolveResponse {
    pub error: String,
    #[serde(default)]
    pub title: String,
    #[serde(rename = "thumbnailURL", default)]
    pub thumbnail_url: String,
    #[serde(default)]
    pub streams: Vec<StreamEntry>,
}

/// One downloadable encoding as the catalog reports it
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StreamEntry {
    pub kind: String,
    #[serde(rename = "quality")]
    pub quality_label: String,
    #[serde(rename = "contentLength", default)]
    pub content_length: Option<u64>,
    #[serde(rename = "downloadURL")]
    pub download_url: String,
    /// Separately-fetchable single-track encoding (video-only or audio-only).
    #[serde(default)]
    pub adaptive: bool,
}

/// Configuration for the catalog client
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub base_url: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: "https://resolver.streamfetch.app/api/v1".to_string(),
        }
    }
}

use regex::Regex;
use reqwest::Client;
use url::Url;

use crate::domain::{CatalogResult, ResolutionError, VariantDescriptor, VariantKind};

use super::models::{CatalogConfig, ResolveResponse, StreamEntry};

pub type Result<T> = std::result::Result<T, ResolutionError>;

#[derive(Clone)]
pub struct CatalogClient {
    config: CatalogConfig,
    client: Client,
}

impl CatalogClient {
    pub fn new(config: CatalogConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// Resolves a video URL into the set of downloadable variants.
    ///
    /// Only separately-fetchable ("adaptive") encodings qualify; each kind is
    /// ordered by descending numeric quality so index 0 is the default pick.
    pub async fn resolve(&self, url: &str) -> Result<CatalogResult> {
        Url::parse(url).map_err(|e| ResolutionError::InvalidUrl(e.to_string()))?;

        let endpoint = format!("{}/resolve", self.config.base_url);
        let response = self
            .client
            .get(&endpoint)
            .query(&[("url", url)])
            .send()
            .await
            .map_err(|e| ResolutionError::Request(e.to_string()))?
            .error_for_status()
            .map_err(|e| ResolutionError::Request(e.to_string()))?;

        let body = response
            .text()
            .await
            .map_err(|e| ResolutionError::Request(e.to_string()))?;
        let resolved: ResolveResponse = serde_json::from_str(&body)
            .map_err(|e| ResolutionError::InvalidResponse(format!("JSON decode error: {}", e)))?;

        if resolved.error != "0" {
            return Err(ResolutionError::Catalog(resolved.error));
        }

        tracing::info!(title = %resolved.title, streams = resolved.streams.len(), "catalog resolved");

        Ok(CatalogResult {
            title: resolved.title,
            thumbnail_ref: resolved.thumbnail_url,
            video_variants: collect_variants(&resolved.streams, VariantKind::Video),
            audio_variants: collect_variants(&resolved.streams, VariantKind::Audio),
        })
    }

    /// Fetches the raw thumbnail bytes for display.
    pub async fn fetch_thumbnail(&self, thumbnail_ref: &str) -> Result<bytes::Bytes> {
        let response = self
            .client
            .get(thumbnail_ref)
            .send()
            .await
            .map_err(|e| ResolutionError::Request(e.to_string()))?
            .error_for_status()
            .map_err(|e| ResolutionError::Request(e.to_string()))?;

        response
            .bytes()
            .await
            .map_err(|e| ResolutionError::Request(e.to_string()))
    }
}

fn collect_variants(streams: &[StreamEntry], kind: VariantKind) -> Vec<VariantDescriptor> {
    let kind_label = match kind {
        VariantKind::Video => "video",
        VariantKind::Audio => "audio",
    };

    let mut variants: Vec<VariantDescriptor> = streams
        .iter()
        .filter(|entry| entry.adaptive && entry.kind == kind_label)
        .map(|entry| VariantDescriptor {
            kind,
            quality_label: entry.quality_label.clone(),
            size_bytes: entry.content_length,
            handle: entry.download_url.clone(),
        })
        .collect();

    // Stable sort keeps catalog order for equal labels.
    variants.sort_by(|a, b| quality_rank(&b.quality_label).cmp(&quality_rank(&a.quality_label)));
    variants
}

/// Numeric portion of a quality label ("1080p", "128kbps"); labels without
/// one sort last.
fn quality_rank(label: &str) -> u64 {
    Regex::new(r"\d+")
        .ok()
        .and_then(|re| re.find(label).and_then(|m| m.as_str().parse().ok()))
        .unwrap_or(0)
}

use std::collections::HashSet;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariantKind {
    Video,
    Audio,
}

/// One downloadable encoding of the source media. The quality label is the
/// uniqueness key within a kind; the handle is opaque to everything but the
/// transfer engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantDescriptor {
    pub kind: VariantKind,
    pub quality_label: String,
    pub size_bytes: Option<u64>,
    pub handle: String,
}

/// What the catalog resolved for a URL.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogResult {
    pub title: String,
    pub thumbnail_ref: String,
    pub video_variants: Vec<VariantDescriptor>,
    pub audio_variants: Vec<VariantDescriptor>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressEvent {
    pub bytes_transferred: u64,
    pub bytes_total: u64,
}

impl ProgressEvent {
    /// Completion percentage in [0, 100]. `None` when the total is unknown
    /// (`bytes_total == 0`), which renders as indeterminate progress.
    pub fn percent(&self) -> Option<f32> {
        if self.bytes_total == 0 {
            return None;
        }
        let percent = self.bytes_transferred as f32 / self.bytes_total as f32 * 100.0;
        Some(percent.clamp(0.0, 100.0))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Searching,
    Ready,
    Downloading,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

/// One-shot banner message; a single value type covers both outcomes.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }
}

/// The single mutable context for one search-through-download cycle.
/// Reset (not replaced) at the start of each new search.
#[derive(Debug, Clone)]
pub struct Session {
    pub source_url: String,
    pub destination_directory: PathBuf,
    pub title: String,
    pub thumbnail_ref: String,
    pub available_video_variants: Vec<VariantDescriptor>,
    pub available_audio_variants: Vec<VariantDescriptor>,
    pub selected_video_variant: Option<VariantDescriptor>,
    pub selected_audio_variant: Option<VariantDescriptor>,
    pub phase: Phase,
}

impl Session {
    pub fn new(destination_directory: PathBuf) -> Self {
        Self {
            source_url: String::new(),
            destination_directory,
            title: String::new(),
            thumbnail_ref: String::new(),
            available_video_variants: Vec::new(),
            available_audio_variants: Vec::new(),
            selected_video_variant: None,
            selected_audio_variant: None,
            phase: Phase::Idle,
        }
    }

    /// Starts a fresh session generation: everything produced by the previous
    /// search is dropped so stale variants can never leak into a new download.
    /// The destination directory survives.
    pub fn reset_for_search(&mut self, url: String) {
        self.source_url = url;
        self.title.clear();
        self.thumbnail_ref.clear();
        self.available_video_variants.clear();
        self.available_audio_variants.clear();
        self.selected_video_variant = None;
        self.selected_audio_variant = None;
    }

    /// Replaces the variant sets wholesale with the catalog's answer.
    /// Selections are cleared first, then defaulted to the highest quality.
    pub fn ingest_catalog(&mut self, catalog: CatalogResult) {
        self.selected_video_variant = None;
        self.selected_audio_variant = None;
        self.title = catalog.title;
        self.thumbnail_ref = catalog.thumbnail_ref;
        self.available_video_variants = dedupe_variants(catalog.video_variants);
        self.available_audio_variants = dedupe_variants(catalog.audio_variants);
        self.selected_video_variant = self.available_video_variants.first().cloned();
        self.selected_audio_variant = self.available_audio_variants.first().cloned();
    }

    pub fn variants(&self, kind: VariantKind) -> &[VariantDescriptor] {
        match kind {
            VariantKind::Video => &self.available_video_variants,
            VariantKind::Audio => &self.available_audio_variants,
        }
    }

    pub fn variant_labels(&self, kind: VariantKind) -> Vec<String> {
        self.variants(kind)
            .iter()
            .map(|variant| variant.quality_label.clone())
            .collect()
    }

    pub fn find_variant(&self, kind: VariantKind, label: &str) -> Option<&VariantDescriptor> {
        self.variants(kind)
            .iter()
            .find(|variant| variant.quality_label == label)
    }
}

/// Collapses duplicate quality labels, keeping the first occurrence.
pub fn dedupe_variants(variants: Vec<VariantDescriptor>) -> Vec<VariantDescriptor> {
    let mut seen = HashSet::new();
    variants
        .into_iter()
        .filter(|variant| seen.insert(variant.quality_label.clone()))
        .collect()
}

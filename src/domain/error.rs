use thiserror::Error;

/// Failures while resolving a URL against the stream catalog.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ResolutionError {
    #[error("Invalid video URL: {0}")]
    InvalidUrl(String),

    /// Error reported by the catalog service itself, shown verbatim.
    #[error("{0}")]
    Catalog(String),

    #[error("Catalog request failed: {0}")]
    Request(String),

    #[error("Invalid catalog response: {0}")]
    InvalidResponse(String),
}

/// Failures while streaming a variant to disk.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TransferError {
    #[error("Transfer failed: {0}")]
    Request(String),

    #[error("I/O error: {0}")]
    Io(String),
}

/// Failures while converting a downloaded file to MP3.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TranscodeError {
    #[error("Unsupported input: {0}")]
    UnsupportedInput(String),

    #[error("Failed to run ffmpeg: {0}")]
    Spawn(String),

    #[error("ffmpeg failed: {0}")]
    Encoder(String),
}

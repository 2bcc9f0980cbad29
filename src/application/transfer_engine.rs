use std::path::{Path, PathBuf};

use futures::{stream::BoxStream, StreamExt, TryStreamExt};
use tokio::io::AsyncWriteExt;

use crate::domain::{ProgressEvent, TransferError};

/// What a running transfer reports back. A failed transfer ends the stream
/// without ever claiming completion.
#[derive(Debug, Clone)]
pub enum TransferEvent {
    Progress(ProgressEvent),
    Completed(PathBuf),
    Failed(TransferError),
}

#[derive(Clone, Default)]
pub struct TransferEngine {
    client: reqwest::Client,
}

impl TransferEngine {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Streams the variant behind `handle` to `path`, overwriting any
    /// existing file, and emits a progress event per chunk.
    pub fn download_stream(&self, handle: String, path: PathBuf) -> BoxStream<'static, TransferEvent> {
        futures::stream::unfold(
            TransferState::Start {
                client: self.client.clone(),
                url: handle,
                path,
            },
            |state| async move {
                match state {
                    TransferState::Start { client, url, path } => {
                        tracing::info!(path = %path.display(), "starting transfer");
                        let file = match tokio::fs::File::create(&path).await {
                            Ok(file) => file,
                            Err(e) => {
                                return Some((
                                    TransferEvent::Failed(TransferError::Io(format!(
                                        "Failed to create {}: {}",
                                        path.display(),
                                        e
                                    ))),
                                    TransferState::Finished,
                                ));
                            }
                        };

                        let response = match client.get(&url).send().await {
                            Ok(response) => match response.error_for_status() {
                                Ok(response) => response,
                                Err(e) => {
                                    return Some((
                                        TransferEvent::Failed(TransferError::Request(
                                            e.to_string(),
                                        )),
                                        TransferState::Finished,
                                    ));
                                }
                            },
                            Err(e) => {
                                return Some((
                                    TransferEvent::Failed(TransferError::Request(e.to_string())),
                                    TransferState::Finished,
                                ));
                            }
                        };

                        // content_length of 0 means "unknown" downstream.
                        let total = response.content_length().unwrap_or(0);
                        let stream = response
                            .bytes_stream()
                            .map_err(|e| TransferError::Request(e.to_string()))
                            .boxed();

                        Some((
                            TransferEvent::Progress(ProgressEvent {
                                bytes_transferred: 0,
                                bytes_total: total,
                            }),
                            TransferState::Transferring {
                                file,
                                stream,
                                transferred: 0,
                                total,
                                path,
                            },
                        ))
                    }
                    TransferState::Transferring {
                        mut file,
                        mut stream,
                        mut transferred,
                        total,
                        path,
                    } => match stream.next().await {
                        Some(Ok(chunk)) => {
                            if let Err(e) = file.write_all(&chunk).await {
                                return Some((
                                    TransferEvent::Failed(TransferError::Io(format!(
                                        "Write error: {}",
                                        e
                                    ))),
                                    TransferState::Finished,
                                ));
                            }

                            transferred += chunk.len() as u64;

                            Some((
                                TransferEvent::Progress(ProgressEvent {
                                    bytes_transferred: transferred,
                                    bytes_total: total,
                                }),
                                TransferState::Transferring {
                                    file,
                                    stream,
                                    transferred,
                                    total,
                                    path,
                                },
                            ))
                        }
                        Some(Err(e)) => {
                            tracing::warn!(%e, "transfer interrupted");
                            Some((TransferEvent::Failed(e), TransferState::Finished))
                        }
                        None => {
                            if let Err(e) = file.sync_all().await {
                                return Some((
                                    TransferEvent::Failed(TransferError::Io(format!(
                                        "Failed to sync file: {}",
                                        e
                                    ))),
                                    TransferState::Finished,
                                ));
                            }

                            tracing::info!(path = %path.display(), bytes = transferred, "transfer complete");
                            Some((TransferEvent::Completed(path), TransferState::Finished))
                        }
                    },
                    TransferState::Finished => None,
                }
            },
        )
        .boxed()
    }

    /// Callback form of `download_stream`: drives the transfer to the end,
    /// invoking `on_progress` per event.
    pub async fn download<F>(
        &self,
        handle: &str,
        destination: &Path,
        mut on_progress: F,
    ) -> Result<PathBuf, TransferError>
    where
        F: FnMut(ProgressEvent),
    {
        let mut stream = self.download_stream(handle.to_string(), destination.to_path_buf());
        while let Some(event) = stream.next().await {
            match event {
                TransferEvent::Progress(progress) => on_progress(progress),
                TransferEvent::Completed(path) => return Ok(path),
                TransferEvent::Failed(error) => return Err(error),
            }
        }
        Err(TransferError::Request(
            "transfer ended without completing".to_string(),
        ))
    }
}

enum TransferState {
    Start {
        client: reqwest::Client,
        url: String,
        path: PathBuf,
    },
    Transferring {
        file: tokio::fs::File,
        stream: BoxStream<'static, Result<bytes::Bytes, TransferError>>,
        transferred: u64,
        total: u64,
        path: PathBuf,
    },
    Finished,
}

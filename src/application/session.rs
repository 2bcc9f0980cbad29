use std::path::PathBuf;

use crate::domain::{
    BusyKind, CatalogResult, ControlGroup, Effect, Notification, Phase, ProgressEvent,
    ProgressUpdate, ResolutionError, Session, TranscodeError, TransferError, VariantKind,
};
use crate::utils::output_file_name;

/// User intents and completion callbacks the machine reacts to.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    SearchSubmitted { url: String },
    DirectorySelected { path: PathBuf },
    VariantSelected { kind: VariantKind, label: String },
    TranscodeToggled(bool),
    DownloadSubmitted { kind: VariantKind, label: String },
    NotificationDismissed,
    SearchCompleted(Result<CatalogResult, ResolutionError>),
    TransferProgressed(ProgressEvent),
    TransferCompleted(Result<PathBuf, TransferError>),
    TranscodeCompleted(Result<PathBuf, TranscodeError>),
}

/// Work the shell must start on the machine's behalf. At most one per
/// transition, which is what keeps searches and downloads single-flight.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionAction {
    Resolve { url: String },
    Transfer { handle: String, destination: PathBuf },
    Transcode { source: PathBuf },
}

/// Result of one transition: presentation effects plus optional work.
#[derive(Debug, Default)]
pub struct Outcome {
    pub effects: Vec<Effect>,
    pub action: Option<SessionAction>,
}

impl Outcome {
    fn with_effects(effects: Vec<Effect>) -> Self {
        Self {
            effects,
            action: None,
        }
    }
}

/// Owns the one live `Session` and drives it through
/// `Idle -> Searching -> Ready -> Downloading -> (Idle|Ready)`.
///
/// Every failure is folded into a notification plus a rollback to the
/// nearest stable phase; nothing propagates past this boundary.
pub struct SessionMachine {
    session: Session,
    transcode_requested: bool,
}

impl SessionMachine {
    pub fn new(destination_directory: PathBuf) -> Self {
        Self {
            session: Session::new(destination_directory),
            transcode_requested: false,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn handle(&mut self, event: SessionEvent) -> Outcome {
        match event {
            SessionEvent::SearchSubmitted { url } => self.on_search_submitted(url),
            SessionEvent::DirectorySelected { path } => self.on_directory_selected(path),
            SessionEvent::VariantSelected { kind, label } => self.on_variant_selected(kind, label),
            SessionEvent::TranscodeToggled(requested) => {
                self.transcode_requested = requested;
                Outcome::default()
            }
            SessionEvent::DownloadSubmitted { kind, label } => {
                self.on_download_submitted(kind, label)
            }
            SessionEvent::NotificationDismissed => {
                Outcome::with_effects(vec![Effect::CloseNotification])
            }
            SessionEvent::SearchCompleted(result) => self.on_search_completed(result),
            SessionEvent::TransferProgressed(progress) => self.on_transfer_progressed(progress),
            SessionEvent::TransferCompleted(result) => self.on_transfer_completed(result),
            SessionEvent::TranscodeCompleted(result) => self.on_transcode_completed(result),
        }
    }

    fn on_search_submitted(&mut self, url: String) -> Outcome {
        if !matches!(self.session.phase, Phase::Idle | Phase::Ready) {
            tracing::warn!(phase = ?self.session.phase, "search rejected while busy");
            return Outcome::default();
        }
        if url.trim().is_empty() {
            return Outcome::with_effects(vec![Effect::ShowNotification(Notification::error(
                "Enter a video URL first.",
            ))]);
        }

        self.session.reset_for_search(url.clone());
        self.transcode_requested = false;
        self.session.phase = Phase::Searching;
        tracing::info!(url = %url, "search submitted");

        Outcome {
            effects: vec![
                Effect::CloseNotification,
                Effect::SetContainerVisible(false),
                Effect::SetControlsEnabled(ControlGroup::Search, false),
                Effect::SetProgress(ProgressUpdate::Percent(0.0)),
                Effect::SetProgressLabel(String::new()),
                Effect::SetBusy(BusyKind::Searching, true),
            ],
            action: Some(SessionAction::Resolve { url }),
        }
    }

    fn on_search_completed(&mut self, result: Result<CatalogResult, ResolutionError>) -> Outcome {
        if self.session.phase != Phase::Searching {
            tracing::debug!("catalog result ignored outside of a search");
            return Outcome::default();
        }

        let mut effects = Vec::new();
        match result {
            Ok(catalog) => {
                self.session.ingest_catalog(catalog);
                self.session.phase = Phase::Ready;
                tracing::info!(title = %self.session.title, "search succeeded");

                effects.push(Effect::SetTitle(self.session.title.clone()));
                effects.push(Effect::SetThumbnail(self.session.thumbnail_ref.clone()));
                effects.push(Effect::SetVariants(
                    VariantKind::Video,
                    self.session.variant_labels(VariantKind::Video),
                ));
                effects.push(Effect::SetVariants(
                    VariantKind::Audio,
                    self.session.variant_labels(VariantKind::Audio),
                ));
                effects.push(Effect::SetContainerVisible(true));
            }
            Err(error) => {
                self.session.phase = Phase::Idle;
                tracing::warn!(%error, "search failed");

                effects.push(Effect::ShowNotification(Notification::error(
                    error.to_string(),
                )));
                effects.push(Effect::SetProgress(ProgressUpdate::Percent(0.0)));
                effects.push(Effect::SetProgressLabel(String::new()));
            }
        }
        effects.push(Effect::SetBusy(BusyKind::Searching, false));
        effects.push(Effect::SetControlsEnabled(ControlGroup::Search, true));

        Outcome::with_effects(effects)
    }

    fn on_directory_selected(&mut self, path: PathBuf) -> Outcome {
        if path.as_os_str().is_empty() {
            return Outcome::default();
        }
        self.session.destination_directory = path;
        Outcome::default()
    }

    fn on_variant_selected(&mut self, kind: VariantKind, label: String) -> Outcome {
        let Some(variant) = self.session.find_variant(kind, &label).cloned() else {
            tracing::warn!(%label, "selection of unknown variant ignored");
            return Outcome::default();
        };
        match kind {
            VariantKind::Video => self.session.selected_video_variant = Some(variant),
            VariantKind::Audio => self.session.selected_audio_variant = Some(variant),
        }
        Outcome::default()
    }

    fn on_download_submitted(&mut self, kind: VariantKind, label: String) -> Outcome {
        if self.session.phase != Phase::Ready {
            tracing::warn!(phase = ?self.session.phase, "download rejected while busy");
            return Outcome::default();
        }
        let Some(variant) = self.session.find_variant(kind, &label).cloned() else {
            tracing::warn!(%label, "download of unknown variant rejected");
            return Outcome::default();
        };

        match kind {
            VariantKind::Video => self.session.selected_video_variant = Some(variant.clone()),
            VariantKind::Audio => self.session.selected_audio_variant = Some(variant.clone()),
        }

        let destination = self
            .session
            .destination_directory
            .join(output_file_name(&self.session.title, kind));
        self.session.phase = Phase::Downloading;
        tracing::info!(
            kind = ?kind,
            quality = %variant.quality_label,
            size = ?variant.size_bytes,
            destination = %destination.display(),
            "download submitted"
        );

        Outcome {
            effects: vec![
                Effect::CloseNotification,
                Effect::SetControlsEnabled(ControlGroup::Download, false),
                Effect::SetControlsEnabled(ControlGroup::Search, false),
                Effect::SetProgress(ProgressUpdate::Percent(0.0)),
                Effect::SetProgressLabel("Downloading...".to_string()),
                Effect::SetBusy(BusyKind::Downloading, true),
            ],
            action: Some(SessionAction::Transfer {
                handle: variant.handle,
                destination,
            }),
        }
    }

    fn on_transfer_progressed(&mut self, progress: ProgressEvent) -> Outcome {
        if self.session.phase != Phase::Downloading {
            tracing::debug!("progress event ignored outside of a download");
            return Outcome::default();
        }

        match progress.percent() {
            Some(percent) => Outcome::with_effects(vec![
                Effect::SetProgress(ProgressUpdate::Percent(percent)),
                Effect::SetProgressLabel(format!("Downloading {:.0}%", percent)),
            ]),
            None => Outcome::with_effects(vec![
                Effect::SetProgress(ProgressUpdate::Indeterminate),
                Effect::SetProgressLabel("Downloading...".to_string()),
            ]),
        }
    }

    fn on_transfer_completed(&mut self, result: Result<PathBuf, TransferError>) -> Outcome {
        if self.session.phase != Phase::Downloading {
            tracing::debug!("transfer result ignored outside of a download");
            return Outcome::default();
        }

        match result {
            Ok(path) if self.transcode_requested => {
                tracing::info!(path = %path.display(), "transfer complete, converting");
                Outcome {
                    effects: vec![
                        Effect::SetProgress(ProgressUpdate::Indeterminate),
                        Effect::SetProgressLabel("Converting...".to_string()),
                    ],
                    action: Some(SessionAction::Transcode { source: path }),
                }
            }
            Ok(path) => {
                tracing::info!(path = %path.display(), "download finished");
                self.finish_download(Notification::success("Done."))
            }
            Err(error) => {
                tracing::warn!(%error, "download failed");
                self.finish_download(Notification::error(error.to_string()))
            }
        }
    }

    fn on_transcode_completed(&mut self, result: Result<PathBuf, TranscodeError>) -> Outcome {
        if self.session.phase != Phase::Downloading {
            tracing::debug!("transcode result ignored outside of a download");
            return Outcome::default();
        }

        match result {
            Ok(path) => {
                tracing::info!(path = %path.display(), "conversion finished");
                self.finish_download(Notification::success("Done."))
            }
            Err(error) => {
                tracing::warn!(%error, "conversion failed");
                self.finish_download(Notification::error(error.to_string()))
            }
        }
    }

    /// Shared exit from `Downloading`: the phase rolls back to `Ready`, the
    /// surface is fully re-enabled, progress resets to a determinate zero,
    /// and exactly one notification reports the outcome.
    fn finish_download(&mut self, notification: Notification) -> Outcome {
        self.session.phase = Phase::Ready;
        Outcome::with_effects(vec![
            Effect::SetBusy(BusyKind::Downloading, false),
            Effect::SetProgress(ProgressUpdate::Percent(0.0)),
            Effect::SetProgressLabel(String::new()),
            Effect::SetControlsEnabled(ControlGroup::Download, true),
            Effect::SetControlsEnabled(ControlGroup::Search, true),
            Effect::ShowNotification(notification),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NotificationLevel, VariantDescriptor};

    fn variant(kind: VariantKind, label: &str) -> VariantDescriptor {
        VariantDescriptor {
            kind,
            quality_label: label.to_string(),
            size_bytes: Some(1000),
            handle: format!("https://cdn.example/{}", label),
        }
    }

    fn catalog(title: &str, videos: &[&str], audios: &[&str]) -> CatalogResult {
        CatalogResult {
            title: title.to_string(),
            thumbnail_ref: "https://cdn.example/thumb.jpg".to_string(),
            video_variants: videos
                .iter()
                .map(|label| variant(VariantKind::Video, label))
                .collect(),
            audio_variants: audios
                .iter()
                .map(|label| variant(VariantKind::Audio, label))
                .collect(),
        }
    }

    fn machine() -> SessionMachine {
        SessionMachine::new(PathBuf::from("/downloads"))
    }

    fn ready_machine() -> SessionMachine {
        let mut machine = machine();
        machine.handle(SessionEvent::SearchSubmitted {
            url: "https://valid/video".to_string(),
        });
        machine.handle(SessionEvent::SearchCompleted(Ok(catalog(
            "Demo",
            &["1080p", "720p"],
            &["128kbps"],
        ))));
        machine
    }

    fn notifications(effects: &[Effect]) -> Vec<&Notification> {
        effects
            .iter()
            .filter_map(|effect| match effect {
                Effect::ShowNotification(notification) => Some(notification),
                _ => None,
            })
            .collect()
    }

    fn progress_updates(effects: &[Effect]) -> Vec<ProgressUpdate> {
        effects
            .iter()
            .filter_map(|effect| match effect {
                Effect::SetProgress(update) => Some(*update),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn search_transitions_idle_to_searching_to_ready() {
        let mut machine = machine();

        let outcome = machine.handle(SessionEvent::SearchSubmitted {
            url: "https://valid/video".to_string(),
        });
        assert_eq!(machine.session().phase, Phase::Searching);
        assert_eq!(
            outcome.action,
            Some(SessionAction::Resolve {
                url: "https://valid/video".to_string()
            })
        );
        assert!(outcome
            .effects
            .contains(&Effect::SetBusy(BusyKind::Searching, true)));
        assert!(outcome
            .effects
            .contains(&Effect::SetProgress(ProgressUpdate::Percent(0.0))));
        assert!(outcome.effects.contains(&Effect::CloseNotification));

        let outcome = machine.handle(SessionEvent::SearchCompleted(Ok(catalog(
            "Demo",
            &["1080p", "720p"],
            &["128kbps"],
        ))));
        assert_eq!(machine.session().phase, Phase::Ready);
        assert!(outcome.effects.contains(&Effect::SetTitle("Demo".into())));
        assert!(outcome.effects.contains(&Effect::SetVariants(
            VariantKind::Video,
            vec!["1080p".to_string(), "720p".to_string()]
        )));
        assert!(outcome.effects.contains(&Effect::SetVariants(
            VariantKind::Audio,
            vec!["128kbps".to_string()]
        )));
        assert!(outcome
            .effects
            .contains(&Effect::SetBusy(BusyKind::Searching, false)));
        assert_eq!(
            machine
                .session()
                .selected_video_variant
                .as_ref()
                .unwrap()
                .quality_label,
            "1080p"
        );
    }

    #[test]
    fn new_search_clears_stale_selection_and_variants() {
        let mut machine = ready_machine();
        machine.handle(SessionEvent::VariantSelected {
            kind: VariantKind::Video,
            label: "720p".to_string(),
        });

        machine.handle(SessionEvent::SearchSubmitted {
            url: "https://valid/other".to_string(),
        });
        assert!(machine.session().selected_video_variant.is_none());
        assert!(machine.session().available_video_variants.is_empty());
        assert!(machine.session().available_audio_variants.is_empty());

        machine.handle(SessionEvent::SearchCompleted(Ok(catalog(
            "Other",
            &["480p"],
            &[],
        ))));
        assert_eq!(
            machine
                .session()
                .selected_video_variant
                .as_ref()
                .unwrap()
                .quality_label,
            "480p"
        );
    }

    #[test]
    fn failed_search_returns_to_idle_with_one_error() {
        let mut machine = machine();
        machine.handle(SessionEvent::SearchSubmitted {
            url: "https://invalid".to_string(),
        });

        let outcome = machine.handle(SessionEvent::SearchCompleted(Err(
            ResolutionError::Catalog("Video unavailable".to_string()),
        )));

        assert_eq!(machine.session().phase, Phase::Idle);
        assert!(machine.session().available_video_variants.is_empty());
        assert!(machine.session().available_audio_variants.is_empty());

        let shown = notifications(&outcome.effects);
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].level, NotificationLevel::Error);
        assert_eq!(shown[0].message, "Video unavailable");
        assert!(outcome
            .effects
            .contains(&Effect::SetControlsEnabled(ControlGroup::Search, true)));
    }

    #[test]
    fn search_rejected_while_searching() {
        let mut machine = machine();
        machine.handle(SessionEvent::SearchSubmitted {
            url: "https://valid/video".to_string(),
        });

        let outcome = machine.handle(SessionEvent::SearchSubmitted {
            url: "https://valid/other".to_string(),
        });
        assert!(outcome.action.is_none());
        assert!(outcome.effects.is_empty());
        assert_eq!(machine.session().source_url, "https://valid/video");
    }

    #[test]
    fn empty_url_never_starts_a_search() {
        let mut machine = machine();
        let outcome = machine.handle(SessionEvent::SearchSubmitted {
            url: "   ".to_string(),
        });
        assert!(outcome.action.is_none());
        assert_eq!(machine.session().phase, Phase::Idle);
        assert_eq!(notifications(&outcome.effects).len(), 1);
    }

    #[test]
    fn download_streams_progress_then_resets_and_reports_success() {
        let mut machine = ready_machine();

        let outcome = machine.handle(SessionEvent::DownloadSubmitted {
            kind: VariantKind::Video,
            label: "720p".to_string(),
        });
        assert_eq!(machine.session().phase, Phase::Downloading);
        assert_eq!(
            outcome.action,
            Some(SessionAction::Transfer {
                handle: "https://cdn.example/720p".to_string(),
                destination: PathBuf::from("/downloads/Demo.mp4"),
            })
        );
        assert!(outcome
            .effects
            .contains(&Effect::SetProgress(ProgressUpdate::Percent(0.0))));
        assert!(outcome
            .effects
            .contains(&Effect::SetBusy(BusyKind::Downloading, true)));

        let outcome = machine.handle(SessionEvent::TransferProgressed(ProgressEvent {
            bytes_transferred: 500,
            bytes_total: 1000,
        }));
        assert_eq!(
            progress_updates(&outcome.effects),
            vec![ProgressUpdate::Percent(50.0)]
        );

        let outcome = machine.handle(SessionEvent::TransferProgressed(ProgressEvent {
            bytes_transferred: 1000,
            bytes_total: 1000,
        }));
        assert_eq!(
            progress_updates(&outcome.effects),
            vec![ProgressUpdate::Percent(100.0)]
        );

        let outcome = machine.handle(SessionEvent::TransferCompleted(Ok(PathBuf::from(
            "/downloads/Demo.mp4",
        ))));
        assert_eq!(machine.session().phase, Phase::Ready);
        assert_eq!(
            progress_updates(&outcome.effects),
            vec![ProgressUpdate::Percent(0.0)]
        );
        let shown = notifications(&outcome.effects);
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].level, NotificationLevel::Success);
    }

    #[test]
    fn second_download_rejected_while_downloading() {
        let mut machine = ready_machine();
        machine.handle(SessionEvent::DownloadSubmitted {
            kind: VariantKind::Video,
            label: "720p".to_string(),
        });

        let outcome = machine.handle(SessionEvent::DownloadSubmitted {
            kind: VariantKind::Audio,
            label: "128kbps".to_string(),
        });
        assert!(outcome.action.is_none());
        assert!(outcome.effects.is_empty());
        assert_eq!(machine.session().phase, Phase::Downloading);
    }

    #[test]
    fn search_rejected_while_downloading() {
        let mut machine = ready_machine();
        machine.handle(SessionEvent::DownloadSubmitted {
            kind: VariantKind::Video,
            label: "720p".to_string(),
        });

        let outcome = machine.handle(SessionEvent::SearchSubmitted {
            url: "https://valid/other".to_string(),
        });
        assert!(outcome.action.is_none());
        assert_eq!(machine.session().phase, Phase::Downloading);
    }

    #[test]
    fn unknown_total_is_reported_indeterminate() {
        let mut machine = ready_machine();
        machine.handle(SessionEvent::DownloadSubmitted {
            kind: VariantKind::Video,
            label: "720p".to_string(),
        });

        let outcome = machine.handle(SessionEvent::TransferProgressed(ProgressEvent {
            bytes_transferred: 10,
            bytes_total: 0,
        }));
        assert_eq!(
            progress_updates(&outcome.effects),
            vec![ProgressUpdate::Indeterminate]
        );
    }

    #[test]
    fn failed_download_recovers_to_ready() {
        let mut machine = ready_machine();
        machine.handle(SessionEvent::DownloadSubmitted {
            kind: VariantKind::Video,
            label: "720p".to_string(),
        });

        let outcome = machine.handle(SessionEvent::TransferCompleted(Err(
            TransferError::Request("connection reset".to_string()),
        )));
        assert_eq!(machine.session().phase, Phase::Ready);
        let shown = notifications(&outcome.effects);
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].level, NotificationLevel::Error);
        assert!(outcome
            .effects
            .contains(&Effect::SetProgress(ProgressUpdate::Percent(0.0))));
        assert!(outcome
            .effects
            .contains(&Effect::SetControlsEnabled(ControlGroup::Download, true)));
        assert!(outcome
            .effects
            .contains(&Effect::SetControlsEnabled(ControlGroup::Search, true)));
    }

    #[test]
    fn transcode_runs_after_transfer_and_extends_the_download() {
        let mut machine = ready_machine();
        machine.handle(SessionEvent::TranscodeToggled(true));
        machine.handle(SessionEvent::DownloadSubmitted {
            kind: VariantKind::Video,
            label: "720p".to_string(),
        });

        let outcome = machine.handle(SessionEvent::TransferCompleted(Ok(PathBuf::from(
            "/downloads/Demo.mp4",
        ))));
        assert_eq!(machine.session().phase, Phase::Downloading);
        assert_eq!(
            outcome.action,
            Some(SessionAction::Transcode {
                source: PathBuf::from("/downloads/Demo.mp4")
            })
        );
        assert!(outcome
            .effects
            .contains(&Effect::SetProgressLabel("Converting...".to_string())));
        assert!(notifications(&outcome.effects).is_empty());

        let outcome = machine.handle(SessionEvent::TranscodeCompleted(Ok(PathBuf::from(
            "/downloads/Demo.mp3",
        ))));
        assert_eq!(machine.session().phase, Phase::Ready);
        let shown = notifications(&outcome.effects);
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].level, NotificationLevel::Success);
    }

    #[test]
    fn transcode_failure_recovers_to_ready() {
        let mut machine = ready_machine();
        machine.handle(SessionEvent::TranscodeToggled(true));
        machine.handle(SessionEvent::DownloadSubmitted {
            kind: VariantKind::Video,
            label: "720p".to_string(),
        });
        machine.handle(SessionEvent::TransferCompleted(Ok(PathBuf::from(
            "/downloads/Demo.mp4",
        ))));

        let outcome = machine.handle(SessionEvent::TranscodeCompleted(Err(
            TranscodeError::Encoder("unsupported codec".to_string()),
        )));
        assert_eq!(machine.session().phase, Phase::Ready);
        let shown = notifications(&outcome.effects);
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].level, NotificationLevel::Error);
    }

    #[test]
    fn duplicate_catalog_labels_collapse_first_wins() {
        let mut machine = machine();
        machine.handle(SessionEvent::SearchSubmitted {
            url: "https://valid/video".to_string(),
        });
        let outcome = machine.handle(SessionEvent::SearchCompleted(Ok(catalog(
            "Demo",
            &["720p", "720p", "480p"],
            &[],
        ))));

        assert_eq!(
            machine.session().variant_labels(VariantKind::Video),
            vec!["720p".to_string(), "480p".to_string()]
        );
        assert!(outcome.effects.contains(&Effect::SetVariants(
            VariantKind::Video,
            vec!["720p".to_string(), "480p".to_string()]
        )));
    }

    #[test]
    fn download_of_unknown_label_is_ignored() {
        let mut machine = ready_machine();
        let outcome = machine.handle(SessionEvent::DownloadSubmitted {
            kind: VariantKind::Video,
            label: "4320p".to_string(),
        });
        assert!(outcome.action.is_none());
        assert_eq!(machine.session().phase, Phase::Ready);
    }

    #[test]
    fn selected_directory_becomes_the_download_destination() {
        let mut machine = ready_machine();
        machine.handle(SessionEvent::DirectorySelected {
            path: PathBuf::from("/media/clips"),
        });

        let outcome = machine.handle(SessionEvent::DownloadSubmitted {
            kind: VariantKind::Audio,
            label: "128kbps".to_string(),
        });
        assert_eq!(
            outcome.action,
            Some(SessionAction::Transfer {
                handle: "https://cdn.example/128kbps".to_string(),
                destination: PathBuf::from("/media/clips/Demo.m4a"),
            })
        );
    }

    #[test]
    fn empty_directory_selection_is_ignored() {
        let mut machine = machine();
        machine.handle(SessionEvent::DirectorySelected {
            path: PathBuf::new(),
        });
        assert_eq!(
            machine.session().destination_directory,
            PathBuf::from("/downloads")
        );
    }

    #[test]
    fn empty_title_falls_back_to_fixed_output_name() {
        let mut machine = machine();
        machine.handle(SessionEvent::SearchSubmitted {
            url: "https://valid/video".to_string(),
        });
        machine.handle(SessionEvent::SearchCompleted(Ok(catalog(
            "",
            &["720p"],
            &[],
        ))));

        let outcome = machine.handle(SessionEvent::DownloadSubmitted {
            kind: VariantKind::Video,
            label: "720p".to_string(),
        });
        assert_eq!(
            outcome.action,
            Some(SessionAction::Transfer {
                handle: "https://cdn.example/720p".to_string(),
                destination: PathBuf::from("/downloads/video.mp4"),
            })
        );
    }

    #[test]
    fn stale_progress_outside_download_is_dropped() {
        let mut machine = ready_machine();
        let outcome = machine.handle(SessionEvent::TransferProgressed(ProgressEvent {
            bytes_transferred: 500,
            bytes_total: 1000,
        }));
        assert!(outcome.effects.is_empty());
    }

    #[test]
    fn dismissing_the_notification_closes_it() {
        let mut machine = machine();
        let outcome = machine.handle(SessionEvent::NotificationDismissed);
        assert_eq!(outcome.effects, vec![Effect::CloseNotification]);
    }
}

use std::path::PathBuf;

use futures::StreamExt;
use iced::Task;

use crate::api::{CatalogClient, CatalogConfig};
use crate::application::{
    SessionAction, SessionEvent, SessionMachine, Transcoder, TransferEngine, TransferEvent,
};
use crate::domain::{CatalogResult, Effect, ResolutionError, TranscodeError, VariantKind};
use crate::ui::{DownloadMessage, DownloadView};
use crate::utils::default_download_dir;

pub struct DownloadApp {
    view: DownloadView,
    machine: SessionMachine,
    catalog: CatalogClient,
    engine: TransferEngine,
    transcoder: Transcoder,
}

impl Default for DownloadApp {
    fn default() -> Self {
        Self::new()
    }
}

impl DownloadApp {
    pub fn new() -> Self {
        let directory = default_download_dir();
        let mut view = DownloadView::default();
        view.directory = directory.display().to_string();

        Self {
            view,
            machine: SessionMachine::new(directory),
            catalog: CatalogClient::new(CatalogConfig::default()),
            engine: TransferEngine::new(),
            transcoder: Transcoder::new(),
        }
    }

    /// Runs one session transition: effects go to the view, the action (if
    /// any) becomes background work whose completion feeds back in here.
    fn dispatch(&mut self, event: SessionEvent) -> Task<Message> {
        let outcome = self.machine.handle(event);
        let mut tasks = Vec::new();

        for effect in outcome.effects {
            if let Effect::SetThumbnail(reference) = &effect {
                if !reference.is_empty() {
                    tasks.push(self.load_thumbnail(reference.clone()));
                }
            }
            self.view.apply(effect);
        }

        if let Some(action) = outcome.action {
            tasks.push(self.run(action));
        }

        Task::batch(tasks)
    }

    fn run(&self, action: SessionAction) -> Task<Message> {
        match action {
            SessionAction::Resolve { url } => {
                let catalog = self.catalog.clone();
                Task::perform(
                    async move { catalog.resolve(&url).await },
                    Message::CatalogResolved,
                )
            }
            SessionAction::Transfer {
                handle,
                destination,
            } => Task::stream(
                self.engine
                    .download_stream(handle, destination)
                    .map(Message::Transfer),
            ),
            SessionAction::Transcode { source } => {
                let transcoder = self.transcoder.clone();
                Task::perform(
                    async move { transcoder.transcode_audio(&source).await },
                    Message::TranscodeFinished,
                )
            }
        }
    }

    /// The session's current selection for one leg; the view's pick list is
    /// kept in sync with it via `VariantSelected` events.
    fn selected_label(&self, kind: VariantKind) -> String {
        let session = self.machine.session();
        let selected = match kind {
            VariantKind::Video => &session.selected_video_variant,
            VariantKind::Audio => &session.selected_audio_variant,
        };
        selected
            .as_ref()
            .map(|variant| variant.quality_label.clone())
            .unwrap_or_default()
    }

    fn load_thumbnail(&self, reference: String) -> Task<Message> {
        let catalog = self.catalog.clone();
        Task::perform(
            async move {
                let bytes = catalog.fetch_thumbnail(&reference).await.ok()?;
                let decoded = image::load_from_memory(&bytes).ok()?.to_rgba8();
                let (width, height) = decoded.dimensions();
                Some(iced::widget::image::Handle::from_rgba(
                    width,
                    height,
                    decoded.into_raw(),
                ))
            },
            Message::ThumbnailLoaded,
        )
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Ui(DownloadMessage),
    DirectoryPicked(Option<PathBuf>),
    CatalogResolved(Result<CatalogResult, ResolutionError>),
    ThumbnailLoaded(Option<iced::widget::image::Handle>),
    Transfer(TransferEvent),
    TranscodeFinished(Result<PathBuf, TranscodeError>),
}

pub fn update(app: &mut DownloadApp, message: Message) -> Task<Message> {
    match message {
        Message::Ui(ui_message) => {
            app.view.update(ui_message.clone());
            match ui_message {
                DownloadMessage::SearchPressed => app.dispatch(SessionEvent::SearchSubmitted {
                    url: app.view.video_url.clone(),
                }),
                DownloadMessage::PickDirectoryPressed => Task::perform(
                    async {
                        rfd::AsyncFileDialog::new()
                            .pick_folder()
                            .await
                            .map(|handle| handle.path().to_path_buf())
                    },
                    Message::DirectoryPicked,
                ),
                DownloadMessage::VideoVariantPicked(label) => {
                    app.dispatch(SessionEvent::VariantSelected {
                        kind: VariantKind::Video,
                        label,
                    })
                }
                DownloadMessage::AudioVariantPicked(label) => {
                    app.dispatch(SessionEvent::VariantSelected {
                        kind: VariantKind::Audio,
                        label,
                    })
                }
                DownloadMessage::ConvertToggled(value) => {
                    app.dispatch(SessionEvent::TranscodeToggled(value))
                }
                DownloadMessage::DownloadVideoPressed => {
                    let label = app.selected_label(VariantKind::Video);
                    app.dispatch(SessionEvent::DownloadSubmitted {
                        kind: VariantKind::Video,
                        label,
                    })
                }
                DownloadMessage::DownloadAudioPressed => {
                    let label = app.selected_label(VariantKind::Audio);
                    app.dispatch(SessionEvent::DownloadSubmitted {
                        kind: VariantKind::Audio,
                        label,
                    })
                }
                DownloadMessage::NotificationClosed => {
                    app.dispatch(SessionEvent::NotificationDismissed)
                }
                // View-only messages.
                DownloadMessage::VideoUrlChanged(_) | DownloadMessage::ThemeToggled => Task::none(),
            }
        }
        Message::DirectoryPicked(Some(path)) => {
            app.view.directory = path.display().to_string();
            app.dispatch(SessionEvent::DirectorySelected { path })
        }
        Message::DirectoryPicked(None) => Task::none(),
        Message::CatalogResolved(result) => app.dispatch(SessionEvent::SearchCompleted(result)),
        Message::ThumbnailLoaded(handle) => {
            app.view.thumbnail = handle;
            Task::none()
        }
        Message::Transfer(TransferEvent::Progress(progress)) => {
            app.dispatch(SessionEvent::TransferProgressed(progress))
        }
        Message::Transfer(TransferEvent::Completed(path)) => {
            app.dispatch(SessionEvent::TransferCompleted(Ok(path)))
        }
        Message::Transfer(TransferEvent::Failed(error)) => {
            app.dispatch(SessionEvent::TransferCompleted(Err(error)))
        }
        Message::TranscodeFinished(result) => {
            app.dispatch(SessionEvent::TranscodeCompleted(result))
        }
    }
}

pub fn view(app: &DownloadApp) -> iced::Element<'_, Message> {
    app.view.view().map(Message::Ui)
}

pub fn theme(app: &DownloadApp) -> iced::Theme {
    if app.view.dark_theme {
        iced::Theme::Dark
    } else {
        iced::Theme::Light
    }
}

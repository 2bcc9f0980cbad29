use iced::{
    widget::{
        button, checkbox, column, container, image, pick_list, progress_bar, row, text,
        text_input, Space,
    },
    Element, Length,
};

use crate::domain::{
    BusyKind, ControlGroup, Effect, Notification, NotificationLevel, ProgressUpdate, VariantKind,
};

/// Main view state. Holds only what the widgets render; every change of
/// session state arrives as an `Effect` from the machine.
pub struct DownloadView {
    pub video_url: String,
    pub directory: String,
    pub title: String,
    pub thumbnail: Option<image::Handle>,
    pub video_variants: Vec<String>,
    pub audio_variants: Vec<String>,
    pub selected_video: Option<String>,
    pub selected_audio: Option<String>,
    pub convert_to_mp3: bool,
    pub progress: ProgressUpdate,
    pub progress_label: String,
    pub search_busy: bool,
    pub download_visible: bool,
    pub search_enabled: bool,
    pub download_enabled: bool,
    pub notification: Option<Notification>,
    pub dark_theme: bool,
}

impl Default for DownloadView {
    fn default() -> Self {
        Self {
            video_url: String::new(),
            directory: String::new(),
            title: String::new(),
            thumbnail: None,
            video_variants: Vec::new(),
            audio_variants: Vec::new(),
            selected_video: None,
            selected_audio: None,
            convert_to_mp3: false,
            progress: ProgressUpdate::Percent(0.0),
            progress_label: String::new(),
            search_busy: false,
            download_visible: false,
            search_enabled: true,
            download_enabled: true,
            notification: None,
            dark_theme: true,
        }
    }
}

#[derive(Debug, Clone)]
pub enum DownloadMessage {
    VideoUrlChanged(String),
    SearchPressed,
    PickDirectoryPressed,
    VideoVariantPicked(String),
    AudioVariantPicked(String),
    ConvertToggled(bool),
    DownloadVideoPressed,
    DownloadAudioPressed,
    ThemeToggled,
    NotificationClosed,
}

impl DownloadView {
    pub fn update(&mut self, message: DownloadMessage) {
        match message {
            DownloadMessage::VideoUrlChanged(url) => self.video_url = url,
            DownloadMessage::VideoVariantPicked(label) => self.selected_video = Some(label),
            DownloadMessage::AudioVariantPicked(label) => self.selected_audio = Some(label),
            DownloadMessage::ConvertToggled(value) => self.convert_to_mp3 = value,
            DownloadMessage::ThemeToggled => self.dark_theme = !self.dark_theme,
            // Handled by the app shell.
            DownloadMessage::SearchPressed
            | DownloadMessage::PickDirectoryPressed
            | DownloadMessage::DownloadVideoPressed
            | DownloadMessage::DownloadAudioPressed
            | DownloadMessage::NotificationClosed => {}
        }
    }

    /// Applies one presentation effect emitted by the session machine.
    pub fn apply(&mut self, effect: Effect) {
        match effect {
            Effect::SetBusy(BusyKind::Searching, active) => self.search_busy = active,
            Effect::SetBusy(BusyKind::Downloading, active) => {
                // No byte counts yet (or anymore): indeterminate while the
                // transfer is in flight, determinate zero otherwise.
                self.progress = if active {
                    ProgressUpdate::Indeterminate
                } else {
                    ProgressUpdate::Percent(0.0)
                };
            }
            Effect::SetProgress(update) => self.progress = update,
            Effect::SetProgressLabel(label) => self.progress_label = label,
            Effect::SetVariants(VariantKind::Video, labels) => {
                self.selected_video = labels.first().cloned();
                self.video_variants = labels;
            }
            Effect::SetVariants(VariantKind::Audio, labels) => {
                self.selected_audio = labels.first().cloned();
                self.audio_variants = labels;
            }
            Effect::SetTitle(title) => self.title = title,
            // The decoded bytes arrive separately via ThumbnailLoaded.
            Effect::SetThumbnail(_) => self.thumbnail = None,
            Effect::ShowNotification(notification) => self.notification = Some(notification),
            Effect::CloseNotification => self.notification = None,
            Effect::SetContainerVisible(visible) => {
                self.download_visible = visible;
                if !visible {
                    self.thumbnail = None;
                    self.convert_to_mp3 = false;
                }
            }
            Effect::SetControlsEnabled(ControlGroup::Search, enabled) => {
                self.search_enabled = enabled;
            }
            Effect::SetControlsEnabled(ControlGroup::Download, enabled) => {
                self.download_enabled = enabled;
            }
        }
    }

    pub fn view(&self) -> Element<'_, DownloadMessage> {
        let mut search_button = button("Search");
        if self.search_enabled && !self.search_busy {
            search_button = search_button.on_press(DownloadMessage::SearchPressed);
        }

        let mut url_input = text_input("Video URL...", &self.video_url).padding(10);
        if self.search_enabled {
            url_input = url_input
                .on_input(DownloadMessage::VideoUrlChanged)
                .on_submit(DownloadMessage::SearchPressed);
        }

        let header = row![
            text("Simple Video Downloader").size(28),
            Space::new().width(Length::Fill),
            button(if self.dark_theme { "Light" } else { "Dark" })
                .on_press(DownloadMessage::ThemeToggled),
        ];

        let directory_row = row![
            text_input("Directory", &self.directory).padding(10),
            button("Browse").on_press(DownloadMessage::PickDirectoryPressed),
        ]
        .spacing(10);

        let search_row = row![url_input, search_button].spacing(10);

        let mut content = column![
            header,
            Space::new().height(Length::Fixed(10.0)),
            directory_row,
            search_row,
        ]
        .padding(20)
        .spacing(10);

        if self.search_busy {
            content = content.push(text("Searching...").size(14));
        }

        if let Some(notification) = &self.notification {
            let marker = match notification.level {
                NotificationLevel::Success => "Success:",
                NotificationLevel::Error => "Error:",
            };
            content = content.push(
                row![
                    text(marker).size(14),
                    text(&notification.message).size(14),
                    Space::new().width(Length::Fill),
                    button("Close").on_press(DownloadMessage::NotificationClosed),
                ]
                .spacing(10),
            );
        }

        if self.download_visible {
            let mut preview = row![].spacing(10);
            if let Some(handle) = &self.thumbnail {
                preview = preview.push(image(handle.clone()).width(Length::Fixed(150.0)));
            }
            preview = preview.push(text(&self.title).size(20));

            let mut video_button = button("Download video");
            let mut audio_button = button("Download audio");
            if self.download_enabled {
                video_button = video_button.on_press(DownloadMessage::DownloadVideoPressed);
                audio_button = audio_button.on_press(DownloadMessage::DownloadAudioPressed);
            }

            let video_row = row![
                pick_list(
                    self.video_variants.clone(),
                    self.selected_video.clone(),
                    DownloadMessage::VideoVariantPicked,
                ),
                video_button,
            ]
            .spacing(10);

            let audio_row = row![
                pick_list(
                    self.audio_variants.clone(),
                    self.selected_audio.clone(),
                    DownloadMessage::AudioVariantPicked,
                ),
                audio_button,
            ]
            .spacing(10);

            let bar_value = match self.progress {
                ProgressUpdate::Percent(percent) => percent,
                ProgressUpdate::Indeterminate => 0.0,
            };
            let progress_row = row![
                text(&self.progress_label).size(14),
                progress_bar(0.0..=100.0, bar_value),
            ]
            .spacing(10);

            content = content.push(
                container(
                    column![
                        preview,
                        video_row,
                        audio_row,
                        checkbox(self.convert_to_mp3)
                            .label("Convert to MP3")
                            .on_toggle(DownloadMessage::ConvertToggled),
                        progress_row,
                    ]
                    .spacing(10),
                )
                .padding(10),
            );
        }

        content.into()
    }
}

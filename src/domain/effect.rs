use crate::domain::{Notification, VariantKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusyKind {
    Searching,
    Downloading,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlGroup {
    Search,
    Download,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProgressUpdate {
    Percent(f32),
    Indeterminate,
}

/// What the presentation surface must do after a state transition.
/// The machine never touches widgets directly; it only emits these.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    SetBusy(BusyKind, bool),
    SetProgress(ProgressUpdate),
    SetProgressLabel(String),
    SetVariants(VariantKind, Vec<String>),
    SetTitle(String),
    SetThumbnail(String),
    ShowNotification(Notification),
    CloseNotification,
    SetContainerVisible(bool),
    SetControlsEnabled(ControlGroup, bool),
}

pub mod effect;
pub mod error;
pub mod model;

pub use effect::{BusyKind, ControlGroup, Effect, ProgressUpdate};
pub use error::{ResolutionError, TranscodeError, TransferError};
pub use model::{
    dedupe_variants, CatalogResult, Notification, NotificationLevel, Phase, ProgressEvent,
    Session, VariantDescriptor, VariantKind,
};

mod session;
mod transcoder;
mod transfer_engine;

pub use session::{Outcome, SessionAction, SessionEvent, SessionMachine};
pub use transcoder::Transcoder;
pub use transfer_engine::{TransferEngine, TransferEvent};

//! Dialog session domain module

mod dialog_session;

pub use dialog_session::{DialogSession, DialogState, InvalidStateTransition};

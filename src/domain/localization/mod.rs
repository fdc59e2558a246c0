//! Localization domain module

mod language_file;
mod string_table;

pub use language_file::LanguageFile;
pub use string_table::{
    edit_track, format_message, messages, save_tracks, StringKey, EDIT_TRACK_SECTION,
    SAVE_TRACKS_SECTION, STRINGS_SECTION,
};

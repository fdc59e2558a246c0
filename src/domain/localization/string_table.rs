//! Translatable strings and their built-in defaults

/// Section holding shared messages
pub const STRINGS_SECTION: &str = "strings";
/// Section holding the save-tracks dialog labels
pub const SAVE_TRACKS_SECTION: &str = "savetracks";
/// Section holding the edit-track dialog labels
pub const EDIT_TRACK_SECTION: &str = "edittrack";

/// Identifies a translatable string and the text used when no
/// translation is available.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringKey {
    pub section: &'static str,
    pub id: u32,
    pub default_text: &'static str,
}

impl StringKey {
    pub const fn new(section: &'static str, id: u32, default_text: &'static str) -> Self {
        Self {
            section,
            id,
            default_text,
        }
    }
}

/// Shared messages
pub mod messages {
    use super::{StringKey, STRINGS_SECTION};

    pub const GENERAL_ERROR: StringKey = StringKey::new(STRINGS_SECTION, 0x0001, "Error");
    pub const GENERAL_QUESTION: StringKey = StringKey::new(STRINGS_SECTION, 0x0003, "Question");
    pub const ERROR_TARGETFOLDER: StringKey = StringKey::new(
        STRINGS_SECTION,
        0x0045,
        "Please specify a valid target folder.",
    );
    pub const CONFIRM_CREATE_DIR_PATH: StringKey = StringKey::new(
        STRINGS_SECTION,
        0x00a0,
        "The folder \"%s\" does not exist. Do you want to create it?",
    );
    pub const CANNOT_CREATE_DIR_PATH: StringKey = StringKey::new(
        STRINGS_SECTION,
        0x00a1,
        "Unable to create the folder \"%s\".",
    );
    pub const MISC_SPECIFYTRACKFOLDER: StringKey = StringKey::new(
        STRINGS_SECTION,
        0x0102,
        "Specify the folder to save the tracks to.",
    );
}

/// Save-tracks dialog labels
pub mod save_tracks {
    use super::{StringKey, SAVE_TRACKS_SECTION};

    pub const OK: StringKey = StringKey::new(SAVE_TRACKS_SECTION, 1, "OK");
    pub const CANCEL: StringKey = StringKey::new(SAVE_TRACKS_SECTION, 2, "Cancel");
    pub const TITLE: StringKey = StringKey::new(SAVE_TRACKS_SECTION, 200, "Save Tracks");
    pub const TARGET_LABEL: StringKey = StringKey::new(SAVE_TRACKS_SECTION, 1001, "Target folder:");
    pub const AUDIO_FORMAT_LABEL: StringKey =
        StringKey::new(SAVE_TRACKS_SECTION, 1002, "Audio format:");
    pub const CONFIGURE_BUTTON: StringKey =
        StringKey::new(SAVE_TRACKS_SECTION, 1003, "Configure...");
}

/// Edit-track dialog labels
pub mod edit_track {
    use super::{StringKey, EDIT_TRACK_SECTION};

    pub const OK: StringKey = StringKey::new(EDIT_TRACK_SECTION, 1, "OK");
    pub const CANCEL: StringKey = StringKey::new(EDIT_TRACK_SECTION, 2, "Cancel");
    pub const TITLE: StringKey = StringKey::new(EDIT_TRACK_SECTION, 201, "Edit Track");
    pub const TITLE_LABEL: StringKey = StringKey::new(EDIT_TRACK_SECTION, 1011, "Title:");
    pub const ARTIST_LABEL: StringKey = StringKey::new(EDIT_TRACK_SECTION, 1012, "Artist:");
}

/// Substitute the first `%s` in `template` with `arg`.
/// Templates without a placeholder are returned unchanged.
pub fn format_message(template: &str, arg: &str) -> String {
    template.replacen("%s", arg, 1)
}

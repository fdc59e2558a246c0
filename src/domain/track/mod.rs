//! Track domain module

mod metadata;

pub use metadata::{bound_cd_text, TrackEntry, TrackMetadata, TrackSheet, MAX_CD_TEXT_LEN};

//! Edit track metadata use case

use thiserror::Error;

use crate::domain::localization::edit_track;
use crate::domain::session::{DialogSession, DialogState, InvalidStateTransition};
use crate::domain::track::{bound_cd_text, TrackMetadata};

use super::ports::Localizer;

/// Errors from the edit track use case
#[derive(Debug, Error)]
pub enum EditTrackError {
    #[error(transparent)]
    InvalidState(#[from] InvalidStateTransition),
}

/// Translated labels of the edit track form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditTrackLabels {
    pub title: String,
    pub ok: String,
    pub cancel: String,
    pub track_title: String,
    pub track_artist: String,
}

impl EditTrackLabels {
    pub fn translate<L: Localizer>(localizer: &L) -> Self {
        Self {
            title: localizer.text(&edit_track::TITLE),
            ok: localizer.text(&edit_track::OK),
            cancel: localizer.text(&edit_track::CANCEL),
            track_title: localizer.text(&edit_track::TITLE_LABEL),
            track_artist: localizer.text(&edit_track::ARTIST_LABEL),
        }
    }
}

/// Edit track use case.
/// Edits a copy of the track's title and artist; the track itself is only
/// written on confirmation.
pub struct EditTrackUseCase<'t, L: Localizer> {
    localizer: L,
    track: &'t mut TrackMetadata,
    session: DialogSession,
    labels: EditTrackLabels,
    draft: TrackMetadata,
}

impl<'t, L: Localizer> EditTrackUseCase<'t, L> {
    pub fn new(localizer: L, track: &'t mut TrackMetadata) -> Self {
        let labels = EditTrackLabels::translate(&localizer);
        let draft = TrackMetadata::new(&track.title, &track.artist);
        Self {
            localizer,
            track,
            session: DialogSession::new(),
            labels,
            draft,
        }
    }

    /// Reload the fields from the track and retranslate the labels
    pub fn initialize(&mut self) -> Result<&TrackMetadata, EditTrackError> {
        self.session.ensure_open("initialize the form")?;
        self.labels = EditTrackLabels::translate(&self.localizer);
        self.draft = TrackMetadata::new(&self.track.title, &self.track.artist);
        Ok(&self.draft)
    }

    pub fn labels(&self) -> &EditTrackLabels {
        &self.labels
    }

    /// Current field contents
    pub fn draft(&self) -> &TrackMetadata {
        &self.draft
    }

    pub fn state(&self) -> DialogState {
        self.session.state()
    }

    pub fn set_title(&mut self, title: &str) -> Result<(), EditTrackError> {
        self.session.ensure_open("edit the title")?;
        self.draft.title = bound_cd_text(title);
        Ok(())
    }

    pub fn set_artist(&mut self, artist: &str) -> Result<(), EditTrackError> {
        self.session.ensure_open("edit the artist")?;
        self.draft.artist = bound_cd_text(artist);
        Ok(())
    }

    /// Write the edited fields back into the track
    pub fn confirm(&mut self) -> Result<(), EditTrackError> {
        self.session.begin_validation()?;
        *self.track = self.draft.clone();
        self.session.confirm()?;
        Ok(())
    }

    /// Close without touching the track
    pub fn cancel(&mut self) -> Result<(), EditTrackError> {
        self.session.cancel()?;
        Ok(())
    }
}

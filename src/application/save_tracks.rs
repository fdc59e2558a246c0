//! Save tracks use case

use thiserror::Error;

use crate::domain::codec::{CodecDescriptor, EncoderChoice, EncoderChoices, EncoderSelection};
use crate::domain::config::SaveTracksSettings;
use crate::domain::error::TargetPathError;
use crate::domain::localization::{format_message, messages, save_tracks};
use crate::domain::session::{DialogSession, DialogState, InvalidStateTransition};
use crate::domain::target::TargetPath;

use super::ports::{CodecRegistry, DirectoryError, DirectoryUtility, Localizer, Prompter};

/// Errors from the save tracks use case.
/// None of them ends the session; the user may correct the input and retry.
#[derive(Debug, Error)]
pub enum SaveTracksError {
    #[error(transparent)]
    InvalidTargetPath(#[from] TargetPathError),

    #[error("Creating folder \"{0}\" was declined")]
    DirectoryCreationDeclined(String),

    #[error("Unable to create folder \"{path}\": {source}")]
    DirectoryCreationFailed {
        path: String,
        #[source]
        source: DirectoryError,
    },

    #[error("Encoder index {index} is out of range (the list has {len} entries)")]
    InvalidSelection { index: usize, len: usize },

    #[error(transparent)]
    InvalidState(#[from] InvalidStateTransition),
}

/// Translated labels of the save tracks form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveTracksLabels {
    pub title: String,
    pub ok: String,
    pub cancel: String,
    pub target: String,
    pub audio_format: String,
    pub configure: String,
}

impl SaveTracksLabels {
    /// Built-in labels
    pub fn untranslated() -> Self {
        Self {
            title: save_tracks::TITLE.default_text.to_string(),
            ok: save_tracks::OK.default_text.to_string(),
            cancel: save_tracks::CANCEL.default_text.to_string(),
            target: save_tracks::TARGET_LABEL.default_text.to_string(),
            audio_format: save_tracks::AUDIO_FORMAT_LABEL.default_text.to_string(),
            configure: save_tracks::CONFIGURE_BUTTON.default_text.to_string(),
        }
    }

    /// Translate every label, keeping the built-in text for missing entries
    pub fn translate<L: Localizer>(localizer: &L) -> Self {
        Self {
            title: localizer.text(&save_tracks::TITLE),
            ok: localizer.text(&save_tracks::OK),
            cancel: localizer.text(&save_tracks::CANCEL),
            target: localizer.text(&save_tracks::TARGET_LABEL),
            audio_format: localizer.text(&save_tracks::AUDIO_FORMAT_LABEL),
            configure: localizer.text(&save_tracks::CONFIGURE_BUTTON),
        }
    }
}

/// Snapshot of everything the form shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveTracksView {
    pub labels: SaveTracksLabels,
    pub target: String,
    pub encoders: EncoderChoices,
    pub selected: usize,
    pub configure_enabled: bool,
}

/// Save tracks use case.
///
/// Collects a target folder and an optional encoder, validates the folder
/// (offering to create it), writes it into the shared settings and exposes
/// the chosen encoder through [`SaveTracksUseCase::encoder`].
pub struct SaveTracksUseCase<'s, R, L, D, P>
where
    R: CodecRegistry,
    L: Localizer,
    D: DirectoryUtility,
    P: Prompter,
{
    registry: R,
    localizer: L,
    directory: D,
    prompter: P,
    settings: &'s mut SaveTracksSettings,
    session: DialogSession,
    labels: SaveTracksLabels,
    choices: EncoderChoices,
    selected: usize,
    target_text: String,
    encoder: EncoderSelection,
}

impl<'s, R, L, D, P> SaveTracksUseCase<'s, R, L, D, P>
where
    R: CodecRegistry,
    L: Localizer,
    D: DirectoryUtility,
    P: Prompter,
{
    /// Create a new use case instance and initialize the form
    pub fn new(
        registry: R,
        localizer: L,
        directory: D,
        prompter: P,
        settings: &'s mut SaveTracksSettings,
    ) -> Self {
        let mut use_case = Self {
            registry,
            localizer,
            directory,
            prompter,
            settings,
            session: DialogSession::new(),
            labels: SaveTracksLabels::untranslated(),
            choices: EncoderChoices::from_codecs(&[]),
            selected: 0,
            target_text: String::new(),
            encoder: EncoderSelection::Default,
        };
        use_case.load_form();
        use_case
    }

    /// Rebuild the form from the stored target folder and the codec
    /// registry. Selects the default entry.
    pub fn initialize(&mut self) -> Result<SaveTracksView, SaveTracksError> {
        self.session.ensure_open("initialize the form")?;
        self.load_form();
        Ok(self.view())
    }

    fn load_form(&mut self) {
        self.target_text = TargetPath::bound_input(self.settings.target());
        self.choices = EncoderChoices::from_codecs(&self.registry.codecs());
        self.selected = 0;
        self.labels = SaveTracksLabels::translate(&self.localizer);
    }

    /// Current form contents
    pub fn view(&self) -> SaveTracksView {
        SaveTracksView {
            labels: self.labels.clone(),
            target: self.target_text.clone(),
            encoders: self.choices.clone(),
            selected: self.selected,
            configure_enabled: self.configure_enabled(),
        }
    }

    pub fn state(&self) -> DialogState {
        self.session.state()
    }

    pub fn target_text(&self) -> &str {
        &self.target_text
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn choices(&self) -> &EncoderChoices {
        &self.choices
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    pub fn directory(&self) -> &D {
        &self.directory
    }

    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    /// Whether the "configure encoder" action is available
    pub fn configure_enabled(&self) -> bool {
        self.choices
            .get(self.selected)
            .is_some_and(EncoderChoice::is_configurable)
    }

    /// Replace the target folder text (bounded like the input field)
    pub fn set_target_text(&mut self, text: &str) -> Result<(), SaveTracksError> {
        self.session.ensure_open("edit the target folder")?;
        self.target_text = TargetPath::bound_input(text);
        Ok(())
    }

    /// Change the selected encoder entry.
    ///
    /// # Returns
    /// Whether the "configure encoder" action is now enabled
    pub fn select_encoder(&mut self, index: usize) -> Result<bool, SaveTracksError> {
        self.session.ensure_open("change the encoder")?;
        if index >= self.choices.len() {
            return Err(SaveTracksError::InvalidSelection {
                index,
                len: self.choices.len(),
            });
        }
        self.selected = index;
        Ok(self.configure_enabled())
    }

    /// Run the selected codec's configuration routine.
    /// Does nothing while the default entry is selected.
    pub async fn configure_encoder(&self) -> Result<(), SaveTracksError> {
        self.session.ensure_open("configure the encoder")?;

        let Some(id) = self
            .choices
            .get(self.selected)
            .and_then(|c| c.selection().codec_id())
        else {
            return Ok(());
        };

        // The routine's outcome is the codec's own business
        if let Err(e) = self.registry.configure(id).await {
            eprintln!("Warning: encoder configuration failed: {}", e);
        }
        Ok(())
    }

    /// Let the user pick the target folder.
    ///
    /// # Returns
    /// true if a folder was picked and replaced the target text
    pub async fn browse(&mut self) -> Result<bool, SaveTracksError> {
        self.session.ensure_open("browse for a folder")?;

        let title = self.localizer.text(&messages::MISC_SPECIFYTRACKFOLDER);
        match self.prompter.pick_folder(&title).await {
            Some(folder) => {
                self.target_text = TargetPath::bound_input(&folder);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Validate `entered_path`, store it and resolve the encoder.
    ///
    /// On failure the session stays open and the shared settings are
    /// untouched.
    pub async fn confirm(
        &mut self,
        entered_path: &str,
    ) -> Result<EncoderSelection, SaveTracksError> {
        self.session.begin_validation()?;

        let target = match self.validate(entered_path).await {
            Ok(target) => target,
            Err(e) => {
                self.session.reject()?;
                return Err(e);
            }
        };

        self.settings.set_target(&target);
        self.encoder = self
            .choices
            .get(self.selected)
            .map(EncoderChoice::selection)
            .unwrap_or_default();
        self.session.confirm()?;

        Ok(self.encoder)
    }

    /// End the session without storing anything
    pub fn cancel(&mut self) -> Result<(), SaveTracksError> {
        self.session.cancel()?;
        Ok(())
    }

    /// The confirmed encoder; [`EncoderSelection::Default`] unless the
    /// session was confirmed with a codec selected
    pub fn encoder(&self) -> EncoderSelection {
        self.encoder
    }

    /// The confirmed encoder's descriptor, if any
    pub fn encoder_descriptor(&self) -> Option<CodecDescriptor> {
        self.encoder
            .codec_id()
            .and_then(|id| self.registry.codec(id))
    }

    async fn validate(&mut self, entered_path: &str) -> Result<TargetPath, SaveTracksError> {
        self.target_text = TargetPath::bound_input(entered_path);

        let target: TargetPath = match self.target_text.parse() {
            Ok(target) => target,
            Err(e) => {
                self.prompter
                    .show_error(
                        &self.localizer.text(&messages::GENERAL_ERROR),
                        &self.localizer.text(&messages::ERROR_TARGETFOLDER),
                    )
                    .await;
                return Err(SaveTracksError::InvalidTargetPath(e));
            }
        };

        if self.directory.exists(&target).await {
            return Ok(target);
        }

        let question = format_message(
            &self.localizer.text(&messages::CONFIRM_CREATE_DIR_PATH),
            target.as_str(),
        );
        let accepted = self
            .prompter
            .ask_yes_no(&self.localizer.text(&messages::GENERAL_QUESTION), &question)
            .await;
        if !accepted {
            return Err(SaveTracksError::DirectoryCreationDeclined(
                target.into_string(),
            ));
        }

        if let Err(source) = self.directory.create(&target).await {
            let message = format_message(
                &self.localizer.text(&messages::CANNOT_CREATE_DIR_PATH),
                target.as_str(),
            );
            self.prompter
                .show_error(&self.localizer.text(&messages::GENERAL_ERROR), &message)
                .await;
            return Err(SaveTracksError::DirectoryCreationFailed {
                path: target.into_string(),
                source,
            });
        }

        Ok(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::CodecError;
    use crate::domain::codec::{CodecCapabilities, CodecId};
    use async_trait::async_trait;
    use std::collections::{HashMap, HashSet};
    use std::sync::Mutex;

    // Mock implementations for testing
    struct MockRegistry {
        codecs: Vec<CodecDescriptor>,
        configured: Mutex<Vec<CodecId>>,
        fail_configure: bool,
    }

    impl MockRegistry {
        fn new() -> Self {
            Self {
                codecs: vec![
                    CodecDescriptor::new(
                        CodecId(0),
                        ".wav",
                        "Wave",
                        CodecCapabilities::CAN_DECODE | CodecCapabilities::CAN_ENCODE,
                    ),
                    CodecDescriptor::new(
                        CodecId(1),
                        ".mp3",
                        "LAME MP3",
                        CodecCapabilities::CAN_ENCODE | CodecCapabilities::HAS_CONFIG,
                    ),
                    CodecDescriptor::new(CodecId(2), ".wma", "WMA", CodecCapabilities::CAN_DECODE),
                    CodecDescriptor::new(
                        CodecId(3),
                        ".flac",
                        "FLAC",
                        CodecCapabilities::CAN_ENCODE,
                    ),
                ],
                configured: Mutex::new(Vec::new()),
                fail_configure: false,
            }
        }

        fn configured(&self) -> Vec<CodecId> {
            self.configured.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl CodecRegistry for MockRegistry {
        fn codecs(&self) -> Vec<CodecDescriptor> {
            self.codecs.clone()
        }

        async fn configure(&self, id: CodecId) -> Result<(), CodecError> {
            self.configured.lock().unwrap().push(id);
            if self.fail_configure {
                return Err(CodecError::ConfigureFailed("boom".to_string()));
            }
            Ok(())
        }
    }

    #[derive(Default)]
    struct MockLocalizer {
        entries: HashMap<(String, u32), String>,
    }

    impl MockLocalizer {
        fn with(mut self, section: &str, id: u32, text: &str) -> Self {
            self.entries
                .insert((section.to_string(), id), text.to_string());
            self
        }
    }

    impl Localizer for MockLocalizer {
        fn lookup(&self, section: &str, id: u32) -> Option<String> {
            self.entries.get(&(section.to_string(), id)).cloned()
        }
    }

    struct MockDirectory {
        existing: Mutex<HashSet<String>>,
        created: Mutex<Vec<String>>,
        create_ok: bool,
    }

    impl MockDirectory {
        fn with_existing(paths: &[&str]) -> Self {
            Self {
                existing: Mutex::new(paths.iter().map(|p| p.to_string()).collect()),
                created: Mutex::new(Vec::new()),
                create_ok: true,
            }
        }

        fn failing() -> Self {
            Self {
                create_ok: false,
                ..Self::with_existing(&[])
            }
        }

        fn created(&self) -> Vec<String> {
            self.created.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl DirectoryUtility for MockDirectory {
        async fn exists(&self, path: &TargetPath) -> bool {
            self.existing.lock().unwrap().contains(path.as_str())
        }

        async fn create(&self, path: &TargetPath) -> Result<(), DirectoryError> {
            self.created.lock().unwrap().push(path.to_string());
            if !self.create_ok {
                return Err(DirectoryError::CreateFailed("read-only".to_string()));
            }
            self.existing.lock().unwrap().insert(path.to_string());
            Ok(())
        }
    }

    struct MockPrompter {
        answer: bool,
        folder: Option<String>,
        questions: Mutex<Vec<(String, String)>>,
        errors: Mutex<Vec<(String, String)>>,
        picker_titles: Mutex<Vec<String>>,
    }

    impl MockPrompter {
        fn answering(answer: bool) -> Self {
            Self {
                answer,
                folder: None,
                questions: Mutex::new(Vec::new()),
                errors: Mutex::new(Vec::new()),
                picker_titles: Mutex::new(Vec::new()),
            }
        }

        fn picking(folder: Option<&str>) -> Self {
            Self {
                folder: folder.map(str::to_string),
                ..Self::answering(true)
            }
        }

        fn questions(&self) -> Vec<(String, String)> {
            self.questions.lock().unwrap().clone()
        }

        fn errors(&self) -> Vec<(String, String)> {
            self.errors.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Prompter for MockPrompter {
        async fn ask_yes_no(&self, title: &str, message: &str) -> bool {
            self.questions
                .lock()
                .unwrap()
                .push((title.to_string(), message.to_string()));
            self.answer
        }

        async fn show_error(&self, title: &str, message: &str) {
            self.errors
                .lock()
                .unwrap()
                .push((title.to_string(), message.to_string()));
        }

        async fn pick_folder(&self, title: &str) -> Option<String> {
            self.picker_titles.lock().unwrap().push(title.to_string());
            self.folder.clone()
        }
    }

    fn use_case<'s>(
        settings: &'s mut SaveTracksSettings,
        directory: MockDirectory,
        prompter: MockPrompter,
    ) -> SaveTracksUseCase<'s, MockRegistry, MockLocalizer, MockDirectory, MockPrompter> {
        SaveTracksUseCase::new(
            MockRegistry::new(),
            MockLocalizer::default(),
            directory,
            prompter,
            settings,
        )
    }

    #[test]
    fn initialize_presents_default_entry_and_prior_target() {
        let mut settings = SaveTracksSettings::new("E:\\Rips");
        let uc = use_case(
            &mut settings,
            MockDirectory::with_existing(&[]),
            MockPrompter::answering(true),
        );

        let view = uc.view();
        assert_eq!(view.target, "E:\\Rips");
        assert_eq!(view.selected, 0);
        assert!(!view.configure_enabled);
        let labels: Vec<&str> = view.encoders.iter().map(|c| c.label()).collect();
        assert_eq!(labels, vec!["Wave", "LAME MP3", "FLAC"]);
        assert_eq!(uc.state(), DialogState::Open);
    }

    #[test]
    fn initialize_twice_is_idempotent() {
        let mut settings = SaveTracksSettings::new("C:\\Music");
        let mut uc = use_case(
            &mut settings,
            MockDirectory::with_existing(&[]),
            MockPrompter::answering(true),
        );

        let first = uc.initialize().unwrap();
        uc.select_encoder(1).unwrap();
        let second = uc.initialize().unwrap();
        assert_eq!(first, second);
        assert_eq!(second.selected, 0);
    }

    #[test]
    fn missing_translations_keep_default_labels() {
        let mut settings = SaveTracksSettings::default();
        let uc = use_case(
            &mut settings,
            MockDirectory::with_existing(&[]),
            MockPrompter::answering(true),
        );
        assert_eq!(uc.view().labels, SaveTracksLabels::untranslated());
    }

    #[test]
    fn labels_are_translated_when_available() {
        let mut settings = SaveTracksSettings::default();
        let localizer = MockLocalizer::default()
            .with("savetracks", 1, "Spara")
            .with("savetracks", 200, "Spara spår");
        let uc = SaveTracksUseCase::new(
            MockRegistry::new(),
            localizer,
            MockDirectory::with_existing(&[]),
            MockPrompter::answering(true),
            &mut settings,
        );

        let labels = uc.view().labels;
        assert_eq!(labels.ok, "Spara");
        assert_eq!(labels.title, "Spara spår");
        assert_eq!(labels.cancel, "Cancel");
    }

    #[test]
    fn selection_change_updates_configure_affordance() {
        let mut settings = SaveTracksSettings::default();
        let mut uc = use_case(
            &mut settings,
            MockDirectory::with_existing(&[]),
            MockPrompter::answering(true),
        );

        assert!(uc.select_encoder(1).unwrap());
        assert!(!uc.select_encoder(2).unwrap());
        assert!(!uc.select_encoder(0).unwrap());
    }

    #[test]
    fn out_of_range_selection_is_rejected() {
        let mut settings = SaveTracksSettings::default();
        let mut uc = use_case(
            &mut settings,
            MockDirectory::with_existing(&[]),
            MockPrompter::answering(true),
        );
        uc.select_encoder(1).unwrap();

        let err = uc.select_encoder(3).unwrap_err();
        assert!(matches!(
            err,
            SaveTracksError::InvalidSelection { index: 3, len: 3 }
        ));
        assert_eq!(uc.selected(), 1);
    }

    #[tokio::test]
    async fn configure_default_entry_is_noop() {
        let mut settings = SaveTracksSettings::default();
        let uc = use_case(
            &mut settings,
            MockDirectory::with_existing(&[]),
            MockPrompter::answering(true),
        );

        uc.configure_encoder().await.unwrap();
        assert!(uc.registry().configured().is_empty());
    }

    #[tokio::test]
    async fn configure_delegates_to_selected_codec() {
        let mut settings = SaveTracksSettings::default();
        let mut uc = use_case(
            &mut settings,
            MockDirectory::with_existing(&[]),
            MockPrompter::answering(true),
        );

        uc.select_encoder(1).unwrap();
        uc.configure_encoder().await.unwrap();
        assert_eq!(uc.registry().configured(), vec![CodecId(1)]);
    }

    #[tokio::test]
    async fn configure_failure_is_not_interpreted() {
        let mut settings = SaveTracksSettings::default();
        let registry = MockRegistry {
            fail_configure: true,
            ..MockRegistry::new()
        };
        let mut uc = SaveTracksUseCase::new(
            registry,
            MockLocalizer::default(),
            MockDirectory::with_existing(&[]),
            MockPrompter::answering(true),
            &mut settings,
        );

        uc.select_encoder(1).unwrap();
        assert!(uc.configure_encoder().await.is_ok());
        assert_eq!(uc.state(), DialogState::Open);
    }

    #[tokio::test]
    async fn confirm_existing_folder_with_default_encoder() {
        let mut settings = SaveTracksSettings::default();
        let (result, created, questions, encoder) = {
            let mut uc = use_case(
                &mut settings,
                MockDirectory::with_existing(&["C:\\Music"]),
                MockPrompter::answering(true),
            );
            let result = uc.confirm("C:\\Music").await;
            assert_eq!(uc.state(), DialogState::Confirmed);
            (
                result,
                uc.directory().created(),
                uc.prompter().questions(),
                uc.encoder(),
            )
        };

        assert_eq!(result.unwrap(), EncoderSelection::Default);
        assert_eq!(encoder, EncoderSelection::Default);
        assert!(created.is_empty());
        assert!(questions.is_empty());
        assert_eq!(settings.target(), "C:\\Music");
    }

    #[tokio::test]
    async fn confirm_rejects_path_without_drive() {
        let mut settings = SaveTracksSettings::new("C:\\Old");
        let (result, errors, state) = {
            let mut uc = use_case(
                &mut settings,
                MockDirectory::with_existing(&[]),
                MockPrompter::answering(true),
            );
            let result = uc.confirm("Music").await;
            (result, uc.prompter().errors(), uc.state())
        };

        assert!(matches!(result, Err(SaveTracksError::InvalidTargetPath(_))));
        assert_eq!(state, DialogState::Open);
        assert_eq!(
            errors,
            vec![(
                "Error".to_string(),
                "Please specify a valid target folder.".to_string()
            )]
        );
        assert_eq!(settings.target(), "C:\\Old");
    }

    #[tokio::test]
    async fn confirm_rejects_short_or_colonless_input() {
        for input in ["", "C:", "ab", "C\\Music", "CC:\\x", "/home/music"] {
            let mut settings = SaveTracksSettings::new("C:\\Old");
            let result = {
                let mut uc = use_case(
                    &mut settings,
                    MockDirectory::with_existing(&[]),
                    MockPrompter::answering(true),
                );
                uc.confirm(input).await
            };
            assert!(
                matches!(result, Err(SaveTracksError::InvalidTargetPath(_))),
                "input {:?} should be rejected",
                input
            );
            assert_eq!(settings.target(), "C:\\Old");
        }
    }

    #[tokio::test]
    async fn declined_creation_keeps_session_open() {
        let mut settings = SaveTracksSettings::new("C:\\Old");
        let (result, questions, errors, created, state) = {
            let mut uc = use_case(
                &mut settings,
                MockDirectory::with_existing(&[]),
                MockPrompter::answering(false),
            );
            let result = uc.confirm("D:\\NewFolder").await;
            (
                result,
                uc.prompter().questions(),
                uc.prompter().errors(),
                uc.directory().created(),
                uc.state(),
            )
        };

        assert!(matches!(
            result,
            Err(SaveTracksError::DirectoryCreationDeclined(ref p)) if p == "D:\\NewFolder"
        ));
        assert_eq!(state, DialogState::Open);
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].0, "Question");
        assert!(questions[0].1.contains("D:\\NewFolder"));
        assert!(errors.is_empty());
        assert!(created.is_empty());
        assert_eq!(settings.target(), "C:\\Old");
    }

    #[tokio::test]
    async fn accepted_creation_stores_path_and_codec() {
        let mut settings = SaveTracksSettings::default();
        let (result, created, descriptor) = {
            let mut uc = use_case(
                &mut settings,
                MockDirectory::with_existing(&[]),
                MockPrompter::answering(true),
            );
            uc.select_encoder(1).unwrap();
            let result = uc.confirm("D:\\NewFolder").await;
            (result, uc.directory().created(), uc.encoder_descriptor())
        };

        assert_eq!(result.unwrap(), EncoderSelection::Codec(CodecId(1)));
        assert_eq!(created, vec!["D:\\NewFolder".to_string()]);
        assert_eq!(descriptor.unwrap().name, "LAME MP3");
        assert_eq!(settings.target(), "D:\\NewFolder");
    }

    #[tokio::test]
    async fn failed_creation_reports_error() {
        let mut settings = SaveTracksSettings::new("C:\\Old");
        let (result, errors, state) = {
            let mut uc = use_case(
                &mut settings,
                MockDirectory::failing(),
                MockPrompter::answering(true),
            );
            let result = uc.confirm("Z:\\Nope").await;
            (result, uc.prompter().errors(), uc.state())
        };

        assert!(matches!(
            result,
            Err(SaveTracksError::DirectoryCreationFailed { .. })
        ));
        assert_eq!(state, DialogState::Open);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].0, "Error");
        assert_eq!(errors[0].1, "Unable to create the folder \"Z:\\Nope\".");
        assert_eq!(settings.target(), "C:\\Old");
    }

    #[tokio::test]
    async fn localized_messages_substitute_path() {
        let mut settings = SaveTracksSettings::default();
        let localizer = MockLocalizer::default()
            .with("strings", 0x0003, "Fråga")
            .with("strings", 0x00a0, "Skapa %s?");
        let questions = {
            let mut uc = SaveTracksUseCase::new(
                MockRegistry::new(),
                localizer,
                MockDirectory::with_existing(&[]),
                MockPrompter::answering(false),
                &mut settings,
            );
            let _ = uc.confirm("D:\\Ny").await;
            uc.prompter().questions()
        };

        assert_eq!(
            questions,
            vec![("Fråga".to_string(), "Skapa D:\\Ny?".to_string())]
        );
    }

    #[tokio::test]
    async fn retry_after_failure_can_confirm() {
        let mut settings = SaveTracksSettings::default();
        let encoder = {
            let mut uc = use_case(
                &mut settings,
                MockDirectory::with_existing(&["C:\\Music"]),
                MockPrompter::answering(true),
            );
            assert!(uc.confirm("Music").await.is_err());
            uc.select_encoder(2).unwrap();
            uc.confirm("C:\\Music").await.unwrap()
        };

        assert_eq!(encoder, EncoderSelection::Codec(CodecId(3)));
        assert_eq!(settings.target(), "C:\\Music");
    }

    #[tokio::test]
    async fn confirm_stores_long_input_bounded() {
        let mut settings = SaveTracksSettings::default();
        let long = format!("C:\\{}", "a".repeat(300));
        let expected = TargetPath::bound_input(&long);
        {
            let mut uc = use_case(
                &mut settings,
                MockDirectory::with_existing(&[expected.as_str()]),
                MockPrompter::answering(true),
            );
            uc.confirm(&long).await.unwrap();
        }
        assert_eq!(settings.target(), expected);
    }

    #[tokio::test]
    async fn cancel_discards_selection() {
        let mut settings = SaveTracksSettings::new("C:\\Old");
        let encoder = {
            let mut uc = use_case(
                &mut settings,
                MockDirectory::with_existing(&["C:\\Music"]),
                MockPrompter::answering(true),
            );
            uc.select_encoder(1).unwrap();
            uc.set_target_text("C:\\Music").unwrap();
            uc.cancel().unwrap();
            assert_eq!(uc.state(), DialogState::Cancelled);
            uc.encoder()
        };

        assert_eq!(encoder, EncoderSelection::Default);
        assert_eq!(settings.target(), "C:\\Old");
    }

    #[tokio::test]
    async fn terminal_state_rejects_further_events() {
        let mut settings = SaveTracksSettings::default();
        let mut uc = use_case(
            &mut settings,
            MockDirectory::with_existing(&["C:\\Music"]),
            MockPrompter::answering(true),
        );
        uc.select_encoder(1).unwrap();
        uc.confirm("C:\\Music").await.unwrap();

        assert!(matches!(
            uc.confirm("C:\\Other").await,
            Err(SaveTracksError::InvalidState(_))
        ));
        assert!(uc.cancel().is_err());
        assert!(uc.select_encoder(0).is_err());
        assert!(uc.set_target_text("D:\\x").is_err());
        assert!(uc.configure_encoder().await.is_err());
        assert!(matches!(
            uc.initialize(),
            Err(SaveTracksError::InvalidState(_))
        ));
        assert_eq!(uc.selected(), 1);
        assert_eq!(uc.encoder(), EncoderSelection::Codec(CodecId(1)));
    }

    #[test]
    fn initialize_after_cancel_keeps_form() {
        let mut settings = SaveTracksSettings::new(r"C:\Music");
        let mut uc = use_case(
            &mut settings,
            MockDirectory::with_existing(&[]),
            MockPrompter::answering(true),
        );
        uc.select_encoder(1).unwrap();
        uc.cancel().unwrap();

        assert!(uc.initialize().is_err());
        assert_eq!(uc.state(), DialogState::Cancelled);
        assert_eq!(uc.selected(), 1);
    }

    #[tokio::test]
    async fn browse_replaces_target_text() {
        let mut settings = SaveTracksSettings::new("C:\\Old");
        let mut uc = use_case(
            &mut settings,
            MockDirectory::with_existing(&[]),
            MockPrompter::picking(Some("F:\\Picked")),
        );

        assert!(uc.browse().await.unwrap());
        assert_eq!(uc.target_text(), "F:\\Picked");
        assert_eq!(
            uc.prompter().picker_titles.lock().unwrap().clone(),
            vec!["Specify the folder to save the tracks to.".to_string()]
        );
    }

    #[tokio::test]
    async fn dismissed_browse_keeps_target_text() {
        let mut settings = SaveTracksSettings::new("C:\\Old");
        let mut uc = use_case(
            &mut settings,
            MockDirectory::with_existing(&[]),
            MockPrompter::picking(None),
        );

        assert!(!uc.browse().await.unwrap());
        assert_eq!(uc.target_text(), "C:\\Old");
    }
}

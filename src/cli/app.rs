//! Command runners

use std::path::PathBuf;
use std::process::ExitCode;

use serde::Serialize;

use crate::application::ports::{
    CodecRegistry, ConfigStore, DirectoryUtility, Localizer, Prompter, TrackSheetStore,
};
use crate::application::{EditTrackUseCase, SaveTracksError, SaveTracksUseCase};
use crate::domain::codec::{
    CodecDescriptor, EncoderChoice, EncoderChoices, DEFAULT_AUDIO_EXTENSION,
    DEFAULT_ENCODER_LABEL,
};
use crate::domain::config::AppConfig;
use crate::domain::error::TrackSheetError;
use crate::infrastructure::{
    create_localizer, create_prompter, ConfiguredCodecRegistry, FsDirectory, TomlTrackSheetStore,
    XdgConfigStore,
};

use super::args::SaveArgs;
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Encoder chosen by a save run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EncoderSummary {
    pub name: String,
    pub extension: String,
    pub configurable: bool,
}

impl EncoderSummary {
    /// The built-in uncompressed format
    pub fn default_format() -> Self {
        Self {
            name: DEFAULT_ENCODER_LABEL.to_string(),
            extension: DEFAULT_AUDIO_EXTENSION.to_string(),
            configurable: false,
        }
    }
}

impl From<&CodecDescriptor> for EncoderSummary {
    fn from(codec: &CodecDescriptor) -> Self {
        Self {
            name: codec.name.clone(),
            extension: codec.extension.clone(),
            configurable: codec.capabilities.has_config(),
        }
    }
}

/// Result of a confirmed save run
#[derive(Debug, Clone, Serialize)]
pub struct SaveOutcome {
    pub target: String,
    pub encoder: EncoderSummary,
}

/// One entry of the encoder list
#[derive(Debug, Clone, Serialize)]
struct EncoderRow {
    index: usize,
    name: String,
    extension: String,
    configurable: bool,
    default: bool,
}

/// Load the config file on top of the built-in defaults
pub async fn load_config<S: ConfigStore>(store: &S) -> AppConfig {
    let file_config = match store.load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: {}, using defaults", e);
            AppConfig::empty()
        }
    };

    // Merge: defaults < file
    AppConfig::defaults().merge(file_config)
}

/// Run the save tracks workflow and remember the confirmed folder
pub async fn run_save(args: SaveArgs) -> ExitCode {
    let mut presenter = Presenter::new();
    let store = XdgConfigStore::new();
    let config = load_config(&store).await;
    let mut settings = config.save_tracks_settings();

    // Create adapters
    let registry = ConfiguredCodecRegistry::from_config(&config.codecs_or_default());
    let localizer = create_localizer(config.language_file.as_deref()).await;
    let directory = FsDirectory::with_drive_roots(config.drive_roots());
    let prompter = create_prompter(args.yes);

    let result = {
        let mut use_case =
            SaveTracksUseCase::new(registry, localizer, directory, prompter, &mut settings);
        drive_save(&mut use_case, &args, &mut presenter).await
    };

    let encoder = match result {
        Ok(Some(encoder)) => encoder,
        Ok(None) => {
            presenter.warn("Cancelled");
            return ExitCode::from(EXIT_ERROR);
        }
        Err(e) => {
            presenter.error(&e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    if let Err(e) = store.save_settings(&settings).await {
        presenter.warn(&format!("Target folder was not remembered: {}", e));
    }

    let outcome = SaveOutcome {
        target: settings.target().to_string(),
        encoder,
    };

    if args.json {
        match serde_json::to_string_pretty(&outcome) {
            Ok(json) => presenter.output(&json),
            Err(e) => {
                presenter.error(&format!("Failed to encode result: {}", e));
                return ExitCode::from(EXIT_ERROR);
            }
        }
    } else {
        presenter.success(&format!(
            "Tracks will be saved to {} as {} ({})",
            outcome.target, outcome.encoder.name, outcome.encoder.extension
        ));
        presenter.output(&outcome.target);
    }

    ExitCode::from(EXIT_SUCCESS)
}

/// Walk the use case through one save session.
///
/// # Returns
/// The confirmed encoder, or None when the session was cancelled
async fn drive_save<R, L, D, P>(
    use_case: &mut SaveTracksUseCase<'_, R, L, D, P>,
    args: &SaveArgs,
    presenter: &mut Presenter,
) -> Result<Option<EncoderSummary>, String>
where
    R: CodecRegistry,
    L: Localizer,
    D: DirectoryUtility,
    P: Prompter,
{
    let view = use_case.view();
    presenter.heading(&view.labels.title);

    if let Some(name) = &args.encoder {
        let index = view
            .encoders
            .position_by_label(name)
            .ok_or_else(|| unknown_encoder(name, &view.encoders))?;
        use_case.select_encoder(index).map_err(|e| e.to_string())?;
    }

    if args.configure {
        if use_case.configure_enabled() {
            presenter.start_spinner(&view.labels.configure);
            let result = use_case.configure_encoder().await;
            presenter.stop_spinner();
            result.map_err(|e| e.to_string())?;
        } else {
            presenter.warn("The selected encoder has no configuration");
        }
    }

    let mut entered = args
        .target
        .clone()
        .unwrap_or_else(|| use_case.target_text().to_string());

    if args.browse {
        if !use_case.browse().await.map_err(|e| e.to_string())? {
            use_case.cancel().map_err(|e| e.to_string())?;
            return Ok(None);
        }
        entered = use_case.target_text().to_string();
    }

    loop {
        match use_case.confirm(&entered).await {
            Ok(_) => break,
            Err(e) if ends_session(&e) => return Err(e.to_string()),
            Err(e) if args.yes => {
                use_case.cancel().map_err(|e| e.to_string())?;
                return Err(e.to_string());
            }
            Err(_) => {
                // The session is still open: ask for another folder
                if !use_case.browse().await.map_err(|e| e.to_string())? {
                    use_case.cancel().map_err(|e| e.to_string())?;
                    return Ok(None);
                }
                entered = use_case.target_text().to_string();
            }
        }
    }

    Ok(Some(
        use_case
            .encoder_descriptor()
            .map(|codec| EncoderSummary::from(&codec))
            .unwrap_or_else(EncoderSummary::default_format),
    ))
}

fn unknown_encoder(name: &str, choices: &EncoderChoices) -> String {
    let known = choices
        .iter()
        .map(EncoderChoice::label)
        .collect::<Vec<_>>()
        .join(", ");
    format!("Unknown encoder '{}'. Available: {}", name, known)
}

/// Errors after which the save session accepts no further input
fn ends_session(error: &SaveTracksError) -> bool {
    matches!(
        error,
        SaveTracksError::InvalidState(_) | SaveTracksError::InvalidSelection { .. }
    )
}

/// List the encoder choices offered by the save workflow
pub async fn run_encoders(json: bool) -> ExitCode {
    let presenter = Presenter::new();
    let config = load_config(&XdgConfigStore::new()).await;
    let registry = ConfiguredCodecRegistry::from_config(&config.codecs_or_default());
    let choices = EncoderChoices::from_codecs(&registry.codecs());

    if !json {
        for (index, choice) in choices.iter().enumerate() {
            presenter.encoder_row(index, choice);
        }
        return ExitCode::from(EXIT_SUCCESS);
    }

    let rows: Vec<EncoderRow> = choices
        .iter()
        .enumerate()
        .map(|(index, choice)| {
            let extension = choice
                .selection()
                .codec_id()
                .and_then(|id| registry.codec(id))
                .map(|codec| codec.extension)
                .unwrap_or_else(|| DEFAULT_AUDIO_EXTENSION.to_string());
            EncoderRow {
                index,
                name: choice.label().to_string(),
                extension,
                configurable: choice.is_configurable(),
                default: choice.selection().is_default(),
            }
        })
        .collect();

    match serde_json::to_string_pretty(&rows) {
        Ok(output) => {
            presenter.output(&output);
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.error(&format!("Failed to encode encoder list: {}", e));
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Run a codec's configuration routine by name
pub async fn run_configure(name: &str) -> ExitCode {
    let mut presenter = Presenter::new();
    let config = load_config(&XdgConfigStore::new()).await;
    let registry = ConfiguredCodecRegistry::from_config(&config.codecs_or_default());

    let Some(codec) = registry.find_by_name(name).cloned() else {
        let choices = EncoderChoices::from_codecs(&registry.codecs());
        presenter.error(&unknown_encoder(name, &choices));
        return ExitCode::from(EXIT_ERROR);
    };

    if !codec.capabilities.has_config() {
        presenter.error(&format!("Encoder '{}' has no configuration", codec.name));
        return ExitCode::from(EXIT_ERROR);
    }

    presenter.start_spinner(&format!("Configuring {}...", codec.name));
    match registry.configure(codec.id).await {
        Ok(()) => {
            presenter.spinner_success(&format!("{} configured", codec.name));
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.spinner_fail(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Edit one track of a track sheet
pub async fn run_edit_track(
    sheet: PathBuf,
    number: u32,
    title: Option<String>,
    artist: Option<String>,
) -> ExitCode {
    let presenter = Presenter::new();
    match edit_track(&presenter, sheet, number, title, artist).await {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => {
            presenter.error(&e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

async fn edit_track(
    presenter: &Presenter,
    sheet: PathBuf,
    number: u32,
    title: Option<String>,
    artist: Option<String>,
) -> Result<(), String> {
    let config = load_config(&XdgConfigStore::new()).await;
    let localizer = create_localizer(config.language_file.as_deref()).await;
    let store = TomlTrackSheetStore::new(sheet);

    let mut track_sheet = store.load().await.map_err(|e| e.to_string())?;
    let entry = track_sheet
        .track_mut(number)
        .ok_or_else(|| TrackSheetError::TrackNotFound(number).to_string())?;

    let changed = title.is_some() || artist.is_some();
    let labels = {
        let mut use_case = EditTrackUseCase::new(localizer, &mut entry.metadata);
        let labels = use_case.labels().clone();

        if changed {
            if let Some(title) = &title {
                use_case.set_title(title).map_err(|e| e.to_string())?;
            }
            if let Some(artist) = &artist {
                use_case.set_artist(artist).map_err(|e| e.to_string())?;
            }
            use_case.confirm().map_err(|e| e.to_string())?;
        } else {
            use_case.cancel().map_err(|e| e.to_string())?;
        }
        labels
    };

    if changed {
        store.save(&track_sheet).await.map_err(|e| e.to_string())?;
    }

    let entry = track_sheet
        .track(number)
        .ok_or_else(|| TrackSheetError::TrackNotFound(number).to_string())?;
    presenter.heading(&format!("{} #{}", labels.title, number));
    presenter.key_value(&labels.track_title, &entry.metadata.title);
    presenter.key_value(&labels.track_artist, &entry.metadata.artist);
    if changed {
        presenter.success(&format!("Saved {}", store.path().display()));
    }

    Ok(())
}

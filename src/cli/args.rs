//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// SaveTracks - choose where and how CD audio tracks are saved
#[derive(Parser, Debug)]
#[command(name = "save-tracks")]
#[command(version)]
#[command(about = "Choose a target folder and audio encoder for saving CD audio tracks")]
#[command(long_about = None)]
pub struct Cli {
    /// Runs `save` with default options when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Options of the save workflow
#[derive(Args, Debug, Clone, Default)]
pub struct SaveArgs {
    /// Target folder (drive-qualified, e.g. C:\Music); defaults to the last one used
    #[arg(short = 't', long, value_name = "FOLDER", conflicts_with = "browse")]
    pub target: Option<String>,

    /// Encoder to use (see `save-tracks encoders`); defaults to Wave
    #[arg(short = 'e', long, value_name = "NAME")]
    pub encoder: Option<String>,

    /// Open the selected encoder's configuration before saving
    #[arg(short = 'c', long)]
    pub configure: bool,

    /// Ask for the target folder interactively
    #[arg(short = 'b', long)]
    pub browse: bool,

    /// Answer yes to every question (e.g. creating a missing folder)
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Choose the target folder and encoder, then remember the folder
    Save(SaveArgs),
    /// List the available encoders
    Encoders {
        /// Print the list as JSON
        #[arg(long)]
        json: bool,
    },
    /// Open an encoder's configuration
    Configure {
        /// Encoder name
        name: String,
    },
    /// Edit the title and artist of a track in a track sheet
    EditTrack {
        /// Track sheet file (TOML)
        sheet: PathBuf,
        /// Track number
        number: u32,
        /// New track title
        #[arg(long)]
        title: Option<String>,
        /// New track artist
        #[arg(long)]
        artist: Option<String>,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Valid fixed config keys
pub const VALID_CONFIG_KEYS: &[&str] = &["target", "language_file"];

/// Prefix of per-drive root keys (e.g. `drives.C`)
pub const DRIVE_KEY_PREFIX: &str = "drives.";

/// Drive letter named by a `drives.<LETTER>` key
pub fn drive_key_letter(key: &str) -> Option<char> {
    let letter = key.strip_prefix(DRIVE_KEY_PREFIX)?;
    let mut chars = letter.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => Some(c.to_ascii_uppercase()),
        _ => None,
    }
}

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key) || drive_key_letter(key).is_some()
}

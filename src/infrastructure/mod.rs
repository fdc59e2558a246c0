//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the filesystem, the terminal and external codec tools.

pub mod codec;
pub mod config;
pub mod directory;
pub mod localization;
pub mod prompt;
pub mod track_sheet;

// Re-export adapters
pub use codec::ConfiguredCodecRegistry;
pub use config::XdgConfigStore;
pub use directory::FsDirectory;
pub use localization::{create_localizer, LanguageFileLocalizer, NoLocalization};
pub use prompt::{create_prompter, AssumeYesPrompter, TerminalPrompter};
pub use track_sheet::TomlTrackSheetStore;

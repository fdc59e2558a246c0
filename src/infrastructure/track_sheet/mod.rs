//! Track sheet infrastructure module

mod toml_sheet;

pub use toml_sheet::TomlTrackSheetStore;

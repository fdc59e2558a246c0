//! SaveTracks - choose where and how CD audio tracks are saved
//!
//! This crate provides the save-tracks workflow: pick a drive-qualified target
//! folder (creating it on request), pick an audio encoder from the installed
//! codecs, and remember the folder for the next run. It also provides the
//! companion track metadata editor.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Core business logic, value objects, entities, and errors
//! - **Application**: Use cases and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (filesystem, terminal prompts, codec tools, etc.)
//! - **CLI**: Command-line interface, argument parsing, and output formatting

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;

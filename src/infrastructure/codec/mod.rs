//! Codec registry infrastructure module

mod configured;

pub use configured::ConfiguredCodecRegistry;

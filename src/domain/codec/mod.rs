//! Codec domain module

mod descriptor;
mod encoder_choice;

pub use descriptor::{CodecCapabilities, CodecDescriptor, CodecId, DEFAULT_AUDIO_EXTENSION};
pub use encoder_choice::{EncoderChoice, EncoderChoices, EncoderSelection, DEFAULT_ENCODER_LABEL};

//! Target folder domain module

mod target_path;

pub use target_path::{TargetPath, MAX_TARGET_LEN};

//! Directory infrastructure module

mod fs;

pub use fs::FsDirectory;

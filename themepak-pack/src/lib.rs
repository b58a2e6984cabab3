//! themepak Packing Library
//!
//! This library turns resource directories into theme zip archives, and
//! provides the flat `.bin` asset dump used for firmware-embedded assets.

pub mod archive;
pub mod dump;

pub use archive::pack_archive;
pub use dump::dump_assets;

use std::path::PathBuf;

/// Result type for themepak-pack operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for themepak-pack operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("themepak core error: {0}")]
    Core(#[from] themepak_core::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),
}

//! themepak Core Library
//!
//! This library provides the shared building blocks for the themepak tools:
//! raw pixel repacking, packed RGB color math, and the libconfig-style
//! config records embedded in theme archives.

pub mod color;
pub mod pixels;
pub mod record;

pub use pixels::PixelOrder;
pub use record::{Record, Value};

/// Result type for themepak-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for themepak-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

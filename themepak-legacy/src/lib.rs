//! themepak Legacy Translation Library
//!
//! This library converts old-format theme packages (an XML metadata file
//! plus a zip of named PNGs) into the current theme archive layout.

pub mod asset_map;
pub mod translator;
pub mod xml;

pub use translator::translate;

use std::path::PathBuf;

/// Result type for themepak-legacy operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for themepak-legacy operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("themepak pack error: {0}")]
    Pack(#[from] themepak_pack::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("XML document has no root element")]
    NoRootElement,

    #[error("Color element is missing its '{0}' channel")]
    MissingColorChannel(&'static str),

    #[error("Invalid color channel value: {0}")]
    InvalidColorValue(#[from] std::num::ParseIntError),

    #[error("Invalid input directory: {0}")]
    InvalidInput(PathBuf),
}

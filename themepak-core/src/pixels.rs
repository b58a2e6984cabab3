//! Raw pixel buffer repacking
//!
//! Theme assets are shipped as headerless 4-channel pixel dumps; the
//! consumer knows each asset's dimensions out-of-band, by file name.

use crate::Result;
use image::DynamicImage;

/// Channel order of an emitted pixel dump
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelOrder {
    /// Natural decode order, used by the flat asset dump
    Rgba,
    /// Target platform order, used by theme archives
    Bgra,
}

/// Serializes a decoded image to a raw 4-channel pixel dump.
///
/// The image is normalized to RGBA first, so sources without an alpha
/// channel come out fully opaque. The returned buffer is row-major,
/// `width * height * 4` bytes, with no header.
pub fn repack_image(image: &DynamicImage, order: PixelOrder) -> Vec<u8> {
    let mut data = image.to_rgba8().into_raw();

    if order == PixelOrder::Bgra {
        for pixel in data.chunks_exact_mut(4) {
            pixel.swap(0, 2);
        }
    }

    data
}

/// Decodes an image from memory and repacks it in the given order
pub fn repack_bytes(bytes: &[u8], order: PixelOrder) -> Result<Vec<u8>> {
    let image = image::load_from_memory(bytes)?;
    Ok(repack_image(&image, order))
}

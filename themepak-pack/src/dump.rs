//! Flat asset dumping
//!
//! Converts every file of a resource directory into a raw RGBA `.bin` dump,
//! one output file per input, with no archive around them. This is the form
//! linked straight into the firmware's romfs.

use crate::{Error, Result};
use std::fs;
use std::path::Path;
use themepak_core::{pixels, PixelOrder};

/// Dumps every file in `resources_dir` as `<stem>.bin` into `assets_dir`.
///
/// Nothing is skipped: every entry must decode as an image, and a file that
/// does not is a fatal error. `assets_dir` is created if missing.
pub fn dump_assets(resources_dir: &Path, assets_dir: &Path) -> Result<()> {
    if !resources_dir.is_dir() {
        return Err(Error::NotADirectory(resources_dir.to_path_buf()));
    }

    fs::create_dir_all(assets_dir)?;

    let mut entries: Vec<_> = fs::read_dir(resources_dir)?
        .collect::<std::io::Result<Vec<_>>>()?
        .into_iter()
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();
    entries.sort();

    for path in entries {
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        let data = pixels::repack_bytes(&fs::read(&path)?, PixelOrder::Rgba)?;
        fs::write(assets_dir.join(format!("{stem}.bin")), data)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, Rgba, RgbaImage};

    #[test]
    fn test_dump_writes_rgba_bins() {
        let dir = tempfile::tempdir().unwrap();
        let resources = dir.path().join("res");
        fs::create_dir(&resources).unwrap();

        let mut img = RgbaImage::new(2, 1);
        img.put_pixel(0, 0, Rgba([1, 2, 3, 4]));
        img.put_pixel(1, 0, Rgba([5, 6, 7, 8]));
        DynamicImage::ImageRgba8(img)
            .save(resources.join("star.png"))
            .unwrap();

        let assets = dir.path().join("assets");
        dump_assets(&resources, &assets).unwrap();

        // natural order, no reorder, no header
        let bytes = fs::read(assets.join("star.bin")).unwrap();
        assert_eq!(bytes, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_non_image_input_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let resources = dir.path().join("res");
        fs::create_dir(&resources).unwrap();
        fs::write(resources.join("notes.txt"), b"plain text").unwrap();

        let result = dump_assets(&resources, &dir.path().join("assets"));
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_resources_dir() {
        let dir = tempfile::tempdir().unwrap();
        let result = dump_assets(&dir.path().join("nope"), &dir.path().join("assets"));
        assert!(matches!(result, Err(Error::NotADirectory(_))));
    }
}

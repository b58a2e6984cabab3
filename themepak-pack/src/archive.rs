//! Theme archive packing
//!
//! Packs a resource directory into a flat, deflate-compressed zip archive.
//! PNG entries are converted to raw BGRA `.bin` dumps; everything else is
//! copied verbatim unless its extension is on the ignore list.

use crate::{Error, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use themepak_core::{pixels, PixelOrder};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Packs the immediate files of `source_dir` into a zip archive.
///
/// Entries are visited in file-name order, so repeated packs of the same
/// directory produce identical archives. Subdirectories are not descended
/// into. Each `.png` is repacked to a headerless BGRA dump named
/// `<stem>.bin`; files whose extension matches `ignore_exts` (leading dot
/// optional) are dropped; everything else is stored byte-for-byte under its
/// original name.
pub fn pack_archive(source_dir: &Path, archive_path: &Path, ignore_exts: &[String]) -> Result<()> {
    if !source_dir.is_dir() {
        return Err(Error::NotADirectory(source_dir.to_path_buf()));
    }

    if let Some(parent) = archive_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut entries: Vec<_> = fs::read_dir(source_dir)?
        .collect::<std::io::Result<Vec<_>>>()?
        .into_iter()
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();
    entries.sort();

    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    let mut writer = ZipWriter::new(File::create(archive_path)?);

    for path in entries {
        if ignore_exts.iter().any(|ext| has_extension(&path, ext)) {
            continue;
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        if !has_extension(&path, "png") {
            writer.start_file(name.as_str(), options)?;
            writer.write_all(&fs::read(&path)?)?;
        } else {
            let stem = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            let pixels = pixels::repack_bytes(&fs::read(&path)?, PixelOrder::Bgra)?;

            writer.start_file(format!("{stem}.bin"), options)?;
            writer.write_all(&pixels)?;
        }
    }

    writer.finish()?;

    Ok(())
}

/// Case-sensitive extension match; a leading dot on `ext` is accepted
fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e == ext.trim_start_matches('.'))
}

//! Legacy theme translation
//!
//! Translation runs as a linear pipeline: stage the icon, metadata record,
//! style record and remapped images into a private temporary directory,
//! then hand that directory to the archive packer. Optional inputs that are
//! absent (`icon.png`, `meta.xml`, `theme.zip`, members inside it) are
//! skipped silently; anything present but undecodable aborts the run.

use crate::asset_map::LEGACY_ASSETS;
use crate::xml::{self, Element};
use crate::{Error, Result};
use image::imageops::FilterType;
use std::fs::{self, File};
use std::io::{self, Read, Seek};
use std::path::Path;
use themepak_core::{color, Record};
use zip::result::ZipError;
use zip::ZipArchive;

const ICON_SIZE: u32 = 256;

const DEFAULT_AUTHOR: &str = "Unspecified Author";
const DEFAULT_VERSION: &str = "1.0";

/// Translates an old-format theme directory into a current theme archive
pub fn translate(theme_dir: &Path, archive_path: &Path) -> Result<()> {
    if !theme_dir.is_dir() {
        return Err(Error::InvalidInput(theme_dir.to_path_buf()));
    }

    let staging = tempfile::Builder::new()
        .prefix("themepak-legacy-")
        .tempdir()?;

    stage_icon(theme_dir, staging.path())?;
    stage_info(theme_dir, staging.path())?;
    stage_legacy_zip(theme_dir, staging.path())?;

    themepak_pack::pack_archive(staging.path(), archive_path, &[])?;

    staging.close()?;

    Ok(())
}

/// Reads a file, mapping "not found" to `None`
fn read_optional(path: &Path) -> Result<Option<Vec<u8>>> {
    match fs::read(path) {
        Ok(bytes) => Ok(Some(bytes)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Reads a zip member, mapping "no such member" to `None`
fn read_member<R: Read + Seek>(archive: &mut ZipArchive<R>, name: &str) -> Result<Option<Vec<u8>>> {
    let mut member = match archive.by_name(name) {
        Ok(member) => member,
        Err(ZipError::FileNotFound) => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    let mut bytes = Vec::new();
    member.read_to_end(&mut bytes)?;
    Ok(Some(bytes))
}

/// Stages `icon.png` as an opaque 256x256 `icon.jpg`
fn stage_icon(theme_dir: &Path, staging: &Path) -> Result<()> {
    let Some(bytes) = read_optional(&theme_dir.join("icon.png"))? else {
        return Ok(());
    };

    let icon = image::load_from_memory(&bytes)?
        .resize_exact(ICON_SIZE, ICON_SIZE, FilterType::CatmullRom)
        .to_rgb8();
    icon.save(staging.join("icon.jpg"))?;

    Ok(())
}

/// Stages `info.cfg` from `meta.xml`, defaulting absent fields
fn stage_info(theme_dir: &Path, staging: &Path) -> Result<()> {
    let Some(bytes) = read_optional(&theme_dir.join("meta.xml"))? else {
        return Ok(());
    };

    let meta = xml::parse(&String::from_utf8_lossy(&bytes))?;

    let name = match meta.child("name") {
        Some(elem) => elem.text.clone(),
        None => theme_dir
            .file_name()
            .unwrap_or(theme_dir.as_os_str())
            .to_string_lossy()
            .into_owned(),
    };
    let author = match meta.child("coder") {
        Some(elem) => elem.text.clone(),
        None => DEFAULT_AUTHOR.to_string(),
    };
    let version = match meta.child("version") {
        Some(elem) => elem.text.clone(),
        None => DEFAULT_VERSION.to_string(),
    };

    let mut info = Record::new("info");
    info.set_str("name", name);
    info.set_str("author", author);
    info.set_str("version", version);

    fs::write(staging.join("info.cfg"), info.render())?;

    Ok(())
}

/// Stages `styles.cfg` and the remapped images from `theme.zip`
fn stage_legacy_zip(theme_dir: &Path, staging: &Path) -> Result<()> {
    let zip_file = match File::open(theme_dir.join("theme.zip")) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(e.into()),
    };
    let mut archive = ZipArchive::new(zip_file)?;

    stage_styles(&mut archive, staging)?;

    for asset in LEGACY_ASSETS {
        let Some(bytes) = read_member(&mut archive, asset.old_name)? else {
            continue;
        };

        let (width, height) = asset.size;
        let image =
            image::load_from_memory(&bytes)?.resize_exact(width, height, FilterType::CatmullRom);
        image.save(staging.join(asset.new_name))?;
    }

    Ok(())
}

/// Stages `styles.cfg` from the zip's `theme.xml`, if it has one.
///
/// Whatever subset of style keys can be derived is written, down to an
/// empty record; only a missing `theme.xml` suppresses the file entirely.
fn stage_styles<R: Read + Seek>(archive: &mut ZipArchive<R>, staging: &Path) -> Result<()> {
    let Some(bytes) = read_member(archive, "theme.xml")? else {
        return Ok(());
    };

    let theme = xml::parse(&String::from_utf8_lossy(&bytes))?;
    let mut styles = Record::new("styles");

    if let Some(font_color) = theme.child("font_color") {
        styles.set_int("normal_text_color", xml::color_from_elem(font_color)? as i64);
    }

    if let Some(gradient) = theme.child("progress_gradient") {
        if let Some(main) = corner_average(gradient, ["upper_left", "upper_right"])? {
            styles.set_int("remote_bar_main_color", main as i64);
        }
        if let Some(grad) = corner_average(gradient, ["lower_left", "lower_right"])? {
            styles.set_int("remote_bar_grad_color", grad as i64);
        }
    }

    fs::write(staging.join("styles.cfg"), styles.render())?;

    Ok(())
}

/// Mean of the packed colors of whichever named corners exist
fn corner_average(gradient: &Element, corners: [&str; 2]) -> Result<Option<u32>> {
    let mut colors = Vec::new();
    for corner in corners {
        if let Some(elem) = gradient.child(corner) {
            colors.push(xml::color_from_elem(elem)?);
        }
    }
    Ok(color::average_packed(&colors))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, Rgba, RgbaImage};
    use std::io::Write;
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let mut img = RgbaImage::new(width, height);
        img.put_pixel(0, 0, Rgba([200, 100, 50, 255]));
        let mut bytes = Vec::new();
        DynamicImage::ImageRgba8(img)
            .write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();
        bytes
    }

    fn write_legacy_zip(path: &Path, members: &[(&str, &[u8])]) {
        let mut writer = ZipWriter::new(File::create(path).unwrap());
        for (name, bytes) in members {
            writer
                .start_file(*name, SimpleFileOptions::default())
                .unwrap();
            writer.write_all(bytes).unwrap();
        }
        writer.finish().unwrap();
    }

    fn entry_names(path: &Path) -> Vec<String> {
        let archive = ZipArchive::new(File::open(path).unwrap()).unwrap();
        let mut names: Vec<_> = archive.file_names().map(String::from).collect();
        names.sort();
        names
    }

    fn entry_text(path: &Path, name: &str) -> String {
        let mut archive = ZipArchive::new(File::open(path).unwrap()).unwrap();
        let mut text = String::new();
        archive
            .by_name(name)
            .unwrap()
            .read_to_string(&mut text)
            .unwrap();
        text
    }

    #[test]
    fn test_missing_input_dir() {
        let dir = tempfile::tempdir().unwrap();
        let result = translate(&dir.path().join("nope"), &dir.path().join("out.zip"));
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_icon_only_theme() {
        let dir = tempfile::tempdir().unwrap();
        let theme_dir = dir.path().join("old");
        fs::create_dir(&theme_dir).unwrap();
        fs::write(theme_dir.join("icon.png"), png_bytes(16, 16)).unwrap();

        let out = dir.path().join("out.zip");
        translate(&theme_dir, &out).unwrap();

        // no meta.xml, no theme.zip: the icon is the only entry
        assert_eq!(entry_names(&out), ["icon.jpg"]);
    }

    #[test]
    fn test_empty_theme_dir_yields_empty_archive() {
        let dir = tempfile::tempdir().unwrap();
        let theme_dir = dir.path().join("old");
        fs::create_dir(&theme_dir).unwrap();

        let out = dir.path().join("out.zip");
        translate(&theme_dir, &out).unwrap();

        assert!(entry_names(&out).is_empty());
    }

    #[test]
    fn test_info_defaults_fill_missing_fields() {
        let dir = tempfile::tempdir().unwrap();
        let theme_dir = dir.path().join("startheme");
        fs::create_dir(&theme_dir).unwrap();
        fs::write(theme_dir.join("meta.xml"), "<meta></meta>").unwrap();

        let out = dir.path().join("out.zip");
        translate(&theme_dir, &out).unwrap();

        let info = entry_text(&out, "info.cfg");
        assert!(info.contains("name = \"startheme\";"));
        assert!(info.contains("author = \"Unspecified Author\";"));
        assert!(info.contains("version = \"1.0\";"));
    }

    #[test]
    fn test_info_fields_from_meta_xml() {
        let dir = tempfile::tempdir().unwrap();
        let theme_dir = dir.path().join("old");
        fs::create_dir(&theme_dir).unwrap();
        fs::write(
            theme_dir.join("meta.xml"),
            "<meta><name>Starlight</name><coder>jane</coder><version>2.3</version></meta>",
        )
        .unwrap();

        let out = dir.path().join("out.zip");
        translate(&theme_dir, &out).unwrap();

        assert_eq!(
            entry_text(&out, "info.cfg"),
            "info:\n{\n    name = \"Starlight\";\n    author = \"jane\";\n    version = \"2.3\";\n};\n"
        );
    }

    #[test]
    fn test_styles_and_assets_from_legacy_zip() {
        let dir = tempfile::tempdir().unwrap();
        let theme_dir = dir.path().join("old");
        fs::create_dir(&theme_dir).unwrap();

        let theme_xml = "<theme>\
            <font_color><red>255</red><green>0</green><blue>128</blue></font_color>\
            <progress_gradient>\
                <upper_left><red>0</red><green>0</green><blue>0</blue></upper_left>\
                <upper_right><red>0</red><green>0</green><blue>2</blue></upper_right>\
                <lower_left><red>0</red><green>0</green><blue>6</blue></lower_left>\
            </progress_gradient>\
        </theme>";
        let cursor = png_bytes(10, 10);
        write_legacy_zip(
            &theme_dir.join("theme.zip"),
            &[
                ("theme.xml", theme_xml.as_bytes()),
                ("cursor_pic.png", &cursor),
                ("unrelated.png", &cursor),
            ],
        );

        let out = dir.path().join("out.zip");
        translate(&theme_dir, &out).unwrap();

        // cursor_pic.png is remapped and repacked; unrelated.png is ignored
        assert_eq!(entry_names(&out), ["cursor.bin", "styles.cfg"]);

        let mut archive = ZipArchive::new(File::open(&out).unwrap()).unwrap();
        let mut cursor_bin = Vec::new();
        archive
            .by_name("cursor.bin")
            .unwrap()
            .read_to_end(&mut cursor_bin)
            .unwrap();
        assert_eq!(cursor_bin.len(), 96 * 96 * 4);

        let styles = entry_text(&out, "styles.cfg");
        assert!(styles.contains("normal_text_color = 16711808;"));
        // mean of 0x000000 and 0x000002, truncated
        assert!(styles.contains("remote_bar_main_color = 1;"));
        // single lower corner averages to itself
        assert!(styles.contains("remote_bar_grad_color = 6;"));
    }

    #[test]
    fn test_zip_without_theme_xml_writes_no_styles() {
        let dir = tempfile::tempdir().unwrap();
        let theme_dir = dir.path().join("old");
        fs::create_dir(&theme_dir).unwrap();

        let logo = png_bytes(8, 8);
        write_legacy_zip(&theme_dir.join("theme.zip"), &[("logo.png", &logo)]);

        let out = dir.path().join("out.zip");
        translate(&theme_dir, &out).unwrap();

        assert_eq!(entry_names(&out), ["logo.bin"]);
    }

    #[test]
    fn test_theme_xml_without_styles_writes_empty_record() {
        let dir = tempfile::tempdir().unwrap();
        let theme_dir = dir.path().join("old");
        fs::create_dir(&theme_dir).unwrap();

        write_legacy_zip(
            &theme_dir.join("theme.zip"),
            &[("theme.xml", b"<theme></theme>".as_slice())],
        );

        let out = dir.path().join("out.zip");
        translate(&theme_dir, &out).unwrap();

        assert_eq!(entry_names(&out), ["styles.cfg"]);
        assert_eq!(entry_text(&out, "styles.cfg"), "styles:\n{\n};\n");
    }

    #[test]
    fn test_icon_is_resized_and_flattened() {
        let dir = tempfile::tempdir().unwrap();
        let theme_dir = dir.path().join("old");
        fs::create_dir(&theme_dir).unwrap();
        fs::write(theme_dir.join("icon.png"), png_bytes(31, 7)).unwrap();

        let out = dir.path().join("out.zip");
        translate(&theme_dir, &out).unwrap();

        let mut archive = ZipArchive::new(File::open(&out).unwrap()).unwrap();
        let mut jpg = Vec::new();
        archive
            .by_name("icon.jpg")
            .unwrap()
            .read_to_end(&mut jpg)
            .unwrap();

        let icon = image::load_from_memory(&jpg).unwrap();
        assert_eq!((icon.width(), icon.height()), (256, 256));
    }
}

//! themepak CLI Tool
//!
//! Command-line interface for dumping raw assets, packing theme archives,
//! and converting legacy theme packages.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "themepak")]
#[command(about = "themepak - theme resource packing and conversion")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Dump a resource directory as flat raw RGBA .bin assets
    PackAssets {
        /// Directory of source images
        resources_dir: PathBuf,

        /// Output directory for .bin dumps
        assets_dir: PathBuf,
    },

    /// Pack a resource directory into a theme zip archive
    PackTheme {
        /// Directory of source resources
        resources_dir: PathBuf,

        /// Output theme archive path
        output: PathBuf,

        /// File extensions to leave out of the archive
        ignore_ext: Vec<String>,
    },

    /// Convert a legacy theme directory into a theme zip archive
    ConvertLegacy {
        /// Legacy theme directory (icon.png, meta.xml, theme.zip)
        theme_dir: PathBuf,

        /// Output theme archive path
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::PackAssets {
            resources_dir,
            assets_dir,
        } => pack_assets(resources_dir, assets_dir)?,

        Commands::PackTheme {
            resources_dir,
            output,
            ignore_ext,
        } => pack_theme(resources_dir, output, ignore_ext)?,

        Commands::ConvertLegacy { theme_dir, output } => convert_legacy(theme_dir, output)?,
    }

    Ok(())
}

fn pack_assets(resources_dir: PathBuf, assets_dir: PathBuf) -> Result<()> {
    println!("Dumping assets: {}", resources_dir.display());

    themepak_pack::dump_assets(&resources_dir, &assets_dir)
        .context("Failed to dump assets")?;

    println!("Assets written to {}", assets_dir.display());

    Ok(())
}

fn pack_theme(resources_dir: PathBuf, output: PathBuf, ignore_ext: Vec<String>) -> Result<()> {
    println!("Packing theme: {}", resources_dir.display());
    if !ignore_ext.is_empty() {
        println!("Ignoring extensions: {}", ignore_ext.join(", "));
    }

    themepak_pack::pack_archive(&resources_dir, &output, &ignore_ext)
        .context("Failed to pack theme archive")?;

    println!("Theme archive written to {}", output.display());

    Ok(())
}

fn convert_legacy(theme_dir: PathBuf, output: PathBuf) -> Result<()> {
    println!("Converting legacy theme: {}", theme_dir.display());

    themepak_legacy::translate(&theme_dir, &output)
        .context("Failed to convert legacy theme")?;

    println!("Theme archive written to {}", output.display());

    Ok(())
}

// Declare modules
pub mod cli;
pub mod config;
pub mod formatter;
pub mod models;
pub mod probe;
pub mod scanner;
pub mod writer;

use anyhow::{Context, Result};
use clap::Parser;
use std::env;
use std::path::Path;

use self::cli::Cli;
use self::config::resolve_config;
use self::formatter::PlaylistGenerator;
use self::probe::{DurationProbe, FfprobeDurationProbe};
use self::scanner::{select_directories, Scanner};

/// Initializes components and orchestrates data flow.
pub fn run() -> Result<()> {
    // 1. Parse Args
    let args = Cli::parse();

    // 2. Resolve Configuration
    let config = resolve_config(&args)?;

    // 3. Build the Directory Set
    let current_dir = env::current_dir().context("Failed to get current directory")?;
    let directories = select_directories(&current_dir, &config)?;

    if directories.is_empty() {
        log::warn!(
            "No digit-prefixed subdirectories under {}",
            current_dir.display()
        );
        return Ok(());
    }

    // 4. Process each directory independently: one directory failing must
    // not abort the rest of the set.
    let probe = FfprobeDurationProbe::new();
    let mut failures = 0;

    for dir in &directories {
        if let Err(err) = process_directory(dir, &probe) {
            failures += 1;
            log::error!("Skipping {}: {:#}", dir.display(), err);
        }
    }

    if failures > 0 {
        log::warn!("{} of {} directories failed", failures, directories.len());
    }

    Ok(())
}

/// Discovery → build → write for one directory. A directory with no
/// qualifying files produces no playlist and no error.
fn process_directory(dir: &Path, probe: &dyn DurationProbe) -> Result<()> {
    let scanner = Scanner::new(dir.to_path_buf())?;
    let files = scanner.scan()?;

    if files.is_empty() {
        log::info!("No video files in {}", dir.display());
        return Ok(());
    }

    let items = PlaylistGenerator::build_items(&files, probe);
    let document = PlaylistGenerator::generate(&items);

    writer::write_playlist(dir, &document)?;

    log::info!(
        "Wrote {} with {} tracks in {}",
        writer::PLAYLIST_FILE_NAME,
        items.len(),
        dir.display()
    );

    Ok(())
}

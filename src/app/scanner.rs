use crate::app::models::RuntimeConfig;
use anyhow::{bail, Context, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use std::fs;
use std::path::{Path, PathBuf};

/// Recognized video files. Literal, case-sensitive suffix match: `*.MP4`
/// does not qualify.
const VIDEO_PATTERNS: &[&str] = &["*.mp4", "*.mkv"];

/// Builds the ordered set of directories to process.
///
/// Non-subdirectory mode yields the current directory alone. Subdirectory
/// mode yields every immediate child directory whose name starts with an
/// ASCII digit ("9abc" qualifies, "abc9" does not).
pub fn select_directories(current_dir: &Path, config: &RuntimeConfig) -> Result<Vec<PathBuf>> {
    if !config.subdirs {
        return Ok(vec![current_dir.to_path_buf()]);
    }

    let entries = fs::read_dir(current_dir)
        .context(format!("Failed to list {}", current_dir.display()))?;

    let mut dirs = Vec::new();
    for entry in entries {
        let entry = entry.context(format!("Failed to read entry in {}", current_dir.display()))?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            if name.starts_with(|c: char| c.is_ascii_digit()) {
                dirs.push(path);
            }
        }
    }

    // Platform enumeration order is unstable; sort for deterministic runs.
    dirs.sort();
    Ok(dirs)
}

pub struct Scanner {
    root: PathBuf,
    video_set: GlobSet,
}

impl Scanner {
    pub fn new(root: PathBuf) -> Result<Self> {
        Ok(Self {
            root,
            video_set: build_globset(VIDEO_PATTERNS)?,
        })
    }

    /// Recursively collects every video file under the root, sorted by path.
    /// An empty directory is not an error; a missing or unreadable root is.
    pub fn scan(&self) -> Result<Vec<PathBuf>> {
        if !self.root.is_dir() {
            bail!("Not a readable directory: {}", self.root.display());
        }

        // Plain walker: a video collection carries no gitignore semantics.
        let walker = WalkBuilder::new(&self.root).standard_filters(false).build();

        let mut files = Vec::new();
        for result in walker {
            match result {
                Ok(entry) => {
                    let path = entry.path();
                    if path.is_file() && self.is_video(path) {
                        files.push(path.to_path_buf());
                    }
                }
                Err(err) => log::warn!("Error walking entry: {}", err),
            }
        }

        files.sort();
        Ok(files)
    }

    fn is_video(&self, path: &Path) -> bool {
        path.file_name()
            .map_or(false, |name| self.video_set.is_match(name))
    }
}

fn build_globset(patterns: &[&str]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pat in patterns {
        builder.add(Glob::new(pat).context(format!("Invalid glob pattern: {}", pat))?);
    }
    Ok(builder.build()?)
}

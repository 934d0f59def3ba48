use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

pub const PLAYLIST_FILE_NAME: &str = "_video.xspf";

const TMP_FILE_NAME: &str = ".video.xspf.tmp";

/// Writes the playlist into `dir`, replacing any existing `_video.xspf`.
///
/// The document is written line by line, each with a trailing newline, to a
/// temporary sibling which is then renamed over the destination. A reader
/// never observes a half-written playlist.
pub fn write_playlist(dir: &Path, document: &str) -> Result<()> {
    let dest = dir.join(PLAYLIST_FILE_NAME);
    let tmp = dir.join(TMP_FILE_NAME);

    let result = write_lines(&tmp, document).and_then(|_| {
        fs::rename(&tmp, &dest).context(format!("Failed to replace {}", dest.display()))
    });

    if result.is_err() {
        let _ = fs::remove_file(&tmp);
    }

    result
}

fn write_lines(path: &Path, document: &str) -> Result<()> {
    let file =
        File::create(path).context(format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    for line in document.lines() {
        writeln!(writer, "{}", line).context(format!("Failed to write {}", path.display()))?;
    }

    writer
        .flush()
        .context(format!("Failed to flush {}", path.display()))
}

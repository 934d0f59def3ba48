use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use std::process::Command;

/// Platform media-inspection capability: report a file's playback duration
/// in milliseconds, or `None` when it cannot be determined.
pub trait DurationProbe {
    fn probe(&self, path: &Path) -> Result<Option<f64>>;
}

/// Probes durations by shelling out to `ffprobe`.
#[derive(Debug, Default)]
pub struct FfprobeDurationProbe;

impl FfprobeDurationProbe {
    pub fn new() -> Self {
        Self
    }
}

impl DurationProbe for FfprobeDurationProbe {
    fn probe(&self, path: &Path) -> Result<Option<f64>> {
        let output = Command::new("ffprobe")
            .args([
                "-v",
                "error",
                "-show_entries",
                "format=duration",
                "-of",
                "default=noprint_wrappers=1:nokey=1",
            ])
            .arg(path)
            .output()
            .context("Failed to run ffprobe")?;

        if !output.status.success() {
            return Ok(None);
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let seconds = stdout.trim().parse::<f64>().ok();

        Ok(seconds.map(|s| s * 1000.0))
    }
}

/// Duration for one file. Zero-length files never reach the probe, and a
/// probe failure degrades to zero so one bad file cannot sink the directory.
pub fn resolve_duration(probe: &dyn DurationProbe, path: &Path) -> f64 {
    match fs::metadata(path) {
        Ok(meta) if meta.len() == 0 => return 0.0,
        Ok(_) => {}
        Err(err) => {
            log::warn!("Could not stat {}: {}", path.display(), err);
            return 0.0;
        }
    }

    match probe.probe(path) {
        Ok(Some(millis)) if millis >= 0.0 => millis,
        Ok(_) => 0.0,
        Err(err) => {
            log::warn!("Duration probe failed for {}: {}", path.display(), err);
            0.0
        }
    }
}

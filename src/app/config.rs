use crate::app::cli::Cli;
use crate::app::models::RuntimeConfig;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;

#[derive(Deserialize, Debug, Default)]
struct ConfigFile {
    /// Default mode when the program is invoked with no arguments.
    subdirs: Option<bool>,
}

fn load_config_file() -> Result<ConfigFile> {
    let home = match dirs::home_dir() {
        Some(home) => home,
        None => return Ok(ConfigFile::default()),
    };
    let config_path = home.join(".config").join("vidlist").join("config.toml");

    if !config_path.exists() {
        return Ok(ConfigFile::default());
    }

    let content = fs::read_to_string(&config_path)
        .context(format!("Failed to read config at {:?}", config_path))?;

    toml::from_str(&content).context("Failed to parse config.toml")
}

/// Argument rule: exactly one argument whose lowercase form contains "s"
/// selects subdirectory mode; any other argument list selects the default.
/// Zero arguments defer to the config file. Malformed input never fails.
fn subdirs_from_args(args: &[String]) -> Option<bool> {
    match args {
        [] => None,
        [only] => Some(only.to_lowercase().contains('s')),
        _ => Some(false),
    }
}

pub fn resolve_config(cli: &Cli) -> Result<RuntimeConfig> {
    let file = load_config_file()?;

    let subdirs = subdirs_from_args(&cli.args).unwrap_or_else(|| file.subdirs.unwrap_or(false));

    Ok(RuntimeConfig { subdirs })
}

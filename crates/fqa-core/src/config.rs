use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::placeholder::DEFAULT_PLACEHOLDER_COUNT;

/// Default image asset directory, relative to the working directory.
pub const DEFAULT_ASSETS_DIR: &str = "assets/images";

/// Timeouts applied to every GET (optional `[fetch]` section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Seconds allowed for establishing the connection.
    pub connect_timeout_secs: u64,
    /// Seconds allowed for the whole transfer, including the body.
    pub timeout_secs: u64,
}

impl FetchConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 15,
            timeout_secs: 60,
        }
    }
}

/// Global configuration loaded from `~/.config/fqa/config.toml`.
///
/// Every field is optional in the file; missing ones take the defaults below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FqaConfig {
    /// Directory receiving placeholders; fetched images go to its `companion/` child.
    pub assets_dir: PathBuf,
    /// Number of placeholder files to write.
    pub placeholder_count: usize,
    pub fetch: FetchConfig,
}

impl Default for FqaConfig {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
            placeholder_count: DEFAULT_PLACEHOLDER_COUNT,
            fetch: FetchConfig::default(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs =
        xdg::BaseDirectories::with_prefix("fqa").context("locate XDG config dir for fqa")?;
    xdg_dirs
        .place_config_file("config.toml")
        .with_context(|| {
            format!(
                "create config dir {}",
                xdg_dirs.get_config_home().display()
            )
        })
}

/// Load configuration from the XDG config dir, creating a default file if none exists.
///
/// An unusable config dir is not fatal: the defaults are used instead.
pub fn load_or_init() -> Result<FqaConfig> {
    load_or_default(config_path())
}

/// Load from `path` if it resolved, else fall back to the defaults.
pub fn load_or_default(path: Result<PathBuf>) -> Result<FqaConfig> {
    match path {
        Ok(path) => load_or_init_at(&path),
        Err(err) => {
            tracing::warn!(error = %format!("{:#}", err), "no config dir, using defaults");
            Ok(FqaConfig::default())
        }
    }
}

/// Like [`load_or_init`] but with an explicit path.
///
/// Failing to write the default file only logs a warning; a file that
/// exists but does not parse is an error.
pub fn load_or_init_at(path: &Path) -> Result<FqaConfig> {
    if !path.exists() {
        let default_cfg = FqaConfig::default();
        match write_default(path, &default_cfg) {
            Ok(()) => tracing::info!(path = %path.display(), "created default config"),
            Err(err) => tracing::warn!(
                path = %path.display(),
                error = %format!("{:#}", err),
                "could not write default config, using defaults"
            ),
        }
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: FqaConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}

fn write_default(path: &Path, cfg: &FqaConfig) -> Result<()> {
    let toml = toml::to_string_pretty(cfg)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create {}", parent.display()))?;
    }
    fs::write(path, toml).with_context(|| format!("write {}", path.display()))
}

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::stats::{RECENT_COUNT, TREND_MONTHS};

/// Overrides the data directory (storage file and log).
pub(crate) const DATA_DIR_ENV: &str = "FINBOARD_DATA_DIR";
/// Log filter directive, same syntax as `RUST_LOG`.
pub(crate) const LOG_ENV: &str = "FINBOARD_LOG";

const CONFIG_FILE: &str = "config.toml";
/// More rows than this never fit on the overview.
const MAX_RECENT_COUNT: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub(crate) struct Config {
    pub(crate) data_dir: Option<PathBuf>,
    pub(crate) log_filter: String,
    pub(crate) recent_count: usize,
    pub(crate) trend_months: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            log_filter: "info".into(),
            recent_count: RECENT_COUNT,
            trend_months: TREND_MONTHS,
        }
    }
}

impl Config {
    /// Load `config.toml` from the platform config directory, or defaults if
    /// there is none.
    pub(crate) fn load() -> Result<Self> {
        match project_dirs() {
            Some(dirs) => Self::load_from(&dirs.config_dir().join(CONFIG_FILE)),
            None => Ok(Self::default()),
        }
    }

    pub(crate) fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub(crate) fn parse(contents: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(contents)?;
        // Zero would hide the trend and recent list entirely.
        config.trend_months = config.trend_months.max(1);
        config.recent_count = config.recent_count.clamp(1, MAX_RECENT_COUNT);
        Ok(config)
    }

    /// `FINBOARD_DATA_DIR`, then `data_dir` from the file, then the platform
    /// data directory. The directory is created if missing.
    pub(crate) fn resolve_data_dir(&self) -> Result<PathBuf> {
        let dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(dir) => PathBuf::from(dir),
            None => match &self.data_dir {
                Some(dir) => dir.clone(),
                None => project_dirs()
                    .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?
                    .data_dir()
                    .to_path_buf(),
            },
        };
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create data directory: {}", dir.display()))?;
        Ok(dir)
    }
}

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("com", "finboard", "Finboard")
}

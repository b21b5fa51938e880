use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::error::CliError;

pub const DEFAULT_DATASET: &str = "latest_movies.json";

/// Config file picked up from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "costar.toml";

pub const DEFAULT_SEPARATOR: &str = " -> ";

/// Upper bound for `max_length`. Enumeration cost grows with every layer.
pub const MAX_LENGTH_LIMIT: usize = 64;

/// Optional settings read from a TOML file.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileSettings {
    pub dataset: Option<PathBuf>,
    pub max_length: Option<usize>,
    pub separator: Option<String>,
}

/// Values given on the command line or through `COSTAR_*` environment
/// variables. These win over the config file.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub dataset: Option<PathBuf>,
    pub max_length: Option<usize>,
    pub separator: Option<String>,
}

/// Resolved, validated settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Path of the JSON dataset, or `-` for stdin.
    pub dataset: PathBuf,
    /// Edge cap for relationship enumeration.
    pub max_length: usize,
    /// Joins vertices when a path is rendered as text.
    pub separator: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dataset: PathBuf::from(DEFAULT_DATASET),
            max_length: costar_core::DEFAULT_MAX_LENGTH,
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

impl Settings {
    /// Resolve settings: overrides > config file > defaults.
    ///
    /// An explicit `config` path must exist. Without one, `costar.toml` in
    /// the working directory is used if present.
    pub fn load(overrides: &Overrides, config: Option<&Path>) -> Result<Self> {
        let file = match config {
            Some(path) => Some(read_file_settings(path)?),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.is_file() {
                    Some(read_file_settings(fallback)?)
                } else {
                    None
                }
            }
        };

        let settings = Self::merge(overrides, file.unwrap_or_default());
        settings.validate()?;
        log::debug!("resolved settings: {:?}", settings);
        Ok(settings)
    }

    fn merge(overrides: &Overrides, file: FileSettings) -> Self {
        let defaults = Self::default();
        Self {
            dataset: overrides
                .dataset
                .clone()
                .or(file.dataset)
                .unwrap_or(defaults.dataset),
            max_length: overrides
                .max_length
                .or(file.max_length)
                .unwrap_or(defaults.max_length),
            separator: overrides
                .separator
                .clone()
                .or(file.separator)
                .unwrap_or(defaults.separator),
        }
    }

    pub fn validate(&self) -> Result<(), CliError> {
        if self.dataset.as_os_str().is_empty() {
            return Err(CliError::InvalidSetting {
                name: "dataset",
                value: String::new(),
                reason: "path must not be empty".into(),
            });
        }
        if self.max_length > MAX_LENGTH_LIMIT {
            return Err(CliError::InvalidSetting {
                name: "max_length",
                value: self.max_length.to_string(),
                reason: format!("must be at most {}", MAX_LENGTH_LIMIT),
            });
        }
        if self.separator.is_empty() {
            return Err(CliError::InvalidSetting {
                name: "separator",
                value: String::new(),
                reason: "must not be empty".into(),
            });
        }
        Ok(())
    }
}

fn read_file_settings(path: &Path) -> Result<FileSettings> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    let settings = toml::from_str(&text)
        .with_context(|| format!("failed to parse config file {}", path.display()))?;
    log::info!("loaded settings from {}", path.display());
    Ok(settings)
}

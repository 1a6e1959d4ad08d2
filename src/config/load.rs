use std::path::{Path, PathBuf};

use serde::de::Error as SerdeDeError;

use crate::app_dirs;
use crate::roster::{self, Roster};

use super::{AppSettings, CONFIG_FILE_NAME, ConfigError, map_app_dir_error};

/// Resolve the configuration file path, ensuring the parent directory exists.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    let dir = app_dirs::app_root_dir().map_err(map_app_dir_error)?;
    Ok(dir.join(CONFIG_FILE_NAME))
}

/// Load settings from disk, returning defaults if the file is missing.
pub fn load_or_default() -> Result<AppSettings, ConfigError> {
    let path = config_path()?;
    let settings = load_settings_from(&path)?;
    tracing::debug!("Settings resolved from {}", path.display());
    Ok(settings)
}

/// Build the roster named by the settings, falling back to the bundled one.
pub fn load_roster(settings: &AppSettings) -> Result<Roster, ConfigError> {
    match settings.roster_path.as_deref() {
        Some(path) => Ok(roster::load_from_path(path)?),
        None => Ok(Roster::builtin()),
    }
}

pub(super) fn load_settings_from(path: &Path) -> Result<AppSettings, ConfigError> {
    if !path.exists() {
        return Ok(AppSettings::default());
    }
    let bytes = std::fs::read(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8(bytes).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source: SerdeDeError::custom(source),
    })?;
    toml::from_str::<AppSettings>(&text)
        .map_err(|source| ConfigError::ParseToml {
            path: path.to_path_buf(),
            source,
        })
        .map(AppSettings::normalized)
}

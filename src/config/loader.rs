use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::{debug, info};

use super::types::Settings;
use crate::{BookshelfError, Result};

const CONFIG_FILE: &str = "config.yaml";
const LOG_FILE: &str = "bookshelf.log";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "bookshelf")
}

/// Platform default settings location, e.g. `~/.config/bookshelf/config.yaml`
pub fn default_config_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE))
}

/// Where the terminal browser writes its log
pub fn default_log_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_dir().join(LOG_FILE))
}

/// Log locations to try in order: the data dir, then the temp dir
pub fn log_path_candidates() -> Vec<PathBuf> {
    default_log_path()
        .into_iter()
        .chain(std::iter::once(std::env::temp_dir().join(LOG_FILE)))
        .collect()
}

/// Parse settings from YAML text
pub fn parse_settings(contents: &str) -> Result<Settings> {
    let settings: Settings = if contents.trim().is_empty() {
        Settings::default()
    } else {
        serde_yaml_ng::from_str(contents)?
    };
    settings.validate()?;
    Ok(settings)
}

/// Loads the YAML settings file
pub struct SettingsLoader {
    /// Path given explicitly; must exist
    explicit: Option<PathBuf>,
}

impl SettingsLoader {
    /// Loader for the platform default location
    pub fn new() -> Self {
        Self { explicit: None }
    }

    /// Loader for a user-supplied path
    pub fn with_path<P: AsRef<Path>>(path: P) -> Self {
        Self {
            explicit: Some(path.as_ref().to_path_buf()),
        }
    }

    /// Load settings. A missing default file yields defaults; a missing
    /// explicit file is an error.
    pub fn load(&self) -> Result<Settings> {
        let path = match &self.explicit {
            Some(path) => path.clone(),
            None => match default_config_path() {
                Some(path) if path.exists() => path,
                _ => {
                    debug!("No settings file found, using defaults");
                    return Ok(Settings::default());
                }
            },
        };

        let contents = std::fs::read_to_string(&path).map_err(|e| {
            BookshelfError::Config(format!(
                "Failed to read settings file {}: {}",
                path.display(),
                e
            ))
        })?;

        let settings = parse_settings(&contents).map_err(|e| {
            BookshelfError::Config(format!(
                "Failed to parse settings file {}: {}",
                path.display(),
                e
            ))
        })?;

        info!("Loaded settings from {}", path.display());
        Ok(settings)
    }
}

impl Default for SettingsLoader {
    fn default() -> Self {
        Self::new()
    }
}

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::browser::{ThemePreference, DEFAULT_PAGE_SIZE};
use crate::{BookshelfError, Result};

/// User settings for the browser
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Books revealed per page
    pub page_size: usize,

    /// Initial colour scheme
    pub theme: ThemePreference,

    /// Dataset file; the bundled sample is used when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            theme: ThemePreference::default(),
            dataset: None,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(BookshelfError::Config(
                "page_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Layer command-line values over the file values
    pub fn with_overrides(mut self, overrides: SettingsOverrides) -> Self {
        if let Some(page_size) = overrides.page_size {
            self.page_size = page_size;
        }
        if let Some(theme) = overrides.theme {
            self.theme = theme;
        }
        if overrides.dataset.is_some() {
            self.dataset = overrides.dataset;
        }
        self
    }
}

/// Values supplied on the command line
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub page_size: Option<usize>,
    pub theme: Option<ThemePreference>,
    pub dataset: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();
        assert_eq!(settings.page_size, 36);
        assert_eq!(settings.theme, ThemePreference::System);
        assert!(settings.dataset.is_none());
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_overrides_win() {
        let settings = Settings::default().with_overrides(SettingsOverrides {
            page_size: Some(12),
            theme: Some(ThemePreference::Night),
            dataset: None,
        });
        assert_eq!(settings.page_size, 12);
        assert_eq!(settings.theme, ThemePreference::Night);
    }

    #[test]
    fn test_zero_page_size_is_invalid() {
        let settings = Settings {
            page_size: 0,
            ..Default::default()
        };
        assert!(matches!(settings.validate(), Err(BookshelfError::Config(_))));
    }
}

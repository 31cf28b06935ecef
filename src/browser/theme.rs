use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::BookshelfError;

/// Name of the variable holding the foreground ("dark") colour
pub const COLOR_DARK_VAR: &str = "--color-dark";
/// Name of the variable holding the background ("light") colour
pub const COLOR_LIGHT_VAR: &str = "--color-light";

pub const DARK_RGB: Rgb = Rgb(10, 10, 20);
pub const LIGHT_RGB: Rgb = Rgb(255, 255, 255);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.0, self.1, self.2)
    }
}

/// The two fixed colour schemes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Dark text on a light background
    #[default]
    Day,
    /// Light text on a dark background
    Night,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Day => "day",
            Theme::Night => "night",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Day => Theme::Night,
            Theme::Night => Theme::Day,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = BookshelfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "day" => Ok(Theme::Day),
            "night" => Ok(Theme::Night),
            other => Err(BookshelfError::InvalidTheme(other.to_string())),
        }
    }
}

/// Colour-scheme preference reported by the environment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    /// Read the terminal's `COLORFGBG` hint; anything unreadable counts as light.
    pub fn detect() -> Self {
        std::env::var("COLORFGBG")
            .map(|value| Self::from_colorfgbg(&value))
            .unwrap_or_default()
    }

    /// Parse a `fg;bg` (or `fg;default;bg`) colour pair. Background indices
    /// 0-6 and 8 are the dark half of the 16-colour palette.
    pub fn from_colorfgbg(value: &str) -> Self {
        let background = value
            .rsplit(';')
            .next()
            .and_then(|bg| bg.trim().parse::<u8>().ok());

        match background {
            Some(bg) if bg < 7 || bg == 8 => ColorScheme::Dark,
            _ => ColorScheme::Light,
        }
    }

    pub fn preferred_theme(self) -> Theme {
        match self {
            ColorScheme::Light => Theme::Day,
            ColorScheme::Dark => Theme::Night,
        }
    }
}

/// Configured theme choice; `System` defers to the environment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Day,
    Night,
    #[default]
    System,
}

impl ThemePreference {
    pub fn color_scheme(self) -> ColorScheme {
        match self {
            ThemePreference::Day => ColorScheme::Light,
            ThemePreference::Night => ColorScheme::Dark,
            ThemePreference::System => ColorScheme::detect(),
        }
    }
}

/// The active colour variables, injected into the top-level render context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeState {
    theme: Theme,
    color_dark: Rgb,
    color_light: Rgb,
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::for_theme(Theme::Day)
    }
}

impl ThemeState {
    pub fn for_theme(theme: Theme) -> Self {
        let (color_dark, color_light) = match theme {
            Theme::Day => (DARK_RGB, LIGHT_RGB),
            Theme::Night => (LIGHT_RGB, DARK_RGB),
        };
        Self {
            theme,
            color_dark,
            color_light,
        }
    }

    pub fn apply(&mut self, theme: Theme) {
        *self = Self::for_theme(theme);
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn color_dark(&self) -> Rgb {
        self.color_dark
    }

    pub fn color_light(&self) -> Rgb {
        self.color_light
    }

    /// Variable name/value pairs, in the order they are written
    pub fn variables(&self) -> [(&'static str, Rgb); 2] {
        [
            (COLOR_DARK_VAR, self.color_dark),
            (COLOR_LIGHT_VAR, self.color_light),
        ]
    }
}

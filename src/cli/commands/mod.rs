pub mod browse;
pub mod list;
pub mod show;

use std::path::Path;

use tracing::debug;

use crate::browser::CatalogController;
use crate::catalog::loader;
use crate::config::{Settings, SettingsLoader, SettingsOverrides};
use crate::Result;

/// Message shown in place of the list when nothing matches
pub const EMPTY_MESSAGE: &str = "No results found. Your filters might be too narrow.";

/// Common trait for all command handlers
pub trait CommandHandler {
    /// Execute the command
    fn execute(&self) -> Result<()>;

    /// Get command name for logging
    fn name(&self) -> &'static str;
}

/// Read the settings file and layer the command-line values over it
pub fn load_settings(config: Option<&Path>, overrides: SettingsOverrides) -> Result<Settings> {
    let loader = match config {
        Some(path) => SettingsLoader::with_path(path),
        None => SettingsLoader::new(),
    };
    let settings = loader.load()?.with_overrides(overrides);
    settings.validate()?;
    debug!(?settings, "Effective settings");
    Ok(settings)
}

/// Load the configured dataset and bring up an initialized controller
pub fn open_controller(settings: &Settings) -> Result<CatalogController> {
    let catalog = loader::load_or_bundled(settings.dataset.as_deref())?;
    let mut controller = CatalogController::new(catalog, settings.page_size)?;
    controller.initialize(settings.theme.color_scheme());
    Ok(controller)
}

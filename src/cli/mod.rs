pub mod app;
pub mod commands;
pub mod logging;
#[cfg(feature = "tui")]
pub mod tui;

pub use app::{Cli, Commands, LogLevel, OutputFormat};

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::browser::ThemePreference;
use crate::config::SettingsOverrides;

/// bookshelf: browse a book catalog page by page
#[derive(Parser)]
#[command(name = "bookshelf")]
#[command(version)]
#[command(about = "Browse, filter and inspect a book catalog")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Settings file (defaults to the platform config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Dataset JSON file (defaults to the bundled sample)
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    /// Books revealed per page
    #[arg(long, global = true)]
    pub page_size: Option<usize>,

    /// Colour scheme
    #[arg(long, value_enum, global = true)]
    pub theme: Option<ThemePreference>,

    /// Set log level
    #[arg(long, value_enum, global = true)]
    pub log_level: Option<LogLevel>,
}

impl Cli {
    pub fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            page_size: self.page_size,
            theme: self.theme,
            dataset: self.data.clone(),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the rendered list for a set of filters
    List {
        /// Genre id, or "any"
        #[arg(long, default_value = "any")]
        genre: String,

        /// Case-insensitive title substring
        #[arg(long, default_value = "")]
        title: String,

        /// Author id, or "any"
        #[arg(long, default_value = "any")]
        author: String,

        /// Number of pages to reveal
        #[arg(long, default_value_t = 1)]
        pages: usize,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Print the detail view for one book
    Show {
        /// Book id
        id: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Interactive terminal browser (requires the `tui` feature)
    Browse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

use super::CommandHandler;
use crate::config::Settings;
use crate::Result;

/// Handler for the `browse` command
pub struct BrowseCommand {
    pub settings: Settings,
}

impl BrowseCommand {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }
}

#[cfg(feature = "tui")]
impl CommandHandler for BrowseCommand {
    fn execute(&self) -> Result<()> {
        let controller = super::open_controller(&self.settings)?;
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        let result = runtime.block_on(crate::cli::tui::run_browser(controller));

        // The input reader may still be parked in a blocking read
        runtime.shutdown_background();
        result
    }

    fn name(&self) -> &'static str {
        "browse"
    }
}

#[cfg(not(feature = "tui"))]
impl CommandHandler for BrowseCommand {
    fn execute(&self) -> Result<()> {
        Err(crate::BookshelfError::Cli(
            "this build has no terminal browser; rebuild with --features tui".to_string(),
        ))
    }

    fn name(&self) -> &'static str {
        "browse"
    }
}

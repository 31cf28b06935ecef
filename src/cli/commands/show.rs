use super::{open_controller, CommandHandler};
use crate::cli::OutputFormat;
use crate::config::Settings;
use crate::Result;

/// Handler for the `show` command
pub struct ShowCommand {
    pub settings: Settings,
    pub id: String,
    pub format: OutputFormat,
}

impl ShowCommand {
    pub fn new(settings: Settings, id: String, format: OutputFormat) -> Self {
        Self {
            settings,
            id,
            format,
        }
    }

    pub fn render(&self) -> Result<String> {
        let mut controller = open_controller(&self.settings)?;
        let detail = controller.select_book(&self.id)?;

        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(detail)?),
            OutputFormat::Text => Ok(format!(
                "{}\n{}\n{}\n\n{}",
                detail.title, detail.subtitle, detail.image, detail.description
            )),
        }
    }
}

impl CommandHandler for ShowCommand {
    fn execute(&self) -> Result<()> {
        println!("{}", self.render()?);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "show"
    }
}

use serde::Serialize;
use tracing::info;

use super::{open_controller, CommandHandler, EMPTY_MESSAGE};
use crate::browser::{PreviewCard, ShowMore};
use crate::catalog::{FilterCriteria, Selection};
use crate::cli::OutputFormat;
use crate::config::Settings;
use crate::Result;

/// Handler for the `list` command
pub struct ListCommand {
    pub settings: Settings,
    pub criteria: FilterCriteria,
    pub pages: usize,
    pub format: OutputFormat,
}

#[derive(Debug, Serialize)]
struct ListOutput {
    books: Vec<PreviewCard>,
    total: usize,
    show_more: ShowMore,
    empty: bool,
}

impl ListCommand {
    pub fn new(
        settings: Settings,
        genre: &str,
        title: String,
        author: &str,
        pages: usize,
        format: OutputFormat,
    ) -> Self {
        Self {
            settings,
            criteria: FilterCriteria {
                genre: Selection::parse(genre),
                title,
                author: Selection::parse(author),
            },
            pages,
            format,
        }
    }

    /// Render the requested pages and format them for stdout
    pub fn render(&self) -> Result<String> {
        let mut controller = open_controller(&self.settings)?;
        controller.apply_filters(&self.criteria);

        for _ in 1..self.pages.max(1) {
            if !controller.show_more() {
                break;
            }
        }

        let output = ListOutput {
            books: controller.rendered_cards(),
            total: controller.result_len(),
            show_more: controller.show_more_control(),
            empty: controller.empty_message_visible(),
        };
        info!(rendered = output.books.len(), total = output.total, "Listed books");

        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&output)?),
            OutputFormat::Text => Ok(format_text(&output)),
        }
    }
}

fn format_text(output: &ListOutput) -> String {
    if output.empty {
        return EMPTY_MESSAGE.to_string();
    }

    let mut text = String::new();
    for card in &output.books {
        text.push_str(&format!("{:<10} {} - {}\n", card.id, card.title, card.author));
    }
    text.push_str(&format!(
        "\n{} of {} shown. {}{}",
        output.books.len(),
        output.total,
        output.show_more.label(),
        if output.show_more.disabled { " [disabled]" } else { "" }
    ));
    text
}

impl CommandHandler for ListCommand {
    fn execute(&self) -> Result<()> {
        println!("{}", self.render()?);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "list"
    }
}

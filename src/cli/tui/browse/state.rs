use tui_input::Input;

use crate::browser::{CatalogController, PanelKind, Theme};

/// Which layer receives key input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    List,
    Search,
    Settings,
    Detail,
}

impl Focus {
    /// The top-most open overlay wins
    pub fn of(controller: &CatalogController) -> Self {
        if controller.is_open(PanelKind::Settings) {
            Focus::Settings
        } else if controller.is_open(PanelKind::Search) {
            Focus::Search
        } else if controller.is_open(PanelKind::Detail) {
            Focus::Detail
        } else {
            Focus::List
        }
    }
}

/// One-line message in the status bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Info(String),
    Warning(String),
}

impl Status {
    pub fn text(&self) -> &str {
        match self {
            Status::Info(text) | Status::Warning(text) => text,
        }
    }
}

/// Terminal-only view state; everything else lives in the controller
#[derive(Debug, Default)]
pub struct BrowseState {
    /// Highlighted card in the rendered list
    pub selected_index: usize,
    /// Editing buffer for the search overlay's title field
    pub title_input: Input,
    /// Theme highlighted in the settings overlay
    pub settings_choice: Theme,
    pub status: Option<Status>,
}

impl BrowseState {
    /// Keep the highlight inside a list of `len` cards
    pub fn clamp_selection(&mut self, len: usize) {
        self.selected_index = self.selected_index.min(len.saturating_sub(1));
    }
}

/// Screen modules for the catalog browser
pub mod catalog;
pub mod overlays;

use ratatui::Frame;

use super::state::BrowseState;
use super::theme::Palette;
use crate::browser::{CatalogController, PanelKind};

/// Draw the list, then every open overlay bottom-up
pub fn render(frame: &mut Frame, controller: &CatalogController, state: &BrowseState) {
    let palette = Palette::from_theme(controller.theme());

    catalog::render(frame, controller, state, &palette);

    if controller.is_open(PanelKind::Detail) {
        if let Some(detail) = controller.detail() {
            overlays::render_detail(frame, detail, &palette);
        }
    }
    if controller.is_open(PanelKind::Search) {
        overlays::render_search(frame, controller, state, &palette);
    }
    if controller.is_open(PanelKind::Settings) {
        overlays::render_settings(frame, controller, state, &palette);
    }
}

//! Search, settings and detail overlays

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::browser::{BookDetail, CatalogController, Component, SearchField, Theme};
use crate::cli::tui::browse::modal::{centered_rect, open_modal};
use crate::cli::tui::browse::state::BrowseState;
use crate::cli::tui::browse::theme::Palette;

pub fn render_detail(frame: &mut Frame, detail: &BookDetail, palette: &Palette) {
    let area = centered_rect(70, 60, frame.area());
    let inner = open_modal(frame, area, &detail.title, palette);

    let lines = vec![
        Line::from(Span::styled(detail.subtitle.as_str(), palette.highlight)),
        Line::from(Span::styled(detail.image.as_str(), palette.muted)),
        Line::from(""),
        Line::from(detail.description.as_str()),
        Line::from(""),
        Line::from(Span::styled("[Esc] Close", palette.muted)),
    ];

    let paragraph = Paragraph::new(lines)
        .style(palette.base)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, inner);
}

pub fn render_search(
    frame: &mut Frame,
    controller: &CatalogController,
    state: &BrowseState,
    palette: &Palette,
) {
    let view = controller.search().render();
    let area = centered_rect(60, 40, frame.area());
    let inner = open_modal(frame, area, "Search", palette);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),      // Genre
            Constraint::Length(1),      // Title
            Constraint::Length(1),      // Author
            Constraint::Min(0),
            Constraint::Length(1),      // Help text
        ])
        .split(inner);

    let field_style = |field: SearchField| {
        if view.focus == field {
            palette.focused
        } else {
            palette.base
        }
    };

    let label = |option: &Option<crate::browser::SelectOption>| {
        option
            .as_ref()
            .map(|o| o.label.clone())
            .unwrap_or_default()
    };

    let genre = Line::from(vec![
        Span::styled("Genre:  ", field_style(SearchField::Genre)),
        Span::raw(format!("◀ {} ▶", label(&view.genre))),
    ]);
    frame.render_widget(Paragraph::new(genre), chunks[0]);

    let mut title_spans = vec![
        Span::styled("Title:  ", field_style(SearchField::Title)),
        Span::raw(state.title_input.value().to_string()),
    ];
    if view.focus == SearchField::Title {
        title_spans.push(Span::styled("█", palette.focused));
    }
    frame.render_widget(Paragraph::new(Line::from(title_spans)), chunks[1]);

    let author = Line::from(vec![
        Span::styled("Author: ", field_style(SearchField::Author)),
        Span::raw(format!("◀ {} ▶", label(&view.author))),
    ]);
    frame.render_widget(Paragraph::new(author), chunks[2]);

    let help = Line::from(vec![
        Span::styled("[Tab]", palette.highlight),
        Span::raw(" Next field  "),
        Span::styled("[←→]", palette.highlight),
        Span::raw(" Change  "),
        Span::styled("[Enter]", palette.highlight),
        Span::raw(" Search  "),
        Span::styled("[Esc]", palette.highlight),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(Paragraph::new(help).alignment(Alignment::Center), chunks[4]);
}

pub fn render_settings(
    frame: &mut Frame,
    controller: &CatalogController,
    state: &BrowseState,
    palette: &Palette,
) {
    let area = centered_rect(40, 30, frame.area());
    let inner = open_modal(frame, area, "Settings", palette);
    let active = controller.theme().theme();

    let mut lines = Vec::new();
    for theme in [Theme::Day, Theme::Night] {
        let marker = if state.settings_choice == theme { "▶" } else { " " };
        let style = if state.settings_choice == theme {
            palette.focused
        } else {
            palette.base
        };
        let suffix = if active == theme { "  (active)" } else { "" };
        lines.push(Line::from(vec![
            Span::raw(format!("{} ", marker)),
            Span::styled(theme.as_str(), style.add_modifier(Modifier::BOLD)),
            Span::styled(suffix, palette.muted),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[↑↓] Choose  [Enter] Save  [Esc] Cancel",
        palette.muted,
    )));

    frame.render_widget(Paragraph::new(lines).style(palette.base), inner);
}

//! Main list screen: header, preview cards, show-more control, help bar

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::browser::CatalogController;
use crate::cli::commands::EMPTY_MESSAGE;
use crate::cli::tui::browse::state::{BrowseState, Status};
use crate::cli::tui::browse::theme::Palette;

pub fn render(
    frame: &mut Frame,
    controller: &CatalogController,
    state: &BrowseState,
    palette: &Palette,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // Header
            Constraint::Min(3),         // Card list
            Constraint::Length(1),      // Show more
            Constraint::Length(1),      // Status / help
        ])
        .split(frame.area());

    frame.render_widget(Block::default().style(palette.base), frame.area());

    render_header(frame, chunks[0], controller, palette);
    render_cards(frame, chunks[1], controller, state, palette);
    render_show_more(frame, chunks[2], controller, palette);
    render_status(frame, chunks[3], state, palette);
}

fn render_header(frame: &mut Frame, area: Rect, controller: &CatalogController, palette: &Palette) {
    let header = Line::from(vec![
        Span::styled("bookshelf", palette.highlight),
        Span::styled(
            format!(
                "  {} of {} books shown  theme: {}",
                controller.rendered().len(),
                controller.result_len(),
                controller.theme().theme()
            ),
            palette.muted,
        ),
    ]);

    let paragraph = Paragraph::new(header)
        .block(Block::default().borders(Borders::ALL).style(palette.base));
    frame.render_widget(paragraph, area);
}

fn render_cards(
    frame: &mut Frame,
    area: Rect,
    controller: &CatalogController,
    state: &BrowseState,
    palette: &Palette,
) {
    if controller.empty_message_visible() {
        let message = Paragraph::new(EMPTY_MESSAGE)
            .alignment(Alignment::Center)
            .style(palette.muted)
            .block(Block::default().borders(Borders::ALL).style(palette.base));
        frame.render_widget(message, area);
        return;
    }

    let items: Vec<ListItem> = controller
        .rendered_cards()
        .into_iter()
        .map(|card| {
            ListItem::new(Line::from(vec![
                Span::styled(card.title, palette.base.add_modifier(Modifier::BOLD)),
                Span::raw("  "),
                Span::styled(card.author, palette.muted),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).style(palette.base))
        .highlight_style(palette.selected)
        .highlight_symbol("▶ ");

    let mut list_state = ListState::default().with_selected(Some(state.selected_index));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_show_more(frame: &mut Frame, area: Rect, controller: &CatalogController, palette: &Palette) {
    let control = controller.show_more_control();
    let style = if control.disabled {
        palette.disabled
    } else {
        palette.focused
    };

    let line = Line::from(vec![
        Span::styled("[m] ", palette.highlight),
        Span::styled(control.label(), style),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn render_status(frame: &mut Frame, area: Rect, state: &BrowseState, palette: &Palette) {
    let line = match &state.status {
        Some(Status::Warning(text)) => Line::from(Span::styled(text.as_str(), palette.warning)),
        Some(Status::Info(text)) => Line::from(Span::styled(text.as_str(), palette.muted)),
        None => Line::from(vec![
            Span::styled("[↑↓]", palette.highlight),
            Span::raw(" Move  "),
            Span::styled("[Enter]", palette.highlight),
            Span::raw(" Details  "),
            Span::styled("[/]", palette.highlight),
            Span::raw(" Search  "),
            Span::styled("[s]", palette.highlight),
            Span::raw(" Settings  "),
            Span::styled("[q]", palette.highlight),
            Span::raw(" Quit"),
        ]),
    };

    frame.render_widget(Paragraph::new(line).style(palette.base), area);
}

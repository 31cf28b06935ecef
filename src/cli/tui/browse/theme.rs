use ratatui::style::{Color, Modifier, Style};

use crate::browser::{Rgb, ThemeState};

fn rgb(color: Rgb) -> Color {
    Color::Rgb(color.0, color.1, color.2)
}

/// Terminal styles derived from the active colour variables
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub base: Style,
    pub selected: Style,
    pub focused: Style,
    pub muted: Style,
    pub highlight: Style,
    pub warning: Style,
    pub disabled: Style,
    pub modal_border: Style,
}

impl Palette {
    pub fn from_theme(theme: &ThemeState) -> Self {
        let dark = rgb(theme.color_dark());
        let light = rgb(theme.color_light());
        let base = Style::default().fg(dark).bg(light);

        Self {
            base,
            selected: Style::default()
                .fg(light)
                .bg(dark)
                .add_modifier(Modifier::BOLD),
            focused: base.fg(Color::Yellow).add_modifier(Modifier::BOLD),
            muted: base.fg(Color::DarkGray),
            highlight: base.fg(Color::Cyan).add_modifier(Modifier::BOLD),
            warning: base.fg(Color::Red).add_modifier(Modifier::BOLD),
            disabled: base.fg(Color::DarkGray).add_modifier(Modifier::DIM),
            modal_border: base.add_modifier(Modifier::BOLD),
        }
    }
}

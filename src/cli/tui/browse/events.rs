use ratatui::crossterm::event::KeyEvent;

/// Terminal-side events feeding the render loop
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Resize(u16, u16),

    // Redraw without input
    Tick,
}

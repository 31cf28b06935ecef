use std::collections::BTreeMap;
use std::time::Duration;

use ratatui::{
    crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    DefaultTerminal, Frame,
};
use tokio::time;
use tracing::{debug, info};
use tui_input::backend::crossterm::EventHandler;

use super::events::AppEvent;
use super::state::{BrowseState, Focus, Status};
use crate::browser::{CatalogController, SearchField};
use crate::Result;

/// Main application struct
pub struct App {
    /// Catalog state: result set, pagination, panels, theme
    controller: CatalogController,
    /// Terminal-only view state
    state: BrowseState,
    /// Whether the app should quit
    should_quit: bool,
}

impl App {
    /// Create a new app around an initialized controller
    pub fn new(controller: CatalogController) -> Self {
        let settings_choice = controller.theme().theme();
        Self {
            controller,
            state: BrowseState {
                settings_choice,
                ..Default::default()
            },
            should_quit: false,
        }
    }

    pub fn controller(&self) -> &CatalogController {
        &self.controller
    }

    pub fn state(&self) -> &BrowseState {
        &self.state
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Run the application
    pub async fn run(mut self) -> Result<()> {
        let mut terminal = ratatui::init();
        terminal.clear()?;

        let (event_tx, mut event_rx) = tokio::sync::mpsc::unbounded_channel();

        // Blocking terminal reads stay off the render loop
        tokio::task::spawn_blocking(move || loop {
            let Ok(event) = event::read() else { break };
            let app_event = match event {
                Event::Key(key) if key.kind == KeyEventKind::Press => AppEvent::Key(key),
                Event::Resize(width, height) => AppEvent::Resize(width, height),
                _ => continue,
            };
            if event_tx.send(app_event).is_err() {
                break;
            }
        });

        let result = self.main_loop(&mut terminal, &mut event_rx).await;

        ratatui::restore();
        info!("Browser closed");
        result
    }

    /// Main event loop
    async fn main_loop(
        &mut self,
        terminal: &mut DefaultTerminal,
        event_rx: &mut tokio::sync::mpsc::UnboundedReceiver<AppEvent>,
    ) -> Result<()> {
        loop {
            terminal.draw(|frame| self.render(frame))?;

            match time::timeout(Duration::from_millis(250), event_rx.recv()).await {
                Ok(Some(event)) => self.handle_event(event),
                Ok(None) => break, // Input reader gone
                Err(_) => self.handle_event(AppEvent::Tick),
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Render the current state
    pub fn render(&mut self, frame: &mut Frame) {
        super::screens::render(frame, &self.controller, &self.state);
    }

    /// Handle one terminal event, then deliver whatever the components emitted
    pub fn handle_event(&mut self, event: AppEvent) {
        let AppEvent::Key(key) = event else {
            return;
        };

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match Focus::of(&self.controller) {
            Focus::List => self.handle_list_key(key),
            Focus::Search => self.handle_search_key(key),
            Focus::Settings => self.handle_settings_key(key),
            Focus::Detail => self.handle_detail_key(key),
        }

        self.dispatch();
    }

    fn dispatch(&mut self) {
        match self.controller.dispatch_pending() {
            Ok(0) => {}
            Ok(handled) => debug!(handled, "Dispatched component events"),
            Err(e) => self.state.status = Some(Status::Warning(e.to_string())),
        }
        self.state
            .clamp_selection(self.controller.rendered().len());
    }

    fn handle_list_key(&mut self, key: KeyEvent) {
        self.state.status = None;
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => {
                self.state.selected_index = self.state.selected_index.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.state.selected_index += 1;
            }
            KeyCode::Enter => {
                self.controller.click_card(self.state.selected_index);
            }
            KeyCode::Char('m') => {
                if !self.controller.show_more() {
                    self.state.status = Some(Status::Info("Nothing more to show".to_string()));
                }
            }
            KeyCode::Char('/') => self.controller.open_search(),
            KeyCode::Char('s') => {
                self.state.settings_choice = self.controller.theme().theme();
                self.controller.open_settings();
            }
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        let search = self.controller.search_mut();
        match (key.code, search.focus()) {
            // The overlay's own cancel control
            (KeyCode::Esc, _) => search.cancel(),
            (KeyCode::Tab, field) => search.set_focus(field.next()),
            (KeyCode::BackTab, field) => search.set_focus(field.prev()),
            (KeyCode::Enter, _) => {
                self.controller.submit_search();
                self.state.selected_index = 0;
            }
            (KeyCode::Left, SearchField::Genre) => search.cycle_genre(-1),
            (KeyCode::Right, SearchField::Genre) => search.cycle_genre(1),
            (KeyCode::Left, SearchField::Author) => search.cycle_author(-1),
            (KeyCode::Right, SearchField::Author) => search.cycle_author(1),
            (_, SearchField::Title) => {
                self.state.title_input.handle_event(&Event::Key(key));
                search.set_title(self.state.title_input.value());
            }
            _ => {}
        }
    }

    fn handle_settings_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.controller.close_settings(),
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right | KeyCode::Tab => {
                self.state.settings_choice = self.state.settings_choice.toggled();
            }
            KeyCode::Enter => {
                let form = BTreeMap::from([(
                    "theme".to_string(),
                    self.state.settings_choice.as_str().to_string(),
                )]);
                match self.controller.submit_settings(&form) {
                    Ok(theme) => {
                        self.state.status = Some(Status::Info(format!("Theme set to {}", theme)));
                    }
                    Err(e) => self.state.status = Some(Status::Warning(e.to_string())),
                }
            }
            _ => {}
        }
    }

    fn handle_detail_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
            self.controller.close_detail();
        }
    }
}

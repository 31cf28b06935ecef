//! Modal search form collecting genre, title and author filters

use std::collections::BTreeMap;

use tracing::debug;

use super::component::Component;
use super::events::{EventSink, UiEvent};
use super::panel::Panel;
use crate::catalog::{NameTable, ANY};

/// One entry of a select list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// Sentinel "any" option followed by one option per table entry, in table order
pub fn select_options(table: &NameTable, any_label: &str) -> Vec<SelectOption> {
    std::iter::once(SelectOption {
        value: ANY.to_string(),
        label: any_label.to_string(),
    })
    .chain(table.iter().map(|(id, name)| SelectOption {
        value: id.to_string(),
        label: name.to_string(),
    }))
    .collect()
}

/// Form fields, in tab order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchField {
    Genre,
    #[default]
    Title,
    Author,
}

impl SearchField {
    pub fn name(&self) -> &'static str {
        match self {
            SearchField::Genre => "genre",
            SearchField::Title => "title",
            SearchField::Author => "author",
        }
    }

    pub fn next(self) -> Self {
        match self {
            SearchField::Genre => SearchField::Title,
            SearchField::Title => SearchField::Author,
            SearchField::Author => SearchField::Genre,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            SearchField::Genre => SearchField::Author,
            SearchField::Title => SearchField::Genre,
            SearchField::Author => SearchField::Title,
        }
    }
}

/// A select list with a current choice
#[derive(Debug, Clone, Default)]
struct Select {
    options: Vec<SelectOption>,
    selected: usize,
}

impl Select {
    fn value(&self) -> &str {
        self.options
            .get(self.selected)
            .map(|o| o.value.as_str())
            .unwrap_or(ANY)
    }

    fn current(&self) -> Option<&SelectOption> {
        self.options.get(self.selected)
    }

    fn select(&mut self, value: &str) -> bool {
        match self.options.iter().position(|o| o.value == value) {
            Some(idx) => {
                self.selected = idx;
                true
            }
            None => false,
        }
    }

    fn cycle(&mut self, delta: isize) {
        if self.options.is_empty() {
            return;
        }
        let len = self.options.len() as isize;
        self.selected = (self.selected as isize + delta).rem_euclid(len) as usize;
    }
}

/// Render snapshot of the overlay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchView {
    pub open: bool,
    pub genre: Option<SelectOption>,
    pub title: String,
    pub author: Option<SelectOption>,
    pub focus: SearchField,
}

/// The overlay owns its single open flag. Its cancel control and the
/// controller both write that same flag.
#[derive(Debug, Default)]
pub struct SearchOverlay {
    panel: Panel,
    genre: Select,
    title: String,
    author: Select,
    focus: SearchField,
    sink: Option<EventSink>,
}

impl SearchOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_genre_options(&mut self, options: Vec<SelectOption>) {
        self.genre = Select {
            options,
            selected: 0,
        };
    }

    pub fn set_author_options(&mut self, options: Vec<SelectOption>) {
        self.author = Select {
            options,
            selected: 0,
        };
    }

    pub fn genre_options(&self) -> &[SelectOption] {
        &self.genre.options
    }

    pub fn author_options(&self) -> &[SelectOption] {
        &self.author.options
    }

    pub fn is_open(&self) -> bool {
        self.panel.is_open()
    }

    pub fn set_open(&mut self, open: bool) {
        self.panel.set_open(open);
    }

    /// The overlay's own cancel control
    pub fn cancel(&mut self) {
        self.panel.close();
    }

    pub fn focus(&self) -> SearchField {
        self.focus
    }

    pub fn set_focus(&mut self, field: SearchField) {
        self.focus = field;
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Choose a genre by option value; false when no such option exists
    pub fn select_genre(&mut self, value: &str) -> bool {
        self.genre.select(value)
    }

    pub fn select_author(&mut self, value: &str) -> bool {
        self.author.select(value)
    }

    pub fn cycle_genre(&mut self, delta: isize) {
        self.genre.cycle(delta);
    }

    pub fn cycle_author(&mut self, delta: isize) {
        self.author.cycle(delta);
    }

    /// Every form field as a flat name -> value mapping
    pub fn form_data(&self) -> BTreeMap<String, String> {
        BTreeMap::from([
            (SearchField::Genre.name().to_string(), self.genre.value().to_string()),
            (SearchField::Title.name().to_string(), self.title.clone()),
            (SearchField::Author.name().to_string(), self.author.value().to_string()),
        ])
    }

    /// Submit the form, emitting `search-form-submitted`
    pub fn submit(&self) -> bool {
        match &self.sink {
            Some(sink) => sink.emit(UiEvent::SearchFormSubmitted(self.form_data())),
            None => {
                debug!("Submit on detached search overlay ignored");
                false
            }
        }
    }
}

impl Component for SearchOverlay {
    type View = SearchView;

    fn mount(&mut self, sink: EventSink) {
        self.sink = Some(sink);
    }

    fn unmount(&mut self) {
        self.sink = None;
    }

    fn is_mounted(&self) -> bool {
        self.sink.is_some()
    }

    fn render(&self) -> SearchView {
        SearchView {
            open: self.is_open(),
            genre: self.genre.current().cloned(),
            title: self.title.clone(),
            author: self.author.current().cloned(),
            focus: self.focus,
        }
    }
}

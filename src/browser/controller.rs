//! Catalog controller: owns the result set, pagination cursor and panel
//! state, and turns component events into list and detail updates.

use std::collections::BTreeMap;
use std::ops::Range;

use serde::Serialize;
use tracing::{debug, info, warn};

use super::component::Component;
use super::events::{self, EventQueue, EventSink, UiEvent};
use super::panel::{Panel, PanelKind};
use super::preview::{BookPreview, PreviewAttributes, PreviewCard};
use super::search::{select_options, SearchOverlay, SelectOption};
use super::theme::{ColorScheme, Theme, ThemeState};
use crate::catalog::{Book, Catalog, FilterCriteria};
use crate::{BookshelfError, Result};

/// Books revealed per page
pub const DEFAULT_PAGE_SIZE: usize = 36;

const ALL_GENRES: &str = "All Genres";
const ALL_AUTHORS: &str = "All Authors";

/// State of the "show more" control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ShowMore {
    /// Result-set entries not yet rendered
    pub remaining: usize,
    pub disabled: bool,
}

impl ShowMore {
    pub fn label(&self) -> String {
        format!("Show more ({})", self.remaining)
    }
}

/// Contents of the detail panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookDetail {
    pub id: String,
    pub image: String,
    pub title: String,
    /// "author (publication year)"
    pub subtitle: String,
    pub description: String,
}

impl BookDetail {
    fn from_book(book: &Book, author: &str) -> Self {
        Self {
            id: book.id.clone(),
            image: book.image.clone(),
            title: book.title.clone(),
            subtitle: format!("{} ({})", author, book.published_year()),
            description: book.description.clone(),
        }
    }
}

pub struct CatalogController {
    catalog: Catalog,
    page_size: usize,
    /// Catalog positions of the current result set, in catalog order
    matches: Vec<usize>,
    /// Pages revealed so far, always >= 1
    page: usize,
    list: Vec<BookPreview>,
    search: SearchOverlay,
    settings: Panel,
    detail_panel: Panel,
    detail: Option<BookDetail>,
    show_more: ShowMore,
    empty_message: bool,
    theme: ThemeState,
    warnings: Vec<String>,
    sink: EventSink,
    queue: EventQueue,
}

impl CatalogController {
    pub fn new(catalog: Catalog, page_size: usize) -> Result<Self> {
        if page_size == 0 {
            return Err(BookshelfError::Config(
                "page size must be at least 1".to_string(),
            ));
        }

        let (sink, queue) = events::channel();
        let matches = (0..catalog.len()).collect();

        Ok(Self {
            catalog,
            page_size,
            matches,
            page: 1,
            list: Vec::new(),
            search: SearchOverlay::new(),
            settings: Panel::default(),
            detail_panel: Panel::default(),
            detail: None,
            show_more: ShowMore::default(),
            empty_message: false,
            theme: ThemeState::default(),
            warnings: Vec::new(),
            sink,
            queue,
        })
    }

    /// Populate the select lists, apply the preferred theme and render the
    /// first page of the full catalog.
    pub fn initialize(&mut self, scheme: ColorScheme) {
        self.search
            .set_genre_options(select_options(self.catalog.genres(), ALL_GENRES));
        self.search
            .set_author_options(select_options(self.catalog.authors(), ALL_AUTHORS));
        self.search.mount(self.sink.clone());

        self.set_theme(scheme.preferred_theme());

        self.matches = (0..self.catalog.len()).collect();
        self.render_first_page();

        info!(
            books = self.catalog.len(),
            page_size = self.page_size,
            "Catalog initialized"
        );
    }

    /// Recompute the result set and re-render from page 1
    pub fn apply_filters(&mut self, criteria: &FilterCriteria) {
        self.matches = criteria.apply(&self.catalog);
        debug!(?criteria, matches = self.matches.len(), "Applied filters");
        self.render_first_page();
    }

    /// Append the next page of the result set. Returns false when the
    /// control is disabled.
    pub fn show_more(&mut self) -> bool {
        if self.show_more.disabled {
            debug!("Show more requested with nothing left to show");
            return false;
        }

        let start = self.page * self.page_size;
        self.append_range(start..start + self.page_size);
        self.page += 1;
        self.refresh_show_more();
        true
    }

    /// Open the detail panel for a book in the full catalog. An unknown id
    /// leaves every panel untouched and is reported as a warning.
    pub fn select_book(&mut self, id: &str) -> Result<&BookDetail> {
        let Some(book) = self.catalog.find(id) else {
            warn!(id = %id, "Preview references a book that is not in the catalog");
            self.warnings
                .push(format!("No book with id '{}' in the catalog", id));
            return Err(BookshelfError::UnknownBook(id.to_string()));
        };

        let detail = BookDetail::from_book(book, self.catalog.author_name(&book.author_id));
        self.detail_panel.open();
        Ok(&*self.detail.insert(detail))
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme.apply(theme);
        debug!(
            theme = %theme,
            color_dark = %self.theme.color_dark(),
            color_light = %self.theme.color_light(),
            "Theme applied"
        );
    }

    /// Apply the `theme` field of a submitted settings form
    pub fn submit_settings(&mut self, form: &BTreeMap<String, String>) -> Result<Theme> {
        let theme: Theme = form
            .get("theme")
            .map(String::as_str)
            .unwrap_or_default()
            .parse()?;
        self.set_theme(theme);
        Ok(theme)
    }

    pub fn open_search(&mut self) {
        self.search.set_open(true);
        self.search.set_focus(Default::default());
    }

    pub fn close_search(&mut self) {
        self.search.set_open(false);
    }

    pub fn open_settings(&mut self) {
        self.settings.open();
    }

    pub fn close_settings(&mut self) {
        self.settings.close();
    }

    pub fn close_detail(&mut self) {
        self.detail_panel.close();
    }

    /// Activate the rendered card at `index`; the click is delivered on the
    /// next `dispatch_pending`.
    pub fn click_card(&self, index: usize) -> bool {
        self.list.get(index).map(|card| card.click()).unwrap_or(false)
    }

    /// Submit the search overlay's form; delivered on the next `dispatch_pending`.
    pub fn submit_search(&self) -> bool {
        self.search.submit()
    }

    pub fn handle_event(&mut self, event: UiEvent) -> Result<()> {
        debug!(event = event.name(), "Handling event");
        match event {
            UiEvent::BookPreviewClicked { id } => {
                self.select_book(&id)?;
            }
            UiEvent::SearchFormSubmitted(form) => {
                self.apply_filters(&FilterCriteria::from_form(&form));
            }
        }
        Ok(())
    }

    /// Handle queued events in the order they were emitted. Stops at the
    /// first failing event; later events stay queued.
    pub fn dispatch_pending(&mut self) -> Result<usize> {
        let mut handled = 0;
        while let Some(event) = self.queue.try_next() {
            self.handle_event(event)?;
            handled += 1;
        }
        Ok(handled)
    }

    fn render_first_page(&mut self) {
        self.page = 1;
        for card in &mut self.list {
            card.unmount();
        }
        self.list.clear();

        self.append_range(0..self.page_size);
        self.empty_message = self.matches.is_empty();
        self.refresh_show_more();
    }

    fn append_range(&mut self, range: Range<usize>) {
        let end = range.end.min(self.matches.len());
        let start = range.start.min(end);

        for &idx in &self.matches[start..end] {
            let book = &self.catalog.books()[idx];
            let mut card = BookPreview::new(PreviewAttributes::new(
                self.catalog.author_name(&book.author_id),
                book.id.as_str(),
                book.image.as_str(),
                book.title.as_str(),
            ));
            card.mount(self.sink.clone());
            self.list.push(card);
        }
    }

    fn refresh_show_more(&mut self) {
        let revealed = self.page * self.page_size;
        self.show_more = ShowMore {
            remaining: self.matches.len().saturating_sub(revealed),
            disabled: self.matches.len() <= revealed,
        };
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Books in the current result set, in catalog order
    pub fn result_set(&self) -> impl Iterator<Item = &Book> + '_ {
        self.matches.iter().map(|&idx| &self.catalog.books()[idx])
    }

    pub fn result_len(&self) -> usize {
        self.matches.len()
    }

    pub fn rendered(&self) -> &[BookPreview] {
        &self.list
    }

    pub fn rendered_cards(&self) -> Vec<PreviewCard> {
        self.list.iter().map(<BookPreview as Component>::render).collect()
    }

    pub fn show_more_control(&self) -> ShowMore {
        self.show_more
    }

    pub fn empty_message_visible(&self) -> bool {
        self.empty_message
    }

    pub fn detail(&self) -> Option<&BookDetail> {
        self.detail.as_ref()
    }

    pub fn search(&self) -> &SearchOverlay {
        &self.search
    }

    pub fn search_mut(&mut self) -> &mut SearchOverlay {
        &mut self.search
    }

    pub fn genre_options(&self) -> &[SelectOption] {
        self.search.genre_options()
    }

    pub fn author_options(&self) -> &[SelectOption] {
        self.search.author_options()
    }

    pub fn theme(&self) -> &ThemeState {
        &self.theme
    }

    pub fn is_open(&self, panel: PanelKind) -> bool {
        match panel {
            PanelKind::Search => self.search.is_open(),
            PanelKind::Settings => self.settings.is_open(),
            PanelKind::Detail => self.detail_panel.is_open(),
        }
    }

    /// Warnings recorded for recoverable failures, oldest first
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }
}

//! Clickable preview card bound to a single book

use serde::Serialize;
use tracing::debug;

use super::component::Component;
use super::events::{EventSink, UiEvent};

pub const FALLBACK_AUTHOR: &str = "Unknown Author";
pub const FALLBACK_ID: &str = "Unknown ID";
pub const FALLBACK_IMAGE: &str = "default-image.jpg";
pub const FALLBACK_TITLE: &str = "Untitled";

/// String attributes a card is constructed with. Missing or empty values
/// render with a fixed fallback.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreviewAttributes {
    pub author: Option<String>,
    pub id: Option<String>,
    pub image: Option<String>,
    pub title: Option<String>,
}

impl PreviewAttributes {
    pub fn new(
        author: impl Into<String>,
        id: impl Into<String>,
        image: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            author: Some(author.into()),
            id: Some(id.into()),
            image: Some(image.into()),
            title: Some(title.into()),
        }
    }
}

fn or_fallback<'a>(value: &'a Option<String>, fallback: &'static str) -> &'a str {
    match value.as_deref() {
        Some(v) if !v.is_empty() => v,
        _ => fallback,
    }
}

/// What a mounted card shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewCard {
    pub id: String,
    pub image: String,
    pub image_alt: String,
    pub title: String,
    pub author: String,
}

#[derive(Debug)]
pub struct BookPreview {
    attributes: PreviewAttributes,
    /// Click handler registration; present only while mounted
    sink: Option<EventSink>,
}

impl BookPreview {
    pub fn new(attributes: PreviewAttributes) -> Self {
        Self {
            attributes,
            sink: None,
        }
    }

    pub fn attributes(&self) -> &PreviewAttributes {
        &self.attributes
    }

    pub fn id(&self) -> &str {
        or_fallback(&self.attributes.id, FALLBACK_ID)
    }

    pub fn title(&self) -> &str {
        or_fallback(&self.attributes.title, FALLBACK_TITLE)
    }

    pub fn author(&self) -> &str {
        or_fallback(&self.attributes.author, FALLBACK_AUTHOR)
    }

    pub fn image(&self) -> &str {
        or_fallback(&self.attributes.image, FALLBACK_IMAGE)
    }

    /// Activate the card. Emits `book-preview-clicked` with the card's id;
    /// does nothing once unmounted.
    pub fn click(&self) -> bool {
        match &self.sink {
            Some(sink) => sink.emit(UiEvent::BookPreviewClicked {
                id: self.id().to_string(),
            }),
            None => {
                debug!(id = self.id(), "Click on detached preview ignored");
                false
            }
        }
    }
}

impl Component for BookPreview {
    type View = PreviewCard;

    fn mount(&mut self, sink: EventSink) {
        self.sink = Some(sink);
    }

    fn unmount(&mut self) {
        self.sink = None;
    }

    fn is_mounted(&self) -> bool {
        self.sink.is_some()
    }

    fn render(&self) -> PreviewCard {
        PreviewCard {
            id: self.id().to_string(),
            image: self.image().to_string(),
            image_alt: format!("Book cover of {}", self.title()),
            title: self.title().to_string(),
            author: self.author().to_string(),
        }
    }
}

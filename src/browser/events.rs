use std::collections::BTreeMap;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

pub const BOOK_PREVIEW_CLICKED: &str = "book-preview-clicked";
pub const SEARCH_FORM_SUBMITTED: &str = "search-form-submitted";

/// Notifications emitted by components towards the controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// A preview card was activated
    BookPreviewClicked { id: String },
    /// The search form was submitted; field name -> value
    SearchFormSubmitted(BTreeMap<String, String>),
}

impl UiEvent {
    pub fn name(&self) -> &'static str {
        match self {
            UiEvent::BookPreviewClicked { .. } => BOOK_PREVIEW_CLICKED,
            UiEvent::SearchFormSubmitted(_) => SEARCH_FORM_SUBMITTED,
        }
    }
}

/// Sending half handed to a component when it is mounted
#[derive(Debug, Clone)]
pub struct EventSink {
    tx: UnboundedSender<UiEvent>,
}

impl EventSink {
    /// Returns false once the receiving controller is gone
    pub fn emit(&self, event: UiEvent) -> bool {
        self.tx.send(event).is_ok()
    }
}

/// Receiving half, owned by the controller
#[derive(Debug)]
pub struct EventQueue {
    rx: UnboundedReceiver<UiEvent>,
}

impl EventQueue {
    /// Next queued event in send order, if any
    pub fn try_next(&mut self) -> Option<UiEvent> {
        self.rx.try_recv().ok()
    }
}

pub fn channel() -> (EventSink, EventQueue) {
    let (tx, rx) = mpsc::unbounded_channel();
    (EventSink { tx }, EventQueue { rx })
}

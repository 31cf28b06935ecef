//! Catalog browser core: renderable components, the event channel they emit
//! on, and the controller that owns pagination and panel state.

pub mod component;
pub mod controller;
pub mod events;
pub mod panel;
pub mod preview;
pub mod search;
pub mod theme;

pub use component::Component;
pub use controller::{BookDetail, CatalogController, ShowMore, DEFAULT_PAGE_SIZE};
pub use events::{EventQueue, EventSink, UiEvent};
pub use panel::{Panel, PanelKind};
pub use preview::{BookPreview, PreviewAttributes, PreviewCard};
pub use search::{select_options, SearchField, SearchOverlay, SearchView, SelectOption};
pub use theme::{ColorScheme, Rgb, Theme, ThemePreference, ThemeState};

use std::collections::BTreeMap;

use bookshelf::browser::events::{self, BOOK_PREVIEW_CLICKED, SEARCH_FORM_SUBMITTED};
use bookshelf::browser::{
    select_options, BookPreview, Component, PreviewAttributes, SearchField, SearchOverlay,
    UiEvent,
};
use bookshelf::catalog::NameTable;
use pretty_assertions::assert_eq;

#[test]
fn test_preview_renders_attributes() {
    let card = BookPreview::new(PreviewAttributes::new(
        "Frank Herbert",
        "b1",
        "https://covers.example/b1.jpg",
        "Dune",
    ))
    .render();

    assert_eq!(card.id, "b1");
    assert_eq!(card.title, "Dune");
    assert_eq!(card.author, "Frank Herbert");
    assert_eq!(card.image, "https://covers.example/b1.jpg");
    assert_eq!(card.image_alt, "Book cover of Dune");
}

#[test]
fn test_preview_missing_attributes_fall_back() {
    let card = BookPreview::new(PreviewAttributes {
        author: None,
        id: None,
        image: Some(String::new()),
        title: None,
    })
    .render();

    assert_eq!(card.author, "Unknown Author");
    assert_eq!(card.id, "Unknown ID");
    assert_eq!(card.image, "default-image.jpg");
    assert_eq!(card.title, "Untitled");
}

#[test]
fn test_preview_click_emits_id_while_mounted() {
    let (sink, mut queue) = events::channel();
    let mut card = BookPreview::new(PreviewAttributes::new("A", "b7", "img", "T"));

    assert!(!card.click(), "unmounted card must not emit");
    assert!(queue.try_next().is_none());

    card.mount(sink);
    assert!(card.is_mounted());
    assert!(card.click());

    let event = queue.try_next().unwrap();
    assert_eq!(event.name(), BOOK_PREVIEW_CLICKED);
    assert_eq!(
        event,
        UiEvent::BookPreviewClicked {
            id: "b7".to_string()
        }
    );

    card.unmount();
    assert!(!card.click());
    assert!(queue.try_next().is_none());
}

#[test]
fn test_select_options_lead_with_sentinel() {
    let table: NameTable = [("z", "Zed"), ("a", "Ay")].into_iter().collect();
    let options = select_options(&table, "All Genres");

    let pairs: Vec<(&str, &str)> = options
        .iter()
        .map(|o| (o.value.as_str(), o.label.as_str()))
        .collect();
    assert_eq!(pairs, vec![("any", "All Genres"), ("z", "Zed"), ("a", "Ay")]);
}

fn overlay() -> SearchOverlay {
    let mut overlay = SearchOverlay::new();
    let genres: NameTable = [("g1", "Science Fiction"), ("g2", "Fantasy")].into_iter().collect();
    let authors: NameTable = [("a1", "Frank Herbert")].into_iter().collect();
    overlay.set_genre_options(select_options(&genres, "All Genres"));
    overlay.set_author_options(select_options(&authors, "All Authors"));
    overlay
}

#[test]
fn test_search_form_data_is_flat_mapping() {
    let mut overlay = overlay();
    assert_eq!(
        overlay.form_data(),
        BTreeMap::from([
            ("genre".to_string(), "any".to_string()),
            ("title".to_string(), String::new()),
            ("author".to_string(), "any".to_string()),
        ])
    );

    assert!(overlay.select_genre("g2"));
    assert!(!overlay.select_genre("g9"));
    overlay.set_title("earth");
    overlay.cycle_author(1);

    let form = overlay.form_data();
    assert_eq!(form["genre"], "g2");
    assert_eq!(form["title"], "earth");
    assert_eq!(form["author"], "a1");

    // Cycling wraps around both ends
    overlay.cycle_author(1);
    assert_eq!(overlay.form_data()["author"], "any");
    overlay.cycle_genre(-1);
    assert_eq!(overlay.form_data()["genre"], "g1");
}

#[test]
fn test_search_submit_emits_form() {
    let (sink, mut queue) = events::channel();
    let mut overlay = overlay();
    overlay.mount(sink);
    overlay.set_title("dune");

    assert!(overlay.submit());
    let event = queue.try_next().unwrap();
    assert_eq!(event.name(), SEARCH_FORM_SUBMITTED);
    match event {
        UiEvent::SearchFormSubmitted(form) => assert_eq!(form["title"], "dune"),
        other => panic!("unexpected event {:?}", other),
    }

    overlay.unmount();
    assert!(!overlay.submit());
}

#[test]
fn test_search_visibility_has_one_flag() {
    let mut overlay = overlay();
    assert!(!overlay.is_open());

    overlay.set_open(true);
    assert!(overlay.render().open);

    overlay.cancel();
    assert!(!overlay.is_open());
    assert!(!overlay.render().open);
}

#[test]
fn test_search_focus_cycles() {
    let mut overlay = overlay();
    assert_eq!(overlay.focus(), SearchField::Title);
    overlay.set_focus(overlay.focus().next());
    assert_eq!(overlay.focus(), SearchField::Author);
    assert_eq!(SearchField::Author.next(), SearchField::Genre);
    assert_eq!(SearchField::Genre.prev(), SearchField::Author);
}

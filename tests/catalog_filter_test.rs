mod common;

use bookshelf::browser::{CatalogController, ColorScheme};
use bookshelf::catalog::{FilterCriteria, Selection};
use pretty_assertions::assert_eq;

fn titles(controller: &CatalogController) -> Vec<String> {
    controller.result_set().map(|b| b.title.clone()).collect()
}

#[test]
fn test_unrestricted_filter_returns_full_catalog_in_order() {
    let catalog = common::small_catalog();
    let expected: Vec<String> = catalog.books().iter().map(|b| b.title.clone()).collect();

    let mut controller = CatalogController::new(catalog, 36).unwrap();
    controller.initialize(ColorScheme::Light);
    controller.apply_filters(&FilterCriteria {
        genre: Selection::Any,
        title: String::new(),
        author: Selection::Any,
    });

    assert_eq!(titles(&controller), expected);
}

#[test]
fn test_every_case_variant_substring_matches_its_book() {
    let catalog = common::small_catalog();

    for book in catalog.books() {
        let title = book.title.as_str();
        for start in 0..title.len() {
            for end in start + 1..=title.len() {
                let fragment = &title[start..end];
                if fragment.trim().is_empty() {
                    continue;
                }
                for variant in [fragment.to_uppercase(), fragment.to_lowercase()] {
                    let criteria = FilterCriteria {
                        title: variant.clone(),
                        ..Default::default()
                    };
                    assert!(
                        criteria.matches(book),
                        "'{}' should match '{}'",
                        variant,
                        book.title
                    );
                }
            }
        }
    }
}

#[test]
fn test_apply_filters_is_idempotent() {
    let mut controller = CatalogController::new(common::small_catalog(), 36).unwrap();
    controller.initialize(ColorScheme::Light);

    let criteria = FilterCriteria {
        genre: Selection::Id("g1".to_string()),
        title: "the".to_string(),
        author: Selection::Any,
    };

    controller.apply_filters(&criteria);
    let first = titles(&controller);
    controller.apply_filters(&criteria);
    let second = titles(&controller);

    assert_eq!(first, second);
    assert_eq!(first, vec!["The Dispossessed".to_string()]);
}

#[test]
fn test_dune_scenario() {
    let catalog = bookshelf::catalog::Catalog::new(
        vec![
            common::book("x1", "Dune Messiah", "a1", &["g1"]),
            common::book("x2", "The Hobbit", "a2", &["g2"]),
        ],
        common::authors(),
        common::genres(),
    )
    .unwrap();

    let mut controller = CatalogController::new(catalog, 36).unwrap();
    controller.initialize(ColorScheme::Light);
    controller.apply_filters(&FilterCriteria {
        genre: Selection::Any,
        title: "dune".to_string(),
        author: Selection::Any,
    });

    assert_eq!(titles(&controller), vec!["Dune Messiah".to_string()]);
}

#[test]
fn test_author_and_genre_filters_combine() {
    let mut controller = CatalogController::new(common::small_catalog(), 36).unwrap();
    controller.initialize(ColorScheme::Light);

    controller.apply_filters(&FilterCriteria {
        genre: Selection::Id("g2".to_string()),
        title: String::new(),
        author: Selection::Id("a3".to_string()),
    });

    assert_eq!(titles(&controller), vec!["A Wizard of Earthsea".to_string()]);
}

#[test]
fn test_unknown_genre_yields_empty_result_and_message() {
    let mut controller = CatalogController::new(common::small_catalog(), 36).unwrap();
    controller.initialize(ColorScheme::Light);

    controller.apply_filters(&FilterCriteria {
        genre: Selection::Id("no-such-genre".to_string()),
        ..Default::default()
    });

    assert_eq!(controller.result_len(), 0);
    assert!(controller.rendered().is_empty());
    assert!(controller.empty_message_visible());
    assert!(controller.show_more_control().disabled);
    assert_eq!(controller.show_more_control().label(), "Show more (0)");

    controller.apply_filters(&FilterCriteria::any());
    assert!(!controller.empty_message_visible());
}

use std::fs;
use std::path::PathBuf;

use bookshelf::browser::ThemePreference;
use bookshelf::cli::commands::load_settings;
use bookshelf::config::loader::parse_settings;
use bookshelf::config::{Settings, SettingsLoader, SettingsOverrides};
use bookshelf::BookshelfError;
use pretty_assertions::assert_eq;
use tempfile::tempdir;

#[test]
fn test_load_settings_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    fs::write(
        &path,
        "page_size: 12\ntheme: night\ndataset: /srv/books.json\n",
    )
    .unwrap();

    let settings = SettingsLoader::with_path(&path).load().unwrap();
    assert_eq!(
        settings,
        Settings {
            page_size: 12,
            theme: ThemePreference::Night,
            dataset: Some(PathBuf::from("/srv/books.json")),
        }
    );
}

#[test]
fn test_partial_file_keeps_defaults() {
    let settings = parse_settings("theme: day\n").unwrap();
    assert_eq!(settings.page_size, 36);
    assert_eq!(settings.theme, ThemePreference::Day);

    assert_eq!(parse_settings("").unwrap(), Settings::default());
}

#[test]
fn test_invalid_settings_are_rejected() {
    assert!(parse_settings("page_size: 0\n").is_err());
    assert!(parse_settings("theme: sepia\n").is_err());
    assert!(parse_settings("colour: blue\n").is_err());
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let dir = tempdir().unwrap();
    let err = SettingsLoader::with_path(dir.path().join("absent.yaml"))
        .load()
        .unwrap_err();
    assert!(matches!(err, BookshelfError::Config(_)));
}

#[test]
fn test_command_line_overrides_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    fs::write(&path, "page_size: 12\ntheme: night\n").unwrap();

    let settings = load_settings(
        Some(&path),
        SettingsOverrides {
            page_size: Some(5),
            theme: None,
            dataset: None,
        },
    )
    .unwrap();

    assert_eq!(settings.page_size, 5);
    assert_eq!(settings.theme, ThemePreference::Night);
}

#[test]
fn test_zero_page_size_override_fails_validation() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    fs::write(&path, "").unwrap();

    let result = load_settings(
        Some(&path),
        SettingsOverrides {
            page_size: Some(0),
            ..Default::default()
        },
    );
    assert!(matches!(result, Err(BookshelfError::Config(_))));
}

//! Dataset loading. The catalog is read once at startup and never written.

use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use super::types::{Book, Catalog, NameTable};
use crate::{BookshelfError, Result};

/// Sample dataset compiled into the binary
const BUNDLED_DATASET: &str = include_str!("../../data/books.json");

/// On-disk dataset layout
#[derive(Debug, Deserialize)]
struct DatasetFile {
    books: Vec<Book>,
    #[serde(default)]
    authors: NameTable,
    #[serde(default)]
    genres: NameTable,
}

/// Parse a dataset from its JSON text
pub fn parse_catalog(contents: &str) -> Result<Catalog> {
    let dataset: DatasetFile = serde_json::from_str(contents)?;
    debug!(
        books = dataset.books.len(),
        authors = dataset.authors.len(),
        genres = dataset.genres.len(),
        "Parsed dataset"
    );
    Catalog::new(dataset.books, dataset.authors, dataset.genres)
}

/// Load a dataset from a JSON file
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|e| {
        BookshelfError::Dataset(format!("Failed to read dataset {}: {}", path.display(), e))
    })?;

    let catalog = parse_catalog(&contents).map_err(|e| {
        BookshelfError::Dataset(format!("Failed to parse dataset {}: {}", path.display(), e))
    })?;

    info!("Loaded {} books from {}", catalog.len(), path.display());
    Ok(catalog)
}

/// The sample dataset shipped with the crate
pub fn bundled() -> Result<Catalog> {
    parse_catalog(BUNDLED_DATASET)
}

/// Load from `path` when given, otherwise fall back to the bundled dataset
pub fn load_or_bundled(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => load_catalog(path),
        None => {
            info!("No dataset configured, using bundled sample");
            bundled()
        }
    }
}

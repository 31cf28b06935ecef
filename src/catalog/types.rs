use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{BookshelfError, Result};

/// Display name used when a book references an author missing from the table
pub const UNKNOWN_AUTHOR: &str = "Unknown Author";

/// A single catalog entry. Created once at load and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    #[serde(default)]
    pub title: String,
    /// Key into the author table
    #[serde(rename = "author")]
    pub author_id: String,
    /// Absent values stay empty; the preview card substitutes its fallbacks
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub description: String,
    #[serde(with = "published_date")]
    pub published: NaiveDate,
    /// Keys into the genre table
    #[serde(rename = "genres", default)]
    pub genre_ids: Vec<String>,
}

impl Book {
    pub fn published_year(&self) -> i32 {
        self.published.year()
    }

    pub fn has_genre(&self, genre_id: &str) -> bool {
        self.genre_ids.iter().any(|g| g == genre_id)
    }
}

/// Accepts either a full RFC 3339 timestamp or a bare `YYYY-MM-DD` date.
mod published_date {
    use chrono::{DateTime, NaiveDate};
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&date.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if let Ok(timestamp) = DateTime::parse_from_rfc3339(&raw) {
            return Ok(timestamp.date_naive());
        }
        NaiveDate::parse_from_str(&raw, FORMAT)
            .map_err(|e| serde::de::Error::custom(format!("invalid published date '{}': {}", raw, e)))
    }
}

/// Id -> display name mapping that keeps the order entries were declared in.
///
/// Select lists are populated in table order, so a sorted map would not do.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NameTable(IndexMap<String, String>);

impl NameTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an entry. Replacing keeps the first position.
    pub fn insert(&mut self, id: impl Into<String>, name: impl Into<String>) {
        self.0.insert(id.into(), name.into());
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.0.get(id).map(String::as_str)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(id, name)| (id.as_str(), name.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<I, N> FromIterator<(I, N)> for NameTable
where
    I: Into<String>,
    N: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (I, N)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(id, name)| (id.into(), name.into())).collect())
    }
}

/// The full, read-only dataset: books plus the author and genre tables.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    books: Vec<Book>,
    authors: NameTable,
    genres: NameTable,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate book ids.
    pub fn new(books: Vec<Book>, authors: NameTable, genres: NameTable) -> Result<Self> {
        let mut seen = HashSet::new();
        for book in &books {
            if !seen.insert(book.id.as_str()) {
                return Err(BookshelfError::Dataset(format!(
                    "duplicate book id '{}'",
                    book.id
                )));
            }
        }

        Ok(Self {
            books,
            authors,
            genres,
        })
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn authors(&self) -> &NameTable {
        &self.authors
    }

    pub fn genres(&self) -> &NameTable {
        &self.genres
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Look a book up by id in the full catalog
    pub fn find(&self, id: &str) -> Option<&Book> {
        self.books.iter().find(|book| book.id == id)
    }

    pub fn author_name(&self, author_id: &str) -> &str {
        self.authors.get(author_id).unwrap_or(UNKNOWN_AUTHOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_table_replace_keeps_position() {
        let mut table: NameTable = [("g1", "Sci-Fi"), ("g2", "Fantasy")].into_iter().collect();
        table.insert("g1", "Science Fiction");
        table.insert("g3", "Horror");

        let entries: Vec<(&str, &str)> = table.iter().collect();
        assert_eq!(
            entries,
            vec![("g1", "Science Fiction"), ("g2", "Fantasy"), ("g3", "Horror")]
        );
        assert!(table.contains("g3"));
        assert_eq!(table.get("missing"), None);
    }

    #[test]
    fn test_name_table_serializes_as_ordered_map() {
        let table: NameTable = serde_json::from_str(r#"{"z": "Zed", "a": "Ay"}"#).unwrap();
        assert_eq!(serde_json::to_string(&table).unwrap(), r#"{"z":"Zed","a":"Ay"}"#);
    }
}

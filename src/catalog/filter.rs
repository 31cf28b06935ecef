use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::types::{Book, Catalog};

/// Sentinel value meaning "no restriction" for a select field
pub const ANY: &str = "any";

/// A select-list choice: either the "any" sentinel or a concrete table id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Selection {
    #[default]
    Any,
    Id(String),
}

impl Selection {
    pub fn parse(value: &str) -> Self {
        if value == ANY {
            Selection::Any
        } else {
            Selection::Id(value.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Selection::Any => ANY,
            Selection::Id(id) => id,
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Selection::Any)
    }
}

impl From<String> for Selection {
    fn from(value: String) -> Self {
        Selection::parse(&value)
    }
}

impl From<Selection> for String {
    fn from(selection: Selection) -> Self {
        selection.as_str().to_string()
    }
}

/// Criteria collected from one search submission. All three must hold.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(default)]
    pub genre: Selection,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: Selection,
}

impl FilterCriteria {
    /// Criteria that match every book
    pub fn any() -> Self {
        Self::default()
    }

    /// Build criteria from a submitted form mapping. Absent fields are
    /// unrestricted.
    pub fn from_form(form: &BTreeMap<String, String>) -> Self {
        Self {
            genre: form.get("genre").map(|v| Selection::parse(v)).unwrap_or_default(),
            title: form.get("title").cloned().unwrap_or_default(),
            author: form.get("author").map(|v| Selection::parse(v)).unwrap_or_default(),
        }
    }

    /// Flatten back into the form mapping shape
    pub fn to_form(&self) -> BTreeMap<String, String> {
        BTreeMap::from([
            ("genre".to_string(), self.genre.as_str().to_string()),
            ("title".to_string(), self.title.clone()),
            ("author".to_string(), self.author.as_str().to_string()),
        ])
    }

    pub fn matches(&self, book: &Book) -> bool {
        let genre_match = match &self.genre {
            Selection::Any => true,
            Selection::Id(id) => book.has_genre(id),
        };

        let title_match = self.title.trim().is_empty()
            || book
                .title
                .to_lowercase()
                .contains(&self.title.to_lowercase());

        let author_match = match &self.author {
            Selection::Any => true,
            Selection::Id(id) => book.author_id == *id,
        };

        genre_match && title_match && author_match
    }

    /// Positions of matching books, in catalog order
    pub fn apply(&self, catalog: &Catalog) -> Vec<usize> {
        catalog
            .books()
            .iter()
            .enumerate()
            .filter(|(_, book)| self.matches(book))
            .map(|(idx, _)| idx)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::NameTable;
    use chrono::NaiveDate;

    fn book(id: &str, title: &str, author: &str, genres: &[&str]) -> Book {
        Book {
            id: id.to_string(),
            title: title.to_string(),
            author_id: author.to_string(),
            image: format!("https://covers.example/{}.jpg", id),
            description: String::new(),
            published: NaiveDate::from_ymd_opt(1965, 8, 1).unwrap(),
            genre_ids: genres.iter().map(|g| g.to_string()).collect(),
        }
    }

    fn catalog() -> Catalog {
        let authors: NameTable = [("a1", "Frank Herbert"), ("a2", "J.R.R. Tolkien")]
            .into_iter()
            .collect();
        let genres: NameTable = [("g1", "Science Fiction"), ("g2", "Fantasy")]
            .into_iter()
            .collect();
        Catalog::new(
            vec![
                book("b1", "Dune Messiah", "a1", &["g1"]),
                book("b2", "The Hobbit", "a2", &["g2"]),
                book("b3", "Children of Dune", "a1", &["g1", "g2"]),
            ],
            authors,
            genres,
        )
        .unwrap()
    }

    #[test]
    fn test_selection_parse() {
        assert_eq!(Selection::parse("any"), Selection::Any);
        assert_eq!(Selection::parse("g1"), Selection::Id("g1".to_string()));
        assert_eq!(Selection::Id("g1".to_string()).as_str(), "g1");
    }

    #[test]
    fn test_any_criteria_keeps_catalog_order() {
        assert_eq!(FilterCriteria::any().apply(&catalog()), vec![0, 1, 2]);
    }

    #[test]
    fn test_title_is_case_insensitive() {
        let criteria = FilterCriteria {
            title: "dUNE".to_string(),
            ..Default::default()
        };
        assert_eq!(criteria.apply(&catalog()), vec![0, 2]);
    }

    #[test]
    fn test_whitespace_title_is_unrestricted() {
        let criteria = FilterCriteria {
            title: "   ".to_string(),
            ..Default::default()
        };
        assert_eq!(criteria.apply(&catalog()).len(), 3);
    }

    #[test]
    fn test_all_three_must_hold() {
        let criteria = FilterCriteria {
            genre: Selection::Id("g2".to_string()),
            title: "dune".to_string(),
            author: Selection::Id("a1".to_string()),
        };
        assert_eq!(criteria.apply(&catalog()), vec![2]);
    }

    #[test]
    fn test_unknown_ids_filter_to_empty() {
        let criteria = FilterCriteria {
            genre: Selection::Id("nope".to_string()),
            ..Default::default()
        };
        assert!(criteria.apply(&catalog()).is_empty());

        let criteria = FilterCriteria {
            author: Selection::Id("nobody".to_string()),
            ..Default::default()
        };
        assert!(criteria.apply(&catalog()).is_empty());
    }

    #[test]
    fn test_from_form_defaults_missing_fields() {
        let mut form = BTreeMap::new();
        form.insert("title".to_string(), "hobbit".to_string());
        let criteria = FilterCriteria::from_form(&form);
        assert_eq!(criteria.genre, Selection::Any);
        assert_eq!(criteria.author, Selection::Any);
        assert_eq!(criteria.title, "hobbit");
        assert_eq!(FilterCriteria::from_form(&criteria.to_form()), criteria);
    }
}

//! Shared fixtures for integration tests

#![allow(dead_code)]

use bookshelf::catalog::{Book, Catalog, NameTable};
use chrono::NaiveDate;

pub fn book(id: &str, title: &str, author: &str, genres: &[&str]) -> Book {
    Book {
        id: id.to_string(),
        title: title.to_string(),
        author_id: author.to_string(),
        image: format!("https://covers.example/{}.jpg", id),
        description: format!("About {}", title),
        published: NaiveDate::from_ymd_opt(1965, 8, 1).unwrap(),
        genre_ids: genres.iter().map(|g| g.to_string()).collect(),
    }
}

pub fn authors() -> NameTable {
    [("a1", "Frank Herbert"), ("a2", "J.R.R. Tolkien"), ("a3", "Ursula K. Le Guin")]
        .into_iter()
        .collect()
}

pub fn genres() -> NameTable {
    [("g1", "Science Fiction"), ("g2", "Fantasy")]
        .into_iter()
        .collect()
}

/// A small catalog with recognisable titles
pub fn small_catalog() -> Catalog {
    Catalog::new(
        vec![
            book("b1", "Dune Messiah", "a1", &["g1"]),
            book("b2", "The Hobbit", "a2", &["g2"]),
            book("b3", "Children of Dune", "a1", &["g1"]),
            book("b4", "A Wizard of Earthsea", "a3", &["g2"]),
            book("b5", "The Dispossessed", "a3", &["g1"]),
        ],
        authors(),
        genres(),
    )
    .unwrap()
}

/// `n` generated books cycling through the three authors
pub fn numbered_catalog(n: usize) -> Catalog {
    let books = (0..n)
        .map(|i| {
            let author = ["a1", "a2", "a3"][i % 3];
            let genre = ["g1", "g2"][i % 2];
            book(&format!("n{:03}", i), &format!("Volume {}", i), author, &[genre])
        })
        .collect();
    Catalog::new(books, authors(), genres()).unwrap()
}

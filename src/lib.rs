pub mod browser;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;

pub use error::{BookshelfError, Result};

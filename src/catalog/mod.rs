//! Read-only book catalog: the dataset tables and the filter rules applied
//! to them.

pub mod filter;
pub mod loader;
pub mod types;

pub use filter::{FilterCriteria, Selection, ANY};
pub use types::{Book, Catalog, NameTable};

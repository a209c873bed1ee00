//! Tag catalog for the tagdex autocomplete index.
//!
//! A catalog is an ordered, immutable list of tags built once from a
//! delimited table. Order is significant: it defines scan order and thus
//! how pages are cut by the search crate.

pub mod catalog;
pub mod error;
pub mod types;

pub use catalog::{Catalog, LoadReport};
pub use error::{LoadError, RowError};
pub use types::{Tag, TagName, TagNameError, normalize_alias};

//! Tagdex paged autocomplete search.
//!
//! Scans a [`tagdex_core::Catalog`] for tags whose name, or failing that one
//! of whose aliases, matches a query, and returns bounded pages of matches.
//!
//! # Design
//!
//! - A `QuerySession` holds the scan cursor. A new query restarts at the
//!   first tag; a continuation resumes right after the tag that ended the
//!   previous page, so paging through a large result set never rescans.
//! - Exhausted sessions stay exhausted until the next new query.
//! - `Autocomplete` owns the catalog behind an `Arc` plus a default session.
//!
//! # API
//!
//! - `load()`: Replaces the catalog and selects the match policy
//! - `query()`: Returns the next `Page` for a query
//! - `Page::to_json()`: Serializes matches for a host

mod config;
mod engine;
mod query;
mod results;
mod session;

pub use config::{ConfigError, MatchPolicy, SearchConfig};
pub use engine::Autocomplete;
pub use query::current_term;
pub use results::{Highlight, Match, Page};
pub use session::{QuerySession, ScanState};

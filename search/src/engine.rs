//! Autocomplete engine: the current catalog plus a default query session.

use crate::config::{MatchPolicy, SearchConfig};
use crate::results::Page;
use crate::session::QuerySession;
use std::sync::Arc;
use tagdex_core::{Catalog, LoadError, LoadReport};

/// Holds the loaded catalog and a default session for single-caller hosts.
///
/// The catalog sits behind an `Arc`: a reload builds the new catalog fully
/// and then swaps the pointer, so sessions holding the previous snapshot
/// keep working against it.
pub struct Autocomplete {
    catalog: Arc<Catalog>,
    config: SearchConfig,
    session: QuerySession,
}

impl Default for Autocomplete {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

/// Create operations.
impl Autocomplete {
    /// Creates an engine with an empty catalog.
    pub fn new(config: SearchConfig) -> Self {
        Self::with_catalog(Catalog::default(), config)
    }

    pub fn with_catalog(catalog: Catalog, config: SearchConfig) -> Self {
        let config = config.with_defaults_for_invalid();

        Self {
            catalog: Arc::new(catalog),
            session: QuerySession::new(config.clone()),
            config,
        }
    }
}

/// Load operations.
impl Autocomplete {
    /// Replaces the catalog with one parsed from `raw`, dropping malformed rows.
    ///
    /// A positive `match_start` selects prefix matching, anything else
    /// substring matching. The default session is reset.
    pub fn load(&mut self, raw: &str, match_start: i32) -> LoadReport {
        let (catalog, report) = Catalog::parse(raw);
        self.config.policy = MatchPolicy::from_match_start(match_start);
        self.replace_catalog(catalog);

        if report.dropped_rows > 0 {
            tracing::warn!(
                dropped_rows = report.dropped_rows,
                "tag table contained malformed rows"
            );
        }
        report
    }

    /// Like `load`, but rejects the table on the first malformed row.
    ///
    /// On error the current catalog and policy are left untouched.
    pub fn load_strict(&mut self, raw: &str, match_start: i32) -> Result<usize, LoadError> {
        let catalog = Catalog::parse_strict(raw)?;
        let tags = catalog.len();
        self.config.policy = MatchPolicy::from_match_start(match_start);
        self.replace_catalog(catalog);
        Ok(tags)
    }

    /// Swaps in a new catalog and resets the default session.
    pub fn replace_catalog(&mut self, catalog: Catalog) {
        self.catalog = Arc::new(catalog);
        self.session = QuerySession::new(self.config.clone());
        tracing::debug!(
            tags = self.catalog.len(),
            policy = ?self.config.policy,
            "catalog replaced"
        );
    }
}

/// Search operations.
impl Autocomplete {
    /// Returns the next page for `text` from the default session.
    pub fn query(&mut self, text: &str, new_query: bool) -> Page<'_> {
        self.session.next_page(&self.catalog, text, new_query)
    }

    /// `query`, serialized as a JSON array of matches.
    pub fn query_json(&mut self, text: &str, new_query: bool) -> serde_json::Result<String> {
        self.query(text, new_query).to_json()
    }

    /// Returns true if the default session has scanned to the end of the catalog.
    pub fn is_exhausted(&self) -> bool {
        self.session.is_exhausted()
    }

    /// Creates an independent session using the current search config.
    ///
    /// Pair it with `catalog()` to page through the current snapshot without
    /// touching the default session.
    pub fn session(&self) -> QuerySession {
        QuerySession::new(self.config.clone())
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

//! Resumable paged scan over a catalog.

use crate::config::SearchConfig;
use crate::results::{Match, Page};
use tagdex_core::{Catalog, Tag};

/// Where the next query call starts scanning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScanState {
    /// Start at the first tag.
    #[default]
    Fresh,
    /// Resume at tag `next`, skipping the first `aliases_emitted` qualifying
    /// aliases of that tag (non-zero only when a page filled up in the middle
    /// of a tag's alias matches).
    Resuming { next: usize, aliases_emitted: usize },
    /// The catalog was scanned to the end; continuations return nothing.
    Exhausted,
}

/// One caller's query session: the cursor plus the search config it scans with.
///
/// Sessions do not own the catalog, so any number of them can page through
/// the same catalog independently.
#[derive(Debug, Clone, Default)]
pub struct QuerySession {
    config: SearchConfig,
    state: ScanState,
}

impl QuerySession {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config: config.with_defaults_for_invalid(),
            state: ScanState::Fresh,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    pub fn is_exhausted(&self) -> bool {
        self.state == ScanState::Exhausted
    }

    /// Forgets the cursor; the next page starts at the first tag.
    pub fn reset(&mut self) {
        self.state = ScanState::Fresh;
    }

    /// Returns the next page of matches for `query`.
    ///
    /// With `new_query` the scan restarts at the first tag, otherwise it
    /// resumes right after the last tag that ended the previous page. The
    /// query is compared as given, without any normalization.
    pub fn next_page<'c>(&mut self, catalog: &'c Catalog, query: &str, new_query: bool) -> Page<'c> {
        if new_query {
            self.reset();
        }

        if catalog.is_empty() {
            return Page::empty(true);
        }

        let (start, mut skip_aliases) = match self.state {
            ScanState::Fresh => (0, 0),
            ScanState::Resuming {
                next,
                aliases_emitted,
            } => (next, aliases_emitted),
            ScanState::Exhausted => return Page::empty(true),
        };

        let page_size = self.config.page_size;
        let mut matches = Vec::with_capacity(page_size.min(catalog.len()));

        for (index, tag) in catalog.iter().enumerate().skip(start) {
            let skip = std::mem::take(&mut skip_aliases);

            if let Some(emitted) = self.scan_tag(tag, query, skip, &mut matches) {
                // Page filled before this tag's alias matches were all emitted.
                self.state = ScanState::Resuming {
                    next: index,
                    aliases_emitted: emitted,
                };
                return self.finish(start, query, matches, false);
            }

            if matches.len() >= page_size {
                self.state = ScanState::Resuming {
                    next: index + 1,
                    aliases_emitted: 0,
                };
                return self.finish(start, query, matches, false);
            }
        }

        self.state = ScanState::Exhausted;
        self.finish(start, query, matches, true)
    }

    /// Emits the matches for one tag into `matches`.
    ///
    /// A direct match on the name wins; otherwise up to
    /// `alias_matches_per_tag` qualifying aliases are emitted in order, after
    /// skipping the `skip` already emitted on a previous page. Returns the
    /// number of this tag's alias matches emitted so far if the page filled
    /// up while more remained.
    fn scan_tag<'c>(
        &self,
        tag: &'c Tag,
        query: &str,
        skip: usize,
        matches: &mut Vec<Match<'c>>,
    ) -> Option<usize> {
        let policy = self.config.policy;

        if skip == 0 && policy.accepts(tag.name(), query) {
            matches.push(Match::direct(tag));
            return None;
        }

        let qualifying = tag
            .aliases()
            .iter()
            .filter(|alias| policy.accepts(alias, query))
            .skip(skip)
            .take(self.config.alias_matches_per_tag.saturating_sub(skip));

        let mut emitted = skip;
        for alias in qualifying {
            if matches.len() >= self.config.page_size {
                return Some(emitted);
            }
            matches.push(Match::alias(tag, alias));
            emitted += 1;
        }

        None
    }

    fn finish<'c>(
        &self,
        start: usize,
        query: &str,
        matches: Vec<Match<'c>>,
        exhausted: bool,
    ) -> Page<'c> {
        tracing::trace!(
            query,
            start,
            matches = matches.len(),
            state = ?self.state,
            "scanned page"
        );
        Page { matches, exhausted }
    }
}

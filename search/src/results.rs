//! Search results types.

use crate::config::MatchPolicy;
use serde::Serialize;
use tagdex_core::Tag;

/// One emitted match, borrowing from the catalog it was found in.
///
/// Serializes as `{"name": .., "aliased_tag": .., "images": ..}`, with
/// `aliased_tag` null for a direct match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Match<'a> {
    pub name: &'a str,
    pub aliased_tag: Option<&'a str>,
    pub images: &'a str,
}

impl<'a> Match<'a> {
    pub(crate) fn direct(tag: &'a Tag) -> Self {
        Self {
            name: tag.name(),
            aliased_tag: None,
            images: tag.images(),
        }
    }

    pub(crate) fn alias(tag: &'a Tag, alias: &'a str) -> Self {
        Self {
            name: tag.name(),
            aliased_tag: Some(alias),
            images: tag.images(),
        }
    }

    pub fn is_alias(&self) -> bool {
        self.aliased_tag.is_some()
    }

    /// The text the query matched: the alias for alias matches, else the name.
    pub fn matched_text(&self) -> &'a str {
        self.aliased_tag.unwrap_or(self.name)
    }

    /// Splits the matched text around the first occurrence of `query`.
    ///
    /// Returns `None` when `query` does not match under `policy`.
    pub fn highlight(&self, query: &str, policy: MatchPolicy) -> Option<Highlight<'a>> {
        let text = self.matched_text();
        let start = match policy {
            MatchPolicy::Any => text.find(query)?,
            MatchPolicy::Prefix => {
                text.strip_prefix(query)?;
                0
            }
        };
        let end = start + query.len();

        Some(Highlight {
            before: &text[..start],
            matched: &text[start..end],
            after: &text[end..],
        })
    }
}

/// Matched text split for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Highlight<'a> {
    pub before: &'a str,
    pub matched: &'a str,
    pub after: &'a str,
}

/// One page of matches in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page<'a> {
    pub(crate) matches: Vec<Match<'a>>,
    pub(crate) exhausted: bool,
}

impl<'a> Page<'a> {
    pub(crate) fn empty(exhausted: bool) -> Self {
        Self {
            matches: Vec::new(),
            exhausted,
        }
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// True when a continuation call cannot return anything more.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    pub fn iter(&self) -> impl Iterator<Item = &Match<'a>> + '_ {
        self.matches.iter()
    }

    pub fn matches(&self) -> &[Match<'a>] {
        &self.matches
    }

    pub fn into_matches(self) -> Vec<Match<'a>> {
        self.matches
    }

    /// Serializes the matches as a JSON array; an empty page is `[]`.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.matches)
    }
}

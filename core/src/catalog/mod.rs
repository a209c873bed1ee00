//! Ordered, immutable tag catalog.
//!
//! Built once per load. A reload builds a fresh `Catalog` and the owner swaps
//! it in whole; there is no partial update.

use crate::types::Tag;
use serde::Serialize;
use std::slice;

mod parse;

/// Row accounting for one load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    /// Tags appended to the catalog.
    pub tags: usize,
    /// Empty lines, skipped without complaint.
    pub blank_rows: usize,
    /// Non-empty rows that could not form a tag.
    pub dropped_rows: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    tags: Vec<Tag>,
}

/// Create operations.
impl Catalog {
    /// Builds a catalog from rows of fields, keeping input order.
    ///
    /// Rows that cannot form a tag are dropped silently. No deduplication is
    /// done; two rows with the same name produce two tags.
    pub fn from_rows<I, R, S>(rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let tags = rows
            .into_iter()
            .filter_map(|row| Tag::from_fields(row.as_ref()).ok())
            .collect();

        Self { tags }
    }

    pub fn from_tags(tags: Vec<Tag>) -> Self {
        Self { tags }
    }
}

/// Read operations.
impl Catalog {
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Tag> {
        self.tags.get(index)
    }

    pub fn iter(&self) -> slice::Iter<'_, Tag> {
        self.tags.iter()
    }

    pub fn as_slice(&self) -> &[Tag] {
        &self.tags
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Tag;
    type IntoIter = slice::Iter<'a, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.tags.iter()
    }
}

#[cfg(test)]
mod tests;

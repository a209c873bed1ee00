//! Delimited table ingestion: one tag per line, fields separated by `,`.
//!
//! No quoting or escaping is understood. A `"` inside a field is data; alias
//! normalization strips it afterwards.

use super::{Catalog, LoadReport};
use crate::error::{LoadError, RowError};
use crate::types::Tag;
use std::convert::Infallible;

const FIELD_SEPARATOR: char = ',';

impl Catalog {
    /// Parses a raw table, dropping malformed rows.
    ///
    /// Never fails. The report says how many rows were dropped, so an empty
    /// source can be told apart from one where every row was malformed.
    pub fn parse(raw: &str) -> (Self, LoadReport) {
        let Ok(parsed) = parse_table(raw, |line, error| {
            tracing::debug!(line, %error, "dropping malformed row");
            Ok::<_, Infallible>(())
        });
        parsed
    }

    /// Parses a raw table, failing on the first malformed row.
    pub fn parse_strict(raw: &str) -> Result<Self, LoadError> {
        let (catalog, _) = parse_table(raw, |line, source| {
            Err(LoadError::MalformedRow { line, source })
        })?;
        Ok(catalog)
    }
}

/// Splits `raw` into rows and fields and builds tags in input order.
///
/// `on_malformed` receives the 1-based line number of every row that cannot
/// form a tag; returning an error aborts the whole parse.
fn parse_table<E>(
    raw: &str,
    mut on_malformed: impl FnMut(usize, RowError) -> Result<(), E>,
) -> Result<(Catalog, LoadReport), E> {
    let mut tags = Vec::new();
    let mut report = LoadReport::default();
    let mut fields: Vec<&str> = Vec::new();

    // `lines` drops the `\r` of a `\r\n` ending and keeps an unterminated last row.
    for (index, row) in raw.lines().enumerate() {
        if row.is_empty() {
            report.blank_rows += 1;
            continue;
        }

        fields.clear();
        fields.extend(row.split(FIELD_SEPARATOR));

        match Tag::from_fields(&fields) {
            Ok(tag) => tags.push(tag),
            Err(error) => {
                on_malformed(index + 1, error)?;
                report.dropped_rows += 1;
            }
        }
    }

    report.tags = tags.len();
    tracing::debug!(
        tags = report.tags,
        blank_rows = report.blank_rows,
        dropped_rows = report.dropped_rows,
        "parsed tag table"
    );

    Ok((Catalog::from_tags(tags), report))
}

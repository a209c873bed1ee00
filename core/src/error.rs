use thiserror::Error;

/// Why a single table row could not become a tag.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RowError {
    #[error("row has {found} field(s), at least 2 required")]
    TooFewFields { found: usize },

    #[error("tag name is empty")]
    EmptyName,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("malformed row at line {line}: {source}")]
    MalformedRow {
        line: usize,
        #[source]
        source: RowError,
    },
}

use nutype::nutype;

/// Primary name of a tag.
///
/// Lowercased (ASCII only) on construction, so every comparison against a
/// catalog entry is case-insensitive without touching the query.
#[nutype(
    sanitize(with = |s: String| s.to_ascii_lowercase()),
    validate(not_empty),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        AsRef,
        Deref,
        TryFrom,
        Display,
        Serialize,
    )
)]
pub struct TagName(String);

#[cfg(test)]
mod tests;

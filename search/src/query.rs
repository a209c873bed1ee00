//! Turning raw search-box input into an engine query.

/// Extracts the term being typed from a comma-separated search box value.
///
/// Takes the last segment, trims it and lowercases it (ASCII). The engine
/// never normalizes queries itself, so hosts pass the result of this
/// function to match the normalized catalog.
pub fn current_term(input: &str) -> String {
    input
        .rsplit(',')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

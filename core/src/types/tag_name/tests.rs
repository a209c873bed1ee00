use super::*;

#[test]
fn tag_name_is_lowercased() {
    let name = TagName::try_new("Twilight Sparkle".to_string()).unwrap();
    assert_eq!(name.as_str(), "twilight sparkle");
}

#[test]
fn tag_name_only_folds_ascii() {
    let name = TagName::try_new("ÉCLAIR".to_string()).unwrap();
    assert_eq!(name.as_str(), "Éclair");
}

#[test]
fn tag_name_keeps_quotes() {
    let name = TagName::try_new("\"Quoted\"".to_string()).unwrap();
    assert_eq!(name.as_str(), "\"quoted\"");
}

#[test]
fn tag_name_rejects_empty_string() {
    let result = TagName::try_from("");
    result.unwrap_err();
}

#[test]
fn tag_name_allows_whitespace() {
    // Names are not trimmed; whitespace is part of the stored name.
    let name = TagName::try_from(" ").unwrap();
    assert_eq!(name.as_str(), " ");
}

use tagdex_core::{Catalog, LoadReport, Tag, TagName, normalize_alias};

/// Stored names equal the field lowercased; stored aliases are lowercased with `"` removed.
#[test]
fn test_ingested_fields_are_normalized() {
    let rows = [
        ["Apple Jack", "10", "\"AJ\"", "Applejack"],
        ["FLUTTERSHY", "20", "Shy\"\"", "\"Flutters\""],
    ];
    let catalog = Catalog::from_rows(rows);

    for (row, tag) in rows.iter().zip(catalog.iter()) {
        assert_eq!(tag.name(), row[0].to_ascii_lowercase());
        assert_eq!(tag.images(), row[1]);
        let expected: Vec<String> = row[2..]
            .iter()
            .map(|field| field.to_ascii_lowercase().replace('"', ""))
            .collect();
        assert_eq!(tag.aliases(), expected.as_slice());
    }
}

/// Verify a table with a malformed row still loads every other row.
#[test]
fn test_single_corrupt_row_does_not_abort_load() {
    let table = "safe,100\nexplicit\nsuggestive,50,lewd\n";
    let (catalog, report) = Catalog::parse(table);

    assert_eq!(catalog.len(), 2);
    assert_eq!(
        report,
        LoadReport {
            tags: 2,
            blank_rows: 0,
            dropped_rows: 1,
        }
    );
}

/// Verify a catalog can be assembled from prebuilt tags.
#[test]
fn test_catalog_from_tags() {
    let tag = Tag::new(
        TagName::try_from("Solo").unwrap(),
        "7",
        vec![normalize_alias("\"Alone\"")],
    );
    let catalog = Catalog::from_tags(vec![tag]);

    let stored = catalog.get(0).unwrap();
    assert_eq!(stored.name(), "solo");
    assert_eq!(stored.aliases(), ["alone"]);
}

/// Verify the load report serializes with stable field names.
#[test]
fn test_load_report_serializes() {
    let report = LoadReport {
        tags: 3,
        blank_rows: 1,
        dropped_rows: 2,
    };

    let json = serde_json::to_string(&report).unwrap();
    assert_eq!(json, r#"{"tags":3,"blank_rows":1,"dropped_rows":2}"#);
}

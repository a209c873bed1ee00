use super::*;
use crate::error::{LoadError, RowError};

mod common {
    use super::*;

    pub(super) fn names(catalog: &Catalog) -> Vec<&str> {
        catalog.iter().map(Tag::name).collect()
    }
}

mod from_rows {
    use super::common::names;
    use super::*;

    #[test]
    fn test_from_rows_keeps_input_order() {
        let catalog = Catalog::from_rows([
            vec!["zebra", "1"],
            vec!["apple", "2"],
            vec!["mango", "3"],
        ]);

        assert_eq!(names(&catalog), ["zebra", "apple", "mango"]);
    }

    #[test]
    fn test_from_rows_lowercases_name_and_keeps_images_verbatim() {
        let catalog = Catalog::from_rows([["Rainbow Dash", "IMG \"x\""]]);

        let tag = catalog.get(0).unwrap();
        assert_eq!(tag.name(), "rainbow dash");
        assert_eq!(tag.images(), "IMG \"x\"");
        assert!(tag.aliases().is_empty());
    }

    #[test]
    fn test_from_rows_normalizes_aliases() {
        let catalog = Catalog::from_rows([["pony", "5", "\"Horse\"", "EQUINE"]]);

        assert_eq!(catalog.get(0).unwrap().aliases(), ["horse", "equine"]);
    }

    #[test]
    fn test_from_rows_stops_aliases_at_first_empty_field() {
        let catalog = Catalog::from_rows([["tag", "0", "A", "", "B"]]);

        assert_eq!(catalog.get(0).unwrap().aliases(), ["a"]);
    }

    #[test]
    fn test_from_rows_leading_empty_alias_means_no_aliases() {
        let catalog = Catalog::from_rows([["tag", "0", "", "b", "c"]]);

        assert!(catalog.get(0).unwrap().aliases().is_empty());
    }

    #[test]
    fn test_from_rows_drops_short_rows() {
        let rows: Vec<Vec<&str>> = vec![vec!["lonely"], vec![], vec!["ok", "1"]];
        let catalog = Catalog::from_rows(rows);

        assert_eq!(names(&catalog), ["ok"]);
    }

    #[test]
    fn test_from_rows_drops_empty_names() {
        let catalog = Catalog::from_rows([["", "1"], ["named", "2"]]);

        assert_eq!(names(&catalog), ["named"]);
    }

    #[test]
    fn test_from_rows_keeps_duplicates() {
        let catalog = Catalog::from_rows([["dup", "1"], ["DUP", "2"]]);

        assert_eq!(names(&catalog), ["dup", "dup"]);
        assert_eq!(catalog.get(1).unwrap().images(), "2");
    }
}

mod parse {
    use super::common::names;
    use super::*;

    #[test]
    fn test_parse_empty_input() {
        let (catalog, report) = Catalog::parse("");

        assert!(catalog.is_empty());
        assert_eq!(report, LoadReport::default());
    }

    #[test]
    fn test_parse_rows_and_fields() {
        let (catalog, report) = Catalog::parse("cat,i1,feline,kitty\ndog,i2\n");

        assert_eq!(names(&catalog), ["cat", "dog"]);
        assert_eq!(catalog.get(0).unwrap().aliases(), ["feline", "kitty"]);
        assert_eq!(report.tags, 2);
        assert_eq!(report.dropped_rows, 0);
    }

    #[test]
    fn test_parse_keeps_unterminated_last_row() {
        let (catalog, _) = Catalog::parse("cat,i1\ndog,i2");

        assert_eq!(names(&catalog), ["cat", "dog"]);
    }

    #[test]
    fn test_parse_strips_crlf() {
        let (catalog, _) = Catalog::parse("cat,i1,Feline\r\ndog,i2\r\n");

        assert_eq!(catalog.get(0).unwrap().aliases(), ["feline"]);
        assert_eq!(catalog.get(1).unwrap().images(), "i2");
    }

    #[test]
    fn test_parse_counts_blank_and_dropped_rows_separately() {
        let (catalog, report) = Catalog::parse("cat,i1\n\nbroken\n,i3\ndog,i2\n");

        assert_eq!(names(&catalog), ["cat", "dog"]);
        assert_eq!(
            report,
            LoadReport {
                tags: 2,
                blank_rows: 1,
                dropped_rows: 2,
            }
        );
    }

    #[test]
    fn test_parse_all_malformed_is_distinguishable_from_empty() {
        let (catalog, report) = Catalog::parse("a\nb\nc\n");

        assert!(catalog.is_empty());
        assert_eq!(report.dropped_rows, 3);
    }

    #[test]
    fn test_parse_trailing_comma_gives_no_alias() {
        let (catalog, _) = Catalog::parse("cat,i1,\n");

        assert!(catalog.get(0).unwrap().aliases().is_empty());
    }
}

mod parse_strict {
    use super::*;

    #[test]
    fn test_parse_strict_accepts_valid_table() {
        let catalog = Catalog::parse_strict("cat,i1\n\ndog,i2\n").unwrap();

        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_parse_strict_reports_line_of_first_malformed_row() {
        let error = Catalog::parse_strict("cat,i1\n\nbroken\nalso broken\n").unwrap_err();

        assert_eq!(
            error,
            LoadError::MalformedRow {
                line: 3,
                source: RowError::TooFewFields { found: 1 },
            }
        );
    }

    #[test]
    fn test_parse_strict_rejects_empty_name() {
        let error = Catalog::parse_strict(",images\n").unwrap_err();

        assert_eq!(
            error,
            LoadError::MalformedRow {
                line: 1,
                source: RowError::EmptyName,
            }
        );
    }
}

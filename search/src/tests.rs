use super::*;
use common::{create_engine, make_record, search, test_config};
use fastsearch_core::{Query, Record};

mod common {
    use super::*;

    pub(super) fn make_record(title: &str, tags: &[&str], content: &str) -> Record {
        Record {
            title: title.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            summary: String::new(),
            content: content.to_string(),
            permalink: format!("/{}/", title.to_lowercase().replace(' ', "-")),
        }
    }

    pub(super) fn test_config() -> SearchConfig {
        SearchConfig::default()
    }

    pub(super) fn create_engine(records: Vec<Record>) -> SearchEngine {
        SearchEngine::new(records, test_config())
    }

    pub(super) fn search<'a>(engine: &'a SearchEngine, query: &str) -> Vec<MatchResult<'a>> {
        engine.search(&Query::from(query))
    }

    pub(super) fn titles(results: &[MatchResult<'_>]) -> Vec<String> {
        results.iter().map(|r| r.record.title.clone()).collect()
    }
}

mod new {
    use super::*;

    #[test]
    fn test_new_keeps_records_in_order() {
        let engine = create_engine(vec![
            make_record("First", &[], ""),
            make_record("Second", &[], ""),
        ]);

        assert_eq!(engine.len(), 2);
        assert_eq!(engine.records()[1].title, "Second");
    }

    #[test]
    fn test_new_empty() {
        let engine = create_engine(vec![]);

        assert!(engine.is_empty());
        assert!(search(&engine, "anything").is_empty());
    }
}

mod search {
    use super::common::titles;
    use super::*;

    fn blog() -> Vec<Record> {
        vec![
            make_record("Hello World", &["intro"], "The very first post."),
            make_record("Async Rust", &["go", "rust"], "Futures and executors."),
            make_record("Gardening", &[], "Tomatoes need sun."),
        ]
    }

    #[test]
    fn test_search_empty_query_matches_nothing() {
        let engine = create_engine(blog());

        assert!(search(&engine, "").is_empty());
        assert!(search(&engine, "   ").is_empty());
    }

    #[test]
    fn test_search_no_match() {
        let engine = create_engine(blog());

        assert!(search(&engine, "qqzzx").is_empty());
    }

    #[test]
    fn test_search_title_ranges() {
        let engine = create_engine(blog());

        let results = search(&engine, "hello");

        assert_eq!(titles(&results), vec!["Hello World"]);
        assert_eq!(
            results[0].ranges(Field::Title),
            Some(&[MatchRange::new(0, 4)][..])
        );
    }

    #[test]
    fn test_search_query_is_trimmed() {
        let engine = create_engine(blog());

        let results = search(&engine, "  hello  ");

        assert_eq!(titles(&results), vec!["Hello World"]);
    }

    #[test]
    fn test_search_ranges_count_chars_in_non_ascii_titles() {
        let engine = create_engine(vec![
            make_record("\u{1F1F0}\u{1F1F7} Rust tips", &[], ""),
            make_record("Cafe\u{301} Rust", &[], ""),
            make_record("Caf\u{e9}\r\nRust", &[], ""),
        ]);

        let results = search(&engine, "rust");

        assert_eq!(results.len(), 3);
        let title_ranges = |ref_index: usize| {
            results
                .iter()
                .find(|r| r.ref_index == ref_index)
                .and_then(|r| r.ranges(Field::Title))
                .unwrap()
                .to_vec()
        };
        assert_eq!(title_ranges(0), vec![MatchRange::new(3, 6)]);
        assert_eq!(title_ranges(1), vec![MatchRange::new(6, 9)]);
        assert_eq!(title_ranges(2), vec![MatchRange::new(6, 9)]);
    }

    #[test]
    fn test_search_matches_tags() {
        let engine = create_engine(vec![make_record("Post", &["go", "python"], "")]);

        let results = search(&engine, "python");

        assert_eq!(results.len(), 1);
        let tag_match = results[0]
            .matches
            .iter()
            .find(|m| m.field == Field::Tags)
            .unwrap();
        assert_eq!(tag_match.ref_index, Some(1));
        assert_eq!(tag_match.ranges, vec![MatchRange::new(0, 5)]);
        assert_eq!(results[0].ranges(Field::Title), None);
    }

    #[test]
    fn test_search_matches_content() {
        let engine = create_engine(blog());

        let results = search(&engine, "tomatoes");

        assert_eq!(titles(&results), vec!["Gardening"]);
        assert!(results[0].matches.iter().any(|m| m.field == Field::Content));
    }

    #[test]
    fn test_search_case_insensitive_by_default() {
        let engine = create_engine(blog());

        assert_eq!(titles(&search(&engine, "HELLO")), vec!["Hello World"]);
    }

    #[test]
    fn test_search_min_match_char_length() {
        let engine = create_engine(blog());

        // Every single-character run is shorter than the default minimum of 2.
        assert!(search(&engine, "h").is_empty());
    }

    #[test]
    fn test_search_ref_index_points_into_index() {
        let engine = create_engine(blog());

        let results = search(&engine, "gardening");

        assert_eq!(results[0].ref_index, 2);
        assert_eq!(engine.records()[2].title, "Gardening");
    }
}

mod ranking {
    use super::common::titles;
    use super::*;

    #[test]
    fn test_more_matched_fields_rank_first() {
        let engine = create_engine(vec![
            make_record("Notes", &[], "borrow"),
            make_record("Borrow", &[], "borrow"),
        ]);

        let results = search(&engine, "borrow");

        assert_eq!(titles(&results), vec!["Borrow", "Notes"]);
    }

    #[test]
    fn test_weighted_key_ranks_first() {
        let config = SearchConfig {
            keys: vec![
                SearchKey::Weighted {
                    name: Field::Title,
                    weight: 2.0,
                },
                SearchKey::Weighted {
                    name: Field::Content,
                    weight: 1.0,
                },
            ],
            ..test_config()
        };
        let engine = SearchEngine::new(
            vec![
                make_record("Notes", &[], "borrow checker"),
                make_record("Borrow checker", &[], "unrelated"),
            ],
            config,
        );

        let results = search(&engine, "borrow");

        assert_eq!(titles(&results), vec!["Borrow checker", "Notes"]);
    }

    #[test]
    fn test_equal_scores_keep_index_order() {
        let engine = create_engine(vec![
            make_record("Rust one", &[], ""),
            make_record("Rust two", &[], ""),
            make_record("Rust three", &[], ""),
        ]);

        let results = search(&engine, "rust");

        assert_eq!(titles(&results), vec!["Rust one", "Rust two", "Rust three"]);
    }

    #[test]
    fn test_unsorted_keeps_index_order() {
        let config = SearchConfig {
            should_sort: false,
            ..test_config()
        };
        let engine = SearchEngine::new(
            vec![
                make_record("Notes", &[], "borrow"),
                make_record("Borrow", &[], "borrow"),
            ],
            config,
        );

        let results = search(&engine, "borrow");

        assert_eq!(titles(&results), vec!["Notes", "Borrow"]);
    }

    #[test]
    fn test_limit_truncates() {
        let config = SearchConfig {
            limit: Some(2),
            ..test_config()
        };
        let engine = SearchEngine::new(
            vec![
                make_record("Rust one", &[], ""),
                make_record("Rust two", &[], ""),
                make_record("Rust three", &[], ""),
            ],
            config,
        );

        assert_eq!(search(&engine, "rust").len(), 2);
    }
}

mod options {
    use super::common::titles;
    use super::*;

    #[test]
    fn test_threshold_zero_rejects_scattered_match() {
        let records = vec![make_record("hello", &[], "")];
        let strict = SearchConfig {
            threshold: 0.0,
            min_match_char_length: 1,
            ..test_config()
        };
        let lenient = SearchConfig {
            threshold: 1.0,
            min_match_char_length: 1,
            ..test_config()
        };

        let strict_engine = SearchEngine::new(records.clone(), strict);
        let lenient_engine = SearchEngine::new(records, lenient);

        assert!(search(&strict_engine, "hlo").is_empty());
        assert_eq!(search(&lenient_engine, "hlo").len(), 1);
    }

    #[test]
    fn test_case_sensitive() {
        let config = SearchConfig {
            case_matching: CaseMatching::Sensitive,
            ..test_config()
        };
        let engine = SearchEngine::new(vec![make_record("Hello World", &[], "")], config);

        assert!(search(&engine, "hello").is_empty());
        assert_eq!(titles(&search(&engine, "Hello")), vec!["Hello World"]);
    }

    #[test]
    fn test_location_penalty_applies_when_not_ignored() {
        let content = format!("{}needle", "a ".repeat(100));
        let records = vec![make_record("Haystack", &[], &content)];
        let located = SearchConfig {
            ignore_location: false,
            ..test_config()
        };

        let anywhere_engine = create_engine(records.clone());
        let located_engine = SearchEngine::new(records, located);

        assert_eq!(search(&anywhere_engine, "needle").len(), 1);
        assert!(search(&located_engine, "needle").is_empty());
    }

    #[test]
    fn test_include_matches_disabled() {
        let config = SearchConfig {
            include_matches: false,
            ..test_config()
        };
        let engine = SearchEngine::new(vec![make_record("Hello World", &[], "")], config);

        let results = search(&engine, "hello");

        assert_eq!(results.len(), 1);
        assert!(results[0].matches.is_empty());
    }

    #[test]
    fn test_include_score() {
        let records = vec![make_record("Hello World", &[], "")];
        let with_score = SearchConfig {
            include_score: true,
            ..test_config()
        };

        let plain = create_engine(records.clone());
        let scored = SearchEngine::new(records, with_score);

        assert_eq!(search(&plain, "hello")[0].score, None);
        let score = search(&scored, "hello")[0].score.unwrap();
        assert!((0.0..=1.0).contains(&score));
    }

    #[test]
    fn test_keys_restrict_fields() {
        let config = SearchConfig {
            keys: vec![Field::Title.into()],
            ..test_config()
        };
        let engine = SearchEngine::new(vec![make_record("Post", &["python"], "python")], config);

        assert!(search(&engine, "python").is_empty());
    }
}

mod config {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(SearchConfig::default().validate().is_empty());
    }

    #[test]
    fn test_validate_reports_each_problem() {
        let config = SearchConfig {
            threshold: 1.5,
            min_match_char_length: 0,
            keys: vec![],
            limit: Some(0),
            ..SearchConfig::default()
        };

        assert_eq!(config.validate().len(), 4);
    }

    #[test]
    fn test_with_defaults_for_invalid() {
        let config = SearchConfig {
            threshold: -0.1,
            min_match_char_length: 0,
            keys: vec![SearchKey::Weighted {
                name: Field::Title,
                weight: 0.0,
            }],
            distance: 7,
            ..SearchConfig::default()
        };

        let fixed = config.with_defaults_for_invalid();

        assert!(fixed.validate().is_empty());
        assert_eq!(fixed.threshold, 0.4);
        assert_eq!(fixed.min_match_char_length, 2);
        assert_eq!(fixed.keys, SearchConfig::default().keys);
        assert_eq!(fixed.distance, 7);
    }

    #[test]
    fn test_keys_accept_names_and_tables() {
        let config: SearchConfig = toml::from_str(
            r#"
            threshold = 0.3
            keys = ["title", { name = "tags", weight = 2.0 }]
            "#,
        )
        .unwrap();

        assert_eq!(config.threshold, 0.3);
        assert_eq!(config.keys[0], SearchKey::Name(Field::Title));
        assert_eq!(config.keys[1].field(), Field::Tags);
        assert_eq!(config.keys[1].weight(), 2.0);
        assert_eq!(config.distance, 100);
    }

    #[test]
    fn test_field_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Field::Summary).unwrap(), "\"summary\"");
    }
}

use super::*;
use crate::error::FetchError;
use crate::test_support::{FALLBACK, MockFetcher, PRIMARY, TWO_GAMES, sources};

#[tokio::test]
async fn primary_success_skips_fallback() {
    let fetcher = MockFetcher::new().body(PRIMARY, TWO_GAMES);
    let data = load_entries(&fetcher, &sources()).await.unwrap();

    assert_eq!(data.origin, SourceKind::Primary);
    assert_eq!(data.entries.len(), 2);
    assert_eq!(data.size, TWO_GAMES.len() as u64);
    assert_eq!(fetcher.calls(), vec![PRIMARY.to_string()]);
}

#[tokio::test]
async fn non_success_status_falls_back_once() {
    let fetcher = MockFetcher::new()
        .status(PRIMARY, 503)
        .body(FALLBACK, TWO_GAMES);
    let data = load_entries(&fetcher, &sources()).await.unwrap();

    assert_eq!(data.origin, SourceKind::Fallback);
    assert_eq!(data.location.to_string(), FALLBACK);
    assert_eq!(data.entries[1].title, "Game B");
    assert_eq!(
        fetcher.calls(),
        vec![PRIMARY.to_string(), FALLBACK.to_string()]
    );
}

#[tokio::test]
async fn unreachable_primary_falls_back() {
    // No canned response for the primary: the mock reports an I/O error.
    let fetcher = MockFetcher::new().body(FALLBACK, "[]");
    let data = load_entries(&fetcher, &sources()).await.unwrap();
    assert_eq!(data.origin, SourceKind::Fallback);
    assert!(data.entries.is_empty());
}

#[tokio::test]
async fn both_failing_reports_both_errors() {
    let fetcher = MockFetcher::new().status(PRIMARY, 404);
    let err = load_entries(&fetcher, &sources()).await.unwrap_err();

    match err {
        LoadError::Unavailable { primary, fallback } => {
            assert!(matches!(primary, FetchError::Status { status: 404, .. }));
            assert!(matches!(fallback, FetchError::Io { .. }));
        }
        other => panic!("expected Unavailable, got {other:?}"),
    }
    assert_eq!(fetcher.calls().len(), 2);
}

#[tokio::test]
async fn malformed_primary_is_a_schema_error_without_fallback() {
    let fetcher = MockFetcher::new()
        .body(PRIMARY, r#"{"not": "an array"}"#)
        .body(FALLBACK, TWO_GAMES);
    let err = load_entries(&fetcher, &sources()).await.unwrap_err();

    match err {
        LoadError::Schema { location, source } => {
            assert_eq!(location, PRIMARY);
            assert!(matches!(
                source,
                compat_list_core::SchemaError::NotAnArray { .. }
            ));
        }
        other => panic!("expected Schema, got {other:?}"),
    }
    assert_eq!(fetcher.calls(), vec![PRIMARY.to_string()]);
}

#[tokio::test]
async fn malformed_fallback_names_the_fallback() {
    let fetcher = MockFetcher::new()
        .status(PRIMARY, 500)
        .body(FALLBACK, r#"[{"title": 7, "compatibility": 0}]"#);
    let err = load_entries(&fetcher, &sources()).await.unwrap_err();

    match err {
        LoadError::Schema { location, source } => {
            assert_eq!(location, FALLBACK);
            assert_eq!(source.entry_index(), Some(0));
        }
        other => panic!("expected Schema, got {other:?}"),
    }
}

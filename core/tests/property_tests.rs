//! Property tests for the shared bookmark data model
//!
//! Properties:
//! 1. ParseResult::new always derives total_count from the bookmark list
//! 2. bookmarks_in partitions bookmarks by their exact folder path
//! 3. Parse results survive a JSON round trip unchanged

use bookmark_manager_core::*;
use proptest::prelude::*;

fn arb_browser_type() -> impl Strategy<Value = BrowserType> {
    prop_oneof![
        Just(BrowserType::Chrome),
        Just(BrowserType::Firefox),
        Just(BrowserType::Edge),
        Just(BrowserType::Safari),
        Just(BrowserType::Unknown),
    ]
}

fn arb_folder_path() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(prop_oneof![Just("Work".to_string()), Just("Docs".to_string())], 0..3)
}

fn arb_bookmark() -> impl Strategy<Value = ParsedBookmark> {
    (
        "https://[a-z]{3,8}\\.com/[a-z]{0,6}",
        "[A-Za-z ]{0,12}",
        arb_folder_path(),
        proptest::option::of(0i64..2_000_000_000),
        prop::collection::vec("[a-z]{1,6}", 0..3),
    )
        .prop_map(|(url, title, folder_path, added, tags)| ParsedBookmark {
            title,
            url,
            folder_path,
            date_added: added.and_then(|secs| DateTime::from_timestamp(secs, 0)),
            last_modified: None,
            icon: None,
            tags,
            description: None,
        })
}

proptest! {
    /// Property 1: total_count is derived, never supplied
    #[test]
    fn prop_total_count_matches_bookmarks(
        bookmarks in prop::collection::vec(arb_bookmark(), 0..20),
        browser_type in arb_browser_type(),
    ) {
        let expected = bookmarks.len();
        let result = ParseResult::new(bookmarks, Vec::new(), browser_type, Vec::new());
        prop_assert_eq!(result.total_count, expected);
        prop_assert_eq!(result.is_empty(), expected == 0);
    }

    /// Property 2: every bookmark is found under exactly its own path
    #[test]
    fn prop_bookmarks_in_partitions_by_path(
        bookmarks in prop::collection::vec(arb_bookmark(), 0..20),
    ) {
        let result = ParseResult::new(bookmarks, Vec::new(), BrowserType::Unknown, Vec::new());
        for bookmark in &result.bookmarks {
            let mut siblings = result.bookmarks_in(&bookmark.folder_path);
            prop_assert!(siblings.all(|b| b.folder_path == bookmark.folder_path));
            prop_assert!(result.bookmarks_in(&bookmark.folder_path).any(|b| b == bookmark));
        }
    }

    /// Property 3: JSON round trip
    #[test]
    fn prop_parse_result_json_round_trip(
        bookmarks in prop::collection::vec(arb_bookmark(), 0..10),
        browser_type in arb_browser_type(),
    ) {
        let diagnostics = vec!["Skipped unrecognized entry".to_string()];
        let result = ParseResult::new(bookmarks, Vec::new(), browser_type, diagnostics);
        let json = serde_json::to_string(&result).unwrap();
        let back: ParseResult = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, result);
    }
}

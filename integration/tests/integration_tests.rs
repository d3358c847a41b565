//! End-to-end import tests
//!
//! Drive the import service with real export files and check what would be
//! handed to storage and to the user.

use bookmark_manager_core::{BookmarkManagerError, BookmarkParseError, BrowserType, ImportError};
use integration::*;
use std::io::Write;
use tempfile::NamedTempFile;

const CHROME_EXPORT: &str = include_str!("../../bookmark-parser/tests/fixtures/chrome.html");
const FIREFOX_EXPORT: &str = include_str!("../../bookmark-parser/tests/fixtures/firefox.html");
const SAFARI_EXPORT: &str = include_str!("../../bookmark-parser/tests/fixtures/safari.html");

async fn import(html: &str) -> ImportSummary {
    BookmarkImportService::new()
        .import_upload("bookmarks.html", html.as_bytes().to_vec())
        .await
        .unwrap()
}

// ============================================================================
// 1. Full imports
// ============================================================================

#[tokio::test]
async fn test_import_chrome_export() {
    let summary = import(CHROME_EXPORT).await;

    assert_eq!(summary.browser_type, BrowserType::Chrome);
    assert_eq!(summary.total_count, 4);
    assert_eq!(summary.folder_count, 4);
    assert_eq!(summary.message, "Found 4 bookmarks");

    let folders: Vec<Option<&str>> = summary.records.iter().map(|r| r.folder.as_deref()).collect();
    assert_eq!(
        folders,
        vec![
            Some("Bookmarks bar"),
            Some("Bookmarks bar > Docs"),
            Some("Bookmarks bar > Docs"),
            Some("Other bookmarks"),
        ]
    );
    assert!(summary.records.iter().all(|r| r.browser_type == BrowserType::Chrome));
}

#[tokio::test]
async fn test_import_firefox_export_keeps_metadata() {
    let summary = import(FIREFOX_EXPORT).await;

    assert_eq!(summary.browser_type, BrowserType::Firefox);
    assert_eq!(summary.total_count, 4);
    assert_eq!(summary.parse_errors.len(), 1);

    let help = &summary.records[0];
    assert_eq!(help.folder, None);
    assert_eq!(help.favicon_url.as_deref(), Some("https://support.mozilla.org/favicon.ico"));
    assert_eq!(help.created_at.map(|d| d.timestamp()), Some(1_690_000_000));

    let search = &summary.records[1];
    assert_eq!(search.url, "https://example.org/search?q=rust&page=2");
    assert_eq!(search.tags, vec!["rust", "search"]);
    assert_eq!(search.description.as_deref(), Some("Second page of results"));
}

#[tokio::test]
async fn test_import_safari_export() {
    let summary = import(SAFARI_EXPORT).await;
    assert_eq!(summary.browser_type, BrowserType::Safari);
    assert_eq!(summary.total_count, 3);
    assert!(summary.records.iter().all(|r| r.created_at.is_none()));
}

#[tokio::test]
async fn test_import_export_without_bookmarks() {
    let html = "<!DOCTYPE NETSCAPE-Bookmark-file-1>\n<TITLE>Bookmarks</TITLE>\n<DL><p>\n</DL><p>\n";
    let summary = import(html).await;

    assert_eq!(summary.total_count, 0);
    assert!(summary.records.is_empty());
    assert_eq!(summary.message, NO_BOOKMARKS_MESSAGE);
}

#[tokio::test]
async fn test_summary_serializes_to_json() {
    let summary = import(CHROME_EXPORT).await;
    let json = serde_json::to_value(&summary).unwrap();

    assert_eq!(json["browser_type"], "chrome");
    assert_eq!(json["records"][1]["folder"], "Bookmarks bar > Docs");
    assert!(json["records"][0]["id"].is_string());
}

// ============================================================================
// 2. Rejections
// ============================================================================

#[tokio::test]
async fn test_rejects_wrong_extension() {
    let err = BookmarkImportService::new()
        .import_upload("bookmarks.json", CHROME_EXPORT.as_bytes().to_vec())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        BookmarkManagerError::Import {
            source: ImportError::UnsupportedFileType { .. }
        }
    ));
}

#[tokio::test]
async fn test_rejects_empty_upload() {
    let err = BookmarkImportService::new()
        .import_upload("bookmarks.html", Vec::new())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        BookmarkManagerError::Import {
            source: ImportError::EmptyFile { .. }
        }
    ));
}

#[tokio::test]
async fn test_rejects_oversized_upload() {
    let service = BookmarkImportService::with_config(ImportConfig {
        max_file_bytes: 64,
        ..ImportConfig::default()
    });
    let err = service
        .import_upload("bookmarks.html", CHROME_EXPORT.as_bytes().to_vec())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        BookmarkManagerError::Import {
            source: ImportError::FileTooLarge { limit_bytes: 64, .. }
        }
    ));
}

#[tokio::test]
async fn test_rejects_plain_html_page() {
    let err = BookmarkImportService::new()
        .import_upload("page.html", b"<html><body><p>Hello</p></body></html>".to_vec())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        BookmarkManagerError::Parse {
            source: BookmarkParseError::MalformedDocument { .. }
        }
    ));
}

#[tokio::test]
async fn test_rejects_non_utf8_upload() {
    let mut bytes = b"<!DOCTYPE NETSCAPE-Bookmark-file-1>\n<DL><p>".to_vec();
    bytes.extend_from_slice(&[0xff, 0xfe, 0xfd]);

    let err = BookmarkImportService::new()
        .import_upload("bookmarks.html", bytes)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        BookmarkManagerError::Parse {
            source: BookmarkParseError::InvalidInput { .. }
        }
    ));
}

#[tokio::test]
async fn test_parser_size_limit_applies_inside_upload_limit() {
    let mut config = ImportConfig::default();
    config.parser = config.parser.with_max_input_bytes(Some(64));
    let err = BookmarkImportService::with_config(config)
        .import_upload("bookmarks.html", CHROME_EXPORT.as_bytes().to_vec())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        BookmarkManagerError::Parse {
            source: BookmarkParseError::InvalidInput { .. }
        }
    ));
}

// ============================================================================
// 3. Error reporting and configuration
// ============================================================================

#[tokio::test]
async fn test_rejection_message_hides_parser_details() {
    let handler = UnifiedErrorHandler::new();
    let err = BookmarkImportService::new()
        .import_upload("page.html", b"<html></html>".to_vec())
        .await
        .unwrap_err();

    let message = handler.handle_error(&err, "upload").await;
    assert_eq!(message, error_handler::INVALID_FILE_MESSAGE);

    let stats = handler.get_error_stats().await;
    assert_eq!(stats.total, 1);
    assert_eq!(stats.info, 1);
}

#[tokio::test]
async fn test_config_from_json_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"folder_separator": " / ", "parser": {{"report_skipped_entries": false}}}}"#
    )
    .unwrap();

    let config = ImportConfig::from_json_file(file.path()).unwrap();
    assert_eq!(config.folder_separator, " / ");

    let summary = BookmarkImportService::with_config(config)
        .import_upload("bookmarks.html", FIREFOX_EXPORT.as_bytes().to_vec())
        .await
        .unwrap();
    assert!(summary.parse_errors.is_empty());
    assert!(summary
        .records
        .iter()
        .any(|r| r.folder.as_deref() == Some("Reading")));
}

#[test]
fn test_config_from_invalid_json_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "not json").unwrap();

    let err = ImportConfig::from_json_file(file.path()).unwrap_err();
    assert!(matches!(err, BookmarkManagerError::System { .. }));
}

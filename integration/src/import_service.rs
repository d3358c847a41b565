//! Bookmark Import Service
//!
//! Accepts an uploaded bookmark export, parses it off the async runtime
//! under a time budget, and converts the result into records ready for the
//! storage layer. Duplicate detection happens downstream.

use bookmark_manager_core::errors::{ImportError, Result};
use bookmark_manager_core::{BrowserType, DateTime, ParseResult, ParsedBookmark, Utc};
use bookmark_parser::NetscapeBookmarkParser;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use uuid::Uuid;

use crate::ImportConfig;

/// Reported when a valid export contains no bookmarks
pub const NO_BOOKMARKS_MESSAGE: &str = "No bookmarks found in file";

/// One bookmark prepared for storage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportRecord {
    pub id: Uuid,
    pub url: String,
    pub title: String,
    /// Folder path joined with the configured separator, `None` at top level
    pub folder: Option<String>,
    pub favicon_url: Option<String>,
    pub browser_type: BrowserType,
    pub created_at: Option<DateTime<Utc>>,
    pub tags: Vec<String>,
    pub description: Option<String>,
}

/// Outcome of importing one file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportSummary {
    pub records: Vec<ImportRecord>,
    pub folder_count: usize,
    pub browser_type: BrowserType,
    pub total_count: usize,
    pub parse_errors: Vec<String>,
    pub message: String,
}

/// Bookmark import service
pub struct BookmarkImportService {
    parser: Arc<NetscapeBookmarkParser>,
    config: ImportConfig,
}

impl BookmarkImportService {
    /// Create a service with default configuration
    pub fn new() -> Self {
        Self::with_config(ImportConfig::default())
    }

    /// Create a service with custom configuration
    pub fn with_config(config: ImportConfig) -> Self {
        Self {
            parser: Arc::new(NetscapeBookmarkParser::with_config(config.parser.clone())),
            config,
        }
    }

    pub fn config(&self) -> &ImportConfig {
        &self.config
    }

    /// Check file name and size before any parsing
    pub fn validate_upload(&self, file_name: &str, bytes: &[u8]) -> Result<()> {
        let extension = Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("");
        let allowed = self
            .config
            .allowed_extensions
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(extension));
        if !allowed {
            return Err(ImportError::UnsupportedFileType {
                file_name: file_name.to_string(),
            }
            .into());
        }

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Err(ImportError::EmptyFile {
                file_name: file_name.to_string(),
            }
            .into());
        }

        if bytes.len() > self.config.max_file_bytes {
            return Err(ImportError::FileTooLarge {
                size_bytes: bytes.len(),
                limit_bytes: self.config.max_file_bytes,
            }
            .into());
        }

        Ok(())
    }

    /// Validate, parse and convert an uploaded export
    ///
    /// Parsing runs on the blocking pool. When the time budget runs out the
    /// parse keeps running to completion in the background and its result is
    /// dropped.
    pub async fn import_upload(&self, file_name: &str, bytes: Vec<u8>) -> Result<ImportSummary> {
        self.validate_upload(file_name, &bytes)?;

        let parser = Arc::clone(&self.parser);
        let task = tokio::task::spawn_blocking(move || parser.parse_bytes(&bytes));

        let timeout_ms = self.config.parse_timeout_ms;
        let parsed = match tokio::time::timeout(Duration::from_millis(timeout_ms), task).await {
            Err(_) => {
                warn!("Parsing {} exceeded {}ms", file_name, timeout_ms);
                return Err(ImportError::Timeout { timeout_ms }.into());
            }
            Ok(Err(join_error)) => {
                return Err(ImportError::TaskFailed {
                    reason: join_error.to_string(),
                }
                .into());
            }
            Ok(Ok(parsed)) => parsed,
        };

        let result = parsed.map_err(|e| {
            warn!("Rejected bookmark file {}: {}", file_name, e);
            e
        })?;

        let summary = self.summarize(result);
        info!(
            "Imported {} bookmarks from {} ({})",
            summary.total_count, file_name, summary.browser_type
        );
        Ok(summary)
    }

    /// Convert parsed bookmarks into storage records
    pub fn to_import_records(&self, result: &ParseResult) -> Vec<ImportRecord> {
        result
            .bookmarks
            .iter()
            .map(|bookmark| self.to_record(bookmark, result.browser_type))
            .collect()
    }

    /// Build the summary handed back to the uploader
    pub fn summarize(&self, result: ParseResult) -> ImportSummary {
        let records = self.to_import_records(&result);
        let message = if result.total_count == 0 {
            NO_BOOKMARKS_MESSAGE.to_string()
        } else {
            format!("Found {} bookmarks", result.total_count)
        };

        ImportSummary {
            records,
            folder_count: result.folders.len(),
            browser_type: result.browser_type,
            total_count: result.total_count,
            parse_errors: result.parse_errors,
            message,
        }
    }

    fn to_record(&self, bookmark: &ParsedBookmark, browser_type: BrowserType) -> ImportRecord {
        let folder = (!bookmark.folder_path.is_empty())
            .then(|| bookmark.folder_path.join(&self.config.folder_separator));

        ImportRecord {
            id: Uuid::new_v4(),
            url: bookmark.url.clone(),
            title: bookmark.title.clone(),
            folder,
            favicon_url: bookmark.icon.clone(),
            browser_type,
            created_at: bookmark.date_added,
            tags: bookmark.tags.clone(),
            description: bookmark.description.clone(),
        }
    }
}

impl Default for BookmarkImportService {
    fn default() -> Self {
        Self::new()
    }
}

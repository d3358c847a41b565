//! Bookmark file import pipeline
//!
//! Glues the Netscape bookmark parser to the rest of the bookmark manager:
//! upload checks, a wall-clock bound on parsing, conversion into records
//! ready for storage, and user-facing error messages.

use bookmark_manager_core::errors::{Result, SystemError};
use bookmark_parser::ParserConfig;
use std::path::Path;

pub mod error_handler;
pub mod import_service;
pub mod logger;

pub use error_handler::{user_message, ErrorSeverity, ErrorStatistics, UnifiedErrorHandler};
pub use import_service::{BookmarkImportService, ImportRecord, ImportSummary, NO_BOOKMARKS_MESSAGE};
pub use logger::{LoggerConfig, UnifiedLogger};

/// Import configuration
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ImportConfig {
    /// Accepted upload extensions, without the dot
    pub allowed_extensions: Vec<String>,

    /// Largest accepted upload
    pub max_file_bytes: usize,

    /// Wall-clock budget for one parse
    pub parse_timeout_ms: u64,

    /// Joins a bookmark's folder path into the stored folder string
    pub folder_separator: String,

    /// Parser limits
    pub parser: ParserConfig,

    /// Log level
    pub log_level: String,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            allowed_extensions: vec!["html".to_string(), "htm".to_string()],
            max_file_bytes: 10 * 1024 * 1024,
            parse_timeout_ms: 30_000,
            folder_separator: " > ".to_string(),
            parser: ParserConfig::default(),
            log_level: "info".to_string(),
        }
    }
}

impl ImportConfig {
    /// Load configuration from a JSON file; missing fields take defaults
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(SystemError::from)?;
        let config = serde_json::from_str(&content).map_err(SystemError::from)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_config_default() {
        let config = ImportConfig::default();
        assert_eq!(config.allowed_extensions, vec!["html", "htm"]);
        assert_eq!(config.folder_separator, " > ");
        assert_eq!(config.parse_timeout_ms, 30_000);
    }

    #[test]
    fn test_import_config_partial_json() {
        let json = r#"{"folder_separator": "/", "parser": {"report_skipped_entries": false}}"#;
        let config: ImportConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.folder_separator, "/");
        assert!(!config.parser.report_skipped_entries);
        assert_eq!(config.max_file_bytes, ImportConfig::default().max_file_bytes);
    }
}

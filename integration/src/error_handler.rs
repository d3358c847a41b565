//! Unified error handler for centralized error management
//!
//! Logs full error detail for operators while handing users a fixed message
//! that never includes parser internals.

use bookmark_manager_core::errors::{BookmarkManagerError, ImportError, SystemError};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{error, info, warn};

/// Shown for any document the parser rejects
pub const INVALID_FILE_MESSAGE: &str = "Invalid file: not a browser bookmark export";

/// Error severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Critical error requiring immediate attention
    Critical,
    /// Error that affects functionality
    Error,
    /// Warning about potential issues
    Warning,
    /// Informational message
    Info,
}

/// Error entry for tracking
#[derive(Debug, Clone)]
pub struct ErrorEntry {
    pub error: String,
    pub severity: ErrorSeverity,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub context: String,
}

/// Message safe to show to the person who uploaded the file
pub fn user_message(error: &BookmarkManagerError) -> &'static str {
    match error {
        BookmarkManagerError::Parse { .. } => INVALID_FILE_MESSAGE,
        BookmarkManagerError::Import { source } => match source {
            ImportError::UnsupportedFileType { .. } => {
                "Invalid file: only .html and .htm bookmark exports are supported"
            }
            ImportError::EmptyFile { .. } => "Invalid file: the uploaded file is empty",
            ImportError::FileTooLarge { .. } => "Invalid file: the uploaded file is too large",
            ImportError::Timeout { .. } => "Import took too long and was cancelled",
            ImportError::TaskFailed { .. } => "Import failed due to an internal error",
        },
        BookmarkManagerError::System { .. } => "Import failed due to an internal error",
    }
}

/// Unified error handler
pub struct UnifiedErrorHandler {
    /// Recent errors for reporting
    recent_errors: Arc<RwLock<Vec<ErrorEntry>>>,
    /// Maximum number of errors to keep
    max_errors: usize,
}

impl UnifiedErrorHandler {
    /// Create a new error handler
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Create a handler that keeps at most `max_errors` entries
    pub fn with_capacity(max_errors: usize) -> Self {
        Self {
            recent_errors: Arc::new(RwLock::new(Vec::new())),
            max_errors,
        }
    }

    /// Handle an error with automatic logging, returning the user-facing message
    pub async fn handle_error(&self, error: &BookmarkManagerError, context: &str) -> &'static str {
        let severity = self.classify_error(error);

        // Log based on severity
        match severity {
            ErrorSeverity::Critical => {
                error!("CRITICAL ERROR in {}: {}", context, error);
            }
            ErrorSeverity::Error => {
                error!("ERROR in {}: {}", context, error);
            }
            ErrorSeverity::Warning => {
                warn!("WARNING in {}: {}", context, error);
            }
            ErrorSeverity::Info => {
                info!("INFO in {}: {}", context, error);
            }
        }

        // Record error
        let entry = ErrorEntry {
            error: error.to_string(),
            severity,
            timestamp: chrono::Utc::now(),
            context: context.to_string(),
        };

        self.add_error_entry(entry).await;

        user_message(error)
    }

    /// Classify error severity
    fn classify_error(&self, error: &BookmarkManagerError) -> ErrorSeverity {
        match error {
            BookmarkManagerError::Parse { .. } => ErrorSeverity::Info,
            BookmarkManagerError::Import { source } => match source {
                ImportError::Timeout { .. } => ErrorSeverity::Error,
                ImportError::TaskFailed { .. } => ErrorSeverity::Critical,
                _ => ErrorSeverity::Warning,
            },
            BookmarkManagerError::System { source } => match source {
                SystemError::Configuration { .. } => ErrorSeverity::Error,
                _ => ErrorSeverity::Critical,
            },
        }
    }

    /// Add an error entry to the history
    async fn add_error_entry(&self, entry: ErrorEntry) {
        let mut errors = self.recent_errors.write().await;
        errors.push(entry);

        // Keep only recent errors
        if errors.len() > self.max_errors {
            let excess = errors.len() - self.max_errors;
            errors.drain(0..excess);
        }
    }

    /// Get recent errors
    pub async fn get_recent_errors(&self) -> Vec<ErrorEntry> {
        self.recent_errors.read().await.clone()
    }

    /// Get error statistics
    pub async fn get_error_stats(&self) -> ErrorStatistics {
        let errors = self.recent_errors.read().await;

        let mut stats = ErrorStatistics {
            total: errors.len(),
            critical: 0,
            errors: 0,
            warnings: 0,
            info: 0,
        };

        for error in errors.iter() {
            match error.severity {
                ErrorSeverity::Critical => stats.critical += 1,
                ErrorSeverity::Error => stats.errors += 1,
                ErrorSeverity::Warning => stats.warnings += 1,
                ErrorSeverity::Info => stats.info += 1,
            }
        }

        stats
    }

    /// Clear error history
    pub async fn clear_errors(&self) {
        self.recent_errors.write().await.clear();
    }
}

impl Default for UnifiedErrorHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Error statistics
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ErrorStatistics {
    pub total: usize,
    pub critical: usize,
    pub errors: usize,
    pub warnings: usize,
    pub info: usize,
}

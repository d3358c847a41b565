use thiserror::Error;

/// Fatal bookmark parsing errors
///
/// Anything else wrong with an export (a bookmark without a URL, a folder
/// without a name) is skipped by the parser and never surfaces here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookmarkParseError {
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("Malformed bookmark document: {details}")]
    MalformedDocument { details: String },
}

impl BookmarkParseError {
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        BookmarkParseError::InvalidInput { reason: reason.into() }
    }

    pub fn malformed(details: impl Into<String>) -> Self {
        BookmarkParseError::MalformedDocument { details: details.into() }
    }
}

/// Upload and import pipeline errors
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Unsupported file type: {file_name}")]
    UnsupportedFileType { file_name: String },

    #[error("Uploaded file is empty: {file_name}")]
    EmptyFile { file_name: String },

    #[error("File too large: {size_bytes} bytes > {limit_bytes} bytes")]
    FileTooLarge { size_bytes: usize, limit_bytes: usize },

    #[error("Parsing timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("Import task failed: {reason}")]
    TaskFailed { reason: String },
}

/// General system errors
#[derive(Debug, Error)]
pub enum SystemError {
    #[error("Configuration error: {details}")]
    Configuration { details: String },

    #[error("IO error: {source}")]
    IO {
        #[from]
        source: std::io::Error,
    },

    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

/// Main error type for the application
#[derive(Debug, Error)]
pub enum BookmarkManagerError {
    #[error("Bookmark parse error: {source}")]
    Parse {
        #[from]
        source: BookmarkParseError,
    },

    #[error("Import error: {source}")]
    Import {
        #[from]
        source: ImportError,
    },

    #[error("System error: {source}")]
    System {
        #[from]
        source: SystemError,
    },
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, BookmarkManagerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_messages() {
        let err = BookmarkParseError::invalid_input("empty document");
        assert_eq!(err.to_string(), "Invalid input: empty document");

        let err = BookmarkParseError::malformed("no bookmark list found");
        assert_eq!(err.to_string(), "Malformed bookmark document: no bookmark list found");
    }

    #[test]
    fn test_parse_error_converts_into_main_error() {
        let err: BookmarkManagerError = BookmarkParseError::invalid_input("blank").into();
        assert!(matches!(
            err,
            BookmarkManagerError::Parse { source: BookmarkParseError::InvalidInput { .. } }
        ));
    }

    #[test]
    fn test_io_error_converts_into_system_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: BookmarkManagerError = SystemError::from(io).into();
        assert!(err.to_string().contains("missing"));
    }
}

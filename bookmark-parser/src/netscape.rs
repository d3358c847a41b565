//! Entry point: validation, detection, walk, result assembly

use bookmark_manager_core::{BookmarkParseError, ParseResult};
use tracing::{debug, info};

use crate::browser_detect::{detect_browser_type, NETSCAPE_SIGNATURE};
use crate::config::ParserConfig;
use crate::extract::extract_balanced;
use crate::scan::{contains_ignore_case, find_tag};
use crate::walker::ListWalker;

/// Parser for browser "Netscape Bookmark File" HTML exports
///
/// Holds only configuration, so one instance can serve any number of
/// parses, concurrently or not.
#[derive(Debug, Clone, Default)]
pub struct NetscapeBookmarkParser {
    config: ParserConfig,
}

impl NetscapeBookmarkParser {
    /// Create a parser with default limits
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with custom configuration
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse an export into bookmarks and folders
    ///
    /// # Errors
    /// * `InvalidInput` for empty, blank or oversized input
    /// * `MalformedDocument` when the text has neither the Netscape signature
    ///   nor a `<DL>` list, or when the walk breaks an internal invariant
    pub fn parse(&self, content: &str) -> Result<ParseResult, BookmarkParseError> {
        let document = self.validate(content)?;
        let browser_type = detect_browser_type(document);
        debug!(bytes = content.len(), %browser_type, "Parsing bookmark export");

        let Some(body) = extract_balanced(document, "dl") else {
            info!(%browser_type, "Bookmark export has a signature but no bookmark list");
            return Ok(ParseResult::empty(browser_type));
        };

        let mut walker = ListWalker::new(&self.config);
        walker
            .walk(body, &[])
            .map_err(|e| BookmarkParseError::malformed(e.to_string()))?;
        let (bookmarks, folders, parse_errors) = walker.finish();

        let result = ParseResult::new(bookmarks, folders, browser_type, parse_errors);
        info!(
            bookmarks = result.total_count,
            folders = result.folders.len(),
            skipped = result.parse_errors.len(),
            %browser_type,
            "Parsed bookmark export"
        );
        Ok(result)
    }

    /// Parse raw upload bytes, rejecting anything that is not UTF-8 text
    pub fn parse_bytes(&self, bytes: &[u8]) -> Result<ParseResult, BookmarkParseError> {
        self.parse(decode_utf8(bytes)?)
    }

    /// Cheap structural check, `true` exactly when [`Self::parse`] succeeds
    pub fn is_valid(&self, content: &str) -> bool {
        self.validate(content).is_ok()
    }

    /// Byte-level counterpart of [`Self::is_valid`]
    pub fn is_valid_bytes(&self, bytes: &[u8]) -> bool {
        decode_utf8(bytes).is_ok_and(|text| self.is_valid(text))
    }

    fn validate<'a>(&self, content: &'a str) -> Result<&'a str, BookmarkParseError> {
        if let Some(limit) = self.config.max_input_bytes {
            if content.len() > limit {
                return Err(BookmarkParseError::invalid_input(format!(
                    "document is {} bytes, limit is {} bytes",
                    content.len(),
                    limit
                )));
            }
        }

        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Err(BookmarkParseError::invalid_input("document is empty"));
        }

        if !contains_ignore_case(trimmed, NETSCAPE_SIGNATURE)
            && find_tag(trimmed, 0, "dl", false).is_none()
        {
            return Err(BookmarkParseError::malformed(
                "no Netscape bookmark signature or bookmark list found",
            ));
        }

        Ok(trimmed)
    }
}

fn decode_utf8(bytes: &[u8]) -> Result<&str, BookmarkParseError> {
    std::str::from_utf8(bytes)
        .map_err(|e| BookmarkParseError::invalid_input(format!("document is not valid UTF-8: {e}")))
}

/// Parse with the default configuration
pub fn parse_bookmark_html(content: &str) -> Result<ParseResult, BookmarkParseError> {
    NetscapeBookmarkParser::new().parse(content)
}

/// Validity check with the default configuration
pub fn is_valid_bookmark_html(content: &str) -> bool {
    NetscapeBookmarkParser::new().is_valid(content)
}

//! Parser limits and diagnostics settings

use serde::{Deserialize, Serialize};

/// Default input cap, well above any real browser export
pub const DEFAULT_MAX_INPUT_BYTES: usize = 50 * 1024 * 1024;

/// Default number of folder levels whose contents are walked
pub const DEFAULT_MAX_FOLDER_DEPTH: usize = 64;

/// Configuration for [`crate::NetscapeBookmarkParser`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Documents longer than this are rejected as invalid input
    pub max_input_bytes: Option<usize>,
    /// Folders nested deeper than this are emitted but their lists are not walked
    pub max_folder_depth: usize,
    /// Record one diagnostic per skipped entry in `parse_errors`
    pub report_skipped_entries: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_input_bytes: Some(DEFAULT_MAX_INPUT_BYTES),
            max_folder_depth: DEFAULT_MAX_FOLDER_DEPTH,
            report_skipped_entries: true,
        }
    }
}

impl ParserConfig {
    pub fn with_max_input_bytes(mut self, limit: Option<usize>) -> Self {
        self.max_input_bytes = limit;
        self
    }

    pub fn with_max_folder_depth(mut self, depth: usize) -> Self {
        self.max_folder_depth = depth;
        self
    }

    pub fn with_skip_reporting(mut self, enabled: bool) -> Self {
        self.report_skipped_entries = enabled;
        self
    }
}

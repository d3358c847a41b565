//! Data model shared by the bookmark parser and the import pipeline

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Browser a bookmark export originated from
///
/// The Netscape bookmark format carries no vendor tag, so this is always a
/// best-effort label. `Unknown` is a valid outcome, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrowserType {
    Chrome,
    Firefox,
    Edge,
    Safari,
    Unknown,
}

impl BrowserType {
    /// Lower-case label used when tagging stored records
    pub fn as_str(&self) -> &'static str {
        match self {
            BrowserType::Chrome => "chrome",
            BrowserType::Firefox => "firefox",
            BrowserType::Edge => "edge",
            BrowserType::Safari => "safari",
            BrowserType::Unknown => "unknown",
        }
    }
}

impl Default for BrowserType {
    fn default() -> Self {
        BrowserType::Unknown
    }
}

impl fmt::Display for BrowserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single bookmark anchor found in an export
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedBookmark {
    /// Visible anchor text, or the URL when the text is empty
    pub title: String,
    /// Raw `HREF` value; not validated as a URI
    pub url: String,
    /// Ancestor folder names, outermost first. Empty at top level.
    pub folder_path: Vec<String>,
    pub date_added: Option<DateTime<Utc>>,
    pub last_modified: Option<DateTime<Utc>>,
    /// Favicon as a URL or data URI
    pub icon: Option<String>,
    pub tags: Vec<String>,
    /// Text of the `<DD>` that follows the anchor, if any
    pub description: Option<String>,
}

/// A folder header found in an export
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookmarkFolder {
    pub name: String,
    /// Ancestor folder names followed by this folder's own name
    pub path: Vec<String>,
    pub date_added: Option<DateTime<Utc>>,
    pub date_modified: Option<DateTime<Utc>>,
    /// Set for the browser's toolbar / bookmarks bar folder
    pub is_toolbar: bool,
}

impl BookmarkFolder {
    /// Depth of the folder, 1 for a top-level folder
    pub fn depth(&self) -> usize {
        self.path.len()
    }
}

/// Everything extracted from one export document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseResult {
    /// Bookmarks in document order
    pub bookmarks: Vec<ParsedBookmark>,
    /// Folders in document order, each before its contents
    pub folders: Vec<BookmarkFolder>,
    pub browser_type: BrowserType,
    /// Always equal to `bookmarks.len()`
    pub total_count: usize,
    /// Non-fatal diagnostics, one per skipped entry when reporting is enabled
    pub parse_errors: Vec<String>,
}

impl ParseResult {
    /// Assemble a result, deriving `total_count` from the bookmark list
    pub fn new(
        bookmarks: Vec<ParsedBookmark>,
        folders: Vec<BookmarkFolder>,
        browser_type: BrowserType,
        parse_errors: Vec<String>,
    ) -> Self {
        let total_count = bookmarks.len();
        Self {
            bookmarks,
            folders,
            browser_type,
            total_count,
            parse_errors,
        }
    }

    /// Result for a document that is a valid export but lists nothing
    pub fn empty(browser_type: BrowserType) -> Self {
        Self::new(Vec::new(), Vec::new(), browser_type, Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.total_count == 0
    }

    /// Bookmarks whose direct parent folder has the given path
    pub fn bookmarks_in<'a>(
        &'a self,
        path: &'a [String],
    ) -> impl Iterator<Item = &'a ParsedBookmark> + 'a {
        self.bookmarks.iter().filter(move |b| b.folder_path == path)
    }
}

//! Heuristic detection of the browser that produced an export

use bookmark_manager_core::BrowserType;

/// Number of leading characters inspected for most fingerprints
pub const DETECTION_PREFIX_CHARS: usize = 2000;

pub(crate) const NETSCAPE_SIGNATURE: &str = "netscape-bookmark-file";

/// Firefox-only attribute names, matched anywhere in the document
const FIREFOX_ATTRIBUTES: &[&str] = &["last_charset", "shortcuturl", "web_panel"];
const CHROME_MARKERS: &[&str] = &["bookmarks bar", "bookmark bar", "chrome"];
const SAFARI_MARKERS: &[&str] = &["safari", "<!doctype plist", "com.apple"];

/// Label the origin of an export. First matching rule wins.
///
/// A signed export with no vendor fingerprint is labelled Chrome. Never
/// fails: an unsigned, unrecognisable document is `BrowserType::Unknown`.
pub fn detect_browser_type(content: &str) -> BrowserType {
    let lowered = content.to_ascii_lowercase();
    let prefix = leading_chars(&lowered, DETECTION_PREFIX_CHARS);

    let safari = SAFARI_MARKERS.iter().any(|marker| prefix.contains(marker));

    if lowered.contains(NETSCAPE_SIGNATURE) {
        if prefix.contains("edge") && prefix.contains("favorites") {
            return BrowserType::Edge;
        }
        let firefox_attribute = FIREFOX_ATTRIBUTES.iter().any(|attr| lowered.contains(attr));
        if firefox_attribute || prefix.contains("mozilla") {
            return BrowserType::Firefox;
        }
        if CHROME_MARKERS.iter().any(|marker| prefix.contains(marker)) {
            return BrowserType::Chrome;
        }
        // Chrome writes the bare dialect with no vendor marks of its own
        return if safari { BrowserType::Safari } else { BrowserType::Chrome };
    }

    if safari {
        return BrowserType::Safari;
    }

    if prefix.contains("mozilla") || prefix.contains("firefox") {
        return BrowserType::Firefox;
    }
    if prefix.contains("chromium") || prefix.contains("google chrome") {
        return BrowserType::Chrome;
    }

    BrowserType::Unknown
}

fn leading_chars(text: &str, count: usize) -> &str {
    match text.char_indices().nth(count) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

//! Nested-list walker
//!
//! Splits one list body into `<DT>` entries, classifies each entry as a
//! bookmark or a folder, and recurses into folder lists. The current folder
//! path lives on the call stack: each recursive call receives its own
//! extended copy, so nothing is shared between parses.

use std::collections::HashMap;

use bookmark_manager_core::{BookmarkFolder, ParsedBookmark};
use thiserror::Error;
use tracing::debug;

use crate::attributes::parse_attributes;
use crate::config::ParserConfig;
use crate::entities::decode_entities;
use crate::extract::extract_balanced;
use crate::scan::{find_tag, find_tag_end, is_tag_at, strip_tags};
use crate::timestamp::parse_timestamp;

/// Internal invariant breaks while walking
#[derive(Debug, Error)]
pub(crate) enum WalkError {
    #[error("span {start}..{end} is outside a {len}-byte list body")]
    SpanOutOfBounds { start: usize, end: usize, len: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WalkState {
    Scanning,
    InEntry { start: usize },
}

/// A start tag with its attributes and the text up to its closer
struct Element<'a> {
    attributes: HashMap<String, String>,
    inner: &'a str,
    /// Offset just past the closing tag
    end: usize,
}

pub(crate) struct ListWalker<'c> {
    config: &'c ParserConfig,
    bookmarks: Vec<ParsedBookmark>,
    folders: Vec<BookmarkFolder>,
    diagnostics: Vec<String>,
}

impl<'c> ListWalker<'c> {
    pub(crate) fn new(config: &'c ParserConfig) -> Self {
        Self {
            config,
            bookmarks: Vec::new(),
            folders: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Walk one list body already stripped of its own `<DL>` markers
    pub(crate) fn walk(&mut self, body: &str, path: &[String]) -> Result<(), WalkError> {
        let bytes = body.as_bytes();
        let mut state = WalkState::Scanning;
        let mut depth = 0usize;
        let mut pos = 0;

        while pos < bytes.len() {
            let Some(offset) = bytes[pos..].iter().position(|&b| b == b'<') else {
                break;
            };
            let at = pos + offset;

            match state {
                WalkState::Scanning => {
                    if is_tag_at(bytes, at, "dt", false) {
                        state = WalkState::InEntry { start: at };
                    }
                }
                WalkState::InEntry { start } => {
                    if is_tag_at(bytes, at, "dl", false) {
                        depth += 1;
                    } else if is_tag_at(bytes, at, "dl", true) {
                        depth = depth.saturating_sub(1);
                    } else if depth == 0 && is_tag_at(bytes, at, "dt", false) {
                        self.flush_entry(span(body, start, at)?, path)?;
                        state = WalkState::InEntry { start: at };
                    }
                }
            }

            pos = at + 1;
        }

        if let WalkState::InEntry { start } = state {
            self.flush_entry(span(body, start, body.len())?, path)?;
        }
        Ok(())
    }

    pub(crate) fn finish(self) -> (Vec<ParsedBookmark>, Vec<BookmarkFolder>, Vec<String>) {
        (self.bookmarks, self.folders, self.diagnostics)
    }

    fn flush_entry(&mut self, entry: &str, path: &[String]) -> Result<(), WalkError> {
        if let Some(header) = find_tag(entry, 0, "h3", false) {
            return self.emit_folder(entry, header, path);
        }
        if let Some(anchor) = find_tag(entry, 0, "a", false) {
            return self.emit_bookmark(entry, anchor, path);
        }
        if !strip_tags(entry).trim().is_empty() {
            self.skip(format!("Skipped unrecognized entry{}", location(path)));
        }
        Ok(())
    }

    fn emit_bookmark(
        &mut self,
        entry: &str,
        open: usize,
        path: &[String],
    ) -> Result<(), WalkError> {
        let Some(anchor) = read_element(entry, open, "a")? else {
            self.skip(format!("Skipped bookmark with unterminated anchor tag{}", location(path)));
            return Ok(());
        };

        let url = anchor
            .attributes
            .get("HREF")
            .map(|href| decode_entities(href.trim()).trim().to_string())
            .filter(|href| !href.is_empty());
        let Some(url) = url else {
            self.skip(format!("Skipped bookmark without HREF{}", location(path)));
            return Ok(());
        };

        let text = element_text(anchor.inner);
        let title = if text.is_empty() { url.clone() } else { text };
        let attributes = &anchor.attributes;

        let icon = ["ICON", "ICON_URI"]
            .iter()
            .filter_map(|key| attributes.get(*key))
            .find(|value| !value.trim().is_empty())
            .map(|value| value.trim().to_string());

        let tags = attributes
            .get("TAGS")
            .map(|raw| {
                decode_entities(raw)
                    .split(',')
                    .map(str::trim)
                    .filter(|tag| !tag.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        let description = read_description(entry, anchor.end)?;

        self.bookmarks.push(ParsedBookmark {
            title,
            url,
            folder_path: path.to_vec(),
            date_added: parse_timestamp(attributes.get("ADD_DATE").map(String::as_str)),
            last_modified: parse_timestamp(attributes.get("LAST_MODIFIED").map(String::as_str)),
            icon,
            tags,
            description,
        });
        Ok(())
    }

    fn emit_folder(&mut self, entry: &str, open: usize, path: &[String]) -> Result<(), WalkError> {
        let Some(header) = read_element(entry, open, "h3")? else {
            self.skip(format!("Skipped folder with unterminated header tag{}", location(path)));
            return Ok(());
        };

        let name = element_text(header.inner);
        if name.is_empty() {
            self.skip(format!("Skipped folder without a name{}", location(path)));
            return Ok(());
        }

        let attributes = &header.attributes;
        let mut folder_path = path.to_vec();
        folder_path.push(name.clone());

        self.folders.push(BookmarkFolder {
            name,
            path: folder_path.clone(),
            date_added: parse_timestamp(attributes.get("ADD_DATE").map(String::as_str)),
            date_modified: parse_timestamp(attributes.get("LAST_MODIFIED").map(String::as_str)),
            is_toolbar: attributes
                .get("PERSONAL_TOOLBAR_FOLDER")
                .is_some_and(|value| value.eq_ignore_ascii_case("true")),
        });

        let rest = span(entry, header.end, entry.len())?;
        let Some(body) = extract_balanced(rest, "dl") else {
            return Ok(());
        };

        if folder_path.len() > self.config.max_folder_depth {
            self.skip(format!(
                "Skipped contents of folder '{}': nesting deeper than {} levels",
                folder_path.join(" > "),
                self.config.max_folder_depth
            ));
            return Ok(());
        }

        self.walk(body, &folder_path)
    }

    fn skip(&mut self, message: String) {
        debug!(%message, "Skipping bookmark entry");
        if self.config.report_skipped_entries {
            self.diagnostics.push(message);
        }
    }
}

fn span(text: &str, start: usize, end: usize) -> Result<&str, WalkError> {
    text.get(start..end).ok_or(WalkError::SpanOutOfBounds {
        start,
        end,
        len: text.len(),
    })
}

/// Read the element opened at `open`. `None` when the start tag never ends.
fn read_element<'a>(
    entry: &'a str,
    open: usize,
    tag: &str,
) -> Result<Option<Element<'a>>, WalkError> {
    let Some(tag_end) = find_tag_end(entry, open) else {
        return Ok(None);
    };

    let raw_attributes = span(entry, open + 1 + tag.len(), tag_end)?;
    let body_start = tag_end + 1;
    let body_end = find_tag(entry, body_start, tag, true).unwrap_or(entry.len());
    let end = find_tag_end(entry, body_end).map_or(entry.len(), |close| close + 1);

    Ok(Some(Element {
        attributes: parse_attributes(raw_attributes),
        inner: span(entry, body_start, body_end)?,
        end,
    }))
}

/// Text of a `<DD>` following the anchor, up to any nested list
fn read_description(entry: &str, from: usize) -> Result<Option<String>, WalkError> {
    let Some(open) = find_tag(entry, from, "dd", false) else {
        return Ok(None);
    };
    let start = find_tag_end(entry, open).map_or(entry.len(), |end| end + 1);
    let end = [
        find_tag(entry, start, "dl", false),
        find_tag(entry, start, "dl", true),
    ]
    .into_iter()
    .flatten()
    .min()
    .unwrap_or(entry.len());

    let text = element_text(span(entry, start, end)?);
    Ok((!text.is_empty()).then_some(text))
}

fn element_text(inner: &str) -> String {
    decode_entities(&strip_tags(inner)).trim().to_string()
}

fn location(path: &[String]) -> String {
    if path.is_empty() {
        String::new()
    } else {
        format!(" in folder '{}'", path.join(" > "))
    }
}

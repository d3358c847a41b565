//! Balanced extraction of a list element's inner content

use crate::scan::{find_tag, find_tag_end, is_tag_at};

/// Inner content of the first `tag` element in `text`
///
/// Nested elements of the same name are counted so the matching closer is
/// found. Without a matching closer the rest of the input after the opener
/// is returned. Returns `None` only when no opener exists at all.
pub fn extract_balanced<'a>(text: &'a str, tag: &str) -> Option<&'a str> {
    let bytes = text.as_bytes();
    let open = find_tag(text, 0, tag, false)?;
    let content_start = find_tag_end(text, open).map_or(text.len(), |end| end + 1);

    let mut depth = 1usize;
    let mut pos = content_start;
    while pos < bytes.len() {
        let Some(offset) = bytes[pos..].iter().position(|&b| b == b'<') else {
            break;
        };
        let at = pos + offset;
        if is_tag_at(bytes, at, tag, false) {
            depth += 1;
        } else if is_tag_at(bytes, at, tag, true) {
            depth -= 1;
            if depth == 0 {
                return text.get(content_start..at);
            }
        }
        pos = at + 1;
    }

    text.get(content_start..)
}

//! Case-insensitive tag scanning over raw export text
//!
//! All positions returned here point at ASCII bytes (`<`, `>`) or at the end
//! of the input, so they are always valid `str` slice boundaries.

/// Check whether a tag named `name` opens (or closes, when `closing`) at `pos`
///
/// The name must be followed by whitespace, `>`, `/` or the end of input, so
/// `<A` matches `<A HREF=...>` but not `<ABBR>`.
pub(crate) fn is_tag_at(bytes: &[u8], pos: usize, name: &str, closing: bool) -> bool {
    if bytes.get(pos) != Some(&b'<') {
        return false;
    }
    let mut cursor = pos + 1;
    if closing {
        if bytes.get(cursor) != Some(&b'/') {
            return false;
        }
        cursor += 1;
    }

    let name = name.as_bytes();
    let end = cursor + name.len();
    match bytes.get(cursor..end) {
        Some(candidate) if candidate.eq_ignore_ascii_case(name) => {}
        _ => return false,
    }

    match bytes.get(end) {
        None => true,
        Some(b) => b.is_ascii_whitespace() || *b == b'>' || *b == b'/',
    }
}

/// Position of the next `name` tag at or after `from`
pub(crate) fn find_tag(text: &str, from: usize, name: &str, closing: bool) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut pos = from;
    while pos < bytes.len() {
        let offset = bytes[pos..].iter().position(|&b| b == b'<')?;
        let at = pos + offset;
        if is_tag_at(bytes, at, name, closing) {
            return Some(at);
        }
        pos = at + 1;
    }
    None
}

/// Position of the `>` that ends the tag opened at `open`
///
/// Quoted attribute values may contain `>`. A quote only opens a value when
/// it directly follows `=`. If quoting never balances the first plain `>` is
/// used instead.
pub(crate) fn find_tag_end(text: &str, open: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut quote: Option<u8> = None;
    let mut previous = 0u8;
    for (i, &b) in bytes.iter().enumerate().skip(open + 1) {
        match quote {
            Some(q) if b == q => quote = None,
            Some(_) => continue,
            None if (b == b'"' || b == b'\'') && previous == b'=' => quote = Some(b),
            None if b == b'>' => return Some(i),
            None => {}
        }
        if !b.is_ascii_whitespace() {
            previous = b;
        }
    }
    bytes
        .iter()
        .skip(open + 1)
        .position(|&b| b == b'>')
        .map(|offset| open + 1 + offset)
}

/// Remove every `<...>` span, keeping the text between them
pub(crate) fn strip_tags(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(open) = rest.find('<') {
        out.push_str(&rest[..open]);
        match rest[open..].find('>') {
            Some(close) => rest = &rest[open + close + 1..],
            None => {
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

/// ASCII case-insensitive substring test
pub(crate) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    let needle = needle.as_bytes();
    if needle.is_empty() {
        return true;
    }
    haystack
        .as_bytes()
        .windows(needle.len())
        .any(|window| window.eq_ignore_ascii_case(needle))
}

//! HTML entity decoding for text taken out of bookmark exports

/// Named entities browsers emit in bookmark exports
const NAMED_ENTITIES: &[(&str, &str)] = &[
    ("amp", "&"),
    ("lt", "<"),
    ("gt", ">"),
    ("quot", "\""),
    ("#39", "'"),
    ("apos", "'"),
    ("nbsp", " "),
];

/// Longest reference body we attempt to resolve (`#x10FFFF` plus slack)
const MAX_REFERENCE_LEN: usize = 10;

/// Decode named, decimal and hexadecimal character references
///
/// Only the entities in [`NAMED_ENTITIES`] are known by name. Anything else,
/// including references to invalid code points, is left verbatim. Decoding is
/// a single pass, so `&amp;lt;` becomes `&lt;` and not `<`.
pub fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let after = &rest[amp + 1..];

        let decoded = after
            .find(';')
            .filter(|&semi| semi > 0 && semi <= MAX_REFERENCE_LEN)
            .and_then(|semi| resolve_reference(&after[..semi]).map(|c| (c, semi)));

        match decoded {
            Some((replacement, semi)) => {
                out.push_str(&replacement);
                rest = &after[semi + 1..];
            }
            None => {
                out.push('&');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

fn resolve_reference(body: &str) -> Option<String> {
    if let Some((_, value)) = NAMED_ENTITIES.iter().find(|(name, _)| *name == body) {
        return Some(value.to_string());
    }

    let numeric = body.strip_prefix('#')?;
    let hex = numeric.strip_prefix('x').or_else(|| numeric.strip_prefix('X'));
    // Integer parsing alone would accept a leading sign
    let code_point = match hex {
        Some(hex) if hex.bytes().all(|b| b.is_ascii_hexdigit()) => {
            u32::from_str_radix(hex, 16).ok()?
        }
        None if numeric.bytes().all(|b| b.is_ascii_digit()) => numeric.parse::<u32>().ok()?,
        _ => return None,
    };
    char::from_u32(code_point)
        .filter(|c| *c != '\0')
        .map(String::from)
}

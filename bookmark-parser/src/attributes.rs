//! Attribute tokenizer for the raw text inside a start tag

use std::collections::HashMap;

/// Parse `NAME=value` pairs from the text between a tag name and its `>`
///
/// Values may be double-quoted, single-quoted or an unquoted run of
/// non-whitespace. Keys are upper-cased. Attributes without a value are
/// ignored and a later duplicate overwrites an earlier one. Never fails.
pub fn parse_attributes(raw: &str) -> HashMap<String, String> {
    let mut attributes = HashMap::new();
    let mut chars = raw.char_indices().peekable();

    loop {
        while chars.next_if(|(_, c)| c.is_whitespace() || *c == '/').is_some() {}

        let Some(&(name_start, _)) = chars.peek() else {
            break;
        };
        let mut name_end = raw.len();
        while let Some(&(i, c)) = chars.peek() {
            if c.is_whitespace() || c == '=' {
                name_end = i;
                break;
            }
            chars.next();
        }
        let name = &raw[name_start..name_end];

        while chars.next_if(|(_, c)| c.is_whitespace()).is_some() {}
        if chars.next_if(|(_, c)| *c == '=').is_none() {
            // Bare attribute such as `FOLDED`
            continue;
        }
        while chars.next_if(|(_, c)| c.is_whitespace()).is_some() {}

        let value = match chars.peek() {
            Some(&(start, quote)) if quote == '"' || quote == '\'' => {
                chars.next();
                let mut end = raw.len();
                for (i, c) in chars.by_ref() {
                    if c == quote {
                        end = i;
                        break;
                    }
                }
                &raw[start + 1..end]
            }
            Some(&(start, _)) => {
                let mut end = raw.len();
                while let Some(&(i, c)) = chars.peek() {
                    if c.is_whitespace() {
                        end = i;
                        break;
                    }
                    chars.next();
                }
                &raw[start..end]
            }
            None => "",
        };

        if !name.is_empty() {
            attributes.insert(name.to_ascii_uppercase(), value.to_string());
        }
    }

    attributes
}

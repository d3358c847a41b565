//! Netscape bookmark file parser
//!
//! Converts the HTML bookmark exports produced by Chrome, Firefox, Edge and
//! Safari into a flat, ordered list of bookmarks and folders.
//!
//! The export dialect is not well-formed HTML (unclosed `<DT>`, optional
//! `<p>`, mixed tag case), so instead of a general HTML parser this crate
//! uses a narrow scanner that tracks `<DL>` nesting directly.
//!
//! # Example
//! ```
//! use bookmark_parser::parse_bookmark_html;
//!
//! let html = r#"<!DOCTYPE NETSCAPE-Bookmark-file-1>
//! <DL><p><DT><H3>Rust</H3>
//! <DL><p><DT><A HREF="https://www.rust-lang.org">Rust</A></DL><p>
//! </DL><p>"#;
//!
//! let result = parse_bookmark_html(html).unwrap();
//! assert_eq!(result.total_count, 1);
//! assert_eq!(result.bookmarks[0].folder_path, vec!["Rust"]);
//! ```

pub mod attributes;
pub mod browser_detect;
pub mod config;
pub mod entities;
pub mod extract;
pub mod netscape;
pub mod timestamp;

mod scan;
mod walker;

pub use attributes::parse_attributes;
pub use browser_detect::detect_browser_type;
pub use config::ParserConfig;
pub use entities::decode_entities;
pub use extract::extract_balanced;
pub use netscape::{is_valid_bookmark_html, parse_bookmark_html, NetscapeBookmarkParser};
pub use timestamp::parse_timestamp;

//! Frontmatter parsing from markdown documents.

use std::sync::LazyLock;

use regex::Regex;

use super::decoder::HeaderDecoder;
#[cfg(feature = "yaml")]
use super::decoder::YamlDecoder;
use super::types::{Frontmatter, ParsedDocument};

// Opening `---` on the first line, lazily captured block, closing `---` line.
// Both delimiter lines may carry a trailing `\r`; the closing one may end the text.
static FRONTMATTER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\A---\r?\n(?:(.*?)\r?\n)?---\r?(?:\n|\z)").unwrap()
});

/// Parse frontmatter from markdown content with the YAML decoder.
///
/// Frontmatter is delimited by `---` at the very start of the document:
/// ```markdown
/// ---
/// arm: public
/// ---
/// # Document content
/// ```
#[cfg(feature = "yaml")]
pub fn parse(content: &str) -> ParsedDocument {
    parse_with(&YamlDecoder, content)
}

/// Parse frontmatter from markdown content with an explicit decoder.
///
/// Never fails: a missing block yields the whole text as body, and a block
/// that does not decode to a mapping yields empty frontmatter while the body
/// still starts after the closing delimiter.
pub fn parse_with(decoder: &dyn HeaderDecoder, content: &str) -> ParsedDocument {
    let Some(caps) = FRONTMATTER_RE.captures(content) else {
        return ParsedDocument::without_frontmatter(content);
    };

    let raw = caps.get(1).map_or("", |m| m.as_str());
    let body = content[caps.get(0).map_or(0, |m| m.end())..].to_string();

    let (frontmatter, header_error) = match decoder.decode(raw) {
        Ok(fm) => (fm, None),
        Err(e) => {
            tracing::debug!("ignoring undecodable frontmatter: {e}");
            (Frontmatter::default(), Some(e.to_string()))
        }
    };

    ParsedDocument { frontmatter, body, had_delimiters: true, header_error }
}

//! Frontmatter types and data structures.

use serde::Serialize;
use std::collections::BTreeMap;

/// A decoded frontmatter value.
///
/// Decoders map their native value model onto this small variant set so the
/// rest of the crate never depends on a particular YAML library.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MetaValue {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    List(Vec<MetaValue>),
    Map(BTreeMap<String, MetaValue>),
}

impl MetaValue {
    /// Borrow the value as a string slice, if it is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            MetaValue::String(s) => Some(s),
            _ => None,
        }
    }
}

/// Parsed frontmatter of a markdown document.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Frontmatter {
    /// Fields as key-value pairs, ordered by key.
    #[serde(flatten)]
    pub fields: BTreeMap<String, MetaValue>,
}

impl Frontmatter {
    pub fn get(&self, key: &str) -> Option<&MetaValue> {
        self.fields.get(key)
    }

    /// Look up a string-valued field.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(MetaValue::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Result of splitting frontmatter from markdown.
#[derive(Debug, Clone)]
pub struct ParsedDocument {
    /// Decoded frontmatter. Empty when the document has no header block or
    /// the block could not be decoded into a mapping.
    pub frontmatter: Frontmatter,
    /// The markdown body (everything after the closing delimiter line).
    pub body: String,
    /// Whether a delimited header block was present at the start.
    pub had_delimiters: bool,
    /// Set when the header block was present but failed to decode.
    pub header_error: Option<String>,
}

impl ParsedDocument {
    pub(crate) fn without_frontmatter(content: &str) -> Self {
        Self {
            frontmatter: Frontmatter::default(),
            body: content.to_string(),
            had_delimiters: false,
            header_error: None,
        }
    }
}

//! Frontmatter extraction.
//!
//! This module provides functionality to:
//! - Detect the `---` delimited header block at the start of a document
//! - Decode it into a key-ordered mapping through a [`HeaderDecoder`]
//! - Split off the markdown body

pub mod decoder;
pub mod parser;
pub mod types;

#[cfg(feature = "yaml")]
pub use decoder::YamlDecoder;
pub use decoder::{DecodeError, HeaderDecoder, MissingDecoder, default_decoder};
#[cfg(feature = "yaml")]
pub use parser::parse;
pub use parser::parse_with;
pub use types::{Frontmatter, MetaValue, ParsedDocument};

//! Vault file discovery.

pub mod walker;

pub use walker::{MARKDOWN_EXTENSIONS, VaultWalker, VaultWalkerError, is_markdown_file};

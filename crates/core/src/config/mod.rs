//! Vault and repository locations.

pub mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader};
pub use types::{ConfigOverrides, Destinations, RepoTarget, ResolvedConfig};

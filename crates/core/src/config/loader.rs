use crate::arm::Arm;
use crate::config::types::{ConfigOverrides, Destinations, ResolvedConfig};
use crate::paths::normalize_lexically;
use std::env;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot determine current directory: {0}")]
    CurrentDir(#[source] std::io::Error),

    #[error("vault root does not exist: {0}")]
    MissingVault(String),
}

/// Environment variable naming the repository of `arm`.
pub fn env_var(arm: Arm) -> &'static str {
    match arm {
        Arm::Public => "PUB_REPO",
        Arm::Research => "RES_REPO",
        Arm::Private => "PRI_REPO",
    }
}

/// Repository location used when neither flag nor environment names one.
/// Relative to the vault root.
pub fn default_repo_path(arm: Arm) -> &'static str {
    match arm {
        Arm::Public => "../mkdocs-public",
        Arm::Research => "../mkdocs-research",
        Arm::Private => "../mkdocs-private",
    }
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Resolve the vault and repositories from overrides and the process environment.
    pub fn load(overrides: &ConfigOverrides) -> Result<ResolvedConfig, ConfigError> {
        Self::load_with_env(overrides, |key| env::var(key).ok())
    }

    /// Like [`ConfigLoader::load`], reading repository variables through `lookup`.
    pub fn load_with_env<F>(
        overrides: &ConfigOverrides,
        lookup: F,
    ) -> Result<ResolvedConfig, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let vault = match &overrides.vault_root {
            Some(p) => p.clone(),
            None => env::current_dir().map_err(ConfigError::CurrentDir)?,
        };
        let vault_root = vault
            .canonicalize()
            .map_err(|_| ConfigError::MissingVault(vault.display().to_string()))?;

        // Values are taken literally: no `~` or `$VAR` expansion.
        let repo = |arm: Arm| -> PathBuf {
            let raw = match overrides.repo(arm) {
                Some(p) => p.clone(),
                None => lookup(env_var(arm))
                    .filter(|v| !v.is_empty())
                    .map(PathBuf::from)
                    .unwrap_or_else(|| PathBuf::from(default_repo_path(arm))),
            };
            resolve_against(&vault_root, &raw)
        };

        let destinations =
            Destinations::new(repo(Arm::Public), repo(Arm::Research), repo(Arm::Private));

        tracing::debug!(vault = %vault_root.display(), "resolved configuration");
        Ok(ResolvedConfig { vault_root, destinations })
    }
}

/// Absolute paths are kept verbatim; relative ones are joined to `base`.
fn resolve_against(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        normalize_lexically(&base.join(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn defaults_are_siblings_of_the_vault() {
        let tmp = TempDir::new().unwrap();
        let vault = tmp.path().join("vault");
        std::fs::create_dir(&vault).unwrap();

        let overrides = ConfigOverrides { vault_root: Some(vault), ..Default::default() };
        let rc = ConfigLoader::load_with_env(&overrides, no_env).unwrap();

        let parent = rc.vault_root.parent().unwrap().to_path_buf();
        assert_eq!(rc.destinations.get(Arm::Public).path, parent.join("mkdocs-public"));
        assert_eq!(rc.destinations.get(Arm::Research).path, parent.join("mkdocs-research"));
        assert_eq!(rc.destinations.get(Arm::Private).path, parent.join("mkdocs-private"));
    }

    #[test]
    fn env_values_relative_and_absolute() {
        let tmp = TempDir::new().unwrap();
        let env: HashMap<&str, String> = HashMap::from([
            ("PUB_REPO", "site/public".to_string()),
            ("PRI_REPO", "/srv/private".to_string()),
        ]);

        let overrides =
            ConfigOverrides { vault_root: Some(tmp.path().to_path_buf()), ..Default::default() };
        let rc = ConfigLoader::load_with_env(&overrides, |k| env.get(k).cloned()).unwrap();

        assert_eq!(rc.destinations.get(Arm::Public).path, rc.vault_root.join("site/public"));
        assert_eq!(rc.destinations.get(Arm::Private).path, PathBuf::from("/srv/private"));
        assert!(rc.destinations.get(Arm::Research).path.ends_with("mkdocs-research"));
    }

    #[test]
    fn overrides_win_over_env() {
        let tmp = TempDir::new().unwrap();
        let overrides = ConfigOverrides {
            vault_root: Some(tmp.path().to_path_buf()),
            research: Some(PathBuf::from("/opt/research")),
            ..Default::default()
        };
        let rc = ConfigLoader::load_with_env(&overrides, |_| Some("/ignored".to_string()))
            .unwrap();

        assert_eq!(rc.destinations.get(Arm::Research).path, PathBuf::from("/opt/research"));
        assert_eq!(rc.destinations.get(Arm::Public).path, PathBuf::from("/ignored"));
    }

    #[test]
    fn tilde_is_a_relative_segment() {
        let tmp = TempDir::new().unwrap();
        let overrides =
            ConfigOverrides { vault_root: Some(tmp.path().to_path_buf()), ..Default::default() };
        let rc = ConfigLoader::load_with_env(&overrides, |k| {
            (k == "PUB_REPO").then(|| "~/public".to_string())
        })
        .unwrap();

        assert_eq!(rc.destinations.get(Arm::Public).path, rc.vault_root.join("~/public"));
    }

    #[test]
    fn missing_vault_fails() {
        let overrides = ConfigOverrides {
            vault_root: Some(PathBuf::from("/nonexistent/vault/root")),
            ..Default::default()
        };
        let err = ConfigLoader::load_with_env(&overrides, no_env).unwrap_err();
        assert!(matches!(err, ConfigError::MissingVault(_)));
    }
}

use std::path::PathBuf;

use tempfile::tempdir;
use vaultdist_core::Arm;
use vaultdist_core::config::loader::{ConfigError, ConfigLoader};
use vaultdist_core::config::types::ConfigOverrides;

#[test]
fn missing_vault_fails() {
    let tmp = tempdir().unwrap();
    let overrides = ConfigOverrides {
        vault_root: Some(tmp.path().join("nope/vault")),
        ..Default::default()
    };
    let err = ConfigLoader::load_with_env(&overrides, |_| None).unwrap_err();
    match err {
        ConfigError::MissingVault(p) if p.ends_with("nope/vault") => {}
        other => panic!("expected MissingVault, got {other:?}"),
    }
}

#[test]
fn dollar_in_absolute_repo_path_is_kept_verbatim() {
    let tmp = tempdir().unwrap();
    let overrides = ConfigOverrides {
        vault_root: Some(tmp.path().to_path_buf()),
        research: Some(PathBuf::from("/srv/site$HOME/research")),
        ..Default::default()
    };
    let rc = ConfigLoader::load_with_env(&overrides, |k| {
        (k == "PUB_REPO").then(|| "/srv/site$1/public".to_string())
    })
    .unwrap();

    assert_eq!(rc.destinations.get(Arm::Public).path, PathBuf::from("/srv/site$1/public"));
    assert_eq!(rc.destinations.get(Arm::Research).path, PathBuf::from("/srv/site$HOME/research"));
}

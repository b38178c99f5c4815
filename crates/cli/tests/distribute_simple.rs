use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

fn write(dir: &Path, rel: &str, content: impl AsRef<str>) {
    let path = dir.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content.as_ref()).unwrap();
}

fn vdist(root: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("vdist"));
    cmd.current_dir(root.join("vault"))
        .env("PUB_REPO", root.join("public"))
        .env("RES_REPO", root.join("research"))
        .env("PRI_REPO", root.join("private"))
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn distribute_routes_notes_by_arm() {
    let tmp = tempdir().unwrap();
    let root = tmp.path();

    write(root, "vault/notes/a.md", "---\narm: public\n---\n# A\n");
    write(root, "vault/notes/b.md", "# B\n");
    write(root, "vault/journal/c.md", "---\narm: \"  PRIVATE \"\n---\n# C\n");
    write(root, "vault/images/x.png", "png");

    vdist(root)
        .assert()
        .success()
        .stdout(predicate::str::contains("Distributed notes into:"))
        .stdout(predicate::str::contains(" - public: "))
        .stdout(predicate::str::contains(" - research: "))
        .stdout(predicate::str::contains(" - private: "));

    assert!(root.join("public/docs/notes/a.md").is_file());
    assert!(root.join("research/docs/notes/b.md").is_file());
    assert!(root.join("private/docs/journal/c.md").is_file());
    for arm in ["public", "research", "private"] {
        assert!(root.join(arm).join("docs/images/x.png").is_file());
    }
}

#[test]
fn distribute_skips_obsidian_and_git() {
    let tmp = tempdir().unwrap();
    let root = tmp.path();

    write(root, "vault/.obsidian/workspace.md", "---\narm: public\n---\n");
    write(root, "vault/.git/config.md", "[core]\n");
    write(root, "vault/index.md", "# Home\n");

    vdist(root).assert().success();

    for arm in ["public", "research", "private"] {
        let docs = root.join(arm).join("docs");
        assert!(!docs.join(".obsidian/workspace.md").exists());
        assert!(!docs.join(".git/config.md").exists());
    }
    assert!(root.join("research/docs/index.md").is_file());
}

#[test]
fn distribute_uses_sibling_defaults() {
    let tmp = tempdir().unwrap();
    let root = tmp.path();
    write(root, "vault/note.md", "---\narm: public\n---\n");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("vdist"));
    cmd.current_dir(root.join("vault"))
        .env_remove("PUB_REPO")
        .env_remove("RES_REPO")
        .env_remove("PRI_REPO")
        .assert()
        .success()
        .stdout(predicate::str::contains("mkdocs-public"));

    assert!(root.join("mkdocs-public/docs/note.md").is_file());
    assert!(root.join("mkdocs-research/docs/assets").is_dir());
    assert!(root.join("mkdocs-private/docs/attachments").is_dir());
}

#[test]
fn flags_override_environment() {
    let tmp = tempdir().unwrap();
    let root = tmp.path();
    write(root, "vault/note.md", "---\narm: research\n---\n");

    vdist(root)
        .arg("--vault")
        .arg(root.join("vault"))
        .arg("--research")
        .arg(root.join("elsewhere"))
        .assert()
        .success();

    assert!(root.join("elsewhere/docs/note.md").is_file());
    assert!(!root.join("research/docs/note.md").exists());
}

#[test]
fn sanitizes_output_paths() {
    let tmp = tempdir().unwrap();
    let root = tmp.path();
    write(root, "vault/Ideas (2024)/what now?.md", "# ?\n");

    vdist(root).assert().success();

    assert!(root.join("research/docs/Ideas 2024/what now.md").is_file());
}

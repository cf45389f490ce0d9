use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use git2::{Repository, Signature};
use tempfile::TempDir;

fn patch_release() -> Command {
    Command::new(env!("CARGO_BIN_EXE_patch-release"))
}

#[test]
fn test_help() {
    let output = patch_release().arg("--help").output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("patch-release"));
    assert!(stdout.contains("--major"));
}

#[test]
fn test_explicit_tags_print_version_only() {
    let output = patch_release()
        .args(["--major", "1", "--minor", "2", "--tags", "v1.2.0,v1.2.1,v1.2.5,nightly"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "1.2.6\n");
}

#[test]
fn test_env_format() {
    let output = patch_release()
        .args(["--major", "3", "--minor", "0", "--tags", "v2.9.9", "--format", "env"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "VERSION=3.0.0\nTAG=v3.0.0\n"
    );
}

#[test]
fn test_negative_major_fails() {
    let output = patch_release()
        .args(["--major", "-1", "--minor", "2", "--tags", "v1.2.0"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Invalid version request"));
}

#[test]
fn test_tags_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tags.txt");
    std::fs::write(&path, "v0.4.1\nv0.4.2\n\nsomething-else\n").unwrap();

    let output = patch_release()
        .args(["--major", "0", "--minor", "4", "--tags-file"])
        .arg(&path)
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "0.4.3\n");
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn write_config(dir: &Path, contents: &str) -> std::path::PathBuf {
    let path = dir.join("patchrelease.toml");
    std::fs::write(&path, contents).unwrap();
    path
}

/// Repository with a single commit carrying the given lightweight tags.
fn repo_with_tags(tags: &[&str]) -> TempDir {
    let dir = TempDir::new().unwrap();
    let repo = Repository::init(dir.path()).unwrap();
    let sig = Signature::now("Release Bot", "bot@example.com").unwrap();
    let tree_id = repo.index().unwrap().write_tree().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();
    let commit_id = repo
        .commit(Some("HEAD"), &sig, &sig, "initial commit", &tree, &[])
        .unwrap();
    let commit = repo.find_object(commit_id, None).unwrap();
    for tag in tags {
        repo.tag_lightweight(tag, &commit, false).unwrap();
    }
    dir
}

#[test]
fn test_tags_from_stdin() {
    let mut child = patch_release()
        .args(["--major", "1", "--minor", "2", "--tags-file", "-"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"v1.2.9\nv1.2.10\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "1.2.11\n");
}

#[test]
fn test_version_line_from_config() {
    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path(), "[version]\nmajor = 2\nminor = 5\n");

    let output = patch_release()
        .args(["--tags", "v2.5.0,v2.5.1,v2.6.0", "--config"])
        .arg(&config)
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "2.5.2\n");
}

#[test]
fn test_negative_major_in_config_is_invalid_request() {
    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path(), "[version]\nmajor = -1\nminor = 2\n");

    let output = patch_release()
        .args(["--tags", "v1.2.0", "--config"])
        .arg(&config)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Invalid version request"));
    assert!(stderr.contains("major must not be negative"));
}

#[test]
fn test_command_line_overrides_invalid_config() {
    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path(), "[version]\nmajor = -1\nminor = \"x\"\n");

    let output = patch_release()
        .args(["--major", "1", "--minor", "2", "--tags", "v1.2.0", "--config"])
        .arg(&config)
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "1.2.1\n");
}

#[test]
fn test_create_tag_in_repository() {
    let dir = repo_with_tags(&["v3.1.0", "v3.1.1"]);

    let output = patch_release()
        .args(["--major", "3", "--minor", "1", "--create-tag", "--format", "tag", "--repo"])
        .arg(dir.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "v3.1.2\n");

    let repo = Repository::open(dir.path()).unwrap();
    assert!(repo.find_reference("refs/tags/v3.1.2").is_ok());
}

#[test]
fn test_dry_run_does_not_create_tag() {
    let dir = repo_with_tags(&["v3.1.0"]);

    let output = patch_release()
        .args(["--major", "3", "--minor", "1", "--create-tag", "--dry-run", "--repo"])
        .arg(dir.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "3.1.1\n");

    let repo = Repository::open(dir.path()).unwrap();
    assert!(repo.find_reference("refs/tags/v3.1.1").is_err());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Dry run"));
}

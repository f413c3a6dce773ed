use std::fs::{create_dir_all, write};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_cli_requires_root() {
    Command::cargo_bin("jektohug")
        .unwrap()
        .assert()
        .failure()
        .stderr(predicate::str::contains("<ROOT>"));
}

#[test]
fn test_cli_dry_run_prints_plan() {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path().join("site");
    create_dir_all(root.join("_sass")).unwrap();
    write(root.join("_sass").join("main.scss"), "").unwrap();
    write(root.join("_config.yml"), "title: Blog\n").unwrap();

    Command::cargo_bin("jektohug")
        .unwrap()
        .arg(&root)
        .arg("--dry")
        .arg("--log-file")
        .arg("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Files to be moved:"))
        .stdout(predicate::str::contains("Configuration to be translated:"));

    assert!(root.join("_sass").join("main.scss").exists());
    assert!(!root.join("hugo.toml").exists());
}

#[test]
fn test_cli_migrates_site() {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path().join("site");
    let output = temp_dir.path().join("hugo");
    create_dir_all(root.join("pages")).unwrap();
    write(root.join("pages").join("index.md"), "# Home").unwrap();
    write(root.join("_config.yml"), "url: https://example.com\n").unwrap();

    Command::cargo_bin("jektohug")
        .unwrap()
        .arg(&root)
        .arg("-o")
        .arg(&output)
        .arg("-L")
        .arg("--log-file")
        .arg("")
        .assert()
        .success();

    assert!(output.join("content").join("index.md").exists());
    assert_eq!(
        std::fs::read_to_string(output.join("hugo.toml")).unwrap(),
        "BaseURL=https://example.com\n"
    );
}

#[test]
fn test_cli_missing_root_exits_with_failure() {
    let temp_dir = tempdir().unwrap();

    Command::cargo_bin("jektohug")
        .unwrap()
        .arg(temp_dir.path().join("missing"))
        .arg("--log-file")
        .arg("")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Site root not found"));
}

fn create_site(root: &std::path::Path) {
    create_dir_all(root.join("_sass")).unwrap();
    create_dir_all(root.join("pages")).unwrap();
    write(root.join("_sass").join("main.scss"), "body {}").unwrap();
    write(root.join("pages").join("about.md"), "# About").unwrap();
    write(root.join("_config.yml"), "title: Blog\nurl: /blog\nbaseurl: /x\n").unwrap();
}

#[test]
fn test_cli_migrates_current_folder_in_place() {
    let temp_dir = tempdir().unwrap();
    let site = temp_dir.path().join("site");
    create_site(&site);

    Command::cargo_bin("jektohug")
        .unwrap()
        .current_dir(&site)
        .arg(".")
        .arg("--log-file")
        .arg("")
        .assert()
        .success();

    assert!(site.join("assets").join("scss").join("main.scss").exists());
    assert!(site.join("content").join("about.md").exists());
    assert!(!site.join("_sass").join("main.scss").exists());
    assert_eq!(
        std::fs::read_to_string(site.join("hugo.toml")).unwrap(),
        "title=Blog\nBaseURL=/blog\n"
    );
}

#[test]
fn test_cli_migrates_current_folder_into_nested_output() {
    let temp_dir = tempdir().unwrap();
    let site = temp_dir.path().join("site");
    create_site(&site);

    Command::cargo_bin("jektohug")
        .unwrap()
        .current_dir(&site)
        .args([".", "-o", "out", "--log-file", ""])
        .assert()
        .success();

    let output = site.join("out");
    assert!(output.join("assets").join("scss").join("main.scss").exists());
    assert!(output.join("content").join("about.md").exists());
    assert!(output.join("hugo.toml").exists());
    assert!(!output.join("out").exists());
    assert!(site.join("_config.yml").exists());
}

#[test]
fn test_cli_level_from_environment() {
    let temp_dir = tempdir().unwrap();
    let site = temp_dir.path().join("site");
    create_site(&site);

    Command::cargo_bin("jektohug")
        .unwrap()
        .current_dir(&site)
        .env("JEKTOHUG_LOG", "trace")
        .args([".", "--dry", "--log-file", ""])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mapped"));

    Command::cargo_bin("jektohug")
        .unwrap()
        .env("JEKTOHUG_LOG", "chatty")
        .args([site.to_str().unwrap(), "--log-file", ""])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Unknown verbosity level: chatty"));
}

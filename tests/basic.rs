use assert_cmd::prelude::*;
use std::process::Command;
use tempfile::tempdir;
use std::fs;
use std::path::Path;

fn seed(root: &Path) {
    fs::create_dir_all(root.join("A")).unwrap();
    fs::create_dir_all(root.join("B")).unwrap();
    fs::write(root.join("A/one.md"), "x").unwrap();
    fs::write(root.join("A/two.md"), "y").unwrap();
    fs::write(root.join("B/three.md"), "z").unwrap();
}

fn stdout_of(cmd: &mut Command) -> String {
    let out = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(out).unwrap()
}

#[test]
fn scan_prints_sorted_tree() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("data");
    seed(&root);

    let mut cmd = Command::cargo_bin("docnav").unwrap();
    let v: serde_json::Value = serde_json::from_str(&stdout_of(cmd.arg("scan").arg(&root))).unwrap();
    let arr = v.as_array().unwrap();
    assert_eq!(arr.len(), 2);
    assert_eq!(arr[0]["name"], "A");
    assert_eq!(arr[0]["path"], "A");
    assert_eq!(arr[0]["files"][0]["file"], "one.md");
    assert_eq!(arr[0]["files"][0]["id"], "/src/data/A/one.md");
    assert_eq!(arr[0]["files"][0]["content"], "x");
    assert_eq!(arr[0]["files"][1]["file"], "two.md");
    assert_eq!(arr[1]["files"][0]["label"], "three");
}

#[test]
fn initial_selection_for_nested_folder() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("data");
    fs::create_dir_all(root.join("X/Y")).unwrap();
    fs::write(root.join("X/Y/f.md"), "c").unwrap();

    let mut cmd = Command::cargo_bin("docnav").unwrap();
    let v: serde_json::Value = serde_json::from_str(&stdout_of(cmd.arg("initial").arg(&root))).unwrap();
    assert_eq!(v["file"], "/src/data/X/Y/f.md");
    assert_eq!(v["parent_chain"], serde_json::json!(["X", "Y"]));
    assert_eq!(v["open"], serde_json::json!({"root": "X", "X": "Y"}));
}

#[test]
fn missing_root_is_an_empty_navigator() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("absent");
    let state = dir.path().join("state.json");

    let mut cmd = Command::cargo_bin("docnav").unwrap();
    assert_eq!(stdout_of(cmd.arg("scan").arg(&root)).trim(), "[]");

    let mut cmd = Command::cargo_bin("docnav").unwrap();
    let rows = stdout_of(cmd.arg("tree").arg(&root).arg("--state").arg(&state));
    assert_eq!(rows, "empty\t\t(no documents)\t\n");

    let mut cmd = Command::cargo_bin("docnav").unwrap();
    let pane = stdout_of(cmd.arg("show").arg(&root).arg("--state").arg(&state));
    assert_eq!(pane, "Select a document to view\n");

    let mut cmd = Command::cargo_bin("docnav").unwrap();
    let v: serde_json::Value = serde_json::from_str(&stdout_of(cmd.arg("initial").arg(&root))).unwrap();
    assert!(v["file"].is_null());
    assert_eq!(v["parent_chain"], serde_json::json!([]));
}

#[test]
fn write_index_defaults_into_root() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("data");
    seed(&root);

    let mut cmd = Command::cargo_bin("docnav").unwrap();
    let printed = stdout_of(cmd.arg("write-index").arg(&root));
    let out_path = root.join(".docnav_index.json");
    assert_eq!(printed.trim(), out_path.to_str().unwrap());
    let s = fs::read_to_string(&out_path).unwrap();
    assert!(s.contains("three.md"));

    // the index file is hidden from later scans
    let mut cmd = Command::cargo_bin("docnav").unwrap();
    let v: serde_json::Value = serde_json::from_str(&stdout_of(cmd.arg("scan").arg(&root))).unwrap();
    assert_eq!(v.as_array().unwrap().len(), 2);
}

#[test]
fn bundle_with_foreign_ids_still_builds() {
    let dir = tempdir().unwrap();
    let bundle = dir.path().join("bundle.json");
    fs::write(&bundle, r#"{
        "/src/data/A/a.md": "alpha",
        "/home/me/site/src/data/B/b.md": "beta",
        "/src/data/loose.md": "gamma"
    }"#).unwrap();

    let mut cmd = Command::cargo_bin("docnav").unwrap();
    let v: serde_json::Value = serde_json::from_str(&stdout_of(cmd.arg("scan").arg("--bundle").arg(&bundle))).unwrap();
    let names: Vec<_> = v.as_array().unwrap().iter().map(|n| n["name"].as_str().unwrap().to_string()).collect();
    assert_eq!(names, vec!["A", "B"]);

    let mut cmd = Command::cargo_bin("docnav").unwrap();
    let report = stdout_of(cmd.arg("check").arg("--bundle").arg(&bundle));
    assert_eq!(report, "documents\t2\nfolders\t2\nloose\t/src/data/loose.md\nmalformed\t/home/me/site/src/data/B/b.md\n");
}

#[test]
fn config_file_sets_prefix() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("data");
    seed(&root);
    fs::write(root.join("docnav.toml"), "prefix = \"/kb\"\n").unwrap();

    let mut cmd = Command::cargo_bin("docnav").unwrap();
    let v: serde_json::Value = serde_json::from_str(&stdout_of(cmd.arg("scan").arg(&root))).unwrap();
    assert_eq!(v[0]["files"][0]["id"], "/kb/A/one.md");
}

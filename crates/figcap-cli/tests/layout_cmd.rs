//! Integration tests for the `layout` subcommand.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn cmd() -> Command {
    Command::cargo_bin("figcap").unwrap()
}

const PAGE: &str = r#"<html><body>
<img src="page-1.png" width="800" height="1000">
<div style="position:absolute;top:50px;left:10px;width:40px;height:10px"></div>
<div style="position:absolute;top:20px;left:10px;width:100px;height:15px">Figure 1</div>
</body></html>"#;

#[test]
fn layout_text_output_lists_regions() {
    let dir = TempDir::new().unwrap();
    let page = dir.path().join("page-1.html");
    fs::write(&page, PAGE).unwrap();

    cmd()
        .args(["layout", page.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("page\t800x1000"))
        .stdout(predicate::str::contains("10\t20\t110\t35\tFigure 1"));
}

#[test]
fn layout_json_output_is_parseable() {
    let dir = TempDir::new().unwrap();
    let page = dir.path().join("page-1.html");
    fs::write(&page, PAGE).unwrap();

    let output = cmd()
        .args(["layout", page.to_str().unwrap(), "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["width"], 800);
    assert_eq!(value["height"], 1000);
    assert_eq!(value["text_lines"].as_array().unwrap().len(), 1);
    assert_eq!(value["text_lines"][0]["text"], "Figure 1");
    assert_eq!(value["text_lines"][0]["x1"], 110);
}

#[test]
fn layout_without_page_image_fails() {
    let dir = TempDir::new().unwrap();
    let page = dir.path().join("broken.html");
    fs::write(&page, "<html><body><div>text only</div></body></html>").unwrap();

    cmd()
        .args(["layout", page.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no page image element"));
}

#[test]
fn layout_of_missing_file_fails() {
    cmd()
        .args(["layout", "/nonexistent/page-1.html"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to render"));
}

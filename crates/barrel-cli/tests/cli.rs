//! End-to-end tests for the `barrel` binary.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn barrel(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_barrel"))
        .args(args)
        .env_remove("BARREL_CONFIG")
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn write(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).unwrap();
}

fn folder() -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("widgets")).unwrap();
    temp
}

#[test]
fn test_generate_writes_index() {
    let temp = folder();
    let dir = temp.path().join("widgets");
    write(&dir, "a.ts", "export default function a(){}");
    write(&dir, "b.ts", "export const b = 1;");

    let output = barrel(&["generate", dir.to_str().unwrap()]);

    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "index file created in /widgets");
    assert_eq!(
        fs::read_to_string(dir.join("index.ts")).unwrap(),
        "export { default } from './a';\nexport * from './b';"
    );
}

#[test]
fn test_generate_from_active_file() {
    let temp = folder();
    let dir = temp.path().join("widgets");
    write(&dir, "a.jsx", "export default class A {}");
    write(&dir, "b.jsx", "export default () => null;");

    let active = dir.join("a.jsx");
    let output = barrel(&["generate", "--file", active.to_str().unwrap()]);

    assert!(output.status.success());
    assert_eq!(
        fs::read_to_string(dir.join("index.js")).unwrap(),
        "export { default as a } from './a';\nexport { default as b } from './b';"
    );
}

#[test]
fn test_generate_without_target() {
    let output = barrel(&["generate"]);

    assert!(output.status.success());
    assert_eq!(
        stdout(&output).trim(),
        "Run command in a file that is inside the same folder you want to create index file"
    );
}

#[test]
fn test_generate_keeps_unsafe_index() {
    let temp = folder();
    let dir = temp.path().join("widgets");
    let existing = "import './polyfill';\nexport * from './a';";
    write(&dir, "a.ts", "export const a = 1;");
    write(&dir, "index.ts", existing);

    let output = barrel(&["generate", dir.to_str().unwrap()]);

    assert!(output.status.success());
    assert_eq!(
        stdout(&output).trim(),
        "Index file already exists at /widgets (contains import statements)"
    );
    assert_eq!(fs::read_to_string(dir.join("index.ts")).unwrap(), existing);
}

#[test]
fn test_dry_run_does_not_write() {
    let temp = folder();
    let dir = temp.path().join("widgets");
    write(&dir, "a.ts", "export const a = 1;");

    let output = barrel(&["generate", dir.to_str().unwrap(), "--dry-run"]);

    assert!(output.status.success());
    assert!(stdout(&output).contains("export * from './a';"));
    assert!(!dir.join("index.ts").exists());
}

#[test]
fn test_generate_json_output() {
    let temp = folder();
    let dir = temp.path().join("widgets");
    write(&dir, "theme.css", "body {}");

    let output = barrel(&["generate", dir.to_str().unwrap(), "--format", "json"]);

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["outcome"], "no_supported_files");
    assert_eq!(json["extensions"], serde_json::json!(["js", "ts", "jsx", "tsx"]));
}

#[test]
fn test_generate_missing_dir_fails() {
    let temp = folder();
    let missing = temp.path().join("nope");

    let output = barrel(&["generate", missing.to_str().unwrap()]);

    assert!(!output.status.success());
}

#[test]
fn test_inspect_json() {
    let temp = folder();
    let dir = temp.path().join("widgets");
    write(&dir, "a.ts", "export default 1;\nexport const b = 2;");
    write(&dir, "index.ts", "export * from './a';");

    let output = barrel(&["inspect", dir.to_str().unwrap(), "--format", "json"]);

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["extension"], "ts");
    assert_eq!(json["existing_index"]["verdict"], "export_only");
    assert_eq!(json["files"][0]["file"]["name"], "a.ts");
    assert_eq!(json["files"][0]["shape"]["has_default"], true);
    assert_eq!(json["files"][0]["shape"]["has_named"], true);
}

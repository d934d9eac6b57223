// Rust guideline compliant 2026-10-14

//! End-to-end tests running the `helium` binary against a snapshot.

use serde_json::Value;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const KITCHEN: &str = "aa11aa11-0000-4000-8000-000000000001";
const KITCHENETTE: &str = "ab22ab22-0000-4000-8000-000000000002";

fn snapshot() -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp directory");
    fs::write(
        dir.path().join("sensor.json"),
        format!(
            r#"{{"data": [
                {{"id": "{KITCHEN}", "type": "sensor",
                  "attributes": {{"name": "Kitchen"}}, "meta": {{"mac": "6081F9FFFE000001"}}}},
                {{"id": "{KITCHENETTE}", "type": "sensor",
                  "attributes": {{"name": "Kitchenette"}}, "meta": {{"mac": "6081F9FFFE000002"}}}}
            ]}}"#
        ),
    )
    .expect("Failed to write sensors");
    fs::write(
        dir.path().join("label.json"),
        format!(
            r#"{{"data": [
                {{"id": "cc33cc33-0000-4000-8000-000000000003", "type": "label",
                  "attributes": {{"name": "Home"}},
                  "relationships": {{"sensor": {{"data": [{{"id": "{KITCHEN}", "type": "sensor"}}]}}}}}}
            ]}}"#
        ),
    )
    .expect("Failed to write labels");
    dir
}

fn helium(data_dir: &Path, args: &[&str]) -> Output {
    helium_command(data_dir, args)
        .output()
        .expect("Failed to run helium")
}

fn helium_command(data_dir: &Path, args: &[&str]) -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_helium"));
    command
        .arg("--data-dir")
        .arg(data_dir)
        .args(args)
        .env("NO_COLOR", "1")
        .env_remove("HELIUM_OUTPUT_FORMAT")
        .env_remove("HELIUM_UUID")
        .env_remove("HELIUM_DATA_DIR")
        .env_remove("HELIUM_COMMANDER_DEBUG")
        .env_remove("HELIUM_LOG");
    command
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_lookup_exact_name_prefix() {
    let dir = snapshot();
    let output = helium(dir.path(), &["sensor", "lookup", "kitchene"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "ab22ab22\n");
}

#[test]
fn test_ambiguous_reference_exits_with_error() {
    let dir = snapshot();
    let output = helium(dir.path(), &["sensor", "lookup", "kitchen"]);

    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("ambiguous id: 'kitchen' (aa11aa11, ab22ab22)"), "{}", err);
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_unknown_reference_exits_with_error() {
    let dir = snapshot();
    let output = helium(dir.path(), &["sensor", "show", "attic"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("no resource matches reference 'attic'"));
}

#[test]
fn test_json_errors_are_structured() {
    let dir = snapshot();
    let output = helium(dir.path(), &["--format", "json", "sensor", "lookup", "attic"]);

    assert_eq!(output.status.code(), Some(1));
    let envelope: Value = serde_json::from_str(stderr(&output).trim()).expect("json error");
    assert_eq!(envelope["code"], "not_found");
    assert_eq!(envelope["details"]["reference"], "attic");
}

#[test]
fn test_json_list_output() {
    let dir = snapshot();
    let output = helium(
        dir.path(),
        &["sensor", "list", "--format", "json", "--uuid", "--sort", "name", "--reverse"],
    );

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let rows: Value = serde_json::from_str(&stdout(&output)).expect("json output");
    assert_eq!(rows[0]["id"], KITCHENETTE);
    assert_eq!(rows[1]["name"], "Kitchen");
}

#[test]
fn test_config_sets_default_format() {
    let dir = snapshot();
    fs::write(dir.path().join("config.toml"), "output_format = \"csv\"\n")
        .expect("Failed to write config");
    let output = helium(dir.path(), &["sensor", "show", "kitchene"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "id,mac,name,ports,scripts\nab22ab22,6081F9FFFE000002,Kitchenette,,\n"
    );

    let output = helium(dir.path(), &["--format", "tabular", "sensor", "show", "kitchene"]);
    assert!(!stdout(&output).starts_with("id,"));
}

#[test]
fn test_label_update_from_file() {
    let dir = snapshot();
    let list = dir.path().join("add.txt");
    fs::write(&list, "kitchene\n\n").expect("Failed to write resource file");
    let add = format!("@{}", list.display());

    let output = helium(
        dir.path(),
        &["label", "update", "home", "--add", &add, "--remove", "aa11aa11"],
    );

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let body: Value = serde_json::from_str(&stdout(&output)).expect("json body");
    assert_eq!(body["data"][0]["id"], KITCHENETTE);
    assert_eq!(body["data"].as_array().map(Vec::len), Some(1));
}

#[test]
fn test_commands_lists_registry() {
    let dir = snapshot();
    let output = helium(dir.path(), &["commands"]);

    assert!(output.status.success());
    let text = stdout(&output);
    for name in ["element", "label", "organization", "sensor", "timeseries", "user"] {
        assert!(text.contains(name), "missing {}", name);
    }
}

#[test]
fn test_debug_env_prints_error_chain() {
    let dir = snapshot();
    fs::write(dir.path().join("config.toml"), "output_format = \"xml\"\n")
        .expect("Failed to write config");

    let output = helium(dir.path(), &["sensor", "list"]);
    assert_eq!(output.status.code(), Some(1));
    let short = stderr(&output);
    assert!(short.starts_with("failed to load config from"), "{}", short);
    assert!(!short.contains("Caused by:"));

    let output = helium_command(dir.path(), &["--format", "json", "sensor", "list"])
        .env("HELIUM_COMMANDER_DEBUG", "1")
        .output()
        .expect("Failed to run helium");
    assert_eq!(output.status.code(), Some(1));
    let debug = stderr(&output);
    assert!(debug.starts_with("failed to load config from"), "{}", debug);
    assert!(debug.contains("Caused by:"), "{}", debug);
    assert!(debug.contains("Invalid configuration"), "{}", debug);
}

use predicates::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::Value;
use std::process::Command;
use tempfile::TempDir;

fn cmd() -> assert_cmd::Command {
    assert_cmd::Command::from(Command::new(env!("CARGO_BIN_EXE_refdoc")))
}

fn fixture_path(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

/// Copy a fixture into a fresh temp dir so outputs land next to it.
fn staged_fixture(name: &str) -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(name);
    std::fs::copy(fixture_path(name), &path).unwrap();
    (dir, path)
}

fn read_json(path: &std::path::Path) -> Value {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

// -- file mode --

#[test]
fn file_mode_writes_preprocessed_next_to_input() {
    let (dir, input) = staged_fixture("dply_docs.json");

    cmd().arg(&input).assert().success();

    let output = read_json(&dir.path().join("preprocessed_dply_docs.json"));
    let ids: Vec<_> = output
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_str().unwrap())
        .collect();
    // the record without item_id is dropped
    assert_eq!(ids, ["filter", "slice", "starwars"]);
}

#[test]
fn file_mode_record_shape() {
    let (dir, input) = staged_fixture("dply_docs.json");

    cmd().arg(&input).assert().success();

    let output = read_json(&dir.path().join("preprocessed_dply_docs.json"));
    let filter = &output[0];
    assert_eq!(filter["code"], "filter(.data, ..., .by = NULL, .preserve = FALSE)");
    assert_eq!(
        filter["summary"],
        "The filter() function is used to subset a data frame, retaining all rows that satisfy your conditions"
    );
    assert!(filter.get("example").is_none());

    let params = filter["code-info"]["parameters"].as_array().unwrap();
    let names: Vec<_> = params.iter().map(|p| p["name"].as_str().unwrap()).collect();
    assert_eq!(names, [".data", "...", ".by", ".preserve"]);
    assert_eq!(params[0]["type"], "dataframe");
    assert!(params[0].get("default").is_none());
    assert_eq!(params[2]["default"], "NULL");
    assert_eq!(params[2]["description"], "");
    assert_eq!(params[3]["default"], "FALSE");
    assert_eq!(params[3]["type"], "others");
    assert!(params[3]["description"]
        .as_str()
        .unwrap()
        .starts_with(" Relevant when the .data input is grouped"));
}

#[test]
fn file_mode_example_and_renamed_code() {
    let (dir, input) = staged_fixture("dply_docs.json");

    cmd().arg(&input).assert().success();

    let output = read_json(&dir.path().join("preprocessed_dply_docs.json"));
    let slice = &output[1];
    assert_eq!(slice["code"], "slice(.data, ..., n, prop, by = NULL)");
    assert_eq!(slice["example"], "  slice(mtcars, 1L)");

    let params = slice["code-info"]["parameters"].as_array().unwrap();
    assert_eq!(params[4]["name"], "by");
    assert_eq!(params[4]["type"], "string");

    let starwars = &output[2];
    assert_eq!(starwars["code"], "starwars");
    assert_eq!(starwars["code-info"]["parameters"], Value::Array(Vec::new()));
}

#[test]
fn file_mode_overwrites_previous_output() {
    let (dir, input) = staged_fixture("dply_docs.json");
    let out = dir.path().join("preprocessed_dply_docs.json");
    std::fs::write(&out, "stale").unwrap();

    cmd().arg(&input).assert().success();
    let first = std::fs::read_to_string(&out).unwrap();
    cmd().arg(&input).assert().success();
    let second = std::fs::read_to_string(&out).unwrap();

    assert!(!first.contains("stale"));
    assert_eq!(first, second);
}

#[test]
fn file_mode_output_dir() {
    let out_dir = TempDir::new().unwrap();
    let target = out_dir.path().join("nested");

    cmd()
        .args(["-o", target.to_str().unwrap()])
        .arg(fixture_path("dply_docs.json"))
        .assert()
        .success();

    assert!(target.join("preprocessed_dply_docs.json").exists());
}

#[test]
fn file_mode_jsonl_format() {
    let (dir, input) = staged_fixture("dply_docs.json");

    cmd().args(["-f", "jsonl"]).arg(&input).assert().success();

    let output = std::fs::read_to_string(dir.path().join("preprocessed_dply_docs.jsonl")).unwrap();
    assert_eq!(output.lines().count(), 3);
    for line in output.lines() {
        let record: Value = serde_json::from_str(line).unwrap();
        assert!(record["id"].is_string());
    }
}

#[test]
fn file_mode_skips_malformed_input() {
    let dir = TempDir::new().unwrap();
    let bad = dir.path().join("bad.json");
    std::fs::write(&bad, "{ not json").unwrap();

    cmd()
        .arg(&bad)
        .assert()
        .success()
        .stderr(predicate::str::contains("skipping"));

    assert!(!dir.path().join("preprocessed_bad.json").exists());
}

#[test]
fn invalid_format_fails() {
    cmd()
        .args(["-f", "xml"])
        .arg(fixture_path("dply_docs.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown format"));
}

// -- stdin mode --

#[test]
fn stdin_mode_writes_stdout() {
    let input = r#"[{"item_id": "n", "code": "n()", "description": "Count rows. Fast."}]"#;

    let assert = cmd().write_stdin(input).assert().success();
    let output: Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(
        output,
        serde_json::json!([{
            "id": "n",
            "code": "n()",
            "summary": "Count rows",
            "code-info": { "id": "n", "parameters": [] }
        }])
    );
}

#[test]
fn stdin_mode_warns_on_dropped_records() {
    let input = r#"[{"code": "x()"}, {"item_id": "y", "code": "y(a)"}]"#;

    let assert = cmd()
        .write_stdin(input)
        .assert()
        .success()
        .stderr(predicate::str::contains("dropping record without item_id"));
    let output: Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(output.as_array().unwrap().len(), 1);
}

#[test]
fn stdin_mode_rejects_non_array() {
    cmd()
        .write_stdin(r#"{"item_id": "x"}"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse stdin"));
}

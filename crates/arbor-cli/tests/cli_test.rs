use assert_cmd::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

fn repo_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .and_then(|p| p.parent())
        .expect("expected crates/<name> layout")
        .to_path_buf()
}

fn fixture(name: &str) -> PathBuf {
    repo_root().join("fixtures").join(name)
}

#[test]
fn cli_renders_html_to_stdout() {
    let exe = assert_cmd::cargo_bin!("arbor-cli");
    let assert = Command::new(exe)
        .args(["render", fixture("basic.conllu").to_string_lossy().as_ref()])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8");
    assert!(stdout.starts_with("<html>"));
    assert_eq!(stdout.matches("<svg").count(), 2);
}

#[test]
fn cli_render_is_the_default_command() {
    let exe = assert_cmd::cargo_bin!("arbor-cli");
    let assert = Command::new(exe)
        .arg(fixture("basic.conllu").to_string_lossy().as_ref())
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8");
    assert!(stdout.contains("<svg"));
}

#[test]
fn cli_writes_html_with_out_flag() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let out = tmp.path().join("trees.html");

    let exe = assert_cmd::cargo_bin!("arbor-cli");
    Command::new(exe)
        .args([
            "render",
            "--meta",
            "text",
            "--out",
            out.to_string_lossy().as_ref(),
            fixture("basic.conllu").to_string_lossy().as_ref(),
        ])
        .assert()
        .success();

    let html = fs::read_to_string(&out).expect("read html");
    assert!(html.contains("<h4><b>text</b>: The quick dog barked loudly.</h4>"));
    assert!(html.contains("<svg"));
}

#[test]
fn cli_parse_emits_json_models() {
    let exe = assert_cmd::cargo_bin!("arbor-cli");
    let assert = Command::new(exe)
        .args([
            "parse",
            "--pretty",
            fixture("basic.conllu").to_string_lossy().as_ref(),
        ])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("json");
    let stanzas = parsed.as_array().expect("array");
    assert_eq!(stanzas.len(), 2);
    assert_eq!(stanzas[1]["tokens"][0]["form"], "Dogs");
    assert_eq!(stanzas[0]["metadata"]["sent_id"], "en-ud-1");
}

#[test]
fn cli_layout_reports_invalid_stanzas_inline() {
    let exe = assert_cmd::cargo_bin!("arbor-cli");
    let assert = Command::new(exe)
        .args([
            "layout",
            fixture("invalid_root.conllu").to_string_lossy().as_ref(),
        ])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("json");
    let entries = parsed.as_array().expect("array");
    assert_eq!(entries.len(), 2);
    assert!(entries[0]["error"].is_string());
    assert!(entries[1]["tokens"].is_array());
}

#[test]
fn cli_drops_invalid_fields_with_warnings() {
    let exe = assert_cmd::cargo_bin!("arbor-cli");
    let assert = Command::new(exe)
        .args([
            "render",
            "--fields",
            "FORM,FEATS,COLOUR,DEPREL,HEAD",
            fixture("basic.conllu").to_string_lossy().as_ref(),
        ])
        .assert()
        .success();

    let output = assert.get_output();
    let stderr = String::from_utf8(output.stderr.clone()).expect("utf8");
    assert!(stderr.contains("Ignoring FEATS (field not supported)"));
    assert!(stderr.contains("Ignoring COLOUR (not a standard CoNLL-U field)"));

    let stdout = String::from_utf8(output.stdout.clone()).expect("utf8");
    assert!(stdout.contains("<svg"));
    assert!(stdout.contains(">nsubj</text>"));
}

#[test]
fn cli_rejects_unknown_flags_with_usage() {
    let exe = assert_cmd::cargo_bin!("arbor-cli");
    let assert = Command::new(exe).arg("--bogus").assert().failure();
    let stderr = String::from_utf8(assert.get_output().stderr.clone()).expect("utf8");
    assert!(stderr.contains("USAGE:"));
}

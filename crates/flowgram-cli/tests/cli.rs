use assert_cmd::Command;
use std::fs;

fn cli() -> Command {
    Command::cargo_bin("flowgram-cli").expect("binary builds")
}

#[test]
fn dot_command_reads_stdin_and_prints_dot() {
    cli()
        .arg("dot")
        .write_stdin("A -> B -> C")
        .assert()
        .success()
        .stdout(predicates::str::starts_with("digraph G {"))
        .stdout(predicates::str::contains("A -> B;"));
}

#[test]
fn dot_command_reads_a_file_and_writes_out() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let input = tmp.path().join("flow.txt");
    let out = tmp.path().join("flow.dot");
    fs::write(&input, "## Auth\nUser -> Dashboard").expect("write fixture");

    cli()
        .args([
            "dot",
            "--theme",
            "Minimalist",
            "--out",
            out.to_string_lossy().as_ref(),
            input.to_string_lossy().as_ref(),
        ])
        .assert()
        .success();

    let dot = fs::read_to_string(&out).expect("read dot");
    assert!(dot.contains("subgraph cluster_0 {"));
    assert!(dot.contains("fontname=\"Arial\""));
}

#[test]
fn drawio_command_emits_interchange_xml() {
    cli()
        .arg("drawio")
        .write_stdin("A -> B")
        .assert()
        .success()
        .stdout(predicates::str::starts_with("<mxfile"))
        .stdout(predicates::str::contains("source=\"A\" target=\"B\""));
}

#[test]
fn validate_rejects_unbalanced_brackets() {
    cli()
        .arg("validate")
        .write_stdin("A [oops -> B")
        .assert()
        .failure()
        .stderr(predicates::str::contains("Unbalanced brackets"));
}

#[test]
fn validate_accepts_clean_input() {
    cli()
        .arg("validate")
        .write_stdin("A → B")
        .assert()
        .success()
        .stdout(predicates::str::contains("OK"));
}

#[test]
fn json_then_text_round_trips_structure() {
    let json = cli()
        .arg("json")
        .write_stdin("## Auth\nUser -> Dashboard")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    cli()
        .arg("text")
        .write_stdin(json)
        .assert()
        .success()
        .stdout(predicates::str::contains("## Auth"))
        .stdout(predicates::str::contains(" → "));
}

#[test]
fn unknown_command_prints_usage() {
    cli()
        .arg("frobnicate")
        .assert()
        .code(2)
        .stderr(predicates::str::contains("Usage: flowgram-cli"));
}

#[test]
fn unknown_theme_is_an_error() {
    cli()
        .args(["dot", "--theme", "Nope"])
        .write_stdin("A -> B")
        .assert()
        .failure()
        .stderr(predicates::str::contains("Unknown theme"));
}

#[test]
fn generation_is_blocked_by_validation_errors() {
    cli()
        .arg("dot")
        .write_stdin("A [oops -> B")
        .assert()
        .failure()
        .stderr(predicates::str::contains("failed validation"));
}

//! End-to-end CLI tests, driven through the built `cpfe` binary rather than
//! its library API.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn cpfe_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_cpfe"))
}

#[test]
fn help_flag_prints_usage() {
    cpfe_bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("cpfe"));
}

#[test]
fn version_flag_prints_the_crate_version() {
    cpfe_bin()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn compiling_a_well_formed_file_succeeds() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("prog.txt");
    std::fs::write(&input, "x<---3;").unwrap();

    cpfe_bin()
        .arg(&input)
        .arg("--output")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("syntactically correct"));

    assert!(dir.path().join("prog_tree.txt").exists());
}

#[test]
fn compiling_a_malformed_file_exits_non_zero() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("bad.txt");
    std::fs::write(&input, ";;;;").unwrap();

    cpfe_bin().arg(&input).arg("--output").arg(dir.path()).assert().failure();
}

#[test]
fn missing_input_file_is_reported_as_an_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.txt");

    cpfe_bin().arg(&missing).assert().failure();
}

#[test]
fn dump_config_controls_which_aux_files_are_written() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("prog.txt");
    std::fs::write(&input, "x<---3;").unwrap();

    let config_path = dir.path().join("cpfe.toml");
    std::fs::write(
        &config_path,
        "output_dir = \".\"\n[dump]\ntokens = true\nfirst_follow = true\nparse_table = true\ntree = false\n",
    )
    .unwrap();

    cpfe_bin()
        .arg(&input)
        .arg("--config")
        .arg(&config_path)
        .arg("--output")
        .arg(dir.path())
        .assert()
        .success();

    assert!(dir.path().join("prog_tokens.txt").exists());
    assert!(dir.path().join("prog_first.txt").exists());
    assert!(dir.path().join("prog_follow.txt").exists());
    assert!(dir.path().join("prog_parse_table.txt").exists());
    assert!(!dir.path().join("prog_tree.txt").exists());
}

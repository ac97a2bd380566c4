//! Exit status of the `datacheck` binary for the positional argument count.

use std::fs;
use std::process::{Command, Output};

fn datacheck(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_datacheck"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn one_path_prints_usage_and_exits_2() {
    let output = datacheck(&["data.csv"]);
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("expected 3 paths"));
    assert!(stderr.contains("Usage"));
}

#[test]
fn two_paths_exit_2() {
    let output = datacheck(&["data.csv", "rules.csv"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn four_paths_exit_2() {
    let output = datacheck(&["a.csv", "b.csv", "c.csv", "d.csv"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn three_paths_run_and_exit_0() {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("ANEXO_6_A_BTE_202401.csv");
    let rules = dir.path().join("rules.csv");
    let ids = dir.path().join("RUTDEPRUEBAS.CSV");
    fs::write(&data, "RUT;COMUNA\n11111111;Talca\n").unwrap();
    fs::write(&rules, "field;validation\nRUT;no_fake_ids()\n").unwrap();
    fs::write(&ids, "rut\n11111111\n").unwrap();

    let output = datacheck(&[
        "--cabinet",
        "G-7",
        "--format",
        "text",
        data.to_str().unwrap(),
        rules.to_str().unwrap(),
        ids.to_str().unwrap(),
    ]);

    assert_eq!(output.status.code(), Some(0));
    assert!(dir.path().join("validations_ANEXO_6_A_BTE_202401.txt").exists());
}

#[test]
fn missing_data_file_exits_1() {
    let dir = tempfile::tempdir().unwrap();
    let absent = dir.path().join("absent.csv");
    let path = absent.to_str().unwrap();

    let output = datacheck(&["--cabinet", "1", path, path, path]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("error:"));
}

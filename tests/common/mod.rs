use std::process::{Command, Output};

use serde_json::Value;
use tempfile::TempDir;

pub fn base_cmd(data_dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_jums"));
    cmd.env("DOTENV_PATH", data_dir.path().join("missing.env"))
        .env("RUST_LOG", "warn")
        .arg("--data-dir")
        .arg(data_dir.path());
    cmd
}

pub fn user_cmd(data_dir: &TempDir, args: &[&str]) -> Output {
    base_cmd(data_dir)
        .arg("user")
        .args(args)
        .output()
        .expect("run jums user")
}

pub fn json_stdout(output: &Output) -> Value {
    assert!(output.status.success(), "{:?}", output);
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

pub fn insert(data_dir: &TempDir, name: &str, year: &str, category: &str) -> i64 {
    let output = user_cmd(
        data_dir,
        &[
            "insert", "--name", name, "--year", year, "--month", "5", "--day", "1", "--tel",
            "090-0000-0000", "--type", category, "--comment", "test",
        ],
    );
    json_stdout(&output)["id"].as_i64().expect("id in output")
}

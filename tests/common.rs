#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn hr() -> Command {
    let mut cmd = cargo_bin_cmd!("hronboard");
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG").env_remove("PORT");
    cmd
}

/// Create a unique test data file path inside the system temp dir and remove any existing file
pub fn setup_test_data(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_hronboard.json", name));
    let data_path = path.to_string_lossy().to_string();
    fs::remove_file(&data_path).ok();
    data_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn add_employee(data: &str, name: &str, role: &str, department: &str, start: &str) {
    hr()
        .args([
            "--data",
            data,
            "add",
            "--name",
            name,
            "--role",
            role,
            "--department",
            department,
            "--start",
            start,
            "--task",
            "Sign contract",
            "--task",
            "Laptop setup",
            "--task",
            "Meet the team",
        ])
        .assert()
        .success();
}

/// Initialize the data file and add a small dataset useful for many tests:
///  1 Ada Lovelace  Engineer  R&D    2025-03-03
///  2 Grace Hopper  Admiral   Navy   2025-04-14
///  3 Alan Turing   Analyst   R&D    2024-11-20
pub fn init_data_with_employees(data: &str) {
    hr()
        .args(["--data", data, "--test", "init"])
        .assert()
        .success();

    add_employee(data, "Ada Lovelace", "Engineer", "R&D", "2025-03-03");
    add_employee(data, "Grace Hopper", "Admiral", "Navy", "2025-04-14");
    add_employee(data, "Alan Turing", "Analyst", "R&D", "2024-11-20");
}

pub fn read_json(path: &str) -> serde_json::Value {
    let raw = fs::read_to_string(path).expect("read data file");
    serde_json::from_str(&raw).expect("parse data file")
}

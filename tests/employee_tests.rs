use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{hr, init_data_with_employees, read_json, setup_test_data};

#[test]
fn test_init_creates_empty_data_file() {
    let data = setup_test_data("init_empty");

    hr().args(["--data", &data, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    let doc = read_json(&data);
    assert_eq!(doc["employees"].as_array().unwrap().len(), 0);
    assert_eq!(doc["log"][0]["operation"], "init");
}

#[test]
fn test_add_assigns_ids_and_tasks() {
    let data = setup_test_data("add_ids");
    init_data_with_employees(&data);

    let doc = read_json(&data);
    let employees = doc["employees"].as_array().unwrap();
    assert_eq!(employees.len(), 3);
    assert_eq!(employees[2]["id"], 3);
    assert_eq!(employees[0]["startDate"], "2025-03-03");
    assert_eq!(employees[0]["archived"], false);
    assert_eq!(employees[0]["tasks"][2]["title"], "Meet the team");
    assert_eq!(employees[0]["tasks"][2]["status"], "Not started");
}

#[test]
fn test_add_uses_template_without_tasks() {
    let data = setup_test_data("add_template");

    hr().args([
        "--data",
        &data,
        "add",
        "--name",
        "Linus",
        "--role",
        "Maintainer",
        "--department",
        "Kernel",
        "--start",
        "2025-06-01",
    ])
    .assert()
    .success()
    .stdout(contains("Employee #1 added"));

    let doc = read_json(&data);
    assert!(!doc["employees"][0]["tasks"].as_array().unwrap().is_empty());
}

#[test]
fn test_add_rejects_blank_name_and_bad_date() {
    let data = setup_test_data("add_invalid");

    hr().args([
        "--data",
        &data,
        "add",
        "--name",
        "   ",
        "--role",
        "x",
        "--department",
        "y",
        "--start",
        "2025-06-01",
    ])
    .assert()
    .failure()
    .stderr(contains("Missing required field: name"));

    hr().args([
        "--data",
        &data,
        "add",
        "--name",
        "Bob",
        "--role",
        "x",
        "--department",
        "y",
        "--start",
        "06/01/2025",
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid date format"));
}

#[test]
fn test_status_change_and_show() {
    let data = setup_test_data("status_show");
    init_data_with_employees(&data);

    hr().args(["--data", &data, "status", "1", "2", "done"])
        .assert()
        .success()
        .stdout(contains("1/3 completed"));

    hr().args(["--data", &data, "status", "1", "3", "In progress"])
        .assert()
        .success();

    hr().args(["--data", &data, "show", "1"])
        .assert()
        .success()
        .stdout(contains("Ada Lovelace - Engineer"))
        .stdout(contains("Completed"))
        .stdout(contains("In progress"));

    let doc = read_json(&data);
    assert_eq!(doc["employees"][0]["tasks"][1]["status"], "Completed");
    assert_eq!(doc["employees"][0]["tasks"][2]["status"], "In progress");
}

#[test]
fn test_status_errors() {
    let data = setup_test_data("status_errors");
    init_data_with_employees(&data);

    hr().args(["--data", &data, "status", "1", "9", "done"])
        .assert()
        .failure()
        .stderr(contains("Task 9 not found for employee 1"));

    hr().args(["--data", &data, "status", "42", "1", "done"])
        .assert()
        .failure()
        .stderr(contains("Employee not found: 42"));

    hr().args(["--data", &data, "status", "1", "1", "blocked"])
        .assert()
        .failure()
        .stderr(contains("Invalid task status"));
}

#[test]
fn test_task_appends_with_next_id() {
    let data = setup_test_data("task_append");
    init_data_with_employees(&data);

    hr().args(["--data", &data, "task", "2", "  Security training "])
        .assert()
        .success()
        .stdout(contains("Task #4 added to Grace Hopper"));

    let doc = read_json(&data);
    let tasks = doc["employees"][1]["tasks"].as_array().unwrap();
    assert_eq!(tasks.len(), 4);
    assert_eq!(tasks[3]["title"], "Security training");

    hr().args(["--data", &data, "task", "2", "   "])
        .assert()
        .failure()
        .stderr(contains("Missing required field: title"));
}

#[test]
fn test_edit_info() {
    let data = setup_test_data("edit_info");
    init_data_with_employees(&data);

    hr().args([
        "--data",
        &data,
        "edit",
        "3",
        "--role",
        "Cryptanalyst",
        "--start",
        "2024-12-01",
    ])
    .assert()
    .success()
    .stdout(contains("Cryptanalyst"));

    let doc = read_json(&data);
    assert_eq!(doc["employees"][2]["role"], "Cryptanalyst");
    assert_eq!(doc["employees"][2]["startDate"], "2024-12-01");
    assert_eq!(doc["employees"][2]["name"], "Alan Turing");

    hr().args(["--data", &data, "edit", "3"])
        .assert()
        .failure()
        .stderr(contains("nothing to edit"));
}

#[test]
fn test_archive_hides_but_keeps_record() {
    let data = setup_test_data("archive_toggle");
    init_data_with_employees(&data);

    hr().args(["--data", &data, "archive", "2"])
        .assert()
        .success()
        .stdout(contains("archived"));

    hr().args(["--data", &data, "list"])
        .assert()
        .success()
        .stdout(contains("Ada Lovelace").and(contains("Grace Hopper").not()));

    hr().args(["--data", &data, "list", "--archived"])
        .assert()
        .success()
        .stdout(contains("Grace Hopper").and(contains("Ada Lovelace").not()));

    let doc = read_json(&data);
    assert_eq!(doc["employees"].as_array().unwrap().len(), 3);
    assert_eq!(doc["employees"][1]["archived"], true);

    hr().args(["--data", &data, "archive", "2", "--undo"])
        .assert()
        .success()
        .stdout(contains("restored"));

    hr().args(["--data", &data, "list"])
        .assert()
        .success()
        .stdout(contains("Grace Hopper"));
}

#[test]
fn test_log_records_mutations() {
    let data = setup_test_data("log_print");
    init_data_with_employees(&data);

    hr().args(["--data", &data, "status", "1", "1", "done"])
        .assert()
        .success();

    hr().args(["--data", &data, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("add"))
        .stdout(contains("Not started -> Completed"));
}

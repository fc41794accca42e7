use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{add_employee, hr, init_data_with_employees, setup_test_data};

#[test]
fn test_list_search_is_case_insensitive() {
    let data = setup_test_data("list_search");
    init_data_with_employees(&data);

    hr().args(["--data", &data, "list", "--search", "GRACE"])
        .assert()
        .success()
        .stdout(contains("Grace Hopper"))
        .stdout(contains("Ada Lovelace").not());
}

#[test]
fn test_list_department_and_period() {
    let data = setup_test_data("list_dept_period");
    init_data_with_employees(&data);

    hr().args(["--data", &data, "list", "--department", "R&D"])
        .assert()
        .success()
        .stdout(contains("Ada Lovelace"))
        .stdout(contains("Alan Turing"))
        .stdout(contains("Grace Hopper").not());

    hr().args(["--data", &data, "list", "--period", "2025-03:2025-04"])
        .assert()
        .success()
        .stdout(contains("Ada Lovelace"))
        .stdout(contains("Grace Hopper"))
        .stdout(contains("Alan Turing").not());

    hr().args(["--data", &data, "list", "--period", "2025-03:2025"])
        .assert()
        .failure()
        .stderr(contains("Invalid period"));
}

#[test]
fn test_list_status_filter() {
    let data = setup_test_data("list_status");
    init_data_with_employees(&data);

    hr().args(["--data", &data, "status", "3", "1", "doing"])
        .assert()
        .success();

    hr().args(["--data", &data, "list", "--status", "In progress"])
        .assert()
        .success()
        .stdout(contains("Alan Turing"))
        .stdout(contains("Ada Lovelace").not());

    hr().args(["--data", &data, "list", "--status", "done"])
        .assert()
        .success()
        .stdout(contains("No employees match"));
}

#[test]
fn test_list_pages() {
    let data = setup_test_data("list_pages");
    hr().args(["--data", &data, "--test", "init"])
        .assert()
        .success();
    for i in 0..12 {
        add_employee(&data, &format!("Person {i:02}"), "Clerk", "Ops", "2025-01-10");
    }

    hr().args(["--data", &data, "list", "--page", "2"])
        .assert()
        .success()
        .stdout(contains("Person 10"))
        .stdout(contains("Person 11"))
        .stdout(contains("Person 03").not())
        .stdout(contains("Page 2 of 2"));
}

#[test]
fn test_list_marks_starting_soon() {
    let data = setup_test_data("list_soon");
    let soon = (chrono::Local::now().date_naive() + chrono::Duration::days(2)).to_string();
    hr().args(["--data", &data, "--test", "init"])
        .assert()
        .success();
    add_employee(&data, "New Hire", "Dev", "IT", &soon);
    add_employee(&data, "Old Hand", "Dev", "IT", "2020-01-01");

    hr().args(["--data", &data, "list", "--search", "new"])
        .assert()
        .success()
        .stdout(contains("Starting Soon!"));

    hr().args(["--data", &data, "list", "--search", "old"])
        .assert()
        .success()
        .stdout(contains("Starting Soon!").not());
}

#[test]
fn test_report_summary_and_pagination() {
    let data = setup_test_data("report_summary");
    init_data_with_employees(&data);

    hr().args(["--data", &data, "status", "1", "1", "done"])
        .assert()
        .success();
    hr().args(["--data", &data, "status", "3", "2", "c"])
        .assert()
        .success();

    hr().args(["--data", &data, "report", "--department", "R&D"])
        .assert()
        .success()
        .stdout(contains("Total Employees:  2"))
        .stdout(contains("Total Tasks:      6"))
        .stdout(contains("Completed Tasks:  2"))
        .stdout(contains("Pending Tasks:    4"))
        .stdout(contains("Departments:      R&D, Navy"))
        .stdout(contains("Page 1 of 1"));
}

#[test]
fn test_dashboard_counts() {
    let data = setup_test_data("dashboard");
    init_data_with_employees(&data);

    hr().args(["--data", &data, "archive", "3"])
        .assert()
        .success();

    hr().args(["--data", &data, "dashboard"])
        .assert()
        .success()
        .stdout(contains("Active employees:      2"))
        .stdout(contains("Archived employees:    1"))
        .stdout(contains("Not started"));
}

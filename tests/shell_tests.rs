//! Integration tests for the classboard binary

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::classboard_cmd;

#[test]
fn test_empty_schedule() {
    classboard_cmd()
        .write_stdin("schedule\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Monday\n  No classes scheduled"))
        .stdout(predicate::str::contains("Saturday\n  No classes scheduled"));
}

#[test]
fn test_add_and_list_classes() {
    let input = "\
class add --subject \"Linear Algebra\" --code MATH201 --day tue --start 13:00 --end 14:30\n\
class add --subject Chemistry --day tue --start 09:00 --end 10:00 --room Lab-2\n\
schedule tuesday\n";

    let output = classboard_cmd().write_stdin(input).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let last = stdout.rsplit("Added class 2.\n").next().unwrap();
    let lines: Vec<&str> = last.lines().collect();
    // the final 'schedule tuesday' render
    let tail = &lines[lines.len() - 3..];
    assert_eq!(tail[0], "Tuesday");
    assert_eq!(tail[1], "  [2] Chemistry  09:00 - 10:00  Lab-2");
    assert_eq!(tail[2], "  [1] Linear Algebra (MATH201)  13:00 - 14:30");
}

#[test]
fn test_invalid_time_order_is_reported() {
    classboard_cmd()
        .write_stdin("class add --subject Math --day mon --start 09:00 --end 08:00\nschedule\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("End time must be after start time"))
        .stdout(predicate::str::contains("Added class").not());
}

#[test]
fn test_assignment_badges_and_pending_count() {
    let input = "\
assignment add --subject History --title Essay --due 2024-03-09\n\
assignment add --subject Math --title Worksheet --due 2024-03-14 --priority low\n\
assignment add --subject Art --title Sketch --due 2024-03-10\n\
assignment toggle 3\n\
assignments zzz\n";

    classboard_cmd()
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "[ ] [1] Essay - History  Due: Mar 9, 2024  [1 day overdue]  MEDIUM",
        ))
        .stdout(predicate::str::contains(
            "[ ] [2] Worksheet - Math  Due: Mar 14, 2024  [4 days left]  LOW",
        ))
        .stdout(predicate::str::contains("Marked assignment 3 as done."))
        .stdout(predicate::str::contains(
            "Assignments (2 pending)\n  No assignments found",
        ));
}

#[test]
fn test_delete_confirmation_flow() {
    let input = "\
assignment add --subject Bio --title Lab --due 2024-03-20\n\
assignment delete 1\n\
no\n\
assignment show 1\n\
assignment delete 1\n\
y\n\
assignment show 1\n";

    classboard_cmd()
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Are you sure you want to delete this assignment? (y/N)",
        ))
        .stdout(predicate::str::contains("Cancelled."))
        .stdout(predicate::str::contains("[ ] [1] Lab - Bio"))
        .stdout(predicate::str::contains("Deleted assignment 1."))
        .stderr(predicate::str::contains("Assignment not found: 1"));
}

#[test]
fn test_unknown_command_suggests_help() {
    classboard_cmd()
        .write_stdin("dance\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Invalid command"))
        .stderr(predicate::str::contains("Type 'help'"));
}

#[test]
fn test_script_file() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("week.txt");
    fs::write(
        &script,
        "# seed the week\n\
         class add --subject Gym --day sat --start 08:00 --end 09:00\n\
         quit\n\
         class add --subject Never --day sat --start 10:00 --end 11:00\n",
    )
    .unwrap();

    classboard_cmd()
        .arg("--script")
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains("[1] Gym  08:00 - 09:00"))
        .stdout(predicate::str::contains("Never").not());
}

#[test]
fn test_missing_script_fails() {
    let temp = TempDir::new().unwrap();
    classboard_cmd()
        .arg("--script")
        .arg(temp.path().join("missing.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot read script"));
}

#[test]
fn test_config_file_defaults() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("classboard.toml");
    fs::write(&config, "default_color = \"#f59e0b\"\ndefault_priority = \"high\"\n").unwrap();

    classboard_cmd()
        .arg("--config")
        .arg(&config)
        .write_stdin(
            "class add --subject Math --day mon --start 08:00 --end 09:00\n\
             class show 1\n\
             assignment add --subject Math --title Quiz --due 2024-03-20\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("Color:      #f59e0b"))
        .stdout(predicate::str::contains("Quiz - Math  Due: Mar 20, 2024  [10 days left]  HIGH"));
}

#[test]
fn test_config_from_environment() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("env.toml");
    fs::write(&config, "default_priority = \"low\"\n").unwrap();

    classboard_cmd()
        .env("CLASSBOARD_CONFIG", &config)
        .write_stdin("assignment add --subject Math --title Quiz --due 2024-03-20\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("LOW"));
}

#[test]
fn test_bad_config_exits_with_config_code() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("bad.toml");
    fs::write(&config, "default_priority = \"urgent\"\n").unwrap();

    classboard_cmd()
        .arg("--config")
        .arg(&config)
        .write_stdin("schedule\n")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to parse"));
}

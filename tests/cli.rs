use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const GOAL: &str = r#"{
    "id": "8f1c",
    "user_id": "u1",
    "text": "Run a half marathon",
    "status": "active",
    "created_at": "2024-05-01T09:30:00Z",
    "tasks": [
        {
            "id": "race",
            "goal_id": "8f1c",
            "name": "Race day",
            "status": "pending",
            "duration_days": 1,
            "dependencies": [
                {"id": "d1", "depends_on_task_id": "long-runs"},
                {"id": "d2", "depends_on_task_id": "deleted-task"}
            ]
        },
        {
            "id": "shoes",
            "goal_id": "8f1c",
            "name": "Buy shoes",
            "status": "completed",
            "duration_days": 1,
            "dependencies": []
        },
        {
            "id": "long-runs",
            "goal_id": "8f1c",
            "name": "Long runs",
            "status": "in_progress",
            "duration_days": 60,
            "dependencies": [{"id": "d3", "depends_on_task_id": "shoes"}]
        }
    ]
}"#;

const CYCLIC_GOAL: &str = r#"{
    "id": "g2",
    "text": "Loop",
    "status": "draft",
    "created_at": "2024-05-01T09:30:00Z",
    "tasks": [
        {"id": "a", "name": "Alpha", "status": "pending", "dependencies": [{"depends_on_task_id": "b"}]},
        {"id": "b", "name": "Beta", "status": "pending", "dependencies": [{"depends_on_task_id": "a"}]}
    ]
}"#;

fn write_fixture(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn goalflow() -> Command {
    Command::cargo_bin("goalflow").unwrap()
}

#[test]
fn test_order_prints_dependencies_first() {
    let temp_dir = TempDir::new().unwrap();
    let goal = write_fixture(&temp_dir, "goal.json", GOAL);

    goalflow()
        .arg("order")
        .arg(&goal)
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"(?s)1\. ✓ Buy shoes.*2\. ● Long runs.*3\. ○ Race day").unwrap())
        .stdout(predicate::str::contains("(depends on: Long runs ●)"));
}

#[test]
fn test_order_json() {
    let temp_dir = TempDir::new().unwrap();
    let goal = write_fixture(&temp_dir, "goal.json", GOAL);

    let output = goalflow()
        .args(["order", "--json"])
        .arg(&goal)
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let ids: Vec<&str> = value["tasks"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["shoes", "long-runs", "race"]);
    assert!(value["back_edges"].as_array().unwrap().is_empty());
}

#[test]
fn test_order_reads_stdin() {
    goalflow()
        .args(["order", "-"])
        .write_stdin(GOAL)
        .assert()
        .success()
        .stdout(predicate::str::contains("Race day"));
}

#[test]
fn test_order_cycle_lenient_and_strict() {
    let temp_dir = TempDir::new().unwrap();
    let goal = write_fixture(&temp_dir, "cyclic.json", CYCLIC_GOAL);

    goalflow()
        .arg("order")
        .arg(&goal)
        .assert()
        .success()
        .stdout(predicate::str::contains("Warning: b -> a closes a cycle (a -> b -> a)"));

    goalflow()
        .args(["order", "--strict"])
        .arg(&goal)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Cyclic dependency at task a"));
}

#[test]
fn test_progress() {
    let temp_dir = TempDir::new().unwrap();
    let goal = write_fixture(&temp_dir, "goal.json", GOAL);

    goalflow()
        .arg("progress")
        .arg(&goal)
        .assert()
        .success()
        .stdout(predicate::str::contains("Tasks:        3"))
        .stdout(predicate::str::contains("Progress:     33%"));

    let output = goalflow()
        .args(["progress", "--json"])
        .arg(&goal)
        .output()
        .unwrap();
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["completed"], 1);
    assert_eq!(value["in_progress"], 1);
    assert_eq!(value["pending"], 1);
    assert_eq!(value["percent_complete"], 33);
}

#[test]
fn test_board_groups_by_status() {
    let temp_dir = TempDir::new().unwrap();
    let goal = write_fixture(&temp_dir, "goal.json", GOAL);

    goalflow()
        .arg("board")
        .arg(&goal)
        .assert()
        .success()
        .stdout(predicate::str::contains("Pending (1)"))
        .stdout(predicate::str::contains("In Progress (1)"))
        .stdout(predicate::str::contains("Long runs [60 days]"))
        .stdout(predicate::str::contains("Buy shoes [1 day]"));
}

#[test]
fn test_actions() {
    let temp_dir = TempDir::new().unwrap();
    let goal = write_fixture(&temp_dir, "goal.json", GOAL);

    goalflow()
        .args(["actions"])
        .arg(&goal)
        .arg("shoes")
        .assert()
        .success()
        .stdout(predicate::str::contains("Reopen -> in_progress"))
        .stdout(predicate::str::contains("Move to Pending -> pending"));

    goalflow()
        .args(["actions"])
        .arg(&goal)
        .arg("nope")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Task nope not found"));
}

#[test]
fn test_depend_check() {
    let temp_dir = TempDir::new().unwrap();
    let goal = write_fixture(&temp_dir, "goal.json", GOAL);

    goalflow()
        .arg("depend-check")
        .arg(&goal)
        .args(["race", "shoes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("OK: race can depend on shoes"));

    goalflow()
        .arg("depend-check")
        .arg(&goal)
        .args(["shoes", "race"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("shoes -> race -> long-runs -> shoes"));
}

#[test]
fn test_dashboard() {
    let temp_dir = TempDir::new().unwrap();
    let summaries = write_fixture(
        &temp_dir,
        "goals.json",
        r#"[
            {"id": "g1", "text": "Half marathon", "status": "active", "created_at": "2024-05-01T09:30:00Z", "task_count": 3, "completed_tasks": 1},
            {"id": "g2", "text": "Learn Rust", "status": "completed", "created_at": "2024-04-01T09:30:00Z", "task_count": 5, "completed_tasks": 5}
        ]"#,
    );

    goalflow()
        .arg("dashboard")
        .arg(&summaries)
        .assert()
        .success()
        .stdout(predicate::str::contains("Goals:        2"))
        .stdout(predicate::str::contains("Tasks:        8 (6 completed)"))
        .stdout(predicate::str::contains("100% Learn Rust"));
}

#[test]
fn test_missing_file_fails() {
    goalflow()
        .args(["progress", "does-not-exist.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: IO error"));
}

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

fn quorum() -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("quorum-cli").unwrap();
    cmd.env_remove("QUORUM_AUTHOR_NAME").env_remove("RUST_LOG");
    cmd
}

fn init_workspace() -> TempDir {
    let dir = TempDir::new().unwrap();
    quorum().arg("init").current_dir(dir.path()).assert().success();
    dir
}

fn json_output(dir: &TempDir, args: &[&str]) -> Value {
    let output = quorum()
        .arg("--json")
        .args(args)
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "{:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

fn create(dir: &TempDir, topic: &str, options: &[&str]) -> String {
    let mut args = vec!["create", "--topic", topic];
    for o in options {
        args.push("--option");
        args.push(*o);
    }
    let v = json_output(dir, &args);
    v["decision"]["id"].as_str().unwrap().to_string()
}

#[test]
fn init_creates_seeded_workspace() {
    let dir = TempDir::new().unwrap();
    quorum()
        .arg("init")
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("4 sample decisions"));

    assert!(dir.path().join(".quorum/config.json").exists());
    assert!(dir.path().join(".quorum/decisions.json").exists());
}

#[test]
fn init_twice_fails() {
    let dir = init_workspace();
    quorum()
        .arg("init")
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("already exists"));
}

#[test]
fn commands_outside_workspace_fail() {
    let dir = TempDir::new().unwrap();
    quorum()
        .arg("list")
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("not a Quorum workspace"));
}

#[test]
fn list_filters_by_status() {
    let dir = init_workspace();

    let active = json_output(&dir, &["list", "--status", "active"]);
    let topics: Vec<_> = active
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["topic"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(topics, ["Weekend Trip Destination", "Project Team Name"]);

    quorum()
        .args(["list", "--status", "finalized"])
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("Team Lunch Venue"))
        .stdout(predicates::str::contains("Weekend Trip").not());
}

#[test]
fn list_rejects_unknown_status() {
    let dir = init_workspace();
    quorum()
        .args(["list", "--status", "closed"])
        .current_dir(dir.path())
        .assert()
        .failure();
}

#[test]
fn create_drops_blank_options() {
    let dir = init_workspace();
    let v = json_output(
        &dir,
        &["create", "--topic", "Lunch", "--option", "Tacos", "--option", "  ", "--option", "Ramen"],
    );
    assert_eq!(v["decision"]["options"], serde_json::json!(["Tacos", "Ramen"]));
    assert_eq!(v["decision"]["status"], "active");
    assert_eq!(v["decision"]["participants"], serde_json::json!([]));
    assert_eq!(v["decision"]["description"], "");
}

#[test]
fn create_with_deadline() {
    let dir = init_workspace();
    let v = json_output(
        &dir,
        &["create", "-t", "Offsite", "-o", "A", "--due", "2030-05-01", "--time", "09:30"],
    );
    let due = v["decision"]["dueDate"].as_str().unwrap();
    assert!(due.ends_with('Z'), "{due}");
}

#[test]
fn create_with_bad_deadline_fails() {
    let dir = init_workspace();
    quorum()
        .args(["create", "-t", "T", "-o", "A", "--due", "tomorrow"])
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("invalid deadline"));
}

#[test]
fn votes_accumulate_and_show_breakdown() {
    let dir = init_workspace();
    let id = create(&dir, "Trip", &["Beach Resort", "Mountain Retreat"]);

    for _ in 0..3 {
        quorum()
            .args(["vote", &id, "--option", "Beach Resort"])
            .current_dir(dir.path())
            .assert()
            .success();
    }

    let v = json_output(&dir, &["show", &id]);
    let names: Vec<_> = v["decision"]["participants"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, ["User 1", "User 2", "User 3"]);
    assert_eq!(v["breakdown"]["total_votes"], 3);

    quorum()
        .args(["show", &id])
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("3 votes (100.0%)"))
        .stdout(predicates::str::contains("0 votes (0.0%)"))
        .stdout(predicates::str::contains("Leading: Beach Resort"));
}

#[test]
fn vote_for_unknown_option_fails() {
    let dir = init_workspace();
    quorum()
        .args(["vote", "2", "--option", "Moon Base"])
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("not an option"));
}

#[test]
fn vote_on_missing_decision_fails_without_writing() {
    let dir = init_workspace();
    let before = std::fs::read_to_string(dir.path().join(".quorum/decisions.json")).unwrap();
    quorum()
        .args(["vote", "missing", "--option", "A"])
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("decision 'missing' not found"));
    let after = std::fs::read_to_string(dir.path().join(".quorum/decisions.json")).unwrap();
    assert_eq!(before, after);
}

#[test]
fn comment_uses_author_precedence() {
    let dir = init_workspace();
    let id = create(&dir, "T", &["A"]);

    let v = json_output(&dir, &["comment", &id, "--message", "hi"]);
    assert_eq!(v["decision"]["discussion"][0]["author"], "Current User");
    assert_eq!(v["decision"]["discussion"][0]["id"], 1);
    assert!(!v["decision"]["discussion"][0]["time"].as_str().unwrap().is_empty());

    let output = quorum()
        .args(["--json", "comment", &id, "--message", "hello"])
        .env("QUORUM_AUTHOR_NAME", "Env Person")
        .current_dir(dir.path())
        .output()
        .unwrap();
    let v: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(v["decision"]["discussion"][1]["author"], "Env Person");

    let v = json_output(&dir, &["comment", &id, "--message", "yo", "--author", "Alice"]);
    assert_eq!(v["decision"]["discussion"][2]["author"], "Alice");
}

#[test]
fn show_seeded_discussion() {
    let dir = init_workspace();
    quorum()
        .args(["show", "2"])
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("[2 hours ago] Alice: Has anyone checked the weather forecast?"))
        .stdout(predicates::str::contains("2 votes (50.0%)"));
}

#[test]
fn update_changes_only_given_fields() {
    let dir = init_workspace();
    let before = json_output(&dir, &["show", "3"]);
    let after = json_output(&dir, &["update", "3", "--description", "new"]);
    assert_eq!(after["decision"]["description"], "new");
    assert_eq!(after["decision"]["topic"], before["decision"]["topic"]);
    assert_eq!(after["decision"]["participants"], before["decision"]["participants"]);
}

#[test]
fn update_without_fields_fails() {
    let dir = init_workspace();
    quorum()
        .args(["update", "3"])
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("nothing to update"));
}

#[test]
fn finalize_moves_decision_and_only_once() {
    let dir = init_workspace();
    quorum()
        .args(["finalize", "3"])
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("Finalized decision 3: Team Alpha"));

    let finalized = json_output(&dir, &["list", "--status", "finalized"]);
    assert_eq!(finalized.as_array().unwrap().len(), 3);

    quorum()
        .args(["finalize", "3"])
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("cannot move decision from finalized"));
}

#[test]
fn works_from_subdirectory() {
    let dir = init_workspace();
    let sub = dir.path().join("nested/deeper");
    std::fs::create_dir_all(&sub).unwrap();
    quorum()
        .args(["show", "0"])
        .current_dir(&sub)
        .assert()
        .success()
        .stdout(predicates::str::contains("Final: Pizza Place"));
}

#[test]
fn vote_on_finalized_decision_fails() {
    let dir = init_workspace();
    quorum()
        .args(["finalize", "3"])
        .current_dir(dir.path())
        .assert()
        .success();

    quorum()
        .args(["vote", "3", "--option", "Project X"])
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("decision '3' is finalized"));

    let v = json_output(&dir, &["show", "3"]);
    assert_eq!(v["decision"]["participants"].as_array().unwrap().len(), 5);

    // Discussion stays open after voting closes.
    let v = json_output(&dir, &["comment", "3", "--message", "Congrats, Team Alpha"]);
    assert_eq!(v["decision"]["discussion"].as_array().unwrap().len(), 1);
}

#[test]
fn create_with_only_blank_options_fails() {
    let dir = init_workspace();
    quorum()
        .args(["create", "-t", "Nothing", "-o", " ", "-o", ""])
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("at least one non-blank --option"));

    let all = json_output(&dir, &["list"]);
    assert_eq!(all.as_array().unwrap().len(), 4);
}

#[test]
fn show_aligns_non_ascii_options() {
    let dir = init_workspace();
    let id = create(&dir, "Dessert", &["Crème brûlée", "Pie"]);
    quorum()
        .args(["show", &id])
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("  Crème brûlée  0 votes (0.0%)"))
        .stdout(predicates::str::contains("  Pie           0 votes (0.0%)"));
}

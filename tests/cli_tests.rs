//! Integration tests for the minpath CLI
//!
//! These tests run the minpath binary against scripts and edge lists.

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

/// Get a Command for minpath, isolated from any minpath.toml
fn minpath(dir: &std::path::Path) -> Command {
    let mut cmd = cargo_bin_cmd!("minpath");
    cmd.current_dir(dir).env_remove("MINPATH_CONFIG");
    cmd
}

const DIAMOND: &str = "\
node A
node B
node C
node D
edge A B 4
edge A C 1
edge C B 2
edge B D 5
edge C D 8
";

// ============================================================================
// Help and Version tests
// ============================================================================

#[test]
fn test_help_flag() {
    let dir = tempdir().unwrap();
    minpath(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: minpath"))
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("solve"));
}

#[test]
fn test_version_flag() {
    let dir = tempdir().unwrap();
    minpath(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("minpath"));
}

// ============================================================================
// run
// ============================================================================

#[test]
fn test_run_script_file_finds_cheapest_path() {
    let dir = tempdir().unwrap();
    let script = dir.path().join("diamond.txt");
    fs::write(&script, format!("{DIAMOND}path A D\n")).unwrap();

    minpath(dir.path())
        .arg("run")
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Path: A -> C -> B -> D"))
        .stdout(predicate::str::contains("Total cost: 8"));
}

#[test]
fn test_run_reads_stdin() {
    let dir = tempdir().unwrap();
    minpath(dir.path())
        .arg("run")
        .write_stdin("node A\npath A A\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Path: A\n"))
        .stdout(predicate::str::contains("Total cost: 0"));
}

#[test]
fn test_run_json_collects_results() {
    let dir = tempdir().unwrap();
    let output = minpath(dir.path())
        .args(["--format", "json", "run"])
        .write_stdin(format!("{DIAMOND}path A D\nreset\npath A D\nnode E\npath A E\n"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let results = json["results"].as_array().unwrap();
    assert_eq!(results.len(), 3);
    assert_eq!(results[0]["total_cost"], 8.0);
    assert_eq!(results[0], results[1]);
    assert_eq!(results[2]["connected"], false);
    assert_eq!(json["nodes"], 5);
    assert_eq!(json["frontier"], "resort");
}

#[test]
fn test_run_disconnected_keeps_going() {
    let dir = tempdir().unwrap();
    minpath(dir.path())
        .arg("run")
        .write_stdin("node A\nnode B\nnode C\nnode D\nedge A B 3\nedge C D 2\npath A C\npath C D\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("The graph is not connected"))
        .stdout(predicate::str::contains("Path: C -> D"));
}

#[test]
fn test_run_auto_labels_nodes() {
    let dir = tempdir().unwrap();
    minpath(dir.path())
        .arg("run")
        .write_stdin("node\nnode\nedge 1 2 7\npath 2 1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Added node 1"))
        .stdout(predicate::str::contains("Path: 2 -> 1"))
        .stdout(predicate::str::contains("Total cost: 7"));
}

#[test]
fn test_run_clear_forgets_graph() {
    let dir = tempdir().unwrap();
    minpath(dir.path())
        .arg("run")
        .write_stdin("node A\nnode B\nedge A B 1\nclear\npath A B\n")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("line 5"))
        .stderr(predicate::str::contains("node not found: A"));
}

#[test]
fn test_run_rejects_zero_weight_by_default() {
    let dir = tempdir().unwrap();
    minpath(dir.path())
        .arg("run")
        .write_stdin("node A\nnode B\nedge A B 0\n")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("zero-length edges are disabled"));
}

#[test]
fn test_run_zero_weight_allowed_by_config() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("minpath.toml"),
        "[edges]\nallow_zero_weight = true\n",
    )
    .unwrap();

    minpath(dir.path())
        .arg("run")
        .write_stdin("node A\nnode B\nedge A B 0\npath A B\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total cost: 0"));
}

#[test]
fn test_run_parse_error_json_envelope() {
    let dir = tempdir().unwrap();
    let output = minpath(dir.path())
        .args(["--format", "json", "run"])
        .write_stdin("node A\nfly A\n")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "script_error");
    assert_eq!(json["error"]["line"], 2);
}

#[test]
fn test_run_negative_weight_rejected() {
    let dir = tempdir().unwrap();
    minpath(dir.path())
        .arg("run")
        .write_stdin("node A\nnode B\nedge A B -2\n")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("non-negative"));
}

// ============================================================================
// solve
// ============================================================================

#[test]
fn test_solve_edge_list() {
    let dir = tempdir().unwrap();
    minpath(dir.path())
        .args([
            "solve", "-e", "A:B:4", "-e", "A:C:1", "-e", "C:B:2", "-e", "B:D:5", "-e", "C:D:8",
            "--from", "A", "--to", "D",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Path: A -> C -> B -> D"))
        .stdout(predicate::str::contains("Total cost: 8"));
}

#[test]
fn test_solve_heap_frontier_json() {
    let dir = tempdir().unwrap();
    let output = minpath(dir.path())
        .args([
            "--format", "json", "--frontier", "heap", "solve", "-e", "A:B:4", "-e", "A:C:1",
            "-e", "C:B:2", "-e", "B:D:5", "-e", "C:D:8", "--from", "A", "--to", "D",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["connected"], true);
    assert_eq!(json["total_cost"], 8.0);
    let nodes: Vec<&str> = json["path"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["node"].as_str().unwrap())
        .collect();
    assert_eq!(nodes, vec!["A", "C", "B", "D"]);
    assert_eq!(json["path"][1]["edge"]["weight"], 1.0);
}

#[test]
fn test_solve_disconnected_exits_with_failure() {
    let dir = tempdir().unwrap();
    minpath(dir.path())
        .args(["solve", "-e", "A:B:3", "-e", "C:D:2", "--from", "A", "--to", "C"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("The graph is not connected"));
}

#[test]
fn test_solve_single_isolated_node() {
    let dir = tempdir().unwrap();
    minpath(dir.path())
        .args(["solve", "--node", "A", "--from", "A", "--to", "A"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Path: A\n"))
        .stdout(predicate::str::contains("Total cost: 0"));
}

#[test]
fn test_solve_unknown_endpoint() {
    let dir = tempdir().unwrap();
    minpath(dir.path())
        .args(["solve", "-e", "A:B:1", "--from", "A", "--to", "Z"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("node not found: Z"));
}

#[test]
fn test_solve_without_graph_is_usage_error() {
    let dir = tempdir().unwrap();
    minpath(dir.path())
        .args(["solve", "--from", "A", "--to", "B"])
        .assert()
        .code(2);
}

#[test]
fn test_precision_from_explicit_config() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("custom.toml");
    fs::write(&config, "[output]\nprecision = 2\n").unwrap();

    minpath(dir.path())
        .arg("--config")
        .arg(&config)
        .args(["solve", "-e", "A:B:1.5", "--from", "A", "--to", "B"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total cost: 1.50"));
}

#[test]
fn test_invalid_config_is_usage_error() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("minpath.toml"), "[search]\nfrontier = \"fib\"\n").unwrap();

    minpath(dir.path())
        .args(["solve", "-e", "A:B:1", "--from", "A", "--to", "B"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid config"));
}

#[test]
fn test_clap_error_uses_json_envelope() {
    let dir = tempdir().unwrap();
    minpath(dir.path())
        .args(["--format", "json", "solve", "--from", "A"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"usage_error\""));
}

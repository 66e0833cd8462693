// CLI smoke tests

use assert_cmd::Command;
use predicates::prelude::*;

fn lpkit() -> Command {
    Command::cargo_bin("lpkit").unwrap()
}

#[test]
fn diet_prints_the_sensitivity_report() {
    lpkit()
        .arg("diet")
        .assert()
        .success()
        .stdout(predicate::str::contains("Optimization complete"))
        .stdout(predicate::str::contains("Red. Cost"))
        .stdout(predicate::str::contains("Optimal objective: 1.3100e2"))
        .stdout(predicate::str::contains("iron"))
        .stdout(predicate::str::contains("calcium"));
}

#[test]
fn diet_dual_reaches_the_same_objective() {
    lpkit()
        .arg("diet-dual")
        .assert()
        .success()
        .stdout(predicate::str::contains("Optimal objective: 1.3100e2"));
}

#[test]
fn json_output_is_machine_readable() {
    let output = lpkit().args(["diet", "--json"]).output().unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["problem"], "diet");
    assert_eq!(report["status"], "Optimal");
    assert!((report["objective_value"].as_f64().unwrap() - 131.0).abs() < 1e-6);
    assert_eq!(report["variables"].as_array().unwrap().len(), 5);
}

#[test]
fn shortest_path_uses_the_sample_network_by_default() {
    lpkit()
        .arg("shortest-path")
        .assert()
        .success()
        .stdout(predicate::str::contains("Optimal objective: 1.9000e1"));
}

#[test]
fn write_lp_exports_the_model() {
    let path = std::env::temp_dir().join("lpkit_cli_diet.lp");

    lpkit()
        .args(["diet", "--write-lp"])
        .arg(&path)
        .assert()
        .success();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("Minimize"));
    assert!(text.contains("20 x1 + 10 x2 + 31 x3 + 11 x4 + 12 x5"));
    let _ = std::fs::remove_file(&path);
}

#[test]
fn unknown_network_node_fails_with_an_error() {
    lpkit()
        .args(["shortest-path", "--origin", "Nowhere"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown node"));
}

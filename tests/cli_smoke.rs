use std::fs;
use std::process::{Command, Output};

fn bin() -> String {
    // Cargo sets this for bin targets in integration tests
    env!("CARGO_BIN_EXE_fuel_align").to_string()
}

fn run(args: &[&str], config: &std::path::Path) -> Output {
    Command::new(bin())
        .args(args)
        .arg("--config")
        .arg(config)
        .env("NO_COLOR", "1")
        .env_remove("FUEL_ALIGN_DEBUG")
        .output()
        .expect("run")
}

fn empty_config() -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("verify.toml");
    fs::write(&path, "").unwrap();
    (dir, path)
}

#[test]
fn prints_seed_tests_and_summary() {
    let (_dir, cfg) = empty_config();
    let output = run(&["--seed", "42", "--iterations", "3"], &cfg);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        output.status.success(),
        "stdout:\n{}\nstderr:\n{}",
        stdout,
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(stdout.starts_with("Random seed: 42"));
    assert!(stdout.contains("TEST 1"));
    assert!(stdout.contains("TEST 3"));
    assert!(!stdout.contains("TEST 4"));
    assert!(stdout.contains("tests passed"));
}

#[test]
fn same_seed_replays_identically() {
    let (_dir, cfg) = empty_config();
    let a = run(&["--seed", "7"], &cfg);
    let b = run(&["--seed", "7"], &cfg);
    assert!(a.status.success() && b.status.success());
    assert_eq!(a.stdout, b.stdout);
    assert!(String::from_utf8_lossy(&a.stdout).contains("TEST 10"));
}

#[test]
fn json_mode_emits_one_record_per_test() {
    let (_dir, cfg) = empty_config();
    let output = run(&["--seed", "3", "-n", "4", "--json"], &cfg);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let records: Vec<serde_json::Value> = stdout
        .lines()
        .map(|l| serde_json::from_str(l).expect("json line"))
        .collect();
    assert_eq!(records.len(), 4);
    for (i, rec) in records.iter().enumerate() {
        assert_eq!(rec["seed"], 3);
        assert_eq!(rec["test"], i as u64 + 1);
        assert_eq!(rec["checks"].as_array().unwrap().len(), 2);
        assert_eq!(rec["sample"]["lower_bound"], 0);
        assert!(rec["mean"].is_f64());
    }
}

#[test]
fn config_file_ranges_are_used() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = dir.path().join("verify.toml");
    fs::write(&cfg, "iterations = 2\nmin_size = 5\nmax_size = 5\nmin_upper = 20\nmax_upper = 20\n").unwrap();
    let output = run(&["--seed", "1", "--json"], &cfg);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let records: Vec<serde_json::Value> =
        stdout.lines().map(|l| serde_json::from_str(l).unwrap()).collect();
    assert_eq!(records.len(), 2);
    for rec in records {
        assert_eq!(rec["sample"]["items"].as_array().unwrap().len(), 5);
        assert_eq!(rec["sample"]["upper_bound"], 20);
    }
}

#[test]
fn invalid_config_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = dir.path().join("verify.toml");
    fs::write(&cfg, "min_size = 9\nmax_size = 2\n").unwrap();
    let output = run(&["--seed", "1"], &cfg);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("min_size"));
}

#[test]
fn missing_explicit_config_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(&["--seed", "1"], &dir.path().join("nope.toml"));
    assert!(!output.status.success());
}

#[test]
fn debug_flag_logs_scan_details() {
    let (_dir, cfg) = empty_config();
    let output = run(&["--seed", "5", "-n", "1", "--debug"], &cfg);
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("debug:"));
    assert!(stderr.contains("scan argmin"));
}

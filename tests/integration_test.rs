//! Integration tests for the canal-config CLI.

use std::fs;
use std::path::Path;
use std::process::Command;

/// Helper to run canal-config with a config file and return (stdout, stderr, exit_code).
fn run_with_config(config: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_canal-config"))
        .arg("--config")
        .arg(config)
        .args(args)
        .output()
        .expect("Failed to run canal-config");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

/// Write `content` to a config file inside a fresh temp dir.
fn write_config(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("canal.toml");
    fs::write(&path, content).unwrap();
    (dir, path)
}

const FILTERED_CONFIG: &str = r#"
addr = "10.0.0.1:3306"
user = "canal"
password = "hunter2"
flavor = "mysql"
server_id = 1500
include_table_regex = [".*\\.canal"]
exclude_table_regex = ["mysql\\..*"]

[dump]
mysqldump = "mysqldump"
table_db = "db1"
tables = ["t1"]
dbs = ["db2"]
"#;

#[test]
fn test_version() {
    let output = Command::new(env!("CARGO_BIN_EXE_canal-config"))
        .arg("version")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("canal-config "));
}

#[test]
fn test_init_then_check() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sub").join("config.toml");

    let output = Command::new(env!("CARGO_BIN_EXE_canal-config"))
        .args(["init", "--path"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(path.exists(), "init should create the file");

    let (_stdout, stderr, exit_code) = run_with_config(&path, &["check"]);
    assert_eq!(exit_code, 0, "generated config should validate: {}", stderr);
    assert!(stderr.contains("Configuration is valid."));
}

#[test]
fn test_check_rejects_zero_config() {
    let (_dir, path) = write_config(r#"addr = "10.0.0.1:3306""#);
    let (_stdout, stderr, exit_code) = run_with_config(&path, &["check"]);
    assert_ne!(exit_code, 0);
    assert!(stderr.contains("user cannot be empty"), "stderr: {}", stderr);
}

#[test]
fn test_check_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let (_stdout, stderr, exit_code) = run_with_config(&dir.path().join("nope.toml"), &["check"]);
    assert_ne!(exit_code, 0);
    assert!(
        stderr.contains("failed to read config file"),
        "stderr: {}",
        stderr
    );
}

#[test]
fn test_check_malformed_file() {
    let (_dir, path) = write_config("addr = ");
    let (_stdout, stderr, exit_code) = run_with_config(&path, &["check"]);
    assert_ne!(exit_code, 0);
    assert!(
        stderr.contains("failed to decode config document"),
        "stderr: {}",
        stderr
    );
}

#[test]
fn test_match_all_eligible() {
    let (_dir, path) = write_config(FILTERED_CONFIG);
    let (stdout, _stderr, exit_code) = run_with_config(&path, &["match", "app.canal", "shop.canal"]);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("app.canal\teligible"));
    assert!(stdout.contains("shop.canal\teligible"));
}

#[test]
fn test_match_reports_filtered_tables() {
    let (_dir, path) = write_config(FILTERED_CONFIG);
    let (stdout, _stderr, exit_code) =
        run_with_config(&path, &["match", "app.canal", "mysql.canal", "app.other"]);
    assert_eq!(exit_code, 1, "filtered tables should give exit code 1");
    assert!(stdout.contains("app.canal\teligible"));
    assert!(stdout.contains("mysql.canal\tfiltered"));
    assert!(stdout.contains("app.other\tfiltered"));
}

#[test]
fn test_match_without_rules() {
    let (_dir, path) = write_config(r#"addr = "127.0.0.1:3306""#);
    let (stdout, _stderr, exit_code) = run_with_config(&path, &["match", "mysql.user"]);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("mysql.user\teligible"));
}

#[test]
fn test_show_masks_password() {
    let (_dir, path) = write_config(FILTERED_CONFIG);
    let (stdout, _stderr, exit_code) = run_with_config(&path, &["show", "--format", "json"]);
    assert_eq!(exit_code, 0);
    assert!(!stdout.contains("hunter2"));

    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["addr"], "10.0.0.1:3306");
    assert_eq!(value["server_id"], 1500);
    assert_eq!(value["dump"]["table_db"], "db1");
}

#[test]
fn test_dump_plan_prefers_tables() {
    let (_dir, path) = write_config(FILTERED_CONFIG);
    let (stdout, _stderr, exit_code) = run_with_config(&path, &["dump-plan"]);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("scope: tables of 'db1': t1"), "{}", stdout);
    assert!(!stdout.contains("scope: databases"));
}

#[test]
fn test_debug_writes_log_file() {
    let (dir, path) = write_config(FILTERED_CONFIG);
    let log_dir = dir.path().join("logs");
    let output = Command::new(env!("CARGO_BIN_EXE_canal-config"))
        .arg("--config")
        .arg(&path)
        .arg("--debug")
        .arg("--log-dir")
        .arg(&log_dir)
        .arg("check")
        .output()
        .unwrap();
    assert!(output.status.success());

    let entries: Vec<_> = fs::read_dir(&log_dir).unwrap().collect();
    assert!(!entries.is_empty(), "expected a log file in {:?}", log_dir);
}

#[test]
fn test_match_json_output() {
    let (_dir, path) = write_config(FILTERED_CONFIG);
    let (stdout, _stderr, exit_code) =
        run_with_config(&path, &["match", "--json", "app.canal", "mysql.canal"]);
    assert_eq!(exit_code, 1);

    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value[0]["table"], "app.canal");
    assert_eq!(value[0]["eligible"], true);
    assert_eq!(value[1]["table"], "mysql.canal");
    assert_eq!(value[1]["eligible"], false);
}

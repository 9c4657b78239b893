//! CLI Session Tests
//!
//! Drives the request session and one-shot commands through the public API.

use std::io::Write;

use serde_json::Value;
use tempfile::NamedTempFile;
use userbase::cli::{self, CliError};
use userbase::observability::{Logger, Severity};
use userbase::{AppConfig, RecordStore};

fn run_lines(store: &mut RecordStore, input: &str) -> Vec<Value> {
    let mut out = Vec::new();
    cli::run_session(store, input.as_bytes(), &mut out).unwrap();

    String::from_utf8(out)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[test]
fn test_session_list_reports_sorted_ids() {
    let mut store = RecordStore::with_logger("db", Logger::new(Severity::Fatal));
    let input = r#"{"op":"add","id":2,"username":"b","email":"b@example.com"}
{"op":"add","id":1,"username":"a","email":"a@example.com"}
{"op":"add","id":2,"username":"x","email":"x@example.com"}
{"op":"list"}
"#;

    let responses = run_lines(&mut store, input);

    assert_eq!(responses.len(), 4);
    assert_eq!(responses[2]["message"], "Record already exists");
    assert_eq!(responses[3]["data"]["ids"], serde_json::json!([1, 2]));
    assert_eq!(responses[3]["message"], "2 record(s)");
}

#[test]
fn test_every_response_carries_timestamp() {
    let mut store = RecordStore::with_logger("db", Logger::new(Severity::Fatal));
    let responses = run_lines(&mut store, "{\"op\":\"get\",\"id\":1}\n{}\n");

    for response in responses {
        assert_eq!(response["timestamp"], "2024-01-01T00:00:00Z");
    }
}

#[test]
fn test_load_config_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, r#"{{"timeout_secs": 12, "log_level": "ERROR"}}"#).unwrap();

    let config = cli::load_config(Some(file.path())).unwrap();
    assert_eq!(config.timeout_secs, 12);
    assert_eq!(config.log_level, Severity::Error);
}

#[test]
fn test_invalid_config_is_cli_config_error() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, r#"{{"timeout_secs": 0}}"#).unwrap();

    let err = cli::load_config(Some(file.path())).unwrap_err();
    assert!(matches!(err, CliError::Config(_)));
    assert!(err.to_string().starts_with("USERBASE_CLI_CONFIG_ERROR"));
}

#[test]
fn test_demo_uses_given_config() {
    let config = AppConfig {
        log_level: Severity::Fatal,
        ..AppConfig::default()
    };
    let mut out = Vec::new();
    cli::demo(&config, &mut out).unwrap();

    let output = String::from_utf8(out).unwrap();
    assert!(output.contains("Sum: 15"));
    assert!(output.contains(r#"["HELLO","WORLD"]"#));
}

//! CLI command implementations
//!
//! Commands write their results to the given writer; `run` wires them to
//! stdin/stdout.

use std::io::{self, Write};
use std::path::Path;

use serde_json::Value;

use crate::config::AppConfig;
use crate::data::{calculate_sum, format_response, DataProcessor, ResponseStatus};
use crate::fetch::{fetch_user_data, user_url};
use crate::observability::{Event, Logger};
use crate::store::{RecordId, RecordStore};

use super::args::{Command, DEFAULT_DATABASE_URL};
use super::errors::CliResult;
use super::io::write_json_line;
use super::session::run_session;

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command_or_default())
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cmd {
        Command::Demo { config } => demo(&load_config(config.as_deref())?, &mut out),
        Command::Sum { a, b } => sum(a, b, &mut out),
        Command::Transform { items } => transform(items, &mut out),
        Command::Fetch { id } => fetch(id, &AppConfig::default(), &mut out),
        Command::Session {
            config,
            database_url,
        } => {
            let config = load_config(config.as_deref())?;
            let mut store = RecordStore::with_config(database_url, &config);
            run_session(&mut store, io::stdin().lock(), &mut out)?;
            Ok(())
        }
    }
}

/// Load the config file if one was given, otherwise defaults
pub fn load_config(path: Option<&Path>) -> CliResult<AppConfig> {
    let config = match path {
        Some(path) => {
            let config = AppConfig::load(path)?;
            Logger::new(config.effective_log_level()).event(
                Event::ConfigLoaded,
                &[("path", path.display().to_string().as_str())],
            );
            config
        }
        None => AppConfig::default(),
    };
    Ok(config)
}

/// The sample flow: sum, a store with one user, and a list transform
pub fn demo<W: Write>(config: &AppConfig, out: &mut W) -> CliResult<()> {
    writeln!(out, "userbase sample run")?;

    writeln!(out, "Sum: {}", calculate_sum(5, 10))?;

    let mut store = RecordStore::with_config(DEFAULT_DATABASE_URL, config);
    let added = store.add(1, "testuser", "test@example.com");
    writeln!(out, "Added user 1: {}", added)?;

    let mut processor = DataProcessor::new(config.clone());
    let transformed = processor.transform(vec![
        Value::String("hello".to_string()),
        Value::String("world".to_string()),
    ]);
    writeln!(out, "Transformed: {}", Value::Array(transformed))?;

    out.flush()?;
    Ok(())
}

pub fn sum<W: Write>(a: i64, b: i64, out: &mut W) -> CliResult<()> {
    writeln!(out, "Sum: {}", calculate_sum(a, b))?;
    Ok(())
}

pub fn transform<W: Write>(items: Vec<String>, out: &mut W) -> CliResult<()> {
    let mut processor = DataProcessor::new(AppConfig::default());
    let transformed = processor.transform(items.into_iter().map(Value::String).collect());
    write_json_line(out, &transformed)
}

/// Fetch a profile and print the response envelope.
///
/// A failed fetch is reported in the envelope, not as a CLI error.
pub fn fetch<W: Write>(id: RecordId, config: &AppConfig, out: &mut W) -> CliResult<()> {
    let logger = Logger::new(config.effective_log_level());

    let response = match fetch_user_data(id) {
        Ok(profile) => {
            logger.event(Event::FetchComplete, &[("url", user_url(id).as_str())]);
            format_response(
                ResponseStatus::Success,
                "User fetched",
                Some(serde_json::to_value(&profile)?),
            )
        }
        Err(e) => {
            logger.event(
                Event::FetchFailed,
                &[("code", e.code()), ("message", e.to_string().as_str())],
            );
            format_response(ResponseStatus::Error, e.to_string(), None)
        }
    };

    write_json_line(out, &response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observability::Severity;

    fn quiet_config() -> AppConfig {
        AppConfig {
            log_level: Severity::Fatal,
            ..AppConfig::default()
        }
    }

    fn output_of(f: impl FnOnce(&mut Vec<u8>) -> CliResult<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_demo_output() {
        let output = output_of(|out| demo(&quiet_config(), out));
        let lines: Vec<_> = output.lines().collect();

        assert_eq!(
            lines,
            vec![
                "userbase sample run",
                "Sum: 15",
                "Added user 1: true",
                r#"Transformed: ["HELLO","WORLD"]"#,
            ]
        );
    }

    #[test]
    fn test_sum_command() {
        assert_eq!(output_of(|out| sum(-2, 7, out)), "Sum: 5\n");
    }

    #[test]
    fn test_transform_command() {
        let output = output_of(|out| transform(vec!["a".into(), "bc".into()], out));
        assert_eq!(output, "[\"A\",\"BC\"]\n");
    }

    #[test]
    fn test_fetch_command_any_id() {
        for id in [1, -5] {
            let resp: Value = serde_json::from_str(&output_of(|out| fetch(id, &quiet_config(), out))).unwrap();
            assert_eq!(resp["status"], "success");
            assert_eq!(resp["data"]["id"], id);
            assert_eq!(resp["data"]["name"], "John Doe");
        }
    }

    #[test]
    fn test_sum_command_past_i64_range() {
        let output = output_of(|out| sum(i64::MAX, 1, out));
        assert_eq!(output, "Sum: 9223372036854775808\n");
    }

    #[test]
    fn test_load_config_without_path_is_default() {
        assert_eq!(load_config(None).unwrap(), AppConfig::default());
    }
}

//! Integration tests for the logger
//!
//! These tests verify:
//! - Day-stamped file naming and placement
//! - Standard-output mode
//! - Reconfiguration and shutdown lifecycle
//! - Rotation across a day boundary
//! - JSON configuration

use chrono::{Local, TimeDelta, TimeZone};
use rust_daily_logger::core::config::executable_dir;
use rust_daily_logger::prelude::*;
use rust_daily_logger::{error, info, warn};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

fn clock_at(y: i32, m: u32, d: u32) -> Arc<ManualClock> {
    let start = Local.with_ymd_and_hms(y, m, d, 9, 30, 0).unwrap();
    Arc::new(ManualClock::new(start))
}

fn lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap_or_default()
        .lines()
        .map(String::from)
        .collect()
}

#[test]
fn test_empty_directory_uses_executable_dir() {
    let base = format!("itest-exe-{}-", std::process::id());
    let logger = Logger::builder().clock(clock_at(2024, 3, 5)).build();

    logger.configure("", base.as_str()).expect("configure next to executable");
    info!(logger, "placed next to the binary");

    let expected = executable_dir().unwrap().join(format!("{}20240305.log", base));
    assert_eq!(logger.current_file(), Some(expected.clone()));
    assert_eq!(logger.directory(), Some(executable_dir().unwrap()));
    assert!(lines(&expected)[0].ends_with("<INFO> placed next to the binary"));

    logger.shutdown();
    fs::remove_file(&expected).expect("cleanup log file");
}

#[test]
fn test_empty_name_writes_to_stdout() {
    let logger = Logger::new();
    logger.configure("", "").expect("stdout mode");

    assert!(logger.is_stdout());
    assert!(logger.current_file().is_none());
    info!(logger, "goes to stdout");
}

#[test]
fn test_file_and_stdout_never_both_active() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let logger = Logger::builder().clock(clock_at(2024, 3, 5)).build();

    for name in ["a", "", "b", "", "b"] {
        logger.configure(temp_dir.path(), name).unwrap();
        assert_ne!(logger.is_stdout(), logger.current_file().is_some());
    }
}

#[test]
fn test_same_day_reconfigure_keeps_content() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("app20240305.log");

    {
        let logger = Logger::builder().clock(clock_at(2024, 3, 5)).build();
        logger.configure(temp_dir.path(), "app").unwrap();
        info!(logger, "first run");
    }

    let logger = Logger::builder().clock(clock_at(2024, 3, 5)).build();
    logger.configure(temp_dir.path(), "app").unwrap();
    logger.configure(temp_dir.path(), "app").unwrap();
    info!(logger, "second run");

    let content = lines(&path);
    assert_eq!(content.len(), 2);
    assert!(content[0].ends_with("first run"));
    assert!(content[1].ends_with("second run"));
}

#[test]
fn test_missing_directory_is_created() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let nested = temp_dir.path().join("var").join("log").join("svc");
    let logger = Logger::builder().clock(clock_at(2024, 3, 5)).build();

    logger.configure(&nested, "svc").unwrap();
    warn!(logger, "created on demand");

    assert!(nested.is_dir());
    assert_eq!(lines(&nested.join("svc20240305.log")).len(), 1);
}

#[test]
fn test_rotation_across_month_boundary() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let clock = Arc::new(ManualClock::new(
        Local.with_ymd_and_hms(2024, 2, 29, 23, 59, 58).unwrap(),
    ));
    let logger = Logger::builder().clock(clock.clone()).build();
    logger.configure(temp_dir.path(), "edge").unwrap();

    error!(logger, "leap day");
    clock.advance(TimeDelta::seconds(5));
    error!(logger, "first of march");

    assert_eq!(lines(&temp_dir.path().join("edge20240229.log")).len(), 1);
    let march = lines(&temp_dir.path().join("edge20240301.log"));
    assert_eq!(march.len(), 1);
    assert!(march[0].starts_with("2024/03/01 00:00:03 "));
}

#[test]
fn test_shutdown_then_emit_is_silent() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let logger = Logger::builder().clock(clock_at(2024, 3, 5)).build();
    logger.configure(temp_dir.path(), "quiet").unwrap();

    logger.shutdown();
    info!(logger, "dropped");
    error!(logger, "dropped too");
    logger.refresh_output_target();

    assert!(lines(&temp_dir.path().join("quiet20240305.log")).is_empty());
    assert!(!logger.is_configured());
}

#[test]
fn test_json_config_applies_threshold_and_target() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let json = format!(
        r#"{{ "directory": {:?}, "base_name": "cfg", "min_level": "Warn" }}"#,
        temp_dir.path().to_str().unwrap()
    );
    let config = LoggerConfig::from_json(&json).unwrap();

    let logger = Logger::builder().clock(clock_at(2024, 3, 5)).build();
    logger.apply_config(&config).unwrap();

    info!(logger, "below threshold");
    warn!(logger, "at threshold");

    let content = lines(&temp_dir.path().join("cfg20240305.log"));
    assert_eq!(content.len(), 1);
    assert!(content[0].ends_with("<WARN> at threshold"));
}

#[test]
fn test_failing_display_does_not_panic() {
    use std::fmt;

    struct Flaky;
    impl fmt::Display for Flaky {
        fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
            Err(fmt::Error)
        }
    }

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let logger = Logger::builder().clock(clock_at(2024, 3, 5)).build();
    logger.configure(temp_dir.path(), "fmt").unwrap();

    info!(logger, "value={} tail", Flaky);

    let content = lines(&temp_dir.path().join("fmt20240305.log"));
    assert_eq!(content.len(), 1);
    assert!(content[0].ends_with("<INFO> value="));
}

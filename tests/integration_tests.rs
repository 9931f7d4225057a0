//! Integration tests for logger system
//!
//! These tests verify:
//! - Severity gating for every level / call-level pair
//! - Contextual derivation never leaks into parents or siblings
//! - Record field order
//! - JSON and console output through real streams
//! - Close error propagation

use leveled_logger::prelude::*;
use leveled_logger::sinks::StreamSink;
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

fn memory_logger(opts: Options) -> (Logger, Arc<MemorySink>) {
    let sink = Arc::new(MemorySink::new());
    let logger = Logger::with_sink(opts, sink.clone());
    (logger, sink)
}

fn keys(record: &Record) -> Vec<String> {
    record.keys().map(str::to_string).collect()
}

/// Fields that do not vary between calls.
fn static_fields(record: &Record) -> Vec<(String, Value)> {
    record
        .fields()
        .iter()
        .filter(|(k, _)| k != "timestamp" && k != "caller")
        .cloned()
        .collect()
}

#[test]
fn test_level_call_matrix() {
    let calls = [Level::Debug, Level::Info, Level::Warn, Level::Error];

    for level in Level::ALL {
        for call in calls {
            let (logger, sink) = memory_logger(Options {
                level: level.to_string(),
                ..Options::default()
            });

            match call {
                Level::Debug => logger.debug("m", kv![]),
                Level::Info => logger.info("m", kv![]),
                Level::Warn => logger.warn("m", kv![]),
                Level::Error => logger.error("m", kv![]),
                Level::None => unreachable!(),
            }

            let expected = usize::from(call <= level && level != Level::None);
            assert_eq!(sink.len(), expected, "logger {} call {}", level, call);
        }
    }
}

#[test]
fn test_field_order() {
    let mut opts = Options {
        name: "api".into(),
        environment: "production".into(),
        region: "us-east-1".into(),
        level: "debug".into(),
        ..Options::default()
    };
    opts.tags.insert("team".into(), "core".into());
    opts.tags.insert("cluster".into(), "blue".into());

    let (logger, sink) = memory_logger(opts);
    let child = logger.with(kv!["request_id" => "r-1"]).with(kv!["user" => "u-9"]);
    child.info("handled", kv!["status" => 200, "bytes" => 512]);

    let (_, record) = sink.last().unwrap();
    assert_eq!(
        keys(&record),
        vec![
            "timestamp",
            "caller",
            "logger",
            "environment",
            "region",
            "cluster",
            "team",
            "request_id",
            "user",
            "level",
            "message",
            "status",
            "bytes",
        ]
    );
}

#[test]
fn test_with_never_mutates_parent() {
    let (parent, sink) = memory_logger(Options {
        name: "parent".into(),
        ..Options::default()
    });

    parent.info("before", kv![]);
    let (_, before) = sink.last().unwrap();

    let child = parent.with(kv!["a" => "b"]);
    child.set_level("error");

    parent.info("before", kv![]);
    let (_, after) = sink.last().unwrap();
    assert_eq!(static_fields(&before), static_fields(&after));
    assert_eq!(parent.get_level(), Level::Info);

    child.error("child", kv![]);
    let (_, record) = sink.last().unwrap();
    assert_eq!(record.get("a"), Some(&Value::from("b")));
    assert_eq!(record.get("logger"), Some(&Value::from("parent")));
}

#[test]
fn test_empty_with_is_independent_copy() {
    let (parent, sink) = memory_logger(Options {
        name: "svc".into(),
        environment: "dev".into(),
        ..Options::default()
    });
    let copy = parent.with(kv![]);

    parent.warn("same", kv![]);
    copy.warn("same", kv![]);
    let records = sink.records();
    assert_eq!(static_fields(&records[0].1), static_fields(&records[1].1));

    copy.set_level("none");
    assert_eq!(parent.get_level(), Level::Info);
    parent.set_level("debug");
    assert_eq!(copy.get_level(), Level::None);
}

#[test]
fn test_child_inherits_level_at_derivation_time() {
    let (parent, _) = memory_logger(Options {
        level: "warn".into(),
        ..Options::default()
    });
    parent.set_level("debug");
    let child = parent.with(kv!["k" => "v"]);
    assert_eq!(child.get_level(), Level::Debug);

    parent.set_level("error");
    assert_eq!(child.get_level(), Level::Debug);
}

#[test]
fn test_formatted_message_has_no_extra_pairs() {
    let (logger, sink) = memory_logger(Options {
        level: "debug".into(),
        ..Options::default()
    });
    debugf!(logger, "failed: {}", "disk full");

    let (level, record) = sink.last().unwrap();
    assert_eq!(level, Level::Debug);
    assert_eq!(record.message(), Some("failed: disk full"));
    assert_eq!(keys(&record), vec!["timestamp", "caller", "level", "message"]);
}

#[test]
fn test_json_file_output() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("app.jsonl");

    let sink = StreamSink::file(&log_file, Format::Json).expect("Failed to create sink");
    let logger = Logger::builder()
        .name("writer")
        .region("local")
        .sink(sink)
        .build();

    logger.info("first", kv!["n" => 1]);
    logger.with(kv!["scope" => "child"]).error("second", kv![]);
    logger.debug("filtered", kv![]);
    logger.close().expect("Failed to flush");

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);

    let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(first["logger"], "writer");
    assert_eq!(first["region"], "local");
    assert_eq!(first["level"], "info");
    assert_eq!(first["message"], "first");
    assert_eq!(first["n"], 1);
    assert!(first["timestamp"].is_string());
    assert!(first["caller"]
        .as_str()
        .unwrap()
        .starts_with("integration_tests.rs:"));

    let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
    assert_eq!(second["scope"], "child");
    assert_eq!(second["level"], "error");
}

#[test]
fn test_console_file_output() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("app.log");

    let sink = StreamSink::file(&log_file, Format::Console).expect("Failed to create sink");
    let logger = Logger::builder()
        .name("console")
        .timestamp_format(TimestampFormat::UnixMillis)
        .sink(sink)
        .build();

    logger.warn("disk nearly full", kv!["free" => "1 GB"]);
    logger.close().expect("Failed to flush");

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    let line = content.lines().next().unwrap();
    assert!(line.starts_with("timestamp="));
    assert!(line.contains(" logger=console level=warn message=\"disk nearly full\" free=\"1 GB\""));
}

#[test]
fn test_close_propagation() {
    let (logger, sink) = memory_logger(Options::default());
    assert!(logger.close().is_ok());
    assert_eq!(sink.flush_count(), 1);

    sink.fail_flush("fsync failed");
    let child = logger.with(kv!["k" => "v"]);
    match child.close() {
        Err(LoggerError::WriterError(message)) => assert_eq!(message, "fsync failed"),
        other => panic!("unexpected close result: {:?}", other),
    }
}

#[test]
fn test_write_failures_never_reach_caller() {
    let (logger, sink) = memory_logger(Options::default());
    sink.fail_writes(true);

    for _ in 0..5 {
        logger.error("lost", kv!["attempt" => 1]);
    }
    assert_eq!(logger.metrics().dropped_count(), 5);

    sink.fail_writes(false);
    logger.error("kept", kv![]);
    assert_eq!(sink.len(), 1);
    assert_eq!(logger.metrics().total_logged(), 1);
}

#[test]
fn test_options_from_config() {
    let opts: Options = serde_json::from_str(
        r#"{
            "name": "from-config",
            "level": "WARN",
            "format": "console",
            "tags": {"build": "42"}
        }"#,
    )
    .unwrap();

    let (logger, sink) = memory_logger(opts);
    assert_eq!(logger.get_level(), Level::Warn);

    logger.warn("configured", kv![]);
    let (_, record) = sink.last().unwrap();
    assert_eq!(record.get("build"), Some(&Value::from("42")));
}

#[test]
fn test_invalid_custom_timestamp_from_config() {
    let opts: Options = serde_json::from_str(
        r#"{"level":"info","timestamp_format":{"Custom":"%Q"}}"#,
    )
    .unwrap();
    let (logger, sink) = memory_logger(opts);

    let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        logger.info("hello", kv![]);
    }));
    assert!(outcome.is_ok());

    let (_, record) = sink.last().unwrap();
    let stamp = record.get("timestamp").and_then(Value::as_str).unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(stamp).is_ok(), "got {}", stamp);
}

use chrono::DateTime;
use logger_core::{Logger, LoggerConfig, MemorySink, Payload, Severity, Stream};
use serde_json::json;
use std::sync::Arc;

fn capture(threshold: &str) -> (Logger, Arc<MemorySink>) {
    let sink = Arc::new(MemorySink::new());
    let logger = Logger::with_sink(LoggerConfig::new(threshold), sink.clone());
    (logger, sink)
}

/// Drops the `<timestamp> - ` prefix after checking it is RFC 3339 UTC.
fn strip_timestamp(line: &str) -> &str {
    let (stamp, rest) = line.split_once(" - ").expect("line has a timestamp");
    assert!(stamp.ends_with('Z'), "timestamp not UTC: {}", stamp);
    DateTime::parse_from_rfc3339(stamp).expect("valid RFC 3339 timestamp");
    rest
}

#[test]
fn test_threshold_filters_lower_severities() {
    for (i, threshold) in Severity::ALL.iter().enumerate() {
        let sink = Arc::new(MemorySink::new());
        let logger = Logger::with_sink(LoggerConfig::new(*threshold), sink.clone());

        for severity in Severity::ALL {
            logger.write(severity, "file", "method", "msg", None);
        }

        let emitted: Vec<String> = sink
            .records()
            .iter()
            .map(|(_, line)| strip_timestamp(line).to_string())
            .collect();
        assert_eq!(emitted.len(), Severity::ALL.len() - i);
        for (line, severity) in emitted.iter().zip(&Severity::ALL[i..]) {
            assert!(line.starts_with(&format!("[{}]", severity)));
        }
    }
}

#[test]
fn test_warn_logger_ignores_info() {
    let (logger, sink) = capture("warn");
    logger.i("fileA", "run", "hello", None);
    assert!(sink.is_empty());
}

#[test]
fn test_error_with_object_payload() {
    let (logger, sink) = capture("info");
    logger.e("fileA", "run", "boom", Some(json!({"code": 7}).into()));

    let lines = sink.stderr();
    assert_eq!(lines.len(), 2);
    assert_eq!(strip_timestamp(&lines[0]), "[ERROR] - fileA -> run: boom");
    assert_eq!(lines[1], "\t{\"code\":7}");
}

#[test]
fn test_string_payload_is_not_quoted() {
    let (logger, sink) = capture("info");
    logger.i("fileA", "run", "with text", Some(Payload::from("raw")));
    logger.d("fileA", "run", "with object", Some(json!({"a": 1}).into()));

    let lines = sink.stdout();
    assert_eq!(lines[1], "\traw");
    assert_eq!(lines[3], "\t{\"a\":1}");
}

#[test]
fn test_streams_by_severity() {
    let (logger, sink) = capture("info");
    logger.i("f", "", "info", None);
    logger.d("f", "", "debug", None);
    logger.w("f", "", "warn", None);
    logger.e("f", "", "error", None);

    let streams: Vec<Stream> = sink.records().iter().map(|(s, _)| *s).collect();
    assert_eq!(
        streams,
        vec![Stream::Stdout, Stream::Stdout, Stream::Stderr, Stream::Stderr]
    );
}

#[test]
fn test_shortcuts_match_write() {
    let shortcuts: [(Severity, fn(&Logger, &str, &str, &str, Option<Payload>)); 4] = [
        (Severity::Info, Logger::i),
        (Severity::Debug, Logger::d),
        (Severity::Warn, Logger::w),
        (Severity::Error, Logger::e),
    ];

    for (severity, shortcut) in shortcuts {
        let (logger, via_shortcut) = capture("info");
        shortcut(&logger, "mod", "op", "msg", Some(json!([1, 2]).into()));

        let (logger, via_write) = capture("info");
        logger.write(severity, "mod", "op", "msg", Some(json!([1, 2]).into()));

        let strip = |sink: &MemorySink| -> Vec<(Stream, String)> {
            sink.records()
                .iter()
                .map(|(stream, line)| {
                    let text = if line.starts_with('\t') {
                        line.as_str()
                    } else {
                        strip_timestamp(line)
                    };
                    (*stream, text.to_string())
                })
                .collect()
        };
        let expected = strip(&via_write);
        assert_eq!(expected.len(), 2);
        assert_eq!(expected[1].1, "\t[1,2]");
        assert_eq!(strip(&via_shortcut), expected);
    }
}

#[test]
fn test_string_thresholds_are_case_insensitive() {
    let a = Logger::with_sink(LoggerConfig::new("warning"), Arc::new(MemorySink::new()));
    let b = Logger::with_sink(LoggerConfig::new("WARN"), Arc::new(MemorySink::new()));
    let c = Logger::with_sink(LoggerConfig::new("Warn"), Arc::new(MemorySink::new()));
    assert_eq!(a.threshold(), Severity::Warn);
    assert_eq!(b.threshold(), a.threshold());
    assert_eq!(c.threshold(), a.threshold());
}

#[test]
fn test_unrecognized_threshold_only_lets_errors_through() {
    let (logger, sink) = capture("loud");
    assert_eq!(logger.threshold(), Severity::Error);

    logger.w("f", "m", "dropped", None);
    logger.e("f", "m", "kept", None);
    assert_eq!(sink.records().len(), 1);
    assert!(sink.stderr()[0].ends_with("kept"));
}

#[test]
fn test_named_logger_tags_lines() {
    let sink = Arc::new(MemorySink::new());
    let logger = Logger::with_sink(LoggerConfig::new("debug").with_name("billing"), sink.clone());
    logger.d("invoice", "", "", None);

    assert_eq!(strip_timestamp(&sink.stdout()[0]), "[DEBUG] - billing - invoice");
}

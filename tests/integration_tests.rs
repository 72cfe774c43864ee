//! Integration tests for the leveled logger
//!
//! These tests verify:
//! - Level gating of all emission shapes
//! - Color handling for terminal and non-terminal destinations
//! - File destinations
//! - Fatal/Panic signals
//! - JSON helpers embedded in messages

use leveled_log::prelude::*;
use serde_json::json;
use std::fs;
use std::fs::File;
use tempfile::TempDir;

fn plain(level: Level) -> (Logger, SharedBuffer) {
    let buffer = SharedBuffer::new();
    let logger = Logger::builder()
        .level(level)
        .timestamp_format(TimestampFormat::None)
        .build(buffer.clone());
    (logger, buffer)
}

#[test]
fn test_warn_level_scenario() {
    let buffer = SharedBuffer::new();
    let logger = Logger::new(buffer.clone(), Level::Warn);

    logger.debug("x");
    logger.info("y");
    logger.warn("z");
    logger.error("w");

    let lines = buffer.lines();
    assert_eq!(lines.len(), 2, "Only warn and error should be written");
    assert!(lines[0].ends_with("warn  z"), "got {:?}", lines[0]);
    assert!(lines[1].ends_with("error w"), "got {:?}", lines[1]);
}

#[test]
fn test_disabled_levels_write_nothing() {
    for min in Level::ALL {
        let (logger, buffer) = plain(min);
        for level in Level::ALL {
            buffer.clear();
            logger.for_level(level).print("probe");
            if level >= min {
                assert_eq!(buffer.lines().len(), 1, "{} should be enabled at {}", level, min);
                assert!(buffer.contents().contains("probe"));
            } else {
                assert!(buffer.is_empty(), "{} should be disabled at {}", level, min);
            }
        }
    }
}

#[test]
fn test_all_emission_shapes() {
    let (logger, buffer) = plain(Level::Debug);

    logger.debug("one");
    logger.debugln(&[&"two", &2]);
    logger.debugf(format_args!("three={}", 3));
    logger.info("four");
    logger.infoln(&[&"five", &5.5]);
    logger.infof(format_args!("{:>4}", "six"));
    logger.warn("seven");
    logger.warnln(&[&"eight"]);
    logger.warnf(format_args!("nine"));
    logger.error("ten");
    logger.errorln(&[&'x', &true]);
    logger.errorf(format_args!("{:?}", vec![1, 2]));

    assert_eq!(
        buffer.lines(),
        vec![
            "debug one",
            "debug two 2",
            "debug three=3",
            "info  four",
            "info  five 5.5",
            "info   six",
            "warn  seven",
            "warn  eight",
            "warn  nine",
            "error ten",
            "error x true",
            "error [1, 2]",
        ]
    );
}

#[test]
fn test_print_aliases_use_info() {
    let (logger, buffer) = plain(Level::Info);
    logger.print("a");
    logger.println(&[&"b", &"c"]);
    logger.printf(format_args!("d{}", 1));
    assert_eq!(buffer.lines(), vec!["info  a", "info  b c", "info  d1"]);

    buffer.clear();
    logger.set_level(Level::Warn);
    logger.print("hidden");
    logger.println(&[&"hidden"]);
    logger.printf(format_args!("hidden"));
    assert!(buffer.is_empty());
}

#[test]
fn test_non_tty_output_has_no_escapes() {
    let buffer = SharedBuffer::new();
    let logger = Logger::new(buffer.clone(), Level::Debug);
    assert!(!logger.uses_colors());

    for level in Level::ALL {
        logger.for_level(level).print("message");
    }
    assert!(!buffer.contents().contains('\x1b'));
}

#[test]
fn test_forced_colors_are_distinct_per_level() {
    let buffer = SharedBuffer::new();
    let logger = Logger::builder()
        .color_mode(ColorMode::Always)
        .timestamp_format(TimestampFormat::None)
        .build(buffer.clone());
    assert!(logger.uses_colors());

    let mut codes = Vec::new();
    for level in Level::ALL {
        buffer.clear();
        logger.for_level(level).print("m");
        let line = buffer.contents();
        assert!(line.starts_with("\x1b["), "label should be colored: {:?}", line);
        assert!(line.contains(level.label()));
        assert!(line.contains("\x1b[0m"));
        let code = line[..line.find('m').unwrap()].to_string();
        assert!(!codes.contains(&code), "color code reused: {:?}", code);
        codes.push(code);
    }
}

#[test]
fn test_file_destination() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("leveled.log");

    let file = File::create(&log_file).expect("Failed to create log file");
    let logger = Logger::new(file, Level::Info);
    assert!(!logger.uses_colors(), "Regular files are not terminals");

    logger.debug("skipped");
    logger.info("first");
    logger.errorf(format_args!("second {}", 2));
    logger.flush().expect("Failed to flush");

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("info  first"));
    assert!(lines[1].ends_with("error second 2"));
    assert!(!content.contains('\x1b'));
}

#[test]
fn test_timestamp_prefix_layout() {
    let buffer = SharedBuffer::new();
    let logger = Logger::builder()
        .timestamp_format(TimestampFormat::Standard)
        .utc(true)
        .build(buffer.clone());

    logger.info("stamped");
    let line = buffer.lines().remove(0);
    // "YYYY/MM/DD HH:MM:SS info  stamped"
    assert_eq!(line.len(), 19 + 1 + 6 + 7);
    assert_eq!(&line[4..5], "/");
    assert_eq!(&line[13..14], ":");
    assert_eq!(&line[19..], " info  stamped");
}

#[test]
fn test_fatal_and_panic_signals() {
    let (logger, buffer) = plain(Level::Error);

    let fatal = logger.fatal("config missing");
    assert_eq!(fatal.kind(), TerminateKind::Exit);
    assert_eq!(fatal.exit_code(), 1);

    let fatal = logger.fatalln(&[&"code", &2]);
    assert_eq!(fatal.message(), "code 2\n");

    let panic = logger.panicf(format_args!("state {}", "corrupt"));
    assert_eq!(panic.kind(), TerminateKind::Panic);
    assert_eq!(panic.message(), "state corrupt");

    let _ = logger.panic("p");
    let _ = logger.panicln(&[&"q"]);
    let _ = logger.fatalf(format_args!("r"));

    assert_eq!(
        buffer.lines(),
        vec![
            "error config missing",
            "error code 2",
            "error state corrupt",
            "error p",
            "error q",
            "error r",
        ]
    );
}

#[test]
#[should_panic(expected = "state corrupt")]
fn test_panic_signal_raises() {
    let (logger, _) = plain(Level::Debug);
    logger.panic("state corrupt").raise();
}

#[test]
fn test_json_helpers_in_messages() {
    let (logger, buffer) = plain(Level::Debug);
    logger.infof(format_args!("payload {}", to_json(&json!({"a": 1}))));
    assert_eq!(buffer.lines(), vec![r#"info  payload {"a":1}"#]);

    assert_eq!(to_json_indent(&json!(["x"])), "[\n  \"x\"\n]");
}

#[test]
fn test_level_parsing_errors() {
    assert!(matches!(
        "verbose".parse::<Level>(),
        Err(LoggerError::UnknownLevelName { .. })
    ));
    assert!(matches!(
        Level::try_from(9u8),
        Err(LoggerError::InvalidLevel { value: 9 })
    ));
}

#[test]
fn test_default_logger_accessor() {
    let logger = default_logger();
    assert!(std::ptr::eq(logger, leveled_log::global::default_logger()));
}

#[test]
fn test_default_logger_set_level_silences_info() {
    // Default output is stdout, so check the wiring rather than bytes.
    leveled_log::global::set_level(Level::Error);
    assert!(leveled_log::global::for_level(Level::Info).is_discard());
    leveled_log::global::info("not written");
    leveled_log::global::set_level(Level::Debug);
    assert!(!leveled_log::global::for_level(Level::Info).is_discard());
}

#[test]
fn test_invalid_custom_timestamp_never_panics() {
    let buffer = SharedBuffer::new();
    let logger = Logger::builder()
        .level(Level::Info)
        .timestamp_format(TimestampFormat::Custom("%Q".into()))
        .utc(true)
        .build(buffer.clone());

    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        logger.debug("disabled");
        logger.info("hello");
    }));
    assert!(result.is_ok(), "emission must not panic on a bad pattern");

    // Falls back to the standard "YYYY/MM/DD HH:MM:SS" layout.
    let lines = buffer.lines();
    assert_eq!(lines.len(), 1);
    assert_eq!(&lines[0][19..], " info  hello");

    assert!(matches!(
        TimestampFormat::custom("%Q"),
        Err(LoggerError::InvalidTimestampFormat { .. })
    ));
}

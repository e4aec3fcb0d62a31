//! Tests for the logger façade: routing, context binding, refresh hook.

mod common;

use common::{capture, parse};
use gumo_logging::{Level, LoggerContext, LoggerManager, MemorySink, OutputFormat};
use std::sync::{Arc, Mutex};

#[test]
fn routes_by_severity() {
    let cases = [
        (Level::Debug, false),
        (Level::Info, false),
        (Level::Warning, false),
        (Level::Error, true),
        (Level::Critical, true),
        (Level::FATAL, true),
    ];

    for (level, to_error) in cases {
        let c = capture(OutputFormat::Structured);
        c.manager.get_logger(None).log(level, "routed");
        assert_eq!(c.error.len(), usize::from(to_error), "{level}");
        assert_eq!(c.normal.len(), usize::from(!to_error), "{level}");
    }
}

#[test]
fn convenience_methods_route_like_log() {
    let c = capture(OutputFormat::Structured);
    let logger = c.manager.get_logger(None);

    logger.debug("d");
    logger.info("i");
    logger.warning("w");
    logger.error("e");
    logger.exception("x");
    logger.critical("c");
    logger.fatal("f");

    let normal: Vec<String> = c
        .normal
        .lines()
        .iter()
        .map(|l| parse(l)["severity"].as_str().unwrap().to_string())
        .collect();
    let error: Vec<String> = c
        .error
        .lines()
        .iter()
        .map(|l| parse(l)["severity"].as_str().unwrap().to_string())
        .collect();

    assert_eq!(normal, vec!["DEBUG", "INFO", "WARNING"]);
    assert_eq!(error, vec!["ERROR", "ERROR", "CRITICAL", "CRITICAL"]);
}

#[test]
fn loggers_from_one_manager_are_independent() {
    let c = capture(OutputFormat::Structured);
    let a = c.manager.get_logger(Some("aaa/1;o=1"));
    let b = c.manager.get_logger(Some("bbb/2"));

    a.info("from a");
    b.info("from b");
    a.info("from a again");

    let lines: Vec<serde_json::Value> = c.normal.lines().iter().map(|l| parse(l)).collect();
    assert_eq!(lines[0]["logging.googleapis.com/trace"], "projects/myproj/traces/aaa");
    assert_eq!(lines[1]["logging.googleapis.com/trace"], "projects/myproj/traces/bbb");
    assert_eq!(lines[2]["logging.googleapis.com/spanId"], "1");
    assert_eq!(a.context().span_id(), Some("1"));
    assert_eq!(b.context().span_id(), Some("2"));
}

#[test]
fn refresh_hook_replaces_context_and_keeps_last_value() {
    let ambient: Arc<Mutex<Option<LoggerContext>>> = Arc::new(Mutex::new(None));
    let normal = MemorySink::new();

    let hook_state = Arc::clone(&ambient);
    let manager = LoggerManager::builder()
        .settings(common::settings(OutputFormat::Structured))
        .normal_sink(normal.clone())
        .error_sink(MemorySink::new())
        .fetch_context(move || hook_state.lock().unwrap().clone())
        .build();

    // Minted before any request context exists, as a module-level logger would be.
    let logger = manager.get_logger(None);

    logger.info("before request");
    *ambient.lock().unwrap() = Some(manager.get_logger_context(Some("req1/7;o=1")));
    logger.info("during request");
    *ambient.lock().unwrap() = None;
    logger.info("after request");

    let lines: Vec<serde_json::Value> = normal.lines().iter().map(|l| parse(l)).collect();
    assert!(lines[0].get("logging.googleapis.com/trace").is_none());
    assert_eq!(lines[1]["logging.googleapis.com/trace"], "projects/myproj/traces/req1");
    assert_eq!(lines[2]["logging.googleapis.com/spanId"], "7");
}

#[test]
fn with_context_binds_explicit_context() {
    let c = capture(OutputFormat::Structured);
    let base = c.manager.get_logger(None);
    let bound = base.with_context(LoggerContext::new(None, Some("99".to_string())));

    bound.info("x");
    base.info("y");

    let lines = c.normal.lines();
    assert_eq!(parse(&lines[0])["logging.googleapis.com/spanId"], "99");
    assert!(parse(&lines[1]).get("logging.googleapis.com/spanId").is_none());
}

#[test]
fn logger_is_shareable_across_threads() {
    let c = capture(OutputFormat::Text);
    let logger = c.manager.get_logger(Some("t/1"));

    std::thread::scope(|s| {
        for i in 0..4 {
            let logger = &logger;
            s.spawn(move || {
                for j in 0..25 {
                    logger.info(format!("thread {i} line {j}"));
                }
            });
        }
    });

    assert_eq!(c.normal.len(), 100);
    assert!(c.normal.lines().iter().all(|l| l.contains("]INFO:")));
}

#[test]
fn logger_reports_manager_settings() {
    let c = capture(OutputFormat::Structured);
    let logger = c.manager.get_logger(None);
    assert_eq!(logger.project_id(), "myproj");
    assert_eq!(logger.format(), OutputFormat::Structured);
}

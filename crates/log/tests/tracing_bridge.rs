//! Contextual logger routed through a `tracing` subscriber

mod common;

use std::sync::Arc;

use ambient_log::prelude::*;
use ambient_log::{LeveledLogger, TRACING_TARGET, TracingLogger};
use common::SharedBuffer;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

fn subscriber(buf: SharedBuffer, max: tracing::Level) -> impl tracing::Subscriber + Send + Sync {
    tracing_subscriber::fmt()
        .json()
        .flatten_event(true)
        .without_time()
        .with_max_level(max)
        .with_writer(buf)
        .finish()
}

#[test]
fn test_bridge_emits_tracing_event() {
    let buf = SharedBuffer::default();
    let logger = LoggerBuilder::new()
        .keys(["userID", "requestID"])
        .underlying(TracingLogger::new())
        .build();
    let ctx = Context::background()
        .with_value("userID", "42069")
        .with_value("requestID", "abcd-efgh");

    tracing::subscriber::with_default(subscriber(buf.clone(), tracing::Level::DEBUG), || {
        logger.info(&ctx, "Info message", attrs![key = "value"]);
        logger.error(&ctx, "Error message", attrs![errorCode = 500]);
    });

    let records = buf.records();
    assert_eq!(records.len(), 2);

    assert_eq!(records[0]["level"], "INFO");
    assert_eq!(records[0]["target"], TRACING_TARGET);
    assert_eq!(records[0]["message"], "Info message");
    let attrs: Value = serde_json::from_str(records[0]["attrs"].as_str().unwrap()).unwrap();
    assert_eq!(
        attrs,
        json!({"userID": "42069", "requestID": "abcd-efgh", "key": "value"})
    );

    assert_eq!(records[1]["level"], "ERROR");
    assert_eq!(
        records[1]["attrs"],
        r#"{"userID":"42069","requestID":"abcd-efgh","errorCode":500}"#
    );
}

#[test]
fn test_bridge_respects_subscriber_level() {
    let buf = SharedBuffer::default();
    let bridge: Arc<dyn LeveledLogger> = Arc::new(TracingLogger::new());
    let logger = ContextualLogger::build(["userID"], Some(bridge));

    tracing::subscriber::with_default(subscriber(buf.clone(), tracing::Level::WARN), || {
        assert!(!logger.enabled(Level::Info));
        assert!(logger.enabled(Level::Warn));
        logger.debug(&Context::background(), "dropped", Vec::new());
        logger.warn(&Context::background(), "kept", Vec::new());
    });

    let records = buf.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["message"], "kept");
    assert_eq!(records[0]["attrs"], "{}");
}

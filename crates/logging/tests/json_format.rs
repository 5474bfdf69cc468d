// crates/logging/tests/json_format.rs
mod common;

use common::VecWriter;
use logging::{LogFormat, SubscriberConfig, subscriber_with_writer};
use serde_json::Value;
use tracing::info;

#[test]
fn json_formatting_works() {
    let writer = VecWriter::default();
    let cfg = SubscriberConfig::builder()
        .format(LogFormat::Json)
        .verbose(1)
        .build();
    let subscriber = subscriber_with_writer(cfg, writer.clone()).unwrap();
    tracing::subscriber::with_default(subscriber, || {
        info!(target: "test", foo = 1, "hello");
    });
    let contents = writer.contents();
    let v: Value = serde_json::from_str(contents.trim_end()).unwrap();
    assert_eq!(v["fields"]["message"], "hello");
    assert_eq!(v["fields"]["foo"], 1);
    assert_eq!(v["target"], "test");
    assert_eq!(v["level"], "INFO");
    assert!(v.get("timestamp").is_none());
}

#[test]
fn json_timestamp_when_requested() {
    let writer = VecWriter::default();
    let cfg = SubscriberConfig::builder()
        .format(LogFormat::Json)
        .verbose(1)
        .timestamps(true)
        .build();
    let subscriber = subscriber_with_writer(cfg, writer.clone()).unwrap();
    tracing::subscriber::with_default(subscriber, || {
        info!(target: "test", "tick");
    });
    let v: Value = serde_json::from_str(writer.contents().trim_end()).unwrap();
    assert!(v["timestamp"].as_str().unwrap().ends_with('Z'));
}

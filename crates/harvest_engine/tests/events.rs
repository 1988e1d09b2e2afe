use std::fs;

use harvest_core::{event_id, Severity};
use harvest_engine::{EventRecorder, JsonlEventRecorder};
use tempfile::TempDir;

#[test]
fn appends_one_json_record_per_event() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("events.jsonl");
    let recorder = JsonlEventRecorder::new(&path);

    recorder.ensure_source("UpdateTraceHarvester");
    recorder.append(
        "UpdateTraceHarvester",
        event_id::RUN_SUMMARY,
        Severity::Information,
        "Files converted this run: 3.",
    );
    recorder.append(
        "UpdateTraceHarvester",
        event_id::MISSING_WATERMARK,
        Severity::Warning,
        "Missing watermark file.",
    );

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<_> = content.lines().collect();
    assert_eq!(lines.len(), 2);

    let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(first["source"], "UpdateTraceHarvester");
    assert_eq!(first["event_id"], event_id::RUN_SUMMARY);
    assert_eq!(first["severity"], "information");
    assert_eq!(first["message"], "Files converted this run: 3.");
    assert!(first["time"].is_string());

    let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
    assert_eq!(second["event_id"], event_id::MISSING_WATERMARK);
    assert_eq!(second["severity"], "warning");
}

#[test]
fn registration_is_idempotent() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("events.jsonl");
    let recorder = JsonlEventRecorder::new(&path);

    recorder.ensure_source("UpdateTraceHarvester");
    recorder.ensure_source("UpdateTraceHarvester");
    assert!(path.exists());
    assert_eq!(fs::read_to_string(&path).unwrap(), "");
}

#[test]
fn sink_failures_never_surface() {
    let temp = TempDir::new().unwrap();
    // The sink path sits below a regular file, so every open fails.
    let blocker = temp.path().join("not_a_dir");
    fs::write(&blocker, "x").unwrap();
    let recorder = JsonlEventRecorder::new(blocker.join("events.jsonl"));

    recorder.ensure_source("UpdateTraceHarvester");
    recorder.append(
        "UpdateTraceHarvester",
        event_id::FATAL_ERROR,
        Severity::Error,
        "detail",
    );
}

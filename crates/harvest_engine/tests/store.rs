use std::fs;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use harvest_core::{Watermark, WatermarkOrigin, FALLBACK_LOOKBACK_DAYS};
use harvest_engine::WatermarkStore;
use tempfile::TempDir;

fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, s)
        .unwrap()
}

#[test]
fn missing_store_resolves_to_fallback_without_creating_the_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("watermark.txt");
    let store = WatermarkStore::new(&path);

    let now = at(2024, 3, 1, 12, 0, 0);
    let resolved = store.load(now);
    assert_eq!(resolved.origin, WatermarkOrigin::DefaultedMissing);
    assert_eq!(
        resolved.value.instant(),
        now - Duration::days(FALLBACK_LOOKBACK_DAYS)
    );
    assert!(!path.exists());
}

#[test]
fn invalid_content_resolves_to_fallback_with_distinct_origin() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("watermark.txt");
    fs::write(&path, "not a timestamp").unwrap();
    let store = WatermarkStore::new(&path);

    let now = at(2024, 3, 1, 12, 0, 0);
    let resolved = store.load(now);
    assert_eq!(resolved.origin, WatermarkOrigin::DefaultedInvalid);
    assert_eq!(resolved.value, Watermark::fallback(now));
}

#[test]
fn stored_content_is_parsed() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("watermark.txt");
    fs::write(&path, "2024-01-01 00:00:00\n").unwrap();
    let store = WatermarkStore::new(&path);

    let resolved = store.load(at(2024, 3, 1, 12, 0, 0));
    assert_eq!(resolved.origin, WatermarkOrigin::Stored);
    assert_eq!(resolved.value.instant(), at(2024, 1, 1, 0, 0, 0));
}

#[test]
fn commit_round_trips_and_overwrites() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("watermark.txt");
    let store = WatermarkStore::new(&path);
    let now = at(2024, 3, 1, 12, 0, 0);

    let first = Watermark::new(at(2024, 1, 1, 0, 0, 0));
    store.commit(first).unwrap();
    assert_eq!(store.load(now).value, first);

    let second = Watermark::new(at(2024, 2, 2, 6, 30, 0));
    store.commit(second).unwrap();
    let resolved = store.load(now);
    assert_eq!(resolved.origin, WatermarkOrigin::Stored);
    assert_eq!(resolved.value, second);
}

#[test]
fn commit_creates_missing_parent_directory() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("state").join("watermark.txt");
    let store = WatermarkStore::new(&path);

    store.commit(Watermark::new(at(2024, 1, 1, 0, 0, 0))).unwrap();
    assert!(path.is_file());
}

#[test]
fn no_partial_store_file_on_commit_error() {
    let temp = TempDir::new().unwrap();
    let blocker = temp.path().join("not_a_dir");
    fs::write(&blocker, "x").unwrap();

    let path = blocker.join("watermark.txt");
    let store = WatermarkStore::new(&path);
    let result = store.commit(Watermark::new(at(2024, 1, 1, 0, 0, 0)));
    assert!(result.is_err());
    assert!(!path.exists());
}

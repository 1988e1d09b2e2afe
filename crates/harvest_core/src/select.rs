use std::path::PathBuf;

use chrono::NaiveDateTime;

use crate::watermark::Watermark;

/// One regular file found directly in the source directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedFile {
    pub path: PathBuf,
    pub modified: NaiveDateTime,
}

/// Keeps the entries modified strictly after the watermark.
///
/// A file stamped exactly at the watermark is considered already processed.
/// Discovery order is preserved; the conversion facility gets the set in
/// whatever order the directory listing produced.
pub fn newer_than(scanned: Vec<ScannedFile>, watermark: Watermark) -> Vec<ScannedFile> {
    scanned
        .into_iter()
        .filter(|file| file.modified > watermark.instant())
        .collect()
}

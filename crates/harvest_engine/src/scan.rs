use std::fs;
use std::io;
use std::path::Path;

use chrono::{DateTime, Local};
use harvest_core::ScannedFile;
use harvest_logging::harvest_warn;

/// Lists the regular files directly under `dir` with their local
/// modification times.
///
/// Subdirectories are not descended into. Entries whose metadata cannot be
/// read are skipped with a warning; only a failure to open the directory
/// itself aborts the scan.
pub fn scan_source_dir(dir: &Path) -> Result<Vec<ScannedFile>, io::Error> {
    let mut scanned = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        let file_type = match entry.file_type() {
            Ok(file_type) => file_type,
            Err(err) => {
                harvest_warn!("Skipping {:?}: could not read file type: {}", path, err);
                continue;
            }
        };
        if !file_type.is_file() {
            continue;
        }

        let modified = match entry.metadata().and_then(|meta| meta.modified()) {
            Ok(time) => DateTime::<Local>::from(time).naive_local(),
            Err(err) => {
                harvest_warn!("Skipping {:?}: no modification time: {}", path, err);
                continue;
            }
        };

        scanned.push(ScannedFile { path, modified });
    }
    Ok(scanned)
}

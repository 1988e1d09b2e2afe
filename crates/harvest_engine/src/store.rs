use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use harvest_core::{ResolvedWatermark, Watermark, WatermarkOrigin};
use harvest_logging::{harvest_debug, harvest_warn};

use crate::persist::{write_atomic, PersistError};

/// One-value store holding the boundary of the last successful run.
///
/// The file contains exactly one text timestamp. It is read once at the
/// start of a run and overwritten unconditionally after a successful one.
pub struct WatermarkStore {
    path: PathBuf,
}

impl WatermarkStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Tolerant load: an absent, unreadable, or unparsable store resolves to
    /// the fallback lookback instead of failing the run.
    pub fn load(&self, now: NaiveDateTime) -> ResolvedWatermark {
        match fs::read_to_string(&self.path) {
            Ok(text) => ResolvedWatermark::from_contents(Some(&text), now),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                harvest_debug!("No watermark store at {:?}", self.path);
                ResolvedWatermark::from_contents(None, now)
            }
            Err(err) => {
                harvest_warn!("Failed to read watermark store {:?}: {}", self.path, err);
                ResolvedWatermark {
                    value: Watermark::fallback(now),
                    origin: WatermarkOrigin::DefaultedInvalid,
                }
            }
        }
    }

    /// Overwrites the store unconditionally with the new boundary.
    pub fn commit(&self, watermark: Watermark) -> Result<(), PersistError> {
        write_atomic(&self.path, &format!("{watermark}\n"))
    }
}

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::convert::ConvertError;
use crate::persist::PersistError;

/// Unrecoverable failures that abort a run without committing a watermark.
///
/// The next scheduled run re-drives the same window, so nothing is lost;
/// the only cost is reconverting an overlapping delta.
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("failed to scan source directory {dir:?}: {source}")]
    Scan { dir: PathBuf, source: io::Error },
    #[error("conversion failed: {0}")]
    Convert(#[from] ConvertError),
    #[error("failed to commit watermark to {path:?}: {source}")]
    Commit { path: PathBuf, source: PersistError },
}

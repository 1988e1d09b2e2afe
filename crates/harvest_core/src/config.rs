use std::path::PathBuf;

/// Effective configuration for one harvest run.
///
/// Built once by the caller and passed explicitly into the entry point;
/// nothing in the pipeline reads configuration from ambient state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarvestConfig {
    /// Directory scanned (non-recursively) for binary trace files.
    pub source_dir: PathBuf,
    /// File holding the single-line watermark timestamp.
    pub watermark_path: PathBuf,
    /// Text log regenerated in full by each conversion.
    pub output_path: PathBuf,
    /// Source name under which operational events are recorded.
    pub event_source: String,
    /// Minimum OS build the conversion facility supports, if any.
    pub min_build: Option<u32>,
}

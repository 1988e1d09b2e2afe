use crate::watermark::Watermark;

/// What one completed run accomplished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of source files handed to the conversion facility.
    pub files_processed: usize,
    /// Watermark that was in effect before this run, kept for audit.
    pub previous_watermark: Watermark,
}

impl RunSummary {
    /// Text of the per-run summary event.
    pub fn event_message(&self) -> String {
        format!(
            "Update trace harvest complete. Files converted this run: {}. Previous watermark: {}.",
            self.files_processed, self.previous_watermark
        )
    }
}

/// Result of invoking the harvester once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The pipeline ran to completion and committed a new watermark.
    Completed(RunSummary),
    /// The host build is below the configured minimum; nothing was touched.
    SkippedUnsupportedBuild { build: u32, minimum: u32 },
}

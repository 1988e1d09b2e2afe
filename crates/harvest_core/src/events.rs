use std::fmt;

/// Numeric identifiers for the operational events a run can record.
///
/// The values are fixed; downstream alerting keys on them.
pub mod event_id {
    /// Informational per-run summary.
    pub const RUN_SUMMARY: u32 = 11660;
    /// Watermark store present but held no parseable timestamp.
    pub const INVALID_WATERMARK: u32 = 11666;
    /// Watermark store file absent.
    pub const MISSING_WATERMARK: u32 = 11667;
    /// Unrecoverable failure; the run aborted without committing.
    pub const FATAL_ERROR: u32 = 11668;
}

/// Severity attached to a recorded operational event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Information,
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Information => "information",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

use std::fmt;

use chrono::{Duration, NaiveDateTime};
use thiserror::Error;

/// Textual form of a stored watermark: one line, second precision.
pub const WATERMARK_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Lookback window substituted when no usable watermark exists.
pub const FALLBACK_LOOKBACK_DAYS: i64 = 60;

/// The timestamp boundary below which source files count as already processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Watermark(NaiveDateTime);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("not a watermark timestamp: {text:?}")]
pub struct ParseWatermarkError {
    text: String,
}

impl Watermark {
    pub fn new(instant: NaiveDateTime) -> Self {
        Self(instant)
    }

    /// Parses the single-line store representation.
    ///
    /// Surrounding whitespace (including the trailing newline a text editor
    /// leaves behind) is tolerated; anything else is invalid content.
    pub fn parse(text: &str) -> Result<Self, ParseWatermarkError> {
        let trimmed = text.trim();
        NaiveDateTime::parse_from_str(trimmed, WATERMARK_FORMAT)
            .map(Self)
            .map_err(|_| ParseWatermarkError {
                text: trimmed.to_string(),
            })
    }

    /// The safe default used when the store is absent or unreadable:
    /// a fixed lookback from the current run start.
    pub fn fallback(now: NaiveDateTime) -> Self {
        Self(now - Duration::days(FALLBACK_LOOKBACK_DAYS))
    }

    pub fn instant(&self) -> NaiveDateTime {
        self.0
    }
}

impl fmt::Display for Watermark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(WATERMARK_FORMAT))
    }
}

/// How the effective watermark for a run was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatermarkOrigin {
    /// Parsed from the store file.
    Stored,
    /// Store file absent; fallback substituted.
    DefaultedMissing,
    /// Store file present but unreadable or unparsable; fallback substituted.
    DefaultedInvalid,
}

/// Effective watermark plus the provenance that decides which warning
/// event (if any) the run records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedWatermark {
    pub value: Watermark,
    pub origin: WatermarkOrigin,
}

impl ResolvedWatermark {
    /// Resolves raw store contents: `None` means the store was absent.
    pub fn from_contents(contents: Option<&str>, now: NaiveDateTime) -> Self {
        match contents {
            None => Self {
                value: Watermark::fallback(now),
                origin: WatermarkOrigin::DefaultedMissing,
            },
            Some(text) => match Watermark::parse(text) {
                Ok(value) => Self {
                    value,
                    origin: WatermarkOrigin::Stored,
                },
                Err(_) => Self {
                    value: Watermark::fallback(now),
                    origin: WatermarkOrigin::DefaultedInvalid,
                },
            },
        }
    }
}

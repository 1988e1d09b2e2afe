//! Harvester core: pure domain types for the incremental trace-log harvest.
mod config;
mod events;
mod select;
mod summary;
mod watermark;

pub use config::HarvestConfig;
pub use events::{event_id, Severity};
pub use select::{newer_than, ScannedFile};
pub use summary::{RunOutcome, RunSummary};
pub use watermark::{
    ParseWatermarkError, ResolvedWatermark, Watermark, WatermarkOrigin, FALLBACK_LOOKBACK_DAYS,
    WATERMARK_FORMAT,
};

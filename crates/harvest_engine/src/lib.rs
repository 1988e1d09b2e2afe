//! Harvester engine: watermark bookkeeping, delta scan, and conversion dispatch.
mod convert;
mod events;
mod persist;
mod platform;
mod run;
mod scan;
mod store;
mod types;

pub use convert::{ConvertError, Converter, TraceRptConverter};
pub use events::{EventRecorder, JsonlEventRecorder};
pub use persist::{ensure_parent_dir, write_atomic, PersistError};
pub use platform::{parse_build_from_ver, BuildProbe, HostBuildProbe};
pub use run::{run, HarvestDeps};
pub use scan::scan_source_dir;
pub use store::WatermarkStore;
pub use types::HarvestError;

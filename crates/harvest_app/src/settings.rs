use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::Context;
use harvest_core::HarvestConfig;
use harvest_logging::{harvest_info, harvest_warn};
use serde::{Deserialize, Serialize};

/// Name of the operator settings file, looked up in the working directory.
pub const SETTINGS_FILENAME: &str = "harvester.ron";

/// Operator-editable settings for the harvester.
///
/// Any field missing from the file takes its default, so a settings file
/// only needs to name what it overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory holding the binary update-trace files.
    pub source_dir: PathBuf,
    /// File holding the last-successful-run watermark.
    pub watermark_path: PathBuf,
    /// Text log regenerated by each conversion.
    pub output_path: PathBuf,
    /// Source name for operational events.
    pub event_source: String,
    /// Minimum OS build the decoder supports; unset disables the gate.
    pub min_build: Option<u32>,
    /// Append-only file receiving the operational event records.
    pub events_path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from(r"C:\Windows\Logs\WindowsUpdate"),
            watermark_path: PathBuf::from(r"C:\ProgramData\UpdateTraceHarvester\watermark.txt"),
            output_path: PathBuf::from(r"C:\ProgramData\UpdateTraceHarvester\WindowsUpdate.log"),
            event_source: "UpdateTraceHarvester".to_string(),
            min_build: None,
            events_path: PathBuf::from(
                r"C:\ProgramData\UpdateTraceHarvester\harvest-events.jsonl",
            ),
        }
    }
}

impl Settings {
    /// The engine-facing configuration slice of these settings.
    pub fn harvest_config(&self) -> HarvestConfig {
        HarvestConfig {
            source_dir: self.source_dir.clone(),
            watermark_path: self.watermark_path.clone(),
            output_path: self.output_path.clone(),
            event_source: self.event_source.clone(),
            min_build: self.min_build,
        }
    }
}

/// Loads settings from `path`.
///
/// A missing file falls back to the documented defaults; a file that exists
/// but cannot be read or parsed is an error, because silently ignoring
/// explicit operator configuration would misdirect the run.
pub fn load(path: &Path) -> anyhow::Result<Settings> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            harvest_warn!("No settings file at {:?}; using defaults", path);
            return Ok(Settings::default());
        }
        Err(err) => {
            return Err(err).with_context(|| format!("failed to read settings file {path:?}"))
        }
    };

    let settings: Settings =
        ron::from_str(&content).with_context(|| format!("failed to parse settings file {path:?}"))?;
    harvest_info!("Loaded settings from {:?}", path);
    Ok(settings)
}

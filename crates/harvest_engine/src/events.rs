use std::collections::HashSet;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::Local;
use harvest_core::Severity;
use harvest_logging::{harvest_debug, harvest_error};
use serde_json::json;

/// Append-only operational event sink keyed by source name and event id.
///
/// Both operations are best-effort at the call site: registration races and
/// sink failures are logged, never raised, so event recording can never be
/// the thing that aborts a run.
pub trait EventRecorder {
    /// Idempotent registration of a source name.
    fn ensure_source(&self, name: &str);
    /// Records one event under a previously registered source.
    fn append(&self, name: &str, event_id: u32, severity: Severity, message: &str);
}

/// Records events as JSON lines in an append-only file.
pub struct JsonlEventRecorder {
    path: PathBuf,
    registered: Mutex<HashSet<String>>,
}

impl JsonlEventRecorder {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            registered: Mutex::new(HashSet::new()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn append_line(&self, record: &serde_json::Value) -> std::io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{record}")
    }
}

impl EventRecorder for JsonlEventRecorder {
    fn ensure_source(&self, name: &str) {
        let mut registered = match self.registered.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if !registered.insert(name.to_string()) {
            return;
        }
        // Touching the sink on first registration surfaces permission
        // problems early; the run continues either way.
        if let Err(err) = OpenOptions::new().create(true).append(true).open(&self.path) {
            harvest_debug!(
                "Could not register event source {:?} at {:?}: {}",
                name,
                self.path,
                err
            );
        }
    }

    fn append(&self, name: &str, event_id: u32, severity: Severity, message: &str) {
        let record = json!({
            "time": Local::now().to_rfc3339(),
            "source": name,
            "event_id": event_id,
            "severity": severity.as_str(),
            "message": message,
        });
        if let Err(err) = self.append_line(&record) {
            harvest_error!("Failed to record event {} to {:?}: {}", event_id, self.path, err);
        }
    }
}

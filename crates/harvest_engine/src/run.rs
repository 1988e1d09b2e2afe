use chrono::Local;
use harvest_core::{
    event_id, newer_than, HarvestConfig, RunOutcome, RunSummary, Severity, Watermark,
    WatermarkOrigin,
};
use harvest_logging::{harvest_debug, harvest_info};

use crate::convert::Converter;
use crate::events::EventRecorder;
use crate::platform::BuildProbe;
use crate::scan::scan_source_dir;
use crate::store::WatermarkStore;
use crate::types::HarvestError;

/// Injected collaborators for one harvest run.
pub struct HarvestDeps<'a> {
    pub converter: &'a dyn Converter,
    pub recorder: &'a dyn EventRecorder,
    pub build_probe: &'a dyn BuildProbe,
}

/// Executes one incremental harvest: resolve the watermark, select the
/// files modified since, convert them, commit the new boundary, and record
/// a summary event.
///
/// Any failure past the build gate is recorded once as a fatal event and
/// then propagated, leaving the stored watermark untouched so the next
/// invocation retries the same window.
pub fn run(config: &HarvestConfig, deps: &HarvestDeps<'_>) -> Result<RunOutcome, HarvestError> {
    deps.recorder.ensure_source(&config.event_source);

    if let Some(minimum) = config.min_build {
        match deps.build_probe.build_number() {
            Some(build) if build < minimum => {
                harvest_info!(
                    "Host build {} is below the supported minimum {}; skipping run",
                    build,
                    minimum
                );
                return Ok(RunOutcome::SkippedUnsupportedBuild { build, minimum });
            }
            Some(_) => {}
            // An undetermined build is not "below": the gate only keeps the
            // converter off builds known to be incompatible.
            None => harvest_debug!("Host build unknown; minimum-build gate not applied"),
        }
    }

    match execute(config, deps) {
        Ok(summary) => Ok(RunOutcome::Completed(summary)),
        Err(err) => {
            deps.recorder.append(
                &config.event_source,
                event_id::FATAL_ERROR,
                Severity::Error,
                &format!("Update trace harvest failed: {err}"),
            );
            Err(err)
        }
    }
}

fn execute(config: &HarvestConfig, deps: &HarvestDeps<'_>) -> Result<RunSummary, HarvestError> {
    let store = WatermarkStore::new(&config.watermark_path);

    // Captured before enumeration: a file modified while the converter runs
    // stays above the committed boundary and lands in the next window.
    let run_started = Local::now().naive_local();

    let resolved = store.load(run_started);
    match resolved.origin {
        WatermarkOrigin::Stored => {}
        WatermarkOrigin::DefaultedMissing => deps.recorder.append(
            &config.event_source,
            event_id::MISSING_WATERMARK,
            Severity::Warning,
            &format!(
                "Missing watermark file {:?}; defaulting to {}",
                config.watermark_path, resolved.value
            ),
        ),
        WatermarkOrigin::DefaultedInvalid => deps.recorder.append(
            &config.event_source,
            event_id::INVALID_WATERMARK,
            Severity::Warning,
            &format!(
                "Invalid watermark content in {:?}; defaulting to {}",
                config.watermark_path, resolved.value
            ),
        ),
    }

    let scanned = scan_source_dir(&config.source_dir).map_err(|source| HarvestError::Scan {
        dir: config.source_dir.clone(),
        source,
    })?;
    let candidates = newer_than(scanned, resolved.value);

    if candidates.is_empty() {
        harvest_debug!(
            "No files in {:?} newer than {}",
            config.source_dir,
            resolved.value
        );
    } else {
        let sources: Vec<_> = candidates.iter().map(|file| file.path.clone()).collect();
        harvest_info!(
            "Converting {} trace file(s) into {:?}",
            sources.len(),
            config.output_path
        );
        deps.converter.convert(&sources, &config.output_path)?;
    }

    store
        .commit(Watermark::new(run_started))
        .map_err(|source| HarvestError::Commit {
            path: config.watermark_path.clone(),
            source,
        })?;

    let summary = RunSummary {
        files_processed: candidates.len(),
        previous_watermark: resolved.value,
    };
    deps.recorder.append(
        &config.event_source,
        event_id::RUN_SUMMARY,
        Severity::Information,
        &summary.event_message(),
    );
    Ok(summary)
}

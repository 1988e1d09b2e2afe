mod logging;
mod settings;

use std::path::Path;

use anyhow::Result;
use harvest_core::RunOutcome;
use harvest_engine::{run, HarvestDeps, HostBuildProbe, JsonlEventRecorder, TraceRptConverter};
use harvest_logging::harvest_info;

fn main() -> Result<()> {
    logging::initialize(logging::LogDestination::Both);

    let settings = settings::load(Path::new(settings::SETTINGS_FILENAME))?;
    let config = settings.harvest_config();

    let converter = TraceRptConverter::default();
    let recorder = JsonlEventRecorder::new(&settings.events_path);
    let build_probe = HostBuildProbe;
    let deps = HarvestDeps {
        converter: &converter,
        recorder: &recorder,
        build_probe: &build_probe,
    };

    // A propagated error exits non-zero so the scheduler sees a failed run.
    match run(&config, &deps)? {
        RunOutcome::Completed(summary) => {
            harvest_info!("Run complete: {} file(s) converted", summary.files_processed);
        }
        RunOutcome::SkippedUnsupportedBuild { build, minimum } => {
            harvest_info!(
                "Run skipped: host build {} below supported minimum {}",
                build,
                minimum
            );
        }
    }
    Ok(())
}

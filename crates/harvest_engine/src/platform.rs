/// Reports the host OS build number, if it can be determined.
///
/// Injected into the run so the minimum-build gate is mockable.
pub trait BuildProbe {
    fn build_number(&self) -> Option<u32>;
}

/// Probes the running host.
///
/// On Windows the build is parsed out of `cmd /C ver`; elsewhere the build
/// is unknown and the gate never trips.
#[derive(Debug, Default, Clone, Copy)]
pub struct HostBuildProbe;

impl BuildProbe for HostBuildProbe {
    #[cfg(windows)]
    fn build_number(&self) -> Option<u32> {
        let output = std::process::Command::new("cmd")
            .args(["/C", "ver"])
            .output()
            .ok()?;
        parse_build_from_ver(&String::from_utf8_lossy(&output.stdout))
    }

    #[cfg(not(windows))]
    fn build_number(&self) -> Option<u32> {
        None
    }
}

/// Pulls the build component out of `ver` output such as
/// `Microsoft Windows [Version 10.0.19045.3803]`.
pub fn parse_build_from_ver(text: &str) -> Option<u32> {
    let start = text.find('[')? + 1;
    let end = text[start..].find(']')? + start;
    let version = text[start..end].rsplit(' ').next()?;
    version.split('.').nth(2)?.parse().ok()
}

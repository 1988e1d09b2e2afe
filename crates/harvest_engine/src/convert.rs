use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("failed to launch {program:?}: {source}")]
    Launch {
        program: PathBuf,
        source: std::io::Error,
    },
    #[error("{program:?} exited with {status}: {stderr}")]
    Failed {
        program: PathBuf,
        status: ExitStatus,
        stderr: String,
    },
}

/// External facility turning binary update-trace files into a text log.
pub trait Converter {
    /// Regenerates `output` in full from `sources`. Never appends.
    fn convert(&self, sources: &[PathBuf], output: &Path) -> Result<(), ConvertError>;
}

/// Drives the platform trace decoder as a subprocess, `tracerpt` style:
/// all source files in one invocation, plain-text report, silent overwrite.
#[derive(Debug, Clone)]
pub struct TraceRptConverter {
    program: PathBuf,
}

impl TraceRptConverter {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    fn command(&self, sources: &[PathBuf], output: &Path) -> Command {
        let mut command = Command::new(&self.program);
        command.args(sources);
        // -of TEXT selects the plain-text report; -y overwrites without prompting.
        command
            .arg("-o")
            .arg(output)
            .arg("-of")
            .arg("TEXT")
            .arg("-y");
        command
    }
}

impl Default for TraceRptConverter {
    fn default() -> Self {
        Self::new("tracerpt.exe")
    }
}

impl Converter for TraceRptConverter {
    fn convert(&self, sources: &[PathBuf], output: &Path) -> Result<(), ConvertError> {
        let result = self
            .command(sources, output)
            .output()
            .map_err(|source| ConvertError::Launch {
                program: self.program.clone(),
                source,
            })?;

        if !result.status.success() {
            return Err(ConvertError::Failed {
                program: self.program.clone(),
                status: result.status,
                stderr: String::from_utf8_lossy(&result.stderr).trim().to_string(),
            });
        }
        Ok(())
    }
}

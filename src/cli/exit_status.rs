use std::process::ExitCode;

/// Exit status of the `avail` binary.
///
/// - `Success` (0): Run completed; per-file errors are reported but tolerated
/// - `Failure` (1): `--strict` was given and at least one file failed
/// - `Error` (2): The run could not start (invalid config file, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Run completed.
    Success,
    /// Run completed in strict mode with failed files.
    Failure,
    /// Run could not start.
    Error,
}

impl ExitStatus {
    /// Exit status for a finished run.
    pub fn from_run(files_failed: usize, strict: bool) -> Self {
        if strict && files_failed > 0 {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}

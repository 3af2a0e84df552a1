//! Command-line interface: argument parsing, run orchestration and output.

mod args;
mod exit_status;
mod report;
mod run;

use anyhow::Result;

pub use args::Arguments;
pub use exit_status::ExitStatus;
pub use run::{RunOptions, run, run_with_options};

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let strict = args.strict;
    let summary = run(args)?;

    Ok(ExitStatus::from_run(summary.files_failed, strict))
}

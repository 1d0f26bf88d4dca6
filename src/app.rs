// src/app.rs
use std::io::Write;

use anyhow::{Context, Result};
use neko_infra::{FsSourceOpener, StderrDiagnostics, output};
use neko_shared_kernel::NekoError;
use neko_usecase::{Concatenate, RunReport};

use crate::{PROGRAM, config::RunConfig};

/// All sources were read.
pub const EXIT_SUCCESS: u8 = 0;
/// A source failed, or output could not be written.
pub const EXIT_FAILURE: u8 = 1;
/// The command line or configuration was invalid.
pub const EXIT_USAGE: u8 = 2;

/// Run every source in `config` to standard output.
pub fn run(config: &RunConfig) -> Result<RunReport> {
    let opener = FsSourceOpener::new(config.max_line_bytes);
    let diagnostics = StderrDiagnostics::new(PROGRAM);
    let mut sink = output::stdout_sink();

    log::info!(
        "{} source(s), max line length {} bytes",
        config.sources.len().max(1),
        config.max_line_bytes
    );

    let report = Concatenate::new(&opener, &diagnostics)
        .run(&config.sources, &config.options, &mut sink)
        .context("writing output")?;
    sink.flush().map_err(NekoError::from).context("flushing output")?;

    if !report.is_success() {
        log::info!("{} of {} source(s) failed", report.failed, report.sources);
    }
    Ok(report)
}

/// Map a run outcome onto the process exit status.
pub fn exit_status(outcome: &Result<RunReport>) -> u8 {
    match outcome {
        Ok(report) if report.is_success() => EXIT_SUCCESS,
        Ok(_) | Err(_) => EXIT_FAILURE,
    }
}

/// True when the run stopped because stdout was closed by the reader.
pub fn is_broken_pipe(err: &anyhow::Error) -> bool {
    err.chain()
        .filter_map(|cause| cause.downcast_ref::<NekoError>())
        .any(NekoError::is_broken_pipe)
}

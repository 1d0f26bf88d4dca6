use std::io::Write;

use neko_domain::DisplayOptions;
use neko_ports::{DiagnosticSink, SourceOpener};
use neko_shared_kernel::{ErrorContext, InputSource, Result, SourceError};

use crate::{dto::RunReport, stream::StreamDriver};

/// Concatenate sources to one sink, in order.
pub struct Concatenate<'a> {
    opener: &'a dyn SourceOpener,
    diagnostics: &'a dyn DiagnosticSink,
}

impl<'a> Concatenate<'a> {
    pub fn new(opener: &'a dyn SourceOpener, diagnostics: &'a dyn DiagnosticSink) -> Self {
        Self { opener, diagnostics }
    }

    /// Process every source; no sources means standard input once.
    ///
    /// Sources that fail to open or read are reported and counted in the
    /// returned [`RunReport`]. Only output failures end the run early.
    pub fn run(&self, sources: &[InputSource], options: &DisplayOptions, sink: &mut dyn Write) -> Result<RunReport> {
        let stdin_only = [InputSource::Stdin];
        let sources = if sources.is_empty() { &stdin_only[..] } else { sources };

        let mut driver = StreamDriver::new(*options);
        let mut report = RunReport::default();

        for source in sources {
            report.sources += 1;
            let name = source.display_name();

            let mut reader = match self.opener.open(source) {
                Ok(reader) => reader,
                Err(err) => {
                    self.fail(&mut report, &SourceError::open(name, err));
                    continue;
                }
            };
            log::debug!("opened {name}");

            let summary = driver.drain(&mut reader, &name, sink)?;
            report.lines += summary.lines;
            log::debug!("{name}: {} lines ({} blank)", summary.lines, summary.blank_lines);
            sink.flush().with_context(|| format!("flushing output after {name}"))?;
            if let Some(failure) = &summary.failure {
                self.fail(&mut report, failure);
            }
        }

        log::debug!(
            "run finished: {} sources, {} failed, {} lines",
            report.sources,
            report.failed,
            report.lines
        );
        Ok(report)
    }

    fn fail(&self, report: &mut RunReport, error: &SourceError) {
        report.failed += 1;
        log::warn!("{error}");
        self.diagnostics.report(error);
    }
}

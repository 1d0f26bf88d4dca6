// crates/infra/src/diagnostics.rs
use std::io::{self, Write};

use neko_ports::DiagnosticSink;
use neko_shared_kernel::SourceError;

/// Writes `<program>: <name>: <message>` lines to standard error.
#[derive(Debug, Clone, Copy)]
pub struct StderrDiagnostics {
    program: &'static str,
}

impl StderrDiagnostics {
    pub fn new(program: &'static str) -> Self {
        Self { program }
    }
}

impl DiagnosticSink for StderrDiagnostics {
    fn report(&self, error: &SourceError) {
        let mut stderr = io::stderr().lock();
        // Nowhere left to report a failing stderr.
        let _ = write_diagnostic(&mut stderr, self.program, error);
    }
}

/// Format one diagnostic line into `out`.
pub fn write_diagnostic(out: &mut dyn Write, program: &str, error: &SourceError) -> io::Result<()> {
    writeln!(out, "{program}: {error}")?;
    out.flush()
}

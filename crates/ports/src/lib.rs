//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`source`]: opening input sources and reading them line by line
//! - [`diagnostics`]: reporting per-source failures to the user
//!
//! These ports allow the use case layer to stay independent of the
//! filesystem, stdin and stderr.

// crates/ports/src/lib.rs
pub mod diagnostics;
pub mod source;

pub use diagnostics::DiagnosticSink;
pub use source::{LineReader, SourceOpener};

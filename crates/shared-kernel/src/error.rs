// crates/shared-kernel/src/error.rs
use std::io;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum NekoError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<NekoError>,
    },

    /// Per-source failure. Reported, then the run moves on to the next source.
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),

    #[error("Presentation error: {0}")]
    Presentation(#[from] PresentationError),
}

impl NekoError {
    /// True when the output sink went away (e.g. the reading end of a pipe closed).
    pub fn is_broken_pipe(&self) -> bool {
        match self {
            Self::Infrastructure(InfrastructureError::Output { source }) => {
                source.kind() == io::ErrorKind::BrokenPipe
            }
            Self::Context { source, .. } => source.is_broken_pipe(),
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, NekoError>;

/// Failure to open or read one input source.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("{}: {}", .name, describe_io_error(.source))]
    Open {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error("{}: {}", .name, describe_io_error(.source))]
    Read {
        name: String,
        #[source]
        source: io::Error,
    },
}

impl SourceError {
    pub fn open(name: impl Into<String>, source: io::Error) -> Self {
        Self::Open { name: name.into(), source }
    }

    pub fn read(name: impl Into<String>, source: io::Error) -> Self {
        Self::Read { name: name.into(), source }
    }

    /// Display name of the source that failed.
    pub fn name(&self) -> &str {
        match self {
            Self::Open { name, .. } | Self::Read { name, .. } => name,
        }
    }
}

/// Domain-layer specific errors.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },
}

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("write error: {}", describe_io_error(.source))]
    Output {
        #[source]
        source: io::Error,
    },

    #[error("Logger initialization failed: {details}")]
    Logger { details: String },
}

pub type InfraResult<T> = std::result::Result<T, InfrastructureError>;

/// Presentation-layer errors.
#[derive(Debug, Error)]
pub enum PresentationError {
    #[error("Invalid CLI value: {flag} = {value} - {reason}")]
    InvalidValue {
        flag: String,
        value: String,
        reason: String,
    },
}

impl From<io::Error> for InfrastructureError {
    fn from(err: io::Error) -> Self {
        Self::Output { source: err }
    }
}

impl From<io::Error> for NekoError {
    fn from(err: io::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

/// OS error text without the trailing `(os error N)` that `io::Error` appends,
/// so messages read like `No such file or directory`.
pub fn describe_io_error(err: &io::Error) -> String {
    let text = err.to_string();
    match text.rfind(" (os error ") {
        Some(idx) if text.ends_with(')') => text[..idx].to_string(),
        _ => text,
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<NekoError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| NekoError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| NekoError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}

// crates/shared-kernel/src/lib.rs
//! Error hierarchy and value objects shared by every layer of `neko`.

pub use error::{
    DomainError, ErrorContext, InfraResult, InfrastructureError, NekoError, PresentationError, Result, SourceError,
    describe_io_error,
};

pub mod error;
pub mod value_objects;

pub use value_objects::{InputSource, LineNumber, STDIN_OPERAND};

// crates/shared-kernel/src/value_objects/mod.rs
pub mod counts;
pub mod source;

pub use counts::LineNumber;
pub use source::{InputSource, STDIN_OPERAND};

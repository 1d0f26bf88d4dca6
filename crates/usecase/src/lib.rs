//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`stream`]: drives one source through the line transformer into the sink
//! - [`orchestrator`]: opens every requested source in turn and isolates failures
//! - [`dto`]: per-source and per-run summaries
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

pub mod dto;
pub mod orchestrator;
pub mod stream;

pub use dto::{RunReport, StreamSummary};
pub use orchestrator::Concatenate;
pub use stream::StreamDriver;

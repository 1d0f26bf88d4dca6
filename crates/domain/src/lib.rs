//! # Domain
//!
//! The line transformation pipeline and the state it runs on.
//!
//! - [`options`]: display flags resolved once from the command line
//! - [`session`]: per-source line and blank-line counters
//! - [`transform`]: numbering, tab, end-marker and non-printing stages
//!
//! Everything here is pure: no I/O, no failure modes.

pub mod options;
pub mod session;
pub mod transform;

pub use options::{DisplayOptions, NumberingMode};
pub use session::{LinePosition, StreamSession};
pub use transform::{LineTransformer, convert_non_printing, numbered_line, pad_left, transform_line};

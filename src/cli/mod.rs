// src/cli/mod.rs
//! Command-line surface: clap arguments and custom value parsers.

pub mod args;
pub mod parsers;

pub use args::Args;
pub use parsers::SizeArg;

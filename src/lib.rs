// src/lib.rs
//! `neko`: a `cat` clone that numbers lines and makes tabs, line ends and
//! non-printing bytes visible.

pub mod app;
pub mod cli;
pub mod config;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prefix of every diagnostic written to stderr.
pub const PROGRAM: &str = "neko";

// src/cli/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser};

use super::parsers::SizeArg;

const EXAMPLES: &str = "\
Examples:
  neko f - g  Output f's contents, then standard input, then g's contents.
  neko        Copy standard input to standard output.";

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "neko",
    version = crate::VERSION,
    about = "Concatenate FILE(s) to standard output.",
    long_about = "Concatenate FILE(s) to standard output.\n\nWith no FILE, or when FILE is -, read standard input.",
    override_usage = "neko [OPTION]... [FILE]...",
    after_help = EXAMPLES
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// number nonempty output lines, overrides -n
    #[arg(short = 'b', long)]
    pub number_nonblank: bool,

    /// number all output lines
    #[arg(short = 'n', long)]
    pub number: bool,

    /// display $ at end of each line
    #[arg(short = 'E', long, short_alias = 'e')]
    pub show_ends: bool,

    /// display TAB characters as ^I
    #[arg(short = 't', long)]
    pub show_tabs: bool,

    /// use ^ and M- notation, except for LFD and TAB
    #[arg(short = 'v', long)]
    pub show_nonprinting: bool,

    /// longest accepted input line, e.g. 64K or 4M
    #[arg(long, value_name = "SIZE", default_value = "1M")]
    pub max_line_length: SizeArg,

    /// log progress to stderr (repeat for more detail)
    #[arg(long, action = ArgAction::Count)]
    pub verbose: u8,

    /// files to concatenate; - reads standard input
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

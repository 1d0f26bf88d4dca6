// src/config.rs
use log::LevelFilter;
use neko_domain::DisplayOptions;
use neko_infra::logging;
use neko_shared_kernel::{DomainError, InputSource, NekoError, PresentationError, Result};

use crate::cli::Args;

/// Everything a run needs, resolved once from the command line.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub options: DisplayOptions,
    /// In command-line order; empty means standard input.
    pub sources: Vec<InputSource>,
    pub max_line_bytes: usize,
    /// Set by `--verbose`; `None` leaves the level to `NEKO_LOG`.
    pub log_level: Option<LevelFilter>,
}

impl RunConfig {
    pub fn from_args(args: Args) -> Result<Self> {
        let options = DisplayOptions {
            number_nonblank: args.number_nonblank,
            number_all: args.number,
            show_ends: args.show_ends,
            show_nonprinting: args.show_nonprinting,
            show_tabs: args.show_tabs,
        };

        let requested = args.max_line_length.0;
        if requested == 0 {
            return Err(DomainError::InvalidConfiguration {
                reason: "maximum line length must be at least 1 byte".to_string(),
            }
            .into());
        }
        let max_line_bytes = usize::try_from(requested).map_err(|err| {
            NekoError::from(PresentationError::InvalidValue {
                flag: "--max-line-length".to_string(),
                value: requested.to_string(),
                reason: err.to_string(),
            })
        })?;

        Ok(Self {
            options,
            sources: args.files.into_iter().map(InputSource::from).collect(),
            max_line_bytes,
            log_level: logging::verbosity_level(args.verbose),
        })
    }
}

impl TryFrom<Args> for RunConfig {
    type Error = NekoError;

    fn try_from(args: Args) -> Result<Self> {
        Self::from_args(args)
    }
}

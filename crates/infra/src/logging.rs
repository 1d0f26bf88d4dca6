// crates/infra/src/logging.rs
//! `env_logger` setup for the `log` facade.
//!
//! Off by default so stderr only carries user-facing diagnostics. Enabled by
//! `--verbose` (repeatable) or the `NEKO_LOG` environment variable, which
//! accepts the usual `env_logger` filter syntax (`debug`, `neko_usecase=trace`).

use env_logger::{Builder, Env, Target};
use log::LevelFilter;
use neko_shared_kernel::{InfraResult, InfrastructureError};

/// Environment variable holding the log filter.
pub const LOG_ENV_VAR: &str = "NEKO_LOG";

/// Level forced by a `--verbose` count, if any.
pub fn verbosity_level(verbose: u8) -> Option<LevelFilter> {
    match verbose {
        0 => None,
        1 => Some(LevelFilter::Info),
        2 => Some(LevelFilter::Debug),
        _ => Some(LevelFilter::Trace),
    }
}

/// Logger configured from `env`, with `verbose` taking precedence over it.
fn builder(env: Env<'_>, verbose: Option<LevelFilter>) -> Builder {
    let mut builder = Builder::new();
    builder.filter_level(LevelFilter::Off).parse_env(env);
    if let Some(level) = verbose {
        builder.filter_level(level);
    }
    builder.target(Target::Stderr).format_timestamp(None);
    builder
}

/// Install the logger. Can only succeed once per process.
pub fn init(verbose: Option<LevelFilter>) -> InfraResult<()> {
    builder(Env::new().filter(LOG_ENV_VAR), verbose)
        .try_init()
        .map_err(|err| InfrastructureError::Logger { details: err.to_string() })
}

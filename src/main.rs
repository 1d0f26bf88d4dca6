// src/main.rs
use std::process::ExitCode;

use clap::Parser;
use neko::{
    PROGRAM,
    app::{self, EXIT_FAILURE, EXIT_USAGE},
    cli::Args,
    config::RunConfig,
};
use neko_infra::logging;

fn main() -> ExitCode {
    let args = Args::parse();

    let config = match RunConfig::try_from(args) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{PROGRAM}: {err}");
            return ExitCode::from(EXIT_USAGE);
        }
    };

    if let Err(err) = logging::init(config.log_level) {
        eprintln!("{PROGRAM}: {err}");
    }

    let outcome = app::run(&config);
    match &outcome {
        Err(err) if app::is_broken_pipe(err) => return ExitCode::from(EXIT_FAILURE),
        Err(err) => eprintln!("{PROGRAM}: {err:#}"),
        Ok(_) => {}
    }
    ExitCode::from(app::exit_status(&outcome))
}

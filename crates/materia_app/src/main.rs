use std::process::ExitCode;

use clap::Parser;
use materia_app::Cli;
use materia_logging::{LevelFilter, LogDestination};

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let destination = if cli.log_file {
        LogDestination::Both(materia_logging::DEFAULT_LOG_FILE.into())
    } else {
        LogDestination::Terminal
    };
    materia_logging::initialize(destination, LevelFilter::Warn);

    materia_app::run(&cli)
}

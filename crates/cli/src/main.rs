use clap::{CommandFactory, Parser};
use std::io::IsTerminal;
use std::process::ExitCode;
use text_stats_cli::args::Args;
use text_stats_cli::config::{self, Config};
use text_stats_cli::logging;

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(config::log_level(&args));

    // Nothing to read: no paths and an interactive stdin.
    if args.paths.is_empty() && std::io::stdin().is_terminal() {
        eprintln!("{}", Args::command().render_usage());
        return ExitCode::FAILURE;
    }

    // Convert args to engine::Config
    let config = Config::from(args);

    match text_stats_cli::run(&config) {
        Ok(false) => ExitCode::SUCCESS,
        Ok(true) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Application Error: {e}");
            ExitCode::FAILURE
        }
    }
}

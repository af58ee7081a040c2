use std::process::ExitCode;

use clap::Parser;
use console::Term;
use tinct::platform::{default_enabler, enable_ansi_console};
use tracing_subscriber::EnvFilter;

mod cli;

use cli::Cli;

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    enable_ansi_console(default_enabler().as_ref());

    let mut stdout = Term::stdout();
    match cli::run(&cli, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::from(cli::exit_status(&err))
        }
    }
}

mod cli;

use std::io;
use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;
use log::{debug, error};

use cli::CliArgs;

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // RUST_LOG still overrides the -v level
    if let Err(e) = env_logger::Builder::from_env(Env::default().default_filter_or(level)).try_init() {
        eprintln!("Failed to initialize env_logger: {}", e);
    }
}

fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_logging(args.verbose);
    debug!("Parsed args: {:?}", args);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli::run(args.command, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Command failed: {:?}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

use std::io::{self, BufWriter};
use std::process::ExitCode;

use clap::Parser;
use zone_pair_scope::{Cli, commands};

fn main() -> ExitCode {
    // A. Init Logging
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);

    // C. Run the subcommand
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match commands::run(&args, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("⚠️  {:#}", e);
            ExitCode::FAILURE
        }
    }
}

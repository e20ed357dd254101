use std::process::ExitCode;

use clap::Parser;
use stegwav_core::SteganoError;

mod cli;
mod commands;

use cli::{CliArgs, Commands};

pub type CliResult<T> = Result<T, SteganoError>;

/// what the user gets to see when nothing could be unveiled
const UNVEIL_FAILED: &str = "No hidden message found, or the passcode is wrong";

fn main() -> ExitCode {
    env_logger::init();

    let args = CliArgs::parse();
    let result = match args.command {
        Commands::Hide(args) => args.run(),
        Commands::Unveil(args) => args.run(),
        Commands::UnveilRaw(args) => args.run(),
        Commands::Capacity(args) => args.run(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.is_unveil_failure() => {
            log::debug!("unveil failed: {e:?}");
            eprintln!("{UNVEIL_FAILED}");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

//! Thin binary entry point — parses CLI args and delegates to `toolkits_web::run()`.

use std::process::ExitCode;

use clap::Parser;

fn main() -> ExitCode {
    let cli = toolkits_web::cli::Cli::parse();

    match toolkits_web::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

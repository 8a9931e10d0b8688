//! tickle - a local-first to-do list

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = tickle::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

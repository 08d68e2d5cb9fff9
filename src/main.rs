//! tally - Task, habit, and workout statistics from plaintext notes

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = tally_cli::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

//! Binary entrypoint for the `tally` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    match tally::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

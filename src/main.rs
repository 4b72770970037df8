//! Binary entrypoint for the `tasklens` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    // Pick up TASKLENS_CHAT_URL and friends from a local .env if present.
    dotenvy::dotenv().ok();

    match tasklens::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

//! pawject - Project agent workspace CLI

use std::process::ExitCode;

use pawject::ApiError;

fn main() -> ExitCode {
    match pawject::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // API failures are reported exactly as the server/transport gave them
            match e.downcast_ref::<ApiError>() {
                Some(api) => eprintln!("{}", api),
                None => eprintln!("Error: {:#}", e),
            }
            ExitCode::FAILURE
        }
    }
}

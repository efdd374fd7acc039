use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    match apipilot_cli::cli_main(std::env::args().collect()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", apipilot_cli::error_message(&err));
            ExitCode::FAILURE
        }
    }
}

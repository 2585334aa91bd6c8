use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(err) = netplots::logging::init_logging() {
        eprintln!("error: {err}");
        return ExitCode::FAILURE;
    }
    if let Err(err) = netplots::run() {
        tracing::error!(error = %format!("{err:#}"), "run failed");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

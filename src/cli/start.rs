use super::{commands, dispatch};
use crate::logger::Logger;
use std::{ffi::OsString, process::ExitCode};
use tracing_subscriber::fmt::MakeWriter;

/// Exit status for any bootstrap failure
pub const EXIT_FAILURE: u8 = 1;

/// Entry point for the binary, reads the process arguments
pub async fn start() -> ExitCode {
    ExitCode::from(run(std::env::args_os()).await)
}

/// Run with explicit arguments, logging to stderr
pub async fn run<I, T>(args: I) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    execute(args, Logger::new).await
}

/// Run with explicit arguments, logging to `sink`
pub async fn run_with<I, T, W>(args: I, sink: W) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    execute(args, |verbose| Logger::with_writer(verbose, sink)).await
}

/// Main orchestrator - Pure orchestration with no business logic
///
/// Five-step data flow:
/// 1. Parse: Extract CLI arguments
/// 2. Extract Verbosity: Read the debug flag
/// 3. Initialize Logging: Build the logger facade
/// 4. Dispatch: Convert `ArgMatches` into typed Action enum
/// 5. Execute: Run the action's business logic
///
/// Returns the process exit status.
async fn execute<I, T, F>(args: I, new_logger: F) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    F: FnOnce(bool) -> Logger,
{
    // 1. Parse: Extract CLI arguments
    let matches = match commands::new().try_get_matches_from(args) {
        Ok(matches) => matches,
        Err(err) => {
            // help and version land here too, with exit code 0
            let _ = err.print();
            return u8::try_from(err.exit_code()).unwrap_or(EXIT_FAILURE);
        }
    };

    // 2. Extract Verbosity
    let verbose = dispatch::verbose(&matches);

    // 3. Initialize Logging
    let logger = new_logger(verbose);

    // 4. Dispatch + 5. Execute
    let result = match dispatch::dispatch(&matches) {
        Ok(action) => action.execute(&logger).await,
        Err(err) => Err(err),
    };

    match result {
        Ok(()) => 0,
        Err(err) => {
            logger.error(format_args!("{err:#}"));
            EXIT_FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

    use super::*;
    use crate::logger::capture::Capture;

    #[tokio::test]
    async fn test_run_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let sink = Capture::default();

        let code = run_with(
            vec!["dbrevise", "-c", path.to_str().unwrap(), "start"],
            sink.clone(),
        )
        .await;

        assert_eq!(code, EXIT_FAILURE);
        let output = sink.contents();
        assert!(output.contains("ERROR"));
        assert!(output.contains(&path.display().to_string()));
    }

    #[tokio::test]
    async fn test_run_help_exits_zero() {
        let code = run_with(vec!["dbrevise", "--help"], Capture::default()).await;
        assert_eq!(code, 0);
    }

    #[tokio::test]
    async fn test_run_usage_error() {
        let code = run_with(vec!["dbrevise", "stop"], Capture::default()).await;
        assert_eq!(code, 2);
    }
}

mod cli;
mod command;
mod commands;
mod outcome;

use clap::Parser;
pub(crate) use cli::Cli;
pub(crate) use command::QueryCommand;
pub(crate) use command::QueryOpts;
pub(crate) use outcome::Outcome;

const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;

#[tokio::main]
async fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    setup_logger(cli.verbose);
    cli.run().await.emit()
}

/// Pick the logging level from `--verbose`, then the `LOG_LEVEL` value.
///
/// An unrecognized `LOG_LEVEL` falls back to the default and yields a warning
/// to report once logging is up.
pub(crate) fn log_level(
    verbose: bool,
    env_val: Option<&str>,
) -> (tracing::Level, Option<String>) {
    if verbose {
        return (tracing::Level::DEBUG, None);
    }
    match env_val.map(str::trim) {
        None => (DEFAULT_LOG_LEVEL, None),
        Some(val) => match val.to_ascii_lowercase().as_str() {
            "trace" => (tracing::Level::TRACE, None),
            "debug" | "verbose" => (tracing::Level::DEBUG, None),
            "info" => (tracing::Level::INFO, None),
            "warn" => (tracing::Level::WARN, None),
            _ => (
                DEFAULT_LOG_LEVEL,
                Some(format!("Invalid `LOG_LEVEL` environment variable value: `{val}`")),
            ),
        },
    }
}

fn setup_logger(verbose: bool) {
    let env_val = std::env::var("LOG_LEVEL").ok();
    let (level, warning) = log_level(verbose, env_val.as_deref());

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("Logging level set to `{level}`.");

    if let Some(warning) = warning {
        log::warn!("{warning}");
    }
}

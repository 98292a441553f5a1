//! Tracing setup.

use tracing_subscriber::EnvFilter;

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG` always wins when set
/// - `--verbose`: `info,bistro_cli=debug,bistro_core=debug`
/// - Default: `warn`, so the session transcript stays clean
///
/// Logs go to stderr; stdout carries only the session itself.
pub fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "info,bistro_cli=debug,bistro_core=debug"
    } else {
        "warn"
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

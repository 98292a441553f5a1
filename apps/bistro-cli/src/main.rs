//! # Bistro POS Entry Point
//!
//! ```bash
//! # House menu, text report
//! cargo run -p bistro-cli
//!
//! # Extra items, JSON report, debug logs on stderr
//! cargo run -p bistro-cli -- --add-item "Tea:1.50:BEVERAGE" --report-format json -v
//! ```

use std::process::ExitCode;

use bistro_cli::cli::Cli;
use bistro_cli::logging::init_tracing;
use clap::Parser;
use tracing::error;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match bistro_cli::run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "bistro stopped");
            eprintln!("Error: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

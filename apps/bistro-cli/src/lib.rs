//! # Bistro CLI Library
//!
//! The interactive terminal for Bistro POS. All business rules live in
//! `bistro-core`; this crate reads input, prints output and holds state.
//!
//! ## Module Organization
//! ```text
//! bistro_cli/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── cli.rs          ◄─── clap flags
//! ├── logging.rs      ◄─── tracing subscriber
//! ├── session.rs      ◄─── main loop
//! ├── state/
//! │   ├── config.rs   ◄─── AppConfig (env + defaults)
//! │   └── ledger.rs   ◄─── LedgerState (Arc<Mutex<SalesLedger>>)
//! ├── commands/
//! │   ├── mod.rs      ◄─── dispatch table, prompt helpers
//! │   ├── menu.rs     ◄─── catalog setup, View Menu
//! │   ├── order.rs    ◄─── Place Order, View Orders
//! │   └── report.rs   ◄─── Generate Sales Report
//! └── error.rs        ◄─── CliError
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
pub mod session;
pub mod state;

use std::io;
use std::sync::Arc;

use tracing::info;

use cli::Cli;
use commands::menu::build_catalog;
use error::CliResult;
use session::Session;
use state::{AppConfig, LedgerState};

/// Runs one session on the process's stdin and stdout.
///
/// ## Startup Sequence
/// ```text
/// 1. AppConfig::from_env()     BISTRO_* over defaults
/// 2. Cli::apply()              flags over env
/// 3. build_catalog()           house menu + --add-item extras
/// 4. LedgerState::new()        empty ledger, first order will be #1
/// 5. Session::run()            until "5" or end of input
/// ```
pub fn run(cli: &Cli) -> CliResult<()> {
    let mut config = AppConfig::from_env()?;
    cli.apply(&mut config);

    let catalog = Arc::new(build_catalog(&config, &cli.add_items)?);
    info!(items = catalog.len(), "menu loaded");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(
        stdin.lock(),
        stdout.lock(),
        catalog,
        LedgerState::new(),
        config,
    );
    session.run()
}

//! # Session
//!
//! The interactive main loop: print the menu, read a choice, dispatch.
//!
//! ## Session Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │   ┌──────────────┐     ┌──────────────┐     ┌───────────────────────┐  │
//! │   │  main menu   │────►│  read choice │────►│ MenuCommand::parse    │  │
//! │   └──────▲───────┘     └──────┬───────┘     └───────────┬───────────┘  │
//! │          │                    │ EOF                     │              │
//! │          │                    ▼                         ▼              │
//! │          │               goodbye, stop          dispatch(command)      │
//! │          │                                              │              │
//! │          └─────────────── Continue ◄────────────────────┤              │
//! │                                              Exit ──────► stop         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{BufRead, Write};
use std::sync::Arc;

use bistro_core::MenuCatalog;
use chrono::NaiveDate;
use tracing::{debug, info};

use crate::commands::{self, menu, order, report, MenuCommand};
use crate::error::CliResult;
use crate::state::{AppConfig, LedgerState};

/// Whether the loop keeps going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// One operator session over a reader and a writer.
pub struct Session<R, W> {
    input: R,
    output: W,
    catalog: Arc<MenuCatalog>,
    ledger: LedgerState,
    config: AppConfig,
    today: fn() -> NaiveDate,
}

/// Today's date on the local clock.
pub fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(
        input: R,
        output: W,
        catalog: Arc<MenuCatalog>,
        ledger: LedgerState,
        config: AppConfig,
    ) -> Self {
        Session {
            input,
            output,
            catalog,
            ledger,
            config,
            today: local_today,
        }
    }

    /// Replaces the clock used to date sales reports.
    pub fn with_clock(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// The ledger this session records into.
    pub fn ledger(&self) -> &LedgerState {
        &self.ledger
    }

    /// Runs until the operator exits or input ends.
    pub fn run(&mut self) -> CliResult<()> {
        info!(store = %self.config.store_name, "session started");

        loop {
            commands::print_main_menu(&mut self.output, &self.config.store_name)?;

            let Some(choice) = commands::read_line(&mut self.input)? else {
                debug!("input closed");
                writeln!(self.output)?;
                self.dispatch(MenuCommand::Exit)?;
                break;
            };

            match MenuCommand::parse(&choice) {
                Some(command) => {
                    if self.dispatch(command)? == Flow::Exit {
                        break;
                    }
                }
                None => {
                    debug!(choice = %choice, "invalid menu choice");
                    writeln!(self.output, "Invalid choice. Please try again.")?;
                }
            }
        }

        let orders = self.ledger.with_ledger(|l| l.len());
        info!(orders, "session ended");
        Ok(())
    }

    /// Runs one command against the session state.
    pub fn dispatch(&mut self, command: MenuCommand) -> CliResult<Flow> {
        debug!(?command, "dispatching");

        match command {
            MenuCommand::ViewMenu => menu::view_menu(&mut self.output, &self.catalog)?,
            MenuCommand::PlaceOrder => {
                order::place_order(
                    &mut self.input,
                    &mut self.output,
                    &self.catalog,
                    &self.ledger,
                )?;
            }
            MenuCommand::ViewOrders => order::view_orders(&mut self.output, &self.ledger)?,
            MenuCommand::SalesReport => {
                report::generate_report(
                    &mut self.output,
                    &self.ledger,
                    self.config.report_format,
                    (self.today)(),
                )?;
            }
            MenuCommand::Exit => {
                writeln!(self.output, "Exiting the system. Goodbye!")?;
                return Ok(Flow::Exit);
            }
        }

        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    use crate::state::ReportFormat;

    fn fixed_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn run_script(script: &str, config: AppConfig) -> (String, LedgerState) {
        let ledger = LedgerState::new();
        let mut out = Vec::new();
        {
            let mut session = Session::new(
                Cursor::new(script.to_string()),
                &mut out,
                Arc::new(MenuCatalog::with_house_menu()),
                ledger.clone(),
                config,
            )
            .with_clock(fixed_date);
            session.run().unwrap();
        }
        (String::from_utf8(out).unwrap(), ledger)
    }

    #[test]
    fn test_dinner_service_transcript() {
        let script = "2\nSoup\nSteak\ndone\n2\nsoup\nSOUP\ndone\n4\n5\n";
        let (out, ledger) = run_script(script, AppConfig::default());

        assert!(out.contains("Order ID: 1\nSoup - $5.99\nSteak - $15.99\nTotal: $21.98\n"));
        assert!(out.contains("Order ID: 2\nSoup - $5.99\nSoup - $5.99\nTotal: $11.98\n"));
        assert!(out.contains("Total Sales for 2026-10-19: $33.96\n"));
        assert!(out.ends_with("Exiting the system. Goodbye!\n"));

        let ids: Vec<u64> = ledger.with_ledger(|l| {
            l.all_orders().iter().map(|o| o.id().value()).collect()
        });
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_view_orders_before_any_order() {
        let (out, _) = run_script("3\n5\n", AppConfig::default());
        assert!(out.contains("No orders placed yet.\n"));
    }

    #[test]
    fn test_invalid_choice_reprompts() {
        let (out, _) = run_script("9\nabc\n5\n", AppConfig::default());
        assert_eq!(out.matches("Invalid choice. Please try again.").count(), 2);
        assert_eq!(out.matches("Choose an option: ").count(), 3);
    }

    #[test]
    fn test_end_of_input_exits() {
        let (out, ledger) = run_script("1\n", AppConfig::default());
        assert!(out.contains("--- Menu ---\nSoup - $5.99 - STARTER\n"));
        assert!(out.ends_with("Exiting the system. Goodbye!\n"));
        assert!(ledger.with_ledger(|l| l.is_empty()));
    }

    #[test]
    fn test_store_name_and_json_report() {
        let config = AppConfig {
            store_name: "Chez Rust".to_string(),
            report_format: ReportFormat::Json,
            ..AppConfig::default()
        };
        let (out, _) = run_script("2\nCake\ndone\n4\n5\n", config);

        assert!(out.starts_with("\n--- Chez Rust ---\n"));
        assert!(out.contains("\"totalSales\": 499"));
        assert!(out.contains("\"reportDate\": \"2026-10-19\""));
    }

    #[test]
    fn test_report_only_reads_ledger() {
        let (_, ledger) = run_script("2\nCoffee\ndone\n4\n4\n5\n", AppConfig::default());
        assert_eq!(ledger.with_ledger(|l| l.len()), 1);
        assert_eq!(ledger.with_ledger(|l| l.total_sales().cents()), 299);
    }
}

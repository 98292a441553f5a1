//! # Commands Module
//!
//! The main-menu dispatch table and the handlers behind each entry.
//!
//! ## Command Table
//! ```text
//! ┌───────┬─────────────────────────┬──────────────────────────────────────┐
//! │  Key  │  Label                  │  Handler                             │
//! ├───────┼─────────────────────────┼──────────────────────────────────────┤
//! │   1   │  View Menu              │  menu::view_menu                     │
//! │   2   │  Place Order            │  order::place_order                  │
//! │   3   │  View Orders            │  order::view_orders                  │
//! │   4   │  Generate Sales Report  │  report::generate_report             │
//! │   5   │  Exit                   │  (session ends)                      │
//! └───────┴─────────────────────────┴──────────────────────────────────────┘
//! ```
//!
//! Handlers write to any `Write` and read from any `BufRead`, so tests drive
//! them with in-memory buffers.

pub mod menu;
pub mod order;
pub mod report;

use std::io::{self, BufRead, Write};

/// One main-menu action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    ViewMenu,
    PlaceOrder,
    ViewOrders,
    SalesReport,
    Exit,
}

/// A row of the main-menu table.
#[derive(Debug, Clone, Copy)]
pub struct CommandEntry {
    pub key: &'static str,
    pub label: &'static str,
    pub command: MenuCommand,
}

/// Main-menu entries in display order.
pub const COMMAND_TABLE: [CommandEntry; 5] = [
    CommandEntry {
        key: "1",
        label: "View Menu",
        command: MenuCommand::ViewMenu,
    },
    CommandEntry {
        key: "2",
        label: "Place Order",
        command: MenuCommand::PlaceOrder,
    },
    CommandEntry {
        key: "3",
        label: "View Orders",
        command: MenuCommand::ViewOrders,
    },
    CommandEntry {
        key: "4",
        label: "Generate Sales Report",
        command: MenuCommand::SalesReport,
    },
    CommandEntry {
        key: "5",
        label: "Exit",
        command: MenuCommand::Exit,
    },
];

impl MenuCommand {
    /// Looks the operator's choice up in [`COMMAND_TABLE`].
    pub fn parse(choice: &str) -> Option<MenuCommand> {
        let choice = choice.trim();
        COMMAND_TABLE
            .iter()
            .find(|entry| entry.key == choice)
            .map(|entry| entry.command)
    }
}

/// Prints the main menu and the choice prompt.
pub fn print_main_menu(out: &mut impl Write, store_name: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "--- {} ---", store_name)?;
    for entry in &COMMAND_TABLE {
        writeln!(out, "{}. {}", entry.key, entry.label)?;
    }
    prompt(out, "Choose an option: ")
}

/// Writes a prompt without a newline and flushes it to the terminal.
pub fn prompt(out: &mut impl Write, text: &str) -> io::Result<()> {
    write!(out, "{}", text)?;
    out.flush()
}

/// Reads one line without its line ending. `None` at end of input.
pub fn read_line(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(trimmed_len);
    Ok(Some(line))
}

//! # State Module
//!
//! Application state for the terminal harness.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────┐ ┌──────────────────┐ ┌──────────────────────┐   │
//! │  │  Arc<MenuCatalog>│ │   LedgerState    │ │     AppConfig        │   │
//! │  │                  │ │                  │ │                      │   │
//! │  │  Read-only after │ │  Arc<Mutex<      │ │  store name          │   │
//! │  │  startup, no     │ │    SalesLedger   │ │  report format       │   │
//! │  │  lock needed     │ │  >>              │ │  house menu on/off   │   │
//! │  └──────────────────┘ └──────────────────┘ └──────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod ledger;

pub use config::{AppConfig, ConfigError, ReportFormat, ENV_REPORT_FORMAT, ENV_SEED_MENU, ENV_STORE_NAME};
pub use ledger::LedgerState;

//! # CLI Error Type
//!
//! Unified error type for the terminal harness.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  main()                                                                 │
//! │    │                                                                    │
//! │    ├── AppConfig::from_env()  ── ConfigError ──┐                       │
//! │    ├── build_catalog()        ── CoreError ────┤                       │
//! │    └── Session::run()         ── io::Error ────┼──► CliError           │
//! │                               ── serde_json ───┘        │              │
//! │                                                         ▼              │
//! │                                  tracing::error! + exit code            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A menu lookup miss is not here: the session re-prompts on `None`.

use bistro_core::CoreError;
use thiserror::Error;

use crate::state::ConfigError;

/// Errors that can end a CLI run.
#[derive(Debug, Error)]
pub enum CliError {
    /// Business rule violation while setting up the menu.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Bad environment or flag value.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Terminal read/write failed.
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// JSON report could not be rendered.
    #[error("Report serialization failed: {0}")]
    Report(#[from] serde_json::Error),
}

impl CliError {
    /// Process exit code for this error.
    ///
    /// - `2`: operator input (config or menu definition) was rejected
    /// - `1`: runtime failure
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Core(_) | CliError::Config(_) => 2,
            CliError::Io(_) | CliError::Report(_) => 1,
        }
    }
}

/// Convenience type alias for Results with CliError.
pub type CliResult<T> = Result<T, CliError>;

//! # Menu Commands
//!
//! Building the catalog at startup and printing it.

use std::io::{self, Write};
use std::str::FromStr;

use bistro_core::{CoreError, MenuCatalog, MenuCategory, Money};
use tracing::{debug, warn};

use crate::error::CliResult;
use crate::state::{AppConfig, ConfigError};

/// A menu item given on the command line as `NAME:PRICE:CATEGORY`.
///
/// The name may itself contain `:`; price and category are taken from the
/// right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub name: String,
    pub price: Money,
    pub category: MenuCategory,
}

impl FromStr for MenuEntry {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: String| ConfigError::InvalidMenuEntry {
            entry: s.to_string(),
            reason,
        };

        let mut parts = s.rsplitn(3, ':');
        let (Some(category), Some(price), Some(name)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid("missing field".to_string()));
        };

        let price = price.parse::<Money>().map_err(|e| invalid(e.to_string()))?;
        let category = category
            .parse::<MenuCategory>()
            .map_err(|e| invalid(e.to_string()))?;

        Ok(MenuEntry {
            name: name.to_string(),
            price,
            category,
        })
    }
}

/// Builds the session menu: the house menu (unless disabled) plus extras.
///
/// A duplicate extra is skipped with a warning; any other rejected entry
/// aborts startup.
pub fn build_catalog(config: &AppConfig, extras: &[MenuEntry]) -> CliResult<MenuCatalog> {
    let mut catalog = if config.seed_house_menu {
        MenuCatalog::with_house_menu()
    } else {
        MenuCatalog::new()
    };

    for entry in extras {
        match catalog.add_item(entry.name.as_str(), entry.price, entry.category) {
            Ok(()) => debug!(name = %entry.name, "extra menu item added"),
            Err(CoreError::DuplicateName { name }) => {
                warn!(name = %name, "duplicate menu item skipped");
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(catalog)
}

/// Prints the menu, one `name - price - CATEGORY` line per item.
pub fn view_menu(out: &mut impl Write, catalog: &MenuCatalog) -> io::Result<()> {
    writeln!(out, "--- Menu ---")?;
    if catalog.is_empty() {
        writeln!(out, "(no items)")?;
    }
    for item in catalog.list() {
        writeln!(out, "{}", item)?;
    }
    Ok(())
}

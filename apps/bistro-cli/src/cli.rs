//! Command line flags. Flags win over `BISTRO_*` environment variables.

use clap::Parser;

use crate::commands::menu::MenuEntry;
use crate::state::{AppConfig, ReportFormat};

/// Restaurant point-of-sale simulator.
#[derive(Debug, Parser)]
#[command(name = "bistro", version, about)]
pub struct Cli {
    /// Title shown above the main menu
    #[arg(long)]
    pub store_name: Option<String>,

    /// Sales report output format
    #[arg(long, value_enum)]
    pub report_format: Option<ReportFormat>,

    /// Start without the house menu
    #[arg(long)]
    pub empty_menu: bool,

    /// Extra menu item, repeatable (e.g. --add-item "Tea:1.50:BEVERAGE")
    #[arg(long = "add-item", value_name = "NAME:PRICE:CATEGORY")]
    pub add_items: Vec<MenuEntry>,

    /// Debug-level logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Applies flag overrides on top of an env-derived config.
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(store_name) = &self.store_name {
            config.store_name = store_name.clone();
        }
        if let Some(format) = self.report_format {
            config.report_format = format;
        }
        if self.empty_menu {
            config.seed_house_menu = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bistro_core::MenuCategory;

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::try_parse_from([
            "bistro",
            "--store-name",
            "Chez Rust",
            "--report-format",
            "json",
            "--empty-menu",
            "--add-item",
            "Tea:1.50:BEVERAGE",
            "--add-item",
            "Pie:3:dessert",
        ])
        .unwrap();

        let mut config = AppConfig::default();
        cli.apply(&mut config);

        assert_eq!(config.store_name, "Chez Rust");
        assert_eq!(config.report_format, ReportFormat::Json);
        assert!(!config.seed_house_menu);
        assert_eq!(cli.add_items.len(), 2);
        assert_eq!(cli.add_items[1].category, MenuCategory::Dessert);
    }

    #[test]
    fn test_no_flags_keeps_config() {
        let cli = Cli::try_parse_from(["bistro"]).unwrap();
        let mut config = AppConfig::default();
        cli.apply(&mut config);
        assert_eq!(config, AppConfig::default());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_bad_menu_item_rejected() {
        assert!(Cli::try_parse_from(["bistro", "--add-item", "Tea"]).is_err());
    }
}

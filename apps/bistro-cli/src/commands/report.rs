//! # Report Commands
//!
//! Prints the sales report over every order in the ledger.

use std::io::Write;

use bistro_core::SalesReport;
use chrono::NaiveDate;
use tracing::info;

use crate::error::CliResult;
use crate::state::{LedgerState, ReportFormat};

/// Generates and prints the report dated `report_date`.
///
/// Reporting only reads the ledger.
pub fn generate_report(
    out: &mut impl Write,
    ledger: &LedgerState,
    format: ReportFormat,
    report_date: NaiveDate,
) -> CliResult<SalesReport> {
    let report = ledger.with_ledger(|l| SalesReport::generate(l.all_orders(), report_date));

    match format {
        ReportFormat::Text => writeln!(out, "{}", report)?,
        ReportFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?,
    }

    info!(
        orders = report.order_count,
        total = %report.total_sales,
        "sales report generated"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bistro_core::{MenuCatalog, Money};

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn ledger_with_two_orders() -> LedgerState {
        let menu = MenuCatalog::with_house_menu();
        let ledger = LedgerState::new();
        ledger.with_ledger_mut(|l| {
            let first = l.create_order();
            first.add_item(menu.find_by_name("Soup").unwrap());
            first.add_item(menu.find_by_name("Steak").unwrap());

            let second = l.create_order();
            second.add_item(menu.find_by_name("Soup").unwrap());
            second.add_item(menu.find_by_name("Soup").unwrap());
        });
        ledger
    }

    #[test]
    fn test_text_report() {
        let ledger = ledger_with_two_orders();
        let mut out = Vec::new();
        let report = generate_report(&mut out, &ledger, ReportFormat::Text, date()).unwrap();

        assert_eq!(report.total_sales, Money::from_cents(3396));
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Total Sales for 2026-10-19: $33.96\n"
        );
    }

    #[test]
    fn test_json_report() {
        let ledger = ledger_with_two_orders();
        let mut out = Vec::new();
        generate_report(&mut out, &ledger, ReportFormat::Json, date()).unwrap();

        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["reportDate"], "2026-10-19");
        assert_eq!(json["orderCount"], 2);
        assert_eq!(json["itemCount"], 4);
        assert_eq!(json["totalSales"], 3396);
    }

    #[test]
    fn test_empty_ledger_report() {
        let mut out = Vec::new();
        generate_report(&mut out, &LedgerState::new(), ReportFormat::Text, date()).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Total Sales for 2026-10-19: $0.00\n"
        );
    }
}

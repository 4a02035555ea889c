use tabled::{builder::Builder, Table};

use emi_core::amortisation::{AmortisationOutput, LedgerEntry};
use emi_core::ComputationOutput;

use super::currency::format_currency;
use super::RenderOptions;

/// Ledger rows shown per page: one year of installments.
pub const LEDGER_PAGE_SIZE: usize = 12;

/// Print the loan summary and one page of the ledger.
pub fn print_table(output: &ComputationOutput<AmortisationOutput>, opts: &RenderOptions) {
    let result = &output.result;
    let symbol = opts.symbol.as_str();

    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    builder.push_record(["Monthly EMI", &format_currency(result.installment, symbol)]);
    builder.push_record([
        "Total Payable Amount",
        &format_currency(result.total_paid, symbol),
    ]);
    builder.push_record([
        "Total Interest Payable",
        &format_currency(result.total_interest, symbol),
    ]);
    builder.push_record(["Months Simulated", &result.ledger.len().to_string()]);
    println!("{}", Table::from(builder));

    if result.ledger.is_empty() {
        println!("\nNo breakdown available.");
    } else {
        let (page, total_pages, start, end) = page_bounds(result.ledger.len(), opts.page);
        println!();
        print_ledger_page(&result.ledger[start..end], symbol);
        println!(
            "Page {} of {} ({} rows per page)",
            page, total_pages, LEDGER_PAGE_SIZE
        );
    }

    if !output.warnings.is_empty() {
        println!("\nWarnings:");
        for w in &output.warnings {
            println!("  - {}", w);
        }
    }

    println!("\nMethodology: {}", output.methodology);
}

fn print_ledger_page(entries: &[LedgerEntry], symbol: &str) {
    let mut builder = Builder::default();
    builder.push_record([
        "Month",
        "Installment",
        "Interest Paid",
        "Principal Paid",
        "Remaining Balance",
    ]);
    for entry in entries {
        builder.push_record([
            entry.month.to_string(),
            format_currency(entry.installment_paid, symbol),
            format_currency(entry.interest_paid, symbol),
            format_currency(entry.principal_paid, symbol),
            format_currency(entry.remaining_balance, symbol),
        ]);
    }
    println!("{}", Table::from(builder));
}

/// Clamp a 1-based page request into range and return (page, total pages,
/// slice start, slice end).
fn page_bounds(len: usize, requested: usize) -> (usize, usize, usize, usize) {
    let total_pages = len.div_ceil(LEDGER_PAGE_SIZE).max(1);
    let page = requested.clamp(1, total_pages);
    let start = (page - 1) * LEDGER_PAGE_SIZE;
    let end = (start + LEDGER_PAGE_SIZE).min(len);
    (page, total_pages, start, end)
}

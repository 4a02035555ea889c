pub mod csv_out;
pub mod currency;
pub mod html;
pub mod json;
pub mod minimal;
pub mod table;

use emi_core::amortisation::AmortisationOutput;
use emi_core::ComputationOutput;

use crate::OutputFormat;

/// Knobs shared by the formatted renderers.
pub struct RenderOptions {
    /// 1-based ledger page for table output.
    pub page: usize,
    /// Currency symbol prefixed to formatted amounts.
    pub symbol: String,
}

/// Dispatch output to the appropriate renderer.
pub fn render(
    format: &OutputFormat,
    output: &ComputationOutput<AmortisationOutput>,
    opts: &RenderOptions,
) {
    match format {
        OutputFormat::Json => json::print_json(output),
        OutputFormat::Table => table::print_table(output, opts),
        OutputFormat::Csv => csv_out::print_csv(output),
        OutputFormat::Minimal => minimal::print_minimal(output),
        OutputFormat::Html => html::print_html(output, opts),
    }
}

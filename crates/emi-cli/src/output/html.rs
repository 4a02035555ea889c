use emi_core::amortisation::AmortisationOutput;
use emi_core::ComputationOutput;

use super::currency::format_currency;
use super::RenderOptions;

/// Print the full ledger as a standalone printable HTML document.
pub fn print_html(output: &ComputationOutput<AmortisationOutput>, opts: &RenderOptions) {
    println!("{}", render_document(output, &opts.symbol));
}

fn render_document(output: &ComputationOutput<AmortisationOutput>, symbol: &str) -> String {
    let result = &output.result;

    let mut rows = String::new();
    for entry in &result.ledger {
        rows.push_str(&format!(
            "        <tr>\n          <td>{}</td>\n          <td>{}</td>\n          <td>{}</td>\n          <td>{}</td>\n          <td>{}</td>\n        </tr>\n",
            entry.month,
            format_currency(entry.installment_paid, symbol),
            format_currency(entry.interest_paid, symbol),
            format_currency(entry.principal_paid, symbol),
            format_currency(entry.remaining_balance, symbol),
        ));
    }

    format!(
        r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="utf-8">
    <title>EMI Breakdown</title>
    <style>
      table {{ width: 100%; border-collapse: collapse; }}
      th, td {{ border: 1px solid #ddd; padding: 8px; text-align: right; }}
      th {{ background-color: #f2f2f2; }}
      h2 {{ text-align: center; color: #333; }}
    </style>
  </head>
  <body>
    <h2>EMI Breakdown</h2>
    <p>
      Monthly EMI: {emi} &middot; Total Payable Amount: {total} &middot;
      Total Interest Payable: {interest}
    </p>
    <table>
      <thead>
        <tr>
          <th>Month</th>
          <th>EMI</th>
          <th>Interest Paid</th>
          <th>Principal Paid</th>
          <th>Remaining Balance</th>
        </tr>
      </thead>
      <tbody>
{rows}      </tbody>
    </table>
  </body>
</html>"#,
        emi = format_currency(result.installment, symbol),
        total = format_currency(result.total_paid, symbol),
        interest = format_currency(result.total_interest, symbol),
        rows = rows,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use emi_core::amortisation::{build_amortisation, AmortisationInput};
    use rust_decimal_macros::dec;

    fn sample_output() -> ComputationOutput<AmortisationOutput> {
        build_amortisation(&AmortisationInput {
            principal: dec!(3000),
            annual_rate_pct: dec!(0),
            tenure_months: 3,
            prepayment: None,
        })
        .unwrap()
    }

    #[test]
    fn test_document_structure() {
        let doc = render_document(&sample_output(), "₹");
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("<title>EMI Breakdown</title>"));
        // One header row plus one row per ledger month.
        assert_eq!(doc.matches("<tr>").count(), 4);
    }

    #[test]
    fn test_values_are_formatted() {
        let doc = render_document(&sample_output(), "₹");
        assert!(doc.contains("Monthly EMI: ₹1,000.00"));
        assert!(doc.contains("<td>₹1,000.00</td>"));
        assert!(doc.contains("<td>₹0.00</td>"));
    }
}

use std::io;

use emi_core::amortisation::AmortisationOutput;
use emi_core::ComputationOutput;

/// Write the ledger as CSV to stdout, one row per month, raw decimal values.
pub fn print_csv(output: &ComputationOutput<AmortisationOutput>) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    let _ = wtr.write_record([
        "month",
        "installment_paid",
        "interest_paid",
        "principal_paid",
        "prepayment_applied",
        "remaining_balance",
    ]);

    for entry in &output.result.ledger {
        let _ = wtr.write_record([
            entry.month.to_string(),
            entry.installment_paid.to_string(),
            entry.interest_paid.to_string(),
            entry.principal_paid.to_string(),
            entry.prepayment_applied.to_string(),
            entry.remaining_balance.to_string(),
        ]);
    }

    let _ = wtr.flush();
}

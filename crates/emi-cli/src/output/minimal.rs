use emi_core::amortisation::AmortisationOutput;
use emi_core::ComputationOutput;

/// Print just the monthly installment, the one number most callers want.
pub fn print_minimal(output: &ComputationOutput<AmortisationOutput>) {
    println!("{}", output.result.installment);
}

use emi_core::amortisation::AmortisationOutput;
use emi_core::ComputationOutput;

/// Pretty-print the full result envelope to stdout.
pub fn print_json(output: &ComputationOutput<AmortisationOutput>) {
    match serde_json::to_string_pretty(output) {
        Ok(s) => println!("{}", s),
        Err(e) => eprintln!("JSON serialization error: {}", e),
    }
}

use clap::Args;
use rust_decimal::Decimal;

use emi_core::amortisation::{build_amortisation, AmortisationInput, AmortisationOutput};
use emi_core::ComputationOutput;

use crate::input;

/// Arguments for the amortisation schedule
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct ScheduleArgs {
    /// Path to a JSON or YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Loan amount
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Nominal annual interest rate in percent (12 = 12% p.a.)
    #[arg(long, alias = "rate")]
    pub annual_rate: Option<Decimal>,

    /// Number of monthly installments
    #[arg(long, alias = "tenure")]
    pub tenure_months: Option<u32>,

    /// One-time extra principal payment, applied after the first installment
    #[arg(long)]
    pub prepayment: Option<Decimal>,
}

pub fn run_schedule(
    args: ScheduleArgs,
) -> Result<ComputationOutput<AmortisationOutput>, Box<dyn std::error::Error>> {
    let request: AmortisationInput = if let Some(ref path) = args.input {
        input::file::read_request(path)?
    } else if let Some(data) = input::stdin::read_piped()? {
        serde_json::from_str(&data)?
    } else {
        AmortisationInput {
            principal: args
                .principal
                .ok_or("--principal is required (or provide --input)")?,
            annual_rate_pct: args
                .annual_rate
                .ok_or("--annual-rate is required (or provide --input)")?,
            tenure_months: args
                .tenure_months
                .ok_or("--tenure-months is required (or provide --input)")?,
            prepayment: args.prepayment,
        }
    };

    let result = build_amortisation(&request)?;
    Ok(result)
}
